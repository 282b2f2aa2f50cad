mod common;
mod context;
mod envelope;
mod items;
mod notification;
mod preferences;
mod trip;

pub use common::{
    Accommodation, ActivityIntensity, ComfortLevel, CrowdLevel, DietTag, DietaryPreference,
    Gender, HygieneLevel, SafetyLevel, SafetyRating, Season, SocialIntent, SpiceLevel, TimeOfDay,
    TravelGroup, TravelStyle, TripStatus, WeatherCondition,
};
pub use context::{Context, WeatherSnapshot};
pub use envelope::{RecommendationResult, RecommendationSets};
pub use items::{
    ClothingCategory, ClothingItem, ClothingRecommendations, ClothingSummary, ExperienceItem,
    ExperienceRecommendations, ExperienceType, FoodItem, FoodRecommendations, MealType,
    OptionSummary, PhotoRecommendations, PhotoSpot, PhotoSummary, PhotoTip, TipKind,
};
pub use notification::{Notification, NotificationKind, NotificationPriority};
pub use preferences::UserPreferences;
pub use trip::Trip;
