use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    ClothingRecommendations, Context, ExperienceRecommendations, FoodRecommendations,
    Notification, PhotoRecommendations,
};

/// The four domain results, always all present. A well-formed request never
/// yields a partial envelope; empty item lists are the degraded form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationSets {
    pub clothing: ClothingRecommendations,
    pub food: FoodRecommendations,
    pub experiences: ExperienceRecommendations,
    pub photos: PhotoRecommendations,
}

/// Final composed result of one recommendation pass. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResult {
    pub id: String,
    pub catalog_version: String,
    pub context: Context,
    pub recommendations: RecommendationSets,
    pub notifications: Vec<Notification>,
    pub generated_at: DateTime<Utc>,
}
