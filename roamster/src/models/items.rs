use serde::{Deserialize, Serialize};

use super::{
    ActivityIntensity, CrowdLevel, DietTag, HygieneLevel, SafetyRating, SpiceLevel, TravelGroup,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClothingCategory {
    Top,
    Bottom,
    Outerwear,
    Footwear,
    Outfit,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingItem {
    pub id: String,
    pub name: String,
    pub category: ClothingCategory,
    pub description: String,
    pub suitable_for: Vec<TravelGroup>,
    pub rent_price: u32,
    pub buy_price: u32,
    pub kid_friendly: bool,
    pub comfortable: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Snacks,
    Main,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub meal: MealType,
    pub description: String,
    pub spice_level: SpiceLevel,
    pub hygiene_level: HygieneLevel,
    pub suitable_for: Vec<TravelGroup>,
    pub kid_friendly: bool,
    pub elderly_friendly: bool,
    /// Explicit dietary tag. Sparse on purpose: most catalog entries carry
    /// no tag and pass the vegetarian filter untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_tag: Option<DietTag>,
    pub price_range: String,
    pub location: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceType {
    Viewpoint,
    Cultural,
    Entertainment,
    Walking,
    Historical,
    Leisure,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceItem {
    pub id: String,
    pub name: String,
    pub kind: ExperienceType,
    pub description: String,
    pub duration: String,
    pub walking_intensity: ActivityIntensity,
    pub crowd_level: CrowdLevel,
    pub safety_rating: SafetyRating,
    pub requires_night_travel: bool,
    pub suitable_for: Vec<TravelGroup>,
    pub price_range: String,
    pub best_for: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoSpot {
    pub id: String,
    pub name: String,
    pub description: String,
    pub best_time: String,
    pub light_quality: String,
    pub crowd_level: CrowdLevel,
    pub safety_rating: SafetyRating,
    pub suitable_for: Vec<TravelGroup>,
    pub angles: Vec<String>,
    pub poses: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TipKind {
    Aesthetic,
    Group,
    Kids,
    Lighting,
}

/// Social/photography advice attached to the photo recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoTip {
    pub kind: TipKind,
    pub title: String,
    pub description: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingSummary {
    pub total_items: usize,
    pub estimated_rent_cost: u32,
    pub estimated_buy_cost: u32,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionSummary {
    pub total_options: usize,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoSummary {
    pub recommendation: String,
    pub best_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingRecommendations {
    pub items: Vec<ClothingItem>,
    pub summary: ClothingSummary,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodRecommendations {
    pub items: Vec<FoodItem>,
    pub summary: OptionSummary,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceRecommendations {
    pub items: Vec<ExperienceItem>,
    pub summary: OptionSummary,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoRecommendations {
    pub spots: Vec<PhotoSpot>,
    pub tips: Vec<PhotoTip>,
    pub summary: PhotoSummary,
    pub warnings: Vec<String>,
}
