use serde::{Deserialize, Serialize};

/// Categorical composition of travelers on a trip. Drives most of the
/// safety and suitability filtering downstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TravelGroup {
    Solo,
    Couple,
    Family,
    Kids,
    Elderly,
}

impl std::fmt::Display for TravelGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solo => write!(f, "solo"),
            Self::Couple => write!(f, "couple"),
            Self::Family => write!(f, "family"),
            Self::Kids => write!(f, "kids"),
            Self::Elderly => write!(f, "elderly"),
        }
    }
}

impl std::str::FromStr for TravelGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solo" => Ok(Self::Solo),
            "couple" => Ok(Self::Couple),
            "family" => Ok(Self::Family),
            "kids" => Ok(Self::Kids),
            "elderly" => Ok(Self::Elderly),
            _ => Err(format!("Unknown travel group: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spring => write!(f, "spring"),
            Self::Summer => write!(f, "summer"),
            Self::Autumn => write!(f, "autumn"),
            Self::Winter => write!(f, "winter"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Morning => write!(f, "morning"),
            Self::Afternoon => write!(f, "afternoon"),
            Self::Evening => write!(f, "evening"),
            Self::Night => write!(f, "night"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Sunny,
    PartlyCloudy,
    Rain,
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sunny => write!(f, "sunny"),
            Self::PartlyCloudy => write!(f, "partly_cloudy"),
            Self::Rain => write!(f, "rain"),
        }
    }
}

impl std::str::FromStr for WeatherCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sunny" => Ok(Self::Sunny),
            "partly_cloudy" | "partly-cloudy" => Ok(Self::PartlyCloudy),
            "rain" => Ok(Self::Rain),
            _ => Err(format!("Unknown weather condition: {s}")),
        }
    }
}

/// Safety posture of a trip context, derived from the travel group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SafetyLevel {
    #[default]
    Normal,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComfortLevel {
    Basic,
    #[default]
    Moderate,
    Premium,
}

/// Shared low/moderate/high scale, used both for the overall trip intensity
/// and for the walking intensity of individual experiences.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityIntensity {
    Low,
    #[default]
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Accommodation {
    Hotel,
    Hostel,
    Airbnb,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    #[default]
    Planned,
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    Vegetarian,
    NonVegetarian,
    Vegan,
    #[default]
    None,
}

impl std::fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vegetarian => write!(f, "vegetarian"),
            Self::NonVegetarian => write!(f, "non_vegetarian"),
            Self::Vegan => write!(f, "vegan"),
            Self::None => write!(f, "none"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelStyle {
    #[default]
    Relaxed,
    Adventure,
    Aesthetic,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SocialIntent {
    Photos,
    Reels,
    #[default]
    Casual,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SpiceLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum HygieneLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

/// Per-item safety rating. Distinct from [`SafetyLevel`], which is the
/// two-valued posture of the trip context.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SafetyRating {
    Low,
    Medium,
    High,
}

/// Explicit dietary tag on a food item. The catalogs tag very few entries;
/// the dietary filter keys off this field all the same.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DietTag {
    NonVegetarian,
    Vegan,
}
