use serde::{Deserialize, Serialize};

use super::{DietaryPreference, Gender, SocialIntent, TravelStyle};

/// Long-term traveler profile. Immutable during a single recommendation
/// pass; the defaults mirror a freshly created profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub clothing_size: Option<String>,
    #[serde(default)]
    pub dietary_preference: DietaryPreference,
    /// Not consumed by the recommenders yet, but part of the profile shape.
    #[serde(default)]
    pub travel_style: TravelStyle,
    #[serde(default)]
    pub social_intent: SocialIntent,
    #[serde(default = "default_language")]
    pub language_preference: String,
}

fn default_language() -> String {
    "english".to_string()
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            gender: None,
            clothing_size: None,
            dietary_preference: DietaryPreference::None,
            travel_style: TravelStyle::Relaxed,
            social_intent: SocialIntent::Casual,
            language_preference: default_language(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.dietary_preference, DietaryPreference::None);
        assert_eq!(prefs.language_preference, "english");
        assert_eq!(prefs.gender, None);
    }

    #[test]
    fn test_deserializes_from_empty_object() {
        let prefs: UserPreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs.dietary_preference, DietaryPreference::None);
        assert_eq!(prefs.social_intent, SocialIntent::Casual);
        assert_eq!(prefs.language_preference, "english");
    }

    #[test]
    fn test_deserializes_partial_profile() {
        let json = r#"{"dietary_preference": "vegan", "clothing_size": "M"}"#;
        let prefs: UserPreferences = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.dietary_preference, DietaryPreference::Vegan);
        assert_eq!(prefs.clothing_size.as_deref(), Some("M"));
    }
}
