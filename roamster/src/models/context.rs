use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    Accommodation, ActivityIntensity, ComfortLevel, DietaryPreference, Gender, SafetyLevel,
    Season, TimeOfDay, TravelGroup, WeatherCondition,
};

/// Point-in-time weather for a destination. Advisory input only: providers
/// must always return a snapshot, falling back to defaults for unknown
/// destinations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature_c: f32,
    pub condition: WeatherCondition,
    pub humidity_pct: u8,
}

/// The derived situational snapshot every recommender reads from.
///
/// Ephemeral by design: recomputed on every request, never persisted.
/// Season and time-of-day are pure functions of the trip date and the
/// evaluation-time clock, so identical inputs always produce an identical
/// context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Context {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub season: Season,
    pub weather: WeatherSnapshot,
    pub time_of_day: TimeOfDay,
    pub travel_group: TravelGroup,
    pub accommodation: Option<Accommodation>,
    pub safety_level: SafetyLevel,
    pub comfort_level: ComfortLevel,
    pub activity_intensity: ActivityIntensity,
    pub dietary_preference: DietaryPreference,
    pub gender: Option<Gender>,
    pub clothing_size: Option<String>,
}

impl Context {
    /// Lower-cased destination key used by the static catalogs.
    pub fn destination_key(&self) -> String {
        self.destination.trim().to_lowercase()
    }
}
