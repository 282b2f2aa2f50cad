use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{
    Accommodation, ActivityIntensity, ComfortLevel, SafetyLevel, TravelGroup, TripStatus,
};

/// A planned trip as supplied by the caller. Validated before any context
/// derivation; an invalid trip never reaches the recommenders.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = validate_date_range))]
pub struct Trip {
    #[validate(length(min = 1, max = 120))]
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travel_group: TravelGroup,
    #[serde(default)]
    pub accommodation: Option<Accommodation>,
    #[serde(default)]
    pub safety_sensitivity: SafetyLevel,
    /// Explicit comfort level. When absent the context falls back to the
    /// standard default.
    #[serde(default)]
    pub comfort_level: Option<ComfortLevel>,
    /// Explicit activity intensity. When present it wins over the intensity
    /// derived from the travel group.
    #[serde(default)]
    pub activity_intensity: Option<ActivityIntensity>,
    #[serde(default)]
    pub status: TripStatus,
}

fn validate_date_range(trip: &Trip) -> Result<(), ValidationError> {
    if trip.end_date > trip.start_date {
        return Ok(());
    }
    let mut err = ValidationError::new("date_range");
    err.message = Some("end date must be after start date".into());
    Err(err)
}
