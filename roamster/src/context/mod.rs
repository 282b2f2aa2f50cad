//! Context derivation: turns a validated trip plus the injected clock and
//! weather collaborators into the situational snapshot the recommenders
//! consume. Pure and deterministic given its inputs.

mod clock;
mod weather;

pub use clock::{Clock, FixedClock, SystemClock};
pub use weather::{StaticWeatherTable, WeatherProvider};

use chrono::{Datelike, NaiveDate};
use validator::Validate;

use crate::error::{Result, RoamsterError};
use crate::models::{
    ActivityIntensity, ComfortLevel, Context, SafetyLevel, Season, TimeOfDay, TravelGroup, Trip,
    UserPreferences,
};

/// Season bucket for the trip's start date, from the 0-indexed month.
/// Calendar-only, not hemisphere-aware.
pub fn season_for(date: NaiveDate) -> Season {
    match date.month0() {
        2..=4 => Season::Spring,
        5..=7 => Season::Summer,
        8..=10 => Season::Autumn,
        _ => Season::Winter,
    }
}

/// Time-of-day bucket for an hour of day (0-23). Reflects when the
/// recommendation is requested, not a simulated time within the trip.
pub fn time_of_day_for(hour: u32) -> TimeOfDay {
    match hour {
        5..=11 => TimeOfDay::Morning,
        12..=16 => TimeOfDay::Afternoon,
        17..=20 => TimeOfDay::Evening,
        _ => TimeOfDay::Night,
    }
}

/// Default safety posture per travel group.
pub fn safety_level_for(group: TravelGroup) -> SafetyLevel {
    match group {
        TravelGroup::Solo | TravelGroup::Couple => SafetyLevel::Normal,
        TravelGroup::Family | TravelGroup::Kids | TravelGroup::Elderly => SafetyLevel::High,
    }
}

/// Default activity intensity per travel group. A trip-level value wins
/// over this derived default.
pub fn activity_intensity_for(group: TravelGroup) -> ActivityIntensity {
    match group {
        TravelGroup::Solo => ActivityIntensity::High,
        TravelGroup::Couple | TravelGroup::Family => ActivityIntensity::Moderate,
        TravelGroup::Kids | TravelGroup::Elderly => ActivityIntensity::Low,
    }
}

/// Build the context for one recommendation pass.
///
/// Rejects caller-contract violations (invalid trip) up front; everything
/// after that degrades to defaults rather than failing.
pub fn build_context(
    trip: &Trip,
    preferences: &UserPreferences,
    clock: &dyn Clock,
    weather: &dyn WeatherProvider,
) -> Result<Context> {
    trip.validate()
        .map_err(|e| RoamsterError::Validation(e.to_string()))?;

    let snapshot = weather.lookup(&trip.destination);

    Ok(Context {
        destination: trip.destination.clone(),
        start_date: trip.start_date,
        end_date: trip.end_date,
        season: season_for(trip.start_date),
        weather: snapshot,
        time_of_day: time_of_day_for(clock.current_hour()),
        travel_group: trip.travel_group,
        accommodation: trip.accommodation,
        safety_level: safety_level_for(trip.travel_group),
        comfort_level: trip.comfort_level.unwrap_or(ComfortLevel::Moderate),
        activity_intensity: trip
            .activity_intensity
            .unwrap_or_else(|| activity_intensity_for(trip.travel_group)),
        dietary_preference: preferences.dietary_preference,
        gender: preferences.gender,
        clothing_size: preferences.clothing_size.clone(),
    })
}
