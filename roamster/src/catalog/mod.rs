//! Static rule tables, the "database" of the recommendation subsystem.
//!
//! Each domain exposes an ordered list of [`RuleGroup`]s. Groups are
//! independent and additive: evaluation unions the candidates of every group
//! whose predicate matches the context, and a group that does not apply
//! simply contributes nothing. Tables are versioned configuration, not
//! mutable entities.

pub mod clothing;
pub mod experience;
pub mod food;
pub mod photo;

use crate::models::Context;

pub const CATALOG_VERSION: &str = "2024.1";

/// One named, independent candidate generator.
pub struct RuleGroup<I> {
    pub name: &'static str,
    pub applies: fn(&Context) -> bool,
    pub candidates: fn(&Context) -> Vec<I>,
}

/// Union the candidates of every matching rule group, in table order.
pub fn collect<I>(groups: &[RuleGroup<I>], ctx: &Context) -> Vec<I> {
    let mut out = Vec::new();
    for group in groups {
        if !(group.applies)(ctx) {
            continue;
        }
        let mut items = (group.candidates)(ctx);
        if !items.is_empty() {
            tracing::debug!(
                rule_group = group.name,
                count = items.len(),
                "rule group contributed candidates"
            );
        }
        out.append(&mut items);
    }
    out
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::models::{
        ActivityIntensity, ComfortLevel, Context, DietaryPreference, SafetyLevel, Season,
        TimeOfDay, TravelGroup, WeatherCondition, WeatherSnapshot,
    };

    /// Baseline context for catalog and recommender tests: Goa in July,
    /// mid-morning, partly cloudy 30°C.
    pub fn context(group: TravelGroup) -> Context {
        Context {
            destination: "Goa".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            season: Season::Summer,
            weather: WeatherSnapshot {
                temperature_c: 30.0,
                condition: WeatherCondition::PartlyCloudy,
                humidity_pct: 80,
            },
            time_of_day: TimeOfDay::Morning,
            travel_group: group,
            accommodation: None,
            safety_level: SafetyLevel::High,
            comfort_level: ComfortLevel::Moderate,
            activity_intensity: ActivityIntensity::Low,
            dietary_preference: DietaryPreference::None,
            gender: None,
            clothing_size: None,
        }
    }
}
