//! End-to-end engine scenarios over the seeded catalogs, with the clock and
//! weather collaborators pinned for reproducibility.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use roamster::context::{FixedClock, StaticWeatherTable};
use roamster::models::{
    SafetyLevel, Season, TimeOfDay, TravelGroup, Trip, TripStatus, UserPreferences,
    WeatherCondition,
};
use roamster::RecommendationEngine;

fn engine_at(hour: u32) -> RecommendationEngine {
    RecommendationEngine::new(
        Box::new(FixedClock::at_hour(hour)),
        Box::new(StaticWeatherTable::default()),
    )
}

fn trip(destination: &str, group: TravelGroup) -> Trip {
    Trip {
        destination: destination.to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
        travel_group: group,
        accommodation: None,
        safety_sensitivity: SafetyLevel::Normal,
        comfort_level: None,
        activity_intensity: None,
        status: TripStatus::Planned,
    }
}

#[test]
fn goa_with_kids_in_july() {
    let result = engine_at(14)
        .generate(&trip("Goa", TravelGroup::Kids), &UserPreferences::default())
        .unwrap();

    assert_eq!(result.context.season, Season::Summer);
    assert_eq!(result.context.weather.temperature_c, 30.0);
    assert_eq!(result.context.weather.condition, WeatherCondition::PartlyCloudy);
    assert_eq!(result.context.weather.humidity_pct, 80);

    // Warm-weather candidates survive only where kid-friendly and suitable.
    let clothing = &result.recommendations.clothing;
    assert!(clothing.items.iter().any(|i| i.id == "summer-3"));
    assert!(clothing.items.iter().all(|i| i.kid_friendly));

    // The Goa fish curry is high spice and not kid-friendly.
    assert!(!result
        .recommendations
        .food
        .items
        .iter()
        .any(|i| i.id == "goa-1"));

    assert!(result
        .recommendations
        .experiences
        .items
        .iter()
        .all(|i| !i.requires_night_travel));

    // Afternoon, no rain: no notification rule fires.
    assert!(result.notifications.is_empty());
}

#[test]
fn delhi_solo_in_the_evening() {
    let result = engine_at(19)
        .generate(&trip("Delhi", TravelGroup::Solo), &UserPreferences::default())
        .unwrap();

    assert_eq!(result.context.time_of_day, TimeOfDay::Evening);

    assert!(result
        .recommendations
        .clothing
        .items
        .iter()
        .any(|i| i.name == "Smart Casual Outfit"));

    let experiences: Vec<&str> = result
        .recommendations
        .experiences
        .items
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert!(experiences.contains(&"Sunset Point"));
    assert!(experiences.contains(&"Cultural Show or Performance"));

    assert!(result
        .notifications
        .iter()
        .any(|n| n.title == "Evening Experience"));
}

#[test]
fn unknown_destination_degrades_to_defaults() {
    let result = engine_at(14)
        .generate(&trip("Atlantis", TravelGroup::Solo), &UserPreferences::default())
        .unwrap();

    assert_eq!(result.context.weather.temperature_c, 25.0);
    assert_eq!(result.context.weather.condition, WeatherCondition::Sunny);
    assert_eq!(result.context.weather.humidity_pct, 70);

    // No destination-specific entries, but the envelope is still complete.
    assert!(!result
        .recommendations
        .food
        .items
        .iter()
        .any(|i| i.id.starts_with("goa") || i.id.starts_with("mumbai") || i.id.starts_with("delhi")));
    assert!(result
        .recommendations
        .experiences
        .items
        .iter()
        .all(|i| i.id.starts_with("afternoon")));
    assert!(!result.recommendations.clothing.items.is_empty());
}

#[test]
fn rainy_bangalore_with_kids_warns_and_notifies() {
    let result = engine_at(10)
        .generate(&trip("Bangalore", TravelGroup::Kids), &UserPreferences::default())
        .unwrap();

    assert_eq!(result.context.weather.condition, WeatherCondition::Rain);
    assert!(result
        .recommendations
        .clothing
        .warnings
        .iter()
        .any(|w| w.contains("waterproof")));
    assert!(result
        .recommendations
        .clothing
        .items
        .iter()
        .any(|i| i.id == "rain-1"));

    // Morning photo notice fires for kids, then the rain advisory.
    let titles: Vec<&str> = result.notifications.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["Best Photo Time Now", "Rain Expected"]);
}

#[test]
fn repeated_generation_is_identical_except_envelope_id() {
    let engine = engine_at(10);
    let trip = trip("Mumbai", TravelGroup::Couple);
    let prefs = UserPreferences::default();

    let mut a = serde_json::to_value(engine.generate(&trip, &prefs).unwrap()).unwrap();
    let mut b = serde_json::to_value(engine.generate(&trip, &prefs).unwrap()).unwrap();

    let a_obj = a.as_object_mut().unwrap();
    let b_obj = b.as_object_mut().unwrap();
    assert_ne!(a_obj.remove("id"), b_obj.remove("id"));
    assert_eq!(a_obj, b_obj);
}

#[test]
fn envelope_always_carries_all_four_domains() {
    for group in [
        TravelGroup::Solo,
        TravelGroup::Couple,
        TravelGroup::Family,
        TravelGroup::Kids,
        TravelGroup::Elderly,
    ] {
        for hour in [2, 8, 14, 19] {
            let result = engine_at(hour)
                .generate(&trip("Atlantis", group), &UserPreferences::default())
                .unwrap();
            let json = serde_json::to_value(&result).unwrap();
            let sets = &json["recommendations"];
            for domain in ["clothing", "food", "experiences", "photos"] {
                assert!(sets.get(domain).is_some(), "{group} at {hour} lost {domain}");
            }
        }
    }
}
