//! Experience rule tables: time-of-day generics, a night-scene group gated
//! to solo/couple travelers, and destination-specific entries.

use super::RuleGroup;
use crate::models::{
    ActivityIntensity, Context, CrowdLevel, ExperienceItem, ExperienceType, SafetyRating,
    TimeOfDay, TravelGroup,
};

use ExperienceType::*;
use TravelGroup::*;

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    kind: ExperienceType,
    description: &str,
    duration: &str,
    walking_intensity: ActivityIntensity,
    crowd_level: CrowdLevel,
    safety_rating: SafetyRating,
    requires_night_travel: bool,
    suitable_for: &[TravelGroup],
    price_range: &str,
    best_for: &str,
) -> ExperienceItem {
    ExperienceItem {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        description: description.to_string(),
        duration: duration.to_string(),
        walking_intensity,
        crowd_level,
        safety_rating,
        requires_night_travel,
        suitable_for: suitable_for.to_vec(),
        price_range: price_range.to_string(),
        best_for: best_for.to_string(),
    }
}

const EVERYONE: &[TravelGroup] = &[Solo, Couple, Family, Kids, Elderly];

fn morning(_ctx: &Context) -> Vec<ExperienceItem> {
    vec![
        item(
            "morning-1",
            "Sunrise Viewpoint",
            Viewpoint,
            "Best light for photography, less crowd",
            "1-2 hours",
            ActivityIntensity::Low,
            CrowdLevel::Low,
            SafetyRating::High,
            false,
            EVERYONE,
            "Free - ₹500",
            "Photography, peaceful experience",
        ),
        item(
            "morning-2",
            "Local Market Visit",
            Cultural,
            "Experience local life and culture",
            "2-3 hours",
            ActivityIntensity::Moderate,
            CrowdLevel::Medium,
            SafetyRating::High,
            false,
            &[Solo, Couple, Family],
            "Free",
            "Cultural immersion, shopping",
        ),
    ]
}

fn afternoon(_ctx: &Context) -> Vec<ExperienceItem> {
    vec![item(
        "afternoon-1",
        "Museum or Gallery",
        Cultural,
        "Indoor activity, escape the heat",
        "2-4 hours",
        ActivityIntensity::Low,
        CrowdLevel::Medium,
        SafetyRating::High,
        false,
        EVERYONE,
        "₹100-500",
        "Learning, comfort, family-friendly",
    )]
}

fn evening(_ctx: &Context) -> Vec<ExperienceItem> {
    vec![
        item(
            "evening-1",
            "Sunset Point",
            Viewpoint,
            "Golden hour photography",
            "1-2 hours",
            ActivityIntensity::Low,
            CrowdLevel::Medium,
            SafetyRating::High,
            false,
            EVERYONE,
            "Free - ₹300",
            "Photography, romantic experience",
        ),
        item(
            "evening-2",
            "Cultural Show or Performance",
            Entertainment,
            "Local dance, music, or theater",
            "2-3 hours",
            ActivityIntensity::Low,
            CrowdLevel::Medium,
            SafetyRating::High,
            false,
            EVERYONE,
            "₹300-1000",
            "Cultural experience, seated activity",
        ),
    ]
}

fn night_scene(_ctx: &Context) -> Vec<ExperienceItem> {
    vec![item(
        "night-1",
        "Night Market or Nightlife",
        Entertainment,
        "Explore night scene (safe areas only)",
        "2-4 hours",
        ActivityIntensity::Moderate,
        CrowdLevel::High,
        SafetyRating::Medium,
        true,
        &[Solo, Couple],
        "₹500-2000",
        "Social experience, nightlife",
    )]
}

fn destination(ctx: &Context) -> Vec<ExperienceItem> {
    match ctx.destination_key().as_str() {
        "mumbai" => vec![
            item(
                "mumbai-exp-1",
                "Marine Drive Walk",
                Walking,
                "Scenic waterfront promenade",
                "1-2 hours",
                ActivityIntensity::Low,
                CrowdLevel::Medium,
                SafetyRating::High,
                false,
                EVERYONE,
                "Free",
                "Relaxation, views",
            ),
            item(
                "mumbai-exp-2",
                "Elephanta Caves",
                Historical,
                "Ancient cave temples (requires ferry)",
                "4-5 hours",
                ActivityIntensity::High,
                CrowdLevel::High,
                SafetyRating::High,
                false,
                &[Solo, Couple, Family],
                "₹500-1000",
                "History, photography",
            ),
        ],
        "goa" => vec![item(
            "goa-exp-1",
            "Beach Relaxation",
            Leisure,
            "Relax on beautiful beaches",
            "2-4 hours",
            ActivityIntensity::Low,
            CrowdLevel::Medium,
            SafetyRating::High,
            false,
            EVERYONE,
            "Free",
            "Relaxation, family time",
        )],
        "delhi" => vec![item(
            "delhi-exp-1",
            "Red Fort",
            Historical,
            "UNESCO World Heritage Site",
            "2-3 hours",
            ActivityIntensity::Moderate,
            CrowdLevel::High,
            SafetyRating::High,
            false,
            EVERYONE,
            "₹500-800",
            "History, photography",
        )],
        _ => Vec::new(),
    }
}

pub fn rule_groups() -> Vec<RuleGroup<ExperienceItem>> {
    vec![
        RuleGroup {
            name: "experience.morning",
            applies: |ctx| ctx.time_of_day == TimeOfDay::Morning,
            candidates: morning,
        },
        RuleGroup {
            name: "experience.afternoon",
            applies: |ctx| ctx.time_of_day == TimeOfDay::Afternoon,
            candidates: afternoon,
        },
        RuleGroup {
            name: "experience.evening",
            applies: |ctx| ctx.time_of_day == TimeOfDay::Evening,
            candidates: evening,
        },
        RuleGroup {
            name: "experience.night_scene",
            applies: |ctx| {
                ctx.time_of_day == TimeOfDay::Night && matches!(ctx.travel_group, Solo | Couple)
            },
            candidates: night_scene,
        },
        RuleGroup {
            name: "experience.destination",
            applies: |_| true,
            candidates: destination,
        },
    ]
}
