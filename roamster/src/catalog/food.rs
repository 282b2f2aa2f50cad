//! Food rule tables: time-of-day generics plus local cuisine keyed by
//! lower-cased city name. Unknown destinations contribute no local entries.

use super::RuleGroup;
use crate::models::{
    Context, FoodItem, HygieneLevel, MealType, SpiceLevel, TimeOfDay, TravelGroup,
};

use MealType::*;
use TravelGroup::*;

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    meal: MealType,
    description: &str,
    spice_level: SpiceLevel,
    hygiene_level: HygieneLevel,
    suitable_for: &[TravelGroup],
    kid_friendly: bool,
    elderly_friendly: bool,
    price_range: &str,
    location: &str,
) -> FoodItem {
    FoodItem {
        id: id.to_string(),
        name: name.to_string(),
        meal,
        description: description.to_string(),
        spice_level,
        hygiene_level,
        suitable_for: suitable_for.to_vec(),
        kid_friendly,
        elderly_friendly,
        diet_tag: None,
        price_range: price_range.to_string(),
        location: location.to_string(),
    }
}

fn breakfast(_ctx: &Context) -> Vec<FoodItem> {
    vec![item(
        "breakfast-1",
        "Local Breakfast Special",
        Breakfast,
        "Authentic morning meal",
        SpiceLevel::Low,
        HygieneLevel::High,
        &[Solo, Couple, Family, Kids, Elderly],
        true,
        true,
        "₹100-300",
        "Local cafes",
    )]
}

fn lunch(_ctx: &Context) -> Vec<FoodItem> {
    vec![item(
        "lunch-1",
        "Traditional Lunch",
        Lunch,
        "Hearty local cuisine",
        SpiceLevel::Medium,
        HygieneLevel::High,
        &[Solo, Couple, Family],
        true,
        true,
        "₹200-500",
        "Restaurants",
    )]
}

fn street_snacks(ctx: &Context) -> Vec<FoodItem> {
    // Street food is graded down when traveling with kids.
    let with_kids = ctx.travel_group == Kids;
    vec![item(
        "snacks-1",
        "Street Food Delights",
        Snacks,
        "Local street food (if safe)",
        SpiceLevel::Medium,
        if with_kids {
            HygieneLevel::Medium
        } else {
            HygieneLevel::High
        },
        &[Solo, Couple, Family],
        !with_kids,
        false,
        "₹50-200",
        "Street vendors",
    )]
}

fn local_cuisine(ctx: &Context) -> Vec<FoodItem> {
    match ctx.destination_key().as_str() {
        "mumbai" => vec![
            item(
                "mumbai-1",
                "Vada Pav",
                Snacks,
                "Mumbai's iconic street food",
                SpiceLevel::Medium,
                HygieneLevel::Medium,
                &[Solo, Couple, Family],
                true,
                true,
                "₹20-50",
                "Street vendors",
            ),
            item(
                "mumbai-2",
                "Pav Bhaji",
                Main,
                "Spicy vegetable curry with bread",
                SpiceLevel::High,
                HygieneLevel::High,
                &[Solo, Couple, Family],
                false,
                false,
                "₹100-200",
                "Restaurants",
            ),
        ],
        "goa" => vec![item(
            "goa-1",
            "Fish Curry Rice",
            Main,
            "Traditional Goan seafood",
            SpiceLevel::High,
            HygieneLevel::High,
            &[Solo, Couple],
            false,
            false,
            "₹300-600",
            "Beach shacks",
        )],
        "delhi" => vec![item(
            "delhi-1",
            "Chole Bhature",
            Main,
            "Spicy chickpeas with fried bread",
            SpiceLevel::Medium,
            HygieneLevel::High,
            &[Solo, Couple, Family],
            true,
            true,
            "₹150-300",
            "Restaurants",
        )],
        _ => Vec::new(),
    }
}

pub fn rule_groups() -> Vec<RuleGroup<FoodItem>> {
    vec![
        RuleGroup {
            name: "food.breakfast",
            applies: |ctx| ctx.time_of_day == TimeOfDay::Morning,
            candidates: breakfast,
        },
        RuleGroup {
            name: "food.lunch",
            applies: |ctx| ctx.time_of_day == TimeOfDay::Afternoon,
            candidates: lunch,
        },
        RuleGroup {
            name: "food.street_snacks",
            applies: |ctx| ctx.time_of_day == TimeOfDay::Evening,
            candidates: street_snacks,
        },
        RuleGroup {
            name: "food.local_cuisine",
            applies: |_| true,
            candidates: local_cuisine,
        },
    ]
}
