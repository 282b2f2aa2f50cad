//! Clothing rule tables: seasonal and weather-threshold groups, travel-group
//! footwear, and an evening social outfit for solo/couple travelers.

use super::RuleGroup;
use crate::models::{
    ClothingCategory, ClothingItem, Context, Season, TimeOfDay, TravelGroup, WeatherCondition,
};

use ClothingCategory::*;
use TravelGroup::*;

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    category: ClothingCategory,
    description: &str,
    suitable_for: &[TravelGroup],
    rent_price: u32,
    buy_price: u32,
    kid_friendly: bool,
    comfortable: bool,
) -> ClothingItem {
    ClothingItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        description: description.to_string(),
        suitable_for: suitable_for.to_vec(),
        rent_price,
        buy_price,
        kid_friendly,
        comfortable,
    }
}

fn warm_weather(_ctx: &Context) -> Vec<ClothingItem> {
    vec![
        item(
            "summer-1",
            "Light Cotton T-Shirt",
            Top,
            "Breathable cotton for hot weather",
            &[Solo, Couple, Family],
            200,
            800,
            true,
            true,
        ),
        item(
            "summer-2",
            "Linen Shirt",
            Top,
            "Elegant and breathable",
            &[Solo, Couple],
            300,
            1200,
            false,
            true,
        ),
        item(
            "summer-3",
            "Shorts / Capris",
            Bottom,
            "Comfortable for walking",
            &[Solo, Couple, Family, Kids],
            250,
            1000,
            true,
            true,
        ),
    ]
}

fn cold_weather(_ctx: &Context) -> Vec<ClothingItem> {
    vec![
        item(
            "winter-1",
            "Warm Sweater",
            Top,
            "Cozy and warm",
            &[Solo, Couple, Family, Elderly],
            400,
            1500,
            true,
            true,
        ),
        item(
            "winter-2",
            "Layered Jacket",
            Outerwear,
            "Perfect for variable temperatures",
            &[Solo, Couple, Family, Elderly],
            500,
            2500,
            true,
            true,
        ),
    ]
}

fn rain_gear(_ctx: &Context) -> Vec<ClothingItem> {
    vec![item(
        "rain-1",
        "Waterproof Jacket",
        Outerwear,
        "Stay dry in rain",
        &[Solo, Couple, Family, Kids, Elderly],
        350,
        1800,
        true,
        true,
    )]
}

fn footwear(ctx: &Context) -> Vec<ClothingItem> {
    if matches!(ctx.travel_group, Kids | Elderly) {
        vec![item(
            "footwear-1",
            "Comfortable Walking Shoes",
            Footwear,
            "Supportive and non-slip",
            &[Family, Kids, Elderly],
            400,
            2000,
            true,
            true,
        )]
    } else {
        vec![item(
            "footwear-2",
            "Stylish Sneakers",
            Footwear,
            "Fashion-forward and comfortable",
            &[Solo, Couple],
            500,
            3000,
            false,
            true,
        )]
    }
}

fn evening_social(_ctx: &Context) -> Vec<ClothingItem> {
    vec![item(
        "evening-1",
        "Smart Casual Outfit",
        Outfit,
        "Perfect for evening experiences",
        &[Solo, Couple],
        600,
        3500,
        false,
        true,
    )]
}

pub fn rule_groups() -> Vec<RuleGroup<ClothingItem>> {
    vec![
        RuleGroup {
            name: "clothing.warm_weather",
            applies: |ctx| ctx.season == Season::Summer || ctx.weather.temperature_c > 25.0,
            candidates: warm_weather,
        },
        RuleGroup {
            name: "clothing.cold_weather",
            applies: |ctx| ctx.season == Season::Winter || ctx.weather.temperature_c < 15.0,
            candidates: cold_weather,
        },
        RuleGroup {
            name: "clothing.rain_gear",
            applies: |ctx| ctx.weather.condition == WeatherCondition::Rain,
            candidates: rain_gear,
        },
        RuleGroup {
            name: "clothing.footwear",
            applies: |_| true,
            candidates: footwear,
        },
        RuleGroup {
            name: "clothing.evening_social",
            applies: |ctx| {
                matches!(ctx.travel_group, Solo | Couple)
                    && matches!(ctx.time_of_day, TimeOfDay::Evening | TimeOfDay::Night)
            },
            candidates: evening_social,
        },
    ]
}
