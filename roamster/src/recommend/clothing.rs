//! Clothing recommender: seasonal/weather candidates, group suitability
//! filtering, rent/buy cost aggregation, and weather-driven warnings.

use super::policy::{suits, GroupPolicy};
use crate::catalog::{self, clothing::rule_groups};
use crate::models::{
    ClothingItem, ClothingRecommendations, ClothingSummary, Context, TravelGroup,
    WeatherCondition,
};

pub fn recommend(ctx: &Context) -> ClothingRecommendations {
    let policy = GroupPolicy::for_group(ctx.travel_group);
    let items: Vec<ClothingItem> = catalog::collect(&rule_groups(), ctx)
        .into_iter()
        .filter(|item| keeps(item, ctx.travel_group, &policy))
        .collect();

    let summary = summarize(&items, ctx.travel_group);
    ClothingRecommendations {
        summary,
        warnings: warnings(ctx),
        items,
    }
}

fn keeps(item: &ClothingItem, group: TravelGroup, policy: &GroupPolicy) -> bool {
    if !suits(&item.suitable_for, group) {
        return false;
    }
    if policy.require_kid_friendly && !item.kid_friendly {
        return false;
    }
    if policy.require_elderly_friendly && !item.comfortable {
        return false;
    }
    true
}

fn summarize(items: &[ClothingItem], group: TravelGroup) -> ClothingSummary {
    let recommendation = if matches!(group, TravelGroup::Kids | TravelGroup::Elderly) {
        "Prioritizing comfort and safety over fashion"
    } else {
        "Balanced mix of style and comfort"
    };

    ClothingSummary {
        total_items: items.len(),
        estimated_rent_cost: items.iter().map(|i| i.rent_price).sum(),
        estimated_buy_cost: items.iter().map(|i| i.buy_price).sum(),
        recommendation: recommendation.to_string(),
    }
}

fn warnings(ctx: &Context) -> Vec<String> {
    let mut warnings = Vec::new();

    if ctx.weather.condition == WeatherCondition::Rain && ctx.travel_group == TravelGroup::Kids {
        warnings.push("Ensure waterproof clothing for kids to prevent illness".to_string());
    }

    if ctx.weather.temperature_c > 30.0 && ctx.travel_group == TravelGroup::Elderly {
        warnings.push("High temperature - ensure light, breathable clothing".to_string());
    }

    warnings
}
