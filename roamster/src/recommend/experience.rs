//! Experience recommender: time and destination candidates, night-travel and
//! walking-intensity policy enforcement, and timing warnings.

use super::policy::{suits, GroupPolicy};
use crate::catalog::{self, experience::rule_groups};
use crate::models::{
    ActivityIntensity, Context, ExperienceItem, ExperienceRecommendations, OptionSummary,
    TimeOfDay, TravelGroup,
};

pub fn recommend(ctx: &Context) -> ExperienceRecommendations {
    let policy = GroupPolicy::for_group(ctx.travel_group);
    let items: Vec<ExperienceItem> = catalog::collect(&rule_groups(), ctx)
        .into_iter()
        .filter(|item| keeps(item, ctx.travel_group, &policy))
        .collect();

    let summary = summarize(&items, ctx.travel_group);
    ExperienceRecommendations {
        summary,
        warnings: warnings(ctx),
        items,
    }
}

fn keeps(item: &ExperienceItem, group: TravelGroup, policy: &GroupPolicy) -> bool {
    if !suits(&item.suitable_for, group) {
        return false;
    }
    if !policy.allow_night_travel && item.requires_night_travel {
        return false;
    }
    if !policy.allow_high_walking && item.walking_intensity == ActivityIntensity::High {
        return false;
    }
    true
}

fn summarize(items: &[ExperienceItem], group: TravelGroup) -> OptionSummary {
    let recommendation = if matches!(group, TravelGroup::Kids | TravelGroup::Elderly) {
        "Prioritizing safe, low-intensity, and accessible experiences"
    } else {
        "Mix of cultural, adventure, and leisure experiences"
    };

    OptionSummary {
        total_options: items.len(),
        recommendation: recommendation.to_string(),
    }
}

fn warnings(ctx: &Context) -> Vec<String> {
    let mut warnings = Vec::new();

    if matches!(ctx.travel_group, TravelGroup::Kids | TravelGroup::Elderly)
        && ctx.time_of_day == TimeOfDay::Night
    {
        warnings.push(
            "Night experiences are limited for your travel group. Consider daytime alternatives."
                .to_string(),
        );
    }

    if ctx.travel_group == TravelGroup::Elderly {
        warnings.push(
            "Avoiding high walking intensity experiences. Prioritizing seated and accessible options."
                .to_string(),
        );
    }

    warnings
}
