//! Photo recommender: light-driven and landmark spots, suitability
//! filtering, plus social/lighting tips and a timing summary.

use super::policy::suits;
use crate::catalog::{self, photo};
use crate::models::{
    Context, PhotoRecommendations, PhotoSpot, PhotoSummary, TimeOfDay, TravelGroup,
};

pub fn recommend(ctx: &Context) -> PhotoRecommendations {
    let spots: Vec<PhotoSpot> = catalog::collect(&photo::rule_groups(), ctx)
        .into_iter()
        .filter(|spot| suits(&spot.suitable_for, ctx.travel_group))
        .collect();

    PhotoRecommendations {
        spots,
        tips: photo::tips(ctx),
        summary: summarize(ctx),
        warnings: Vec::new(),
    }
}

fn summarize(ctx: &Context) -> PhotoSummary {
    let recommendation = match ctx.travel_group {
        TravelGroup::Solo | TravelGroup::Couple => {
            "Aesthetic-first suggestions for influencer-style content"
        }
        TravelGroup::Family => "Group-friendly photo spots for family memories",
        TravelGroup::Kids | TravelGroup::Elderly => {
            "Safe, accessible photo locations with minimal movement required"
        }
    };

    let best_time = if matches!(ctx.time_of_day, TimeOfDay::Morning | TimeOfDay::Evening) {
        "Current time is ideal for photography"
    } else {
        "Consider morning or evening for better lighting"
    };

    PhotoSummary {
        recommendation: recommendation.to_string(),
        best_time: best_time.to_string(),
    }
}
