//! Photo rule tables: light-driven spots for morning/evening, destination
//! landmarks, and social/lighting tips keyed by travel group and time.

use super::RuleGroup;
use crate::models::{
    Context, CrowdLevel, PhotoSpot, PhotoTip, SafetyRating, TimeOfDay, TipKind, TravelGroup,
};

use TravelGroup::*;

const EVERYONE: &[TravelGroup] = &[Solo, Couple, Family, Kids, Elderly];

#[allow(clippy::too_many_arguments)]
fn spot(
    id: &str,
    name: &str,
    description: &str,
    best_time: &str,
    light_quality: &str,
    crowd_level: CrowdLevel,
    safety_rating: SafetyRating,
    suitable_for: &[TravelGroup],
    angles: &[&str],
    poses: &[&str],
) -> PhotoSpot {
    PhotoSpot {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        best_time: best_time.to_string(),
        light_quality: light_quality.to_string(),
        crowd_level,
        safety_rating,
        suitable_for: suitable_for.to_vec(),
        angles: angles.iter().map(|s| s.to_string()).collect(),
        poses: poses.iter().map(|s| s.to_string()).collect(),
    }
}

fn tip(kind: TipKind, title: &str, description: &str, suggestions: &[&str]) -> PhotoTip {
    PhotoTip {
        kind,
        title: title.to_string(),
        description: description.to_string(),
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
    }
}

fn morning_light(ctx: &Context) -> Vec<PhotoSpot> {
    let poses: &[&str] = if ctx.travel_group == Solo {
        &["Standing", "Sitting"]
    } else {
        &["Group photo", "Candid"]
    };
    vec![spot(
        "photo-morning-1",
        "Sunrise Viewpoint",
        "Soft natural light, minimal crowd",
        "6:00 AM - 8:00 AM",
        "soft natural",
        CrowdLevel::Low,
        SafetyRating::High,
        EVERYONE,
        &["Wide shot", "Silhouette", "Golden hour"],
        poses,
    )]
}

fn golden_hour(ctx: &Context) -> Vec<PhotoSpot> {
    let poses: &[&str] = if ctx.travel_group == Couple {
        &["Romantic poses", "Walking together"]
    } else {
        &["Group photo", "Individual"]
    };
    vec![spot(
        "photo-evening-1",
        "Golden Hour Location",
        "Perfect lighting for photos",
        "5:00 PM - 7:00 PM",
        "golden hour",
        CrowdLevel::Medium,
        SafetyRating::High,
        EVERYONE,
        &["Backlit", "Side lighting", "Wide landscape"],
        poses,
    )]
}

fn destination(ctx: &Context) -> Vec<PhotoSpot> {
    match ctx.destination_key().as_str() {
        "mumbai" => vec![
            spot(
                "mumbai-photo-1",
                "Gateway of India",
                "Iconic landmark, perfect for photos",
                "Morning or Evening",
                "good",
                CrowdLevel::High,
                SafetyRating::High,
                EVERYONE,
                &["Front view", "Side angle", "With water in background"],
                &["Standing", "Walking", "Group photo"],
            ),
            spot(
                "mumbai-photo-2",
                "Marine Drive",
                "Scenic waterfront, great for sunset",
                "Evening",
                "golden hour",
                CrowdLevel::Medium,
                SafetyRating::High,
                EVERYONE,
                &["Waterfront view", "Skyline", "Walking shot"],
                &["Sitting on wall", "Walking", "Candid"],
            ),
        ],
        "goa" => vec![spot(
            "goa-photo-1",
            "Beach Sunset",
            "Stunning beach sunset photos",
            "Evening",
            "golden hour",
            CrowdLevel::Medium,
            SafetyRating::High,
            EVERYONE,
            &["Silhouette", "Beach walk", "Ocean view"],
            &["Walking on beach", "Sitting", "Group photo"],
        )],
        "delhi" => vec![spot(
            "delhi-photo-1",
            "India Gate",
            "Famous monument, great for photos",
            "Morning or Evening",
            "good",
            CrowdLevel::High,
            SafetyRating::High,
            EVERYONE,
            &["Front view", "Side angle", "Wide shot"],
            &["Standing", "Walking", "Group photo"],
        )],
        _ => Vec::new(),
    }
}

pub fn rule_groups() -> Vec<RuleGroup<PhotoSpot>> {
    vec![
        RuleGroup {
            name: "photo.morning_light",
            applies: |ctx| ctx.time_of_day == TimeOfDay::Morning,
            candidates: morning_light,
        },
        RuleGroup {
            name: "photo.golden_hour",
            applies: |ctx| ctx.time_of_day == TimeOfDay::Evening,
            candidates: golden_hour,
        },
        RuleGroup {
            name: "photo.destination",
            applies: |_| true,
            candidates: destination,
        },
    ]
}

/// Social and lighting tips. Additive like the spot groups: zero or more
/// tips can apply to the same context.
pub fn tips(ctx: &Context) -> Vec<PhotoTip> {
    let mut tips_out = Vec::new();

    if matches!(ctx.travel_group, Solo | Couple) {
        tips_out.push(tip(
            TipKind::Aesthetic,
            "Aesthetic-First Approach",
            "Focus on trendy framing and influencer-style shots",
            &[
                "Use rule of thirds",
                "Try different angles (low angle, high angle)",
                "Capture candid moments",
                "Include local elements in frame",
            ],
        ));
    }

    if ctx.travel_group == Family {
        tips_out.push(tip(
            TipKind::Group,
            "Family-Friendly Shots",
            "Capture memories with everyone in frame",
            &[
                "Use wide shots to include everyone",
                "Capture natural interactions",
                "Take multiple shots to ensure everyone looks good",
                "Include landmarks in background",
            ],
        ));
    }

    if ctx.travel_group == Kids {
        tips_out.push(tip(
            TipKind::Kids,
            "Kid-Friendly Photography",
            "Safe, open spaces with natural lighting",
            &[
                "Choose safe, open locations",
                "Capture kids playing naturally",
                "Use natural light (avoid harsh sun)",
                "Keep backgrounds simple",
            ],
        ));
    }

    if ctx.time_of_day == TimeOfDay::Morning {
        tips_out.push(tip(
            TipKind::Lighting,
            "Morning Light Tips",
            "Best natural lighting conditions",
            &[
                "Soft morning light is perfect for portraits",
                "Avoid harsh shadows",
                "Use backlighting for dramatic effect",
                "Crowds are minimal - take your time",
            ],
        ));
    }

    if ctx.time_of_day == TimeOfDay::Evening {
        tips_out.push(tip(
            TipKind::Lighting,
            "Golden Hour Photography",
            "Perfect time for stunning photos",
            &[
                "Golden hour provides warm, flattering light",
                "Great for silhouettes",
                "Capture sunset colors",
                "Use side lighting for depth",
            ],
        ));
    }

    tips_out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{collect, test_support};

    #[test]
    fn test_goa_morning_has_sunrise_and_beach_spots() {
        let ctx = test_support::context(Family);
        let spots = collect(&rule_groups(), &ctx);
        let ids: Vec<String> = spots.into_iter().map(|s| s.id).collect();
        assert_eq!(ids, ["photo-morning-1", "goa-photo-1"]);
    }

    #[test]
    fn test_poses_adapt_to_travel_group() {
        let solo = collect(&rule_groups(), &test_support::context(Solo));
        assert_eq!(solo[0].poses, ["Standing", "Sitting"]);

        let family = collect(&rule_groups(), &test_support::context(Family));
        assert_eq!(family[0].poses, ["Group photo", "Candid"]);
    }

    #[test]
    fn test_couple_evening_gets_romantic_poses() {
        let mut ctx = test_support::context(Couple);
        ctx.time_of_day = TimeOfDay::Evening;
        let spots = collect(&rule_groups(), &ctx);
        let golden = spots.iter().find(|s| s.id == "photo-evening-1").unwrap();
        assert_eq!(golden.poses, ["Romantic poses", "Walking together"]);
    }

    #[test]
    fn test_tips_are_additive() {
        // Solo morning: aesthetic tip + morning lighting tip.
        let ctx = test_support::context(Solo);
        let tips = tips(&ctx);
        assert_eq!(tips.len(), 2);
        assert_eq!(tips[0].kind, TipKind::Aesthetic);
        assert_eq!(tips[1].kind, TipKind::Lighting);
    }

    #[test]
    fn test_afternoon_family_gets_only_group_tip() {
        let mut ctx = test_support::context(Family);
        ctx.time_of_day = TimeOfDay::Afternoon;
        let tips = tips(&ctx);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].kind, TipKind::Group);
    }
}
