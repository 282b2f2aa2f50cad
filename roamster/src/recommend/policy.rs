//! Travel-group suitability policy shared by all four domain recommenders.
//! This table is fixed product behavior; warnings may soften it, but the
//! filter itself never loosens per request.

use crate::models::{DietTag, DietaryPreference, TravelGroup};

#[derive(Debug, Clone, Copy)]
pub struct GroupPolicy {
    pub require_kid_friendly: bool,
    pub require_elderly_friendly: bool,
    pub allow_high_spice: bool,
    pub allow_night_travel: bool,
    pub allow_high_walking: bool,
}

impl GroupPolicy {
    pub fn for_group(group: TravelGroup) -> Self {
        match group {
            TravelGroup::Kids => Self {
                require_kid_friendly: true,
                require_elderly_friendly: false,
                allow_high_spice: false,
                allow_night_travel: false,
                allow_high_walking: true,
            },
            TravelGroup::Elderly => Self {
                require_kid_friendly: false,
                require_elderly_friendly: true,
                allow_high_spice: false,
                allow_night_travel: false,
                allow_high_walking: false,
            },
            TravelGroup::Solo | TravelGroup::Couple | TravelGroup::Family => Self {
                require_kid_friendly: false,
                require_elderly_friendly: false,
                allow_high_spice: true,
                allow_night_travel: true,
                allow_high_walking: true,
            },
        }
    }
}

/// An item is suitable only if its suitability set names the current group.
pub fn suits(suitable_for: &[TravelGroup], group: TravelGroup) -> bool {
    suitable_for.contains(&group)
}

/// Dietary predicate over the item's explicit tag. Vegetarian excludes
/// tagged non-vegetarian items; vegan admits only tagged vegan items.
/// Few catalog entries carry a tag, so the vegetarian branch rarely fires.
pub fn dietary_allows(preference: DietaryPreference, tag: Option<DietTag>) -> bool {
    match preference {
        DietaryPreference::Vegetarian => tag != Some(DietTag::NonVegetarian),
        DietaryPreference::Vegan => tag == Some(DietTag::Vegan),
        DietaryPreference::NonVegetarian | DietaryPreference::None => true,
    }
}
