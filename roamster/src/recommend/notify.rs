//! Notification derivation: a pure, additive rule table over time-of-day,
//! travel group, and weather condition. Emission follows table order.

use crate::models::{
    Context, Notification, NotificationKind, NotificationPriority, TimeOfDay, TravelGroup,
    WeatherCondition,
};

pub fn derive_notifications(ctx: &Context) -> Vec<Notification> {
    let mut notifications = Vec::new();

    if ctx.time_of_day == TimeOfDay::Morning && ctx.travel_group != TravelGroup::Elderly {
        notifications.push(Notification::new(
            NotificationKind::Photo,
            "Best Photo Time Now",
            "Soft natural light perfect for photos. Safe & crowd-free.",
            NotificationPriority::High,
        ));
    }

    if ctx.weather.condition == WeatherCondition::Rain {
        notifications.push(Notification::new(
            NotificationKind::Weather,
            "Rain Expected",
            "Consider waterproof clothing and indoor activities.",
            NotificationPriority::Medium,
        ));
    }

    if ctx.time_of_day == TimeOfDay::Evening
        && matches!(ctx.travel_group, TravelGroup::Solo | TravelGroup::Couple)
    {
        notifications.push(Notification::new(
            NotificationKind::Experience,
            "Evening Experience",
            "Perfect time for cafes, culture, and golden hour photos.",
            NotificationPriority::Medium,
        ));
    }

    if ctx.time_of_day == TimeOfDay::Night
        && matches!(ctx.travel_group, TravelGroup::Kids | TravelGroup::Elderly)
    {
        notifications.push(Notification::new(
            NotificationKind::Safety,
            "Night Travel Notice",
            "Night experiences are limited for your travel group. Consider daytime alternatives.",
            NotificationPriority::High,
        ));
    }

    notifications
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::context;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_morning_photo_notice_skips_elderly() {
        let fired = derive_notifications(&context(TravelGroup::Solo));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].kind, NotificationKind::Photo);
        assert_eq!(fired[0].priority, NotificationPriority::High);

        let elderly = derive_notifications(&context(TravelGroup::Elderly));
        assert!(elderly.is_empty());
    }

    #[test]
    fn test_rules_are_additive_in_table_order() {
        // Morning rain for a couple: photo notice then weather advisory.
        let mut ctx = context(TravelGroup::Couple);
        ctx.weather.condition = WeatherCondition::Rain;
        let fired = derive_notifications(&ctx);
        assert_eq!(fired.len(), 2);
        assert_eq!(fired[0].kind, NotificationKind::Photo);
        assert_eq!(fired[1].kind, NotificationKind::Weather);
    }

    #[test]
    fn test_evening_suggestion_for_solo_couple_only() {
        let mut ctx = context(TravelGroup::Solo);
        ctx.time_of_day = TimeOfDay::Evening;
        let fired = derive_notifications(&ctx);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].kind, NotificationKind::Experience);

        ctx.travel_group = TravelGroup::Family;
        assert!(derive_notifications(&ctx).is_empty());
    }

    #[test]
    fn test_night_safety_notice_for_protected_groups() {
        for group in [TravelGroup::Kids, TravelGroup::Elderly] {
            let mut ctx = context(group);
            ctx.time_of_day = TimeOfDay::Night;
            let fired = derive_notifications(&ctx);
            assert_eq!(fired.len(), 1);
            assert_eq!(fired[0].kind, NotificationKind::Safety);
            assert_eq!(fired[0].priority, NotificationPriority::High);
        }
    }

    #[test]
    fn test_quiet_afternoon_fires_nothing() {
        let mut ctx = context(TravelGroup::Family);
        ctx.time_of_day = TimeOfDay::Afternoon;
        assert!(derive_notifications(&ctx).is_empty());
    }
}
