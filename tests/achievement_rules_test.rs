//! Integration test: Achievement badge derivation
//!
//! Covers rule order, the display cap with its overflow marker, and the
//! always-on "On Fire" badge, using a fixed reference time.

use chrono::{DateTime, Months, TimeZone, Utc};
use profile_badges::achievements::{derive_badges, effective_level, AchievementKind, BadgeShelf};
use profile_badges::UserStatsSnapshot;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
}

fn labels(stats: &UserStatsSnapshot) -> Vec<String> {
    derive_badges(stats, now()).into_iter().map(|b| b.label).collect()
}

// =============================================================================
// Single rules
// =============================================================================

#[test]
fn test_absent_stats_only_on_fire() {
    let badges = derive_badges(&UserStatsSnapshot::default(), now());
    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0].kind, AchievementKind::OnFire);
    assert_eq!(effective_level(&UserStatsSnapshot::default()), 1);
}

#[test]
fn test_vip_comes_before_on_fire() {
    let stats = UserStatsSnapshot {
        posts_count: Some(100),
        level: Some(2),
        ..Default::default()
    };
    assert_eq!(labels(&stats), vec!["VIP Member", "On Fire"]);
}

#[test]
fn test_95_posts() {
    let stats = UserStatsSnapshot {
        posts_count: Some(95),
        ..Default::default()
    };
    assert_eq!(labels(&stats), vec!["On Fire", "Level 10"]);
}

#[test]
fn test_each_threshold_individually() {
    let cases = [
        (
            UserStatsSnapshot {
                likes_received: Some(500),
                ..Default::default()
            },
            "Popular",
        ),
        (
            UserStatsSnapshot {
                comments_count: Some(50),
                ..Default::default()
            },
            "Active Contributor",
        ),
        (
            UserStatsSnapshot {
                friends_count: Some(20),
                ..Default::default()
            },
            "Social Butterfly",
        ),
    ];

    for (stats, expected) in cases {
        assert_eq!(labels(&stats), vec![expected, "On Fire"]);
    }
}

#[test]
fn test_early_adopter_relative_to_now() {
    let joined = now().checked_sub_months(Months::new(24)).unwrap();
    let stats = UserStatsSnapshot {
        member_since: Some(joined.to_rfc3339()),
        ..Default::default()
    };
    assert_eq!(labels(&stats), vec!["Early Adopter", "On Fire"]);

    let recent = now().checked_sub_months(Months::new(5)).unwrap();
    let stats = UserStatsSnapshot {
        member_since: Some(recent.to_rfc3339()),
        ..Default::default()
    };
    assert_eq!(labels(&stats), vec!["On Fire"]);
}

#[test]
fn test_garbage_member_since_never_fails() {
    let stats = UserStatsSnapshot {
        member_since: Some("not a date".to_string()),
        ..Default::default()
    };
    assert_eq!(labels(&stats), vec!["On Fire"]);
}

// =============================================================================
// Display cap
// =============================================================================

#[test]
fn test_seven_badges_show_five_plus_two() {
    let two_years_ago = now().checked_sub_months(Months::new(24)).unwrap();
    let stats = UserStatsSnapshot {
        posts_count: Some(1000),
        likes_received: Some(1000),
        comments_count: Some(100),
        friends_count: Some(100),
        member_since: Some(two_years_ago.format("%Y-%m-%d").to_string()),
        level: Some(20),
    };

    let badges = derive_badges(&stats, now());
    assert_eq!(badges.len(), 7);
    assert_eq!(badges[6].label, "Level 20");

    let shelf = BadgeShelf::new(badges).unwrap();
    let visible: Vec<_> = shelf.visible.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(
        visible,
        vec![
            "VIP Member",
            "Popular",
            "Active Contributor",
            "Social Butterfly",
            "Early Adopter",
        ]
    );
    assert_eq!(shelf.overflow_label().as_deref(), Some("+2"));
}

#[test]
fn test_minimal_shelf_has_one_badge_and_no_overflow() {
    let shelf = BadgeShelf::new(derive_badges(&UserStatsSnapshot::default(), now())).unwrap();
    assert_eq!(shelf.visible.len(), 1);
    assert_eq!(shelf.overflow_label(), None);
    assert_eq!(
        shelf.tooltip(0),
        Some("Posted 10+ times in the last 7 days")
    );
}

#[test]
fn test_derivation_is_pure() {
    let stats = UserStatsSnapshot {
        posts_count: Some(321),
        likes_received: Some(9),
        member_since: Some("2020-02-29".to_string()),
        ..Default::default()
    };
    let first = derive_badges(&stats, now());
    let second = derive_badges(&stats, now());
    assert_eq!(first, second);
}
