//! Integration test: Streak indicator
//!
//! Neutral, win and loss badges across sizes, with the hot-streak
//! embellishments.

use profile_badges::streak::{Pulse, StreakKind};
use profile_badges::{ColorTag, StreakBadge, StreakSize};

#[test]
fn test_zero_streak_is_neutral_for_every_size() {
    for size in StreakSize::ALL {
        let badge = StreakBadge::new(0, size);
        assert_eq!(badge.kind, StreakKind::Neutral);
        assert!(badge.sub_label.is_none());
        assert!(badge.pulse.is_none());
        assert!(badge.color.is_none());
    }
}

#[test]
fn test_seven_win_streak() {
    let badge = StreakBadge::new(7, StreakSize::Lg);
    assert_eq!(badge.kind, StreakKind::Win);
    assert_eq!(badge.magnitude, 7);
    assert_eq!(badge.color, Some(ColorTag::Green));
    assert!(badge.label().contains('7'));
    assert!(badge.sub_label.is_some());
    assert_eq!(badge.pulse, Some(Pulse { period_ms: 1500 }));
}

#[test]
fn test_three_loss_streak() {
    let badge = StreakBadge::new(-3, StreakSize::Md);
    assert_eq!(badge.kind, StreakKind::Loss);
    assert_eq!(badge.magnitude, 3);
    assert_eq!(badge.label(), "3 Loss streak");
    assert!(badge.sub_label.is_none());
    assert!(badge.pulse.is_none());
}

#[test]
fn test_win_and_loss_encouragement_differ() {
    let win = StreakBadge::new(5, StreakSize::Md).sub_label.unwrap();
    let loss = StreakBadge::new(-5, StreakSize::Md).sub_label.unwrap();
    assert_ne!(win, loss);
}

#[test]
fn test_pulse_repeats_forever() {
    let pulse = StreakBadge::new(10, StreakSize::Sm).pulse.unwrap();
    for cycle in [0u64, 1, 10, 1_000_000] {
        let base = cycle * pulse.period_ms;
        assert_eq!(pulse.intensity(base), 0.0);
        assert!((pulse.intensity(base + 750) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_badge_is_pure() {
    assert_eq!(
        StreakBadge::new(-12, StreakSize::Md),
        StreakBadge::new(-12, StreakSize::Md)
    );
}
