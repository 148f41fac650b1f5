//! Badge derivation rules.
//!
//! Rules run in a fixed order and each appends at most one badge. Order is
//! significant: the shelf keeps only the leading badges.

use super::types::{AchievementBadge, AchievementKind, UserStatsSnapshot};
use crate::constants::{
    ACTIVE_COMMENTS_THRESHOLD, EARLY_ADOPTER_MONTHS, LEVEL_BADGE_THRESHOLD, POPULAR_LIKES_THRESHOLD,
    POSTS_PER_LEVEL, SOCIAL_FRIENDS_THRESHOLD, VIP_POSTS_THRESHOLD,
};
use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::debug;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Parse a `memberSince` value. Accepts RFC 3339, a naive date-time taken
/// as UTC, or a bare `YYYY-MM-DD` taken as midnight UTC.
pub fn parse_member_since(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Level shown for a user: the explicit level, or one level per ten posts
/// starting from 1.
pub fn effective_level(stats: &UserStatsSnapshot) -> u32 {
    stats.level.unwrap_or_else(|| {
        u32::try_from(stats.posts() / POSTS_PER_LEVEL)
            .unwrap_or(u32::MAX)
            .saturating_add(1)
    })
}

fn is_early_adopter(stats: &UserStatsSnapshot, now: DateTime<Utc>) -> bool {
    let Some(joined) = stats.member_since.as_deref().and_then(parse_member_since) else {
        return false;
    };
    match now.checked_sub_months(Months::new(EARLY_ADOPTER_MONTHS)) {
        Some(cutoff) => joined < cutoff,
        None => false,
    }
}

/// Derive the ordered badge list for `stats` as of `now`.
pub fn derive_badges(stats: &UserStatsSnapshot, now: DateTime<Utc>) -> Vec<AchievementBadge> {
    let mut kinds = Vec::new();

    if stats.posts() >= VIP_POSTS_THRESHOLD {
        kinds.push(AchievementKind::VipMember);
    }
    if stats.likes() >= POPULAR_LIKES_THRESHOLD {
        kinds.push(AchievementKind::Popular);
    }
    if stats.comments() >= ACTIVE_COMMENTS_THRESHOLD {
        kinds.push(AchievementKind::ActiveContributor);
    }
    if stats.friends() >= SOCIAL_FRIENDS_THRESHOLD {
        kinds.push(AchievementKind::SocialButterfly);
    }
    if is_early_adopter(stats, now) {
        kinds.push(AchievementKind::EarlyAdopter);
    }

    // Always awarded. No activity window is wired up for this one yet.
    kinds.push(AchievementKind::OnFire);

    let level = effective_level(stats);
    if level >= LEVEL_BADGE_THRESHOLD {
        kinds.push(AchievementKind::Level(level));
    }

    debug!(count = kinds.len(), ?kinds, "derived achievement badges");
    kinds.into_iter().map(AchievementBadge::from).collect()
}

/// Derive badges against the current wall-clock time.
pub fn derive_badges_now(stats: &UserStatsSnapshot) -> Vec<AchievementBadge> {
    derive_badges(stats, Utc::now())
}
