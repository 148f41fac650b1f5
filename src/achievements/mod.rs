//! Achievement badges.
//!
//! Badges are derived from a stats snapshot on every render and never
//! stored. `rules` decides which badges apply and in what order, `shelf`
//! caps the list for display.

pub mod rules;
pub mod shelf;
pub mod types;

pub use rules::{derive_badges, derive_badges_now, effective_level, parse_member_since};
pub use shelf::BadgeShelf;
pub use types::{AchievementBadge, AchievementKind, UserStatsSnapshot};
