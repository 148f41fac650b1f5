//! Profile Badges - presentational widgets for a gaming profile page.
//!
//! Game-preference tags, a win/loss streak badge and derived achievement
//! badges, each a pure function of its inputs, plus a terminal host that
//! draws them with ratatui.

pub mod achievements;
pub mod app;
pub mod color;
pub mod config;
pub mod constants;
pub mod preferences;
pub mod profile;
pub mod streak;
pub mod terminal;
pub mod ui;

pub use achievements::{derive_badges, AchievementBadge, BadgeShelf, UserStatsSnapshot};
pub use color::ColorTag;
pub use preferences::{TagSelector, PREFERENCE_CATALOG};
pub use streak::{StreakBadge, StreakSize};
