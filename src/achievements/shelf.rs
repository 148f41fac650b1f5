//! Display capping for derived badges.

use super::types::AchievementBadge;
use crate::constants::MAX_VISIBLE_BADGES;

/// The badges that fit on screen plus how many were cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeShelf {
    pub visible: Vec<AchievementBadge>,
    pub hidden_count: usize,
}

impl BadgeShelf {
    /// Build a shelf with the default cap. `None` means draw nothing.
    pub fn new(badges: Vec<AchievementBadge>) -> Option<Self> {
        Self::with_cap(badges, MAX_VISIBLE_BADGES)
    }

    pub fn with_cap(mut badges: Vec<AchievementBadge>, cap: usize) -> Option<Self> {
        if badges.is_empty() {
            return None;
        }
        let hidden_count = badges.len().saturating_sub(cap);
        badges.truncate(cap);
        Some(Self {
            visible: badges,
            hidden_count,
        })
    }

    /// Text of the trailing overflow marker, e.g. `+2`.
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden_count > 0).then(|| format!("+{}", self.hidden_count))
    }

    /// Tooltip text for a visible badge. The overflow marker has none.
    pub fn tooltip(&self, index: usize) -> Option<&str> {
        self.visible.get(index).map(|b| b.description.as_str())
    }
}
