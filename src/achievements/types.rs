//! Achievement data types.

use crate::color::ColorTag;
use serde::{Deserialize, Serialize};

/// Point-in-time user statistics supplied by the host page.
///
/// Every field is optional. Missing counts are treated as 0 and a missing
/// `member_since` simply disables the date rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStatsSnapshot {
    pub posts_count: Option<u64>,
    pub likes_received: Option<u64>,
    pub comments_count: Option<u64>,
    pub friends_count: Option<u64>,
    pub member_since: Option<String>,
    pub level: Option<u32>,
}

impl UserStatsSnapshot {
    pub fn posts(&self) -> u64 {
        self.posts_count.unwrap_or(0)
    }

    pub fn likes(&self) -> u64 {
        self.likes_received.unwrap_or(0)
    }

    pub fn comments(&self) -> u64 {
        self.comments_count.unwrap_or(0)
    }

    pub fn friends(&self) -> u64 {
        self.friends_count.unwrap_or(0)
    }
}

/// Which rule produced a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementKind {
    VipMember,
    Popular,
    ActiveContributor,
    SocialButterfly,
    EarlyAdopter,
    OnFire,
    Level(u32),
}

impl AchievementKind {
    pub fn label(&self) -> String {
        match self {
            AchievementKind::VipMember => "VIP Member".to_string(),
            AchievementKind::Popular => "Popular".to_string(),
            AchievementKind::ActiveContributor => "Active Contributor".to_string(),
            AchievementKind::SocialButterfly => "Social Butterfly".to_string(),
            AchievementKind::EarlyAdopter => "Early Adopter".to_string(),
            AchievementKind::OnFire => "On Fire".to_string(),
            AchievementKind::Level(level) => format!("Level {}", level),
        }
    }

    pub fn description(&self) -> String {
        match self {
            AchievementKind::VipMember => "Published 100 or more posts".to_string(),
            AchievementKind::Popular => "Received 500 or more likes".to_string(),
            AchievementKind::ActiveContributor => "Wrote 50 or more comments".to_string(),
            AchievementKind::SocialButterfly => "Made 20 or more friends".to_string(),
            AchievementKind::EarlyAdopter => "Member for more than 6 months".to_string(),
            AchievementKind::OnFire => "Posted 10+ times in the last 7 days".to_string(),
            AchievementKind::Level(level) => format!("Reached level {}", level),
        }
    }

    pub fn color(&self) -> ColorTag {
        match self {
            AchievementKind::VipMember => ColorTag::Yellow,
            AchievementKind::Popular => ColorTag::Pink,
            AchievementKind::ActiveContributor => ColorTag::Blue,
            AchievementKind::SocialButterfly => ColorTag::Purple,
            AchievementKind::EarlyAdopter => ColorTag::Green,
            AchievementKind::OnFire => ColorTag::Orange,
            AchievementKind::Level(_) => ColorTag::Purple,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AchievementKind::VipMember => "👑",
            AchievementKind::Popular => "❤",
            AchievementKind::ActiveContributor => "💬",
            AchievementKind::SocialButterfly => "👥",
            AchievementKind::EarlyAdopter => "★",
            AchievementKind::OnFire => "🔥",
            AchievementKind::Level(_) => "🏆",
        }
    }
}

/// A derived badge, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementBadge {
    pub kind: AchievementKind,
    pub label: String,
    pub description: String,
    pub color: ColorTag,
    pub icon: &'static str,
}

impl From<AchievementKind> for AchievementBadge {
    fn from(kind: AchievementKind) -> Self {
        Self {
            kind,
            label: kind.label(),
            description: kind.description(),
            color: kind.color(),
            icon: kind.icon(),
        }
    }
}
