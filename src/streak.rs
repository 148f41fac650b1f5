//! Win/loss streak indicator.
//!
//! Maps a signed streak count to a badge description. Positive values are
//! win streaks, negative values are loss streaks, zero is neutral.

use crate::color::ColorTag;
use crate::constants::{PULSE_PERIOD_MS, STREAK_HOT_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Badge size, controls padding and label form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl StreakSize {
    pub const ALL: [StreakSize; 3] = [StreakSize::Sm, StreakSize::Md, StreakSize::Lg];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sm" => Some(StreakSize::Sm),
            "md" => Some(StreakSize::Md),
            "lg" => Some(StreakSize::Lg),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StreakSize::Sm => "sm",
            StreakSize::Md => "md",
            StreakSize::Lg => "lg",
        }
    }

    /// Horizontal padding on each side of the label.
    pub fn padding(&self) -> u16 {
        match self {
            StreakSize::Sm => 0,
            StreakSize::Md => 1,
            StreakSize::Lg => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakKind {
    Neutral,
    Win,
    Loss,
}

/// Looping emphasis drawn around a hot win streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub period_ms: u64,
}

impl Pulse {
    /// Intensity in `0.0..=1.0` at `elapsed_ms`. Rises and falls once per
    /// period with ease-in-out on both halves, repeating forever.
    pub fn intensity(&self, elapsed_ms: u64) -> f64 {
        if self.period_ms == 0 {
            return 0.0;
        }
        let t = (elapsed_ms % self.period_ms) as f64 / self.period_ms as f64;
        let tri = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
        ease_in_out(tri)
    }
}

fn ease_in_out(x: f64) -> f64 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
    }
}

/// Everything the rendering layer needs to draw a streak badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakBadge {
    pub kind: StreakKind,
    pub magnitude: u64,
    pub size: StreakSize,
    pub color: Option<ColorTag>,
    pub sub_label: Option<&'static str>,
    pub pulse: Option<Pulse>,
}

impl StreakBadge {
    pub fn new(streak: i64, size: StreakSize) -> Self {
        if streak == 0 {
            return Self {
                kind: StreakKind::Neutral,
                magnitude: 0,
                size,
                color: None,
                sub_label: None,
                pulse: None,
            };
        }

        let is_win = streak > 0;
        let magnitude = streak.unsigned_abs();
        let hot = magnitude >= STREAK_HOT_THRESHOLD;

        let sub_label = match (hot, is_win) {
            (true, true) => Some("On fire! Keep it up!"),
            (true, false) => Some("Hang in there, the tide will turn!"),
            (false, _) => None,
        };

        Self {
            kind: if is_win {
                StreakKind::Win
            } else {
                StreakKind::Loss
            },
            magnitude,
            size,
            color: Some(if is_win {
                ColorTag::Green
            } else {
                ColorTag::Red
            }),
            sub_label,
            pulse: (hot && is_win).then_some(Pulse {
                period_ms: PULSE_PERIOD_MS,
            }),
        }
    }

    pub fn direction_label(&self) -> &'static str {
        match self.kind {
            StreakKind::Neutral => "No streak",
            StreakKind::Win => "Win streak",
            StreakKind::Loss => "Loss streak",
        }
    }

    /// Main badge text for the configured size.
    pub fn label(&self) -> String {
        match (self.kind, self.size) {
            (StreakKind::Neutral, StreakSize::Sm) => "-".to_string(),
            (StreakKind::Neutral, _) => self.direction_label().to_string(),
            (StreakKind::Win, StreakSize::Sm) => format!("W{}", self.magnitude),
            (StreakKind::Loss, StreakSize::Sm) => format!("L{}", self.magnitude),
            _ => format!("{} {}", self.magnitude, self.direction_label()),
        }
    }
}
