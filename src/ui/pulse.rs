//! Time source and styling for looping pulse animations.

use crate::color::ColorTag;
use crate::streak::Pulse;
use crate::ui::palette::{highlight_color, tag_color};
use ratatui::style::{Modifier, Style};
use std::time::{SystemTime, UNIX_EPOCH};

/// Sparkle glyphs cycled around a pulsing badge.
const SPARKS: [&str; 4] = ["·", "✦", "✧", "✦"];

/// Returns the current time in milliseconds since UNIX epoch.
pub fn current_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Style for a badge with color `tag` at the given pulse phase.
pub fn pulse_style(pulse: &Pulse, tag: ColorTag, elapsed_ms: u64) -> Style {
    let intensity = pulse.intensity(elapsed_ms);
    if intensity >= 0.5 {
        Style::default()
            .fg(highlight_color(tag))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(tag_color(tag))
    }
}

/// Decorative glyph drawn on both sides of a pulsing badge.
pub fn spark(pulse: &Pulse, elapsed_ms: u64) -> &'static str {
    let intensity = pulse.intensity(elapsed_ms);
    let idx = ((intensity * (SPARKS.len() - 1) as f64).round() as usize).min(SPARKS.len() - 1);
    SPARKS[idx]
}
