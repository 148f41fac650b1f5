//! Terminal colors for semantic color tags.

use crate::color::ColorTag;
use ratatui::style::Color;

pub fn tag_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Blue => Color::Blue,
        ColorTag::Red => Color::Red,
        ColorTag::Yellow => Color::Yellow,
        ColorTag::Pink => Color::LightMagenta,
        ColorTag::Green => Color::Green,
        ColorTag::Purple => Color::Magenta,
        ColorTag::Orange => Color::Rgb(255, 140, 0),
    }
}

/// Brighter variant used at the peak of a pulse.
pub fn highlight_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Blue => Color::LightBlue,
        ColorTag::Red => Color::LightRed,
        ColorTag::Yellow => Color::LightYellow,
        ColorTag::Pink => Color::White,
        ColorTag::Green => Color::LightGreen,
        ColorTag::Purple => Color::LightMagenta,
        ColorTag::Orange => Color::Rgb(255, 190, 90),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tag_has_distinct_highlight() {
        for tag in ColorTag::ALL {
            assert_ne!(tag_color(tag), highlight_color(tag), "{:?}", tag);
        }
    }
}
