//! Semantic color tags shared by catalog entries and badges.

use serde::{Deserialize, Serialize};

/// Color class attached to a tag or badge. The rendering layer decides the
/// actual terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Red,
    Yellow,
    Pink,
    Green,
    Purple,
    Orange,
}

impl ColorTag {
    pub const ALL: [ColorTag; 7] = [
        ColorTag::Blue,
        ColorTag::Red,
        ColorTag::Yellow,
        ColorTag::Pink,
        ColorTag::Green,
        ColorTag::Purple,
        ColorTag::Orange,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorTag::Blue => "blue",
            ColorTag::Red => "red",
            ColorTag::Yellow => "yellow",
            ColorTag::Pink => "pink",
            ColorTag::Green => "green",
            ColorTag::Purple => "purple",
            ColorTag::Orange => "orange",
        }
    }
}
