//! Static preference catalog.

use crate::color::ColorTag;

/// Static definition of a preference tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceCatalogEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: ColorTag,
}

/// All preference tags in display order.
pub const PREFERENCE_CATALOG: &[PreferenceCatalogEntry] = &[
    PreferenceCatalogEntry {
        id: "lol",
        label: "League of Legends",
        icon: "⚔",
        color: ColorTag::Blue,
    },
    PreferenceCatalogEntry {
        id: "dota2",
        label: "Dota 2",
        icon: "🛡",
        color: ColorTag::Red,
    },
    PreferenceCatalogEntry {
        id: "csgo",
        label: "CS:GO",
        icon: "🎯",
        color: ColorTag::Yellow,
    },
    PreferenceCatalogEntry {
        id: "valorant",
        label: "Valorant",
        icon: "✦",
        color: ColorTag::Pink,
    },
    PreferenceCatalogEntry {
        id: "pubg",
        label: "PUBG",
        icon: "🪂",
        color: ColorTag::Orange,
    },
    PreferenceCatalogEntry {
        id: "apex",
        label: "Apex Legends",
        icon: "▲",
        color: ColorTag::Red,
    },
    PreferenceCatalogEntry {
        id: "overwatch",
        label: "Overwatch",
        icon: "◎",
        color: ColorTag::Orange,
    },
    PreferenceCatalogEntry {
        id: "fortnite",
        label: "Fortnite",
        icon: "🏗",
        color: ColorTag::Purple,
    },
    PreferenceCatalogEntry {
        id: "minecraft",
        label: "Minecraft",
        icon: "⛏",
        color: ColorTag::Green,
    },
    PreferenceCatalogEntry {
        id: "genshin",
        label: "Genshin Impact",
        icon: "✧",
        color: ColorTag::Blue,
    },
];

/// Look up a catalog entry by id.
pub fn find_entry(id: &str) -> Option<&'static PreferenceCatalogEntry> {
    PREFERENCE_CATALOG.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_entries() {
        assert_eq!(PREFERENCE_CATALOG.len(), 10);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        use std::collections::HashSet;
        let mut ids = HashSet::new();
        for entry in PREFERENCE_CATALOG {
            assert!(ids.insert(entry.id), "Duplicate tag id: {}", entry.id);
        }
    }

    #[test]
    fn test_lol_precedes_dota2() {
        let lol = PREFERENCE_CATALOG.iter().position(|e| e.id == "lol");
        let dota = PREFERENCE_CATALOG.iter().position(|e| e.id == "dota2");
        assert!(lol < dota);
    }

    #[test]
    fn test_find_entry() {
        let entry = find_entry("minecraft").unwrap();
        assert_eq!(entry.label, "Minecraft");
        assert_eq!(entry.color, ColorTag::Green);
        assert!(find_entry("chess").is_none());
    }
}
