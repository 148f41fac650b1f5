//! Preference tag selector.
//!
//! Read-only mode shows only the tags a user picked. Editable mode shows the
//! whole catalog with selection state and forwards clicks to `on_toggle`.

use super::catalog::{find_entry, PreferenceCatalogEntry, PREFERENCE_CATALOG};
use std::collections::HashSet;
use tracing::debug;

/// Visual state of a displayed tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagState {
    Selected,
    Unselected,
}

/// One tag as the rendering layer should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagView {
    pub entry: &'static PreferenceCatalogEntry,
    pub state: TagState,
    /// Only editable tags react to clicks.
    pub interactive: bool,
}

impl TagView {
    pub fn is_selected(&self) -> bool {
        self.state == TagState::Selected
    }
}

pub struct TagSelector<'a> {
    preferences: &'a HashSet<String>,
    editable: bool,
    on_toggle: Option<Box<dyn FnMut(&str) + 'a>>,
}

impl std::fmt::Debug for TagSelector<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagSelector")
            .field("preferences", &self.preferences)
            .field("editable", &self.editable)
            .field("has_on_toggle", &self.on_toggle.is_some())
            .finish()
    }
}

impl<'a> TagSelector<'a> {
    pub fn new(preferences: &'a HashSet<String>, editable: bool) -> Self {
        Self {
            preferences,
            editable,
            on_toggle: None,
        }
    }

    /// Attach the toggle callback. It receives the clicked tag id.
    pub fn on_toggle(mut self, callback: impl FnMut(&str) + 'a) -> Self {
        self.on_toggle = Some(Box::new(callback));
        self
    }

    /// Catalog entries present in the user's preferences, in catalog order.
    /// Ids that are not in the catalog are ignored.
    pub fn selected(&self) -> Vec<&'static PreferenceCatalogEntry> {
        PREFERENCE_CATALOG
            .iter()
            .filter(|entry| self.preferences.contains(entry.id))
            .collect()
    }

    /// Tags to display, or `None` when nothing should be drawn at all.
    pub fn tags(&self) -> Option<Vec<TagView>> {
        if self.editable {
            let tags = PREFERENCE_CATALOG
                .iter()
                .map(|entry| TagView {
                    entry,
                    state: if self.preferences.contains(entry.id) {
                        TagState::Selected
                    } else {
                        TagState::Unselected
                    },
                    interactive: true,
                })
                .collect();
            return Some(tags);
        }

        let selected = self.selected();
        if selected.is_empty() {
            return None;
        }

        Some(
            selected
                .into_iter()
                .map(|entry| TagView {
                    entry,
                    state: TagState::Selected,
                    interactive: false,
                })
                .collect(),
        )
    }

    /// Handle a click on a tag. Returns true if the toggle callback fired.
    pub fn click(&mut self, id: &str) -> bool {
        if !self.editable {
            debug!(id, "ignoring click on read-only tag");
            return false;
        }
        if find_entry(id).is_none() {
            debug!(id, "ignoring click on unknown tag");
            return false;
        }

        match self.on_toggle.as_mut() {
            Some(callback) => {
                debug!(id, "tag toggle requested");
                callback(id);
                true
            }
            None => false,
        }
    }
}

/// Keyboard focus over a row of tags or badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusCursor {
    pub index: usize,
}

impl FocusCursor {
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        self.index = (self.index + 1) % len;
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        self.index = if self.index == 0 {
            len - 1
        } else {
            self.index - 1
        };
    }

    /// Keep the cursor inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
    }

    pub fn focused_id(&self, tags: &[TagView]) -> Option<&'static str> {
        tags.get(self.index).map(|t| t.entry.id)
    }
}
