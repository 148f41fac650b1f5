//! Game-preference tags.
//!
//! A fixed catalog of game tags and a selector that projects a user's
//! preference ids onto it. The selector never mutates preferences; toggles
//! are reported to the caller through a callback.

pub mod catalog;
pub mod selector;

pub use catalog::{find_entry, PreferenceCatalogEntry, PREFERENCE_CATALOG};
pub use selector::{FocusCursor, TagSelector, TagState, TagView};
