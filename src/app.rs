//! Profile page host state.
//!
//! The host owns the preference set. Widgets only read it; toggles come back
//! as intents and are applied here once the selector is dropped.

use crate::achievements::{derive_badges, BadgeShelf};
use crate::config::AppConfig;
use crate::preferences::{FocusCursor, TagSelector, TagView};
use crate::profile::ProfileFixture;
use crate::streak::{StreakBadge, StreakSize};
use crate::ui::ProfilePageView;
use chrono::{DateTime, Utc};
use crossterm::event::KeyCode;
use std::collections::HashSet;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Tags,
    Badges,
}

#[derive(Debug, Clone)]
pub struct App {
    pub profile: ProfileFixture,
    pub preferences: HashSet<String>,
    pub streak: i64,
    pub editable: bool,
    pub size: StreakSize,
    pub section: Section,
    pub tag_cursor: FocusCursor,
    pub badge_cursor: FocusCursor,
}

impl App {
    pub fn new(profile: ProfileFixture, config: &AppConfig) -> Self {
        Self {
            preferences: profile.preference_set(),
            streak: profile.streak,
            editable: config.editable,
            size: config.size,
            section: Section::Tags,
            tag_cursor: FocusCursor::default(),
            badge_cursor: FocusCursor::default(),
            profile,
        }
    }

    pub fn tags(&self) -> Option<Vec<TagView>> {
        TagSelector::new(&self.preferences, self.editable).tags()
    }

    pub fn shelf(&self, now: DateTime<Utc>) -> Option<BadgeShelf> {
        BadgeShelf::new(derive_badges(&self.profile.stats, now))
    }

    pub fn view(&self, now: DateTime<Utc>, elapsed_ms: u64) -> ProfilePageView {
        let tags = self.tags();
        let tag_focus = (self.editable && self.section == Section::Tags && tags.is_some())
            .then_some(self.tag_cursor.index);
        let shelf = self.shelf(now);
        let badge_focus =
            (self.section == Section::Badges && shelf.is_some()).then_some(self.badge_cursor.index);

        ProfilePageView {
            name: self.profile.name().to_string(),
            streak: StreakBadge::new(self.streak, self.size),
            tags,
            tag_focus,
            shelf,
            badge_focus,
            elapsed_ms,
        }
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, now: DateTime<Utc>) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => {
                self.section = match self.section {
                    Section::Tags => Section::Badges,
                    Section::Badges => Section::Tags,
                };
            }
            KeyCode::Char('e') => {
                self.editable = !self.editable;
                self.tag_cursor.clamp(self.tag_count());
                info!(editable = self.editable, "switched tag edit mode");
            }
            KeyCode::Left => match self.section {
                Section::Tags => self.tag_cursor.prev(self.tag_count()),
                Section::Badges => self.badge_cursor.prev(self.badge_count(now)),
            },
            KeyCode::Right => match self.section {
                Section::Tags => self.tag_cursor.next(self.tag_count()),
                Section::Badges => self.badge_cursor.next(self.badge_count(now)),
            },
            KeyCode::Char(' ') | KeyCode::Enter if self.section == Section::Tags => {
                self.click_focused_tag();
            }
            KeyCode::Char('+') => self.streak = self.streak.saturating_add(1),
            KeyCode::Char('-') => self.streak = self.streak.saturating_sub(1),
            _ => {}
        }
        false
    }

    fn tag_count(&self) -> usize {
        self.tags().map_or(0, |t| t.len())
    }

    fn badge_count(&self, now: DateTime<Utc>) -> usize {
        self.shelf(now).map_or(0, |s| s.visible.len())
    }

    /// Click the focused tag and apply any toggle it produced.
    pub fn click_focused_tag(&mut self) {
        let mut intents = Vec::new();
        {
            let tags = self.tags().unwrap_or_default();
            let Some(id) = self.tag_cursor.focused_id(&tags) else {
                return;
            };
            let mut selector = TagSelector::new(&self.preferences, self.editable)
                .on_toggle(|toggled| intents.push(toggled.to_string()));
            selector.click(id);
        }

        for id in intents {
            self.apply_toggle(id);
        }
    }

    fn apply_toggle(&mut self, id: String) {
        if self.preferences.remove(&id) {
            info!(%id, "removed game preference");
        } else {
            info!(%id, "added game preference");
            self.preferences.insert(id);
        }
    }
}
