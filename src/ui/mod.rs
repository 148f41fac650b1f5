pub mod achievement_badges;
pub mod flow;
pub mod palette;
pub mod preference_tags;
pub mod pulse;
pub mod streak_badge;
pub mod tooltip;

use crate::achievements::BadgeShelf;
use crate::preferences::TagView;
use crate::streak::StreakBadge;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything drawn on the profile page for one frame.
#[derive(Debug, Clone)]
pub struct ProfilePageView {
    pub name: String,
    pub streak: StreakBadge,
    pub tags: Option<Vec<TagView>>,
    pub tag_focus: Option<usize>,
    pub shelf: Option<BadgeShelf>,
    pub badge_focus: Option<usize>,
    pub elapsed_ms: u64,
}

/// Main UI drawing function for the profile page.
pub fn draw_profile_page(frame: &mut Frame, view: &ProfilePageView) {
    let size = frame.size();

    let block = Block::default()
        .title(format!(" {} ", view.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let tags_height = preference_tags::tags_height(view.tags.as_deref(), inner.width);
    let shelf_height = achievement_badges::shelf_height(view.shelf.as_ref(), inner.width);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(streak_badge::streak_height(&view.streak)), // Streak
            Constraint::Length(1),                                         // Spacer
            Constraint::Length(tags_height),                               // Tags
            Constraint::Length(shelf_height),                              // Badges + tooltip
            Constraint::Min(0),
            Constraint::Length(1), // Help
        ])
        .split(inner);

    streak_badge::render_streak_badge(frame, chunks[0], &view.streak, view.elapsed_ms);
    preference_tags::render_preference_tags(frame, chunks[2], view.tags.as_deref(), view.tag_focus);
    achievement_badges::render_achievement_badges(
        frame,
        chunks[3],
        view.shelf.as_ref(),
        view.badge_focus,
    );

    let help = Paragraph::new(
        "[Tab] Section  [</>] Move  [Space] Toggle  [e] Edit  [+/-] Streak  [q] Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}
