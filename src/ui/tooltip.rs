//! Minimal tooltip popup.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rows a one-line tooltip occupies, borders included.
pub const TOOLTIP_HEIGHT: u16 = 3;

/// Area for a one-line tooltip below `anchor`, kept inside `bounds`.
/// Returns `None` when there is no room.
pub fn tooltip_area(anchor: Rect, text_width: u16, bounds: Rect) -> Option<Rect> {
    let width = text_width.saturating_add(2).min(bounds.width);
    let height = TOOLTIP_HEIGHT;
    let y = anchor.y.saturating_add(anchor.height);
    if width < 3 || y.saturating_add(height) > bounds.y.saturating_add(bounds.height) {
        return None;
    }
    let max_x = bounds.x + bounds.width - width;
    let x = anchor.x.clamp(bounds.x, max_x);
    Some(Rect {
        x,
        y,
        width,
        height,
    })
}

pub fn render_tooltip(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(Clear, area);
    let tooltip = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(tooltip, area);
}
