//! Achievement badge row with overflow marker and tooltip.

use crate::achievements::BadgeShelf;
use crate::ui::flow::{flow, flow_lines, row_count, FlowPosition};
use crate::ui::palette::tag_color;
use crate::ui::tooltip::{render_tooltip, tooltip_area, TOOLTIP_HEIGHT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

/// One chip per visible badge, then the overflow marker if any.
pub fn badge_spans(shelf: &BadgeShelf, focused: Option<usize>) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = shelf
        .visible
        .iter()
        .enumerate()
        .map(|(i, badge)| {
            let mut style = Style::default()
                .fg(tag_color(badge.color))
                .add_modifier(Modifier::BOLD);
            if focused == Some(i) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Span::styled(format!("{} {}", badge.icon, badge.label), style)
        })
        .collect();

    if let Some(overflow) = shelf.overflow_label() {
        spans.push(Span::styled(overflow, Style::default().fg(Color::DarkGray)));
    }

    spans
}

/// Rows needed at `width` columns: the wrapped badges plus tooltip room.
/// 0 for `None`.
pub fn shelf_height(shelf: Option<&BadgeShelf>, width: u16) -> u16 {
    let Some(shelf) = shelf else {
        return 0;
    };
    let widths: Vec<u16> = badge_spans(shelf, None)
        .iter()
        .map(|s| s.width() as u16)
        .collect();
    row_count(&flow(&widths, width)) + TOOLTIP_HEIGHT
}

/// Draw the badge row. The focused badge shows its tooltip underneath.
/// `None` draws nothing.
pub fn render_achievement_badges(
    frame: &mut Frame,
    area: Rect,
    shelf: Option<&BadgeShelf>,
    focused: Option<usize>,
) {
    let Some(shelf) = shelf else {
        return;
    };
    if area.height == 0 {
        return;
    }

    let (lines, positions) = flow_lines(badge_spans(shelf, focused), area.width);
    let rows = Rect {
        height: (lines.len() as u16).min(area.height),
        ..area
    };
    frame.render_widget(Paragraph::new(lines), rows);

    let Some(index) = focused else {
        return;
    };
    let (Some(text), Some(FlowPosition { row, col })) =
        (shelf.tooltip(index), positions.get(index).copied())
    else {
        return;
    };

    let anchor = Rect {
        x: area.x.saturating_add(col),
        y: area.y.saturating_add(row),
        width: 1,
        height: 1,
    };
    if let Some(tip) = tooltip_area(anchor, text.chars().count() as u16, area) {
        render_tooltip(frame, tip, text);
    }
}
