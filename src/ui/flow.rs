//! Flow layout for rows of chips.
//!
//! Items are never split: an item that does not fit on the current row
//! starts the next one. Items on a row are separated by one space.

use ratatui::text::{Line, Span};

/// Where an item landed, relative to the flow area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowPosition {
    pub row: u16,
    pub col: u16,
}

/// Place items of the given widths into rows at most `max_width` wide.
pub fn flow(widths: &[u16], max_width: u16) -> Vec<FlowPosition> {
    let mut positions = Vec::with_capacity(widths.len());
    let (mut row, mut col) = (0u16, 0u16);

    for &width in widths {
        if col > 0 {
            if col.saturating_add(1).saturating_add(width) > max_width {
                row += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        positions.push(FlowPosition { row, col });
        col = col.saturating_add(width);
    }

    positions
}

/// Rows used by a flow, 0 for no items.
pub fn row_count(positions: &[FlowPosition]) -> u16 {
    positions.last().map_or(0, |p| p.row + 1)
}

/// Flow styled items into lines, returning each item's position.
pub fn flow_lines(
    items: Vec<Span<'static>>,
    max_width: u16,
) -> (Vec<Line<'static>>, Vec<FlowPosition>) {
    let widths: Vec<u16> = items.iter().map(|s| s.width() as u16).collect();
    let positions = flow(&widths, max_width);

    let mut rows: Vec<Vec<Span<'static>>> = vec![Vec::new(); row_count(&positions) as usize];
    for (item, pos) in items.into_iter().zip(&positions) {
        let row = &mut rows[pos.row as usize];
        if !row.is_empty() {
            row.push(Span::raw(" "));
        }
        row.push(item);
    }

    (rows.into_iter().map(Line::from).collect(), positions)
}
