//! Preference tag row.

use crate::preferences::TagView;
use crate::ui::flow::{flow, flow_lines, row_count};
use crate::ui::palette::tag_color;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One chip per tag. `focused` is only honored for interactive tags.
pub fn tag_spans(tags: &[TagView], focused: Option<usize>) -> Vec<Span<'static>> {
    tags.iter()
        .enumerate()
        .map(|(i, tag)| {
            let mut style = if tag.is_selected() {
                Style::default()
                    .fg(tag_color(tag.entry.color))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if tag.interactive && focused == Some(i) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let check = match (tag.interactive, tag.is_selected()) {
                (true, true) => "✓ ",
                (true, false) => "+ ",
                (false, _) => "",
            };

            Span::styled(
                format!("[{}{} {}]", check, tag.entry.icon, tag.entry.label),
                style,
            )
        })
        .collect()
}

/// Rows the bordered tag block needs at `width` columns, 0 for `None`.
pub fn tags_height(tags: Option<&[TagView]>, width: u16) -> u16 {
    let Some(tags) = tags else {
        return 0;
    };
    let widths: Vec<u16> = tag_spans(tags, None)
        .iter()
        .map(|s| s.width() as u16)
        .collect();
    let positions = flow(&widths, width.saturating_sub(2));
    row_count(&positions) + 2
}

/// Draw the tag row. `None` draws nothing, not even the frame.
pub fn render_preference_tags(
    frame: &mut Frame,
    area: Rect,
    tags: Option<&[TagView]>,
    focused: Option<usize>,
) {
    let Some(tags) = tags else {
        return;
    };

    let editable = tags.iter().any(|t| t.interactive);
    let block = Block::default()
        .title(if editable { " Games (editing) " } else { " Games " })
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editable {
            Color::Cyan
        } else {
            Color::DarkGray
        }));

    let inner = block.inner(area);
    let (lines, _) = flow_lines(tag_spans(tags, focused), inner.width);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::TagSelector;
    use std::collections::HashSet;

    #[test]
    fn test_read_only_spans_have_no_markers() {
        let prefs: HashSet<String> = ["lol".to_string()].into_iter().collect();
        let tags = TagSelector::new(&prefs, false).tags().unwrap();
        let spans = tag_spans(&tags, Some(0));
        assert_eq!(spans.len(), 1);
        assert!(spans[0].content.contains("League of Legends"));
        assert!(!spans[0].content.contains('✓'));
        assert!(!spans[0].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_editable_spans_mark_selection_and_focus() {
        let prefs: HashSet<String> = ["dota2".to_string()].into_iter().collect();
        let tags = TagSelector::new(&prefs, true).tags().unwrap();
        let spans = tag_spans(&tags, Some(0));
        assert_eq!(spans.len(), 10);
        assert!(spans[0].content.starts_with("[+ "));
        assert!(spans[0].style.add_modifier.contains(Modifier::REVERSED));
        assert!(spans[1].content.starts_with("[✓ "));
        assert_eq!(spans[1].style.fg, Some(Color::Red));
    }

    #[test]
    fn test_height_grows_as_width_shrinks() {
        let prefs = HashSet::new();
        let tags = TagSelector::new(&prefs, true).tags().unwrap();
        let wide = tags_height(Some(&tags), 400);
        let narrow = tags_height(Some(&tags), 40);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
        assert_eq!(tags_height(None, 80), 0);
    }
}
