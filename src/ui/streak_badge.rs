//! Streak badge widget.

use crate::streak::{StreakBadge, StreakKind, StreakSize};
use crate::ui::palette::tag_color;
use crate::ui::pulse::{pulse_style, spark};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn icon(kind: StreakKind) -> &'static str {
    match kind {
        StreakKind::Neutral => "•",
        StreakKind::Win => "▲",
        StreakKind::Loss => "▼",
    }
}

/// Lines for a streak badge at `elapsed_ms` into its animation.
pub fn streak_lines(badge: &StreakBadge, elapsed_ms: u64) -> Vec<Line<'static>> {
    let pad = " ".repeat(badge.size.padding() as usize);

    let style = match (badge.pulse, badge.color) {
        (Some(pulse), Some(color)) => pulse_style(&pulse, color, elapsed_ms),
        (None, Some(color)) => Style::default()
            .fg(tag_color(color))
            .add_modifier(Modifier::BOLD),
        (_, None) => Style::default().fg(Color::DarkGray),
    };

    let mut main = Vec::new();
    if let Some(pulse) = badge.pulse {
        main.push(Span::styled(format!("{} ", spark(&pulse, elapsed_ms)), style));
    }
    main.push(Span::styled(
        format!("{}{} {}{}", pad, icon(badge.kind), badge.label(), pad),
        style,
    ));
    if let Some(pulse) = badge.pulse {
        main.push(Span::styled(format!(" {}", spark(&pulse, elapsed_ms)), style));
    }

    let mut lines = vec![Line::from(main)];
    if let Some(sub_label) = badge.sub_label {
        lines.push(Line::from(Span::styled(
            format!("{}{}", pad, sub_label),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

/// Rows the badge needs for its size.
pub fn streak_height(badge: &StreakBadge) -> u16 {
    let content = if badge.sub_label.is_some() { 2 } else { 1 };
    match badge.size {
        StreakSize::Lg => content + 2,
        _ => content,
    }
}

pub fn render_streak_badge(frame: &mut Frame, area: Rect, badge: &StreakBadge, elapsed_ms: u64) {
    let mut para = Paragraph::new(streak_lines(badge, elapsed_ms)).alignment(Alignment::Left);

    if badge.size == StreakSize::Lg {
        let border = badge.color.map(tag_color).unwrap_or(Color::DarkGray);
        para = para.block(
            Block::default()
                .title(" Streak ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    }

    frame.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_neutral_single_line() {
        let lines = streak_lines(&StreakBadge::new(0, StreakSize::Md), 0);
        assert_eq!(text(&lines), vec![" • No streak "]);
    }

    #[test]
    fn test_loss_without_sub_label() {
        let lines = streak_lines(&StreakBadge::new(-3, StreakSize::Sm), 0);
        assert_eq!(text(&lines), vec!["▼ L3"]);
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Red));
    }

    #[test]
    fn test_hot_win_has_sparks_and_sub_label() {
        let badge = StreakBadge::new(7, StreakSize::Md);
        let lines = streak_lines(&badge, 750);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans.len(), 3);
        assert!(text(&lines)[0].contains("7 Win streak"));
        assert!(text(&lines)[1].contains("On fire!"));
    }

    #[test]
    fn test_heights() {
        assert_eq!(streak_height(&StreakBadge::new(0, StreakSize::Sm)), 1);
        assert_eq!(streak_height(&StreakBadge::new(9, StreakSize::Md)), 2);
        assert_eq!(streak_height(&StreakBadge::new(9, StreakSize::Lg)), 4);
    }
}
