use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use crate::app::StatusType;
use crate::shared::UiTheme;

/// Bordered block with a styled title; focused blocks use the accent border.
pub fn titled_block<'a>(title: String, focused: bool, theme: &UiTheme) -> Block<'a> {
    let border_style = if focused {
        theme.focused_border_style()
    } else {
        theme.border_style()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(title, theme.header_style()))
}

/// Key-hint pair for the footer, e.g. "[Enter] Generate".
pub fn key_hint<'a>(key: &'a str, label: &'a str, theme: &UiTheme) -> Vec<Span<'a>> {
    vec![
        Span::styled(format!("[{key}]"), theme.header_style()),
        Span::styled(format!(" {label}  "), theme.secondary_text_style()),
    ]
}

/// Style for a status message type.
pub fn status_style(status_type: StatusType, theme: &UiTheme) -> Style {
    match status_type {
        StatusType::Info => theme.info_style(),
        StatusType::Success => theme.success_style(),
        StatusType::Warning => theme.warning_style(),
        StatusType::Error => theme.danger_style(),
    }
}

/// Centered rectangle used by the help overlay.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, parent);

        assert!(inner.x >= parent.x);
        assert!(inner.y >= parent.y);
        assert!(inner.right() <= parent.right());
        assert!(inner.bottom() <= parent.bottom());
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
    }

    #[test]
    fn test_key_hint_spans() {
        let theme = UiTheme::default();
        let spans = key_hint("Enter", "Generate", &theme);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content.as_ref(), "[Enter]");
    }
}
