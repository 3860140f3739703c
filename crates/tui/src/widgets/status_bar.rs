//! The single-row footer: keybinding hints, or the carry message.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// `(key, action)` pairs shown while browsing the board.
const BOARD_HINTS: &[(&str, &str)] = &[
    ("←→↑↓", "Navigate"),
    ("Space", "Carry"),
    ("Enter", "Details"),
    ("a", "Archive"),
    ("?", "Help"),
    ("Ctrl+C", "Quit"),
];

/// The two keys that end a carry.
const CARRY_HINTS: &[(&str, &str)] = &[("Space", "Drop"), ("Esc", "Cancel")];

/// Yellow keys, dim actions, two spaces between entries.
fn hint_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key = Style::default().fg(Color::Yellow);
    let text = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (binding, action)) in hints.iter().enumerate() {
        let tail = if i + 1 == hints.len() { "" } else { "  " };
        spans.push(Span::styled(*binding, key));
        spans.push(Span::styled(format!(" {action}{tail}"), text));
    }
    spans
}

/// Renders the borderless hint row listing the board keybindings.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tack_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(area, &mut buf);
/// ```
pub fn render_status_bar(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(hint_spans(BOARD_HINTS))).render(area, buf);
}

/// Renders the hint row during a carry.
///
/// The left side announces what is being held; the hints shrink to the
/// two keys that end the gesture.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tack_tui::widgets::status_bar::render_status_bar_with_message;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar_with_message("Carrying \"Fix login\"", area, &mut buf);
/// ```
pub fn render_status_bar_with_message(message: &str, area: Rect, buf: &mut Buffer) {
    let mut spans = vec![
        Span::styled(
            message,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
    ];
    spans.extend(hint_spans(CARRY_HINTS));

    Paragraph::new(Line::from(spans)).render(area, buf);
}
