//! Keybinding reference overlay.
//!
//! Pressing `?` opens this panel on top of the board; any other key
//! closes it again.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Outer width of the help panel, borders included.
const HELP_WIDTH: u16 = 37;

/// Outer height of the help panel, borders included.
const HELP_HEIGHT: u16 = 18;

/// Width of the key column, not counting the two-space indent.
const KEY_COLUMN: usize = 11;

/// Keybinding sections shown in the overlay, in display order.
const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("←", "Move left"),
            ("→", "Move right"),
            ("↑", "Select previous"),
            ("↓", "Select next"),
        ],
    ),
    (
        "Actions",
        &[
            ("Space", "Carry / drop task"),
            ("Enter", "Open details"),
            ("a", "Archive task"),
            ("Esc", "Cancel / close"),
            ("Ctrl+C", "Quit"),
            ("?", "Toggle help"),
        ],
    ),
];

/// Renders the keybinding reference as an overlay centered in `area`.
///
/// The cells behind the panel are cleared first so board content does
/// not bleed through, then a bordered panel lists every binding from
/// [`BINDINGS`] grouped by section.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tack_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let panel = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    // Erase whatever the board drew underneath the panel.
    Clear.render(panel, buf);

    let accent = Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);
    let block = Block::default()
        .title(Span::styled(" Help ", accent))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(block)
        .alignment(Alignment::Left)
        .render(panel, buf);
}

/// Formats one key/action row with the key in a fixed-width column.
fn binding_row(key: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {key:<KEY_COLUMN$}"),
            Style::default().fg(Color::Green),
        ),
        Span::styled(action.to_owned(), Style::default().fg(Color::White)),
    ])
}

/// Expands [`BINDINGS`] into the lines the panel displays.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = Vec::with_capacity(16);
    for (title, rows) in BINDINGS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {title}"), header_style)));
        for (key, action) in *rows {
            lines.push(binding_row(key, action));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        hint_style,
    )));
    lines
}

/// Centers a `width` x `height` rectangle within `area`, shrinking it
/// when the area is smaller than the requested size.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    // The subtractions cannot underflow once the size is clamped.
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;

    Rect::new(x, y, width, height)
}
