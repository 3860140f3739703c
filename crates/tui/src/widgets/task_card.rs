//! A single card on the board: the task name over a metadata line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tack_protocol::{Priority, Task};

use crate::style::BoardStyle;

/// The color a priority renders in, everywhere one is shown.
///
/// - `Low`: Gray - can wait
/// - `Medium`: Blue - the everyday default
/// - `High`: Yellow - should happen soon
/// - `Urgent`: Red - on fire
///
/// # Examples
///
/// ```
/// use tack_protocol::Priority;
/// use tack_tui::widgets::priority_color;
/// use ratatui::style::Color;
///
/// assert_eq!(priority_color(Priority::Low), Color::DarkGray);
/// assert_eq!(priority_color(Priority::Medium), Color::Blue);
/// assert_eq!(priority_color(Priority::High), Color::Yellow);
/// assert_eq!(priority_color(Priority::Urgent), Color::Red);
/// ```
#[must_use]
pub const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::DarkGray,
        Priority::Medium => Color::Blue,
        Priority::High => Color::Yellow,
        Priority::Urgent => Color::Red,
    }
}

/// Draws one task card into `area`.
///
/// Two lines inside a border: the task name, then the priority and (when
/// set) the due date. The border tells the user where they are in the
/// current gesture: yellow for the card being carried, the accent color
/// for the selected card, dim for everything else.
///
/// ```text
/// +----------------+
/// | Name           |
/// | Medium · Sep 03|
/// +----------------+
/// ```
pub fn render_task_card(
    task: &Task,
    is_selected: bool,
    is_carried: bool,
    style: &BoardStyle,
    area: Rect,
    buf: &mut Buffer,
) {
    // No room for a border plus a line of text
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_color, name_style) = match (is_carried, is_selected) {
        (true, _) => (
            Color::Yellow,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        (false, true) => (
            style.accent,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        (false, false) => (style.dim, Style::default().fg(Color::White)),
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let name = clip(&task.name, inner_width);

    let mut metadata = vec![Span::styled(
        task.priority.display_name(),
        Style::default().fg(priority_color(task.priority)),
    )];
    if let Some(due) = task.due_date {
        metadata.push(Span::styled(
            format!(" \u{b7} {}", due.format("%b %d")),
            Style::default().fg(style.dim),
        ));
    }

    let content = vec![Line::from(Span::styled(name, name_style)), Line::from(metadata)];

    let card = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    card.render(area, buf);
}

/// Clips `text` to at most `max_width` characters, marking the cut with
/// an ellipsis when there is room for one.
fn clip(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_owned();
    }
    match max_width {
        0..=3 => text.chars().take(max_width).collect(),
        _ => {
            let kept: String = text.chars().take(max_width - 3).collect();
            format!("{kept}...")
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::test_utils::buffer_to_string;

    fn rendered(task: &Task, selected: bool, carried: bool, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        render_task_card(task, selected, carried, &BoardStyle::default(), area, &mut buf);
        buf
    }

    #[test]
    fn clipping_leaves_short_names_alone() {
        assert_eq!(clip("Hello", 10), "Hello");
        assert_eq!(clip("Hello", 5), "Hello");
    }

    #[test]
    fn clipping_marks_the_cut_with_an_ellipsis() {
        assert_eq!(clip("Hello, World!", 10), "Hello, ...");
    }

    #[test]
    fn tight_widths_cut_without_an_ellipsis() {
        assert_eq!(clip("Hello", 3), "Hel");
        assert_eq!(clip("Hello", 0), "");
    }

    #[test]
    fn the_card_shows_name_and_priority() {
        let task = Task::new("Ship the release", "space-1");
        let content = buffer_to_string(&rendered(&task, false, false, 24, 4));

        assert!(content.contains("Ship the release"));
        assert!(content.contains("Medium"));
    }

    #[test]
    fn a_due_date_joins_the_metadata_line() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 3).expect("valid date");
        let task = Task::new("Ship the release", "space-1").with_due_date(date);
        let content = buffer_to_string(&rendered(&task, false, false, 24, 4));

        assert!(content.contains("Sep 03"));
    }

    #[test]
    fn long_names_are_clipped_to_the_card() {
        let task = Task::new("A name far too long for a narrow card", "space-1");
        let content = buffer_to_string(&rendered(&task, false, false, 14, 4));

        assert!(content.contains("..."));
        assert!(!content.contains("narrow"));
    }

    #[test]
    fn the_carried_card_turns_yellow() {
        let task = Task::new("Ship the release", "space-1");
        let buf = rendered(&task, false, true, 20, 4);

        let corner = buf.cell((0, 0)).expect("corner cell");
        assert_eq!(corner.style().fg, Some(Color::Yellow));
    }

    #[test]
    fn the_selected_card_takes_the_accent() {
        let task = Task::new("Ship the release", "space-1");
        let buf = rendered(&task, true, false, 20, 4);

        let corner = buf.cell((0, 0)).expect("corner cell");
        assert_eq!(corner.style().fg, Some(Color::Cyan));
    }

    #[test]
    fn a_tiny_area_renders_nothing() {
        let task = Task::new("Ship the release", "space-1");
        let buf = rendered(&task, false, false, 2, 2);

        let corner = buf.cell((0, 0)).expect("corner cell");
        assert_eq!(corner.symbol(), " ");
    }
}
