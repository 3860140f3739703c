//! The full board: every status column side by side.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tack_board::ColumnTasks;
use tack_protocol::TaskId;

use super::column::{ColumnPosition, render_column};
use crate::style::BoardStyle;

/// Draws the whole board, one equal-width lane per column.
///
/// Each lane shows its column's tasks, with the selected column and task
/// highlighted and the carried card marked wherever it currently sits.
/// A board whose column set resolved to nothing shows a placeholder note
/// instead.
///
/// ```text
/// +------------+--------------+------------+
/// | ○ TO DO    | ● IN PROGRESS| ✓ COMPLETED|
/// +------------+--------------+------------+
/// | Task 1     | Task 3       | Task 4     |
/// | Task 2     |              |            |
/// +------------+--------------+------------+
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tack_board::classify;
/// use tack_protocol::{Task, default_columns};
/// use tack_tui::style::BoardStyle;
/// use tack_tui::widgets::render_board;
///
/// let tasks = vec![Task::new("Task 1", "space-1")];
/// let board = classify(&tasks, &default_columns());
///
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&board, 0, Some(0), None, &BoardStyle::default(), area, &mut buf);
/// ```
pub fn render_board(
    board: &[ColumnTasks<'_>],
    selected_column: usize,
    selected_task: Option<usize>,
    carried: Option<&TaskId>,
    style: &BoardStyle,
    area: Rect,
    buf: &mut Buffer,
) {
    let column_count = board.len();

    // A scope can resolve to an explicitly empty column set; there is
    // nothing sensible to draw for it but a note.
    if column_count == 0 {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No columns to show",
            Style::default().fg(style.dim).add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center);
        placeholder.render(area, buf);
        return;
    }

    let constraints: Vec<Constraint> = (0..column_count)
        .map(|_| Constraint::Ratio(1, column_count as u32))
        .collect();
    let lanes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let last = column_count - 1;
    for (i, group) in board.iter().enumerate() {
        let is_focused = selected_column == i;

        // The task highlight only exists inside the focused column
        let task_selection = if is_focused { selected_task } else { None };

        let position = match i {
            _ if column_count == 1 => ColumnPosition::Only,
            0 => ColumnPosition::First,
            i if i == last => ColumnPosition::Last,
            _ => ColumnPosition::Middle,
        };

        // Adjacent columns share a border; the focused neighbor's color
        // wins on the shared edge
        let prev_focused = i > 0 && selected_column == i - 1;

        render_column(
            group,
            is_focused,
            task_selection,
            carried,
            style,
            lanes[i],
            buf,
            position,
            prev_focused,
        );
    }
}
