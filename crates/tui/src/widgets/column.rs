//! Column rendering widget.
//!
//! This module provides functions for rendering individual board columns
//! with their headers and task lists.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tack_board::ColumnTasks;
use tack_protocol::{ColumnKind, TaskId};

use super::task_card::render_task_card;
use crate::layout::TASK_CARD_HEIGHT;
use crate::style::{BoardStyle, color_from_hex};

/// Position of a column in the horizontal layout.
///
/// Used to determine which borders to render for each column, enabling
/// collapsed borders between adjacent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// First (leftmost) column - has left border with rounded corners.
    First,
    /// Middle columns - has left border with T-connectors (no rounded corners on left).
    Middle,
    /// Last (rightmost) column - has both borders, rounded on right, T-connectors on left.
    Last,
    /// The only column on the board - rounded corners all around.
    Only,
}

/// Border set for the first (leftmost) column: rounded corners on left, no right border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─", // No corner, just continues the line
    bottom_left: "╰",
    bottom_right: "─", // No corner, just continues the line
    vertical_left: "│",
    vertical_right: " ", // No right border
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for middle columns: T-connectors on left, no right border.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",     // T-connector joining from previous column
    top_right: "─",    // No corner, just continues the line
    bottom_left: "┴",  // T-connector joining from previous column
    bottom_right: "─", // No corner, just continues the line
    vertical_left: "│",
    vertical_right: " ", // No right border
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last (rightmost) column: T-connectors on left, rounded on right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",     // T-connector joining from previous column
    top_right: "╮",    // Rounded corner on outer edge
    bottom_left: "┴",  // T-connector joining from previous column
    bottom_right: "╯", // Rounded corner on outer edge
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Returns the glyph shown before a column's name, keyed by its kind.
///
/// # Examples
///
/// ```
/// use tack_protocol::ColumnKind;
/// use tack_tui::widgets::kind_symbol;
///
/// assert_eq!(kind_symbol(ColumnKind::Todo), "○");
/// assert_eq!(kind_symbol(ColumnKind::Done), "✓");
/// ```
#[must_use]
pub const fn kind_symbol(kind: ColumnKind) -> &'static str {
    match kind {
        ColumnKind::Todo => "\u{25cb}",       // ○
        ColumnKind::InProgress => "\u{25cf}", // ●
        ColumnKind::Done => "\u{2713}",       // ✓
        ColumnKind::Closed => "\u{2717}",     // ✗
    }
}

/// Renders a single column to the buffer.
///
/// A column displays its header (kind glyph, name, and task count, tinted
/// with the column's own color) followed by a vertical list of task cards.
/// Empty columns show a "No tasks" placeholder message.
///
/// # Arguments
///
/// * `group` - The column and the tasks classified into it
/// * `is_focused` - Whether this column currently has focus
/// * `selected_idx` - Index of the selected task within this column, if any
/// * `carried` - Id of the task being carried, if a carry is in progress
/// * `style` - Shared accent and dim colors
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
/// * `position` - The column's position in the horizontal layout, used to determine borders
/// * `prev_focused` - Whether the previous (left) column is focused, for coloring shared borders
///
/// # Layout
///
/// ```text
/// +----------------+
/// | ○ TO DO (3)    |  <- Header with glyph, name and count
/// +----------------+
/// | +------------+ |
/// | | Task 1     | |  <- Task cards
/// | | Medium     | |
/// | +------------+ |
/// | +------------+ |
/// | | Task 2     | |
/// | | High       | |
/// | +------------+ |
/// +----------------+
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
/// use tack_tui::widgets::{ColumnPosition, render_column};
///
/// let tasks = vec![Task::new("Task 1", "space-1")];
/// let groups = classify(&tasks, &default_columns());
///
/// let area = Rect::new(0, 0, 20, 15);
/// let mut buf = Buffer::empty(area);
///
/// render_column(
///     &groups[0],
///     true,
///     Some(0),
///     None,
///     &BoardStyle::default(),
///     area,
///     &mut buf,
///     ColumnPosition::First,
///     false,
/// );
/// ```
#[allow(clippy::too_many_arguments)]
pub fn render_column(
    group: &ColumnTasks<'_>,
    is_focused: bool,
    selected_idx: Option<usize>,
    carried: Option<&TaskId>,
    style: &BoardStyle,
    area: Rect,
    buf: &mut Buffer,
    position: ColumnPosition,
    prev_focused: bool,
) {
    // Determine border style based on focus.
    // For the left border (shared with previous column), highlight if either is focused.
    let left_border_highlighted = is_focused || prev_focused;
    let border_style = if is_focused {
        Style::default().fg(style.accent)
    } else {
        Style::default().fg(style.dim)
    };

    // Create the column header, tinted with the column's own color
    let title = format!(
        "{} {} ({})",
        kind_symbol(group.column.kind),
        group.column.name,
        group.len()
    );
    let title_color = color_from_hex(&group.column.color).unwrap_or(Color::White);
    let title_style = if is_focused {
        Style::default()
            .fg(title_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(title_color)
    };

    // Determine which borders to render based on column position.
    // This collapses borders between adjacent columns to avoid double-borders:
    // - First and middle columns have a LEFT border, no RIGHT (next column provides it)
    // - The last column has both LEFT and RIGHT borders
    // - A lone column owns all four borders
    let borders = match position {
        ColumnPosition::First | ColumnPosition::Middle => {
            Borders::TOP | Borders::BOTTOM | Borders::LEFT
        }
        ColumnPosition::Last | ColumnPosition::Only => Borders::ALL,
    };

    // Select the appropriate border set based on position
    let border_set = match position {
        ColumnPosition::First => BORDER_SET_FIRST,
        ColumnPosition::Middle => BORDER_SET_MIDDLE,
        ColumnPosition::Last => BORDER_SET_LAST,
        ColumnPosition::Only => border::ROUNDED,
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(borders)
        .border_set(border_set)
        .border_style(border_style);

    // Render the outer block
    let inner_area = block.inner(area);
    block.render(area, buf);

    // If the left border should be highlighted (previous column is focused) but this
    // column isn't, recolor the left border since the block was rendered dimmed.
    if left_border_highlighted && !is_focused && area.width > 0 {
        let highlight_style = Style::default().fg(style.accent);
        let x = area.x;
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    // Handle empty columns
    if group.is_empty() {
        render_empty_placeholder(inner_area, buf, style);
        return;
    }

    // Calculate how many tasks can fit in the visible area
    let visible_tasks = (inner_area.height / TASK_CARD_HEIGHT).max(1) as usize;

    // Determine scroll offset to keep selected task visible
    let scroll_offset = calculate_scroll_offset(selected_idx, group.len(), visible_tasks);

    // Create constraints for visible task cards
    let task_count = group.len().min(visible_tasks);
    let mut constraints: Vec<Constraint> = (0..task_count)
        .map(|_| Constraint::Length(TASK_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0)); // Fill remaining space

    let task_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    // Render visible task cards
    for (i, task_area) in task_areas.iter().take(task_count).enumerate() {
        let task_idx = scroll_offset + i;
        if task_idx >= group.tasks.len() {
            break;
        }

        let task = group.tasks[task_idx];
        let is_selected = is_focused && selected_idx == Some(task_idx);
        let is_carried = carried.is_some_and(|id| *id == task.id);

        render_task_card(task, is_selected, is_carried, style, *task_area, buf);
    }
}

/// Renders a placeholder message for empty columns.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer, style: &BoardStyle) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No tasks",
        Style::default().fg(style.dim).add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

/// Calculates the scroll offset to keep the selected task visible.
fn calculate_scroll_offset(
    selected_idx: Option<usize>,
    total_tasks: usize,
    visible_tasks: usize,
) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total_tasks <= visible_tasks {
        return 0;
    }

    // Ensure selected task is visible
    let max_offset = total_tasks.saturating_sub(visible_tasks);

    if selected < visible_tasks / 2 {
        0
    } else {
        (selected.saturating_sub(visible_tasks / 2)).min(max_offset)
    }
}
