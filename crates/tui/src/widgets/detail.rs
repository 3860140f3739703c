//! Full-screen task detail view.
//!
//! Shows everything known about one task: name, status, priority,
//! filing metadata, and the description rendered as markdown.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use tack_protocol::Task;

use super::markdown::render_markdown;
use super::task_card::priority_color;
use crate::style::BoardStyle;

/// Separator drawn between metadata items sharing a line.
const METADATA_SEPARATOR: &str = "  \u{2502}  ";

/// Display width of [`METADATA_SEPARATOR`] in terminal cells.
const METADATA_SEPARATOR_WIDTH: usize = 5;

/// Renders the task detail view into the buffer.
///
/// The task name sits in the border title, metadata rows come first,
/// and the scrollable markdown description fills the middle:
///
/// ```text
/// ╭ Implement login form ─────────────────────────────────────────────╮
/// │ Status: TO DO  │  Priority: High  │  Due: 2025-09-03              │
/// │ Created: 2025-08-20 10:30  │  Updated: 2025-08-21 09:12           │
/// │ ─────────────────────────────────────────────────────────────────│
/// │ Create a login form with validation. The form should include     │
/// │ email and password fields, with appropriate error handling...    │
/// │ ─────────────────────────────────────────────────────────────────│
/// │ [Esc] Back to board  [↑↓] Scroll                                  │
/// ╰───────────────────────────────────────────────────────────────────╯
/// ```
///
/// `scroll_offset` skips that many wrapped description lines from the
/// top. Areas too small to fit the layout render nothing at all.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tack_protocol::Task;
/// use tack_tui::style::BoardStyle;
/// use tack_tui::widgets::render_detail_panel;
///
/// let task = Task::new("Implement feature", "space-1");
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_detail_panel(&task, 0, &BoardStyle::default(), area, &mut buf);
/// ```
pub fn render_detail_panel(
    task: &Task,
    scroll_offset: u16,
    style: &BoardStyle,
    area: Rect,
    buf: &mut Buffer,
) {
    // Below this there is no room for even one description line
    if area.width < 20 || area.height < 10 {
        return;
    }

    let frame = Block::default()
        .title(Span::styled(
            format!(" {} ", task.name),
            Style::default()
                .fg(style.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(style.accent));
    let inner = frame.inner(area);
    frame.render(area, buf);

    // The metadata section is exactly as tall as its entries wrap to;
    // the description takes whatever is left over.
    let metadata_height = calculate_metadata_height(task, inner.width);
    let [meta, rule_a, body, rule_b, footer] = Layout::vertical([
        Constraint::Length(metadata_height),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    Paragraph::new(metadata_lines(task, meta.width)).render(meta, buf);
    render_rule(rule_a, buf);
    render_description(task, scroll_offset, body, buf);
    render_rule(rule_b, buf);
    render_footer(footer, buf);
}

/// One labeled metadata entry, such as `Priority: High`.
struct MetadataItem {
    label: &'static str,
    value: String,
    value_style: Style,
}

impl MetadataItem {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            value_style: Style::default().fg(Color::White),
        }
    }

    fn with_style(mut self, style: Style) -> Self {
        self.value_style = style;
        self
    }

    /// Display width of the item in terminal cells.
    fn width(&self) -> usize {
        self.label.len() + self.value.chars().count()
    }
}

/// Collects the metadata entries shown for a task, in display order.
fn metadata_items(task: &Task) -> Vec<MetadataItem> {
    let mut items = vec![
        MetadataItem::new("Status: ", task.status.clone()),
        MetadataItem::new("Priority: ", task.priority.display_name())
            .with_style(Style::default().fg(priority_color(task.priority))),
    ];

    if let Some(assignee) = &task.assignee {
        items.push(MetadataItem::new("Assignee: ", assignee.clone()));
    }
    if let Some(due) = task.due_date {
        items.push(MetadataItem::new("Due: ", due.format("%Y-%m-%d").to_string()));
    }

    items.push(MetadataItem::new(
        "Created: ",
        task.created_at.format("%Y-%m-%d %H:%M").to_string(),
    ));
    items.push(MetadataItem::new(
        "Updated: ",
        task.updated_at.format("%Y-%m-%d %H:%M").to_string(),
    ));

    items
}

/// Packs the metadata entries into as few lines as the width allows.
///
/// Entries flow left to right separated by `│`; an entry that would
/// overflow the line starts the next one. An entry wider than the whole
/// line still gets placed (and clipped) rather than dropped.
fn metadata_lines(task: &Task, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let separator_style = Style::default().fg(Color::DarkGray);
    let label_style = Style::default().fg(Color::DarkGray);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut line_width = 0usize;

    for item in metadata_items(task) {
        let item_width = item.width();
        if line_width > 0 && line_width + METADATA_SEPARATOR_WIDTH + item_width > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            line_width = 0;
        }
        if line_width > 0 {
            spans.push(Span::styled(METADATA_SEPARATOR, separator_style));
            line_width += METADATA_SEPARATOR_WIDTH;
        }
        spans.push(Span::styled(item.label, label_style));
        spans.push(Span::styled(item.value, item.value_style));
        line_width += item_width;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }

    lines
}

/// Calculates the height needed for the metadata section at a width.
///
/// This is the line count [`metadata_lines`] will produce, so layout and
/// rendering can never disagree about how tall the section is.
#[must_use]
pub fn calculate_metadata_height(task: &Task, width: u16) -> u16 {
    metadata_lines(task, width).len() as u16
}

/// A dim horizontal rule across the full width.
fn render_rule(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(Color::DarkGray),
    ))
    .render(area, buf);
}

/// The markdown description, with `scroll_offset` lines cut off the top.
fn render_description(task: &Task, scroll_offset: u16, area: Rect, buf: &mut Buffer) {
    let visible: Vec<Line<'static>> = description_lines(task, area.width)
        .into_iter()
        .skip(scroll_offset as usize)
        .collect();

    Paragraph::new(visible).wrap(Wrap { trim: false }).render(area, buf);
}

/// Keybinding hints along the bottom edge.
fn render_footer(area: Rect, buf: &mut Buffer) {
    let key = Style::default().fg(Color::Yellow);
    let text = Style::default().fg(Color::DarkGray);
    let hints = Line::from(vec![
        Span::styled("[Esc]", key),
        Span::styled(" Back to board  ", text),
        Span::styled("[↑↓]", key),
        Span::styled(" Scroll", text),
    ]);
    Paragraph::new(hints).render(area, buf);
}

/// The wrapped description lines, shared between rendering and scroll
/// math so the two always agree on the line count.
fn description_lines(task: &Task, width: u16) -> Vec<Line<'static>> {
    let content_width = width.min(100) as usize;
    let description = task.description.as_deref().filter(|text| !text.is_empty());

    match description {
        Some(text) => render_markdown(text, content_width),
        None => vec![Line::styled(
            "No description",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )],
    }
}

/// Furthest the description can scroll: total wrapped lines minus the
/// visible height, never less than zero.
#[must_use]
pub fn max_scroll_offset(task: &Task, visible_height: u16, panel_width: u16) -> u16 {
    let total = description_lines(task, panel_width).len() as u16;
    total.saturating_sub(visible_height)
}

/// Size of the scrollable description region inside a panel area.
///
/// Mirrors the arithmetic of [`render_detail_panel`]: the borders come
/// off the outside, the metadata rows off the top, and three more rows
/// go to the two rules and the footer. Returns
/// `(visible_height, content_width)`, or `None` when the area is too
/// small to show any description at all.
#[must_use]
pub fn description_area_dimensions(task: &Task, area: Rect) -> Option<(u16, u16)> {
    if area.width < 20 || area.height < 10 {
        return None;
    }

    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);

    let metadata_height = calculate_metadata_height(task, inner_width);
    let body_height = inner_height.saturating_sub(metadata_height + 3);

    (body_height > 0).then_some((body_height, inner_width))
}
