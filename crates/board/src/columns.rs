//! Resolution of the column set in effect for a board.

use tack_protocol::{Column, List, Space, default_columns};

/// Returns the columns a board should show for `list` within `space`.
///
/// The most specific level that defines columns wins: the list first, then
/// the space, then the application defaults. A level whose column set is
/// empty counts as not defining one, so the result is never empty.
///
/// # Examples
///
/// ```
/// use tack_board::resolve_columns;
/// use tack_protocol::{Column, ColumnKind, List, Space};
///
/// let space = Space::new("work", "Work")
///     .with_columns(vec![Column::new("open", "OPEN", "#3b82f6", ColumnKind::Todo)]);
/// let list = List::new("sprint-12", "Sprint 12", "work");
///
/// // The list defines no columns of its own, so the space's apply.
/// let columns = resolve_columns(Some(&list), Some(&space));
/// assert_eq!(columns.len(), 1);
/// assert_eq!(columns[0].name, "OPEN");
/// ```
#[must_use]
pub fn resolve_columns(list: Option<&List>, space: Option<&Space>) -> Vec<Column> {
    if let Some(columns) = list.and_then(|list| defined_columns(list.columns.as_deref())) {
        return columns.to_vec();
    }
    if let Some(columns) = space.and_then(|space| defined_columns(space.columns.as_deref())) {
        return columns.to_vec();
    }
    default_columns()
}

/// An empty column set counts as undefined.
fn defined_columns(columns: Option<&[Column]>) -> Option<&[Column]> {
    columns.filter(|columns| !columns.is_empty())
}
