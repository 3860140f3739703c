//! Status columns and the rules for matching tasks against them.
//!
//! A [`Column`] is one vertical lane on the board. Every column carries a
//! free-form display name (which doubles as the status string written onto
//! tasks dropped into it), an accent color, and a [`ColumnKind`] that places
//! it in one of four well-known buckets regardless of how it is named.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The status a freshly created task starts out in.
///
/// This is the display name of the first default column, so a new task is
/// always classified somewhere even on a board that never customized its
/// columns.
pub const DEFAULT_STATUS: &str = "TO DO";

/// Unique identifier for a status column.
///
/// Column ids are short machine-readable slugs (`"todo"`, `"inprogress"`)
/// rather than UUIDs: they appear verbatim in tasks whose status was set
/// by id, and in configuration files edited by hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    /// Creates a column id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The well-known bucket a column belongs to.
///
/// Boards can name and color their columns freely; the kind is what the
/// rest of the application keys off when it needs to know whether a column
/// holds pending, active, or finished work. Kind strings not recognized
/// during deserialization collapse to [`ColumnKind::InProgress`], so a data
/// file written by a newer version still loads.
///
/// # Examples
///
/// ```
/// use tack_protocol::ColumnKind;
///
/// assert_eq!(ColumnKind::default(), ColumnKind::InProgress);
/// assert!(ColumnKind::Done.is_terminal());
/// assert!(!ColumnKind::Todo.is_terminal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Work that has not started.
    Todo,
    /// Work that is finished.
    Done,
    /// Work that was closed without being finished.
    Closed,
    /// Work that is underway. Custom columns fall in this bucket.
    #[default]
    #[serde(other)]
    InProgress,
}

impl ColumnKind {
    /// Returns all column kinds in workflow order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::ColumnKind;
    ///
    /// let kinds = ColumnKind::all();
    /// assert_eq!(kinds.len(), 4);
    /// assert_eq!(kinds[0], ColumnKind::Todo);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Todo, Self::InProgress, Self::Done, Self::Closed]
    }

    /// Returns a human-readable display name for the kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::ColumnKind;
    ///
    /// assert_eq!(ColumnKind::Todo.display_name(), "To Do");
    /// assert_eq!(ColumnKind::InProgress.display_name(), "In Progress");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
            Self::Closed => "Closed",
        }
    }

    /// Returns `true` if tasks in this kind of column need no further work.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::ColumnKind;
    ///
    /// assert!(!ColumnKind::InProgress.is_terminal());
    /// assert!(ColumnKind::Closed.is_terminal());
    /// ```
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Closed)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One status column on the board.
///
/// # Examples
///
/// ```
/// use tack_protocol::{Column, ColumnKind};
///
/// let column = Column::new("review", "IN REVIEW", "#8b5cf6", ColumnKind::InProgress);
/// assert!(column.matches_status("in review"));
/// assert!(column.matches_status("review"));
/// assert!(!column.matches_status("REVIEW "));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Stable identifier, unique within one column set.
    pub id: ColumnId,
    /// Display name, also used as the status string of tasks in the column.
    pub name: String,
    /// Accent color as a `#rrggbb` hex string.
    pub color: String,
    /// Well-known bucket this column belongs to.
    #[serde(default)]
    pub kind: ColumnKind,
}

impl Column {
    /// Creates a new column.
    #[must_use]
    pub fn new(
        id: impl Into<ColumnId>,
        name: impl Into<String>,
        color: impl Into<String>,
        kind: ColumnKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            kind,
        }
    }

    /// Returns `true` if a task carrying `status` belongs in this column.
    ///
    /// A status belongs to a column when it equals the column name ignoring
    /// ASCII case, or equals the column id exactly. The id comparison is
    /// case-sensitive: ids are machine-generated slugs, and loosening the
    /// match would let a status like `"TODO"` bind to two different columns
    /// in surprising ways.
    #[must_use]
    pub fn matches_status(&self, status: &str) -> bool {
        status.eq_ignore_ascii_case(&self.name) || status == self.id.as_str()
    }
}

/// Returns the columns every board starts out with.
///
/// These are the columns in effect wherever neither the list nor the space
/// defines its own set.
#[must_use]
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("todo", "TO DO", "#3b82f6", ColumnKind::Todo),
        Column::new("inprogress", "IN PROGRESS", "#f59e0b", ColumnKind::InProgress),
        Column::new("completed", "COMPLETED", "#10b981", ColumnKind::Done),
    ]
}
