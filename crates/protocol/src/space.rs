//! Spaces and lists - the containers tasks are filed under.
//!
//! A space is a top-level area of work (a project, a team). Lists subdivide
//! a space. Either level may define its own status columns; a level that
//! defines none inherits from the level above it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column::Column;

/// Unique identifier for a space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceId(String);

impl SpaceId {
    /// Creates a space id from any string-like value.
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

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpaceId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for SpaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unique identifier for a list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(String);

impl ListId {
    /// Creates a list id from any string-like value.
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

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ListId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A top-level area of work.
///
/// # Examples
///
/// ```
/// use tack_protocol::{default_columns, Space};
///
/// let space = Space::new("personal", "Personal");
/// assert!(space.columns.is_none());
///
/// let space = space.with_columns(default_columns());
/// assert!(space.columns.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    /// Stable identifier.
    pub id: SpaceId,
    /// Display name.
    pub name: String,
    /// Columns lists in this space inherit unless they define their own.
    /// `None` means the space uses the application defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,
}

impl Space {
    /// Creates a space with no columns of its own.
    #[must_use]
    pub fn new(id: impl Into<SpaceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            columns: None,
        }
    }

    /// Gives the space its own column set.
    #[must_use]
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = Some(columns);
        self
    }
}

/// A list of tasks inside a space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Stable identifier.
    pub id: ListId,
    /// Display name.
    pub name: String,
    /// The space this list belongs to.
    pub space: SpaceId,
    /// Columns of this list. `None` means the list inherits from its space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,
}

impl List {
    /// Creates a list with no columns of its own.
    #[must_use]
    pub fn new(id: impl Into<ListId>, name: impl Into<String>, space: impl Into<SpaceId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            space: space.into(),
            columns: None,
        }
    }

    /// Gives the list its own column set.
    #[must_use]
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = Some(columns);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::default_columns;

    #[test]
    fn new_space_has_no_columns() {
        let space = Space::new("work", "Work");

        assert_eq!(space.id.as_str(), "work");
        assert_eq!(space.name, "Work");
        assert!(space.columns.is_none());
    }

    #[test]
    fn with_columns_sets_an_empty_set_too() {
        // An empty column set is distinct from no column set at all.
        let space = Space::new("work", "Work").with_columns(Vec::new());

        assert_eq!(space.columns, Some(Vec::new()));
    }

    #[test]
    fn new_list_belongs_to_its_space() {
        let list = List::new("sprint-12", "Sprint 12", "work");

        assert_eq!(list.space.as_str(), "work");
        assert!(list.columns.is_none());
    }

    #[test]
    fn absent_columns_are_omitted_from_json() {
        let space = Space::new("work", "Work");
        let json = serde_json::to_string(&space).unwrap();

        assert_eq!(json, r#"{"id":"work","name":"Work"}"#);
    }

    #[test]
    fn space_with_columns_roundtrips_through_json() {
        let space = Space::new("work", "Work").with_columns(default_columns());
        let json = serde_json::to_string(&space).unwrap();
        let roundtrip: Space = serde_json::from_str(&json).unwrap();

        assert_eq!(roundtrip, space);
    }

    #[test]
    fn list_roundtrips_through_json() {
        let list = List::new("sprint-12", "Sprint 12", "work").with_columns(default_columns());
        let json = serde_json::to_string(&list).unwrap();
        let roundtrip: List = serde_json::from_str(&json).unwrap();

        assert_eq!(roundtrip, list);
    }
}
