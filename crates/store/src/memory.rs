//! The in-memory store behind the board.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tack_board::BoardStore;
use tack_protocol::{Column, List, ListId, Space, SpaceId, Task, TaskId, default_columns};

/// Status written onto archived tasks.
pub const ARCHIVE_STATUS: &str = "COMPLETED";

/// Where a new column should be attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnTarget {
    /// Attach to a space's own column set.
    Space(SpaceId),
    /// Attach to a list's own column set.
    List(ListId),
}

/// Everything the application knows about, held in memory.
///
/// The whole store serializes as one JSON document, which is how it is
/// persisted between runs (see [`crate::snapshot`]). Mutation goes
/// through the methods here; they keep the task timestamps honest and
/// refuse writes that would leave the data inconsistent.
///
/// # Examples
///
/// ```
/// use tack_protocol::Task;
/// use tack_store::MemoryStore;
///
/// let mut store = MemoryStore::new();
/// store.add_task(Task::with_id("t1", "Write the changelog", "work"));
///
/// assert_eq!(store.tasks().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    spaces: Vec<Space>,
    #[serde(default)]
    lists: Vec<List>,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every task, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns every space.
    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Returns every list.
    #[must_use]
    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == *id)
    }

    /// Returns the lists filed under a space.
    pub fn lists_in<'a>(&'a self, space: &'a SpaceId) -> impl Iterator<Item = &'a List> {
        self.lists.iter().filter(move |list| list.space == *space)
    }

    /// Adds a space.
    pub fn add_space(&mut self, space: Space) {
        self.spaces.push(space);
    }

    /// Adds a list.
    pub fn add_list(&mut self, list: List) {
        self.lists.push(list);
    }

    /// Adds a task to the front of the store, so the newest task shows
    /// first in its column.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    /// Removes a task, returning it if it existed.
    pub fn delete_task(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == *id)?;
        Some(self.tasks.remove(index))
    }

    /// Copies a task under a fresh id, appending `" (Copy)"` to its name.
    ///
    /// The copy keeps the source's status, priority, description, and
    /// filing, but gets its own id and timestamps. It lands at the back
    /// of the store. Returns the copy, or `None` when the source does
    /// not exist.
    pub fn duplicate_task(&mut self, id: &TaskId) -> Option<&Task> {
        let source = self.tasks.iter().find(|task| task.id == *id)?;
        let now = Utc::now();
        let copy = Task {
            id: TaskId::generate(),
            name: format!("{} (Copy)", source.name),
            created_at: now,
            updated_at: now,
            ..source.clone()
        };
        self.tasks.push(copy);
        self.tasks.last()
    }

    /// Moves a task into the archive status.
    ///
    /// Archived tasks are ordinary tasks whose status is
    /// [`ARCHIVE_STATUS`]; they show up in whatever column matches it.
    pub fn archive_task(&mut self, id: &TaskId) -> bool {
        self.set_task_status(id, ARCHIVE_STATUS)
    }

    /// Appends a column to a space's or list's own column set.
    ///
    /// A target that had no columns of its own (an absent or empty set,
    /// which the board treats as undefined) first materializes the set it
    /// was inheriting, so the existing columns stay visible next to the
    /// new one. Returns `false` when the target does not exist.
    pub fn add_column(&mut self, target: &ColumnTarget, column: Column) -> bool {
        match target {
            ColumnTarget::Space(id) => {
                let Some(space) = self.spaces.iter_mut().find(|space| space.id == *id) else {
                    debug!(space = %id, "add_column target not found");
                    return false;
                };
                if space.columns.as_deref().is_none_or(|columns| columns.is_empty()) {
                    space.columns = Some(default_columns());
                }
                if let Some(columns) = &mut space.columns {
                    columns.push(column);
                }
                true
            }
            ColumnTarget::List(id) => {
                let Some(index) = self.lists.iter().position(|list| list.id == *id) else {
                    debug!(list = %id, "add_column target not found");
                    return false;
                };
                if self.lists[index].columns.as_deref().is_none_or(|columns| columns.is_empty()) {
                    let space = self.lists[index].space.clone();
                    self.lists[index].columns = Some(self.inherited_columns(&space));
                }
                if let Some(columns) = &mut self.lists[index].columns {
                    columns.push(column);
                }
                true
            }
        }
    }

    /// The columns a list in `space` inherits when it has none of its own.
    fn inherited_columns(&self, space: &SpaceId) -> Vec<Column> {
        self.spaces
            .iter()
            .find(|candidate| candidate.id == *space)
            .and_then(|space| space.columns.clone())
            .filter(|columns| !columns.is_empty())
            .unwrap_or_else(default_columns)
    }
}

impl BoardStore for MemoryStore {
    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn space(&self, id: &SpaceId) -> Option<&Space> {
        self.spaces.iter().find(|space| space.id == *id)
    }

    fn list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|list| list.id == *id)
    }

    /// Writes a new status onto a task.
    ///
    /// Statuses are always non-empty strings; an empty write is refused
    /// rather than applied, as is a write to a task that does not exist.
    fn set_task_status(&mut self, id: &TaskId, status: &str) -> bool {
        if status.is_empty() {
            debug!(task = %id, "refusing to write an empty status");
            return false;
        }
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == *id) else {
            debug!(task = %id, "status write for unknown task");
            return false;
        };
        task.set_status(status);
        true
    }
}
