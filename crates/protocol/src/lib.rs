//! Shared protocol types for the tack application.
//!
//! The vocabulary every other tack crate speaks: tasks, the status
//! columns they sort into, the spaces and lists that contain them, and
//! the messages the TUI acts on.
//!
//! # Overview
//!
//! - [`task`]: Task identifiers, priorities, and the `Task` struct
//! - [`column`]: Status columns, column kinds, and status matching
//! - [`space`]: Spaces and lists, the containers tasks live in
//! - [`message`]: TUI event messages
//!
//! # Examples
//!
//! Creating a task and checking which column it belongs in:
//!
//! ```
//! use tack_protocol::{default_columns, Task};
//!
//! let task = Task::new("Implement feature", "work").with_status("in progress");
//!
//! let columns = default_columns();
//! let home = columns.iter().find(|column| column.matches_status(&task.status));
//! assert_eq!(home.map(|column| column.id.as_str()), Some("inprogress"));
//! ```

pub mod column;
pub mod message;
pub mod space;
pub mod task;

pub use column::{Column, ColumnId, ColumnKind, DEFAULT_STATUS, default_columns};
pub use message::Message;
pub use space::{List, ListId, Space, SpaceId};
pub use task::{Priority, Task, TaskId};
