//! Board assembly and drag-and-drop reordering for tack.
//!
//! This crate turns a flat pile of tasks into a column-per-status board
//! and applies the status changes implied by dragging cards around. It
//! owns no data: everything is read from, and written back through, the
//! [`BoardStore`] seam.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`columns`]: which column set is in effect for a board
//! - [`classify`]: partitioning tasks into their columns
//! - [`drag`]: the drag session and drop resolution rules
//! - [`engine`]: the [`BoardEngine`] tying the pieces together
//! - [`store`]: the [`BoardStore`] trait the engine reads and writes
//!
//! # Examples
//!
//! Grouping tasks under the default columns:
//!
//! ```
//! use tack_board::{classify, resolve_columns};
//! use tack_protocol::Task;
//!
//! let columns = resolve_columns(None, None);
//! let tasks = vec![
//!     Task::with_id("1", "Write the changelog", "work"),
//!     Task::with_id("2", "Fix the login button", "work").with_status("IN PROGRESS"),
//! ];
//!
//! let board = classify(tasks.iter(), &columns);
//! assert_eq!(board[0].len(), 1);
//! assert_eq!(board[1].len(), 1);
//! assert!(board[2].is_empty());
//! ```

pub mod classify;
pub mod columns;
pub mod drag;
pub mod engine;
pub mod store;

// Re-export primary types at crate root for convenience
pub use classify::{ColumnTasks, classify};
pub use columns::resolve_columns;
pub use drag::{DragState, resolve_drop};
pub use engine::{BoardEngine, BoardScope};
pub use store::BoardStore;
