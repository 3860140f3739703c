//! Task storage for the tack application.
//!
//! This crate owns the data the board works on: an in-memory store of
//! spaces, lists, and tasks, plus the JSON snapshot that carries it
//! between runs. The store implements [`tack_board::BoardStore`], so it
//! plugs straight into the board engine.
//!
//! # Overview
//!
//! - [`memory`]: the [`MemoryStore`] and its mutation operations
//! - [`snapshot`]: loading and saving the store as pretty JSON
//! - [`sample`]: the board a fresh installation starts with
//! - [`error`]: what loading and saving can report
//!
//! # Examples
//!
//! ```
//! use tack_protocol::Task;
//! use tack_store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! store.add_task(Task::with_id("t1", "Write the changelog", "work"));
//! store.archive_task(&"t1".into());
//!
//! assert_eq!(store.tasks()[0].status, "COMPLETED");
//! ```

pub mod error;
pub mod memory;
pub mod sample;
pub mod snapshot;

pub use error::{Result, StoreError};
pub use memory::{ARCHIVE_STATUS, ColumnTarget, MemoryStore};
pub use sample::sample_store;
pub use snapshot::{default_data_path, load_store, save_store};
