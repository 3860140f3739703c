//! Terminal front end for the tack Kanban board.
//!
//! Everything the binary draws goes through this crate: it owns the
//! run loop, the keyboard and mouse mappings, and the Ratatui widgets
//! that render columns, cards, and overlays.
//!
//! # Overview
//!
//! - [`app`]: The [`App`] struct, message dispatch, and the draw loop
//! - [`state`]: Board focus, selection, and carry bookkeeping
//! - [`event`]: Translation from crossterm events to messages
//! - [`style`]: Accent and dim colors derived from the configuration
//! - [`terminal`]: Raw mode, the alternate screen, and panic recovery
//! - [`widgets`]: Board, column, card, detail, and overlay rendering
//!
//! # Example
//!
//! ```no_run
//! use tack_store::MemoryStore;
//! use tack_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(MemoryStore::new());
//!     let outcome = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     outcome
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod state;
pub mod style;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::App;
pub use state::{AppState, Focus};
