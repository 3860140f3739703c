//! Widget components for the tack TUI.
//!
//! Every widget here is a plain function from state to a region of a
//! [`Buffer`](ratatui::buffer::Buffer); none of them holds state of its
//! own. That keeps them composable and lets tests assert on rendered
//! buffers directly.
//!
//! # Modules
//!
//! - [`board`]: The whole board, one column per status
//! - [`column`]: A single status column and its stack of cards
//! - [`task_card`]: One card, with its priority label
//! - [`detail`]: The task detail panel
//! - [`status_bar`]: The footer hint row
//! - [`help`]: The help overlay
//! - [`markdown`]: Markdown text to styled terminal lines
//!
//! # Priority Colors
//!
//! Task cards carry a colored priority label based on their
//! [`Priority`](tack_protocol::Priority):
//!
//! | Priority | Color |
//! |----------|-------|
//! | `Low` | Gray (`Color::DarkGray`) |
//! | `Medium` | Blue (`Color::Blue`) |
//! | `High` | Yellow (`Color::Yellow`) |
//! | `Urgent` | Red (`Color::Red`) |
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use tack_board::classify;
//! use tack_protocol::{Task, default_columns};
//! use tack_tui::style::BoardStyle;
//! use tack_tui::widgets;
//!
//! let columns = default_columns();
//! let tasks = vec![Task::new("Example", "work")];
//! let board = classify(&tasks, &columns);
//!
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(&board, 0, Some(0), None, &BoardStyle::default(), area, &mut buf);
//! ```

pub mod board;
pub mod column;
pub mod detail;
pub mod help;
pub mod markdown;
pub mod status_bar;
pub mod task_card;

pub use board::render_board;
pub use column::{ColumnPosition, kind_symbol, render_column};
pub use detail::{
    calculate_metadata_height, description_area_dimensions, max_scroll_offset, render_detail_panel,
};
pub use help::render_help_overlay;
pub use status_bar::{render_status_bar, render_status_bar_with_message};
pub use task_card::{priority_color, render_task_card};
