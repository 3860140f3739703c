//! Messages passed from input handling to application state.
//!
//! Every keyboard or mouse gesture becomes one of these values; the
//! application state consumes them and never sees raw terminal events.

use serde::{Deserialize, Serialize};

/// A user action, already translated out of terminal-event terms.
///
/// Messages serialize as snake_case strings, which keeps logs and
/// fixtures readable.
///
/// # Examples
///
/// ```
/// use tack_protocol::Message;
///
/// let json = serde_json::to_string(&Message::ToggleHelp).unwrap();
/// assert_eq!(json, r#""toggle_help""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Highlight the column to the left.
    NavigateLeft,
    /// Highlight the column to the right.
    NavigateRight,
    /// Highlight the previous task in the column.
    NavigateUp,
    /// Highlight the next task in the column.
    NavigateDown,
    /// Open whatever is highlighted.
    Select,
    /// Step back out of the current view.
    Back,
    /// Contextual cancel: drop the carry, close the panel, or clear
    /// the selection, whichever applies first.
    Escape,
    /// End the session.
    Quit,
    /// Show or hide the help overlay.
    ToggleHelp,
    /// Pick up the highlighted task, or set it down if already carrying.
    Carry,
    /// Archive the highlighted task.
    Archive,
    /// Mouse click, in terminal cell coordinates.
    ClickAt {
        /// Horizontal cell of the click.
        column: u16,
        /// Vertical cell of the click.
        row: u16,
    },
}

impl Message {
    /// Returns `true` for the four arrow-key movements.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::Message;
    ///
    /// assert!(Message::NavigateDown.is_navigation());
    /// assert!(!Message::Carry.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }
}
