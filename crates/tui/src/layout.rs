//! Shared layout measurements.
//!
//! Every widget that needs to agree on a dimension (card height, chrome
//! rows, minimum terminal size) reads it from here rather than keeping
//! a private copy.

/// Height of the header bar in rows.
///
/// Two border rows plus one line for the title and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
///
/// A single borderless line of keybinding hints under the board, which
/// the carry message replaces while a card is held.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of each task card in rows.
///
/// Two border rows framing one line for the name and one for metadata.
pub const TASK_CARD_HEIGHT: u16 = 4;

/// Content-area height below which rendering gives up.
///
/// Under this limit a "terminal too small" notice replaces the board.
/// The bound comes from the detail panel, the hungriest view: borders
/// (2 rows), metadata (2 to 4), separators (2), at least 3 description
/// rows, and the footer row.
pub const MIN_HEIGHT: u16 = 10;

/// Minimum terminal height at which the header is shown.
///
/// Between [`MIN_HEIGHT`] and this value the header is dropped so its
/// rows go to the board instead.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// A board shows three columns by default; each needs roughly 10
/// characters before borders and truncated names stop being readable.
pub const MIN_WIDTH: u16 = 30;
