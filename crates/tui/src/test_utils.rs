//! Shared helpers for the widget and app tests.

use ratatui::buffer::Buffer;

/// Flattens a rendered [`Buffer`] into one string, one line per row.
///
/// Trailing blanks on each row are dropped so tests can assert with
/// `contains` against readable expectations.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let width = buf.area.width as usize;
    if width == 0 {
        return String::new();
    }

    let symbols: Vec<&str> = buf.content().iter().map(|cell| cell.symbol()).collect();
    symbols
        .chunks(width)
        .map(|row| row.concat().trim_end().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}
