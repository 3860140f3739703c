//! Terminal event polling and the key map.
//!
//! The run loop never inspects crossterm events directly; everything
//! funnels through [`event_to_message`], which turns raw input into
//! [`Message`] values or drops it.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tack_protocol::Message;

/// How long one poll waits before giving the draw loop a turn.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Waits up to [`POLL_TIMEOUT`] for the next terminal event.
///
/// Returns `Ok(None)` when the timeout passes quietly, so the caller
/// can redraw on a steady cadence even without input.
///
/// # Errors
///
/// Returns an error if polling or reading the terminal fails.
pub fn poll_event() -> io::Result<Option<Event>> {
    event::poll(POLL_TIMEOUT)?.then(event::read).transpose()
}

/// Translates a terminal event into an application message, if it maps
/// to one.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Translates a mouse event. Only a left-button press does anything; it
/// becomes a [`Message::ClickAt`] carrying the cell coordinates.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        return Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        });
    }
    None
}

/// Translates a key event according to the key map.
///
/// Unbound keys return `None`. Modifier chords other than `Ctrl+C` are
/// ignored entirely, so `Ctrl+A` does not archive anything.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (cancel carry, close panel, or clear selection) |
/// | `Left` | Navigate left |
/// | `Right` | Navigate right |
/// | `Up` | Navigate up |
/// | `Down` | Navigate down |
/// | `Space` | Carry / drop the highlighted task |
/// | `Enter` | Select (open details) |
/// | `Backspace` | Back |
/// | `a` | Archive the highlighted task |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            _ => None,
        };
    }

    let message = match key.code {
        KeyCode::Left => Message::NavigateLeft,
        KeyCode::Right => Message::NavigateRight,
        KeyCode::Up => Message::NavigateUp,
        KeyCode::Down => Message::NavigateDown,
        KeyCode::Char(' ') => Message::Carry,
        KeyCode::Enter => Message::Select,
        KeyCode::Backspace => Message::Back,
        KeyCode::Esc => Message::Escape,
        KeyCode::Char('a') => Message::Archive,
        KeyCode::Char('?') => Message::ToggleHelp,
        _ => return None,
    };
    Some(message)
}
