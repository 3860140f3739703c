//! Terminal lifecycle: raw mode, the alternate screen, and crash safety.
//!
//! The TUI owns the terminal for its whole run. Everything here exists to
//! make sure the user's shell comes back intact, whether the run ends
//! normally, with an error, or in a panic.

use std::io::{self, Stdout};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The concrete terminal the app draws to: crossterm over stdout.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// What went wrong while taking over or handing back the terminal.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Raw mode, the alternate screen, or mouse capture could not be
    /// engaged.
    #[error("terminal setup failed: {0}")]
    Setup(#[source] io::Error),

    /// The terminal could not be handed back to the shell.
    #[error("terminal restore failed: {0}")]
    Restore(#[source] io::Error),
}

/// Installs a panic hook that puts the terminal back before the panic
/// message prints.
///
/// Without this, a panic inside the draw loop leaves the shell in raw
/// mode on the alternate screen, and the message lands where the user
/// cannot read it. The hook undoes the terminal takeover (best effort,
/// errors ignored) and then defers to whichever hook was installed
/// before it, so the usual message and backtrace still print.
///
/// Call it once at startup, before [`setup_terminal`].
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            LeaveAlternateScreen,
            cursor::Show
        );
        previous(info);
    }));
}

/// Takes over the terminal: raw mode, the alternate screen, and mouse
/// capture for click-to-open.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if raw mode, the alternate screen,
/// or mouse capture cannot be engaged.
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Hands the terminal back: cooked mode, main screen, cursor visible.
///
/// Runs after the app loop whether or not the loop succeeded, so it
/// takes the terminal it is restoring instead of assuming global state.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if the terminal refuses any of the
/// teardown steps.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)?;
    Ok(())
}
