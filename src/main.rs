//! tack - A keyboard-driven Kanban board for the terminal.
//!
//! Loads config and board data, runs the TUI, saves on the way out.

use tack_config::Config;
use tack_store::{default_data_path, load_store, sample_store, save_store};
use tack_tui::{App, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // From here on, a panic must put the terminal back before it prints
    terminal::install_panic_hook();

    // A missing config file just means defaults
    let config = Config::load().await?;

    // The board snapshot lives where the config points, or in the
    // platform data directory
    let data_path = match &config.data_file {
        Some(path) => path.clone(),
        None => default_data_path()?,
    };

    // A fresh installation starts from the sample board
    let store = if data_path.exists() {
        load_store(&data_path)?
    } else {
        sample_store()
    };

    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::with_config(store, &config);
    let outcome = app.run(&mut terminal).await;

    // Hand the terminal back first; a save error must print to a
    // usable screen
    terminal::restore_terminal(&mut terminal)?;
    save_store(&app.into_store(), &data_path)?;

    outcome
}
