//! TUI run loop: draw, poll, update, repeat

use taskdeck_app::{update, AppState, ItemStore, StorageAdapter};
use taskdeck_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI over the given storage slot until the user quits.
///
/// Owns the terminal for its whole lifetime; the panic hook restores
/// the terminal state if a draw or handler panics.
pub fn run(storage: StorageAdapter) -> Result<()> {
    terminal::install_panic_hook();

    let store = ItemStore::open(storage);
    let mut state = AppState::new(store);

    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, &mut state);
    ratatui::restore();
    result
}

fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit {
        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(format!("draw failed: {e}")))?;

        if let Some(message) = event::poll()? {
            update(state, message);
        }
    }
    info!("Quit requested, leaving TUI loop");
    Ok(())
}
