//! Interactive terminal UI.

mod input;
mod state;
mod view;

use std::io;

use thiserror::Error;

use crate::clipboard::SystemClipboard;
use crate::entropy::EntropySource;
use crate::pass::GenerationConfig;
use crate::terminal::{clear, hide_cursor, reset_terminal};
use state::{App, LoopAction};

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// Run the interactive window until the user quits.
pub fn run(config: GenerationConfig, source: EntropySource) -> Result<(), TuiError> {
    tracing::debug!(source = source.name(), "starting interactive mode");
    let mut app = App::new(config, source.sampler(), Box::new(SystemClipboard::new()));

    reset_terminal();
    hide_cursor();

    let result = event_loop(&mut app);

    clear();
    reset_terminal();
    result
}

fn event_loop(app: &mut App) -> Result<(), TuiError> {
    loop {
        clear();
        view::render(&app.state);

        let action = input::read_action()?;
        if let LoopAction::Break = app.handle(action) {
            return Ok(());
        }
    }
}
