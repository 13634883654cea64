//! TUI mode hosting the interactive feedback form.

use std::io::{self, Write};

use bubbletea_rs::Program;
use camino::Utf8Path;

use feedback_form::feedback::storage::load_items;
use feedback_form::tui::{FeedbackApp, SessionSeed, set_initial_session};
use feedback_form::{FeedbackConfig, FeedbackError};

/// Runs the interactive feedback form.
///
/// # Errors
///
/// Returns an error if:
/// - The configured store file cannot be read or decoded
/// - The TUI fails to initialise or run
pub async fn run(config: &FeedbackConfig) -> Result<(), FeedbackError> {
    let items = config
        .store_path()
        .map_or_else(|| Ok(Vec::new()), load_items)?;

    // Seed module-level state for Model::init(). If already set, the
    // existing seed is kept.
    let _ = set_initial_session(SessionSeed {
        items,
        store_path: config.store_path().map(Utf8Path::to_path_buf),
        reverse: config.reverse,
    });

    run_tui().await.map_err(|error| FeedbackError::Tui {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `FeedbackApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<FeedbackApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
