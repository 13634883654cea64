//! Feedback CLI entrypoint.
//!
//! Without review text the binary opens the interactive feedback form. With
//! `--text` it submits one review headlessly, and with `--list` it prints the
//! stored reviews.

use std::io::{self, Write};
use std::process::ExitCode;

use feedback_form::{FeedbackConfig, FeedbackError, OperationMode};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), FeedbackError> {
    let config = load_config()?;
    config.validate()?;

    match config.operation_mode() {
        OperationMode::Submit => cli::submit::run(&config),
        OperationMode::List => cli::list::run(&config),
        OperationMode::Interactive => cli::form_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`FeedbackError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<FeedbackConfig, FeedbackError> {
    FeedbackConfig::load().map_err(|error| FeedbackError::Configuration {
        message: error.to_string(),
    })
}
