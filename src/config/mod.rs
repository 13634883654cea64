//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.feedback.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `FEEDBACK_STORE_PATH`, `FEEDBACK_TEXT`,
//!    `FEEDBACK_RATING`, `FEEDBACK_EDIT_ID`
//! 4. **Command-line arguments** – `--store-path`/`-s`, `--text`/`-m`,
//!    `--rating`/`-r`, `--edit-id`/`-e`, `--list`/`-l`, `--reverse`,
//!    `--telemetry`
//!
//! # Configuration File
//!
//! ```toml
//! store_path = "feedback.json"
//! reverse = true
//! ```

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::FeedbackError;
use crate::feedback::{FeedbackId, MAX_RATING};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Run the interactive feedback form.
    Interactive,
    /// Submit one review headlessly through the form.
    Submit,
    /// Print stored feedback and exit.
    List,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use feedback_form::FeedbackConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = FeedbackConfig::load().expect("failed to load configuration");
/// let mode = config.operation_mode();
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "FEEDBACK",
    discovery(
        dotfile_name = ".feedback.toml",
        config_file_name = "feedback.toml",
        app_name = "feedback"
    )
)]
pub struct FeedbackConfig {
    /// JSON file backing the feedback store.
    ///
    /// When unset, feedback lives only for the duration of the run.
    ///
    /// Can be provided via:
    /// - CLI: `--store-path <PATH>` or `-s <PATH>`
    /// - Environment: `FEEDBACK_STORE_PATH`
    /// - Config file: `store_path = "..."`
    #[ortho_config(cli_short = 's')]
    pub store_path: Option<String>,

    /// Review text to submit without starting the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--text <TEXT>` or `-m <TEXT>`
    /// - Environment: `FEEDBACK_TEXT`
    #[ortho_config(cli_short = 'm')]
    pub text: Option<String>,

    /// Rating submitted alongside `text`.
    ///
    /// Can be provided via:
    /// - CLI: `--rating <N>` or `-r <N>`
    /// - Environment: `FEEDBACK_RATING`
    #[ortho_config(cli_short = 'r')]
    pub rating: Option<u8>,

    /// Identifier of a stored item that a headless submission updates.
    ///
    /// Can be provided via:
    /// - CLI: `--edit-id <ID>` or `-e <ID>`
    /// - Environment: `FEEDBACK_EDIT_ID`
    #[ortho_config(cli_short = 'e')]
    pub edit_id: Option<FeedbackId>,

    /// Prints stored feedback and exits.
    ///
    /// Can be provided via:
    /// - CLI: `--list` / `-l`
    /// - Config file: `list = true`
    #[ortho_config(cli_short = 'l')]
    pub list: bool,

    /// Renders the form card in reverse video.
    ///
    /// Can be provided via:
    /// - CLI: `--reverse`
    /// - Config file: `reverse = true`
    #[ortho_config()]
    pub reverse: bool,

    /// Emits store telemetry to stderr as JSON lines in headless modes.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

impl FeedbackConfig {
    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `Submit` when review text is supplied, `List` when listing is
    /// requested, or `Interactive` otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.text.is_some() {
            OperationMode::Submit
        } else if self.list {
            OperationMode::List
        } else {
            OperationMode::Interactive
        }
    }

    /// Returns the configured store path, if any.
    #[must_use]
    pub fn store_path(&self) -> Option<&Utf8Path> {
        self.store_path.as_deref().map(Utf8Path::new)
    }

    /// Returns the review text or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::Configuration`] when no text is configured.
    pub fn require_text(&self) -> Result<&str, FeedbackError> {
        self.text
            .as_deref()
            .ok_or_else(|| FeedbackError::Configuration {
                message: "review text is required (use --text or -m)".to_owned(),
            })
    }

    /// Checks that the supplied options are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::Configuration`] when the rating is out of
    /// range or `edit_id` is given without review text.
    pub fn validate(&self) -> Result<(), FeedbackError> {
        if let Some(rating) = self.rating.filter(|rating| *rating > MAX_RATING) {
            return Err(FeedbackError::Configuration {
                message: format!("rating {rating} is out of range (at most {MAX_RATING})"),
            });
        }

        if self.edit_id.is_some() && self.text.is_none() {
            return Err(FeedbackError::Configuration {
                message: "--edit-id requires review text (use --text or -m)".to_owned(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
