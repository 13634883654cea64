//! Error types exposed by the feedback library.

use thiserror::Error;

use crate::feedback::FeedbackId;

/// Errors surfaced while loading configuration, storing feedback, or running
/// the terminal interface.
///
/// Validation failures inside the form are not errors: they surface as an
/// inline message and a disabled Send button. This type only covers the
/// surrounding application.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedbackError {
    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Stored feedback could not be encoded or decoded.
    #[error("feedback serialisation failed: {message}")]
    Serialization {
        /// Error detail from `serde_json`.
        message: String,
    },

    /// A timestamp string could not be parsed.
    #[error("invalid timestamp '{input}': {message}")]
    InvalidTimestamp {
        /// The rejected input.
        input: String,
        /// Parser message from `chrono`.
        message: String,
    },

    /// No feedback item exists with the requested identifier.
    #[error("feedback item {id} does not exist")]
    UnknownFeedback {
        /// The identifier that was looked up.
        id: FeedbackId,
    },

    /// A headless submission was dropped by form validation.
    #[error("feedback was not submitted: {message}")]
    SubmissionRejected {
        /// Validation message shown by the form, if any.
        message: String,
    },

    /// The terminal interface failed to start or run.
    #[error("TUI error: {message}")]
    Tui {
        /// Error detail from `bubbletea-rs`.
        message: String,
    },
}

impl From<serde_json::Error> for FeedbackError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}
