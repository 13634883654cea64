//! CLI operation mode handlers.
//!
//! This module contains the implementations for the different operation
//! modes:
//! - [`form_tui`]: Interactive feedback form
//! - [`submit`]: Headless submission through the form
//! - [`list`]: Print stored feedback
//!
//! Output formatting utilities are in [`output`].

use std::sync::Arc;

use feedback_form::feedback::storage::{load_store, save_store};
use feedback_form::telemetry::StderrJsonlTelemetrySink;
use feedback_form::{FeedbackConfig, FeedbackError, FeedbackStore};

pub mod form_tui;
pub mod list;
pub mod output;
pub mod submit;

/// Opens the configured store, or an empty in-memory store when no path is
/// set.
///
/// Store mutations are traced to stderr when telemetry is enabled.
///
/// # Errors
///
/// Returns an error when the store file exists but cannot be loaded.
pub fn open_store(config: &FeedbackConfig) -> Result<FeedbackStore, FeedbackError> {
    let store = config
        .store_path()
        .map_or_else(|| Ok(FeedbackStore::new()), load_store)?;

    if config.telemetry {
        return Ok(store.with_telemetry(Arc::new(StderrJsonlTelemetrySink)));
    }
    Ok(store)
}

/// Writes `store` back to the configured path, if any.
///
/// # Errors
///
/// Returns an error when the store file cannot be written.
pub fn save_configured_store(
    config: &FeedbackConfig,
    store: &FeedbackStore,
) -> Result<(), FeedbackError> {
    match config.store_path() {
        Some(path) => save_store(path, store),
        None => Ok(()),
    }
}
