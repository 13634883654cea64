//! List mode: print stored feedback and its statistics.

use std::io;

use feedback_form::{FeedbackConfig, FeedbackError};

use super::open_store;
use super::output::write_feedback_list;

/// Prints every stored item, newest first, followed by the count and average
/// rating.
///
/// # Errors
///
/// Returns an error if the store cannot be loaded or stdout cannot be
/// written.
pub fn run(config: &FeedbackConfig) -> Result<(), FeedbackError> {
    let store = open_store(config)?;
    let mut stdout = io::stdout().lock();
    write_feedback_list(&mut stdout, &store)
}
