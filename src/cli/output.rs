//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use feedback_form::feedback::format_timestamp;
use feedback_form::{FeedbackError, FeedbackItem, FeedbackStore, SubmitOutcome};

/// Writes every stored item followed by the stats line.
pub fn write_feedback_list<W: Write>(
    writer: &mut W,
    store: &FeedbackStore,
) -> Result<(), FeedbackError> {
    if store.is_empty() {
        writeln!(writer, "No feedback yet.").map_err(|e| io_error(&e))?;
    }

    for item in store.items() {
        writeln!(writer, "{}", format_item(item)).map_err(|e| io_error(&e))?;
    }

    let stats = store.stats();
    let noun = if stats.count() == 1 {
        "review"
    } else {
        "reviews"
    };
    writeln!(writer, "{} {noun} | Average rating: {stats}", stats.count())
        .map_err(|e| io_error(&e))
}

/// Writes a confirmation for a headless submission.
pub fn write_submit_outcome<W: Write>(
    writer: &mut W,
    outcome: SubmitOutcome,
    store: &FeedbackStore,
) -> Result<(), FeedbackError> {
    let message = match outcome {
        SubmitOutcome::Created => store.items().first().map_or_else(
            || "Feedback submitted".to_owned(),
            |item| format!("Feedback #{} submitted", item.id),
        ),
        SubmitOutcome::Updated(id) => format!("Feedback #{id} updated"),
        SubmitOutcome::Rejected => "Feedback not submitted".to_owned(),
    };

    writeln!(writer, "{message}").map_err(|e| io_error(&e))
}

fn format_item(item: &FeedbackItem) -> String {
    let created = format_timestamp(item.created_at);
    let edited = item
        .updated_at
        .map(|updated| format!(" (edited {})", format_timestamp(updated)))
        .unwrap_or_default();
    format!(
        "#{} [{}/10] {} | {created}{edited}",
        item.id, item.rating, item.text
    )
}

fn io_error(error: &io::Error) -> FeedbackError {
    FeedbackError::Io {
        message: error.to_string(),
    }
}
