//! Human-readable timestamps for feedback items.

use chrono::{DateTime, Utc};

use crate::error::FeedbackError;

/// Parses an RFC 3339 timestamp and formats it for display.
///
/// `2023-08-06T03:31:13.800Z` becomes `Sun Aug 6 2023 3:31:13 AM UTC`.
///
/// # Errors
///
/// Returns [`FeedbackError::InvalidTimestamp`] when `input` is not a valid
/// RFC 3339 timestamp.
pub fn format_date_and_time(input: &str) -> Result<String, FeedbackError> {
    let parsed = DateTime::parse_from_rfc3339(input.trim()).map_err(|error| {
        FeedbackError::InvalidTimestamp {
            input: input.to_owned(),
            message: error.to_string(),
        }
    })?;

    Ok(format_timestamp(parsed.with_timezone(&Utc)))
}

/// Formats a UTC timestamp for display.
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%a %b %-d %Y %-I:%M:%S %p UTC").to_string()
}
