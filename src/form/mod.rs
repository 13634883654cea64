//! The feedback form and its rating selector.
//!
//! [`FeedbackForm`] holds the draft and enforces the minimum-length rule;
//! [`RatingSelector`] reports ratings to it. Neither knows about the
//! terminal, so both are exercised directly in tests.

mod rating;
mod state;

pub use rating::RatingSelector;
pub use state::{
    FeedbackForm, FormPhase, MIN_TEXT_LENGTH, SubmitOutcome, TEXT_TOO_SHORT_MESSAGE,
    trimmed_length,
};
