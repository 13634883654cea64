//! Feedback collection library: a review form with star ratings.
//!
//! The library provides the feedback form state machine, an in-memory store
//! with optional JSON persistence, and a terminal user interface that hosts
//! the form. Errors from configuration, storage, and the terminal surface
//! through [`FeedbackError`].

pub mod config;
pub mod error;
pub mod feedback;
pub mod form;
pub mod telemetry;
pub mod tui;

pub use config::{FeedbackConfig, OperationMode};
pub use error::FeedbackError;
pub use feedback::{
    EditTarget, FeedbackDispatcher, FeedbackId, FeedbackItem, FeedbackPayload, FeedbackStore,
};
pub use form::{FeedbackForm, RatingSelector, SubmitOutcome};
