//! Feedback records, the in-memory store, and their supporting helpers.
//!
//! - [`model`]: item, payload, and edit-target types
//! - [`store`]: the dispatcher contract and [`FeedbackStore`]
//! - [`stats`]: count and average rating
//! - [`storage`]: JSON file persistence
//! - [`date`]: display formatting for timestamps

pub mod date;
pub mod model;
pub mod stats;
pub mod storage;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use date::{format_date_and_time, format_timestamp};
pub use model::{EditTarget, FeedbackId, FeedbackItem, FeedbackPayload, MAX_RATING};
pub use stats::FeedbackStats;
pub use store::{FeedbackDispatcher, FeedbackStore};
