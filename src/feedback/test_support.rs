//! Fixtures shared by unit and behavioural tests.

use chrono::{DateTime, TimeZone, Utc};

use super::model::FeedbackPayload;
use super::store::{FeedbackDispatcher, FeedbackStore};

/// Fixed clock returning `2023-08-06T03:31:13Z`.
#[must_use]
pub fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 8, 6, 3, 31, 13)
        .single()
        .unwrap_or_default()
}

/// Builds a store on the fixed clock holding the given reviews.
///
/// Reviews are added in order, so the last one ends up first in the list.
#[must_use]
pub fn store_with_reviews(reviews: &[(&str, u8)]) -> FeedbackStore {
    let mut store = FeedbackStore::new().with_clock(fixed_clock);
    for (text, rating) in reviews {
        store.add_feedback(FeedbackPayload::new(*text, *rating));
    }
    store
}
