//! In-memory feedback store and the dispatcher contract used by the form.
//!
//! The form only needs to create and update items and to observe which item
//! is under edit. [`FeedbackDispatcher`] captures exactly that. The concrete
//! [`FeedbackStore`] adds the list operations the terminal interface needs:
//! selecting an item for edit, deleting, and summary statistics.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::model::{EditTarget, FeedbackId, FeedbackItem, FeedbackPayload};
use super::stats::FeedbackStats;
use crate::error::FeedbackError;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Store operations consumed by the feedback form.
///
/// Calls are synchronous and infallible from the form's point of view.
#[cfg_attr(test, mockall::automock)]
pub trait FeedbackDispatcher {
    /// Adds a new feedback item.
    fn add_feedback(&mut self, payload: FeedbackPayload);

    /// Replaces the text and rating of an existing item.
    fn update_feedback(&mut self, id: FeedbackId, payload: FeedbackPayload);

    /// Returns the current edit target.
    fn edit_target(&self) -> &EditTarget;
}

/// Source of timestamps for new and updated items.
pub type Clock = fn() -> DateTime<Utc>;

/// In-memory collection of feedback items, newest first.
pub struct FeedbackStore {
    items: Vec<FeedbackItem>,
    next_id: FeedbackId,
    edit_target: EditTarget,
    edit_revision: u64,
    clock: Clock,
    telemetry: Arc<dyn TelemetrySink>,
}

impl std::fmt::Debug for FeedbackStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackStore")
            .field("items", &self.items)
            .field("next_id", &self.next_id)
            .field("edit_target", &self.edit_target)
            .field("edit_revision", &self.edit_revision)
            .finish_non_exhaustive()
    }
}

impl Default for FeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackStore {
    /// Creates an empty store stamped with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    /// Creates a store holding `items`.
    ///
    /// Items are kept in the given order; new ids continue after the highest
    /// existing id.
    #[must_use]
    pub fn from_items(items: Vec<FeedbackItem>) -> Self {
        let next_id = items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self {
            items,
            next_id,
            edit_target: EditTarget::Idle,
            edit_revision: 0,
            clock: Utc::now,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Replaces the timestamp source.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Records store mutations to `sink`.
    #[must_use]
    pub fn with_telemetry(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = sink;
        self
    }

    /// Returns all items, newest first.
    #[must_use]
    pub fn items(&self) -> &[FeedbackItem] {
        &self.items
    }

    /// Returns the item with `id`, if present.
    #[must_use]
    pub fn get(&self, id: FeedbackId) -> Option<&FeedbackItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns the number of stored items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the store holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Counter bumped on every edit target change.
    ///
    /// Hosts compare this against the last value they observed to decide
    /// when to run the form's edit-target rule.
    #[must_use]
    pub const fn edit_revision(&self) -> u64 {
        self.edit_revision
    }

    /// Returns the count and average rating of stored items.
    #[must_use]
    pub fn stats(&self) -> FeedbackStats {
        FeedbackStats::from_ratings(self.items.iter().map(|item| item.rating))
    }

    /// Marks the item with `id` as under edit.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::UnknownFeedback`] when no item has `id`.
    pub fn edit_feedback(&mut self, id: FeedbackId) -> Result<(), FeedbackError> {
        let item = self
            .get(id)
            .map(FeedbackItem::payload)
            .ok_or(FeedbackError::UnknownFeedback { id })?;

        tracing::debug!("editing feedback item {id}");
        self.set_edit_target(EditTarget::Editing { id, item });
        Ok(())
    }

    /// Abandons the current edit, if any.
    pub fn cancel_edit(&mut self) {
        if self.edit_target.is_editing() {
            self.set_edit_target(EditTarget::Idle);
        }
    }

    /// Removes the item with `id`.
    ///
    /// An edit in progress on the removed item is abandoned.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::UnknownFeedback`] when no item has `id`.
    pub fn delete_feedback(&mut self, id: FeedbackId) -> Result<FeedbackItem, FeedbackError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(FeedbackError::UnknownFeedback { id })?;
        let removed = self.items.remove(position);

        if self.edit_target.id() == Some(id) {
            self.set_edit_target(EditTarget::Idle);
        }

        tracing::debug!("deleted feedback item {id}");
        self.telemetry.record(TelemetryEvent::FeedbackDeleted { id });
        Ok(removed)
    }

    fn set_edit_target(&mut self, target: EditTarget) {
        self.edit_target = target;
        self.edit_revision = self.edit_revision.wrapping_add(1);
    }
}

impl FeedbackDispatcher for FeedbackStore {
    fn add_feedback(&mut self, payload: FeedbackPayload) {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);

        let item = FeedbackItem {
            id,
            text: payload.text,
            rating: payload.rating,
            created_at: (self.clock)(),
            updated_at: None,
        };
        let rating = item.rating;
        self.items.insert(0, item);

        tracing::debug!("added feedback item {id} with rating {rating}");
        self.telemetry
            .record(TelemetryEvent::FeedbackCreated { id, rating });
    }

    fn update_feedback(&mut self, id: FeedbackId, payload: FeedbackPayload) {
        let now = (self.clock)();
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::warn!("ignoring update for unknown feedback item {id}");
            return;
        };

        item.text = payload.text;
        item.rating = payload.rating;
        item.updated_at = Some(now);
        let rating = item.rating;

        self.set_edit_target(EditTarget::Idle);

        tracing::debug!("updated feedback item {id} with rating {rating}");
        self.telemetry
            .record(TelemetryEvent::FeedbackUpdated { id, rating });
    }

    fn edit_target(&self) -> &EditTarget {
        &self.edit_target
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rstest::{fixture, rstest};

    use super::{FeedbackDispatcher, FeedbackStore};
    use crate::error::FeedbackError;
    use crate::feedback::model::{EditTarget, FeedbackPayload};
    use crate::feedback::test_support::fixed_clock;
    use crate::telemetry::{TelemetryEvent, TelemetrySink};
    use crate::telemetry::test_support::RecordingSink;

    #[fixture]
    fn store() -> FeedbackStore {
        let mut store = FeedbackStore::new().with_clock(fixed_clock);
        store.add_feedback(FeedbackPayload::new("first review text", 4));
        store.add_feedback(FeedbackPayload::new("second review text", 8));
        store
    }

    #[rstest]
    fn add_feedback_assigns_increasing_ids_newest_first(store: FeedbackStore) {
        let ids: Vec<_> = store.items().iter().map(|item| item.id).collect();

        assert_eq!(ids, vec![2, 1]);
        assert_eq!(
            store.items().first().map(|item| item.created_at),
            Some(fixed_clock())
        );
    }

    #[rstest]
    fn from_items_continues_after_highest_id(store: FeedbackStore) {
        let mut reloaded = FeedbackStore::from_items(store.items().to_vec());
        reloaded.add_feedback(FeedbackPayload::new("third review text", 5));

        assert_eq!(reloaded.items().first().map(|item| item.id), Some(3));
    }

    #[rstest]
    fn edit_feedback_sets_target_and_bumps_revision(mut store: FeedbackStore) {
        let before = store.edit_revision();

        assert!(store.edit_feedback(1).is_ok());

        assert_eq!(
            store.edit_target(),
            &EditTarget::Editing {
                id: 1,
                item: FeedbackPayload::new("first review text", 4),
            }
        );
        assert_eq!(store.edit_revision(), before + 1);
    }

    #[rstest]
    fn edit_feedback_rejects_unknown_id(mut store: FeedbackStore) {
        assert_eq!(
            store.edit_feedback(99),
            Err(FeedbackError::UnknownFeedback { id: 99 })
        );
        assert!(!store.edit_target().is_editing());
    }

    #[rstest]
    fn update_feedback_replaces_payload_and_clears_target(mut store: FeedbackStore) {
        assert!(store.edit_feedback(1).is_ok());

        store.update_feedback(1, FeedbackPayload::new("rewritten review text", 2));

        let updated = store.get(1);
        assert_eq!(
            updated.map(|item| item.text.as_str()),
            Some("rewritten review text")
        );
        assert_eq!(updated.map(|item| item.rating), Some(2));
        assert_eq!(updated.and_then(|item| item.updated_at), Some(fixed_clock()));
        assert_eq!(store.edit_target(), &EditTarget::Idle);
    }

    #[rstest]
    fn update_feedback_ignores_unknown_id(mut store: FeedbackStore) {
        let before = store.items().to_vec();

        store.update_feedback(99, FeedbackPayload::new("ghost review text", 1));

        assert_eq!(store.items(), before.as_slice());
    }

    #[rstest]
    fn delete_feedback_clears_matching_edit_target(mut store: FeedbackStore) {
        assert!(store.edit_feedback(2).is_ok());

        let removed = store.delete_feedback(2);

        assert_eq!(removed.map(|item| item.id), Ok(2));
        assert_eq!(store.len(), 1);
        assert_eq!(store.edit_target(), &EditTarget::Idle);
    }

    #[rstest]
    fn delete_feedback_keeps_unrelated_edit_target(mut store: FeedbackStore) {
        assert!(store.edit_feedback(2).is_ok());
        let revision = store.edit_revision();

        assert!(store.delete_feedback(1).is_ok());

        assert_eq!(store.edit_target().id(), Some(2));
        assert_eq!(store.edit_revision(), revision);
    }

    #[rstest]
    fn cancel_edit_is_a_no_op_when_idle(mut store: FeedbackStore) {
        let revision = store.edit_revision();

        store.cancel_edit();

        assert_eq!(store.edit_revision(), revision);
    }

    #[rstest]
    fn stats_summarise_ratings(store: FeedbackStore) {
        let stats = store.stats();

        assert_eq!(stats.count(), 2);
        assert_eq!(stats.to_string(), "6.0");
    }

    #[test]
    fn mutations_are_recorded_to_telemetry() {
        let sink = Arc::new(RecordingSink::default());
        let mut store = FeedbackStore::new()
            .with_clock(fixed_clock)
            .with_telemetry(Arc::clone(&sink) as Arc<dyn TelemetrySink>);

        store.add_feedback(FeedbackPayload::new("a long enough review", 5));
        store.update_feedback(1, FeedbackPayload::new("a longer enough review", 6));
        assert!(store.delete_feedback(1).is_ok());

        assert_eq!(
            sink.take(),
            vec![
                TelemetryEvent::FeedbackCreated { id: 1, rating: 5 },
                TelemetryEvent::FeedbackUpdated { id: 1, rating: 6 },
                TelemetryEvent::FeedbackDeleted { id: 1 },
            ]
        );
    }
}
