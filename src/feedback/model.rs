//! Feedback records and the edit-target signal shared with the form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store to each feedback item.
pub type FeedbackId = u64;

/// Highest rating offered by the rating selector.
pub const MAX_RATING: u8 = 10;

/// Text and rating submitted by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackPayload {
    /// Review text, stored exactly as typed (untrimmed).
    pub text: String,
    /// Star rating; zero means unset.
    pub rating: u8,
}

impl FeedbackPayload {
    /// Creates a payload from review text and a rating.
    #[must_use]
    pub fn new(text: impl Into<String>, rating: u8) -> Self {
        Self {
            text: text.into(),
            rating,
        }
    }
}

/// A stored feedback record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    /// Store-assigned identifier.
    pub id: FeedbackId,
    /// Review text.
    pub text: String,
    /// Star rating; zero means unset.
    pub rating: u8,
    /// When the item was first added.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl FeedbackItem {
    /// Returns the editable part of the record.
    #[must_use]
    pub fn payload(&self) -> FeedbackPayload {
        FeedbackPayload::new(self.text.clone(), self.rating)
    }
}

/// Which item, if any, is currently being edited.
///
/// Owned by the store and observed by the form. The form never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditTarget {
    /// No edit is in progress.
    #[default]
    Idle,
    /// The item with `id` is being edited.
    Editing {
        /// Identifier of the item under edit.
        id: FeedbackId,
        /// Snapshot of the item's text and rating when editing began.
        item: FeedbackPayload,
    },
}

impl EditTarget {
    /// Returns whether an edit is in progress.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Returns the identifier of the item under edit.
    #[must_use]
    pub const fn id(&self) -> Option<FeedbackId> {
        match self {
            Self::Idle => None,
            Self::Editing { id, .. } => Some(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EditTarget, FeedbackPayload};

    #[test]
    fn idle_target_has_no_id() {
        let target = EditTarget::default();

        assert!(!target.is_editing());
        assert_eq!(target.id(), None);
    }

    #[test]
    fn editing_target_reports_id() {
        let target = EditTarget::Editing {
            id: 7,
            item: FeedbackPayload::new("existing text here", 3),
        };

        assert!(target.is_editing());
        assert_eq!(target.id(), Some(7));
    }
}
