//! Feedback form draft state and its validation lifecycle.
//!
//! The form owns a transient draft (text, rating, submit readiness, and an
//! inline validation message). Every transition is a method on
//! [`FeedbackForm`] so hosts drive it from discrete events: keystrokes,
//! rating clicks, submit requests, and edit-target changes observed on the
//! store.

use crate::feedback::{EditTarget, FeedbackDispatcher, FeedbackId, FeedbackPayload};

/// Minimum trimmed length, in characters, of a submittable review.
pub const MIN_TEXT_LENGTH: usize = 10;

/// Inline message shown while the trimmed text is too short.
pub const TEXT_TOO_SHORT_MESSAGE: &str = "Text must be at least 10 characters";

/// Coarse validation state of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// No text entered.
    Empty,
    /// Between one and nine trimmed characters.
    Invalid,
    /// Ready to submit.
    Valid,
}

/// Result of a submit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new item was handed to the store.
    Created,
    /// The item under edit was handed to the store.
    Updated(FeedbackId),
    /// The text was too short; nothing was dispatched.
    Rejected,
}

/// Draft state of the feedback form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackForm {
    text: String,
    rating: u8,
    submit_enabled: bool,
    validation_message: Option<&'static str>,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackForm {
    /// Creates an empty form with the Send button disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            rating: 0,
            submit_enabled: false,
            validation_message: None,
        }
    }

    /// Returns the draft text exactly as typed.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Returns the selected rating; zero means unset.
    #[must_use]
    pub const fn rating(&self) -> u8 {
        self.rating
    }

    /// Returns whether the Send button is enabled.
    #[must_use]
    pub const fn is_submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Returns the inline validation message, if one is shown.
    #[must_use]
    pub const fn validation_message(&self) -> Option<&'static str> {
        self.validation_message
    }

    /// Returns the coarse validation state.
    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        if self.submit_enabled {
            FormPhase::Valid
        } else if self.validation_message.is_some() {
            FormPhase::Invalid
        } else {
            FormPhase::Empty
        }
    }

    /// Replaces the draft text and revalidates it.
    ///
    /// The text is stored verbatim; only validation looks at the trimmed
    /// form.
    pub fn on_text_change(&mut self, new_text: impl Into<String>) {
        let text = new_text.into();
        let length = trimmed_length(&text);

        if length == 0 {
            self.submit_enabled = false;
            self.validation_message = None;
        } else if length < MIN_TEXT_LENGTH {
            self.submit_enabled = false;
            self.validation_message = Some(TEXT_TOO_SHORT_MESSAGE);
        } else {
            self.submit_enabled = true;
            self.validation_message = None;
        }

        self.text = text;
    }

    /// Records the rating reported by the rating selector.
    ///
    /// Any value is accepted, including zero.
    pub const fn on_rating_selected(&mut self, value: u8) {
        self.rating = value;
    }

    /// Submits the draft to `dispatcher` and resets the form.
    ///
    /// The length check is repeated here regardless of the Send button
    /// state. When it fails nothing is dispatched and the draft is kept.
    /// Otherwise exactly one store call is made: an update when the store
    /// reports an edit in progress, a create otherwise.
    pub fn on_submit(&mut self, dispatcher: &mut dyn FeedbackDispatcher) -> SubmitOutcome {
        if trimmed_length(&self.text) < MIN_TEXT_LENGTH {
            tracing::debug!("dropping feedback submission with short text");
            return SubmitOutcome::Rejected;
        }

        let payload = FeedbackPayload::new(std::mem::take(&mut self.text), self.rating);
        let edit_id = dispatcher.edit_target().id();
        let outcome = if let Some(id) = edit_id {
            dispatcher.update_feedback(id, payload);
            SubmitOutcome::Updated(id)
        } else {
            dispatcher.add_feedback(payload);
            SubmitOutcome::Created
        };

        self.rating = 0;
        self.submit_enabled = false;
        self.validation_message = None;
        outcome
    }

    /// Reacts to a change of the store's edit target.
    ///
    /// When an edit begins, the draft takes the item's text and rating and
    /// the Send button is enabled without a length check. When no edit is in
    /// progress the draft is left untouched.
    pub fn on_edit_target_changed(&mut self, target: &EditTarget) {
        let EditTarget::Editing { item, .. } = target else {
            return;
        };

        self.text.clone_from(&item.text);
        self.rating = item.rating;
        self.submit_enabled = true;
        self.validation_message = None;
    }
}

/// Character count of `text` after trimming surrounding whitespace.
#[must_use]
pub fn trimmed_length(text: &str) -> usize {
    text.trim().chars().count()
}
