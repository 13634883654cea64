//! Submit mode: drive the feedback form without a terminal interface.
//!
//! The review passes through the same form transitions as typed input, so
//! the length rule applies unchanged. Rejected text exits with an error
//! instead of an inline message.

use std::io;

use feedback_form::form::TEXT_TOO_SHORT_MESSAGE;
use feedback_form::{
    FeedbackConfig, FeedbackDispatcher, FeedbackError, FeedbackForm, FeedbackId, FeedbackStore,
    SubmitOutcome,
};

use super::output::write_submit_outcome;
use super::{open_store, save_configured_store};

/// Submits the configured review and saves the store.
///
/// # Errors
///
/// Returns an error if:
/// - No review text is configured
/// - The store cannot be loaded or saved
/// - `edit_id` names an unknown item
/// - The text fails validation
pub fn run(config: &FeedbackConfig) -> Result<(), FeedbackError> {
    let text = config.require_text()?;
    let mut store = open_store(config)?;

    let outcome = submit(&mut store, text, config.rating, config.edit_id)?;
    save_configured_store(config, &store)?;

    let mut stdout = io::stdout().lock();
    write_submit_outcome(&mut stdout, outcome, &store)
}

/// Runs one review through a fresh form against `store`.
///
/// With `edit_id`, the item is loaded into the form first, so an omitted
/// rating keeps the stored one.
pub(crate) fn submit(
    store: &mut FeedbackStore,
    text: &str,
    rating: Option<u8>,
    edit_id: Option<FeedbackId>,
) -> Result<SubmitOutcome, FeedbackError> {
    let mut form = FeedbackForm::new();

    if let Some(id) = edit_id {
        store.edit_feedback(id)?;
        form.on_edit_target_changed(store.edit_target());
    }

    form.on_text_change(text);
    if let Some(value) = rating {
        form.on_rating_selected(value);
    }

    match form.on_submit(store) {
        SubmitOutcome::Rejected => Err(FeedbackError::SubmissionRejected {
            message: form
                .validation_message()
                .unwrap_or(TEXT_TOO_SHORT_MESSAGE)
                .to_owned(),
        }),
        outcome => Ok(outcome),
    }
}

#[cfg(test)]
mod tests {
    use feedback_form::feedback::test_support::store_with_reviews;
    use feedback_form::{FeedbackDispatcher, FeedbackError, FeedbackStore, SubmitOutcome};
    use rstest::rstest;

    use super::submit;

    #[test]
    fn creates_new_item() {
        let mut store = FeedbackStore::new();

        let outcome = submit(&mut store, "this is a long enough review", Some(4), None);

        assert_eq!(outcome, Ok(SubmitOutcome::Created));
        assert_eq!(store.len(), 1);
        assert_eq!(store.items().first().map(|item| item.rating), Some(4));
    }

    #[rstest]
    #[case("")]
    #[case("short")]
    #[case("   padded    ")]
    fn rejects_short_text(#[case] text: &str) {
        let mut store = FeedbackStore::new();

        let outcome = submit(&mut store, text, Some(4), None);

        assert_eq!(
            outcome,
            Err(FeedbackError::SubmissionRejected {
                message: "Text must be at least 10 characters".to_owned(),
            })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn edit_keeps_stored_rating_when_omitted() {
        let mut store = store_with_reviews(&[("existing text here", 3)]);

        let outcome = submit(&mut store, "replacement review text", None, Some(1));

        assert_eq!(outcome, Ok(SubmitOutcome::Updated(1)));
        let item = store.get(1).map(|found| (found.text.clone(), found.rating));
        assert_eq!(item, Some(("replacement review text".to_owned(), 3)));
        assert!(!store.edit_target().is_editing());
    }

    #[test]
    fn edit_of_unknown_item_fails() {
        let mut store = FeedbackStore::new();

        let outcome = submit(&mut store, "this is a long enough review", None, Some(9));

        assert_eq!(outcome, Err(FeedbackError::UnknownFeedback { id: 9 }));
    }
}
