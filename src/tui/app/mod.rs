//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the application state that hosts the feedback form
//! next to the stored feedback list. It owns the store, routes messages to
//! the form and list handlers, and applies the form's reactive rule whenever
//! the store's edit target changes.
//!
//! # Module Structure
//!
//! - `form_handlers`: text input, rating selection, and submission
//! - `list_handlers`: cursor movement, edit, and delete
//! - `lifecycle_handlers`: focus, help, resize, and quit
//! - `rendering`: view rendering methods for terminal output
//! - `model_impl`: the `bubbletea_rs::Model` implementation

use bubbletea_rs::Cmd;
use camino::{Utf8Path, Utf8PathBuf};

use crate::feedback::storage::save_store;
use crate::feedback::{FeedbackDispatcher, FeedbackId, FeedbackItem, FeedbackStore};
use crate::form::{FeedbackForm, RatingSelector};

use super::components::{FeedbackCardComponent, FeedbackListComponent};
use super::messages::AppMsg;
use super::state::{Focus, ListCursor};

mod form_handlers;
mod lifecycle_handlers;
mod list_handlers;
mod model_impl;
mod rendering;

/// Lines taken by the card at its tallest (editing banner and message shown).
const CARD_MAX_HEIGHT: usize = 6;

/// Lines taken by the header, stats line, and status bar.
const CHROME_HEIGHT: usize = 3;

/// Main application model for the feedback form TUI.
#[derive(Debug)]
pub struct FeedbackApp {
    /// Stored feedback and edit target.
    pub(crate) store: FeedbackStore,
    /// Draft of the feedback being written.
    pub(crate) form: FeedbackForm,
    /// Rating bar highlight.
    pub(crate) rating: RatingSelector,
    /// Region receiving key input.
    pub(crate) focus: Focus,
    /// List cursor and scroll state.
    pub(crate) cursor: ListCursor,
    /// Edit revision last passed to the form.
    observed_edit_revision: u64,
    /// File the store is saved to after each change.
    store_path: Option<Utf8PathBuf>,
    /// Confirmation shown in the status bar.
    pub(crate) status: Option<String>,
    /// Current error message, if any.
    pub(crate) error: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Card component.
    card: FeedbackCardComponent,
    /// Feedback list component.
    feedback_list: FeedbackListComponent,
}

impl FeedbackApp {
    /// Creates a new application around `store`.
    #[must_use]
    pub fn new(store: FeedbackStore) -> Self {
        let observed_edit_revision = store.edit_revision();
        let mut app = Self {
            store,
            form: FeedbackForm::new(),
            rating: RatingSelector::new(),
            focus: Focus::default(),
            cursor: ListCursor::new(),
            observed_edit_revision,
            store_path: None,
            status: None,
            error: None,
            width: 80,
            height: 24,
            show_help: false,
            card: FeedbackCardComponent::default(),
            feedback_list: FeedbackListComponent::new(),
        };
        app.feedback_list
            .set_visible_height(app.calculate_list_height());
        app
    }

    /// Saves the store to `path` after every change.
    #[must_use]
    pub fn with_store_path(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    /// Draws the card in reverse video.
    #[must_use]
    pub const fn with_reverse(mut self, reverse: bool) -> Self {
        self.card = FeedbackCardComponent::new(reverse);
        self
    }

    /// Returns the form draft.
    #[must_use]
    pub const fn form(&self) -> &FeedbackForm {
        &self.form
    }

    /// Returns the store.
    #[must_use]
    pub const fn store(&self) -> &FeedbackStore {
        &self.store
    }

    /// Returns the focused region.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor.position
    }

    /// Returns the highlighted rating.
    #[must_use]
    pub const fn selected_rating(&self) -> u8 {
        self.rating.selected()
    }

    /// Returns the current error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the current status message, if any.
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the item under the cursor, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&FeedbackItem> {
        self.store.items().get(self.cursor.position)
    }

    /// Returns the id of the item under edit, if any.
    #[must_use]
    pub fn editing_id(&self) -> Option<FeedbackId> {
        self.store.edit_target().id()
    }

    /// Handles a message and updates state accordingly.
    ///
    /// After the message is applied, a change of the store's edit target is
    /// passed to the form before the next view is rendered.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let cmd = if msg.is_form() {
            self.handle_form_msg(msg);
            None
        } else if msg.is_list() {
            self.handle_list_msg(msg)
        } else {
            self.handle_lifecycle_msg(msg)
        };
        self.sync_edit_target();
        cmd
    }

    /// Passes a new edit target to the form, once per store revision.
    fn sync_edit_target(&mut self) {
        let revision = self.store.edit_revision();
        if revision == self.observed_edit_revision {
            return;
        }

        self.observed_edit_revision = revision;
        self.form.on_edit_target_changed(self.store.edit_target());
        self.rating.sync(self.form.rating());
    }

    /// Writes the store to disk when a store path is configured.
    pub(crate) fn persist(&mut self) {
        let Some(path) = self.store_path.as_deref() else {
            return;
        };

        if let Err(error) = save_store(path, &self.store) {
            tracing::warn!("failed to save feedback store: {error}");
            self.error = Some(error.to_string());
        }
    }

    /// Returns the configured store path, if any.
    #[must_use]
    pub fn store_path(&self) -> Option<&Utf8Path> {
        self.store_path.as_deref()
    }

    /// Number of list rows that fit below the card.
    pub(crate) fn calculate_list_height(&self) -> usize {
        usize::from(self.height)
            .saturating_sub(CARD_MAX_HEIGHT.saturating_add(CHROME_HEIGHT))
            .max(1)
    }

    /// Keeps the cursor inside the list and on screen.
    pub(crate) fn adjust_cursor(&mut self) {
        self.cursor.clamp(self.store.len());
        self.cursor
            .scroll_into_view(self.feedback_list.visible_height());
    }
}

#[cfg(test)]
mod tests;
