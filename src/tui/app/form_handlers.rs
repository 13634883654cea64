//! Form handlers for the feedback TUI.
//!
//! Key presses are turned into whole-text changes so the form sees the same
//! `on_text_change` transitions an input widget would produce.

use super::FeedbackApp;
use crate::form::SubmitOutcome;
use crate::tui::messages::AppMsg;

impl FeedbackApp {
    /// Dispatches form editing and rating messages to their handlers.
    pub(super) fn handle_form_msg(&mut self, msg: &AppMsg) {
        match msg {
            AppMsg::InsertChar(character) => self.handle_insert_char(*character),
            AppMsg::Backspace => self.handle_backspace(),
            AppMsg::Submit => self.handle_submit(),
            AppMsg::RatingNext => {
                let value = self.rating.select_next();
                self.form.on_rating_selected(value);
            }
            AppMsg::RatingPrevious => {
                let value = self.rating.select_previous();
                self.form.on_rating_selected(value);
            }
            AppMsg::RatingDigit(digit) => {
                if let Some(value) = self.rating.select_digit(*digit) {
                    self.form.on_rating_selected(value);
                }
            }
            _ => {
                // Unreachable: caller filters to form messages.
            }
        }
    }

    fn handle_insert_char(&mut self, character: char) {
        let mut text = self.form.text().to_owned();
        text.push(character);
        self.form.on_text_change(text);
        self.status = None;
    }

    fn handle_backspace(&mut self) {
        let mut text = self.form.text().to_owned();
        if text.pop().is_some() {
            self.form.on_text_change(text);
        }
    }

    fn handle_submit(&mut self) {
        match self.form.on_submit(&mut self.store) {
            SubmitOutcome::Created => {
                self.status = Some("Feedback submitted".to_owned());
                self.cursor.position = 0;
            }
            SubmitOutcome::Updated(id) => {
                self.status = Some(format!("Feedback #{id} updated"));
            }
            SubmitOutcome::Rejected => return,
        }

        self.rating.sync(self.form.rating());
        self.error = None;
        self.adjust_cursor();
        self.persist();
    }
}
