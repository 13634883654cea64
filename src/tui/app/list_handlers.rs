//! Feedback list handlers: cursor movement, edit, and delete.

use bubbletea_rs::Cmd;

use super::FeedbackApp;
use crate::feedback::FeedbackDispatcher;
use crate::tui::messages::AppMsg;
use crate::tui::state::Focus;

impl FeedbackApp {
    /// Dispatches list messages to their handlers.
    pub(super) fn handle_list_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => {
                self.cursor.up();
                self.adjust_cursor();
                None
            }
            AppMsg::CursorDown => {
                self.cursor.down(self.store.len());
                self.adjust_cursor();
                None
            }
            AppMsg::EditSelected => {
                self.handle_edit_selected();
                None
            }
            AppMsg::DeleteSelected => {
                self.handle_delete_selected();
                None
            }
            AppMsg::EscapePressed => self.handle_escape(),
            _ => {
                // Unreachable: caller filters to list messages.
                None
            }
        }
    }

    fn handle_edit_selected(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            return;
        };

        match self.store.edit_feedback(id) {
            Ok(()) => {
                self.focus = Focus::Text;
                self.status = Some(format!("Editing feedback #{id}"));
                self.error = None;
            }
            Err(error) => self.error = Some(error.to_string()),
        }
    }

    fn handle_delete_selected(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            return;
        };

        match self.store.delete_feedback(id) {
            Ok(_) => {
                self.status = Some(format!("Feedback #{id} deleted"));
                self.error = None;
                self.adjust_cursor();
                self.persist();
            }
            Err(error) => self.error = Some(error.to_string()),
        }
    }

    /// Abandons an edit in progress, or quits when there is none.
    fn handle_escape(&mut self) -> Option<Cmd> {
        if !self.store.edit_target().is_editing() {
            return Some(bubbletea_rs::quit());
        }

        self.store.cancel_edit();
        self.status = Some("Edit cancelled".to_owned());
        None
    }
}
