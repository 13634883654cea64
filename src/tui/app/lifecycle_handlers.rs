//! Lifecycle, focus, and window handlers for the feedback TUI.

use bubbletea_rs::Cmd;

use super::FeedbackApp;
use crate::tui::messages::AppMsg;
use crate::tui::state::Focus;

impl FeedbackApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::FocusNext => {
                self.focus = self.focus.next();
                None
            }
            AppMsg::FocusList => {
                self.focus = Focus::List;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.handle_resize(*width, *height);
                None
            }
            _ => {
                // Unreachable: caller filters out form and list messages.
                None
            }
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let list_height = self.calculate_list_height();
        self.feedback_list.set_visible_height(list_height);
        self.adjust_cursor();
    }
}
