//! Rendering logic for the feedback TUI application.
//!
//! These are pure query methods that read state without modification.

use super::FeedbackApp;
use crate::tui::components::{FeedbackCardViewContext, FeedbackListViewContext};
use crate::tui::state::Focus;

const HELP_TEXT: &str = r"
=== Keyboard Shortcuts ===

Anywhere:
  Tab        Move focus (text, rating, list)
  Esc        Return focus to the list
  Ctrl+C     Quit

Review text:
  text keys  Edit the review
  Backspace  Delete one character
  Enter      Send the review

Rating:
  Left, h    Lower rating
  Right, l   Higher rating
  1-9, 0     Select rating (0 selects 10)
  Enter      Send the review

List:
  j, Down    Move cursor down
  k, Up      Move cursor up
  e, Enter   Edit the selected review
  d, Delete  Delete the selected review
  Esc        Cancel edit, or quit when not editing
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";

impl FeedbackApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Feedback";
        let editing = self
            .editing_id()
            .map(|id| format!(" [editing #{id}]"))
            .unwrap_or_default();
        format!("{title}{editing}\n")
    }

    /// Renders the review count and average rating.
    pub(super) fn render_stats_line(&self) -> String {
        let stats = self.store.stats();
        let noun = if stats.count() == 1 {
            "review"
        } else {
            "reviews"
        };
        format!("{} {noun} | Average rating: {stats}\n", stats.count())
    }

    /// Renders the feedback card.
    pub(super) fn render_card(&self) -> String {
        let ctx = FeedbackCardViewContext {
            form: &self.form,
            rating: &self.rating,
            focus: self.focus,
            editing: self.editing_id(),
        };
        self.card.view(&ctx)
    }

    /// Renders the visible part of the feedback list.
    pub(super) fn render_list(&self) -> String {
        let ctx = FeedbackListViewContext {
            items: self.store.items(),
            cursor_position: self.cursor.position,
            scroll_offset: self.cursor.scroll_offset,
            visible_height: self.calculate_list_height(),
            max_width: usize::from(self.width).max(1),
            focused: self.focus == Focus::List,
            editing: self.editing_id(),
        };
        self.feedback_list.view(&ctx)
    }

    /// Renders the status bar with errors, confirmations, or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }

        if let Some(status) = &self.status {
            return format!("{status}\n");
        }

        format!("[{}] {}\n", self.focus.label(), self.status_hints())
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }
        HELP_TEXT.to_owned()
    }

    const fn status_hints(&self) -> &'static str {
        match self.focus {
            Focus::Text => "Enter:send  Tab:rating  Esc:list  Ctrl+C:quit",
            Focus::Rating => "←/→:rate  0-9:pick  Enter:send  Tab:list  Esc:list",
            Focus::List if self.width <= 80 => "q:quit  ?:help  j/k:move  e:edit  d:delete",
            Focus::List => "j/k:move  e:edit  d:delete  Tab:text  Esc:cancel/quit  ?:help  q:quit",
        }
    }
}
