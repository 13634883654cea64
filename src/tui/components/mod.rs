//! UI components for the feedback form TUI.
//!
//! Components are presentational: each takes a borrowed view context and
//! returns rendered lines without touching application state.

mod feedback_card;
mod feedback_list;
mod text_fit;

pub use feedback_card::{FeedbackCardComponent, FeedbackCardViewContext};
pub use feedback_list::{FeedbackListComponent, FeedbackListViewContext};
pub(crate) use text_fit::fit_line;
