//! Feedback list component for displaying stored reviews.
//!
//! This component renders a scrollable list of feedback items with cursor
//! highlighting, showing each item's rating, text, and creation date.

use super::text_fit::truncate_with_ellipsis;
use crate::feedback::{FeedbackId, FeedbackItem, format_timestamp};

/// Default visible height for the feedback list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 10;

/// Context for rendering the feedback list view.
#[derive(Debug, Clone)]
pub struct FeedbackListViewContext<'a> {
    /// Stored items, newest first.
    pub items: &'a [FeedbackItem],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of items scrolled from top.
    pub scroll_offset: usize,
    /// Maximum visible height in lines.
    pub visible_height: usize,
    /// Maximum line width in columns.
    pub max_width: usize,
    /// Whether the list has keyboard focus.
    pub focused: bool,
    /// Identifier of the item under edit, if any.
    pub editing: Option<FeedbackId>,
}

/// Component for displaying stored feedback items.
#[derive(Debug, Clone)]
pub struct FeedbackListComponent {
    visible_height: usize,
}

impl Default for FeedbackListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackListComponent {
    /// Creates a new feedback list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the visible window of the list.
    #[must_use]
    pub fn view(&self, ctx: &FeedbackListViewContext<'_>) -> String {
        if ctx.items.is_empty() {
            return "  No feedback yet.\n".to_owned();
        }

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let mut output = String::new();
        for (index, item) in ctx
            .items
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(visible_height)
        {
            let is_selected = ctx.focused && index == ctx.cursor_position;
            let line = format_item_line(item, is_selected, ctx.editing == Some(item.id));
            output.push_str(&truncate_with_ellipsis(&line, ctx.max_width));
            output.push('\n');
        }
        output
    }
}

fn format_item_line(item: &FeedbackItem, is_selected: bool, is_editing: bool) -> String {
    let prefix = if is_selected { ">" } else { " " };
    let edit_marker = if is_editing { "*" } else { " " };
    let first_line = item.text.lines().next().unwrap_or("").trim();
    let date = format_timestamp(item.created_at);
    format!(
        "{prefix}{edit_marker}({rating:>2}) {first_line} | {date}",
        rating = item.rating
    )
}
