//! Card component rendering the feedback form.
//!
//! The card is purely presentational: it reads the form draft and rating
//! selector and never changes them.

use crate::feedback::{FeedbackId, MAX_RATING};
use crate::form::{FeedbackForm, RatingSelector};
use crate::tui::state::Focus;

const HEADING: &str = "How would you rate your service with us?";
const PLACEHOLDER: &str = "Write a review";
const REVERSE_VIDEO: &str = "\x1b[7m";
const RESET: &str = "\x1b[0m";

/// Context for rendering the feedback card.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackCardViewContext<'a> {
    /// Form draft to display.
    pub form: &'a FeedbackForm,
    /// Rating selector highlight.
    pub rating: &'a RatingSelector,
    /// Region that currently receives key input.
    pub focus: Focus,
    /// Identifier of the item under edit, if any.
    pub editing: Option<FeedbackId>,
}

/// Component drawing the heading, rating bar, text input, and Send button.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackCardComponent {
    /// Whether to draw the card in reverse video.
    reverse: bool,
}

impl FeedbackCardComponent {
    /// Creates a new card component.
    #[must_use]
    pub const fn new(reverse: bool) -> Self {
        Self { reverse }
    }

    /// Renders the card as newline-terminated lines.
    #[must_use]
    pub fn view(&self, ctx: &FeedbackCardViewContext<'_>) -> String {
        let mut lines = vec![HEADING.to_owned()];
        if let Some(id) = ctx.editing {
            lines.push(format!("Editing feedback #{id}"));
        }
        lines.push(Self::render_rating_bar(ctx));
        lines.push(Self::render_input(ctx));
        lines.push(Self::render_send_button(ctx.form));
        if let Some(message) = ctx.form.validation_message() {
            lines.push(message.to_owned());
        }

        let mut output = String::new();
        for line in lines {
            if self.reverse {
                output.push_str(REVERSE_VIDEO);
                output.push_str(&line);
                output.push_str(RESET);
            } else {
                output.push_str(&line);
            }
            output.push('\n');
        }
        output
    }

    fn render_rating_bar(ctx: &FeedbackCardViewContext<'_>) -> String {
        let marker = focus_marker(ctx.focus == Focus::Rating);
        let selected = ctx.rating.selected();
        let options: Vec<String> = (1..=MAX_RATING)
            .map(|value| {
                if value == selected {
                    format!("[{value}]")
                } else {
                    format!(" {value} ")
                }
            })
            .collect();
        format!("{marker}Rating: {}", options.join(""))
    }

    fn render_input(ctx: &FeedbackCardViewContext<'_>) -> String {
        let focused = ctx.focus == Focus::Text;
        let marker = focus_marker(focused);
        let cursor = if focused { "_" } else { "" };
        let text = ctx.form.text();
        if text.is_empty() && !focused {
            format!("{marker}Review: ({PLACEHOLDER})")
        } else {
            format!("{marker}Review: {text}{cursor}")
        }
    }

    fn render_send_button(form: &FeedbackForm) -> String {
        if form.is_submit_enabled() {
            "  [ Send ]".to_owned()
        } else {
            "  [ Send ] (disabled)".to_owned()
        }
    }
}

const fn focus_marker(focused: bool) -> &'static str {
    if focused { "> " } else { "  " }
}
