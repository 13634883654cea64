//! `Model` trait implementation for the feedback TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `FeedbackApp`, handling initialisation, update dispatch, and view
//! rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use super::FeedbackApp;
use crate::feedback::FeedbackStore;
use crate::tui::components::fit_line;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for FeedbackApp {
    fn init() -> (Self, Option<Cmd>) {
        let seed = crate::tui::get_initial_session();
        let store = FeedbackStore::from_items(seed.items);
        let mut model = Self::new(store).with_reverse(seed.reverse);
        if let Some(path) = seed.store_path {
            model = model.with_store_path(path);
        }
        (model, None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            if let Some(mapped) = map_key_to_message(key_msg, self.focus) {
                return self.handle_message(&mapped);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_card());
        output.push_str(&self.render_stats_line());
        output.push_str(&self.render_list());
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl FeedbackApp {
    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap and padded with spaces to clear stale cells after resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = usize::from(self.width.max(1));
        let safe_width = width.saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| fit_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}
