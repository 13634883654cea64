//! Terminal User Interface hosting the feedback form.
//!
//! The TUI follows the Model-View-Update (MVU) pattern of bubbletea-rs:
//!
//! - **Model**: Application state in [`app::FeedbackApp`]
//! - **View**: Rendering in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the session seed is kept in module-level storage. Call
//! [`set_initial_session`] before starting the program, and
//! `FeedbackApp::init()` will read it.

use std::sync::OnceLock;

use camino::Utf8PathBuf;

use crate::feedback::FeedbackItem;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::FeedbackApp;

/// Global storage for the session seed.
static INITIAL_SESSION: OnceLock<SessionSeed> = OnceLock::new();

/// Data the TUI starts from.
#[derive(Debug, Clone, Default)]
pub struct SessionSeed {
    /// Items loaded from storage, newest first.
    pub items: Vec<FeedbackItem>,
    /// File the store is saved to after each change, if any.
    pub store_path: Option<Utf8PathBuf>,
    /// Whether to draw the card in reverse video.
    pub reverse: bool,
}

/// Sets the session seed for the TUI application.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the seed was set, `false` if it was already set.
pub fn set_initial_session(seed: SessionSeed) -> bool {
    INITIAL_SESSION.set(seed).is_ok()
}

/// Gets a clone of the session seed, or an empty seed if none was set.
pub(crate) fn get_initial_session() -> SessionSeed {
    INITIAL_SESSION.get().cloned().unwrap_or_default()
}
