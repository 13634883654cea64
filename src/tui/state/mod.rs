//! State management for the feedback form TUI.
//!
//! This module provides the focus and list cursor state that sit around the
//! form. The form's own draft lives in [`crate::form`].

mod focus;
mod list_cursor;

pub use focus::Focus;
pub use list_cursor::ListCursor;
