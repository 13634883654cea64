//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions and
//! system events.

/// Messages for the feedback form TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Form editing
    /// Append a character to the review text.
    InsertChar(char),
    /// Remove the last character of the review text.
    Backspace,
    /// Submit the form.
    Submit,

    // Rating selection
    /// Highlight the next higher rating.
    RatingNext,
    /// Highlight the next lower rating.
    RatingPrevious,
    /// Select the rating bound to a digit key.
    RatingDigit(char),

    // Feedback list
    /// Move the list cursor up one item.
    CursorUp,
    /// Move the list cursor down one item.
    CursorDown,
    /// Load the selected item into the form for editing.
    EditSelected,
    /// Delete the selected item.
    DeleteSelected,

    // Focus
    /// Move focus to the next region (text, rating, list).
    FocusNext,
    /// Move focus back to the list.
    FocusList,
    /// Escape pressed while the list has focus.
    EscapePressed,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns whether the message edits or submits the form.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::Backspace
                | Self::Submit
                | Self::RatingNext
                | Self::RatingPrevious
                | Self::RatingDigit(_)
        )
    }

    /// Returns whether the message acts on the feedback list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::EditSelected
                | Self::DeleteSelected
                | Self::EscapePressed
        )
    }
}
