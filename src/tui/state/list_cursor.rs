//! Cursor and scroll state for the feedback list.
//!
//! The cursor is retained across store changes and clamped to the valid
//! range whenever the list shrinks.

/// Cursor position and scroll offset within the feedback list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Index of the highlighted item.
    pub position: usize,
    /// Index of the first visible item.
    pub scroll_offset: usize,
}

impl ListCursor {
    /// Creates a cursor at the top of the list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: 0,
            scroll_offset: 0,
        }
    }

    /// Moves the cursor up by one position if possible.
    pub const fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Moves the cursor down by one position if within bounds.
    pub const fn down(&mut self, count: usize) {
        if self.position.saturating_add(1) < count {
            self.position = self.position.saturating_add(1);
        }
    }

    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the list is empty, cursor is set to 0. If cursor exceeds the list
    /// length, it is set to the last valid index.
    pub const fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.position = 0;
            self.scroll_offset = 0;
        } else if self.position >= count {
            self.position = count.saturating_sub(1);
        }
    }

    /// Adjusts the scroll offset so the cursor is within `visible_height`
    /// rows.
    pub const fn scroll_into_view(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.position < self.scroll_offset {
            self.scroll_offset = self.position;
        } else if self.position >= self.scroll_offset.saturating_add(visible_height) {
            self.scroll_offset = self
                .position
                .saturating_add(1)
                .saturating_sub(visible_height);
        }
    }
}
