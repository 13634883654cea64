//! Which region of the screen receives key input.

/// Focusable regions, cycled with Tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// The review text field.
    #[default]
    Text,
    /// The rating selector.
    Rating,
    /// The stored feedback list.
    List,
}

impl Focus {
    /// Returns the region after this one in Tab order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Text => Self::Rating,
            Self::Rating => Self::List,
            Self::List => Self::Text,
        }
    }

    /// Returns a short label for the status bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Rating => "rating",
            Self::List => "list",
        }
    }
}
