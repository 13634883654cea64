//! Rating selector offering ratings from 1 to [`MAX_RATING`].

use crate::feedback::MAX_RATING;

/// Highlighted rating of the selector.
///
/// The selector only reports values; the form decides what to do with them.
/// Zero means nothing is highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingSelector {
    selected: u8,
}

impl RatingSelector {
    /// Creates a selector with nothing highlighted.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Returns the highlighted rating, or zero.
    #[must_use]
    pub const fn selected(&self) -> u8 {
        self.selected
    }

    /// Highlights `value`, clamped to the offered range, and returns it.
    ///
    /// Zero clears the highlight.
    pub fn select(&mut self, value: u8) -> u8 {
        self.selected = value.min(MAX_RATING);
        self.selected
    }

    /// Highlights the next higher rating and returns it.
    pub fn select_next(&mut self) -> u8 {
        self.select(self.selected.saturating_add(1))
    }

    /// Highlights the next lower rating, never going below 1, and returns it.
    pub fn select_previous(&mut self) -> u8 {
        self.select(self.selected.saturating_sub(1).max(1))
    }

    /// Highlights the rating bound to a digit key and returns it.
    ///
    /// `1`–`9` select themselves and `0` selects 10. Other characters are
    /// ignored.
    pub fn select_digit(&mut self, digit: char) -> Option<u8> {
        let value = match digit.to_digit(10)? {
            0 => MAX_RATING,
            other => u8::try_from(other).ok()?,
        };
        Some(self.select(value))
    }

    /// Mirrors a rating set elsewhere, such as a form reset or edit.
    pub fn sync(&mut self, rating: u8) {
        self.selected = rating.min(MAX_RATING);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::RatingSelector;

    #[test]
    fn new_selector_has_no_highlight() {
        assert_eq!(RatingSelector::new().selected(), 0);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(4, 5)]
    #[case(10, 10)]
    fn select_next_clamps_at_maximum(#[case] start: u8, #[case] expected: u8) {
        let mut selector = RatingSelector::new();
        selector.sync(start);

        assert_eq!(selector.select_next(), expected);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(7, 6)]
    fn select_previous_stops_at_one(#[case] start: u8, #[case] expected: u8) {
        let mut selector = RatingSelector::new();
        selector.sync(start);

        assert_eq!(selector.select_previous(), expected);
    }

    #[rstest]
    #[case('1', Some(1))]
    #[case('9', Some(9))]
    #[case('0', Some(10))]
    #[case('x', None)]
    fn select_digit_maps_keys(#[case] digit: char, #[case] expected: Option<u8>) {
        let mut selector = RatingSelector::new();

        assert_eq!(selector.select_digit(digit), expected);
    }

    #[test]
    fn select_clamps_out_of_range_values() {
        let mut selector = RatingSelector::new();

        assert_eq!(selector.select(42), 10);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(7, 7)]
    #[case(10, 10)]
    fn sync_mirrors_form_rating(#[case] rating: u8, #[case] expected: u8) {
        let mut selector = RatingSelector::new();
        selector.select(3);

        selector.sync(rating);

        assert_eq!(selector.selected(), expected);
    }
}
