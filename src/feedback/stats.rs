//! Summary statistics over stored feedback ratings.

use std::fmt;

/// Count and average rating of a set of feedback items.
///
/// The average is held in tenths, rounded half up, so it can be shown with
/// one decimal place without floating point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedbackStats {
    count: usize,
    average_tenths: u64,
}

impl FeedbackStats {
    /// Computes statistics from individual ratings.
    pub fn from_ratings(ratings: impl IntoIterator<Item = u8>) -> Self {
        let (count, sum) = ratings
            .into_iter()
            .fold((0_u64, 0_u64), |(count, sum), rating| {
                (count.saturating_add(1), sum.saturating_add(u64::from(rating)))
            });

        // round(sum * 10 / count) == (sum * 20 + count) / (count * 2)
        let average_tenths = sum
            .saturating_mul(20)
            .saturating_add(count)
            .checked_div(count.saturating_mul(2))
            .unwrap_or(0);

        Self {
            count: usize::try_from(count).unwrap_or(usize::MAX),
            average_tenths,
        }
    }

    /// Returns the number of rated items.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the average rating multiplied by ten.
    #[must_use]
    pub const fn average_tenths(&self) -> u64 {
        self.average_tenths
    }
}

impl fmt::Display for FeedbackStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.average_tenths.checked_div(10).unwrap_or(0);
        let fraction = self.average_tenths.checked_rem(10).unwrap_or(0);
        write!(f, "{whole}.{fraction}")
    }
}
