use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based position of a slide within a deck.
///
/// Identity of a slide is its position; values handed out by the tracker are
/// always within `[0, len - 1]` of the deck they were derived for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct SlideIndex(usize);

impl SlideIndex {
    /// The first slide.
    pub const FIRST: Self = Self(0);

    /// Creates a new `SlideIndex`
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying value
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Returns the index as a signed navigation target.
    #[must_use]
    pub fn as_target(self) -> i64 {
        i64::try_from(self.0).unwrap_or(i64::MAX)
    }

    /// Clamps a raw (possibly negative or past-the-end) index into a deck of
    /// `slide_count` slides.
    ///
    /// A deck with no slides clamps everything to `FIRST`.
    #[must_use]
    pub fn clamped(raw: i64, slide_count: usize) -> Self {
        let Some(last) = slide_count.checked_sub(1) else {
            return Self::FIRST;
        };
        if raw <= 0 {
            return Self::FIRST;
        }
        let raw = usize::try_from(raw).unwrap_or(usize::MAX);
        Self(raw.min(last))
    }
}

impl fmt::Debug for SlideIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlideIndex({})", self.0)
    }
}

impl fmt::Display for SlideIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SlideIndex> for usize {
    fn from(index: SlideIndex) -> Self {
        index.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_keeps_in_range_values() {
        assert_eq!(SlideIndex::clamped(0, 13), SlideIndex::new(0));
        assert_eq!(SlideIndex::clamped(7, 13), SlideIndex::new(7));
        assert_eq!(SlideIndex::clamped(12, 13), SlideIndex::new(12));
    }

    #[test]
    fn clamped_pins_out_of_range_values() {
        assert_eq!(SlideIndex::clamped(-3, 13), SlideIndex::FIRST);
        assert_eq!(SlideIndex::clamped(13, 13), SlideIndex::new(12));
        assert_eq!(SlideIndex::clamped(i64::MAX, 13), SlideIndex::new(12));
    }

    #[test]
    fn clamped_into_empty_deck_is_first() {
        assert_eq!(SlideIndex::clamped(4, 0), SlideIndex::FIRST);
    }

    #[test]
    fn display_and_debug() {
        let index = SlideIndex::new(5);
        assert_eq!(index.to_string(), "5");
        assert_eq!(format!("{index:?}"), "SlideIndex(5)");
        assert_eq!(index.as_target(), 5);
    }
}
