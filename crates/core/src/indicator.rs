use crate::model::SlideIndex;

/// One slide selector marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub index: SlideIndex,
    pub active: bool,
}

/// What the navigation controls show for a given active slide.
///
/// Previous/next are disabled at the first and last slide; this is the only
/// place navigation targets are kept inside the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavIndicator {
    active: SlideIndex,
    slide_count: usize,
}

impl NavIndicator {
    #[must_use]
    pub fn new(active: SlideIndex, slide_count: usize) -> Self {
        Self {
            active,
            slide_count,
        }
    }

    pub fn dots(&self) -> impl Iterator<Item = Dot> + '_ {
        (0..self.slide_count).map(move |i| Dot {
            index: SlideIndex::new(i),
            active: i == self.active.value(),
        })
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.active.value() > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.active.value() + 1 < self.slide_count
    }

    /// `active - 1`, or `None` while the previous control is disabled.
    #[must_use]
    pub fn previous_target(&self) -> Option<i64> {
        self.can_go_previous().then(|| self.active.as_target() - 1)
    }

    /// `active + 1`, or `None` while the next control is disabled.
    #[must_use]
    pub fn next_target(&self) -> Option<i64> {
        self.can_go_next().then(|| self.active.as_target() + 1)
    }
}
