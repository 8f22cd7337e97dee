//! Derives the active slide from the scroll container's position.
//!
//! The active index is never stored independently of the scroll offset; it is
//! recomputed from each [`ViewportState`] measurement and only published when
//! it changes.

use crate::model::SlideIndex;
use crate::viewport::ViewportState;

/// `round(offset / viewport_height)`.
///
/// Returns 0 for a non-positive or non-finite height and for a non-finite
/// offset. Never panics.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn derive_index(offset: f64, viewport_height: f64) -> i64 {
    if !offset.is_finite() || !viewport_height.is_finite() || viewport_height <= 0.0 {
        return 0;
    }
    // `as` saturates for values outside the i64 range.
    (offset / viewport_height).round() as i64
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollTracker {
    slide_count: usize,
    active: SlideIndex,
    attached: bool,
}

impl ScrollTracker {
    /// A detached tracker for a deck of `slide_count` slides, at slide 0.
    #[must_use]
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            active: SlideIndex::FIRST,
            attached: false,
        }
    }

    /// Starts listening. Call once the container is mounted.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stops listening. Later scroll events are ignored.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[must_use]
    pub fn active(&self) -> SlideIndex {
        self.active
    }

    /// The index a scroll event would publish, without publishing it.
    ///
    /// `None` when detached, when the container could not be measured, or
    /// when the derived index equals the current one.
    #[must_use]
    pub fn observe(&self, viewport: Option<ViewportState>) -> Option<SlideIndex> {
        if !self.attached {
            return None;
        }
        let next = viewport?.slide_index(self.slide_count);
        (next != self.active).then_some(next)
    }

    /// Handles one scroll event. Returns the newly published index, if any.
    pub fn on_scroll(&mut self, viewport: Option<ViewportState>) -> Option<SlideIndex> {
        let next = self.observe(viewport)?;
        self.active = next;
        Some(next)
    }
}
