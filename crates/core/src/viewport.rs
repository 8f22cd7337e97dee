use serde::{Deserialize, Serialize};

use crate::model::SlideIndex;
use crate::tracker::derive_index;

/// A measurement of the scroll container taken at one instant.
///
/// Both numbers come from the rendering environment at the moment of a
/// scroll or navigation event. Nothing here is cached across resizes: a new
/// measurement is a new value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportState {
    /// Vertical scroll position of the container, in pixels.
    pub scroll_offset: f64,
    /// Height of the visible display area, in pixels.
    pub viewport_height: f64,
}

impl ViewportState {
    #[must_use]
    pub const fn new(scroll_offset: f64, viewport_height: f64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
        }
    }

    /// Unclamped `round(offset / height)`.
    #[must_use]
    pub fn raw_index(&self) -> i64 {
        derive_index(self.scroll_offset, self.viewport_height)
    }

    /// The slide aligned with the viewport top, clamped into the deck.
    #[must_use]
    pub fn slide_index(&self, slide_count: usize) -> SlideIndex {
        SlideIndex::clamped(self.raw_index(), slide_count)
    }
}
