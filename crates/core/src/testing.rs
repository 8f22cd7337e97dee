//! A scroll container stand-in used by tracker tests.

use crate::navigator::{ScrollBehavior, ScrollCommand};
use crate::viewport::ViewportState;

/// Mimics a browser scroll container holding `slides` sections of one
/// viewport height each: requested offsets are clamped to the scrollable
/// range, smooth scrolls only land on `settle`.
#[derive(Debug, Clone)]
pub(crate) struct SimulatedContainer {
    slides: usize,
    viewport_height: f64,
    offset: f64,
    pending: Option<f64>,
}

impl SimulatedContainer {
    pub(crate) fn new(slides: usize, viewport_height: f64) -> Self {
        Self {
            slides,
            viewport_height,
            offset: 0.0,
            pending: None,
        }
    }

    pub(crate) fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub(crate) fn viewport(&self) -> ViewportState {
        ViewportState::new(self.offset, self.viewport_height)
    }

    #[allow(clippy::cast_precision_loss)]
    fn max_offset(&self) -> f64 {
        self.slides.saturating_sub(1) as f64 * self.viewport_height
    }

    pub(crate) fn apply(&mut self, command: ScrollCommand) {
        let top = command.top.clamp(0.0, self.max_offset());
        match command.behavior {
            ScrollBehavior::Smooth => self.pending = Some(top),
            ScrollBehavior::Instant => {
                self.offset = top;
                self.pending = None;
            }
        }
    }

    /// Evenly spaced intermediate measurements of the in-flight animation.
    pub(crate) fn animation_frames(&self, frames: u32) -> Vec<ViewportState> {
        let Some(target) = self.pending else {
            return Vec::new();
        };
        (1..frames)
            .map(|frame| {
                let t = f64::from(frame) / f64::from(frames);
                ViewportState::new(
                    self.offset + (target - self.offset) * t,
                    self.viewport_height,
                )
            })
            .collect()
    }

    pub(crate) fn settle(&mut self) {
        if let Some(target) = self.pending.take() {
            self.offset = target;
        }
    }

    pub(crate) fn resize(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height;
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }
}
