use thiserror::Error;

use crate::model::ids::SlideIndex;
use crate::model::slide::SlideKind;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck must contain at least one slide")]
    Empty,

    #[error("slide `{0}` appears more than once")]
    DuplicateSlide(&'static str),
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// An ordered, fixed-length sequence of slides.
///
/// The content never changes after construction. A slide's identity is its
/// position, so the deck is what maps a [`SlideIndex`] back to something
/// renderable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<SlideKind>,
}

impl Deck {
    /// Creates a deck from slides in presentation order.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Empty` if no slides are given, or
    /// `DeckError::DuplicateSlide` if a slide kind is repeated.
    pub fn new(slides: Vec<SlideKind>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        for (i, kind) in slides.iter().enumerate() {
            if slides[..i].contains(kind) {
                return Err(DeckError::DuplicateSlide(kind.anchor()));
            }
        }
        Ok(Self { slides })
    }

    /// The thirteen-slide investor pitch.
    #[must_use]
    pub fn pitch() -> Self {
        Self {
            slides: SlideKind::ALL.to_vec(),
        }
    }

    // ─── Accessors ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a constructed deck; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn slide(&self, index: SlideIndex) -> Option<SlideKind> {
        self.slides.get(index.value()).copied()
    }

    /// Position of a slide kind in this deck.
    #[must_use]
    pub fn position(&self, kind: SlideKind) -> Option<SlideIndex> {
        self.slides
            .iter()
            .position(|candidate| *candidate == kind)
            .map(SlideIndex::new)
    }

    /// Iterates slides together with their index.
    pub fn iter(&self) -> impl Iterator<Item = (SlideIndex, SlideKind)> + '_ {
        self.slides
            .iter()
            .enumerate()
            .map(|(i, kind)| (SlideIndex::new(i), *kind))
    }
}
