use deck_core::NavIndicator;
use deck_core::model::{Deck, SlideKind};

/// A navigation request coming from the nav rail or a slide's call to action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckIntent {
    GoTo(i64),
    Previous,
    Next,
}

/// The navigation target for an intent, or `None` if its control is disabled.
///
/// `GoTo` targets pass through untouched.
#[must_use]
pub fn resolve_intent(intent: DeckIntent, indicator: &NavIndicator) -> Option<i64> {
    match intent {
        DeckIntent::GoTo(target) => Some(target),
        DeckIntent::Previous => indicator.previous_target(),
        DeckIntent::Next => indicator.next_target(),
    }
}

/// What the welcome slide's "Start Preserving" button asks for: the Problem
/// slide. `None` for decks without one.
#[must_use]
pub fn start_intent(deck: &Deck) -> Option<DeckIntent> {
    deck.position(SlideKind::Problem)
        .map(|index| DeckIntent::GoTo(index.as_target()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavDotVm {
    pub index: usize,
    pub target: i64,
    pub class: &'static str,
    pub label: String,
    pub current: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavRailVm {
    pub dots: Vec<NavDotVm>,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

impl NavRailVm {
    #[must_use]
    pub fn previous_class(&self) -> &'static str {
        arrow_class(self.previous_disabled)
    }

    #[must_use]
    pub fn next_class(&self) -> &'static str {
        arrow_class(self.next_disabled)
    }
}

fn arrow_class(disabled: bool) -> &'static str {
    if disabled {
        "nav-arrow nav-arrow--disabled"
    } else {
        "nav-arrow"
    }
}

#[must_use]
pub fn build_nav_rail(deck: &Deck, indicator: &NavIndicator) -> NavRailVm {
    let dots = indicator
        .dots()
        .map(|dot| {
            let number = dot.index.value() + 1;
            let label = match deck.slide(dot.index) {
                Some(kind) => format!("Go to slide {number}: {}", kind.title()),
                None => format!("Go to slide {number}"),
            };
            NavDotVm {
                index: dot.index.value(),
                target: dot.index.as_target(),
                class: if dot.active {
                    "nav-dot nav-dot--active"
                } else {
                    "nav-dot"
                },
                label,
                current: dot.active,
            }
        })
        .collect();

    NavRailVm {
        dots,
        previous_disabled: !indicator.can_go_previous(),
        next_disabled: !indicator.can_go_next(),
    }
}
