mod closing;
mod common;
mod competition;
pub(crate) mod icons;
mod intro;
mod market;
mod product;

use deck_core::model::SlideKind;
use dioxus::prelude::*;

use crate::vm::DeckIntent;

use closing::{AskSlide, ClosingSlide, TeamSlide};
use competition::{AdvantagesSlide, CompetitionSlide};
use intro::{ProblemSlide, SolutionSlide, WelcomeSlide};
use market::{MarketSizeSlide, ValidationSlide};
use product::{BusinessModelSlide, GoToMarketSlide, ProductSlide};

/// Renders one slide's static content inside a full-viewport section.
#[component]
pub fn SlideBody(
    kind: SlideKind,
    start: Option<DeckIntent>,
    on_intent: Callback<DeckIntent>,
) -> Element {
    match kind {
        SlideKind::Welcome => rsx! { WelcomeSlide { start, on_intent } },
        SlideKind::Problem => rsx! { ProblemSlide {} },
        SlideKind::Solution => rsx! { SolutionSlide {} },
        SlideKind::Validation => rsx! { ValidationSlide {} },
        SlideKind::MarketSize => rsx! { MarketSizeSlide {} },
        SlideKind::Product => rsx! { ProductSlide {} },
        SlideKind::BusinessModel => rsx! { BusinessModelSlide {} },
        SlideKind::GoToMarket => rsx! { GoToMarketSlide {} },
        SlideKind::Competition => rsx! { CompetitionSlide {} },
        SlideKind::Advantages => rsx! { AdvantagesSlide {} },
        SlideKind::Team => rsx! { TeamSlide {} },
        SlideKind::Ask => rsx! { AskSlide {} },
        SlideKind::Closing => rsx! { ClosingSlide {} },
    }
}
