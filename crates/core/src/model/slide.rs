use serde::{Deserialize, Serialize};
use std::fmt;

/// The slides of the investor deck.
///
/// Each kind has a stable DOM anchor and a title shown in the navigation
/// indicator. Order in a deck is decided by [`crate::model::Deck`], not by
/// declaration order here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideKind {
    Welcome,
    Problem,
    Solution,
    Validation,
    MarketSize,
    Product,
    BusinessModel,
    GoToMarket,
    Competition,
    Advantages,
    Team,
    Ask,
    Closing,
}

impl SlideKind {
    /// Every slide in presentation order.
    pub const ALL: [SlideKind; 13] = [
        SlideKind::Welcome,
        SlideKind::Problem,
        SlideKind::Solution,
        SlideKind::Validation,
        SlideKind::MarketSize,
        SlideKind::Product,
        SlideKind::BusinessModel,
        SlideKind::GoToMarket,
        SlideKind::Competition,
        SlideKind::Advantages,
        SlideKind::Team,
        SlideKind::Ask,
        SlideKind::Closing,
    ];

    /// Element id of the slide's section.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            SlideKind::Welcome => "welcome",
            SlideKind::Problem => "problem",
            SlideKind::Solution => "solution",
            SlideKind::Validation => "validation",
            SlideKind::MarketSize => "market-size",
            SlideKind::Product => "product",
            SlideKind::BusinessModel => "business-model",
            SlideKind::GoToMarket => "gtm",
            SlideKind::Competition => "competition",
            SlideKind::Advantages => "advantages",
            SlideKind::Team => "team",
            SlideKind::Ask => "ask",
            SlideKind::Closing => "final",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            SlideKind::Welcome => "Welcome",
            SlideKind::Problem => "The Problem",
            SlideKind::Solution => "The Solution",
            SlideKind::Validation => "Market Validation",
            SlideKind::MarketSize => "Market Size",
            SlideKind::Product => "The Product",
            SlideKind::BusinessModel => "Business Model",
            SlideKind::GoToMarket => "Go-to-Market Strategy",
            SlideKind::Competition => "Competition",
            SlideKind::Advantages => "Competitive Advantages",
            SlideKind::Team => "The Team",
            SlideKind::Ask => "The Ask",
            SlideKind::Closing => "Closing",
        }
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
