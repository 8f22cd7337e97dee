use deck_core::model::{BarChart, SlideKind};
use dioxus::prelude::*;

use crate::vm::map_chart_rows;

use super::common::{MarketStat, SectionHeading, SlideFrame};
use super::icons::{Icon, IconKind};

const PROOF_POINTS: [(&str, &str, &str); 3] = [
    ("Ancestry.com generates ", "$1B+", " annual revenue."),
    ("", "26M+ consumers", " have added DNA to ancestry databases."),
    ("Enthusiasts spend ", "$1k-$18k/year", " on research."),
];

#[component]
pub fn ValidationSlide() -> Element {
    rsx! {
        SlideFrame { kind: SlideKind::Validation,
            SectionHeading { kind: SlideKind::Validation }
            div { class: "grid grid--4",
                MarketStat { value: "$6.6B", label: "Genealogy Market", subtext: "Spending on heritage" }
                MarketStat { value: "62M", label: "Americans 65+", subtext: "Growing demographic" }
                MarketStat { value: "$23B", label: "Digital Legacy", subtext: "13% CAGR growth" }
                MarketStat { value: "80M", label: "MyHeritage Users", subtext: "Existing engaged audience" }
            }
            div { class: "grid grid--2",
                ul { class: "proof-list",
                    for (before, strong_text, after) in PROOF_POINTS {
                        li { key: "{strong_text}",
                            Icon { kind: IconKind::Trophy, size: 24, class: "accent" }
                            p { "{before}" strong { "{strong_text}" } "{after}" }
                        }
                    }
                }
                div { class: "callout",
                    h4 { "Competitor Proving Ground" }
                    p { class: "italic",
                        "\"StoryFile raised $7.45M; competitors are proving that a massive market for digital preservation exists today.\""
                    }
                }
            }
        }
    }
}

#[component]
pub fn MarketSizeSlide() -> Element {
    let rows = map_chart_rows(&BarChart::market_size());

    rsx! {
        SlideFrame { kind: SlideKind::MarketSize,
            SectionHeading { kind: SlideKind::MarketSize }
            div { class: "grid grid--2",
                div { class: "bar-chart", role: "img", aria_label: "Market size chart",
                    for row in rows {
                        div { key: "{row.name}", class: "bar-chart__row", title: "{row.tooltip}",
                            span { class: "bar-chart__name", "{row.name}" }
                            div { class: "bar-chart__track",
                                div {
                                    class: "bar-chart__bar",
                                    style: "width: {row.width}; background: {row.color};",
                                }
                            }
                            span { class: "bar-chart__label", "{row.label}" }
                        }
                    }
                }
                div { class: "market-tiers",
                    div {
                        h4 { "TAM: $117B by 2034" }
                        p { "Digital Human & AI Avatar Market growing at 31.9% CAGR." }
                    }
                    div {
                        h4 { "SAM: $78B by 2034" }
                        p { "Digital Legacy Market growing at 13% CAGR." }
                    }
                    div {
                        h4 { "SOM: $2B by 2030" }
                        p { class: "italic", "Tymeless target share of the legacy preservation market." }
                    }
                }
            }
        }
    }
}
