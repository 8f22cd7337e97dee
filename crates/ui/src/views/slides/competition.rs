use deck_core::model::{ComparisonTable, SlideKind};
use dioxus::prelude::*;

use super::common::{SectionHeading, SlideFrame};

#[component]
pub fn CompetitionSlide() -> Element {
    let table = ComparisonTable::competition();

    rsx! {
        SlideFrame { kind: SlideKind::Competition,
            SectionHeading { kind: SlideKind::Competition }
            div { class: "table-scroll",
                table { class: "comparison",
                    thead {
                        tr {
                            for column in ComparisonTable::COLUMNS {
                                th { key: "{column}", "{column}" }
                            }
                        }
                    }
                    tbody {
                        for row in table.rows().iter().cloned() {
                            tr {
                                key: "{row.competitor}",
                                class: if row.highlighted { "comparison__row comparison__row--ours" } else { "comparison__row" },
                                td { class: "comparison__name", "{row.competitor}" }
                                td { "{row.product}" }
                                td { class: "comparison__limitation", "{row.limitation}" }
                                td { "{row.price}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

const ADVANTAGES: [(&str, &str); 4] = [
    (
        "Accessible Pricing",
        "Full AI avatar experience at subscription prices, democratizing legacy preservation.",
    ),
    (
        "Guided Capture System",
        "AI-powered interviews draw out meaningful memories automatically.",
    ),
    (
        "Multi-Modal Integration",
        "RICHER avatars using video, audio, photos, and docs in one knowledge base.",
    ),
    (
        "Perpetual Legacy",
        "One-time payment options ensure avatars persist for generations, not just for a subscription.",
    ),
];

#[component]
pub fn AdvantagesSlide() -> Element {
    rsx! {
        SlideFrame { kind: SlideKind::Advantages,
            SectionHeading { kind: SlideKind::Advantages }
            div { class: "grid grid--2",
                for (i, (title, body)) in ADVANTAGES.into_iter().enumerate() {
                    div { key: "{title}", class: "advantage",
                        div { class: "advantage__number", {(i + 1).to_string()} }
                        div {
                            h4 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }
        }
    }
}
