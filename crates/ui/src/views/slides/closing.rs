use deck_core::model::SlideKind;
use dioxus::prelude::*;

use crate::views::brand::Logo;

use super::common::{SectionHeading, SlideFrame};

#[component]
fn Founder(
    name: &'static str,
    role: &'static str,
    bio: &'static str,
) -> Element {
    let initial = name.chars().next().unwrap_or('?');

    rsx! {
        div { class: "founder",
            div { class: "founder__portrait", aria_label: "{name}", "{initial}" }
            h3 { "{name}" }
            p { class: "founder__role", "{role}" }
            p { class: "founder__bio", "{bio}" }
        }
    }
}

#[component]
pub fn TeamSlide() -> Element {
    rsx! {
        SlideFrame { kind: SlideKind::Team,
            SectionHeading { kind: SlideKind::Team }
            div { class: "grid grid--2",
                Founder {
                    name: "Henry",
                    role: "Co-Founder & CTO",
                    bio: "AI Architect with expertise in production n8n & multi-agent architectures.",
                }
                Founder {
                    name: "Joseph",
                    role: "Co-Founder & CEO",
                    bio: "Business development and strategic partnerships expert with customer-focused vision.",
                }
            }
            div { class: "panel panel--muted centered",
                p { class: "serif italic",
                    "\"This isn't just business. It's personal. We are building the solution we wish we had for our own parents.\""
                }
            }
        }
    }
}

/// Use of funds, in percent of the round.
const ALLOCATION: [(&str, u8); 3] = [
    ("Product & Engineering", 40),
    ("Go-to-Market", 30),
    ("AI Infrastructure", 20),
];

const MILESTONES: [&str; 3] = [
    "Launch MVP with full voice cloning.",
    "Acquire first 10,000 users.",
    "Establish 3 Hospice partnerships.",
];

#[component]
pub fn AskSlide() -> Element {
    rsx! {
        SlideFrame { kind: SlideKind::Ask,
            SectionHeading { kind: SlideKind::Ask }
            div { class: "grid grid--2",
                div {
                    div { class: "ask__amount", "$500K" }
                    h3 { "Seed Round" }
                    div { class: "allocation",
                        for (area, percent) in ALLOCATION {
                            div { key: "{area}", class: "allocation__item",
                                div { class: "allocation__row",
                                    span { "{area}" }
                                    span { class: "allocation__percent", "{percent}%" }
                                }
                                div { class: "allocation__track",
                                    div { class: "allocation__fill", style: "width: {percent}%;" }
                                }
                            }
                        }
                    }
                }
                div { class: "dark-panel",
                    h3 { "Milestones to Achieve" }
                    ul { class: "milestones",
                        for milestone in MILESTONES {
                            li { key: "{milestone}",
                                div { class: "milestones__ring" }
                                span { "{milestone}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ClosingSlide() -> Element {
    rsx! {
        SlideFrame { kind: SlideKind::Closing, class: "centered",
            Logo {}
            h2 { class: "closing-title",
                "History never "
                span { class: "accent italic", "dies" }
                "."
            }
            p { class: "hero-lede", "Join us in keeping the library of family stories open—forever." }
            div { class: "contact",
                div { class: "contact__label", "Contact Us" }
                div { class: "contact__email", "founders@tymeless.ai" }
            }
            div { class: "closing-rule" }
        }
    }
}
