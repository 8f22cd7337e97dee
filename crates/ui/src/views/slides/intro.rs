use deck_core::model::SlideKind;
use dioxus::prelude::*;

use crate::vm::DeckIntent;

use super::common::{FeatureCard, SectionHeading, SlideFrame};
use super::icons::{Icon, IconKind};

#[component]
pub fn WelcomeSlide(start: Option<DeckIntent>, on_intent: Callback<DeckIntent>) -> Element {
    rsx! {
        SlideFrame { kind: SlideKind::Welcome,
            div { class: "welcome",
                div { class: "pill", "The Archive of Love — preserve the voices that matter →" }
                h1 { class: "hero-title",
                    "Turn your family"
                    br {}
                    "stories "
                    span { class: "accent italic", "into" }
                    " legacy"
                }
                p { class: "hero-lede",
                    "Interactive AI avatars that preserve family history, wisdom, and voices for generations."
                }
                div { class: "hero-actions",
                    button {
                        id: "welcome-start",
                        class: "btn btn--primary",
                        r#type: "button",
                        onclick: move |_| {
                            if let Some(intent) = start {
                                on_intent.call(intent);
                            }
                        },
                        "Start Preserving"
                    }
                    button { class: "btn btn--secondary", r#type: "button", "How it Works" }
                }
            }
        }
    }
}

#[component]
pub fn ProblemSlide() -> Element {
    rsx! {
        SlideFrame { kind: SlideKind::Problem,
            SectionHeading { kind: SlideKind::Problem }
            div { class: "grid grid--3",
                FeatureCard {
                    title: "Irreplaceable Loss",
                    icon: IconKind::TrendingUp,
                    icon_size: 48,
                    body: "Every day, 10,000+ Americans over 65 pass away—taking stories and wisdom with them.",
                }
                FeatureCard {
                    title: "Static Solutions",
                    icon: IconKind::Globe,
                    icon_size: 48,
                    body: "Photos and videos capture moments, not conversations. You can see them, but never know them.",
                }
                FeatureCard {
                    title: "The Gap",
                    icon: IconKind::UsersRound,
                    icon_size: 48,
                    body: "No easy way exists to preserve interactive legacy for grandchildren decades from now.",
                }
            }
            div { class: "quote-panel",
                div { class: "quote-panel__mark",
                    Icon { kind: IconKind::Quote, size: 120 }
                }
                p {
                    "\"When someone dies, we lose more than a person. We lose answers to questions we never thought to ask. We lose stories that will never be told again.\""
                }
                div { class: "accent-rule accent-rule--wide" }
            }
        }
    }
}

#[component]
fn Pillar(icon: IconKind, title: &'static str, body: &'static str) -> Element {
    rsx! {
        div { class: "pillar",
            div { class: "pillar__badge",
                Icon { kind: icon, size: 40 }
            }
            h3 { "{title}" }
            p { "{body}" }
        }
    }
}

#[component]
pub fn SolutionSlide() -> Element {
    rsx! {
        SlideFrame { kind: SlideKind::Solution,
            SectionHeading { kind: SlideKind::Solution }
            div { class: "grid grid--3 centered",
                Pillar {
                    icon: IconKind::ShieldCheck,
                    title: "CAPTURE",
                    body: "Record stories through guided interviews, upload photos, videos & docs.",
                }
                Pillar {
                    icon: IconKind::BrainCircuit,
                    title: "CREATE",
                    body: "AI builds an interactive avatar that responds and shares memories authentically.",
                }
                Pillar {
                    icon: IconKind::Heart,
                    title: "CONNECT",
                    body: "Family can ask questions & hear answers in their loved one's actual voice.",
                }
            }
            p { class: "solution-summary",
                "Tymeless creates a "
                strong { "two-way conversation" }
                " that continues across generations."
            }
        }
    }
}
