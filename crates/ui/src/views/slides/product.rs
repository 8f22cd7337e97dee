use deck_core::model::SlideKind;
use dioxus::prelude::*;

use super::common::{FeatureCard, SectionHeading, SlideFrame};
use super::icons::{Icon, IconKind};

const PRODUCT_STEPS: [&str; 3] = ["Record & Upload", "AI Creates Avatar", "Connect Forever"];

const ETHICS: [(&str, &str); 3] = [
    ("RAG Architecture:", "Knowledge retrieved from actual memories."),
    ("No Hallucinations:", "Only responds with captured content."),
    ("Voice Synthesis:", "Trained on the user's authentic recordings."),
];

const STACK_TAGS: [&str; 6] = [
    "Multi-modal",
    "n8n",
    "Tavus",
    "Voice Synthesis",
    "RAG",
    "Knowledge Base",
];

#[component]
pub fn ProductSlide() -> Element {
    rsx! {
        SlideFrame { kind: SlideKind::Product,
            SectionHeading { kind: SlideKind::Product }
            div { class: "steps",
                for (i, step) in PRODUCT_STEPS.iter().enumerate() {
                    div { key: "{i}", class: "steps__item",
                        div { class: "steps__number", {(i + 1).to_string()} }
                        div { class: "steps__label", "{step}" }
                    }
                }
            }
            div { class: "grid grid--2",
                div {
                    h3 { class: "with-icon",
                        Icon { kind: IconKind::ShieldCheck, size: 24, class: "accent" }
                        " Ethical AI Approach"
                    }
                    ul { class: "bullets",
                        for (term, detail) in ETHICS {
                            li { key: "{term}", strong { "{term}" } " {detail}" }
                        }
                    }
                }
                div { class: "panel",
                    h3 { "Technical Stack" }
                    div { class: "tags",
                        for tag in STACK_TAGS {
                            span { key: "{tag}", class: "tag", "{tag}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PriceTier(
    name: &'static str,
    price: &'static str,
    period: Option<&'static str>,
    detail: &'static str,
    recommended: bool,
) -> Element {
    let class = if recommended {
        "price-tier price-tier--recommended"
    } else {
        "price-tier"
    };

    rsx! {
        div { class,
            if recommended {
                div { class: "price-tier__badge", "Recommended" }
            }
            h3 { "{name}" }
            div { class: "price-tier__price",
                "{price}"
                if let Some(period) = period {
                    span { class: "price-tier__period", "{period}" }
                }
            }
            p { "{detail}" }
        }
    }
}

#[component]
pub fn BusinessModelSlide() -> Element {
    rsx! {
        SlideFrame { kind: SlideKind::BusinessModel,
            SectionHeading { kind: SlideKind::BusinessModel }
            div { class: "grid grid--3",
                PriceTier {
                    name: "Starter",
                    price: "$9.99",
                    period: "/mo",
                    detail: "1 avatar, basic features, 5GB storage",
                    recommended: false,
                }
                PriceTier {
                    name: "Family",
                    price: "$24.99",
                    period: "/mo",
                    detail: "Up to 5 avatars, family sharing, 50GB storage",
                    recommended: true,
                }
                PriceTier {
                    name: "Legacy",
                    price: "$499",
                    detail: "Perpetual access, unlimited storage, priority support",
                    recommended: false,
                }
            }
            div { class: "grid grid--2 panel panel--muted",
                div { class: "headline-metric",
                    div { class: "headline-metric__value", "1M" }
                    div { class: "headline-metric__label",
                        "Users by 2027"
                        br {}
                        span { "Target Scale" }
                    }
                }
                div { class: "headline-metric",
                    div { class: "headline-metric__value", "$200M" }
                    div { class: "headline-metric__label",
                        "Target ARR"
                        br {}
                        span { "by Year 3" }
                    }
                }
            }
        }
    }
}

const LAUNCH_PLAN: [(&str, &str); 3] = [
    ("01 BETA", "Launch with 5 pilot hospice partners to prove value and intent."),
    ("02 VIRAL", "Family sharing mechanics that invite siblings and cousins."),
    ("03 CONTENT", "\"10 Questions for Grandma\" viral social campaigns."),
];

#[component]
pub fn GoToMarketSlide() -> Element {
    rsx! {
        SlideFrame { kind: SlideKind::GoToMarket,
            SectionHeading { kind: SlideKind::GoToMarket }
            div { class: "grid grid--4",
                FeatureCard {
                    title: "Hospice & Care",
                    icon: IconKind::Heart,
                    icon_size: 32,
                    body: "End-of-life legacy service partnerships. 4k+ US providers.",
                }
                FeatureCard {
                    title: "Genealogy Integrations",
                    icon: IconKind::Target,
                    icon_size: 32,
                    body: "Ancestry, MyHeritage, FamilySearch. Direct access to 80M+ users.",
                }
                FeatureCard {
                    title: "Religious Orgs",
                    icon: IconKind::Globe,
                    icon_size: 32,
                    body: "Churches & Synagogues. Heritage is central to their mission.",
                }
                FeatureCard {
                    title: "Direct (DTC)",
                    icon: IconKind::Users,
                    icon_size: 32,
                    body: "Targeting adult children of aging parents via social storytelling.",
                }
            }
            div { class: "dark-panel",
                h3 { "Launch Plan" }
                div { class: "launch-plan",
                    for (phase, detail) in LAUNCH_PLAN {
                        div { key: "{phase}", class: "launch-plan__phase",
                            div { class: "accent strong", "{phase}" }
                            p { "{detail}" }
                        }
                    }
                }
            }
        }
    }
}
