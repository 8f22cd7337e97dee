use deck_core::model::SlideKind;
use dioxus::prelude::*;

use super::icons::{Icon, IconKind};

#[component]
pub fn SlideFrame(kind: SlideKind, class: Option<&'static str>, children: Element) -> Element {
    let class = match class {
        Some(extra) => format!("slide-section {extra}"),
        None => "slide-section".to_string(),
    };

    rsx! {
        section { id: kind.anchor(), class: "{class}",
            div { class: "slide-inner", {children} }
        }
    }
}

/// Slide title with the accent underline.
#[component]
pub fn SectionHeading(kind: SlideKind) -> Element {
    rsx! {
        div { class: "section-heading",
            h2 { "{kind.title()}" }
            div { class: "accent-rule" }
        }
    }
}

#[component]
pub fn FeatureCard(
    title: &'static str,
    icon: IconKind,
    icon_size: u32,
    body: &'static str,
) -> Element {
    rsx! {
        div { class: "feature-card",
            div { class: "feature-card__icon",
                Icon { kind: icon, size: icon_size }
            }
            h3 { "{title}" }
            p { "{body}" }
        }
    }
}

#[component]
pub fn MarketStat(value: &'static str, label: &'static str, subtext: &'static str) -> Element {
    rsx! {
        div { class: "market-stat",
            div { class: "market-stat__value", "{value}" }
            div { class: "market-stat__label", "{label}" }
            div { class: "market-stat__subtext", "{subtext}" }
        }
    }
}
