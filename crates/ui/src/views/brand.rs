use dioxus::prelude::*;

#[component]
pub fn Logo() -> Element {
    rsx! {
        div { class: "logo",
            div { class: "logo__ring",
                div { class: "logo__check" }
            }
            span { class: "logo__word", "Tymeless" }
        }
    }
}

/// Fixed brand mark in the top-left corner, above the slides.
#[component]
pub fn BrandMark() -> Element {
    rsx! {
        div { class: "brand-mark", Logo {} }
    }
}
