use dioxus::prelude::*;

use crate::vm::{DeckIntent, NavRailVm};

use super::slides::icons::{Icon, IconKind};

#[component]
pub fn NavRail(vm: NavRailVm, on_intent: Callback<DeckIntent>) -> Element {
    rsx! {
        nav { class: "nav-rail", aria_label: "Slide navigation",
            button {
                id: "nav-prev",
                class: vm.previous_class(),
                r#type: "button",
                disabled: vm.previous_disabled,
                aria_label: "Previous slide",
                onclick: move |_| on_intent.call(DeckIntent::Previous),
                Icon { kind: IconKind::ChevronUp, size: 24 }
            }
            div { class: "nav-dots",
                for dot in vm.dots.iter().cloned() {
                    button {
                        key: "{dot.index}",
                        class: dot.class,
                        r#type: "button",
                        "data-slide": "{dot.index}",
                        aria_label: "{dot.label}",
                        aria_current: if dot.current { "step" } else { "false" },
                        onclick: move |_| on_intent.call(DeckIntent::GoTo(dot.target)),
                    }
                }
            }
            button {
                id: "nav-next",
                class: vm.next_class(),
                r#type: "button",
                disabled: vm.next_disabled,
                aria_label: "Next slide",
                onclick: move |_| on_intent.call(DeckIntent::Next),
                Icon { kind: IconKind::ChevronDown, size: 24 }
            }
        }
    }
}
