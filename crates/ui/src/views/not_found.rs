use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "page not-found",
            h2 { "Nothing at /{path}" }
            Link { to: Route::Deck {}, "Back to the deck" }
        }
    }
}
