use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{DeckView, NotFoundView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", DeckView)] Deck {},
    #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}
