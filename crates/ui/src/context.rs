use std::sync::Arc;

use deck_core::model::Deck;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn deck(&self) -> Arc<Deck>;
    fn window_title(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    deck: Arc<Deck>,
    window_title: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            deck: app.deck(),
            window_title: app.window_title(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> Arc<Deck> {
        Arc::clone(&self.deck)
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
