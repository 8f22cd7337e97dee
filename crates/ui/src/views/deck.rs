use deck_core::model::SlideIndex;
use deck_core::{NavIndicator, ScrollTracker, ViewportState, navigate};
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::scripts::{self, DECK_SCROLL_ID};
use crate::vm::{DeckIntent, build_nav_rail, resolve_intent, start_intent};

use super::brand::BrandMark;
use super::nav_rail::NavRail;
use super::slides::SlideBody;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Feeds one container measurement to the tracker.
///
/// Only writes (and so only re-renders) when the active slide changes. A
/// tracker whose view has already been torn down is left alone.
pub(crate) fn sync_active_slide(
    mut tracker: Signal<ScrollTracker>,
    viewport: Option<ViewportState>,
) -> Option<SlideIndex> {
    tracker.try_peek().ok()?.observe(viewport)?;
    let published = tracker.try_write().ok()?.on_scroll(viewport);
    if let Some(index) = published {
        debug!(index = index.value(), ?viewport, "active slide changed");
    }
    published
}

async fn scroll_to_slide(target: i64) {
    let Some(viewport_height) = scripts::read_viewport_height().await else {
        warn!(target, "could not measure viewport height; navigation skipped");
        return;
    };
    let command = navigate(target, viewport_height);
    debug!(target, top = command.top, "scrolling deck");
    if !scripts::scroll_container(DECK_SCROLL_ID, &command).await {
        warn!(target, "deck container missing; scroll request dropped");
    }
}

#[component]
pub fn DeckView() -> Element {
    let ctx = use_context::<AppContext>();
    let deck = ctx.deck();
    let slide_count = deck.len();

    let mut tracker = use_signal(move || ScrollTracker::new(slide_count));

    use_drop(move || {
        if let Ok(mut tracker) = tracker.try_write() {
            tracker.detach();
        }
    });

    #[cfg(test)]
    let test_handles = try_consume_context::<DeckTestHandles>();
    #[cfg(test)]
    let recorder = test_handles.clone();

    let dispatch = use_callback(move |intent: DeckIntent| {
        let (active, mounted) = {
            let tracker = tracker.peek();
            (tracker.active(), tracker.is_attached())
        };
        let indicator = NavIndicator::new(active, slide_count);
        let Some(target) = resolve_intent(intent, &indicator) else {
            debug!(?intent, "navigation control disabled");
            return;
        };
        if !mounted {
            debug!(target, "deck container not mounted; navigation ignored");
            return;
        }
        #[cfg(test)]
        {
            if let Some(handles) = &recorder {
                handles.record_navigation(target);
            }
        }
        spawn(scroll_to_slide(target));
    });

    let start = start_intent(&deck);

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = &test_handles {
                handles.register(dispatch, tracker, start);
            }
        }
    }

    let indicator = NavIndicator::new(tracker.read().active(), slide_count);
    let rail = build_nav_rail(&deck, &indicator);

    rsx! {
        div { class: "deck",
            NavRail { vm: rail, on_intent: dispatch }
            BrandMark {}
            div {
                id: DECK_SCROLL_ID,
                class: "slide-container",
                onmounted: move |_| tracker.write().attach(),
                onscroll: move |_| {
                    if !tracker.peek().is_attached() {
                        return;
                    }
                    spawn(async move {
                        let viewport = scripts::read_viewport(DECK_SCROLL_ID).await;
                        sync_active_slide(tracker, viewport);
                    });
                },
                for (index, kind) in deck.iter() {
                    SlideBody {
                        key: "{index}",
                        kind,
                        start,
                        on_intent: dispatch,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DeckTestHandles {
    dispatch: Rc<RefCell<Option<Callback<DeckIntent>>>>,
    tracker: Rc<RefCell<Option<Signal<ScrollTracker>>>>,
    start: Rc<RefCell<Option<DeckIntent>>>,
    navigations: Rc<RefCell<Vec<i64>>>,
}

#[cfg(test)]
impl DeckTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<DeckIntent>,
        tracker: Signal<ScrollTracker>,
        start: Option<DeckIntent>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.tracker.borrow_mut() = Some(tracker);
        *self.start.borrow_mut() = start;
    }

    pub(crate) fn dispatch(&self) -> Callback<DeckIntent> {
        (*self.dispatch.borrow()).expect("deck dispatch registered")
    }

    pub(crate) fn tracker(&self) -> Signal<ScrollTracker> {
        (*self.tracker.borrow()).expect("deck tracker registered")
    }

    /// Intent wired to the welcome slide's call to action.
    pub(crate) fn start_intent(&self) -> Option<DeckIntent> {
        *self.start.borrow()
    }

    fn record_navigation(&self, target: i64) {
        self.navigations.borrow_mut().push(target);
    }

    /// Targets handed to the navigator so far, in order.
    pub(crate) fn navigations(&self) -> Vec<i64> {
        self.navigations.borrow().clone()
    }
}
