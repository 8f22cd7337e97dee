use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use deck_core::model::Deck;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use crate::context::{UiApp, build_app_context};
use crate::views::DeckView;
use crate::views::deck::DeckTestHandles;

#[derive(Clone)]
struct TestApp {
    deck: Arc<Deck>,
}

impl UiApp for TestApp {
    fn deck(&self) -> Arc<Deck> {
        Arc::clone(&self.deck)
    }

    fn window_title(&self) -> String {
        "Test Deck".to_string()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: DeckTestHandles,
    visible: Rc<RefCell<Option<Signal<bool>>>>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    let visible = use_signal(|| true);
    *props.visible.borrow_mut() = Some(visible);

    rsx! {
        if visible() {
            Router::<TestRoute> {}
        }
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { DeckView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: DeckTestHandles,
    visible: Rc<RefCell<Option<Signal<bool>>>>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// What the container's `onmounted` handler does in a real renderer.
    pub fn mount_container(&mut self) {
        let mut tracker = self.handles.tracker();
        self.dom.in_runtime(|| tracker.write().attach());
        self.drive();
    }

    /// Removes the deck view from the tree.
    pub fn unmount(&mut self) {
        let mut visible = (*self.visible.borrow()).expect("harness visibility registered");
        self.dom.in_runtime(|| visible.set(false));
        self.drive();
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(deck: Deck) -> ViewHarness {
    let handles = DeckTestHandles::default();
    let visible = Rc::new(RefCell::new(None));
    let app = Arc::new(TestApp {
        deck: Arc::new(deck),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
            visible: Rc::clone(&visible),
        },
    );

    ViewHarness {
        dom,
        handles,
        visible,
    }
}

/// Index of the highlighted nav dot in rendered markup.
pub fn active_dot(html: &str) -> Option<usize> {
    let tag = enclosing_tag(html, "nav-dot nav-dot--active")?;
    let attr = "data-slide=\"";
    let value_start = tag.find(attr)? + attr.len();
    let value_end = tag[value_start..].find('"')? + value_start;
    tag[value_start..value_end].parse().ok()
}

fn enclosing_tag<'a>(html: &'a str, needle: &str) -> Option<&'a str> {
    let at = html.find(needle)?;
    let tag_start = html[..at].rfind('<').unwrap_or(0);
    let tag_end = html[at..].find('>').map_or(html.len(), |end| at + end);
    Some(&html[tag_start..tag_end])
}

/// Whether the element with `id` carries the disabled arrow class.
pub fn arrow_disabled(html: &str, id: &str) -> bool {
    enclosing_tag(html, &format!("id=\"{id}\""))
        .is_some_and(|tag| tag.contains("nav-arrow--disabled"))
}
