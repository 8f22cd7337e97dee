use deck_core::ViewportState;
use deck_core::model::{Deck, SlideIndex, SlideKind};

use crate::vm::DeckIntent;

use super::deck::sync_active_slide;
use super::test_harness::{active_dot, arrow_disabled, setup_view_harness};

const VH: f64 = 800.0;

#[tokio::test(flavor = "current_thread")]
async fn deck_view_smoke_renders_slides_and_initial_indicator() {
    let mut harness = setup_view_harness(Deck::pitch());
    harness.rebuild();
    let html = harness.render();

    assert_eq!(html.matches("slide-section").count(), 13, "sections in {html}");
    assert_eq!(html.matches("data-slide=").count(), 13, "dots in {html}");
    assert_eq!(active_dot(&html), Some(0));
    assert!(arrow_disabled(&html, "nav-prev"), "previous should be disabled");
    assert!(!arrow_disabled(&html, "nav-next"), "next should be enabled");

    for expected in ["Turn your family", "Market Validation", "$117B", "TYMELESS", "History never"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("id=\"market-size\""), "missing slide anchor in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn manual_scroll_highlights_nearest_slide() {
    let mut harness = setup_view_harness(Deck::pitch());
    harness.rebuild();
    harness.mount_container();

    let tracker = harness.handles.tracker();
    let published = harness
        .dom
        .in_runtime(|| sync_active_slide(tracker, Some(ViewportState::new(3950.0, VH))));
    assert_eq!(published, Some(SlideIndex::new(5)));
    harness.drive();

    let html = harness.render();
    assert_eq!(active_dot(&html), Some(5));
    assert!(!arrow_disabled(&html, "nav-prev"));
    assert!(!arrow_disabled(&html, "nav-next"));
}

#[tokio::test(flavor = "current_thread")]
async fn repeated_measurement_does_not_republish() {
    let mut harness = setup_view_harness(Deck::pitch());
    harness.rebuild();
    harness.mount_container();

    let tracker = harness.handles.tracker();
    let first = harness
        .dom
        .in_runtime(|| sync_active_slide(tracker, Some(ViewportState::new(1600.0, VH))));
    let second = harness
        .dom
        .in_runtime(|| sync_active_slide(tracker, Some(ViewportState::new(1610.0, VH))));
    assert_eq!(first, Some(SlideIndex::new(2)));
    assert_eq!(second, None);
}

#[tokio::test(flavor = "current_thread")]
async fn measurements_before_mount_are_ignored() {
    let mut harness = setup_view_harness(Deck::pitch());
    harness.rebuild();

    let tracker = harness.handles.tracker();
    let published = harness
        .dom
        .in_runtime(|| sync_active_slide(tracker, Some(ViewportState::new(4000.0, VH))));
    assert_eq!(published, None);
    harness.drive();
    assert_eq!(active_dot(&harness.render()), Some(0));
}

#[tokio::test(flavor = "current_thread")]
async fn last_slide_disables_next_and_ignores_it() {
    let mut harness = setup_view_harness(Deck::pitch());
    harness.rebuild();
    harness.mount_container();

    let tracker = harness.handles.tracker();
    harness
        .dom
        .in_runtime(|| sync_active_slide(tracker, Some(ViewportState::new(9600.0, VH))));
    harness.drive();
    let html = harness.render();
    assert_eq!(active_dot(&html), Some(12));
    assert!(arrow_disabled(&html, "nav-next"));
    assert!(!arrow_disabled(&html, "nav-prev"));

    let dispatch = harness.handles.dispatch();
    harness.dom.in_runtime(|| dispatch.call(DeckIntent::Next));
    harness.drive();
    assert!(harness.handles.navigations().is_empty());
    assert_eq!(active_dot(&harness.render()), Some(12));

    harness.dom.in_runtime(|| dispatch.call(DeckIntent::Previous));
    assert_eq!(harness.handles.navigations(), vec![11]);
}

#[tokio::test(flavor = "current_thread")]
async fn previous_and_dots_reach_navigation_with_their_targets() {
    let mut harness = setup_view_harness(Deck::pitch());
    harness.rebuild();
    harness.mount_container();

    let tracker = harness.handles.tracker();
    harness
        .dom
        .in_runtime(|| sync_active_slide(tracker, Some(ViewportState::new(VH, VH))));
    harness.drive();
    assert_eq!(active_dot(&harness.render()), Some(1));

    let dispatch = harness.handles.dispatch();
    harness.dom.in_runtime(|| dispatch.call(DeckIntent::Previous));
    harness.dom.in_runtime(|| dispatch.call(DeckIntent::GoTo(5)));
    harness.dom.in_runtime(|| dispatch.call(DeckIntent::Next));
    assert_eq!(harness.handles.navigations(), vec![0, 5, 2]);
}

#[tokio::test(flavor = "current_thread")]
async fn previous_on_first_slide_never_navigates() {
    let mut harness = setup_view_harness(Deck::pitch());
    harness.rebuild();
    harness.mount_container();

    let dispatch = harness.handles.dispatch();
    harness.dom.in_runtime(|| dispatch.call(DeckIntent::Previous));
    harness.drive();
    assert!(harness.handles.navigations().is_empty());
    assert!(arrow_disabled(&harness.render(), "nav-prev"));
}

#[tokio::test(flavor = "current_thread")]
async fn navigation_without_container_is_a_no_op() {
    let mut harness = setup_view_harness(Deck::pitch());
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    harness.dom.in_runtime(|| dispatch.call(DeckIntent::GoTo(5)));
    harness.drive();
    assert!(harness.handles.navigations().is_empty());
    assert_eq!(active_dot(&harness.render()), Some(0));

    harness.mount_container();
    harness.dom.in_runtime(|| dispatch.call(DeckIntent::GoTo(5)));
    assert_eq!(harness.handles.navigations(), vec![5]);
}

#[tokio::test(flavor = "current_thread")]
async fn start_button_navigates_to_problem_slide() {
    let mut harness = setup_view_harness(Deck::pitch());
    harness.rebuild();
    harness.mount_container();

    let html = harness.render();
    assert!(html.contains("id=\"welcome-start\""), "missing call to action in {html}");
    assert!(html.contains("Start Preserving"));

    let start = harness.handles.start_intent();
    assert_eq!(start, Some(DeckIntent::GoTo(1)));

    let dispatch = harness.handles.dispatch();
    if let Some(intent) = start {
        harness.dom.in_runtime(|| dispatch.call(intent));
    }
    assert_eq!(harness.handles.navigations(), vec![1]);
}

#[tokio::test(flavor = "current_thread")]
async fn unmounted_deck_ignores_scroll_events() {
    let mut harness = setup_view_harness(Deck::pitch());
    harness.rebuild();
    harness.mount_container();

    let tracker = harness.handles.tracker();
    harness.unmount();
    assert!(!harness.render().contains("data-slide="));

    let published = harness
        .dom
        .in_runtime(|| sync_active_slide(tracker, Some(ViewportState::new(4000.0, VH))));
    assert_eq!(published, None);
}

#[tokio::test(flavor = "current_thread")]
async fn short_deck_renders_one_dot_per_slide() {
    let deck = Deck::new(vec![SlideKind::Welcome, SlideKind::Ask, SlideKind::Closing])
        .expect("valid deck");
    let mut harness = setup_view_harness(deck);
    harness.rebuild();
    harness.mount_container();

    let tracker = harness.handles.tracker();
    harness
        .dom
        .in_runtime(|| sync_active_slide(tracker, Some(ViewportState::new(20_000.0, VH))));
    harness.drive();

    let html = harness.render();
    assert_eq!(html.matches("data-slide=").count(), 3);
    assert_eq!(active_dot(&html), Some(2));
    assert!(arrow_disabled(&html, "nav-next"));
    assert!(html.contains("Seed Round"));
    assert!(!html.contains("Market Validation"));
}
