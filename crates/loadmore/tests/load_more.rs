//! End-to-end pagination lifecycle against the reference scroll view.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use proptest::prelude::*;

use loadmore::{
    Animatable, IndicatorView, LoadMoreController, ScrollContainer, ScrollView, SharedContainer,
};
use loadmore_core::{Point, Size};

fn scroll_to(view: &ScrollView, y: f32) {
    view.set_content_offset(Point::new(0.0, y));
}

/// Route the crate's tracing output through the test harness.
fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Two pages plus the terminal stop: the full life of a paginated list.
#[test]
fn pagination_lifecycle() {
    init_tracing();
    let view = Arc::new(ScrollView::new(Size::new(320.0, 600.0)));
    view.set_content_size(Size::new(320.0, 1000.0));
    let container: SharedContainer = view.clone();

    let pages_loaded = Arc::new(AtomicUsize::new(0));
    let has_more = Arc::new(AtomicBool::new(true));

    let controller = {
        let pages_loaded = pages_loaded.clone();
        let has_more = has_more.clone();
        LoadMoreController::with_predicate(
            &container,
            50.0,
            move || {
                pages_loaded.fetch_add(1, Ordering::SeqCst);
            },
            move || has_more.load(Ordering::SeqCst),
        )
    };
    controller.set_animation_duration(Duration::ZERO);

    // Drag toward the bottom. Natural bottom of page one is offset 400.
    scroll_to(&view, 200.0);
    scroll_to(&view, 449.0);
    assert_eq!(pages_loaded.load(Ordering::SeqCst), 0);

    // Cross the threshold: fires exactly once.
    scroll_to(&view, 450.0);
    assert_eq!(pages_loaded.load(Ordering::SeqCst), 1);
    assert!(!controller.indicator().lock().is_hidden());
    assert!(controller.indicator().lock().is_animating());

    // Momentum takes over: the controller reserves bottom inset for the
    // indicator. More overscroll does not refire.
    view.set_decelerating(true);
    scroll_to(&view, 460.0);
    controller.update();
    assert_eq!(view.content_inset().bottom, 50.0);
    assert_eq!(pages_loaded.load(Ordering::SeqCst), 1);

    // Page two arrives; more content is still available, so stop() keeps
    // the reserved inset but halts and hides the indicator.
    view.set_content_size(Size::new(320.0, 1500.0));
    controller.stop();
    controller.update();
    assert_eq!(view.content_inset().bottom, 50.0);
    assert!(controller.indicator().lock().is_hidden());
    assert!(!controller.indicator().lock().is_animating());

    // Scroll through page two to the new bottom (offset 900) and cross
    // again: the stop above re-armed the trigger.
    view.set_decelerating(false);
    scroll_to(&view, 949.0);
    assert_eq!(pages_loaded.load(Ordering::SeqCst), 1);
    scroll_to(&view, 950.0);
    assert_eq!(pages_loaded.load(Ordering::SeqCst), 2);

    // That was the last page: the terminal stop() releases the inset.
    has_more.store(false, Ordering::SeqCst);
    controller.stop();
    controller.update();
    assert_eq!(view.content_inset().bottom, 0.0);
    assert!(controller.indicator().lock().is_hidden());

    // With the predicate exhausted the trigger stays quiet.
    scroll_to(&view, 980.0);
    assert_eq!(pages_loaded.load(Ordering::SeqCst), 2);
}

/// The indicator follows the overscroll, resting exactly at the content
/// edge once the candidate position leaves the viewport.
#[test]
fn indicator_rides_the_growing_edge() {
    init_tracing();
    let view = Arc::new(ScrollView::new(Size::new(320.0, 600.0)));
    view.set_content_size(Size::new(320.0, 1000.0));
    let container: SharedContainer = view.clone();
    let controller = LoadMoreController::new(&container, 50.0, || {});
    let indicator = controller.indicator();

    scroll_to(&view, 400.0);
    assert_eq!(indicator.lock().frame().origin.y, 1000.0);

    // candidate = 1000 - (900 - 400) = 500: inside the viewport, tracking.
    scroll_to(&view, 900.0);
    assert_eq!(indicator.lock().frame().origin.y, 500.0);

    // Scrolling back up returns the indicator to rest.
    scroll_to(&view, 450.0);
    assert_eq!(indicator.lock().frame().origin.y, 1000.0);
}

proptest! {
    /// Wherever the offset lands, the indicator either rests at the
    /// content edge or tracks strictly inside the viewport.
    #[test]
    fn indicator_position_is_always_resting_or_in_viewport(y in -500.0f32..1500.0) {
        let view = Arc::new(ScrollView::new(Size::new(320.0, 600.0)));
        view.set_content_size(Size::new(320.0, 1000.0));
        let container: SharedContainer = view.clone();
        let controller = LoadMoreController::new(&container, 50.0, || {});

        scroll_to(&view, y);

        let origin_y = controller.indicator().lock().frame().origin.y;
        prop_assert!(origin_y == 1000.0 || origin_y < 600.0);
    }

    /// Without a stop() in between, any forward scroll sequence fires the
    /// callback at most once.
    #[test]
    fn forward_scroll_fires_at_most_once(offsets in proptest::collection::vec(0.0f32..1200.0, 1..40)) {
        let view = Arc::new(ScrollView::new(Size::new(320.0, 600.0)));
        view.set_content_size(Size::new(320.0, 1000.0));
        let container: SharedContainer = view.clone();

        let fires = Arc::new(AtomicUsize::new(0));
        let fires_clone = fires.clone();
        let _controller = LoadMoreController::new(&container, 50.0, move || {
            fires_clone.fetch_add(1, Ordering::SeqCst);
        });

        for y in offsets {
            scroll_to(&view, y);
        }
        prop_assert!(fires.load(Ordering::SeqCst) <= 1);
    }
}
