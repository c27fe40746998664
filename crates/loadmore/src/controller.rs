//! The load-more trigger controller.
//!
//! [`LoadMoreController`] watches a scrollable container's offset and fires
//! a load-more callback exactly once when the user scrolls past the bottom
//! of the loaded content by at least the triggering threshold, while
//! anchoring a progress indicator to the growing content edge.
//!
//! # Trigger Model
//!
//! The crossing check is edge-triggered on the indicator's hidden state:
//! the callback fires only on the hidden → shown transition, so a crossing
//! fires at most once until [`stop`](LoadMoreController::stop) re-arms the
//! controller. Merely halting the indicator's animation does not re-arm.
//!
//! # Inset Bookkeeping
//!
//! While the user is past the threshold, the controller reserves extra
//! bottom inset equal to the threshold so the indicator stays visible. The
//! reservation is added with an animated transition once the container is
//! decelerating (never mid-drag), and removed by `stop` — unless the
//! predicate still reports more content, in which case the padding stays in
//! place so the next page doesn't cause a scroll jump.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use loadmore::{LoadMoreController, ScrollView, SharedContainer};
//! use loadmore_core::{Point, Size};
//!
//! let view = Arc::new(ScrollView::new(Size::new(320.0, 600.0)));
//! view.set_content_size(Size::new(320.0, 1000.0));
//!
//! let container: SharedContainer = view.clone();
//! let controller = LoadMoreController::new(&container, 50.0, || {
//!     // kick off the next page request
//! });
//!
//! // Scrolling 50 past the natural bottom (400) fires the callback once.
//! view.set_content_offset(Point::new(0.0, 450.0));
//! # drop(controller);
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use loadmore_core::logging::targets;
use loadmore_core::{Color, Point, Rect};

use crate::animation::{
    DEFAULT_TRANSITION_DURATION, Easing, InsetTransition, TransitionStep,
};
use crate::container::{OffsetSubscription, ScrollContainer, SharedContainer, WeakContainer};
use crate::indicator::{ActivityIndicator, IndicatorView, SharedIndicator};

/// Callback invoked when the threshold is crossed.
pub type LoadMoreCallback = Arc<dyn Fn() + Send + Sync>;

/// Predicate polled to decide whether more content is available.
///
/// Called from the offset-change handler; must be side-effect free.
pub type ShouldLoadMoreCallback = Arc<dyn Fn() -> bool + Send + Sync>;

type Completion = Box<dyn FnOnce(bool) + Send>;

/// Mutable controller state behind one lock.
struct ControllerState {
    triggering_threshold: f32,
    /// True iff the bottom inset currently includes the extra threshold
    /// padding this controller added.
    inset_adjusted: bool,
    shows_indicator_on_load_more: bool,
    default_indicator: Arc<Mutex<ActivityIndicator>>,
    custom_indicator: Option<SharedIndicator>,
    /// In-flight inset transition, pumped by [`LoadMoreController::update`].
    transition: Option<InsetTransition>,
    animation_duration: Duration,
    easing: Easing,
}

impl ControllerState {
    /// The indicator currently driven: the custom one when set, else the
    /// default spinner.
    fn active_indicator(&self) -> SharedIndicator {
        match &self.custom_indicator {
            Some(custom) => custom.clone(),
            None => self.default_indicator.clone(),
        }
    }
}

/// Watches a scroll container and fires a load-more callback once per
/// threshold crossing.
///
/// The controller holds the container weakly: if the container is released
/// first, every operation degrades to a silent no-op. Dropping the
/// controller disconnects its offset subscription immediately.
///
/// # Related
///
/// - [`ScrollContainer`] - The observed capability
/// - [`IndicatorView`](crate::IndicatorView) - The driven capability
/// - [`ScrollView`](crate::ScrollView) - Reference container implementation
pub struct LoadMoreController {
    container: WeakContainer,
    state: Arc<Mutex<ControllerState>>,
    should_load_more: ShouldLoadMoreCallback,
    _subscription: OffsetSubscription,
}

impl LoadMoreController {
    /// Create a controller that always considers more content available.
    ///
    /// Equivalent to [`with_predicate`](Self::with_predicate) with an
    /// always-true predicate. `triggering_threshold` must be ≥ 0 (caller's
    /// responsibility); 0 fires as soon as the content edge is reached.
    pub fn new<F>(container: &SharedContainer, triggering_threshold: f32, on_load_more: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::with_predicate(container, triggering_threshold, on_load_more, || true)
    }

    /// Create a controller gated by a predicate.
    ///
    /// The default indicator is attached to the container hidden, centered
    /// horizontally and resting at the content's bottom edge, and one
    /// scoped subscription to the container's offset signal is registered.
    pub fn with_predicate<F, P>(
        container: &SharedContainer,
        triggering_threshold: f32,
        on_load_more: F,
        should_load_more: P,
    ) -> Self
    where
        F: Fn() + Send + Sync + 'static,
        P: Fn() -> bool + Send + Sync + 'static,
    {
        let default_indicator = Arc::new(Mutex::new(ActivityIndicator::new()));
        {
            let mut spinner = default_indicator.lock();
            let size = spinner.frame().size;
            let viewport = container.viewport_size();
            let resting_y = container.content_size().height;
            spinner.set_frame(Rect::new(
                (viewport.width - size.width) / 2.0,
                resting_y,
                size.width,
                size.height,
            ));
            spinner.set_hidden(true);
        }
        let shared: SharedIndicator = default_indicator.clone();
        container.attach(shared);

        let state = Arc::new(Mutex::new(ControllerState {
            triggering_threshold,
            inset_adjusted: false,
            shows_indicator_on_load_more: true,
            default_indicator,
            custom_indicator: None,
            transition: None,
            animation_duration: DEFAULT_TRANSITION_DURATION,
            easing: Easing::EaseInOut,
        }));
        let on_load_more: LoadMoreCallback = Arc::new(on_load_more);
        let should_load_more: ShouldLoadMoreCallback = Arc::new(should_load_more);

        let weak = Arc::downgrade(container);
        let subscription = OffsetSubscription::new(container, {
            let weak = weak.clone();
            let state = state.clone();
            let on_load_more = on_load_more.clone();
            let should_load_more = should_load_more.clone();
            move |_| Self::did_scroll(&weak, &state, &on_load_more, &should_load_more)
        });

        Self {
            container: weak,
            state,
            should_load_more,
            _subscription: subscription,
        }
    }

    // =========================================================================
    // Public API
    // =========================================================================

    /// Finish the current load cycle and re-arm the trigger.
    ///
    /// Called by the host once new data has arrived (or pagination ended).
    /// If the user is at or past the natural bottom, the inset removal is
    /// animated and the indicator is halted only when the transition
    /// finishes; otherwise both happen immediately. When the predicate
    /// still reports more content, the reserved inset stays in place (see
    /// module docs) but the indicator is still halted.
    pub fn stop(&self) {
        let Some(container) = self.container.upgrade() else {
            tracing::trace!(target: targets::CONTROLLER, "stop: container released");
            return;
        };
        let content_delta = container.content_size().height - container.viewport_size().height;
        let offset_delta = container.content_offset().y - content_delta;
        let needs_animation = offset_delta >= 0.0;

        let mut state = self.state.lock();
        if !needs_animation {
            // Above the loading edge: nothing visible to animate against.
            Self::apply_inset_adjustment(&mut state, &container, true, &self.should_load_more);
            let indicator = state.active_indicator();
            drop(state);
            let mut view = indicator.lock();
            view.stop_animating();
            view.set_hidden(true);
            return;
        }

        let active = state.active_indicator();
        let weak_indicator = Arc::downgrade(&active);
        let completion: Completion = Box::new(move |finished| {
            if !finished {
                return;
            }
            // The indicator (or the whole controller) may be gone by now.
            if let Some(indicator) = weak_indicator.upgrade() {
                let mut view = indicator.lock();
                view.stop_animating();
                view.set_hidden(true);
            }
        });
        Self::begin_animated_inset_adjustment(
            &mut state,
            &container,
            true,
            &self.should_load_more,
            Some(completion),
        );
    }

    /// Pump the in-flight inset transition.
    ///
    /// Hosts call this from their frame loop; it is a cheap no-op when no
    /// transition is active or the container has been released.
    pub fn update(&self) {
        let Some(container) = self.container.upgrade() else {
            return;
        };
        let mut state = self.state.lock();
        let Some(transition) = state.transition.as_mut() else {
            return;
        };
        match transition.update() {
            TransitionStep::Running(bottom) => {
                let inset = container.content_inset();
                if inset.bottom != bottom {
                    container.set_content_inset(inset.with_bottom(bottom));
                }
            }
            TransitionStep::Finished(bottom) => {
                let inset = container.content_inset();
                container.set_content_inset(inset.with_bottom(bottom));
                if let Some(transition) = state.transition.take() {
                    // Run the completion outside the state lock.
                    drop(state);
                    transition.complete();
                }
            }
        }
    }

    /// The configured triggering threshold.
    pub fn triggering_threshold(&self) -> f32 {
        self.state.lock().triggering_threshold
    }

    /// The indicator currently driven by the controller.
    pub fn indicator(&self) -> SharedIndicator {
        self.state.lock().active_indicator()
    }

    /// Get the default indicator's tint color.
    pub fn indicator_color(&self) -> Color {
        self.state.lock().default_indicator.lock().color()
    }

    /// Set the default indicator's tint color.
    ///
    /// Has no visible effect while a custom indicator is active.
    pub fn set_indicator_color(&self, color: Color) {
        self.state.lock().default_indicator.lock().set_color(color);
    }

    /// Whether the indicator is attached while loading more.
    pub fn shows_indicator_on_load_more(&self) -> bool {
        self.state.lock().shows_indicator_on_load_more
    }

    /// Attach or detach the active indicator.
    ///
    /// Turning this off detaches the active indicator from the container
    /// (it is preserved for later re-attachment); turning it on re-attaches
    /// it if needed. Trigger detection itself is unaffected.
    pub fn set_shows_indicator_on_load_more(&self, shows: bool) {
        let Some(container) = self.container.upgrade() else {
            return;
        };
        let mut state = self.state.lock();
        state.shows_indicator_on_load_more = shows;
        Self::rearrange_indicator(&state, &container);
    }

    /// Swap in a custom indicator, or revert to the default with `None`.
    ///
    /// The previous active indicator is stopped and detached; the
    /// replacement is repositioned at the resting edge, hidden, and
    /// attached according to the show-indicator configuration.
    pub fn set_custom_indicator(&self, indicator: Option<SharedIndicator>) {
        let Some(container) = self.container.upgrade() else {
            return;
        };
        let mut state = self.state.lock();

        let old = state.active_indicator();
        old.lock().stop_animating();
        container.detach(&old);

        state.custom_indicator = indicator;

        let active = state.active_indicator();
        {
            let mut view = active.lock();
            let size = view.frame().size;
            let viewport = container.viewport_size();
            let resting_y = container.content_size().height;
            view.set_frame(Rect::new(
                (viewport.width - size.width) / 2.0,
                resting_y,
                size.width,
                size.height,
            ));
            view.set_hidden(true);
        }
        Self::rearrange_indicator(&state, &container);
    }

    /// Duration of the inset show/hide transitions.
    pub fn animation_duration(&self) -> Duration {
        self.state.lock().animation_duration
    }

    /// Set the duration of the inset show/hide transitions.
    ///
    /// `Duration::ZERO` makes transitions finish on the first
    /// [`update`](Self::update) call.
    pub fn set_animation_duration(&self, duration: Duration) {
        self.state.lock().animation_duration = duration;
    }

    /// The easing applied to inset transitions.
    pub fn easing(&self) -> Easing {
        self.state.lock().easing
    }

    /// Set the easing applied to inset transitions.
    pub fn set_easing(&self, easing: Easing) {
        self.state.lock().easing = easing;
    }

    // =========================================================================
    // Scroll handling
    // =========================================================================

    /// Recompute indicator visibility/position and detect the crossing.
    ///
    /// Runs for every offset-change event, on the emitting thread.
    fn did_scroll(
        container: &WeakContainer,
        state: &Mutex<ControllerState>,
        on_load_more: &LoadMoreCallback,
        should_load_more: &ShouldLoadMoreCallback,
    ) {
        let Some(container) = container.upgrade() else {
            tracing::trace!(target: targets::CONTROLLER, "scroll event after container release");
            return;
        };
        let content = container.content_size();
        let viewport = container.viewport_size();
        let offset_y = container.content_offset().y;

        // Visibility gate: predicate says more content exists and at least
        // one full viewport of content is loaded.
        let gate = should_load_more() && content.height >= viewport.height;

        let mut state = state.lock();
        let indicator = state.active_indicator();
        if !gate {
            indicator.lock().set_hidden(true);
            return;
        }
        if offset_y < 0.0 {
            // Top bounce; nothing to do at this edge.
            return;
        }

        let content_delta = content.height - viewport.height;
        let offset_delta = offset_y - content_delta;
        let resting_y = content.height;

        // Follow the scroll while the indicator is inside the viewport;
        // otherwise rest at the content edge, avoiding redundant writes.
        let candidate_y = resting_y - offset_delta;
        {
            let mut view = indicator.lock();
            let frame = view.frame();
            if candidate_y < viewport.height {
                view.set_frame(Rect {
                    origin: Point::new(frame.origin.x, candidate_y),
                    size: frame.size,
                });
            } else if frame.origin.y != resting_y {
                view.set_frame(Rect {
                    origin: Point::new(frame.origin.x, resting_y),
                    size: frame.size,
                });
            }
        }

        // Edge-triggered crossing: fire only on the hidden -> shown
        // transition, so a crossing fires at most once until stop().
        let threshold = state.triggering_threshold;
        let crossed = offset_y > content_delta && offset_delta >= threshold;
        let mut fired = false;
        {
            let mut view = indicator.lock();
            if view.is_hidden() && crossed {
                view.set_hidden(false);
                view.start_animating();
                fired = true;
            }
        }

        // Reserve the inset once momentum takes over; deferred to
        // deceleration so the change does not fight an active drag.
        if container.is_decelerating() && !indicator.lock().is_hidden() && !state.inset_adjusted {
            Self::begin_animated_inset_adjustment(
                &mut state,
                &container,
                false,
                should_load_more,
                None,
            );
        }

        drop(state);
        if fired {
            tracing::debug!(
                target: targets::CONTROLLER,
                offset_y,
                threshold,
                "load-more threshold crossed"
            );
            on_load_more();
        }
    }

    // =========================================================================
    // Inset bookkeeping
    // =========================================================================

    /// The bottom inset the bookkeeping treats as current.
    ///
    /// While a transition is in flight the container holds an interpolated
    /// value; the logical value is where that transition will land. Toggle
    /// deltas are always taken off the logical value so an interrupted
    /// animation cannot skew the arithmetic.
    fn logical_bottom(state: &ControllerState, container: &Arc<dyn ScrollContainer>) -> f32 {
        match &state.transition {
            Some(transition) => transition.target(),
            None => container.content_inset().bottom,
        }
    }

    /// Compute and commit the idempotent inset toggle.
    ///
    /// Returns the new logical bottom inset when a change applies; `None`
    /// when the request matches the current adjustment (idempotence) or the
    /// reservation policy keeps the padding for the next page.
    fn inset_target(
        state: &mut ControllerState,
        container: &Arc<dyn ScrollContainer>,
        indicator_hidden: bool,
        should_load_more: &ShouldLoadMoreCallback,
    ) -> Option<f32> {
        if indicator_hidden != state.inset_adjusted {
            return None;
        }
        if indicator_hidden && should_load_more() {
            tracing::debug!(
                target: targets::CONTROLLER,
                "more content available, keeping reserved inset"
            );
            return None;
        }
        let base = Self::logical_bottom(state, container);
        state.inset_adjusted = !indicator_hidden;
        let delta = if indicator_hidden {
            -state.triggering_threshold
        } else {
            state.triggering_threshold
        };
        Some(base + delta)
    }

    /// Apply the inset toggle immediately, without animation.
    ///
    /// Cancels any in-flight transition and snaps the container to the
    /// logical value, so a stale interpolation cannot pump over the result
    /// afterward. When the toggle is a no-op the snap still runs, finishing
    /// an interrupted animation at its endpoint.
    fn apply_inset_adjustment(
        state: &mut ControllerState,
        container: &Arc<dyn ScrollContainer>,
        indicator_hidden: bool,
        should_load_more: &ShouldLoadMoreCallback,
    ) {
        let bottom = Self::inset_target(state, container, indicator_hidden, should_load_more)
            .unwrap_or_else(|| Self::logical_bottom(state, container));
        state.transition = None;
        let inset = container.content_inset();
        if inset.bottom != bottom {
            container.set_content_inset(inset.with_bottom(bottom));
            tracing::debug!(target: targets::CONTROLLER, bottom, "content inset adjusted");
        }
    }

    /// Start an animated inset toggle.
    ///
    /// The transition runs from the container's current (possibly
    /// interpolated) bottom to the new logical value; when the toggle is a
    /// no-op it heads to the current logical value instead, so an attached
    /// completion still fires after the usual delay. Replacing an in-flight
    /// transition cancels it (its completion sees `finished = false`).
    fn begin_animated_inset_adjustment(
        state: &mut ControllerState,
        container: &Arc<dyn ScrollContainer>,
        indicator_hidden: bool,
        should_load_more: &ShouldLoadMoreCallback,
        completion: Option<Completion>,
    ) {
        let from = container.content_inset().bottom;
        let to = Self::inset_target(state, container, indicator_hidden, should_load_more)
            .unwrap_or_else(|| Self::logical_bottom(state, container));
        let mut transition =
            InsetTransition::new(from, to, state.animation_duration, state.easing);
        if let Some(completion) = completion {
            transition = transition.with_completion(completion);
        }
        state.transition = Some(transition);
    }

    /// Re-apply the show-indicator attachment policy.
    fn rearrange_indicator(state: &ControllerState, container: &Arc<dyn ScrollContainer>) {
        let active = state.active_indicator();
        if !state.shows_indicator_on_load_more {
            container.detach(&active);
            return;
        }
        if !container.is_attached(&active) {
            container.attach(active);
        }
    }
}
