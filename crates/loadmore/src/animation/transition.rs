//! The inset transition: timed interpolation of a bottom content inset.

use std::fmt;
use std::time::{Duration, Instant};

use loadmore_core::logging::targets;

use super::easing::{Easing, lerp_eased};

/// Completion notification for a transition.
///
/// Receives `true` when the transition ran to its end, `false` when it was
/// cancelled (replaced by a newer transition, or dropped mid-flight).
type Completion = Box<dyn FnOnce(bool) + Send>;

/// Result of advancing a transition by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionStep {
    /// Still in flight; the interpolated inset value for this frame.
    Running(f32),
    /// The duration has elapsed; the final inset value. The owner should
    /// consume the transition with [`InsetTransition::complete`].
    Finished(f32),
}

/// A timed interpolation from one bottom-inset value to another.
///
/// Non-blocking: the owner pumps [`update`](Self::update) once per frame
/// and applies the returned value. The completion closure fires exactly
/// once — with `true` via [`complete`](Self::complete), or with `false` if
/// the transition is dropped before finishing.
///
/// `from == to` is a valid degenerate transition: a pure timer whose only
/// observable effect is the completion. The controller relies on this when
/// the reservation policy skips an inset change but the indicator still has
/// to be halted after the usual delay.
pub struct InsetTransition {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    start_time: Instant,
    completion: Option<Completion>,
}

impl InsetTransition {
    /// Start a transition now.
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            start_time: Instant::now(),
            completion: None,
        }
    }

    /// Attach a completion notification.
    pub fn with_completion<F>(mut self, completion: F) -> Self
    where
        F: FnOnce(bool) + Send + 'static,
    {
        self.completion = Some(Box::new(completion));
        self
    }

    /// The value the transition is heading toward.
    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Advance the transition and get the inset value for this frame.
    ///
    /// A zero duration finishes on the first call.
    pub fn update(&mut self) -> TransitionStep {
        let raw_progress = if self.duration.is_zero() {
            1.0
        } else {
            (self.start_time.elapsed().as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        if raw_progress >= 1.0 {
            TransitionStep::Finished(self.to)
        } else {
            TransitionStep::Running(lerp_eased(self.easing, self.from, self.to, raw_progress))
        }
    }

    /// Consume the transition, firing the completion with `finished = true`.
    pub fn complete(mut self) {
        if let Some(completion) = self.completion.take() {
            completion(true);
        }
    }
}

impl Drop for InsetTransition {
    fn drop(&mut self) {
        // Dropped mid-flight (typically replaced by a newer transition):
        // notify as not finished.
        if let Some(completion) = self.completion.take() {
            tracing::trace!(target: targets::ANIMATION, "inset transition cancelled");
            completion(false);
        }
    }
}

impl fmt::Debug for InsetTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsetTransition")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI32, Ordering};

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut t = InsetTransition::new(0.0, 50.0, Duration::ZERO, Easing::EaseInOut);
        assert_eq!(t.update(), TransitionStep::Finished(50.0));
    }

    #[test]
    fn running_value_stays_between_endpoints() {
        let mut t = InsetTransition::new(10.0, 60.0, Duration::from_secs(60), Easing::Linear);
        match t.update() {
            TransitionStep::Running(v) => {
                assert!((10.0..=60.0).contains(&v));
            }
            TransitionStep::Finished(_) => panic!("60s transition finished instantly"),
        }
    }

    #[test]
    fn elapsed_duration_reports_target() {
        let mut t = InsetTransition::new(50.0, 0.0, Duration::from_millis(1), Easing::EaseInOut);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(t.update(), TransitionStep::Finished(0.0));
    }

    #[test]
    fn complete_fires_with_finished_true() {
        let outcome = Arc::new(AtomicI32::new(0));
        let outcome_clone = outcome.clone();
        let t = InsetTransition::new(0.0, 1.0, Duration::ZERO, Easing::Linear).with_completion(
            move |finished| {
                outcome_clone.store(if finished { 1 } else { -1 }, Ordering::SeqCst);
            },
        );
        t.complete();
        assert_eq!(outcome.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_fires_with_finished_false() {
        let outcome = Arc::new(AtomicI32::new(0));
        let outcome_clone = outcome.clone();
        let t = InsetTransition::new(0.0, 1.0, Duration::from_secs(60), Easing::Linear)
            .with_completion(move |finished| {
                outcome_clone.store(if finished { 1 } else { -1 }, Ordering::SeqCst);
            });
        drop(t);
        assert_eq!(outcome.load(Ordering::SeqCst), -1);
    }

    #[test]
    fn degenerate_transition_is_a_pure_timer() {
        let mut t = InsetTransition::new(50.0, 50.0, Duration::ZERO, Easing::EaseInOut);
        assert_eq!(t.update(), TransitionStep::Finished(50.0));
    }
}
