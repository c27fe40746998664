//! Timed, non-blocking transitions for content-inset changes.
//!
//! Nothing here spawns threads or sleeps: a transition is a start instant
//! plus a duration, advanced by [`InsetTransition::update`] calls from the
//! host's frame loop and finished with a completion notification.

mod easing;
mod transition;

pub use easing::{Easing, ease, lerp_eased};
pub use transition::{InsetTransition, TransitionStep};

use std::time::Duration;

/// Default duration for inset show/hide transitions.
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(250);
