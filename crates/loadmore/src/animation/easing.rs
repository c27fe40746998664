//! Easing functions for smooth transitions.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a
//! transformed value that creates smoother, more natural-looking motion.

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
}

/// Apply an easing function to a progress value.
///
/// # Arguments
///
/// * `easing` - The easing function to apply
/// * `t` - Progress value from 0.0 to 1.0 (clamped)
///
/// # Example
///
/// ```
/// use loadmore::animation::{Easing, ease};
///
/// // Linear: output equals input
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
///
/// // Ease-in: slower at start
/// assert!(ease(Easing::EaseIn, 0.5) < 0.5);
///
/// // Ease-out: slower at end
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    // Clamp input to valid range
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
    }
}

/// Interpolate between two values using an easing function.
///
/// # Arguments
///
/// * `easing` - The easing function to apply
/// * `start` - Starting value
/// * `end` - Ending value
/// * `t` - Progress value from 0.0 to 1.0
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    let eased_t = ease(easing, t);
    start + (end - start) * eased_t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(ease(Easing::Linear, 0.0), 0.0);
        assert_eq!(ease(Easing::Linear, 0.5), 0.5);
        assert_eq!(ease(Easing::Linear, 1.0), 1.0);
    }

    #[test]
    fn test_ease_in() {
        assert_eq!(ease(Easing::EaseIn, 0.0), 0.0);
        assert!(ease(Easing::EaseIn, 0.5) < 0.5); // Slower at start
        assert_eq!(ease(Easing::EaseIn, 1.0), 1.0);
    }

    #[test]
    fn test_ease_out() {
        assert_eq!(ease(Easing::EaseOut, 0.0), 0.0);
        assert!(ease(Easing::EaseOut, 0.5) > 0.5); // Faster at start
        assert_eq!(ease(Easing::EaseOut, 1.0), 1.0);
    }

    #[test]
    fn test_ease_in_out() {
        assert_eq!(ease(Easing::EaseInOut, 0.0), 0.0);
        assert_eq!(ease(Easing::EaseInOut, 0.5), 0.5); // Midpoint unchanged
        assert_eq!(ease(Easing::EaseInOut, 1.0), 1.0);
    }

    #[test]
    fn test_clamp() {
        // Values outside 0-1 should be clamped
        assert_eq!(ease(Easing::Linear, -0.5), 0.0);
        assert_eq!(ease(Easing::Linear, 1.5), 1.0);
    }

    #[test]
    fn test_lerp_eased() {
        // Linear interpolation from 100 to 200
        assert_eq!(lerp_eased(Easing::Linear, 100.0, 200.0, 0.0), 100.0);
        assert_eq!(lerp_eased(Easing::Linear, 100.0, 200.0, 0.5), 150.0);
        assert_eq!(lerp_eased(Easing::Linear, 100.0, 200.0, 1.0), 200.0);
    }
}
