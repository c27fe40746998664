//! Indicator capability traits and the default activity indicator.
//!
//! The load-more controller drives "some animatable view" anchored to the
//! growing content edge. It never assumes a concrete view type: anything
//! implementing [`IndicatorView`] can be swapped in via
//! [`LoadMoreController::set_custom_indicator`].
//!
//! [`LoadMoreController::set_custom_indicator`]: crate::LoadMoreController::set_custom_indicator

use std::sync::Arc;

use loadmore_core::{Color, Rect};
use parking_lot::Mutex;

/// Glyph frames for the default indicator (braille spinner).
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Default indicator size (width and height, in container units).
pub const DEFAULT_INDICATOR_SIZE: f32 = 50.0;

/// The animation capability every indicator must expose.
///
/// # Related
///
/// - [`IndicatorView`] - Adds the visual properties the controller positions
pub trait Animatable {
    /// Begin the indicator's animation.
    fn start_animating(&mut self);

    /// Halt the indicator's animation.
    fn stop_animating(&mut self);

    /// Check whether the animation is currently running.
    fn is_animating(&self) -> bool;
}

/// An animatable view the controller can position and show/hide.
///
/// The controller treats the frame and hidden flag as its own: while a view
/// is the active indicator, external writes to them will be overwritten on
/// the next scroll event.
pub trait IndicatorView: Animatable + Send {
    /// The indicator's frame in container content coordinates.
    fn frame(&self) -> Rect;

    /// Move/resize the indicator.
    fn set_frame(&mut self, frame: Rect);

    /// Check whether the indicator is hidden.
    fn is_hidden(&self) -> bool;

    /// Show or hide the indicator.
    fn set_hidden(&mut self, hidden: bool);
}

/// A shareable, lockable indicator handle.
///
/// Containers host indicators by `Arc` identity, so cloning the handle does
/// not duplicate the attachment.
pub type SharedIndicator = Arc<Mutex<dyn IndicatorView>>;

/// The default spinner indicator.
///
/// Headless: it carries animation state, a tint color and a cycling glyph
/// frame, and leaves drawing to the host. Hosts that render text can show
/// [`current_glyph`](Self::current_glyph) directly; others can treat
/// [`is_animating`](Animatable::is_animating) as a plain busy flag.
///
/// # Example
///
/// ```
/// use loadmore::indicator::{ActivityIndicator, Animatable};
///
/// let mut spinner = ActivityIndicator::new();
/// spinner.start_animating();
/// let first = spinner.current_glyph();
/// spinner.tick();
/// assert_ne!(spinner.current_glyph(), first);
/// ```
#[derive(Debug, Clone)]
pub struct ActivityIndicator {
    frame: Rect,
    hidden: bool,
    animating: bool,
    color: Color,
    current_frame: usize,
}

impl ActivityIndicator {
    /// Create a new indicator with the default size at the origin.
    pub fn new() -> Self {
        Self {
            frame: Rect::new(0.0, 0.0, DEFAULT_INDICATOR_SIZE, DEFAULT_INDICATOR_SIZE),
            hidden: false,
            animating: false,
            color: Color::BLACK,
            current_frame: 0,
        }
    }

    /// Get the tint color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the tint color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Advance the glyph cycle by one frame.
    ///
    /// A no-op while the indicator is not animating; hosts call this from
    /// their frame loop.
    pub fn tick(&mut self) {
        if self.animating {
            self.current_frame = self.current_frame.wrapping_add(1);
        }
    }

    /// The glyph for the current animation frame.
    pub fn current_glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.current_frame % SPINNER_FRAMES.len()]
    }
}

impl Default for ActivityIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animatable for ActivityIndicator {
    fn start_animating(&mut self) {
        self.animating = true;
    }

    fn stop_animating(&mut self) {
        self.animating = false;
    }

    fn is_animating(&self) -> bool {
        self.animating
    }
}

impl IndicatorView for ActivityIndicator {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let spinner = ActivityIndicator::new();
        assert!(!spinner.is_animating());
        assert!(!spinner.is_hidden());
        assert_eq!(spinner.color(), Color::BLACK);
        assert_eq!(spinner.frame().width(), DEFAULT_INDICATOR_SIZE);
    }

    #[test]
    fn tick_only_advances_while_animating() {
        let mut spinner = ActivityIndicator::new();
        let initial = spinner.current_glyph();

        spinner.tick();
        assert_eq!(spinner.current_glyph(), initial);

        spinner.start_animating();
        spinner.tick();
        assert_ne!(spinner.current_glyph(), initial);

        spinner.stop_animating();
        let frozen = spinner.current_glyph();
        spinner.tick();
        assert_eq!(spinner.current_glyph(), frozen);
    }

    #[test]
    fn glyph_cycle_wraps() {
        let mut spinner = ActivityIndicator::new();
        spinner.start_animating();
        let first = spinner.current_glyph();
        for _ in 0..SPINNER_FRAMES.len() {
            spinner.tick();
        }
        assert_eq!(spinner.current_glyph(), first);
    }

    #[test]
    fn usable_as_shared_indicator() {
        let spinner: SharedIndicator = Arc::new(Mutex::new(ActivityIndicator::new()));
        spinner.lock().set_hidden(true);
        assert!(spinner.lock().is_hidden());
    }
}
