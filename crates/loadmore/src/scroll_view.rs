//! A headless reference scroll container.
//!
//! [`ScrollView`] implements [`ScrollContainer`] with plain in-memory state
//! and no rendering. The test suite drives it, and hosts whose scroll
//! surface is already modeled elsewhere can embed it as the bridge between
//! their scroll events and a [`LoadMoreController`](crate::LoadMoreController).

use parking_lot::Mutex;

use loadmore_core::{EdgeInsets, Point, Signal, Size};

use crate::container::ScrollContainer;
use crate::indicator::SharedIndicator;

/// Interior state, guarded by one lock.
struct ScrollViewState {
    content_size: Size,
    viewport_size: Size,
    content_offset: Point,
    content_inset: EdgeInsets,
    decelerating: bool,
    children: Vec<SharedIndicator>,
}

/// A scrollable container model.
///
/// Offsets are deliberately *not* clamped to the content bounds: the
/// load-more trigger is defined on overscroll past the natural bottom
/// (bounce, or room granted by a bottom inset), so clamping policy is left
/// to the host feeding offsets in.
///
/// # Example
///
/// ```
/// use loadmore::ScrollView;
/// use loadmore_core::{Point, Size};
///
/// let view = ScrollView::new(Size::new(320.0, 600.0));
/// view.set_content_size(Size::new(320.0, 1000.0));
/// view.set_content_offset(Point::new(0.0, 400.0)); // emits content_offset_changed
/// ```
pub struct ScrollView {
    state: Mutex<ScrollViewState>,
    /// Signal emitted after every content-offset change.
    offset_changed: Signal<Point>,
}

impl ScrollView {
    /// Create a scroll view with the given viewport size and empty content.
    pub fn new(viewport_size: Size) -> Self {
        Self {
            state: Mutex::new(ScrollViewState {
                content_size: Size::ZERO,
                viewport_size,
                content_offset: Point::ZERO,
                content_inset: EdgeInsets::ZERO,
                decelerating: false,
                children: Vec::new(),
            }),
            offset_changed: Signal::new(),
        }
    }

    /// Set the content size.
    ///
    /// Growing the content (a new page arriving) does not move the offset;
    /// observers see the new geometry on the next offset change.
    pub fn set_content_size(&self, size: Size) {
        self.state.lock().content_size = size;
    }

    /// Set the viewport (frame) size.
    pub fn set_viewport_size(&self, size: Size) {
        self.state.lock().viewport_size = size;
    }

    /// Set the content offset and notify observers.
    pub fn set_content_offset(&self, offset: Point) {
        {
            let mut state = self.state.lock();
            if state.content_offset == offset {
                return;
            }
            state.content_offset = offset;
        }
        // Emit outside the lock: slots read back through the trait.
        self.offset_changed.emit(offset);
    }

    /// Mark the container as decelerating (momentum) or not (at rest or
    /// actively dragged).
    pub fn set_decelerating(&self, decelerating: bool) {
        self.state.lock().decelerating = decelerating;
    }

    /// Number of hosted child indicators.
    pub fn child_count(&self) -> usize {
        self.state.lock().children.len()
    }
}

impl ScrollContainer for ScrollView {
    fn content_size(&self) -> Size {
        self.state.lock().content_size
    }

    fn viewport_size(&self) -> Size {
        self.state.lock().viewport_size
    }

    fn content_offset(&self) -> Point {
        self.state.lock().content_offset
    }

    fn content_inset(&self) -> EdgeInsets {
        self.state.lock().content_inset
    }

    fn set_content_inset(&self, inset: EdgeInsets) {
        self.state.lock().content_inset = inset;
    }

    fn is_decelerating(&self) -> bool {
        self.state.lock().decelerating
    }

    fn attach(&self, indicator: SharedIndicator) {
        let mut state = self.state.lock();
        let already = state
            .children
            .iter()
            .any(|child| std::sync::Arc::ptr_eq(child, &indicator));
        if !already {
            state.children.push(indicator);
        }
    }

    fn detach(&self, indicator: &SharedIndicator) {
        self.state
            .lock()
            .children
            .retain(|child| !std::sync::Arc::ptr_eq(child, indicator));
    }

    fn is_attached(&self, indicator: &SharedIndicator) -> bool {
        self.state
            .lock()
            .children
            .iter()
            .any(|child| std::sync::Arc::ptr_eq(child, indicator))
    }

    fn content_offset_changed(&self) -> &Signal<Point> {
        &self.offset_changed
    }
}
