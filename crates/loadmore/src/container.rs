//! The scrollable-container capability consumed by the controller.
//!
//! The controller never owns a container; it holds a [`WeakContainer`] and
//! reads viewport state fresh on every event. Any scrollable surface can
//! participate by implementing [`ScrollContainer`] — the crate ships
//! [`ScrollView`](crate::ScrollView) as a headless reference
//! implementation.

use std::sync::{Arc, Weak};

use loadmore_core::logging::targets;
use loadmore_core::{ConnectionId, EdgeInsets, Point, Signal, Size};

use crate::indicator::SharedIndicator;

/// A scrollable container the controller can observe and adjust.
///
/// All methods take `&self`: implementations are expected to use interior
/// mutability (the controller shares the container with the host through an
/// [`Arc`]). State reads must reflect the current values — the controller
/// never caches them.
///
/// # Coordinate Conventions
///
/// `content_offset().y` grows as the user scrolls down; `0.0` is the top of
/// the content. An offset greater than
/// `content_size().height - viewport_size().height` means the user has
/// overscrolled past the natural bottom (bounce, or room granted by a
/// bottom inset).
pub trait ScrollContainer: Send + Sync {
    /// Total size of the scrollable content.
    fn content_size(&self) -> Size;

    /// Size of the visible viewport (the container's frame).
    fn viewport_size(&self) -> Size;

    /// Current scroll offset.
    fn content_offset(&self) -> Point;

    /// Current content insets.
    fn content_inset(&self) -> EdgeInsets;

    /// Replace the content insets.
    ///
    /// The controller assumes exclusive ownership of the bottom-inset delta
    /// it introduces; concurrent external mutation of the bottom inset is
    /// unsupported.
    fn set_content_inset(&self, inset: EdgeInsets);

    /// Whether the container is currently decelerating after a drag
    /// (momentum scrolling, not an active gesture).
    fn is_decelerating(&self) -> bool;

    /// Host an indicator as a child of the container.
    ///
    /// Attaching an already-attached indicator is a no-op.
    fn attach(&self, indicator: SharedIndicator);

    /// Remove a hosted indicator. No-op when not attached.
    fn detach(&self, indicator: &SharedIndicator);

    /// Check whether an indicator is currently hosted (by `Arc` identity).
    fn is_attached(&self, indicator: &SharedIndicator) -> bool;

    /// Signal emitted after every content-offset change.
    fn content_offset_changed(&self) -> &Signal<Point>;
}

/// A shared handle to a scroll container.
pub type SharedContainer = Arc<dyn ScrollContainer>;

/// A non-owning handle to a scroll container.
///
/// Everything built on this must treat a failed upgrade as "container
/// released" and degrade to a silent no-op.
pub type WeakContainer = Weak<dyn ScrollContainer>;

/// RAII guard for the controller's offset subscription.
///
/// Holds the connection id together with a weak container reference;
/// dropping the guard disconnects the slot if the container is still alive.
/// If the container died first, its signal (and the connection with it) is
/// already gone and there is nothing to do.
pub(crate) struct OffsetSubscription {
    container: WeakContainer,
    id: ConnectionId,
}

impl OffsetSubscription {
    /// Connect `slot` to the container's offset signal, scoped to the
    /// returned guard.
    pub(crate) fn new<F>(container: &SharedContainer, slot: F) -> Self
    where
        F: Fn(&Point) + Send + Sync + 'static,
    {
        let id = container.content_offset_changed().connect(slot);
        Self {
            container: Arc::downgrade(container),
            id,
        }
    }
}

impl Drop for OffsetSubscription {
    fn drop(&mut self) {
        if let Some(container) = self.container.upgrade() {
            container.content_offset_changed().disconnect(self.id);
        } else {
            tracing::trace!(
                target: targets::CONTROLLER,
                "container already released, subscription gone with it"
            );
        }
    }
}
