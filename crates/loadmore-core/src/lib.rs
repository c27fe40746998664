//! Core systems for loadmore.
//!
//! This crate provides the foundational components shared by the loadmore
//! library:
//!
//! - **Signal/Slot System**: Type-safe observation of state changes
//! - **Geometry**: Points, sizes, rectangles and edge insets
//! - **Color**: RGBA tint state for indicators
//! - **Logging**: `tracing` target constants for log filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use loadmore_core::{Point, Signal};
//!
//! // A container would emit this when its content offset changes
//! let offset_changed = Signal::<Point>::new();
//!
//! let conn_id = offset_changed.connect(|offset| {
//!     println!("Scrolled to y = {}", offset.y);
//! });
//!
//! offset_changed.emit(Point::new(0.0, 120.0));
//!
//! // Disconnect when done
//! offset_changed.disconnect(conn_id);
//! ```

pub mod color;
pub mod geometry;
pub mod logging;
pub mod signal;

pub use color::Color;
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use signal::{ConnectionId, Signal};

// The signal table is shared state; make sure it stays thread-safe.
static_assertions::assert_impl_all!(Signal<Point>: Send, Sync);
static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
