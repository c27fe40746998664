//! Scroll-position-driven pagination triggering.
//!
//! This crate turns "the user scrolled past the bottom" into a load-more
//! callback that fires exactly once per crossing, and keeps a progress
//! indicator anchored to the growing content edge while the next page
//! loads.
//!
//! # Architecture
//!
//! - [`ScrollContainer`] is the capability a host exposes: content/viewport
//!   geometry, an offset-change [`Signal`](loadmore_core::Signal), inset
//!   read/write, and child hosting for the indicator.
//! - [`LoadMoreController`] subscribes to that signal, detects threshold
//!   crossings, positions the indicator, and manages the bottom-inset
//!   reservation. It holds the container weakly and goes inert when the
//!   container is released.
//! - [`ScrollView`] is a headless reference container used by the tests
//!   and by hosts without their own scroll model.
//! - [`animation`] provides the non-blocking inset transitions, pumped by
//!   [`LoadMoreController::update`] from the host's frame loop.
//!
//! # Quick Start
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
//!     // request the next page
//! });
//!
//! view.set_content_offset(Point::new(0.0, 450.0)); // fires once
//! // ... data arrives ...
//! controller.stop(); // re-arms the trigger
//! # controller.update();
//! ```

pub mod animation;
pub mod container;
pub mod controller;
pub mod indicator;
pub mod scroll_view;

pub use container::{ScrollContainer, SharedContainer, WeakContainer};
pub use controller::{LoadMoreCallback, LoadMoreController, ShouldLoadMoreCallback};
pub use indicator::{
    ActivityIndicator, Animatable, DEFAULT_INDICATOR_SIZE, IndicatorView, SharedIndicator,
};
pub use scroll_view::ScrollView;

// Geometry and signal types used throughout the public API.
pub use loadmore_core::{Color, EdgeInsets, Point, Rect, Signal, Size};
