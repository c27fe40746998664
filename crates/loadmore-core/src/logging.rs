//! Logging facilities for loadmore.
//!
//! The crates instrument themselves with the `tracing` crate. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Trigger decisions (threshold crossings, inset adjustments, dead
//! container references) are reported at `debug`/`trace` level under the
//! targets below, so `RUST_LOG=loadmore=debug` surfaces exactly the state
//! machine's transitions.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "loadmore_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "loadmore_core::signal";
    /// Trigger controller target.
    pub const CONTROLLER: &str = "loadmore::controller";
    /// Inset transition target.
    pub const ANIMATION: &str = "loadmore::animation";
}
