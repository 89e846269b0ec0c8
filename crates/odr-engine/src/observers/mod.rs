//! Observer implementations
//!
//! [`CountingObserver`] tallies events; [`TracingObserver`] logs them
//! through the `tracing` ecosystem.

/// Event-tallying observer
pub mod counting;
/// Structured-logging observer
pub mod log;

pub use counting::CountingObserver;
pub use log::TracingObserver;
