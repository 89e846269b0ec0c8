//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the layers that implement it.
//! The engine consumes offers through [`OfferSource`], turns them into
//! [`Object`]s through [`Offer::fulfill`], and reports progress through
//! [`ResolverObserver`]. Implementations live outside this crate.

/// Observational event sink for resolution progress
pub mod observer;
/// The unit of production
pub mod object;
/// The unit of supply
pub mod offer;
/// Pull-based offer streams
pub mod source;

// Re-export the port traits and event payloads for convenience
pub use observer::{CreateEvent, DestroyEvent, ResolveEvent, ResolverObserver};
pub use object::Object;
pub use offer::Offer;
pub use source::OfferSource;
