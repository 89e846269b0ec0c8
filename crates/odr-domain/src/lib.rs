//! Domain layer for ODR - Offer Dependency Resolver
//!
//! Defines the data contracts exchanged by every other layer: type
//! identities, bounded requests, type-erased handles, the port traits
//! implemented by offers, objects, offer sources, and observers, and the
//! error types raised when a dependency graph cannot be resolved.
//!
//! ## Concepts
//!
//! | Concept | Description |
//! |---------|-------------|
//! | [`TypeKey`] | Opaque type identity an offer provides or requests |
//! | [`Request`] | A bounded need for objects of one type |
//! | [`Handle`] | Type-erased, downcast-checked view of a produced value |
//! | [`Offer`] | A possible future object: requirements in, object out |
//! | [`Object`] | The unit of production, owned by the resolver |
//! | [`OfferSource`] | Pull-based stream of offers |
//! | [`ResolverObserver`] | Observational sink for resolution events |
//!
//! This crate contains no resolution logic. The engine lives in
//! `odr-engine`; this layer only defines what the engine consumes and
//! produces.

/// Error types and the crate-wide result alias
pub mod error;
/// Type-erased handles and positional fulfillment inputs
pub mod handle;
/// Opaque type identities
pub mod key;
/// Boundary contracts implemented outside the domain
pub mod ports;
/// Bounded type requests
pub mod request;

// Re-export the core vocabulary for convenience
pub use error::{
    Cycle, Error, NotADagError, OfferSummary, RequestDetails, Result, UnfulfilledEntry,
    UnfulfilledError,
};
pub use handle::{Handle, Inputs};
pub use key::TypeKey;
pub use ports::{
    CreateEvent, DestroyEvent, Object, Offer, OfferSource, ResolveEvent, ResolverObserver,
};
pub use request::{Request, UNBOUNDED};
