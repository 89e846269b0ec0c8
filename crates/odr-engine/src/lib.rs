//! Resolution engine for ODR - Offer Dependency Resolver
//!
//! Consumes a stream of offers, forms a dependency graph, verifies that
//! every request is satisfiable within its bounds, topologically sorts the
//! graph (enumerating every cycle when it is not a DAG), instantiates each
//! offer in construction order, and tears every object down in reverse
//! order on clear, failure, or drop.
//!
//! ## Architecture
//!
//! ```text
//! OfferSource ──▶ DagResolver::resolve()
//!                   │  drain source into node arena
//!                   │  bind dependency edges (ordered provider index)
//!                   │  satisfiability check ──▶ UnfulfilledError
//!                   │  topological sort     ──▶ NotADagError
//!                   ▼
//!                 objects, created in order, destroyed in reverse
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use odr_domain::Request;
//! use odr_engine::{DagResolver, FunctionOffer, QueueOfferSource, ValueOffer};
//!
//! struct Config(u16);
//!
//! let mut source = QueueOfferSource::new();
//! source.add(ValueOffer::new("config", Config(8080)).boxed());
//! source.add(
//!     FunctionOffer::new("server", |inputs| {
//!         let config = inputs.one::<Config>(0)?;
//!         Ok(format!("listening on {}", config.0))
//!     })
//!     .with_request(Request::of::<Config>())
//!     .boxed(),
//! );
//!
//! let mut resolver = DagResolver::new(&mut source);
//! resolver.resolve().expect("graph resolves");
//! assert_eq!(resolver.object_count(), 2);
//! ```

/// Observer implementations
pub mod observers;
/// Concrete offers and the objects they produce
pub mod offers;
/// The dependency graph resolver
pub mod resolver;
/// Offer source implementations
pub mod sources;

// Re-export the working set for convenience
pub use observers::{CountingObserver, TracingObserver};
pub use offers::{FunctionOffer, InPlaceObject, ValueOffer, VoidObject};
pub use resolver::DagResolver;
pub use sources::{CompositeOfferSource, QueueOfferSource};
