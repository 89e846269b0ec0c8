//! Error types for offer resolution
//!
//! Resolution fails in exactly one of two resolver-specific ways: at least
//! one request fell outside its bounds ([`UnfulfilledError`]), or the
//! dependency graph contains cycles ([`NotADagError`]). Both carry every
//! relevant entry or cycle, never just the first, and both render the full
//! report through `Display`. The remaining variants cover fulfillment-time
//! misuse and user-supplied fulfillment failures.

use serde::Serialize;
use thiserror::Error;

use crate::ports::Offer;
use crate::request::{Request, UNBOUNDED};

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for offer resolution
#[derive(Debug, Error)]
pub enum Error {
    /// One or more requests could not be fulfilled within bounds
    #[error(transparent)]
    Unfulfilled(#[from] UnfulfilledError),

    /// The dependency graph contains one or more cycles
    #[error(transparent)]
    NotADag(#[from] NotADagError),

    /// A handle was downcast to a type other than the one it holds
    #[error("type mismatch: requested {expected} but handle holds {actual}")]
    TypeMismatch {
        /// The type the caller asked for
        expected: String,
        /// The type identity the handle carries
        actual: String,
    },

    /// A void handle was downcast
    #[error("object of type {name} is void and has no value")]
    VoidValue {
        /// Type identity of the void handle
        name: String,
    },

    /// A fulfillment accessed a request group that does not exist
    #[error("request index {index} out of bounds ({len} requests)")]
    RequestIndex {
        /// The index that was accessed
        index: usize,
        /// Number of request groups delivered
        len: usize,
    },

    /// A fulfillment expected at least one object for a request that
    /// resolved to none
    #[error("request {index} delivered no objects")]
    MissingInput {
        /// Zero-relative request index
        index: usize,
    },

    /// An offer was fulfilled more than once
    #[error("offer {offer} has already been fulfilled")]
    AlreadyFulfilled {
        /// Display name of the offer
        offer: String,
    },

    /// A provider was consumed before its object existed
    ///
    /// Construction follows the topological order, so this indicates a
    /// broken internal invariant rather than a user error.
    #[error("construction order violated: provider {provider} has no object")]
    ConstructionOrder {
        /// Display name of the provider offer
        provider: String,
    },

    /// Failure raised by user-supplied fulfillment logic
    #[error("fulfillment failed: {0}")]
    Fulfillment(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps an external error as a fulfillment failure.
    pub fn fulfillment(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Fulfillment(source.into())
    }
}

/// Name and type snapshot of an offer, as carried by failure reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferSummary {
    /// Display name of the offer
    pub name: String,
    /// Rendering of the offer's type identity
    pub type_name: String,
}

impl OfferSummary {
    /// Snapshots an offer.
    pub fn of(offer: &dyn Offer) -> Self {
        Self {
            name: offer.name().to_string(),
            type_name: offer.type_key().to_string(),
        }
    }
}

/// One out-of-bounds request of an unfulfilled offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestDetails {
    /// Zero-relative index of the request in the offer's request list
    pub index: usize,
    /// Rendering of the requested type identity
    pub type_name: String,
    /// Inclusive lower bound of the request
    pub lower: usize,
    /// Inclusive upper bound of the request ([`UNBOUNDED`] for no limit)
    pub upper: usize,
    /// Offers that were bound to the request, insufficient or not
    pub fulfilled_by: Vec<OfferSummary>,
}

impl RequestDetails {
    /// Builds the details for one out-of-bounds request.
    pub fn new(index: usize, request: &Request, fulfilled_by: Vec<OfferSummary>) -> Self {
        Self {
            index,
            type_name: request.key().to_string(),
            lower: request.lower_bound(),
            upper: request.upper_bound(),
            fulfilled_by,
        }
    }
}

impl std::fmt::Display for RequestDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}: {} [{}, ", self.index, self.type_name, self.lower)?;
        if self.upper == UNBOUNDED {
            write!(f, "\u{221e})")?;
        } else {
            write!(f, "{}]", self.upper)?;
        }
        write!(f, " fulfilled by [")?;
        for (i, offer) in self.fulfilled_by.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", offer.name)?;
        }
        write!(f, "]")
    }
}

/// An offer together with every one of its requests that fell outside
/// bounds. Requests that were satisfied are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnfulfilledEntry {
    /// The offer whose requests went unfulfilled
    pub offer: OfferSummary,
    /// The out-of-bounds requests, at least one
    pub requests: Vec<RequestDetails>,
}

impl std::fmt::Display for UnfulfilledEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.offer.name)?;
        for request in &self.requests {
            write!(f, "\n\t{request}")?;
        }
        Ok(())
    }
}

/// Raised when at least one offer has at least one request whose bound
/// provider count lies outside its declared bounds.
///
/// Carries every such offer/request pair. Raised after graph construction
/// and before cycle analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnfulfilledError {
    /// One entry per offer with unfulfilled requests
    pub entries: Vec<UnfulfilledEntry>,
}

impl UnfulfilledError {
    /// Builds the error from collected entries.
    pub fn new(entries: Vec<UnfulfilledEntry>) -> Self {
        Self { entries }
    }
}

impl std::fmt::Display for UnfulfilledError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unable to fulfill all requests of the following offers:")?;
        for (i, entry) in self.entries.iter().enumerate() {
            write!(f, "\n#{}: {entry}", i + 1)?;
        }
        Ok(())
    }
}

impl std::error::Error for UnfulfilledError {}

/// An ordered sequence of offers forming a closed dependency loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cycle {
    /// The offers along the loop, in dependency order
    pub offers: Vec<OfferSummary>,
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for offer in &self.offers {
            write!(f, "{} => ", offer.name)?;
        }
        // Close the loop on its first element
        if let Some(first) = self.offers.first() {
            write!(f, "{}", first.name)?;
        }
        Ok(())
    }
}

/// Raised when the dependency graph is not a directed acyclic graph.
///
/// Carries every distinct cycle discovered, each as an ordered offer
/// sequence. Raised only after the unfulfilled check passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotADagError {
    /// Every cycle found in the graph
    pub cycles: Vec<Cycle>,
}

impl NotADagError {
    /// Builds the error from collected cycles.
    pub fn new(cycles: Vec<Cycle>) -> Self {
        Self { cycles }
    }
}

impl std::fmt::Display for NotADagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Dependency graph not a directed acyclic graph (DAG) due to the following cycles:"
        )?;
        for (i, cycle) in self.cycles.iter().enumerate() {
            write!(f, "\n#{}: {cycle}", i + 1)?;
        }
        Ok(())
    }
}

impl std::error::Error for NotADagError {}
