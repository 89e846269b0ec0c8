//! Node arena and provider ordering
//!
//! The resolver owns every node in a flat arena; dependency edges are
//! index pairs into it, so no node ever owns or weakly references another.

use odr_domain::{Offer, OfferSummary, Request, TypeKey};

/// One offer plus its resolved edges.
pub(crate) struct Node {
    /// The wrapped offer
    pub(crate) offer: Box<dyn Offer>,
    /// Provider node indices bound per request, in provider-index order
    pub(crate) depends_on: Vec<Vec<usize>>,
    /// Nodes whose requests this node was bound to
    pub(crate) dependents: Vec<usize>,
    /// Index of the materialized object, once created
    pub(crate) object: Option<usize>,
}

impl Node {
    pub(crate) fn new(offer: Box<dyn Offer>) -> Self {
        let requests = offer.requests().len();
        Self {
            offer,
            depends_on: vec![Vec::new(); requests],
            dependents: Vec::new(),
            object: None,
        }
    }

    /// A node with no outgoing dependency edges.
    pub(crate) fn is_leaf(&self) -> bool {
        self.depends_on.iter().all(Vec::is_empty)
    }

    pub(crate) fn summary(&self) -> OfferSummary {
        OfferSummary::of(self.offer.as_ref())
    }
}

fn request_for<'r>(offer: &'r dyn Offer, key: &TypeKey) -> Option<&'r Request> {
    offer.requests().iter().find(|request| request.key() == key)
}

/// Strict total order over the providers of `key`; a provider ordered
/// earlier is preferred when edges are bound.
///
/// A provider that does not itself request the contested type cannot be
/// "used up" by another assignment, so it sorts ahead of provider/consumer
/// hybrids. Between two hybrids the one with the larger declared need
/// (greater upper bound, then greater lower bound) sorts first, giving it
/// a better chance of being fulfilled. All remaining ties fall back to
/// arrival order, which keeps the order total and deterministic.
pub(crate) fn ordered_before(nodes: &[Node], a: usize, b: usize, key: &TypeKey) -> bool {
    let request_a = request_for(nodes[a].offer.as_ref(), key);
    let request_b = request_for(nodes[b].offer.as_ref(), key);
    match (request_a, request_b) {
        (None, None) => a < b,
        (None, Some(_)) => true,
        (Some(_), None) => false,
        (Some(request_a), Some(request_b)) => {
            if request_a.upper_bound() != request_b.upper_bound() {
                return request_a.upper_bound() > request_b.upper_bound();
            }
            if request_a.lower_bound() != request_b.lower_bound() {
                return request_a.lower_bound() > request_b.lower_bound();
            }
            a < b
        }
    }
}
