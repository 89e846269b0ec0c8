//! Chained sources

use std::collections::VecDeque;

use odr_domain::{Offer, OfferSource};

/// An offer source that drains a sequence of other sources in order.
///
/// Each inner source is pulled until it signals end, then discarded; the
/// composite is exhausted when its last source is.
#[derive(Default)]
pub struct CompositeOfferSource {
    sources: VecDeque<Box<dyn OfferSource>>,
}

impl CompositeOfferSource {
    /// Creates a composite with no inner sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source; it is drained after every source added before it.
    pub fn add(&mut self, source: Box<dyn OfferSource>) {
        self.sources.push_back(source);
    }
}

impl OfferSource for CompositeOfferSource {
    fn next_offer(&mut self) -> Option<Box<dyn Offer>> {
        while let Some(source) = self.sources.front_mut() {
            if let Some(offer) = source.next_offer() {
                return Some(offer);
            }
            self.sources.pop_front();
        }
        None
    }
}
