//! The unit of supply
//!
//! An offer encapsulates a possible future object: the types it requires
//! first, and the types it will provide once those requirements are
//! fulfilled. Offers are immutable once created, except that fulfillment
//! consumes whatever state produces the object and is therefore
//! at-most-once in normal use.

use std::collections::HashSet;
use std::rc::Rc;

use crate::error::Result;
use crate::handle::Inputs;
use crate::key::TypeKey;
use crate::ports::Object;
use crate::request::Request;

/// A description of a not-yet-created object.
///
/// For a set of offers to resolve, at least one offer must have no
/// requirements; any cycle in the dependency graph makes a construction
/// order impossible.
pub trait Offer {
    /// Human-readable name. Often a rendering of the offered type, but
    /// source information may be more useful.
    fn name(&self) -> &str;

    /// Identity of the type this offer will provide if fulfilled.
    ///
    /// The void identity marks a pure sink: an offer that only requests
    /// and provides nothing usable downstream.
    fn type_key(&self) -> &TypeKey;

    /// Every type identity this offer will provide if fulfilled.
    ///
    /// Includes [`Offer::type_key`] unless the offer is void, plus any
    /// capability tags declared at construction.
    fn provides(&self) -> &HashSet<TypeKey>;

    /// The requirements of this offer, in the order their resolved
    /// objects are delivered at fulfillment. Empty when the offer is
    /// available immediately.
    fn requests(&self) -> &[Request];

    /// Fulfills the offer, producing a uniquely owned object.
    ///
    /// `inputs` holds one handle group per request, positional. Group
    /// sizes lie within the corresponding request's bounds; the resolver
    /// verifies this before fulfilling anything.
    fn fulfill(&mut self, inputs: Inputs<'_>) -> Result<Box<dyn Object>>;

    /// Fulfills the offer, producing a shared-ownership object.
    fn fulfill_shared(&mut self, inputs: Inputs<'_>) -> Result<Rc<dyn Object>> {
        Ok(Rc::from(self.fulfill(inputs)?))
    }
}
