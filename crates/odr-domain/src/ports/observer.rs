//! Observational event sink for resolution progress
//!
//! Observers are purely observational: nothing they do affects control
//! flow. One resolve event fires per dependency edge bound, one create
//! event per successful instantiation in construction order, and one
//! destroy event per teardown in reverse construction order, immediately
//! before the object is dropped.

use crate::ports::{Object, Offer};
use crate::request::Request;

/// Information about one dependency edge being bound.
///
/// A single request may produce many resolve events, one per provider
/// bound to it.
#[derive(Clone, Copy)]
pub struct ResolveEvent<'a> {
    requester: &'a dyn Offer,
    provider: &'a dyn Offer,
    request: &'a Request,
}

impl<'a> ResolveEvent<'a> {
    /// Creates a resolve event.
    pub fn new(requester: &'a dyn Offer, provider: &'a dyn Offer, request: &'a Request) -> Self {
        Self {
            requester,
            provider,
            request,
        }
    }

    /// The offer whose request is being resolved.
    pub fn requester(&self) -> &'a dyn Offer {
        self.requester
    }

    /// The offer bound to provide the requested type.
    pub fn provider(&self) -> &'a dyn Offer {
        self.provider
    }

    /// The request being partially satisfied.
    pub fn request(&self) -> &'a Request {
        self.request
    }
}

/// Information about one object creation.
#[derive(Clone, Copy)]
pub struct CreateEvent<'a> {
    offer: &'a dyn Offer,
    object: &'a dyn Object,
}

impl<'a> CreateEvent<'a> {
    /// Creates a create event.
    pub fn new(offer: &'a dyn Offer, object: &'a dyn Object) -> Self {
        Self { offer, object }
    }

    /// The offer that was fulfilled.
    pub fn offer(&self) -> &'a dyn Offer {
        self.offer
    }

    /// The resulting object.
    pub fn object(&self) -> &'a dyn Object {
        self.object
    }
}

/// Information about one impending object destruction.
#[derive(Clone, Copy)]
pub struct DestroyEvent<'a> {
    object: &'a dyn Object,
}

impl<'a> DestroyEvent<'a> {
    /// Creates a destroy event.
    pub fn new(object: &'a dyn Object) -> Self {
        Self { object }
    }

    /// The object about to be destroyed.
    pub fn object(&self) -> &'a dyn Object {
        self.object
    }
}

/// Receives events from a resolver.
///
/// All methods default to doing nothing, so implementations override only
/// the events they care about.
pub trait ResolverObserver {
    /// Invoked once per dependency edge bound during graph construction.
    fn on_resolve(&mut self, event: ResolveEvent<'_>) {
        let _ = event;
    }

    /// Invoked immediately after an object is created.
    fn on_create(&mut self, event: CreateEvent<'_>) {
        let _ = event;
    }

    /// Invoked immediately before an object is destroyed.
    fn on_destroy(&mut self, event: DestroyEvent<'_>) {
        let _ = event;
    }
}
