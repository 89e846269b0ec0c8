//! Structured-logging observer

use odr_domain::{CreateEvent, DestroyEvent, Object, Offer, ResolveEvent, ResolverObserver};
use tracing::info;

/// Logs every resolution event with structured fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TracingObserver {
    /// Creates the observer.
    pub fn new() -> Self {
        Self
    }
}

impl ResolverObserver for TracingObserver {
    fn on_resolve(&mut self, event: ResolveEvent<'_>) {
        info!(
            requester = %event.requester().name(),
            provider = %event.provider().name(),
            request = %event.request(),
            "request resolved"
        );
    }

    fn on_create(&mut self, event: CreateEvent<'_>) {
        info!(
            offer = %event.offer().name(),
            object = %event.object().name(),
            "object created"
        );
    }

    fn on_destroy(&mut self, event: DestroyEvent<'_>) {
        info!(object = %event.object().name(), "object destroyed");
    }
}
