//! Shared test doubles for the engine suites

use odr_domain::{CreateEvent, DestroyEvent, Object, Offer, ResolveEvent, ResolverObserver};

/// Records one line per resolution event, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<String>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResolverObserver for RecordingObserver {
    fn on_resolve(&mut self, event: ResolveEvent<'_>) {
        self.events.push(format!(
            "resolve {} <- {}",
            event.requester().name(),
            event.provider().name()
        ));
    }

    fn on_create(&mut self, event: CreateEvent<'_>) {
        self.events.push(format!("create {}", event.object().name()));
    }

    fn on_destroy(&mut self, event: DestroyEvent<'_>) {
        self.events.push(format!("destroy {}", event.object().name()));
    }
}
