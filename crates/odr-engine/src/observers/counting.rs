//! Event-tallying observer

use odr_domain::{CreateEvent, DestroyEvent, ResolveEvent, ResolverObserver};

/// Counts how many of each resolution event has fired.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingObserver {
    resolves: usize,
    creates: usize,
    destroys: usize,
}

impl CountingObserver {
    /// Creates an observer with all counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resolve events observed.
    pub fn resolves(&self) -> usize {
        self.resolves
    }

    /// Number of create events observed.
    pub fn creates(&self) -> usize {
        self.creates
    }

    /// Number of destroy events observed.
    pub fn destroys(&self) -> usize {
        self.destroys
    }
}

impl ResolverObserver for CountingObserver {
    fn on_resolve(&mut self, _event: ResolveEvent<'_>) {
        self.resolves += 1;
    }

    fn on_create(&mut self, _event: CreateEvent<'_>) {
        self.creates += 1;
    }

    fn on_destroy(&mut self, _event: DestroyEvent<'_>) {
        self.destroys += 1;
    }
}
