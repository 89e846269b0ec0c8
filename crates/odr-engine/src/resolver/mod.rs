//! The dependency graph resolver
//!
//! [`DagResolver`] drains an offer source into a node arena, binds
//! dependency edges through an ordered provider index, verifies every
//! request lands within its bounds, topologically sorts the graph, and
//! fulfills each offer in construction order. Created objects are held
//! until [`DagResolver::clear`] (or drop) destroys them in exactly the
//! reverse of their creation order.
//!
//! Resolution is all-or-nothing: any failure tears down whatever was
//! already created before the error is returned, leaving the resolver
//! indistinguishable from a fresh instance.

mod node;
mod topo;

use std::collections::HashMap;

use odr_domain::{
    CreateEvent, DestroyEvent, Error, Handle, Inputs, Object, Offer, OfferSource, RequestDetails,
    ResolveEvent, ResolverObserver, Result, TypeKey, UnfulfilledEntry, UnfulfilledError,
};
use tracing::{debug, info};

use self::node::{Node, ordered_before};
use self::topo::topological_sort;

/// Resolves offers by forming a directed acyclic graph, topologically
/// sorting it, and constructing every offered object in a valid order.
///
/// The resolver borrows its source (and optional observer) for its whole
/// lifetime; a single resolver instance is strictly single-threaded, as is
/// everything it calls back into.
pub struct DagResolver<'a> {
    source: &'a mut dyn OfferSource,
    observer: Option<&'a mut dyn ResolverObserver>,
    nodes: Vec<Node>,
    provider_index: HashMap<TypeKey, Vec<usize>>,
    objects: Vec<Box<dyn Object>>,
}

impl<'a> DagResolver<'a> {
    /// Creates a resolver over an offer source, with no observer.
    pub fn new(source: &'a mut dyn OfferSource) -> Self {
        Self {
            source,
            observer: None,
            nodes: Vec::new(),
            provider_index: HashMap::new(),
            objects: Vec::new(),
        }
    }

    /// Creates a resolver whose events are delivered to `observer`.
    pub fn with_observer(
        source: &'a mut dyn OfferSource,
        observer: &'a mut dyn ResolverObserver,
    ) -> Self {
        Self {
            source,
            observer: Some(observer),
            nodes: Vec::new(),
            provider_index: HashMap::new(),
            objects: Vec::new(),
        }
    }

    /// Pulls every offer from the source, forms the dependency graph, and
    /// constructs all offered objects in a topologically valid order.
    ///
    /// Any previously held objects are destroyed first. On failure every
    /// object created during this call is destroyed, in reverse creation
    /// order, before the error is returned.
    pub fn resolve(&mut self) -> Result<()> {
        let result = self.try_resolve();
        if result.is_err() {
            self.clear();
        }
        result
    }

    /// Destroys all managed objects, in the reverse of the order in which
    /// they were created. Idempotent.
    pub fn clear(&mut self) {
        while let Some(object) = self.objects.last() {
            if let Some(observer) = self.observer.as_mut() {
                observer.on_destroy(DestroyEvent::new(object.as_ref()));
            }
            debug!(object = %object.name(), "destroying object");
            self.objects.pop();
        }
        for node in &mut self.nodes {
            node.object = None;
        }
    }

    /// The held objects, in creation order.
    pub fn objects(&self) -> impl Iterator<Item = &dyn Object> {
        self.objects.iter().map(|object| &**object)
    }

    /// Number of objects currently held.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    fn try_resolve(&mut self) -> Result<()> {
        self.clear();
        // The arena and index are rebuilt from scratch on every pass
        self.nodes.clear();
        self.provider_index.clear();
        self.collect_offers();
        self.bind_edges();
        self.check_graph()?;
        let order = topological_sort(&self.nodes).map_err(Error::NotADag)?;
        self.instantiate(&order)
    }

    /// Drains the source, creating one node per offer in arrival order and
    /// keeping each provider list sorted under the tie-break ordering as
    /// it grows.
    fn collect_offers(&mut self) {
        while let Some(offer) = self.source.next_offer() {
            let index = self.nodes.len();
            debug!(offer = %offer.name(), index, "collected offer");
            self.nodes.push(Node::new(offer));
            let nodes = &self.nodes;
            for key in nodes[index].offer.provides() {
                let list = self.provider_index.entry(key.clone()).or_default();
                let position =
                    list.partition_point(|&existing| ordered_before(nodes, existing, index, key));
                list.insert(position, index);
            }
        }
        info!(offers = self.nodes.len(), "offer source drained");
    }

    /// Binds dependency edges: for each request, up to `upper_bound`
    /// providers are taken from the contested type's list in order. A node
    /// providing its own requested type starts past its own entry, so it
    /// never satisfies itself.
    fn bind_edges(&mut self) {
        for consumer in 0..self.nodes.len() {
            for request_index in 0..self.nodes[consumer].offer.requests().len() {
                let offer = self.nodes[consumer].offer.as_ref();
                let request = &offer.requests()[request_index];
                let Some(list) = self.provider_index.get(request.key()) else {
                    continue;
                };
                let start = if offer.provides().contains(request.key()) {
                    list.iter().position(|&p| p == consumer).map_or(0, |p| p + 1)
                } else {
                    0
                };
                let available = list.len() - start;
                let take = request.upper_bound().min(available);
                let chosen = list[start..start + take].to_vec();
                for provider in chosen {
                    self.bind(consumer, request_index, provider);
                }
            }
        }
    }

    /// Records one dependency edge and emits its resolve notification.
    fn bind(&mut self, consumer: usize, request_index: usize, provider: usize) {
        self.nodes[provider].dependents.push(consumer);
        self.nodes[consumer].depends_on[request_index].push(provider);
        let requester = self.nodes[consumer].offer.as_ref();
        let provided_by = self.nodes[provider].offer.as_ref();
        let request = &requester.requests()[request_index];
        debug!(
            requester = %requester.name(),
            provider = %provided_by.name(),
            request = %request,
            "bound dependency edge"
        );
        if let Some(observer) = self.observer.as_mut() {
            observer.on_resolve(ResolveEvent::new(requester, provided_by, request));
        }
    }

    /// Verifies that every request's bound provider count lies within its
    /// declared bounds, collecting every violation before failing.
    fn check_graph(&self) -> Result<()> {
        let mut entries = Vec::new();
        for node in &self.nodes {
            let requests: Vec<RequestDetails> = node
                .offer
                .requests()
                .iter()
                .zip(&node.depends_on)
                .enumerate()
                .filter(|(_, (request, providers))| {
                    let count = providers.len();
                    count < request.lower_bound() || count > request.upper_bound()
                })
                .map(|(index, (request, providers))| {
                    let fulfilled_by = providers
                        .iter()
                        .map(|&provider| self.nodes[provider].summary())
                        .collect();
                    RequestDetails::new(index, request, fulfilled_by)
                })
                .collect();
            if !requests.is_empty() {
                entries.push(UnfulfilledEntry {
                    offer: node.summary(),
                    requests,
                });
            }
        }
        if entries.is_empty() {
            Ok(())
        } else {
            Err(UnfulfilledError::new(entries).into())
        }
    }

    /// Fulfills every offer in construction order, delivering each request
    /// group's handles positionally.
    fn instantiate(&mut self, order: &[usize]) -> Result<()> {
        self.objects.reserve(order.len());
        for &index in order {
            // Provider object slots, resolved before fulfillment borrows
            // the node mutably
            let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.nodes[index].depends_on.len());
            for providers in &self.nodes[index].depends_on {
                let mut group = Vec::with_capacity(providers.len());
                for &provider in providers {
                    let slot =
                        self.nodes[provider]
                            .object
                            .ok_or_else(|| Error::ConstructionOrder {
                                provider: self.nodes[provider].offer.name().to_string(),
                            })?;
                    group.push(slot);
                }
                groups.push(group);
            }
            let object = {
                let objects = &self.objects;
                let handles: Vec<Vec<Handle<'_>>> = groups
                    .iter()
                    .map(|group| group.iter().map(|&slot| objects[slot].handle()).collect())
                    .collect();
                self.nodes[index].offer.fulfill(Inputs::new(&handles))?
            };
            let slot = self.objects.len();
            self.objects.push(object);
            self.nodes[index].object = Some(slot);
            info!(object = %self.objects[slot].name(), "created object");
            if let Some(observer) = self.observer.as_mut() {
                observer.on_create(CreateEvent::new(
                    self.nodes[index].offer.as_ref(),
                    self.objects[slot].as_ref(),
                ));
            }
        }
        Ok(())
    }
}

impl Drop for DagResolver<'_> {
    /// Destroys all managed objects, in the reverse of the order in which
    /// they were created.
    fn drop(&mut self) {
        self.clear();
    }
}
