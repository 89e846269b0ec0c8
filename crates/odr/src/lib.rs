//! ODR - Offer Dependency Resolver
//!
//! Facade crate: loads a declarative scenario describing a set of offers,
//! resolves it through [`odr_engine::DagResolver`], and reports the
//! construction order (or the full failure report) as text or JSON.
//!
//! A scenario is a TOML file:
//!
//! ```toml
//! [[offers]]
//! name = "config-store"
//! type = "config"
//!
//! [[offers]]
//! name = "http-server"
//! type = "server"
//!
//! [[offers.requests]]
//! type = "config"
//! ```
//!
//! Offers declared this way carry named type identities and produce token
//! objects; the interesting part is the dependency graph between them.

/// Logging bootstrap
pub mod logging;
/// Resolution outcome reporting
pub mod report;
/// Declarative scenario loading
pub mod scenario;

use std::path::Path;

use anyhow::Context;
use odr_domain::{CreateEvent, DestroyEvent, Object, ResolveEvent, ResolverObserver};
use odr_engine::{CountingObserver, DagResolver, QueueOfferSource, TracingObserver};

pub use report::{OutputFormat, ReportError, ResolutionReport};
pub use scenario::{OfferSpec, RequestSpec, Scenario, ScenarioOffer};

/// Logs events while tallying them for the final report.
#[derive(Debug, Default)]
struct RunObserver {
    counting: CountingObserver,
    tracing: TracingObserver,
}

impl ResolverObserver for RunObserver {
    fn on_resolve(&mut self, event: ResolveEvent<'_>) {
        self.counting.on_resolve(event);
        self.tracing.on_resolve(event);
    }

    fn on_create(&mut self, event: CreateEvent<'_>) {
        self.counting.on_create(event);
        self.tracing.on_create(event);
    }

    fn on_destroy(&mut self, event: DestroyEvent<'_>) {
        self.counting.on_destroy(event);
        self.tracing.on_destroy(event);
    }
}

/// Loads and resolves a scenario, printing the outcome in the requested
/// format.
///
/// Returns `Ok(true)` when the scenario resolved, `Ok(false)` when
/// resolution failed (the failure report has been printed), and `Err` for
/// setup problems such as an unreadable scenario file.
pub fn run(scenario_path: &Path, format: OutputFormat) -> anyhow::Result<bool> {
    let scenario = scenario::load(scenario_path)?;
    let mut source = QueueOfferSource::new();
    for spec in &scenario.offers {
        source.add(Box::new(ScenarioOffer::from_spec(spec)?));
    }

    let mut observer = RunObserver::default();
    // The resolver is dropped at the end of this block, which tears the
    // scenario's objects down again; the run exists to exhibit the order
    let outcome = {
        let mut resolver = DagResolver::with_observer(&mut source, &mut observer);
        resolver.resolve().map(|()| {
            resolver
                .objects()
                .map(|object| object.name().to_string())
                .collect::<Vec<String>>()
        })
    };

    match outcome {
        Ok(objects) => {
            let report = ResolutionReport {
                scenario: scenario.name.clone(),
                objects,
                resolves: observer.counting.resolves(),
                creates: observer.counting.creates(),
            };
            println!("{}", report.render(format).context("rendering report")?);
            Ok(true)
        }
        Err(error) => {
            let report = ReportError::from_error(&error);
            eprintln!("{}", report.render(format).context("rendering report")?);
            Ok(false)
        }
    }
}
