//! Unit tests for scenario loading and scenario offers
//!
//! Uses file-backed scenarios via tempfile, then drives loaded scenarios
//! through the real resolver.

use std::io::Write;

use odr::scenario::{self, ScenarioOffer};
use odr_domain::{Error, Object, Offer, TypeKey, UNBOUNDED};
use odr_engine::{DagResolver, QueueOfferSource};

fn write_scenario(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write scenario");
    file
}

// =============================================================================
// Loading
// =============================================================================

/// A scenario file parses with defaults applied per request.
#[test]
fn test_load_scenario_with_defaults() {
    let file = write_scenario(
        r#"
name = "demo"

[[offers]]
name = "config-store"
type = "config"

[[offers]]
name = "http-server"
type = "server"

[[offers.requests]]
type = "config"
"#,
    );
    let scenario = scenario::load(file.path()).expect("scenario loads");
    assert_eq!(scenario.name.as_deref(), Some("demo"));
    assert_eq!(scenario.offers.len(), 2);
    let server = &scenario.offers[1];
    assert_eq!(server.requests.len(), 1);
    assert_eq!(server.requests[0].lower, 1);

    let offer = ScenarioOffer::from_spec(server).expect("offer builds");
    assert_eq!(offer.requests()[0].lower_bound(), 1);
    assert_eq!(offer.requests()[0].upper_bound(), 1);
}

/// A missing scenario file is a setup error.
#[test]
fn test_load_missing_file_fails() {
    let error = scenario::load(std::path::Path::new("/nonexistent/scenario.toml"))
        .expect_err("file does not exist");
    assert!(error.to_string().contains("not found"));
}

/// The "unbounded" keyword maps to the unbounded sentinel; other keywords
/// are rejected.
#[test]
fn test_upper_bound_keyword() {
    let file = write_scenario(
        r#"
[[offers]]
name = "collector"

[[offers.requests]]
type = "worker"
lower = 0
upper = "unbounded"
"#,
    );
    let scenario = scenario::load(file.path()).expect("scenario loads");
    let offer = ScenarioOffer::from_spec(&scenario.offers[0]).expect("offer builds");
    assert_eq!(offer.requests()[0].upper_bound(), UNBOUNDED);

    let bad = write_scenario(
        r#"
[[offers]]
name = "collector"

[[offers.requests]]
type = "worker"
upper = "several"
"#,
    );
    let scenario = scenario::load(bad.path()).expect("scenario loads");
    let error = ScenarioOffer::from_spec(&scenario.offers[0]).err().expect("keyword is invalid");
    assert!(error.to_string().contains("collector"));
}

// =============================================================================
// Scenario offers
// =============================================================================

/// An offer without a type is a void sink; declared tags still count as
/// provided identities.
#[test]
fn test_sink_and_capability_tags() {
    let file = write_scenario(
        r#"
[[offers]]
name = "audit-log"
provides = ["observer"]
"#,
    );
    let scenario = scenario::load(file.path()).expect("scenario loads");
    let offer = ScenarioOffer::from_spec(&scenario.offers[0]).expect("offer builds");
    assert!(offer.type_key().is_void());
    assert!(offer.provides().contains(&TypeKey::named("observer")));
}

/// A loaded scenario resolves end to end, providers first.
#[test]
fn test_scenario_resolves_through_engine() {
    let file = write_scenario(
        r#"
name = "pipeline"

[[offers]]
name = "sink"

[[offers.requests]]
type = "queue"

[[offers]]
name = "queue"
type = "queue"

[[offers.requests]]
type = "config"

[[offers]]
name = "settings"
type = "config"
"#,
    );
    let scenario = scenario::load(file.path()).expect("scenario loads");
    let mut source = QueueOfferSource::new();
    for spec in &scenario.offers {
        source.add(Box::new(ScenarioOffer::from_spec(spec).expect("offer builds")));
    }
    let mut resolver = DagResolver::new(&mut source);
    resolver.resolve().expect("scenario resolves");
    let order: Vec<&str> = resolver.objects().map(|object| object.name()).collect();
    let position = |name: &str| order.iter().position(|n| *n == name).expect("in order");
    assert!(position("settings") < position("queue"));
    assert!(position("queue") < position("sink"));
}

/// A scenario with a dependency loop reports the cycle.
#[test]
fn test_cyclic_scenario_fails() {
    let file = write_scenario(
        r#"
[[offers]]
name = "chicken"
type = "chicken"

[[offers.requests]]
type = "egg"

[[offers]]
name = "egg"
type = "egg"

[[offers.requests]]
type = "chicken"
"#,
    );
    let scenario = scenario::load(file.path()).expect("scenario loads");
    let mut source = QueueOfferSource::new();
    for spec in &scenario.offers {
        source.add(Box::new(ScenarioOffer::from_spec(spec).expect("offer builds")));
    }
    let mut resolver = DagResolver::new(&mut source);
    match resolver.resolve().expect_err("scenario is cyclic") {
        Error::NotADag(not_a_dag) => assert_eq!(not_a_dag.cycles.len(), 1),
        other => panic!("expected not-a-dag error, got: {other}"),
    }
}
