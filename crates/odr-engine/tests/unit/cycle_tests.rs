//! Unit tests for cycle detection
//!
//! A graph that is not a DAG fails with every cycle enumerated and no
//! object created.

use odr_domain::{Error, NotADagError, Request};
use odr_engine::{DagResolver, FunctionOffer, QueueOfferSource, ValueOffer};

struct Alpha;
struct Beta;
struct Gamma;
struct Delta;

fn expect_not_a_dag(error: Error) -> NotADagError {
    match error {
        Error::NotADag(not_a_dag) => not_a_dag,
        other => panic!("expected not-a-dag error, got: {other}"),
    }
}

fn cycle_names(not_a_dag: &NotADagError, index: usize) -> Vec<&str> {
    not_a_dag.cycles[index]
        .offers
        .iter()
        .map(|offer| offer.name.as_str())
        .collect()
}

/// Two mutually dependent offers form exactly one two-element cycle.
#[test]
fn test_mutual_dependency_is_one_cycle() {
    let mut source = QueueOfferSource::new();
    source.add(
        FunctionOffer::new("alpha", |_inputs| Ok(Alpha))
            .with_request(Request::of::<Beta>())
            .boxed(),
    );
    source.add(
        FunctionOffer::new("beta", |_inputs| Ok(Beta))
            .with_request(Request::of::<Alpha>())
            .boxed(),
    );

    let mut resolver = DagResolver::new(&mut source);
    let not_a_dag = expect_not_a_dag(resolver.resolve().expect_err("graph is cyclic"));
    assert_eq!(not_a_dag.cycles.len(), 1);
    let mut names = cycle_names(&not_a_dag, 0);
    names.sort_unstable();
    assert_eq!(names, ["alpha", "beta"]);
    assert_eq!(resolver.object_count(), 0);
}

/// A three-offer loop is reported as one three-element cycle.
#[test]
fn test_three_element_cycle() {
    let mut source = QueueOfferSource::new();
    source.add(
        FunctionOffer::new("alpha", |_inputs| Ok(Alpha))
            .with_request(Request::of::<Beta>())
            .boxed(),
    );
    source.add(
        FunctionOffer::new("beta", |_inputs| Ok(Beta))
            .with_request(Request::of::<Gamma>())
            .boxed(),
    );
    source.add(
        FunctionOffer::new("gamma", |_inputs| Ok(Gamma))
            .with_request(Request::of::<Alpha>())
            .boxed(),
    );

    let mut resolver = DagResolver::new(&mut source);
    let not_a_dag = expect_not_a_dag(resolver.resolve().expect_err("graph is cyclic"));
    assert_eq!(not_a_dag.cycles.len(), 1);
    assert_eq!(not_a_dag.cycles[0].offers.len(), 3);
}

/// Two independent loops are both enumerated.
#[test]
fn test_independent_cycles_all_reported() {
    let mut source = QueueOfferSource::new();
    source.add(
        FunctionOffer::new("alpha", |_inputs| Ok(Alpha))
            .with_request(Request::of::<Beta>())
            .boxed(),
    );
    source.add(
        FunctionOffer::new("beta", |_inputs| Ok(Beta))
            .with_request(Request::of::<Alpha>())
            .boxed(),
    );
    source.add(
        FunctionOffer::new("gamma", |_inputs| Ok(Gamma))
            .with_request(Request::of::<Delta>())
            .boxed(),
    );
    source.add(
        FunctionOffer::new("delta", |_inputs| Ok(Delta))
            .with_request(Request::of::<Gamma>())
            .boxed(),
    );

    let mut resolver = DagResolver::new(&mut source);
    let not_a_dag = expect_not_a_dag(resolver.resolve().expect_err("graph is cyclic"));
    assert_eq!(not_a_dag.cycles.len(), 2);
    let mut first = cycle_names(&not_a_dag, 0);
    first.sort_unstable();
    let mut second = cycle_names(&not_a_dag, 1);
    second.sort_unstable();
    let mut pairs = [first, second];
    pairs.sort();
    assert_eq!(pairs[0], ["alpha", "beta"]);
    assert_eq!(pairs[1], ["delta", "gamma"]);
}

/// A cycle poisons the whole resolution even when an unrelated component
/// would have resolved on its own.
#[test]
fn test_cycle_fails_resolution_despite_healthy_component() {
    let mut source = QueueOfferSource::new();
    source.add(ValueOffer::new("standalone", 1u32).boxed());
    source.add(
        FunctionOffer::new("alpha", |_inputs| Ok(Alpha))
            .with_request(Request::of::<Beta>())
            .boxed(),
    );
    source.add(
        FunctionOffer::new("beta", |_inputs| Ok(Beta))
            .with_request(Request::of::<Alpha>())
            .boxed(),
    );

    let mut resolver = DagResolver::new(&mut source);
    let not_a_dag = expect_not_a_dag(resolver.resolve().expect_err("graph is cyclic"));
    assert_eq!(not_a_dag.cycles.len(), 1);
    assert_eq!(resolver.object_count(), 0);
}

/// The rendered report closes each loop on its first offer.
#[test]
fn test_cycle_report_rendering() {
    let mut source = QueueOfferSource::new();
    source.add(
        FunctionOffer::new("alpha", |_inputs| Ok(Alpha))
            .with_request(Request::of::<Beta>())
            .boxed(),
    );
    source.add(
        FunctionOffer::new("beta", |_inputs| Ok(Beta))
            .with_request(Request::of::<Alpha>())
            .boxed(),
    );

    let mut resolver = DagResolver::new(&mut source);
    let error = resolver.resolve().expect_err("graph is cyclic");
    let rendered = error.to_string();
    assert!(rendered.contains("not a directed acyclic graph"));
    assert!(rendered.contains(" => "));
}
