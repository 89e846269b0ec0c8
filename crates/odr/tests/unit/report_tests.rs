//! Unit tests for resolution reports

use odr::report::{OutputFormat, ReportError, ResolutionReport};
use odr_domain::{Cycle, Error, NotADagError, OfferSummary};

fn sample_report() -> ResolutionReport {
    ResolutionReport {
        scenario: Some("demo".to_string()),
        objects: vec!["settings".to_string(), "queue".to_string()],
        resolves: 1,
        creates: 2,
    }
}

fn sample_cycle_error() -> Error {
    Error::NotADag(NotADagError::new(vec![Cycle {
        offers: vec![
            OfferSummary {
                name: "chicken".to_string(),
                type_name: "chicken".to_string(),
            },
            OfferSummary {
                name: "egg".to_string(),
                type_name: "egg".to_string(),
            },
        ],
    }]))
}

/// The text report lists objects in construction order.
#[test]
fn test_text_report_lists_order() {
    let rendered = sample_report()
        .render(OutputFormat::Text)
        .expect("report renders");
    assert!(rendered.contains("scenario: demo"));
    assert!(rendered.contains("resolved 2 objects over 1 dependencies"));
    let settings = rendered.find("settings").expect("settings listed");
    let queue = rendered.find("queue").expect("queue listed");
    assert!(settings < queue);
}

/// The JSON report round-trips the order and counts.
#[test]
fn test_json_report_shape() {
    let rendered = sample_report()
        .render(OutputFormat::Json)
        .expect("report renders");
    let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
    assert_eq!(value["scenario"], "demo");
    assert_eq!(value["objects"][0], "settings");
    assert_eq!(value["creates"], 2);
}

/// Failure reports carry the error kind and full detail in JSON.
#[test]
fn test_json_failure_report() {
    let report = ReportError::from_error(&sample_cycle_error());
    let rendered = report.render(OutputFormat::Json).expect("report renders");
    let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
    assert_eq!(value["kind"], "not_a_dag");
    assert_eq!(value["cycles"][0]["offers"][0]["name"], "chicken");
}

/// Failure reports render the same text as the underlying error.
#[test]
fn test_text_failure_report() {
    let error = sample_cycle_error();
    let report = ReportError::from_error(&error);
    let rendered = report.render(OutputFormat::Text).expect("report renders");
    assert_eq!(rendered, error.to_string());
    assert!(rendered.contains("chicken => egg => chicken"));
}
