//! Resolution outcome reporting
//!
//! Successful runs report the construction order and event counts; failed
//! runs report the full failure (every unfulfilled entry or every cycle).
//! Both shapes render as human-readable text or as JSON.

use clap::ValueEnum;
use odr_domain::{Error, NotADagError, UnfulfilledError};
use serde::Serialize;

/// Output rendering selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// One JSON document
    Json,
}

/// Report of a successful resolution.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionReport {
    /// Scenario name, when the scenario declared one
    pub scenario: Option<String>,
    /// Object names in construction order
    pub objects: Vec<String>,
    /// Number of dependency edges bound
    pub resolves: usize,
    /// Number of objects created
    pub creates: usize,
}

impl ResolutionReport {
    /// Renders the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => {
                let mut out = String::new();
                if let Some(name) = &self.scenario {
                    out.push_str(&format!("scenario: {name}\n"));
                }
                out.push_str(&format!(
                    "resolved {} objects over {} dependencies\n",
                    self.creates, self.resolves
                ));
                for (position, object) in self.objects.iter().enumerate() {
                    out.push_str(&format!("{:>4}. {object}\n", position + 1));
                }
                out.pop();
                Ok(out)
            }
        }
    }
}

/// Report of a failed resolution.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportError {
    /// At least one request fell outside its bounds
    Unfulfilled(UnfulfilledError),
    /// The dependency graph contains cycles
    NotADag(NotADagError),
    /// Any other failure, rendered as a message
    Other {
        /// Rendering of the failure
        message: String,
    },
}

impl ReportError {
    /// Classifies a resolution error for reporting.
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::Unfulfilled(unfulfilled) => ReportError::Unfulfilled(unfulfilled.clone()),
            Error::NotADag(not_a_dag) => ReportError::NotADag(not_a_dag.clone()),
            other => ReportError::Other {
                message: other.to_string(),
            },
        }
    }

    /// Renders the failure in the requested format.
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(match self {
                ReportError::Unfulfilled(unfulfilled) => unfulfilled.to_string(),
                ReportError::NotADag(not_a_dag) => not_a_dag.to_string(),
                ReportError::Other { message } => message.clone(),
            }),
        }
    }
}
