//! Declarative scenario loading
//!
//! A scenario is a TOML description of a set of offers: names, the type
//! identities they provide, and the bounded requests they make. Loading
//! merges defaults, the scenario file, and `ODR_`-prefixed environment
//! variables through Figment, in that order.
//!
//! Scenario offers carry named [`TypeKey`]s and produce token objects;
//! they exist to exercise dependency graphs, not to compute anything.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use odr_domain::{
    Error, Inputs, Object, Offer, Request, Result as DomainResult, TypeKey, UNBOUNDED,
};
use odr_engine::{InPlaceObject, VoidObject};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment variable prefix for scenario overrides
const ENV_PREFIX: &str = "ODR_";

/// A full scenario: a name plus the offers to resolve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Optional display name, echoed in reports
    #[serde(default)]
    pub name: Option<String>,
    /// The offers, in submission order
    #[serde(default)]
    pub offers: Vec<OfferSpec>,
}

/// One declared offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferSpec {
    /// Display name of the offer
    pub name: String,
    /// Provided type identity; omit for a pure sink
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    /// Additional provided identities (capability tags)
    #[serde(default)]
    pub provides: Vec<String>,
    /// Bounded requests, in delivery order
    #[serde(default)]
    pub requests: Vec<RequestSpec>,
}

/// One declared request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Requested type identity
    #[serde(rename = "type")]
    pub type_name: String,
    /// Inclusive lower bound; defaults to 1
    #[serde(default = "default_bound")]
    pub lower: usize,
    /// Inclusive upper bound; a count, or the keyword `"unbounded"`.
    /// Defaults to 1
    #[serde(default)]
    pub upper: Option<UpperBound>,
}

/// Upper bound of a request: a count or the `"unbounded"` keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UpperBound {
    /// Explicit inclusive count
    Count(usize),
    /// A keyword; only `"unbounded"` is accepted
    Keyword(String),
}

fn default_bound() -> usize {
    1
}

impl RequestSpec {
    fn to_request(&self) -> anyhow::Result<Request> {
        let upper = match &self.upper {
            None => 1,
            Some(UpperBound::Count(count)) => *count,
            Some(UpperBound::Keyword(keyword)) if keyword == "unbounded" => UNBOUNDED,
            Some(UpperBound::Keyword(keyword)) => {
                bail!("invalid upper bound {keyword:?}: expected a count or \"unbounded\"")
            }
        };
        Ok(Request::bounded(
            TypeKey::named(self.type_name.as_str()),
            self.lower,
            upper,
        ))
    }
}

/// Loads a scenario, merging defaults, the TOML file, and environment
/// overrides (later sources win).
pub fn load(path: &Path) -> anyhow::Result<Scenario> {
    if !path.exists() {
        bail!("scenario file not found: {}", path.display());
    }
    let scenario: Scenario = Figment::new()
        .merge(Serialized::defaults(Scenario::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("_"))
        .extract()
        .with_context(|| format!("failed to load scenario from {}", path.display()))?;
    info!(
        scenario = scenario.name.as_deref().unwrap_or("unnamed"),
        offers = scenario.offers.len(),
        path = %path.display(),
        "scenario loaded"
    );
    Ok(scenario)
}

/// Token value produced by fulfilled scenario offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioArtifact {
    /// Name of the offer that produced this token
    pub offer: String,
}

/// An [`Offer`] built from an [`OfferSpec`].
///
/// Provides its declared named identity (plus tags), requests its declared
/// types, and produces a [`ScenarioArtifact`] token when fulfilled - or a
/// void object when declared as a sink.
pub struct ScenarioOffer {
    name: String,
    key: TypeKey,
    provides: HashSet<TypeKey>,
    requests: Vec<Request>,
    fulfilled: bool,
}

impl ScenarioOffer {
    /// Builds the offer, validating request bounds.
    pub fn from_spec(spec: &OfferSpec) -> anyhow::Result<Self> {
        let key = spec
            .type_name
            .as_deref()
            .map_or_else(TypeKey::void, TypeKey::named);
        let mut provides: HashSet<TypeKey> = if key.is_void() {
            HashSet::new()
        } else {
            HashSet::from([key.clone()])
        };
        for tag in &spec.provides {
            provides.insert(TypeKey::named(tag.as_str()));
        }
        let requests = spec
            .requests
            .iter()
            .map(RequestSpec::to_request)
            .collect::<anyhow::Result<Vec<Request>>>()
            .with_context(|| format!("offer {:?}", spec.name))?;
        Ok(Self {
            name: spec.name.clone(),
            key,
            provides,
            requests,
            fulfilled: false,
        })
    }
}

impl Offer for ScenarioOffer {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_key(&self) -> &TypeKey {
        &self.key
    }

    fn provides(&self) -> &HashSet<TypeKey> {
        &self.provides
    }

    fn requests(&self) -> &[Request] {
        &self.requests
    }

    fn fulfill(&mut self, _inputs: Inputs<'_>) -> DomainResult<Box<dyn Object>> {
        if self.fulfilled {
            return Err(Error::AlreadyFulfilled {
                offer: self.name.clone(),
            });
        }
        self.fulfilled = true;
        if self.key.is_void() {
            Ok(Box::new(VoidObject::with_provides(
                self.name.clone(),
                self.provides.clone(),
            )))
        } else {
            Ok(Box::new(InPlaceObject::with_parts(
                self.name.clone(),
                self.key.clone(),
                self.provides.clone(),
                ScenarioArtifact {
                    offer: self.name.clone(),
                },
            )))
        }
    }
}
