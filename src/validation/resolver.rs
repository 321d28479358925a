//! Liveness checking for dataset references.
//!
//! A reference is a URL-like identifier attached to a record (e.g. a
//! `derivedFrom` value pointing at another dataset). Resolution is a soft,
//! point-in-time check: a 2xx response means the reference is live, anything
//! else — error status, unreachable host, timeout, malformed URL — means it
//! is dead. No outcome is ever a fault.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// User agent string for probe requests.
const USER_AGENT: &str = concat!("datsval/", env!("CARGO_PKG_VERSION"));

/// Bound on a single probe so one dead host cannot stall a validation run.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// A single existence probe. Implemented over HTTP in production and by
/// substitutes in tests.
pub trait ReferenceProbe {
    /// Returns true when the identifier points at a live resource.
    fn probe(&self, identifier: &str) -> bool;
}

/// Probe backed by a blocking HTTP GET.
pub struct HttpProbe {
    client: reqwest::blocking::Client,
}

impl HttpProbe {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(PROBE_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client for reference probes")?;

        Ok(Self { client })
    }
}

impl ReferenceProbe for HttpProbe {
    fn probe(&self, identifier: &str) -> bool {
        match self.client.get(identifier).send() {
            Ok(response) => response.status().is_success(),
            Err(error) => {
                debug!("probe for {identifier} failed: {error}");
                false
            }
        }
    }
}

/// Resolves references with at most one probe per unique identifier.
///
/// The cache lives and dies with the resolver: construct a fresh one per
/// validation run. Caching only reduces the number of external calls; it
/// never changes a validation outcome.
pub struct ReferenceResolver {
    probe: Box<dyn ReferenceProbe>,
    cache: HashMap<String, bool>,
}

impl ReferenceResolver {
    /// Resolver backed by real HTTP probes.
    pub fn http() -> Result<Self> {
        Ok(Self::with_probe(Box::new(HttpProbe::new()?)))
    }

    /// Resolver backed by a caller-supplied probe. Tests use this to count
    /// calls without touching the network.
    pub fn with_probe(probe: Box<dyn ReferenceProbe>) -> Self {
        Self {
            probe,
            cache: HashMap::new(),
        }
    }

    /// Whether `identifier` resolves to a live resource. Cache hits return
    /// the stored outcome without any external call.
    pub fn resolves(&mut self, identifier: &str) -> bool {
        if let Some(&known) = self.cache.get(identifier) {
            return known;
        }

        let live = self.probe.probe(identifier);
        self.cache.insert(identifier.to_string(), live);
        live
    }
}
