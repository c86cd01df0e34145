//! Common test utilities and constants
//!
//! Shared functionality used across all test modules.

use async_trait::async_trait;
use galsearch::error::{Error, Result};
use galsearch::prelude::*;
use std::time::Duration;

#[allow(dead_code)]
pub const TEST_TIMEOUT: Duration = Duration::from_secs(30);
#[allow(dead_code)]
pub const TEST_QUERY: &str = "clannad";

/// Installs a per-test subscriber so swallowed source failures show up when
/// running with `--nocapture`. Safe to call from every test.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Builds a minimal search result for aggregation tests.
#[allow(dead_code)]
pub fn result(name: &str, link: &str, source: SearchSource) -> SearchResult {
    SearchResult {
        name: name.to_string(),
        link: link.to_string(),
        source,
        tags: vec![],
        rating: None,
    }
}

/// A source that returns a fixed result list, for deterministic aggregation
/// tests without the network.
#[allow(dead_code)]
pub struct StaticSource {
    pub id: &'static str,
    pub results: Vec<SearchResult>,
}

#[async_trait]
impl Source for StaticSource {
    fn id(&self) -> &'static str {
        self.id
    }

    fn name(&self) -> &'static str {
        self.id
    }

    fn base_url(&self) -> &str {
        "https://example.com"
    }

    async fn search(&self, _params: SearchParams) -> Result<Vec<SearchResult>> {
        Ok(self.results.clone())
    }
}

/// A source whose every search fails, simulating an outage or timeout.
#[allow(dead_code)]
pub struct FailingSource {
    pub id: &'static str,
}

#[async_trait]
impl Source for FailingSource {
    fn id(&self) -> &'static str {
        self.id
    }

    fn name(&self) -> &'static str {
        self.id
    }

    fn base_url(&self) -> &str {
        "https://unreachable.example.com"
    }

    async fn search(&self, _params: SearchParams) -> Result<Vec<SearchResult>> {
        Err(Error::source(self.id, "simulated outage"))
    }
}
