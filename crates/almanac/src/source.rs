//! Insight source abstraction
//!
//! Search is exposed as if it queried a remote service: the production source
//! suspends for a configurable latency before answering from the local
//! catalog. Tests construct it with a zero latency or substitute a mock.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::catalog::Catalog;
use crate::insight::InsightRecord;
use crate::search;

/// Default simulated service latency
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Failure while fetching insights; always recoverable by re-submitting
#[derive(Debug, Error)]
pub enum SourceError {
  /// Abstract transient fault during the fetch step
  #[error("insight source unavailable: {0}")]
  Unavailable(String),
}

/// Where search results come from
#[async_trait]
pub trait InsightSource: Send + Sync {
  /// Answer a query with the matching records, in stable catalog order
  async fn fetch(&self, query: &str) -> Result<Vec<InsightRecord>, SourceError>;
}

/// Production source: the local catalog behind a simulated network delay
pub struct CatalogSource {
  catalog: Catalog,
  latency: Duration,
}

impl CatalogSource {
  /// Wrap a catalog with the default latency
  pub fn new(catalog: Catalog) -> Self {
    Self::with_latency(catalog, DEFAULT_LATENCY)
  }

  /// Wrap a catalog with an explicit latency (zero for tests)
  pub fn with_latency(catalog: Catalog, latency: Duration) -> Self {
    Self { catalog, latency }
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  /// The simulated delay applied before each fetch
  pub fn latency(&self) -> Duration {
    self.latency
  }
}

#[async_trait]
impl InsightSource for CatalogSource {
  async fn fetch(&self, query: &str) -> Result<Vec<InsightRecord>, SourceError> {
    tokio::time::sleep(self.latency).await;

    let results = search::search(query, self.catalog.records());
    debug!(query, count = results.len(), "catalog scan complete");
    Ok(results)
  }
}
