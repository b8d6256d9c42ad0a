//! Per-session search state machine
//!
//! A session owns its query, the records currently displayed, and a status
//! that is exactly one of idle, searching, or error. Zero matches on a
//! non-empty query are not a fault: the session substitutes the full catalog
//! and records an explanatory notice instead.

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::insight::InsightRecord;
use crate::source::{InsightSource, SourceError};

/// Shown when a non-empty query matched nothing
pub const NO_MATCH_NOTICE: &str =
  "No insights found matching your search. Showing all insights instead.";

/// Shown when the fetch step failed
pub const FETCH_ERROR: &str = "Failed to fetch insights. Please try again.";

/// The only state machine in the system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
  /// Ready for a submission; results reflect the last completed search
  Idle,
  /// A search is pending; new submissions are ignored
  Searching,
  /// The last search failed; previously displayed results are untouched
  Error(String),
}

/// Outcome of offering a query to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
  Accepted,
  /// A search was already pending and the new one was dropped
  Ignored,
}

/// Transient, per-session search state
pub struct SearchSession<S> {
  source: S,
  catalog: Catalog,
  query: String,
  results: Vec<InsightRecord>,
  status: Status,
  notice: Option<String>,
}

impl<S> SearchSession<S> {
  /// Fresh session: no results, no notice, idle
  pub fn new(source: S, catalog: Catalog) -> Self {
    Self {
      source,
      catalog,
      query: String::new(),
      results: Vec::new(),
      status: Status::Idle,
      notice: None,
    }
  }

  pub fn query(&self) -> &str {
    &self.query
  }

  /// Records currently displayed (subset or full catalog)
  pub fn results(&self) -> &[InsightRecord] {
    &self.results
  }

  pub fn status(&self) -> &Status {
    &self.status
  }

  /// Informational message from the zero-match fallback, if any
  pub fn notice(&self) -> Option<&str> {
    self.notice.as_deref()
  }

  pub fn is_searching(&self) -> bool {
    self.status == Status::Searching
  }

  /// Begin a search: `Idle`/`Error` move to `Searching`; a pending search
  /// causes the submission to be ignored
  pub fn begin(&mut self, query: &str) -> Submission {
    if self.is_searching() {
      warn!(query, "search already pending, ignoring submission");
      return Submission::Ignored;
    }

    self.query = query.to_string();
    self.notice = None;
    self.status = Status::Searching;
    Submission::Accepted
  }

  /// Complete the pending search with the fetch outcome
  pub fn complete(&mut self, outcome: Result<Vec<InsightRecord>, SourceError>) {
    if !self.is_searching() {
      warn!("completion received with no search pending");
      return;
    }

    match outcome {
      Ok(matches) => {
        if matches.is_empty() && !self.query.trim().is_empty() {
          // Fallback-to-show-everything: inform the user, display the full
          // catalog, and stay on the happy path
          debug!(query = %self.query, "no matches, substituting full catalog");
          self.notice = Some(NO_MATCH_NOTICE.to_string());
          self.results = self.catalog.records().to_vec();
        } else {
          debug!(query = %self.query, count = matches.len(), "search complete");
          self.results = matches;
        }
        self.status = Status::Idle;
      }
      Err(e) => {
        // Results are deliberately left as they were
        warn!(error = %e, "insight fetch failed");
        self.status = Status::Error(FETCH_ERROR.to_string());
      }
    }
  }
}

impl<S: InsightSource> SearchSession<S> {
  /// Run a full search cycle: begin, fetch through the source, complete
  pub async fn submit(&mut self, query: &str) -> Submission {
    if self.begin(query) == Submission::Ignored {
      return Submission::Ignored;
    }

    let outcome = self.source.fetch(query).await;
    self.complete(outcome);
    Submission::Accepted
  }
}
