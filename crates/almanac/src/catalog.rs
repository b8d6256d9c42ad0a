//! Immutable insight catalog, fully populated at startup
//!
//! The catalog is configuration, not state: it is parsed and validated once
//! and never mutated. There are no create, update, or delete operations.

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::insight::InsightRecord;

/// The embedded reference catalog: six insight records for the year ahead
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

static DEFAULT: Lazy<Catalog> =
  Lazy::new(|| Catalog::from_json(CATALOG_JSON).expect("embedded catalog must be valid"));

/// Ordered, immutable collection of insight records
#[derive(Debug, Clone)]
pub struct Catalog {
  records: Vec<InsightRecord>,
}

impl Catalog {
  /// Build a catalog, enforcing unique ids and non-empty required fields
  pub fn new(records: Vec<InsightRecord>) -> Result<Self> {
    let mut seen = HashSet::new();

    for record in &records {
      record.validate().with_context(|| format!("invalid record '{}'", record.id))?;

      if !seen.insert(record.id.as_str()) {
        bail!("duplicate record id '{}' in catalog", record.id);
      }
    }

    Ok(Self { records })
  }

  /// Parse a catalog from a JSON document
  pub fn from_json(json: &str) -> Result<Self> {
    let records: Vec<InsightRecord> =
      serde_json::from_str(json).context("malformed catalog document")?;
    Self::new(records)
  }

  /// The embedded default catalog, parsed once per process
  pub fn default_catalog() -> &'static Catalog {
    &DEFAULT
  }

  /// Records in their original, stable order
  pub fn records(&self) -> &[InsightRecord] {
    &self.records
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_catalog_has_six_valid_records() {
    let catalog = Catalog::default_catalog();
    assert_eq!(catalog.len(), 6);

    for record in catalog.records() {
      assert!(record.validate().is_ok());
    }
  }

  #[test]
  fn test_default_catalog_ids_are_unique_and_ordered() {
    let ids: Vec<&str> =
      Catalog::default_catalog().records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
  }

  #[test]
  fn test_duplicate_ids_rejected() {
    let json = r#"[
      {"id":"1","title":"A","content":"a","category":"X"},
      {"id":"1","title":"B","content":"b","category":"Y"}
    ]"#;

    let result = Catalog::from_json(json);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("duplicate record id"));
  }

  #[test]
  fn test_empty_required_field_rejected() {
    let json = r#"[{"id":"1","title":"","content":"a","category":"X"}]"#;
    assert!(Catalog::from_json(json).is_err());
  }

  #[test]
  fn test_malformed_document_rejected() {
    let result = Catalog::from_json("{not json");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("malformed catalog document"));
  }
}
