//! Insight record model

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One displayable unit of content: title, body, category, and optional
/// bullet facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightRecord {
  /// Opaque unique identifier, stable for the record's lifetime
  pub id: String,

  /// Short display string
  pub title: String,

  /// Paragraph-length display string
  pub content: String,

  /// Single classification label
  pub category: String,

  /// Optional ordered bullet facts; may be absent or empty
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub items: Option<Vec<String>>,
}

/// Violation of the record invariants
#[derive(Debug, Error)]
pub enum InvalidRecord {
  #[error("record has an empty id")]
  EmptyId,

  #[error("record '{id}' has an empty {field} field")]
  EmptyField { id: String, field: &'static str },
}

impl InsightRecord {
  /// Check the non-empty invariants: id, title, content, and category must
  /// all carry text
  pub fn validate(&self) -> Result<(), InvalidRecord> {
    if self.id.trim().is_empty() {
      return Err(InvalidRecord::EmptyId);
    }

    for (field, value) in [
      ("title", &self.title),
      ("content", &self.content),
      ("category", &self.category),
    ] {
      if value.trim().is_empty() {
        return Err(InvalidRecord::EmptyField { id: self.id.clone(), field });
      }
    }

    Ok(())
  }

  /// True when the lowercased needle occurs as a substring of any searchable
  /// projection: title, content, category, or any bullet item
  pub fn matches(&self, needle_lower: &str) -> bool {
    self.title.to_lowercase().contains(needle_lower)
      || self.content.to_lowercase().contains(needle_lower)
      || self.category.to_lowercase().contains(needle_lower)
      || self
        .items
        .as_deref()
        .map_or(false, |items| items.iter().any(|item| item.to_lowercase().contains(needle_lower)))
  }
}
