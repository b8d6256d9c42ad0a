//! Pure substring search over insight records
//!
//! A linear, order-preserving scan: no ranking, no token splitting, no
//! normalization beyond lowercasing.

use crate::insight::InsightRecord;

/// Filter records by a free-text query.
///
/// An empty (or whitespace-only) query returns the full input unchanged.
/// Otherwise a record is kept when the lowercased query occurs as a substring
/// of its title, content, category, or any bullet item. Only emptiness is
/// evaluated on the trimmed query; matching uses the raw input.
pub fn search(query: &str, records: &[InsightRecord]) -> Vec<InsightRecord> {
  if query.trim().is_empty() {
    return records.to_vec();
  }

  let needle = query.to_lowercase();
  records.iter().filter(|record| record.matches(&needle)).cloned().collect()
}
