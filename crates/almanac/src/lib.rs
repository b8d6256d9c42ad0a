//! Almanac - New Year 2026 Insights
//!
//! A single-view browser over a fixed catalog of insight records, with
//! free-text substring search. The catalog is immutable and fully populated
//! at startup; search is exposed as if it queried a remote service, with a
//! simulated latency that tests replace with zero.

pub mod catalog;
pub mod insight;
pub mod search;
pub mod session;
pub mod source;
pub mod view;
