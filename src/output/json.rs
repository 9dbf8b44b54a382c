//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document containing every report field:
//! scan timestamp, totals, flagged entries with their indicator labels, the
//! risk summary, and recommendations.

use crate::report::Report;

/// Formats a [`Report`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid
/// data).
pub fn format(report: &Report) -> String {
    serde_json::to_string_pretty(report).expect("JSON serialization failed")
}
