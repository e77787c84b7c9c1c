//! JSON serialization of measurement reports.

use crate::report::Report;

/// Serialize a `Report` to a compact JSON object keyed by metric wire names.
pub fn to_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

/// Serialize a `Report` to pretty-printed JSON.
pub fn to_json_pretty(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
