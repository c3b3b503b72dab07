//! Salvage parsing of model output
//!
//! The upstream model is untrusted: prose-wrapped JSON, code fences, missing
//! keys, and invalid enum values are all expected. Parsing extracts as many
//! valid records as possible and never fails; a malformed response degrades
//! to an empty batch, a malformed record is dropped alone.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::types::BugReport;

/// First `[` through last `]`, greedily, across the whole text.
///
/// This tolerates models that wrap the array in prose or fences. It is
/// knowingly heuristic: an unrelated bracket before the payload or after it
/// widens the candidate and the decode then falls back to an empty batch.
static JSON_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("valid regex"));

/// Convert raw model output into validated bug reports.
///
/// Always returns a (possibly empty) batch, preserving the model's record
/// order. Individual records that fail validation are skipped.
pub fn parse_model_output(raw: &str) -> Vec<BugReport> {
    let candidate = JSON_ARRAY
        .find(raw)
        .map(|found| found.as_str())
        .unwrap_or_else(|| raw.trim());

    let items = match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            warn!("model output decoded to a non-array JSON value");
            return Vec::new();
        }
        Err(err) => {
            warn!("failed to decode model output as JSON: {}", err);
            return Vec::new();
        }
    };

    let mut bugs = Vec::with_capacity(items.len());
    for item in &items {
        match BugReport::from_model_value(item) {
            Some(bug) => bugs.push(bug),
            None => debug!("skipping invalid bug entry: {}", item),
        }
    }
    bugs
}
