//! Deterministic JSON canonicalization.
//!
//! The goal is stable bytes for fingerprints and storage keys:
//! - object keys are sorted lexicographically
//! - arrays preserve order (block order is meaningful)
//! - output is minified JSON with no extra whitespace
//!
//! Notes:
//! - The wire format keeps numbers inside `data` as serde_json sees them;
//!   no float normalization is applied beyond serde_json's own formatting.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Convert a serializable value to canonical JSON bytes.
///
/// Canonicalization rules:
/// - JSON objects are deep-sorted by key
/// - arrays preserve order (block order is meaningful)
/// - scalars are unchanged
/// - output is minified JSON
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let canon = canonicalize_value(serde_json::to_value(value)?);
    serde_json::to_vec(&canon)
}

/// Convert a serializable value to a canonical JSON string.
pub fn to_canonical_json_string<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let bytes = to_canonical_json_bytes(value)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn canonicalize_value(v: Value) -> Value {
    match v {
        Value::Object(map) => {
            // Route entries through a BTreeMap to sort keys at every depth.
            let sorted: BTreeMap<String, Value> = map
                .into_iter()
                .map(|(k, v)| (k, canonicalize_value(v)))
                .collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize_value).collect()),
        scalar => scalar,
    }
}
