//! JSON entrypoints for the wire format.
//!
//! Two doors into the engine:
//! - [`parse_layout_schema_json_str`] is strict: callers that expect
//!   engine-produced state (tooling, CI) get actionable diagnostics
//!   instead of serde's bare "missing field" messages, and structural
//!   invariants are verified after decoding.
//! - [`sanitize_layout_schema_json_str`] is total: any byte string in,
//!   a valid schema out. This is the path persisted state re-enters
//!   through.

use std::fmt;

use canvas_core::model::LayoutSchema;
use canvas_schema::invariants::check_invariants;
use canvas_schema::sanitize::sanitize_layout_schema;
use canvas_schema::seed::LayoutSeed;
use serde::de::Error as _;
use serde_json::Value;

const REQUIRED_TOP_LEVEL_FIELDS: &[&str] = &["version", "updatedAt", "blocks"];

/// A structured error for strictly parsing a layout schema JSON payload.
#[derive(Debug)]
pub enum SchemaJsonError {
    /// The input was not valid JSON.
    InvalidJson(serde_json::Error),
    /// The input JSON was valid, but missing required top-level fields.
    MissingRequiredTopLevelFields {
        missing: Vec<&'static str>,
        required: Vec<&'static str>,
    },
    /// JSON was valid, but did not match the schema shape.
    InvalidSchemaShape(serde_json::Error),
    /// The decoded schema violates a structural invariant.
    InvariantViolation(String),
}

impl fmt::Display for SchemaJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaJsonError::InvalidJson(e) => {
                write!(f, "Invalid JSON: {e}")
            }
            SchemaJsonError::MissingRequiredTopLevelFields { missing, required } => {
                write!(
                    f,
                    "Invalid layout schema JSON: missing required top-level field(s): {}. Required top-level fields: {}.",
                    missing.join(", "),
                    required.join(", ")
                )
            }
            SchemaJsonError::InvalidSchemaShape(e) => {
                // Keep the original serde message (it is often the most
                // specific info available) plus a stable hint.
                write!(
                    f,
                    "Invalid layout schema JSON shape: {e}. Required top-level fields: {}.",
                    REQUIRED_TOP_LEVEL_FIELDS.join(", ")
                )
            }
            SchemaJsonError::InvariantViolation(msg) => {
                write!(f, "Layout schema violates a structural invariant: {msg}")
            }
        }
    }
}

impl std::error::Error for SchemaJsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SchemaJsonError::InvalidJson(e) => Some(e),
            SchemaJsonError::InvalidSchemaShape(e) => Some(e),
            SchemaJsonError::MissingRequiredTopLevelFields { .. } => None,
            SchemaJsonError::InvariantViolation(_) => None,
        }
    }
}

/// Strictly parse a layout schema JSON string.
///
/// Shape errors fail with actionable messages; a shape-valid schema is
/// additionally checked against the structural invariants, so anything
/// this function returns could have been produced by the engine itself.
pub fn parse_layout_schema_json_str(s: &str) -> Result<LayoutSchema, SchemaJsonError> {
    let v: Value = serde_json::from_str(s).map_err(SchemaJsonError::InvalidJson)?;
    let obj = v.as_object().ok_or_else(|| {
        SchemaJsonError::InvalidSchemaShape(serde_json::Error::custom("expected a JSON object"))
    })?;

    let mut missing: Vec<&'static str> = Vec::new();
    for &k in REQUIRED_TOP_LEVEL_FIELDS {
        if !obj.contains_key(k) {
            missing.push(k);
        }
    }
    if !missing.is_empty() {
        return Err(SchemaJsonError::MissingRequiredTopLevelFields {
            missing,
            required: REQUIRED_TOP_LEVEL_FIELDS.to_vec(),
        });
    }

    let schema: LayoutSchema =
        serde_json::from_value(v).map_err(SchemaJsonError::InvalidSchemaShape)?;

    check_invariants(&schema).map_err(SchemaJsonError::InvariantViolation)?;

    Ok(schema)
}

/// Total entrypoint: any input string yields a valid schema.
///
/// Unparseable input degrades to the factory default, exactly as a
/// non-object value would.
pub fn sanitize_layout_schema_json_str(s: &str, seed: Option<&LayoutSeed>) -> LayoutSchema {
    let value: Value = serde_json::from_str(s).unwrap_or(Value::Null);
    sanitize_layout_schema(&value, seed)
}
