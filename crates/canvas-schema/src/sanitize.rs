//! The trust boundary: any JSON value in, a structurally valid schema out.
//!
//! Persisted state is treated as hostile. Every field is normalized
//! independently, unknown block types are rejected rather than guessed, and
//! `position` is never read from input. The function is total and
//! idempotent: sanitizing a sanitized schema is a deep-equality no-op.

use std::collections::HashSet;

use canvas_core::clock::now_rfc3339;
use canvas_core::id::fresh_id;
use canvas_core::model::{
    BlockData, DataValue, LayoutBlock, LayoutSchema, LAYOUT_SCHEMA_V, MAX_LAYOUT_BLOCKS,
};
use canvas_core::text::canonicalize_title;
use canvas_registry::BlockType;
use serde_json::Value;

use crate::factory::{create_default_layout_schema, new_block};
use crate::report::SanitizeReport;
use crate::seed::LayoutSeed;

/// Convert arbitrary untrusted data into a valid schema.
///
/// Never panics. The `seed` is only consulted when the input is unusable
/// enough to require a full factory default.
pub fn sanitize_layout_schema(input: &Value, seed: Option<&LayoutSeed>) -> LayoutSchema {
    sanitize_layout_schema_with_report(input, seed).0
}

/// [`sanitize_layout_schema`] plus a deterministic repair report.
pub fn sanitize_layout_schema_with_report(
    input: &Value,
    seed: Option<&LayoutSeed>,
) -> (LayoutSchema, SanitizeReport) {
    let mut report = SanitizeReport::default();

    let Some(obj) = input.as_object() else {
        report.replaced_with_default = true;
        return (create_default_layout_schema(seed), report);
    };

    let version = match normalize_version(obj.get("version")) {
        Some(v) => v,
        None => {
            report.version_repaired = true;
            LAYOUT_SCHEMA_V
        }
    };

    let updated_at = match obj.get("updatedAt").and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => {
            report.updated_at_stamped = true;
            now_rfc3339()
        }
    };

    let candidates = obj
        .get("blocks")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut blocks: Vec<LayoutBlock> = Vec::new();

    for candidate in candidates {
        let Some(fields) = candidate.as_object() else {
            report.blocks_dropped_not_object += 1;
            continue;
        };

        let block_type = fields
            .get("type")
            .and_then(Value::as_str)
            .and_then(BlockType::parse);
        let Some(block_type) = block_type else {
            report.blocks_dropped_unknown_type += 1;
            continue;
        };

        let id = match fields.get("id").and_then(Value::as_str) {
            Some(raw) => {
                let trimmed = raw.trim();
                if !trimmed.is_empty() && !seen_ids.contains(trimmed) {
                    trimmed.to_string()
                } else {
                    report.ids_regenerated += 1;
                    unseen_fresh_id(block_type, &seen_ids)
                }
            }
            None => {
                report.ids_regenerated += 1;
                unseen_fresh_id(block_type, &seen_ids)
            }
        };
        seen_ids.insert(id.clone());

        let title = match fields.get("title").and_then(Value::as_str) {
            Some(raw) if !raw.trim().is_empty() => canonicalize_title(raw),
            _ => {
                report.titles_defaulted += 1;
                block_type.title().to_string()
            }
        };

        let visible = fields.get("visible").map_or(true, truthy);

        let mut data = BlockData::new();
        if let Some(Value::Object(entries)) = fields.get("data") {
            for (key, value) in entries {
                match DataValue::from_json(value) {
                    Some(primitive) => {
                        data.insert(key.clone(), primitive);
                    }
                    None => report.data_entries_dropped += 1,
                }
            }
        }

        // Input `position` is discarded; positions are recomputed below.
        blocks.push(LayoutBlock {
            id,
            block_type,
            title,
            position: 0,
            visible,
            data,
        });
    }

    if blocks.len() > MAX_LAYOUT_BLOCKS {
        report.blocks_truncated = blocks.len() - MAX_LAYOUT_BLOCKS;
        blocks.truncate(MAX_LAYOUT_BLOCKS);
    }

    // A page without a link list is almost always corruption; restore one
    // when capacity permits. At the 24-block cap nothing is appended.
    let has_links = blocks.iter().any(|b| b.block_type == BlockType::Links);
    if !has_links && blocks.len() < MAX_LAYOUT_BLOCKS {
        report.links_block_appended = true;
        blocks.push(new_block(BlockType::Links));
    }

    // Unreachable as long as the links fallback above can fire on an empty
    // list; kept as the final guarantee that a schema never leaves this
    // function empty.
    if blocks.is_empty() {
        report.replaced_with_default = true;
        blocks = create_default_layout_schema(seed).blocks;
    }

    let mut schema = LayoutSchema {
        version,
        updated_at,
        blocks,
    };
    schema.recompute_positions();
    (schema, report)
}

/// Accept a finite numeric `version` (number or numeric string) that rounds
/// to at least 1.
fn normalize_version(value: Option<&Value>) -> Option<u32> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    if !parsed.is_finite() {
        return None;
    }
    let rounded = parsed.round();
    if rounded < 1.0 {
        return None;
    }
    // Saturating float-to-int cast keeps absurd inputs finite and stable.
    Some(rounded as u32)
}

/// JS-style truthiness, the coercion the wire format historically applied.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0 && !x.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn unseen_fresh_id(block_type: BlockType, seen: &HashSet<String>) -> String {
    let mut id = fresh_id(block_type);
    while seen.contains(&id) {
        id = fresh_id(block_type);
    }
    id
}
