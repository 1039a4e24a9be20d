//! Structural invariant checks. Strict and fail-fast.
//!
//! The sanitizer guarantees these by construction; this checker exists for
//! strict parsing, the CLI `validate` path, and property tests.

use std::collections::HashSet;

use canvas_core::model::{LayoutSchema, MAX_LAYOUT_BLOCKS};
use canvas_registry::BlockType;

/// Validate every structural invariant of a schema.
///
/// Rules:
/// - `version` must be ≥ 1
/// - `updatedAt` must be non-empty
/// - the block list must be non-empty and at most 24 entries
/// - block ids must be unique and non-empty
/// - `position` must equal the block's index
/// - a `links` block must be present unless the list is at capacity
pub fn check_invariants(schema: &LayoutSchema) -> Result<(), String> {
    if schema.version < 1 {
        return Err(format!("version {} is below the minimum of 1", schema.version));
    }
    if schema.updated_at.is_empty() {
        return Err("updatedAt is empty".to_string());
    }
    if schema.blocks.is_empty() {
        return Err("schema has no blocks".to_string());
    }
    if schema.blocks.len() > MAX_LAYOUT_BLOCKS {
        return Err(format!(
            "schema has {} blocks (maximum is {MAX_LAYOUT_BLOCKS})",
            schema.blocks.len()
        ));
    }

    let mut seen = HashSet::new();
    for (i, block) in schema.blocks.iter().enumerate() {
        if block.id.is_empty() {
            return Err(format!("blocks[{i}] has an empty id"));
        }
        if !seen.insert(block.id.as_str()) {
            return Err(format!("duplicate block id '{}'", block.id));
        }
        if block.position as usize != i {
            return Err(format!(
                "blocks[{i}] position {} does not match its index",
                block.position
            ));
        }
    }

    let has_links = schema
        .blocks
        .iter()
        .any(|b| b.block_type == BlockType::Links);
    if !has_links && schema.blocks.len() < MAX_LAYOUT_BLOCKS {
        return Err("schema has no links block and is below capacity".to_string());
    }

    Ok(())
}
