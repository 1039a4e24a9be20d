use std::collections::BTreeMap;

use canvas_registry::BlockType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hard cap on the number of blocks in one schema.
pub const MAX_LAYOUT_BLOCKS: usize = 24;

/// Layout schema version produced by this engine.
///
/// The 12-member block type set is frozen for this version; extending it
/// requires a bump.
pub const LAYOUT_SCHEMA_V: u32 = 1;

/// A stable identifier for a block.
pub type BlockId = String;

/// A block's opaque configuration payload.
///
/// Keys are ordered (BTreeMap) so canonical JSON and fingerprints are stable.
pub type BlockData = BTreeMap<String, DataValue>;

/// A primitive configuration value.
///
/// The wire format allows only scalars inside `data`; nested containers are
/// rejected at the trust boundary rather than carried along.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl DataValue {
    /// Convert a JSON value, returning `None` for non-primitive values.
    pub fn from_json(value: &Value) -> Option<DataValue> {
        match value {
            Value::Null => Some(DataValue::Null),
            Value::Bool(b) => Some(DataValue::Bool(*b)),
            Value::Number(n) => Some(DataValue::Number(n.clone())),
            Value::String(s) => Some(DataValue::String(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// A single visual/functional unit of a user's custom page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutBlock {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub title: String,
    /// Always equal to the block's index in `LayoutSchema::blocks`.
    pub position: u32,
    pub visible: bool,
    #[serde(default)]
    pub data: BlockData,
}

/// A page's entire composition as ordered blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSchema {
    pub version: u32,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    pub blocks: Vec<LayoutBlock>,
}

impl LayoutSchema {
    /// Recompute every block's `position` as its index.
    ///
    /// Positions are derived, never trusted from input or carried across
    /// edits; callers run this after any reordering.
    pub fn recompute_positions(&mut self) {
        for (i, b) in self.blocks.iter_mut().enumerate() {
            b.position = i as u32;
        }
    }

    /// Stamp `updatedAt` with the current time.
    pub fn touch(&mut self) {
        self.updated_at = crate::clock::now_rfc3339();
    }

    /// Index of the block with `id`, if present.
    pub fn block_index(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }
}
