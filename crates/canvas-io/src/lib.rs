//! `canvas-io` is the single supported public entrypoint for the Canvas
//! layout schema engine: the wire types, the schema factory and sanitizer,
//! the ordered block operations, and deterministic helpers (canonical JSON,
//! fingerprints, strict parsing).
//!
//! This crate intentionally contains **no** rendering, storage, or network
//! logic. Those belong to external collaborators. `canvas-io` focuses on:
//! - stable types
//! - the sanitizing trust boundary
//! - pure, order-preserving edit operations
//! - canonical JSON and fingerprint hashing

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `canvas_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may
// change without notice.

// Re-export the canonical layout model.
#[doc(hidden)]
pub mod core {
    pub use canvas_core::clock::{now_rfc3339, unix_millis};
    pub use canvas_core::id::fresh_id;
    pub use canvas_core::model::{BlockData, BlockId, DataValue, LayoutBlock, LayoutSchema};
    pub use canvas_core::text::canonicalize_title;
}

// Re-export the closed block type set.
#[doc(hidden)]
pub mod registry {
    pub use canvas_registry::{is_block_type, title_for, BlockType, UnknownBlockType};
}

/// Deterministic JSON canonicalization helpers.
///
/// These utilities are used for stable fingerprints and storage keys.
pub mod canonical_json;

/// Fingerprint helpers over canonical JSON.
pub mod hashing;

/// Strict and lenient JSON entrypoints for the wire format.
pub mod schema_json;

/// Version constants for wire conformance and CI gating.
pub mod version;

// Re-export factory + sanitizer + invariants.
#[doc(hidden)]
pub mod schema {
    pub use canvas_schema::factory::{create_default_layout_schema, new_block, DEFAULT_BLOCK_ORDER};
    pub use canvas_schema::invariants::check_invariants;
    pub use canvas_schema::report::SanitizeReport;
    pub use canvas_schema::sanitize::{sanitize_layout_schema, sanitize_layout_schema_with_report};
    pub use canvas_schema::seed::{
        is_music_platform, is_social_platform, LayoutSeed, MonetizationSeed,
    };
}

// Re-export the ordered block operations.
#[doc(hidden)]
pub mod ops {
    pub use canvas_ops::edit::{
        duplicate_block, insert_block, move_block, shift_block, ShiftDirection,
    };
}

/// Convenience prelude for consumers.
///
/// This is the **only supported** import surface for external users.
pub mod prelude {
    pub use crate::core::{BlockData, BlockId, DataValue, LayoutBlock, LayoutSchema};
    pub use crate::ops::{duplicate_block, insert_block, move_block, shift_block, ShiftDirection};
    pub use crate::registry::{is_block_type, title_for, BlockType};
    pub use crate::schema::{
        check_invariants, create_default_layout_schema, new_block, sanitize_layout_schema,
        sanitize_layout_schema_with_report, LayoutSeed, MonetizationSeed, SanitizeReport,
    };
    pub use crate::schema_json::{
        parse_layout_schema_json_str, sanitize_layout_schema_json_str, SchemaJsonError,
    };
    pub use crate::{canonical_json, hashing};
}
