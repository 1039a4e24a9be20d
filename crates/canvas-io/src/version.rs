//! Wire format and schema version constants used for conformance gating.

/// Layout schema version supported by this crate.
///
/// This corresponds to the `version` field stamped on factory-built
/// schemas and used by the sanitizer as its fallback.
pub use canvas_core::model::LAYOUT_SCHEMA_V;

/// Hard cap on the number of blocks in one schema.
pub use canvas_core::model::MAX_LAYOUT_BLOCKS;

/// JSON Schema bundle version for on-disk schemas under `spec/schemas/`.
///
/// Bump this if the schema constraints change (even if the layout schema
/// version stays the same).
pub const SCHEMA_BUNDLE_V: u8 = 1;
