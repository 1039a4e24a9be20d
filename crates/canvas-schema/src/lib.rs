#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the Canvas layout engine.

Do NOT depend on this crate directly.
Use `canvas-io` instead.
"#]

pub mod factory;
pub mod invariants;
pub mod report;
pub mod sanitize;
pub mod seed;

pub use factory::{create_default_layout_schema, new_block, DEFAULT_BLOCK_ORDER};
pub use invariants::check_invariants;
pub use report::SanitizeReport;
pub use sanitize::{sanitize_layout_schema, sanitize_layout_schema_with_report};
pub use seed::{LayoutSeed, MonetizationSeed};
