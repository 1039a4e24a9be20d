#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the Canvas layout engine.

Do NOT depend on this crate directly.
Use `canvas-io` instead.
"#]

pub mod clock;
pub mod id;
pub mod model;
pub mod text;
