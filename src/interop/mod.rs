//! Interoperability with `serde_json`.

mod json;

pub use json::ToJsonSchema;
