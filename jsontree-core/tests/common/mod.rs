//! Shared test infrastructure: sample documents and proptest strategies.

#![allow(dead_code, unused_imports)]

mod generators;

pub use generators::{arb_document, arb_key, arb_number, arb_string, arb_tree};

/// The document from the demo program.
pub const SAMPLE: &str =
    r#"{"test": { "number": 45.54545, "string": "hi there!" }, "boolean": true }"#;
