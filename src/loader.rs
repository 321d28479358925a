//! File-system glue: reads DATS documents and schema definitions into
//! in-memory JSON trees for the validation passes.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Read and parse a DATS document.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read DATS document: {path:?}"))?;

    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON from: {path:?}"))
}

/// Read and parse a schema definition supplied on the command line in place
/// of the bundled one.
pub fn load_schema(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file: {path:?}"))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse schema JSON from: {path:?}"))
}
