use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

// Use JSON Schema draft-07 for validation (stable and well-tested)
use jsonschema::draft7 as schema_draft;

/// One schema constraint the document failed, located by its path from the
/// document root. An empty path means the violation is at the root itself.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Result of the schema conformance pass. Passed iff no violations.
#[derive(Debug, Default, Serialize)]
pub struct SchemaReport {
    pub violations: Vec<Violation>,
}

impl SchemaReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks a document against a schema definition, reporting every violation
/// in one pass rather than stopping at the first.
pub struct SchemaValidator {
    validator: jsonschema::Validator,
}

impl SchemaValidator {
    /// Compile a schema definition. Format assertions (`date`, `uri`, ...)
    /// are enforced, matching how curated DATS documents are checked.
    pub fn new(schema: &Value) -> Result<Self> {
        let validator = schema_draft::options()
            .should_validate_formats(true)
            .build(schema)
            .context("Failed to compile dataset schema")?;

        Ok(Self { validator })
    }

    /// Collect all violations for `document`. Produces no side effects; the
    /// caller decides how to log or print the report.
    pub fn validate(&self, document: &Value) -> SchemaReport {
        let violations = self
            .validator
            .iter_errors(document)
            .map(|error| Violation {
                path: error.instance_path.to_string(),
                message: error.to_string(),
            })
            .collect();

        SchemaReport { violations }
    }
}
