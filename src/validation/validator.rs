use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::error::StructuralError;
use super::extra_properties::ExtraPropertyChecker;
use super::schema::{SchemaReport, SchemaValidator};
use super::schemas::get_dataset_schema;
use super::tree::{TreeReport, TreeValidator};
use super::vocabulary::VocabularyRules;

/// Combined result of the two validation passes over one document.
#[derive(Debug, Serialize)]
pub struct ValidationOutcome {
    pub schema: SchemaReport,
    pub properties: TreeReport,
}

impl ValidationOutcome {
    pub fn passed(&self) -> bool {
        self.schema.passed() && self.properties.passed()
    }
}

/// Runs both validation passes — schema conformance and the recursive
/// extra-property check — over the same document.
pub struct DatsValidator {
    schema_validator: SchemaValidator,
    tree_validator: TreeValidator,
}

impl DatsValidator {
    /// Validator over a caller-supplied schema and checker. State is scoped
    /// to this value; independent runs share nothing.
    pub fn new(schema: &Value, checker: ExtraPropertyChecker) -> Result<Self> {
        Ok(Self {
            schema_validator: SchemaValidator::new(schema)?,
            tree_validator: TreeValidator::new(checker),
        })
    }

    /// Validator wired with the bundled dataset schema and the CONP rule
    /// table, without reference checking.
    pub fn bundled() -> Result<Self> {
        let schema = get_dataset_schema().context("Failed to parse bundled dataset schema")?;
        Self::new(&schema, ExtraPropertyChecker::new(VocabularyRules::conp()))
    }

    /// Run both passes. The passes are independent: a schema failure never
    /// suppresses the extra-property report or vice versa. A structural
    /// fault in the document tree aborts with a typed error.
    pub fn validate(&mut self, document: &Value) -> Result<ValidationOutcome, StructuralError> {
        debug!("running schema validation pass");
        let schema = self.schema_validator.validate(document);

        debug!("running extraProperties validation pass");
        let properties = self.tree_validator.check_all(document)?;

        Ok(ValidationOutcome { schema, properties })
    }
}
