use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use tracing::{error, info};

use datsval::loader;
use datsval::validation::{
    DatsValidator, ExtraPropertyChecker, ReferenceResolver, ValidationOutcome, VocabularyRules,
    get_dataset_schema,
};

pub fn validate_command(
    file: &str,
    schema_path: Option<&str>,
    check_references: bool,
    json: bool,
) -> Result<()> {
    let document = loader::load_document(Path::new(file))?;

    let schema = match schema_path {
        Some(path) => loader::load_schema(Path::new(path))?,
        None => get_dataset_schema().context("Failed to parse bundled dataset schema")?,
    };

    let mut checker = ExtraPropertyChecker::new(VocabularyRules::conp());
    if check_references {
        checker = checker.with_resolver(ReferenceResolver::http()?);
    }

    let mut validator = DatsValidator::new(&schema, checker)?;
    let outcome = validator
        .validate(&document)
        .with_context(|| format!("{file} is not a well-formed DATS document"))?;

    if json {
        // Machine-readable mode: stdout carries the report and nothing else.
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        report(&outcome);
        if outcome.passed() {
            println!("\n{}", "✅ All validations passed!".green());
        }
    }

    if outcome.passed() {
        Ok(())
    } else {
        anyhow::bail!("Validation failed for {file} (see errors above)");
    }
}

fn report(outcome: &ValidationOutcome) {
    if outcome.schema.passed() {
        info!("JSON schema validation passed.");
    } else {
        info!(
            "The file is not valid. Total errors: {}",
            outcome.schema.violations.len()
        );
        for (i, violation) in outcome.schema.violations.iter().enumerate() {
            error!("{} Validation error in {violation}", i + 1);
        }
        info!("JSON schema validation failed.");
    }

    if outcome.properties.passed() {
        info!(
            "Required extra properties validation passed for {} dataset(s).",
            outcome.properties.records_checked
        );
    } else {
        info!(
            "Total extra properties errors: {}",
            outcome.properties.errors.len()
        );
        for (i, message) in outcome.properties.errors.iter().enumerate() {
            error!("{} {message}", i + 1);
        }
    }
}
