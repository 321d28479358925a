use anyhow::{Context, Result};

use datsval::validation::get_dataset_schema;

pub fn schema_command() -> Result<()> {
    let schema = get_dataset_schema().context("Failed to parse bundled dataset schema")?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
