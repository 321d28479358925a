use serde_json::Value;

// Embed the dataset schema at compile time
const DATASET_SCHEMA: &str = include_str!("../../schemas/dataset_schema.json");

/// The bundled DATS dataset schema, used when no `--schema` override is given.
pub fn get_dataset_schema() -> Result<Value, serde_json::Error> {
    serde_json::from_str(DATASET_SCHEMA)
}
