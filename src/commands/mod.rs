mod schema;
mod validate;

pub use schema::schema_command;
pub use validate::validate_command;
