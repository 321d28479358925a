mod error;
mod extra_properties;
mod resolver;
mod schema;
mod schemas;
mod tree;
mod validator;
mod vocabulary;


pub use error::StructuralError;
pub use extra_properties::{ExtraPropertyChecker, RecordReport};
pub use resolver::{HttpProbe, ReferenceProbe, ReferenceResolver};
pub use schema::{SchemaReport, SchemaValidator, Violation};
pub use schemas::get_dataset_schema;
pub use tree::{TreeReport, TreeValidator};
pub use validator::{DatsValidator, ValidationOutcome};
pub use vocabulary::{Requirement, VocabularyRules};
