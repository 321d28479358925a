use thiserror::Error;

/// A document shape problem that prevents the extra-property rules from
/// being evaluated at all. Distinct from an ordinary validation failure:
/// a failed check still produces a report, a structural fault aborts the
/// tree pass.
#[derive(Error, Debug)]
pub enum StructuralError {
    /// A node reached through `hasPart` (or the root itself) is not a JSON
    /// object and therefore cannot be a dataset record.
    #[error("{context} is not a JSON object, expected a dataset record")]
    NotAnObject {
        /// Where in the tree the node was found.
        context: String,
    },

    /// A dataset record has no `title` string to report errors against.
    #[error("{context} has no 'title' string")]
    MissingTitle { context: String },

    /// The record carries no `extraProperties` at all, so none of the
    /// required categories can be checked.
    #[error(
        "dataset '{title}' has no 'extraProperties'. \
         The following extraProperties categories are required: {categories}"
    )]
    MissingExtraProperties { title: String, categories: String },

    /// An `extraProperties` entry does not have the category/values shape.
    #[error("dataset '{title}' has a malformed 'extraProperties' entry: {detail}")]
    MalformedExtraProperties { title: String, detail: String },

    /// `hasPart` is present but is not an array of records.
    #[error("dataset '{title}' has a 'hasPart' that is not an array")]
    MalformedHasPart { title: String },

    /// The `hasPart` nesting exceeds the supported depth.
    #[error("dataset tree exceeds the maximum nesting depth of {limit}")]
    DepthLimitExceeded { limit: usize },
}
