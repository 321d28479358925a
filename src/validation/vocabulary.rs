//! The curation rule table: which `extraProperties` categories every dataset
//! record must carry, and which of them draw their values from a controlled
//! vocabulary.

use std::collections::{BTreeMap, BTreeSet};

/// How a required category is enforced.
#[derive(Debug, Clone)]
pub enum Requirement {
    /// The category must be present; any value is accepted.
    PresenceOnly,
    /// The category must be present and every attached value must be a
    /// member of this set.
    AllowedValues(BTreeSet<String>),
}

impl Requirement {
    /// Shorthand for building an `AllowedValues` requirement.
    pub fn allowed<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AllowedValues(values.into_iter().map(Into::into).collect())
    }
}

/// A declarative table of required categories, owned by the validation run
/// that uses it. Categories iterate in name order so error output is stable.
#[derive(Debug, Clone, Default)]
pub struct VocabularyRules {
    rules: BTreeMap<String, Requirement>,
    reference_category: Option<String>,
}

impl VocabularyRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// The CONP curation rules: every dataset carries `files` and `subjects`
    /// counts plus a `CONP_status` drawn from a closed vocabulary, and
    /// `derivedFrom` values are references to other datasets.
    pub fn conp() -> Self {
        Self::new()
            .require("files", Requirement::PresenceOnly)
            .require("subjects", Requirement::PresenceOnly)
            .require(
                "CONP_status",
                Requirement::allowed(["CONP", "Canadian", "external"]),
            )
            .with_reference_category("derivedFrom")
    }

    /// Add a required category.
    pub fn require(mut self, category: impl Into<String>, requirement: Requirement) -> Self {
        self.rules.insert(category.into(), requirement);
        self
    }

    /// Designate the category whose values are URL references to other
    /// datasets. The category itself is optional on a record; its values
    /// are only checked when a resolver is configured.
    pub fn with_reference_category(mut self, category: impl Into<String>) -> Self {
        self.reference_category = Some(category.into());
        self
    }

    pub fn reference_category(&self) -> Option<&str> {
        self.reference_category.as_deref()
    }

    /// Required categories with their requirements, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Requirement)> {
        self.rules.iter().map(|(name, req)| (name.as_str(), req))
    }

    /// The required category names, in name order.
    pub fn required_categories(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}
