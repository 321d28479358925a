//! Business-rule checks over one record's `extraProperties`.
//!
//! This check is deliberately local: it looks at a single record and never
//! at its children. Recursion over `hasPart` belongs to the tree validator,
//! which keeps the two concerns independently testable.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::error::StructuralError;
use super::resolver::ReferenceResolver;
use super::vocabulary::{Requirement, VocabularyRules};

/// Result of checking one record. Passed iff no errors were appended.
#[derive(Debug, Default, Serialize)]
pub struct RecordReport {
    pub errors: Vec<String>,
}

impl RecordReport {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates a record's `extraProperties` against the rule table, and
/// optionally resolves values under the designated reference category.
///
/// Errors within one record are reported in a fixed order: missing
/// categories first, then disallowed vocabulary values, then unresolved
/// references.
pub struct ExtraPropertyChecker {
    rules: VocabularyRules,
    resolver: Option<ReferenceResolver>,
}

impl ExtraPropertyChecker {
    pub fn new(rules: VocabularyRules) -> Self {
        Self {
            rules,
            resolver: None,
        }
    }

    /// Enable liveness checks for the reference category. The resolver's
    /// cache lives as long as this checker, so one validation run performs
    /// at most one probe per unique reference.
    pub fn with_resolver(mut self, resolver: ReferenceResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Check one record. A record without `extraProperties` is a structural
    /// fault, not a failed validation: the rule set cannot be evaluated
    /// against it at all.
    pub fn check(&mut self, record: &Value) -> Result<RecordReport, StructuralError> {
        let object = record.as_object().ok_or_else(|| StructuralError::NotAnObject {
            context: "dataset record".to_string(),
        })?;

        let title = record_title(object).ok_or_else(|| StructuralError::MissingTitle {
            context: "dataset record".to_string(),
        })?;

        let Some(extra) = object.get("extraProperties") else {
            return Err(StructuralError::MissingExtraProperties {
                title: title.to_string(),
                categories: self
                    .rules
                    .required_categories()
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        };

        let entries = extra
            .as_array()
            .ok_or_else(|| malformed(title, "'extraProperties' is not an array"))?;

        let categories = collect_categories(title, entries)?;
        let mut errors = Vec::new();

        // Required categories
        for category in self.rules.required_categories() {
            if !categories.contains_key(category) {
                errors.push(format!(
                    "dataset '{title}': required extraProperties category '{category}' is not found"
                ));
            }
        }

        // Controlled vocabularies
        for (category, requirement) in self.rules.iter() {
            let Requirement::AllowedValues(allowed) = requirement else {
                continue;
            };
            let Some(values) = categories.get(category) else {
                continue;
            };
            for value in values {
                if !allowed.contains(value) {
                    let allowed_list = allowed
                        .iter()
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(", ");
                    errors.push(format!(
                        "dataset '{title}': '{value}' is not an allowed value for \
                         '{category}' (allowed values: {allowed_list})"
                    ));
                }
            }
        }

        // Reference liveness (only when a resolver is configured)
        if let Some(resolver) = self.resolver.as_mut()
            && let Some(category) = self.rules.reference_category()
            && let Some(references) = categories.get(category)
        {
            for reference in references {
                if !resolver.resolves(reference) {
                    errors.push(format!(
                        "dataset '{title}': '{category}' reference '{reference}' \
                         does not resolve to a live resource"
                    ));
                }
            }
        }

        Ok(RecordReport { errors })
    }
}

/// The record's `title`, which anchors every error message.
pub(crate) fn record_title(object: &Map<String, Value>) -> Option<&str> {
    object.get("title").and_then(Value::as_str)
}

/// Build the category -> attached values mapping from the raw entries.
/// Repeated entries for one category accumulate their values.
fn collect_categories(
    title: &str,
    entries: &[Value],
) -> Result<BTreeMap<String, Vec<String>>, StructuralError> {
    let mut categories: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for entry in entries {
        let entry = entry
            .as_object()
            .ok_or_else(|| malformed(title, "entry is not an object"))?;

        let category = entry
            .get("category")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed(title, "entry has no 'category' string"))?;

        let values = categories.entry(category.to_string()).or_default();

        // An entry with no values still marks its category as present.
        let Some(attached) = entry.get("values") else {
            continue;
        };
        let attached = attached.as_array().ok_or_else(|| {
            malformed(title, &format!("'values' of category '{category}' is not an array"))
        })?;

        for item in attached {
            let item = item.as_object().ok_or_else(|| {
                malformed(title, &format!("value entry of category '{category}' is not an object"))
            })?;
            let Some(value) = item.get("value") else {
                continue;
            };
            let text = scalar_text(value).ok_or_else(|| {
                malformed(title, &format!("non-scalar value under category '{category}'"))
            })?;
            values.push(text);
        }
    }

    Ok(categories)
}

/// Values compare as text: annotation values are strings or numbers.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn malformed(title: &str, detail: &str) -> StructuralError {
    StructuralError::MalformedExtraProperties {
        title: title.to_string(),
        detail: detail.to_string(),
    }
}
