use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::error::StructuralError;
use super::extra_properties::{ExtraPropertyChecker, record_title};

/// Nesting bound for the `hasPart` descent. Dataset trees in the wild are a
/// few levels deep; anything past this is treated as malformed input rather
/// than recursed into.
const MAX_DEPTH: usize = 128;

/// Aggregate result over a whole dataset tree. Passed iff every visited
/// record individually passed; errors concatenate in visit order.
#[derive(Debug, Default, Serialize)]
pub struct TreeReport {
    pub errors: Vec<String>,
    pub records_checked: usize,
}

impl TreeReport {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Walks a dataset record and all of its `hasPart` descendants, running the
/// extra-property check on each.
///
/// Visit order is depth-first pre-order with children in declaration order,
/// so a record's errors always precede its children's. There is no early
/// exit: a failure at the root must not suppress checking of descendants,
/// since the point of this pass is a complete report.
pub struct TreeValidator {
    checker: ExtraPropertyChecker,
}

impl TreeValidator {
    pub fn new(checker: ExtraPropertyChecker) -> Self {
        Self { checker }
    }

    /// Check `root` and every nested sub-dataset.
    pub fn check_all(&mut self, root: &Value) -> Result<TreeReport, StructuralError> {
        let mut report = TreeReport::default();
        self.walk(root, "document root", 0, &mut report)?;
        Ok(report)
    }

    fn walk(
        &mut self,
        record: &Value,
        context: &str,
        depth: usize,
        report: &mut TreeReport,
    ) -> Result<(), StructuralError> {
        if depth >= MAX_DEPTH {
            return Err(StructuralError::DepthLimitExceeded { limit: MAX_DEPTH });
        }

        let object = record
            .as_object()
            .ok_or_else(|| StructuralError::NotAnObject {
                context: context.to_string(),
            })?;

        let record_report = self.checker.check(record)?;
        debug!(
            "checked {context}: {} error(s)",
            record_report.errors.len()
        );
        report.records_checked += 1;
        report.errors.extend(record_report.errors);

        let Some(children) = object.get("hasPart") else {
            return Ok(());
        };

        // The checker has already established that a title is present.
        let title = record_title(object).unwrap_or_default();
        let children = children
            .as_array()
            .ok_or_else(|| StructuralError::MalformedHasPart {
                title: title.to_string(),
            })?;

        for (index, child) in children.iter().enumerate() {
            let child_context = format!("hasPart[{index}] of dataset '{title}'");
            self.walk(child, &child_context, depth + 1, report)?;
        }

        Ok(())
    }
}
