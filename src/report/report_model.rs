use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::junit::junit_model::{Case, CaseResult};
use crate::report::normalize::strip_and_remove_newlines;

// ============================================================================
// TestError — one failing/erroring test case
// ============================================================================

/// A failed or errored test case, flattened for printing.
///
/// Equality and hashing only look at [`TestError::unique_id`], so retried runs
/// of the same failing assertion compare equal.
#[derive(Debug, Clone)]
pub struct TestError {
    /// e.g. "MyCareTeamTests/testRemoveFromMyCareTeam"
    pub name: String,

    /// e.g. "Failure" or "Error"
    pub error_type: String,

    /// e.g. "No matches found for first match sequence"
    pub message: String,

    /// e.g. "XCUIElement+Extension.swift:122"
    pub location: String,

    /// Captured system-out of the case (the XCTest log).
    pub trace: String,
}

impl TestError {
    pub fn from_case(case: &Case, result: &CaseResult) -> Self {
        Self {
            name: format!("{}/{}", case.classname, case.name),
            error_type: result
                .error_type
                .clone()
                .unwrap_or_else(|| result.kind.as_str().to_string()),
            message: result.message.clone().unwrap_or_default(),
            location: strip_and_remove_newlines(result.text.as_deref().unwrap_or_default()),
            trace: strip_and_remove_newlines(case.system_out.as_deref().unwrap_or_default()),
        }
    }

    /// Identity used to fold retries together:
    /// `"MyCareTeamTests/testAddToMyCareTeam:Out of bounds exception"`.
    pub fn unique_id(&self) -> String {
        format!("{}:{}", self.name, self.message)
    }
}

impl PartialEq for TestError {
    fn eq(&self, other: &Self) -> bool {
        self.unique_id() == other.unique_id()
    }
}

impl Eq for TestError {}

impl Hash for TestError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unique_id().hash(state);
    }
}

// ============================================================================
// ErrorSummary — deduplicated view consumed by the renderers
// ============================================================================

#[derive(Debug, Clone)]
pub struct UniqueError {
    pub error: TestError,
    pub occurrences: usize,
}

/// Deduplicated errors in order of first occurrence.
#[derive(Debug, Clone)]
pub struct ErrorSummary {
    /// Length of the original, non-deduplicated list
    pub total: usize,

    pub unique: Vec<UniqueError>,
}

impl ErrorSummary {
    pub fn from_errors(errors: &[TestError]) -> Self {
        let mut by_id: IndexMap<String, UniqueError> = IndexMap::new();
        for error in errors {
            by_id
                .entry(error.unique_id())
                .and_modify(|entry| entry.occurrences += 1)
                .or_insert_with(|| UniqueError {
                    error: error.clone(),
                    occurrences: 1,
                });
        }

        Self {
            total: errors.len(),
            unique: by_id.into_values().collect(),
        }
    }

    pub fn unique_count(&self) -> usize {
        self.unique.len()
    }

    pub fn all_passed(&self) -> bool {
        self.total == 0
    }

    /// `There were N unique errors/failures (M total):`
    pub fn headline(&self) -> String {
        format!(
            "There were {} unique errors/failures ({} total):",
            self.unique_count(),
            self.total
        )
    }
}
