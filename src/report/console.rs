use crate::report::report_model::{ErrorSummary, TestError};

// ============================================================================
// Console reporter — plain terminal output
// ============================================================================

pub const ALL_PASSED: &str = "All tests passed.";

/// Format test errors for terminal output.
///
/// Produces output like:
/// ```text
/// There were 1 unique errors/failures (2 total):
///
///
/// MyCareTeamTests/testAddToMyCareTeamButton (2)
/// Failure: 		"No matches found for first match sequence"
/// Location: 	XCUIElement+Extension.swift:122
/// Traceback:
/// t =    14.25s Assertion Failure: XCUIElement+Extension.swift:122: No matches found
///     t =    14.32s Tear Down
/// ```
pub fn format_console_report(errors: &[TestError]) -> String {
    let summary = ErrorSummary::from_errors(errors);
    if summary.all_passed() {
        return format!("{}\n", ALL_PASSED);
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", summary.headline()));

    for unique in &summary.unique {
        let e = &unique.error;
        out.push_str(&format!(
            "\n{name} ({occurrences})\n{error_type}: \t\t\"{message}\"\nLocation: \t{location}\nTraceback:\n{trace}\n\n",
            name = e.name,
            occurrences = unique.occurrences,
            error_type = e.error_type,
            message = e.message,
            location = e.location,
            trace = e.trace,
        ));
    }

    out
}
