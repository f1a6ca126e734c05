use crate::report::console::ALL_PASSED;
use crate::report::normalize::last_lines;
use crate::report::report_model::{ErrorSummary, TestError};

// ============================================================================
// Markdown reporter — Slack-friendly quote + code block output
// ============================================================================

/// Trailing trace lines kept per error unless configured otherwise.
pub const DEFAULT_TRACE_LINES: usize = 5;

/// Format test errors as chat markdown, keeping only the tail of each trace.
///
/// ```text
/// >*MyCareTeamTests/testAddToMyCareTeamButton (1)*
/// >XCUIElement+Extension.swift:122 ("No matches found for first match sequence")
/// >```t =    14.25s Assertion Failure: ...
///     t =    14.32s Tear Down```
/// ```
pub fn format_markdown_report(errors: &[TestError], trace_lines: usize) -> String {
    let summary = ErrorSummary::from_errors(errors);
    if summary.all_passed() {
        return format!("{}\n", ALL_PASSED);
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", summary.headline()));

    for unique in &summary.unique {
        let e = &unique.error;
        out.push_str(&format!(
            ">*{name} ({occurrences})*\n>{location} (\"{message}\")\n>```{trace}```\n\n",
            name = e.name,
            occurrences = unique.occurrences,
            location = e.location,
            message = e.message,
            trace = last_lines(&e.trace, trace_lines),
        ));
    }

    out
}
