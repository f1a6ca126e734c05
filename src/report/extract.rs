use tracing::{debug, trace};

use crate::junit::junit_model::Report;
use crate::report::report_model::TestError;

/// Collect every failed/errored case in the report, in document order.
///
/// Levels whose own error and failure counts are both zero are skipped
/// without looking at their children.
pub fn get_test_errors(report: &Report) -> Vec<TestError> {
    if report.counts.is_clean() {
        debug!("report has no errors or failures");
        return Vec::new();
    }

    let mut errors = Vec::new();

    // Suites (e.g. "UITests.xctest")
    for suite in &report.suites {
        if suite.counts.is_clean() {
            trace!(suite = ?suite.name, "skipping clean suite");
            continue;
        }

        // Groups (e.g. "MarketplaceTests")
        for group in &suite.groups {
            if group.counts.is_clean() {
                trace!(group = ?group.name, "skipping clean group");
                continue;
            }

            // Cases (e.g. "testOpenXMLReader")
            for case in &group.cases {
                if let Some(result) = case.result.as_ref().filter(|_| case.is_bad()) {
                    errors.push(TestError::from_case(case, result));
                }
            }
        }
    }

    debug!(count = errors.len(), "extracted test errors");
    errors
}
