//! Summarize failing and erroring test cases from Bluepill JUnit XML reports.
//!
//! Bluepill retries failed iOS UI tests, so the same assertion failure can
//! show up several times in one report. The pipeline here loads the report
//! ([`junit::loader`]), pulls out failing cases ([`report::extract`]),
//! folds retries together ([`report::report_model::ErrorSummary`]) and renders
//! the result for a terminal or for chat markdown.

pub mod cli;
pub mod junit;
pub mod report;
pub mod trace;
