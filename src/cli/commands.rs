use std::path::Path;

use tracing::info;

use crate::cli::config::PrintOptions;
use crate::junit::error::ReportError;
use crate::junit::loader::load_report;
use crate::report::extract::get_test_errors;

/// Load the report, print the summary to stdout and return whether all tests passed.
pub fn cmd_print(xml_file: &Path, options: &PrintOptions) -> Result<bool, ReportError> {
    let output = render_report_file(xml_file, options)?;
    print!("{}", output.text);
    Ok(output.error_count == 0)
}

#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub text: String,

    /// Non-deduplicated number of failures and errors
    pub error_count: usize,
}

pub fn render_report_file(xml_file: &Path, options: &PrintOptions) -> Result<RenderedReport, ReportError> {
    let report = load_report(xml_file)?;
    let errors = get_test_errors(&report);
    info!(
        file = %xml_file.display(),
        errors = errors.len(),
        mode = ?options.mode,
        "rendering summary"
    );

    Ok(RenderedReport {
        text: options.mode.render(&errors, options.trace_lines),
        error_count: errors.len(),
    })
}

/// Process exit status for a finished run.
///
/// Load failures exit 1. Finding failures only exits 1 with `fail_on_errors`.
pub fn exit_status(outcome: &Result<bool, ReportError>, fail_on_errors: bool) -> i32 {
    match outcome {
        Ok(true) => 0,
        Ok(false) if fail_on_errors => 1,
        Ok(false) => 0,
        Err(_) => 1,
    }
}

/// `outer: inner: innermost` for printing an error with its sources.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        out.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    out
}
