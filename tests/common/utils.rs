#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Write an XML report to a temp file that lives as long as the returned handle.
pub fn write_report(xml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(xml.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Wrap test cases in the AllTests > Suite > Group layout with the given counts.
pub fn single_group_report(errors: u64, failures: u64, cases: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites name="AllTests" errors="{errors}" failures="{failures}">
  <testsuite name="UITests.xctest" errors="{errors}" failures="{failures}">
    <testsuite name="Group" errors="{errors}" failures="{failures}">
{cases}
    </testsuite>
  </testsuite>
</testsuites>
"#
    )
}
