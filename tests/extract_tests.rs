use bluepill_report::junit::loader::{load_report, parse_report};
use bluepill_report::report::extract::get_test_errors;
use bluepill_report::report::report_model::ErrorSummary;

use crate::common::utils::{fixture, single_group_report};

mod common;

// ============================================================================
// 1. Walk order and filtering
// ============================================================================

#[test]
fn extracts_failures_and_errors_in_document_order() {
    let report = load_report(fixture("bluepill_retries.xml")).unwrap();
    let errors = get_test_errors(&report);

    let names: Vec<&str> = errors.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "MyCareTeamTests/testAddToMyCareTeamButton",
            "MyCareTeamTests/testAddToMyCareTeamButton",
            "MarketplaceTests/testOpenXMLReader",
            "MarketplaceTests/testSearch",
        ]
    );
}

#[test]
fn clean_groups_and_suites_are_skipped() {
    let report = load_report(fixture("bluepill_retries.xml")).unwrap();
    let errors = get_test_errors(&report);
    assert!(errors.iter().all(|e| e.message != "not counted"));
    assert!(errors.iter().all(|e| e.message != "suite says clean"));
    assert!(errors.iter().all(|e| e.message != "flat entry"));
}

#[test]
fn clean_report_short_circuits() {
    // Counts say clean even though a failure element is present.
    let xml = single_group_report(
        0,
        0,
        r#"<testcase classname="A" name="b"><failure message="stale"/></testcase>"#,
    );
    let report = parse_report(&xml).unwrap();
    assert!(get_test_errors(&report).is_empty());
}

#[test]
fn all_passed_fixture_has_no_errors() {
    let report = load_report(fixture("all_passed.xml")).unwrap();
    assert!(get_test_errors(&report).is_empty());
}

#[test]
fn unknown_counts_are_walked() {
    let report = load_report(fixture("long_trace.xml")).unwrap();
    let errors = get_test_errors(&report);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].name, "FeedTests/testScroll");
}

// ============================================================================
// 2. TestError fields
// ============================================================================

#[test]
fn test_error_fields_are_normalized() {
    let report = load_report(fixture("bluepill_retries.xml")).unwrap();
    let errors = get_test_errors(&report);
    let first = &errors[0];

    assert_eq!(first.error_type, "Failure");
    assert_eq!(first.message, "No matches found for first match sequence");
    assert_eq!(first.location, "XCUIElement+Extension.swift:122");
    assert!(first.trace.starts_with("XCTestOutputBarrier"));
    assert!(first.trace.ends_with("t =    14.32s Tear Down"));
    assert!(!first.trace.contains("\n\n"));
}

#[test]
fn missing_type_falls_back_to_element_kind() {
    let report = load_report(fixture("bluepill_retries.xml")).unwrap();
    let errors = get_test_errors(&report);
    let search = errors.iter().find(|e| e.name.ends_with("testSearch")).unwrap();
    assert_eq!(search.error_type, "Failure");
    assert_eq!(search.location, "SearchTests.swift:17");
    assert_eq!(search.trace, "");
}

#[test]
fn missing_message_is_empty() {
    let xml = single_group_report(1, 0, r#"<testcase classname="A" name="b"><error/></testcase>"#);
    let errors = get_test_errors(&parse_report(&xml).unwrap());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "");
    assert_eq!(errors[0].error_type, "Error");
    assert_eq!(errors[0].unique_id(), "A/b:");
}

// ============================================================================
// 3. Deduplication
// ============================================================================

#[test]
fn retries_collapse_into_one_entry() {
    let report = load_report(fixture("bluepill_retries.xml")).unwrap();
    let errors = get_test_errors(&report);
    assert_eq!(errors[0], errors[1]);

    let summary = ErrorSummary::from_errors(&errors);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.unique_count(), 3);
    assert_eq!(summary.unique[0].occurrences, 2);
    assert_eq!(summary.unique[1].occurrences, 1);
    assert_eq!(summary.unique[2].occurrences, 1);
}

#[test]
fn same_test_different_message_stays_separate() {
    let xml = single_group_report(
        0,
        2,
        r#"<testcase classname="A" name="b"><failure message="one"/></testcase>
           <testcase classname="A" name="b"><failure message="two"/></testcase>"#,
    );
    let errors = get_test_errors(&parse_report(&xml).unwrap());
    let summary = ErrorSummary::from_errors(&errors);
    assert_eq!(summary.unique_count(), 2);
    assert_ne!(errors[0], errors[1]);
}

#[test]
fn dedup_keeps_first_occurrence_details() {
    let report = load_report(fixture("bluepill_retries.xml")).unwrap();
    let summary = ErrorSummary::from_errors(&get_test_errors(&report));
    // The retry only logged the tear down line; the first run has the full log.
    assert!(summary.unique[0].error.trace.starts_with("XCTestOutputBarrier"));
}
