// system-tests/tests/suites/failure_reporting.rs
// ============================================================================
// Module: Failure Reporting Tests
// Description: Assertion-site capture, error display, and report snapshots.
// Purpose: Pin where failures point and how they serialize.
// Dependencies: helpers, ron, serde_json, verdict-core, verdict-matchers
// ============================================================================

//! ## Overview
//! Every failed expectation records the file and line where the assertion
//! was written. These tests pin the captured position, the display forms of
//! errors and reports, caller tracking through helper layers, and the owned
//! report snapshot's serde shape.

use regex::Regex;
use serde_json::json;
use verdict_core::ExpectationError;
use verdict_core::FailureReport;
use verdict_core::expect;
use verdict_matchers::be_greater_than;
use verdict_matchers::equal;

use crate::helpers::assertions::TestResult;
use crate::helpers::assertions::check;
use crate::helpers::assertions::check_eq;

/// Unwraps an expectation failure or reports a test error.
fn failure_of(
    result: Result<(), ExpectationError>,
) -> Result<ExpectationError, Box<dyn std::error::Error>> {
    match result {
        Ok(()) => Err("Expected the assertion to fail".into()),
        Err(error) => Ok(error),
    }
}

// ============================================================================
// SECTION: Assertion Sites
// ============================================================================

#[test]
fn test_errors_point_at_the_assertion_line() -> TestResult {
    let result = expect(&1).should(equal(2));
    let line = line!() - 1;
    let error = failure_of(result)?;

    check_eq!(error.file_name(), "failure_reporting.rs");
    check_eq!(error.line(), line);
    check!(error.location().column > 0);
    Ok(())
}

#[test]
fn test_the_location_displays_as_file_and_line() -> TestResult {
    let result = expect(&1).should(equal(2));
    let line = line!() - 1;
    let error = failure_of(result)?;

    check_eq!(error.location().to_string(), format!("failure_reporting.rs:{line}"));
    Ok(())
}

#[test]
fn test_caller_tracking_survives_helper_layers() -> TestResult {
    #[track_caller]
    fn assert_positive(value: i32) -> Result<(), ExpectationError> {
        expect(&value).should(be_greater_than(0))
    }

    let result = assert_positive(-4);
    let line = line!() - 1;
    let error = failure_of(result)?;

    check_eq!(error.file_name(), "failure_reporting.rs");
    check_eq!(error.line(), line);
    check_eq!(error.message(), "-4 was not greater than 0");
    Ok(())
}

// ============================================================================
// SECTION: Display Forms
// ============================================================================

#[test]
fn test_error_display_appends_the_location_suffix() -> TestResult {
    let result = expect(&1).should(equal(2));
    let line = line!() - 1;
    let error = failure_of(result)?;

    check_eq!(error.to_string(), format!("1 did not equal 2 (failure_reporting.rs:{line})"));
    check_eq!(error.message(), "1 did not equal 2");
    Ok(())
}

#[test]
fn test_error_display_keeps_the_documented_shape() -> TestResult {
    let result = expect(&1).should(equal(2));
    let error = failure_of(result)?;

    let shape = Regex::new(r"^1 did not equal 2 \(failure_reporting\.rs:\d+\)$")?;
    check!(shape.is_match(&error.to_string()));
    Ok(())
}

#[test]
fn test_report_display_matches_the_error_display() -> TestResult {
    let result = expect(&1).should(equal(2));
    let error = failure_of(result)?;

    let report = FailureReport::from(&error);
    check_eq!(report.to_string(), error.to_string());
    Ok(())
}

// ============================================================================
// SECTION: Report Snapshots
// ============================================================================

#[test]
fn test_reports_snapshot_the_message_and_site() -> TestResult {
    let result = expect(&1).should(equal(2));
    let line = line!() - 1;
    let error = failure_of(result)?;

    let report = error.report();
    check_eq!(report.message, "1 did not equal 2");
    check_eq!(report.file, "failure_reporting.rs");
    check_eq!(report.line, line);
    Ok(())
}

#[test]
fn test_reports_round_trip_through_json_and_ron() -> TestResult {
    let result = expect(&1).should(equal(2));
    let error = failure_of(result)?;
    let report = error.report();

    let json = serde_json::to_string(&report)?;
    let from_json: FailureReport = serde_json::from_str(&json)?;
    check_eq!(from_json, report);

    let ron_text = ron::to_string(&report)?;
    let from_ron: FailureReport = ron::from_str(&ron_text)?;
    check_eq!(from_ron, report);
    Ok(())
}

#[test]
fn test_the_report_json_shape_is_stable() -> TestResult {
    let result = expect(&1).should(equal(2));
    let line = line!() - 1;
    let error = failure_of(result)?;

    let value = serde_json::to_value(error.report())?;
    check_eq!(
        value,
        json!({
            "message": "1 did not equal 2",
            "file": "failure_reporting.rs",
            "line": line,
        }),
    );
    Ok(())
}
