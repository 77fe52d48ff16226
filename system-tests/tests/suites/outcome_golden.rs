// system-tests/tests/suites/outcome_golden.rs
// ============================================================================
// Module: Outcome Serialization Tests
// Description: Verdict and inspection outcome serde round-trips.
// Purpose: Pin the wire shapes and the fail-closed validation rules.
// Dependencies: match-logic, serde_json, system-tests, verdict-matchers
// ============================================================================

//! ## Overview
//! Verdicts and inspection outcomes serialize for golden files and external
//! report tooling. These tests round-trip real outcomes through RON and
//! JSON, and confirm that tampered or ill-formed payloads are rejected with
//! structured errors instead of being accepted silently.

use match_logic::InspectionDecision;
use match_logic::InspectionOutcome;
use match_logic::Matcher;
use match_logic::OutcomeSerializer;
use match_logic::Quantifier;
use match_logic::SerdeConfig;
use match_logic::SerdeError;
use match_logic::Verdict;
use match_logic::inspect;
use match_logic::serde_support::convenience;
use serde_json::json;
use system_tests::is_positive;
use verdict_matchers::equal;

use crate::helpers::assertions::TestResult;
use crate::helpers::assertions::check;
use crate::helpers::assertions::check_eq;

/// Runs a sample inspection that fails with a shortfall.
fn shortfall_outcome() -> Result<InspectionOutcome, Box<dyn std::error::Error>> {
    let values = [1, -2, -3];
    Ok(inspect(Quantifier::AtLeast(3), values.iter().map(is_positive))?)
}

// ============================================================================
// SECTION: Round-Trips
// ============================================================================

#[test]
fn test_verdicts_round_trip_through_ron() -> TestResult {
    let verdict = equal(2).verdict(&2);

    let text = convenience::to_ron(&verdict)?;
    let back: Verdict = convenience::from_ron(&text)?;
    check_eq!(back, verdict);
    Ok(())
}

#[test]
fn test_verdicts_round_trip_through_json() -> TestResult {
    let verdict = equal(2).verdict(&3);

    let text = convenience::to_json(&verdict)?;
    let back: Verdict = convenience::from_json(&text)?;
    check_eq!(back, verdict);
    check_eq!(back.failure_message(), "3 did not equal 2");
    Ok(())
}

#[test]
fn test_passed_inspections_round_trip() -> TestResult {
    let values = [1, 2, -3];
    let outcome = inspect(Quantifier::AtLeast(2), values.iter().map(is_positive))?;
    check!(outcome.passed());

    let text = convenience::to_ron(&outcome)?;
    let back: InspectionOutcome = convenience::from_ron(&text)?;
    check_eq!(back, outcome);
    Ok(())
}

#[test]
fn test_failed_inspections_keep_their_offenders() -> TestResult {
    let outcome = shortfall_outcome()?;
    check_eq!(outcome.decision, InspectionDecision::TooFewSatisfied);
    check_eq!(outcome.offenders.len(), 2);

    let text = convenience::to_json(&outcome)?;
    let back: InspectionOutcome = convenience::from_json(&text)?;
    check_eq!(back, outcome);
    check_eq!(back.offender_indexes().collect::<Vec<_>>(), vec![1, 2]);
    Ok(())
}

// ============================================================================
// SECTION: Fail-Closed Validation
// ============================================================================

#[test]
fn test_empty_messages_are_rejected() -> TestResult {
    let verdict = Verdict::new(true, "", "3 was positive");

    let result = convenience::to_ron(&verdict);
    check!(matches!(
        result,
        Err(SerdeError::EmptyMessage {
            field: "failure"
        })
    ));
    Ok(())
}

#[test]
fn test_the_message_byte_limit_is_enforced() -> TestResult {
    let config = SerdeConfig {
        max_message_bytes: 8,
        ..SerdeConfig::default()
    };
    let serializer = OutcomeSerializer::new(config);
    let verdict = equal(2).verdict(&3);

    let result = serializer.to_json(&verdict);
    check!(matches!(
        result,
        Err(SerdeError::MessageTooLong {
            max_bytes: 8,
            ..
        })
    ));
    Ok(())
}

#[test]
fn test_empty_messages_pass_when_explicitly_allowed() -> TestResult {
    let config = SerdeConfig {
        allow_empty_messages: true,
        ..SerdeConfig::default()
    };
    let serializer = OutcomeSerializer::new(config);
    let verdict = Verdict::new(true, "", "");

    let text = serializer.to_json(&verdict)?;
    let back: Verdict = serializer.from_json(&text)?;
    check_eq!(back, verdict);
    Ok(())
}

// ============================================================================
// SECTION: Tampered Payloads
// ============================================================================

#[test]
fn test_inconsistent_counts_are_rejected() -> TestResult {
    let outcome = shortfall_outcome()?;
    let mut value: serde_json::Value = serde_json::from_str(&convenience::to_json(&outcome)?)?;
    value["counts"]["satisfied"] = json!(99);

    let result: Result<InspectionOutcome, _> = convenience::from_json(&value.to_string());
    check!(matches!(
        result,
        Err(SerdeError::InvalidCounts {
            satisfied: 99,
            ..
        })
    ));
    Ok(())
}

#[test]
fn test_ill_formed_quantifiers_are_rejected() -> TestResult {
    let outcome = shortfall_outcome()?;
    let mut value: serde_json::Value = serde_json::from_str(&convenience::to_json(&outcome)?)?;
    value["quantifier"] = json!({ "AtLeast": 0 });

    let result: Result<InspectionOutcome, _> = convenience::from_json(&value.to_string());
    check!(matches!(result, Err(SerdeError::InvalidQuantifier(_))));
    Ok(())
}

#[test]
fn test_passed_outcomes_with_offenders_are_rejected() -> TestResult {
    let values = [1, 2];
    let outcome = inspect(Quantifier::All, values.iter().map(is_positive))?;
    check!(outcome.passed());

    let mut value: serde_json::Value = serde_json::from_str(&convenience::to_json(&outcome)?)?;
    value["offenders"] = json!([{
        "index": 0,
        "verdict": {
            "passed": true,
            "messages": {
                "failure": "1 was not positive",
                "negated_failure": "1 was positive",
                "mid_sentence_failure": "1 was not positive",
                "mid_sentence_negated_failure": "1 was positive",
            },
        },
    }]);

    let result: Result<InspectionOutcome, _> = convenience::from_json(&value.to_string());
    check!(matches!(result, Err(SerdeError::InvalidStructure(_))));
    Ok(())
}

#[test]
fn test_out_of_range_offender_indexes_are_rejected() -> TestResult {
    let outcome = shortfall_outcome()?;
    let mut value: serde_json::Value = serde_json::from_str(&convenience::to_json(&outcome)?)?;
    value["offenders"][0]["index"] = json!(42);

    let result: Result<InspectionOutcome, _> = convenience::from_json(&value.to_string());
    check!(matches!(result, Err(SerdeError::InvalidStructure(_))));
    Ok(())
}

#[test]
fn test_validation_is_available_without_serialization() -> TestResult {
    let outcome = shortfall_outcome()?;
    check!(convenience::is_valid(&outcome));
    convenience::validate(&outcome)?;
    Ok(())
}
