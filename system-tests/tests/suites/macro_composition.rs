// system-tests/tests/suites/macro_composition.rs
// ============================================================================
// Module: Macro Composition
// Description: Combinator construction through the combine! macro.
// Purpose: Verify macro-built chains agree with the fluent and free forms.
// Dependencies: match-logic, system-tests, verdict-core, verdict-matchers
// ============================================================================

//! ## Overview
//! `combine!` folds matcher lists left to right, matching the grouping an
//! infix chain would produce. These tests pin the fold order through the
//! joined sentences and confirm the macro, the fluent methods, and the free
//! functions all build the same matcher.

use match_logic::Matcher;
use match_logic::MatcherExt;
use match_logic::combine;
use match_logic::convenience;
use system_tests::is_even;
use system_tests::is_positive;
use verdict_core::expect;
use verdict_matchers::be_greater_than;
use verdict_matchers::be_less_than;
use verdict_matchers::equal;

use crate::helpers::assertions::TestResult;
use crate::helpers::assertions::check;
use crate::helpers::assertions::check_eq;

// ============================================================================
// SECTION: Conjunction Chains
// ============================================================================

#[test]
fn test_combine_and_accepts_values_passing_every_matcher() -> TestResult {
    let matcher = combine!(and [
        be_greater_than(0),
        be_less_than(10),
        combine!(not(equal(5))),
    ]);
    expect(&7).should(matcher)?;
    Ok(())
}

#[test]
fn test_combine_and_folds_sentences_left_to_right() -> TestResult {
    let matcher = combine!(and [
        be_greater_than(0),
        be_less_than(10),
        combine!(not(equal(5))),
    ]);

    let verdict = matcher.verdict(&5);
    check!(!verdict.passed);
    check_eq!(
        verdict.failure_message(),
        "5 was greater than 0, and 5 was less than 10, but 5 equaled 5",
    );
    Ok(())
}

#[test]
fn test_combine_and_single_element_is_the_matcher_itself() -> TestResult {
    let matcher = combine!(and [equal(3)]);
    check_eq!(matcher.verdict(&3), equal(3).verdict(&3));
    Ok(())
}

// ============================================================================
// SECTION: Disjunction Chains
// ============================================================================

#[test]
fn test_combine_or_accepts_any_passing_alternative() -> TestResult {
    let matcher = combine!(or [equal(1), equal(2), equal(3)]);
    expect(&2).should(matcher)?;
    Ok(())
}

#[test]
fn test_combine_or_chains_every_failure_sentence() -> TestResult {
    let matcher = combine!(or [equal(1), equal(2), equal(3)]);

    let verdict = matcher.verdict(&4);
    check!(!verdict.passed);
    check_eq!(
        verdict.failure_message(),
        "4 did not equal 1, and 4 did not equal 2, and 4 did not equal 3",
    );
    Ok(())
}

// ============================================================================
// SECTION: Construction Equivalence
// ============================================================================

#[test]
fn test_macro_fluent_and_free_forms_agree() -> TestResult {
    let value = 6;

    let from_macro = combine!(and [is_positive, is_even]).verdict(&value);
    let from_fluent = is_positive.and(is_even).verdict(&value);
    let from_free = convenience::and(is_positive, is_even).verdict(&value);

    check_eq!(from_macro, from_fluent);
    check_eq!(from_fluent, from_free);
    Ok(())
}

#[test]
fn test_macro_negation_agrees_with_the_fluent_form() -> TestResult {
    let from_macro = combine!(not(is_even)).verdict(&3);
    let from_fluent = is_even.negated().verdict(&3);
    check_eq!(from_macro, from_fluent);
    check!(from_macro.passed);
    Ok(())
}
