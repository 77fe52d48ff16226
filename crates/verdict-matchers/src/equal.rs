// verdict-matchers/src/equal.rs
// ============================================================================
// Module: Equality Matcher
// Description: Matcher asserting equality under a pluggable strategy.
// Purpose: Provide `equal` with default, explicit, and normalized equality.
// Dependencies: match-logic, verdict-core
// ============================================================================

//! ## Overview
//! The `equal` matcher compares the actual value against an expected value
//! through an [`Equality`] strategy. Built plainly it uses `PartialEq`; a
//! `.using(..)` call substitutes any other strategy, including normalized
//! ones built with `after_being`. Messages always quote the original values,
//! never the normalized forms.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Borrow;
use std::fmt;

use match_logic::Matcher;
use match_logic::Verdict;
use verdict_core::DefaultEquality;
use verdict_core::Equality;
use verdict_core::Renderer;

// ============================================================================
// SECTION: Equal Matcher
// ============================================================================

/// Matcher asserting that the actual value equals an expected value.
#[derive(Debug, Clone, Copy)]
pub struct EqualMatcher<E, S = DefaultEquality> {
    /// The expected value.
    expected: E,
    /// The equality strategy deciding the comparison.
    equality: S,
}

/// Matches values equal to `expected` under `PartialEq`.
#[must_use]
pub const fn equal<E>(expected: E) -> EqualMatcher<E> {
    EqualMatcher {
        expected,
        equality: DefaultEquality,
    }
}

impl<E, S> EqualMatcher<E, S> {
    /// Replaces the equality strategy for this assertion.
    #[must_use]
    pub fn using<S2>(self, equality: S2) -> EqualMatcher<E, S2> {
        EqualMatcher {
            expected: self.expected,
            equality,
        }
    }
}

impl<T, E, S> Matcher<T> for EqualMatcher<E, S>
where
    T: fmt::Debug + ?Sized,
    E: Borrow<T> + fmt::Debug,
    S: Equality<T>,
{
    fn verdict(&self, actual: &T) -> Verdict {
        let passed = self.equality.are_equal(actual, self.expected.borrow());
        let actual_text = Renderer::DEFAULT.render(actual);
        let expected_text = Renderer::DEFAULT.render(&self.expected);
        Verdict::new(
            passed,
            format!("{actual_text} did not equal {expected_text}"),
            format!("{actual_text} equaled {expected_text}"),
        )
    }
}
