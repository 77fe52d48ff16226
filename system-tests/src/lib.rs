// system-tests/src/lib.rs
// ============================================================================
// Module: Verdict System Tests Library
// Description: Shared matcher fixtures for the system-test suites.
// Purpose: Provide the mock matchers the suite matrices evaluate against.
// Dependencies: match-logic
// ============================================================================

//! ## Overview
//! This crate hosts the fixture vocabulary shared by the Verdict system-test
//! suites in `system-tests/tests`: simple numeric matchers with stable
//! sentences, and a counting wrapper that records how often a matcher was
//! evaluated so short-circuit behavior stays observable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cell::Cell;

use match_logic::Matcher;
use match_logic::Verdict;

// ============================================================================
// SECTION: Numeric Fixture Matchers
// ============================================================================

/// Matcher accepting strictly positive numbers.
#[must_use]
pub fn is_positive(value: &i32) -> Verdict {
    Verdict::new(
        *value > 0,
        format!("{value} was not positive"),
        format!("{value} was positive"),
    )
}

/// Matcher accepting even numbers.
#[must_use]
pub fn is_even(value: &i32) -> Verdict {
    Verdict::new(
        value % 2 == 0,
        format!("{value} was not even"),
        format!("{value} was even"),
    )
}

// ============================================================================
// SECTION: Counting Wrapper
// ============================================================================

/// Matcher wrapper that counts evaluations through a shared cell.
///
/// Short-circuit rules promise that certain matchers never run; wrapping a
/// matcher in this type makes that promise checkable after the assertion.
#[derive(Debug, Clone, Copy)]
pub struct CountingMatcher<'a, M> {
    /// The matcher whose verdicts are forwarded.
    inner: M,
    /// Evaluation counter shared with the test body.
    calls: &'a Cell<usize>,
}

/// Wraps a matcher so each evaluation increments `calls`.
#[must_use]
pub const fn counting<M>(inner: M, calls: &Cell<usize>) -> CountingMatcher<'_, M> {
    CountingMatcher {
        inner,
        calls,
    }
}

impl<T: ?Sized, M> Matcher<T> for CountingMatcher<'_, M>
where
    M: Matcher<T>,
{
    fn verdict(&self, actual: &T) -> Verdict {
        self.calls.set(self.calls.get() + 1);
        self.inner.verdict(actual)
    }
}
