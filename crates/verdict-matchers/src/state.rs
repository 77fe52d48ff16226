// verdict-matchers/src/state.rs
// ============================================================================
// Module: State Matchers
// Description: Predicate matchers for emptiness, definedness, and order.
// Purpose: Provide `be_empty`, `be_defined`, and `be_sorted`.
// Dependencies: match-logic, verdict-core
// ============================================================================

//! ## Overview
//! State matchers ask a single yes/no question about the actual value
//! through a capability strategy: is it empty, is it defined, is it sorted.
//! Defaults cover the standard library shapes; `.using(..)` substitutes a
//! custom strategy for domain types.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use match_logic::Matcher;
use match_logic::Verdict;
use verdict_core::DefaultDefinedness;
use verdict_core::DefaultEmptiness;
use verdict_core::DefaultSortable;
use verdict_core::Definedness;
use verdict_core::Emptiness;
use verdict_core::Renderer;
use verdict_core::Sortable;

// ============================================================================
// SECTION: Emptiness
// ============================================================================

/// Matcher asserting that a value is empty.
#[derive(Debug, Clone, Copy)]
pub struct BeEmptyMatcher<S = DefaultEmptiness> {
    /// The emptiness strategy consulted.
    strategy: S,
}

/// Matches empty strings, collections, and options.
#[must_use]
pub const fn be_empty() -> BeEmptyMatcher {
    BeEmptyMatcher {
        strategy: DefaultEmptiness,
    }
}

impl<S> BeEmptyMatcher<S> {
    /// Replaces the emptiness strategy for this assertion.
    #[must_use]
    pub fn using<S2>(self, strategy: S2) -> BeEmptyMatcher<S2> {
        BeEmptyMatcher {
            strategy,
        }
    }
}

impl<T, S> Matcher<T> for BeEmptyMatcher<S>
where
    T: fmt::Debug + ?Sized,
    S: Emptiness<T>,
{
    fn verdict(&self, actual: &T) -> Verdict {
        let passed = self.strategy.is_empty_value(actual);
        let actual_text = Renderer::DEFAULT.render(actual);
        Verdict::new(
            passed,
            format!("{actual_text} was not empty"),
            format!("{actual_text} was empty"),
        )
    }
}

// ============================================================================
// SECTION: Definedness
// ============================================================================

/// Matcher asserting that a value is defined.
#[derive(Debug, Clone, Copy)]
pub struct BeDefinedMatcher<S = DefaultDefinedness> {
    /// The definedness strategy consulted.
    strategy: S,
}

/// Matches defined values; for options, `Some`.
#[must_use]
pub const fn be_defined() -> BeDefinedMatcher {
    BeDefinedMatcher {
        strategy: DefaultDefinedness,
    }
}

impl<S> BeDefinedMatcher<S> {
    /// Replaces the definedness strategy for this assertion.
    #[must_use]
    pub fn using<S2>(self, strategy: S2) -> BeDefinedMatcher<S2> {
        BeDefinedMatcher {
            strategy,
        }
    }
}

impl<T, S> Matcher<T> for BeDefinedMatcher<S>
where
    T: fmt::Debug + ?Sized,
    S: Definedness<T>,
{
    fn verdict(&self, actual: &T) -> Verdict {
        let passed = self.strategy.is_defined(actual);
        let actual_text = Renderer::DEFAULT.render(actual);
        Verdict::new(
            passed,
            format!("{actual_text} was not defined"),
            format!("{actual_text} was defined"),
        )
    }
}

// ============================================================================
// SECTION: Sortedness
// ============================================================================

/// Matcher asserting that a collection is sorted.
#[derive(Debug, Clone, Copy)]
pub struct BeSortedMatcher<S = DefaultSortable> {
    /// The sortedness strategy consulted.
    strategy: S,
}

/// Matches collections whose adjacent elements are in non-decreasing order.
#[must_use]
pub const fn be_sorted() -> BeSortedMatcher {
    BeSortedMatcher {
        strategy: DefaultSortable,
    }
}

impl<S> BeSortedMatcher<S> {
    /// Replaces the sortedness strategy for this assertion.
    #[must_use]
    pub fn using<S2>(self, strategy: S2) -> BeSortedMatcher<S2> {
        BeSortedMatcher {
            strategy,
        }
    }
}

impl<C, S> Matcher<C> for BeSortedMatcher<S>
where
    C: fmt::Debug + ?Sized,
    S: Sortable<C>,
{
    fn verdict(&self, actual: &C) -> Verdict {
        let passed = self.strategy.is_sorted(actual);
        let actual_text = Renderer::DEFAULT.render(actual);
        Verdict::new(
            passed,
            format!("{actual_text} was not sorted"),
            format!("{actual_text} was sorted"),
        )
    }
}
