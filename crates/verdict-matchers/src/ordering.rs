// verdict-matchers/src/ordering.rs
// ============================================================================
// Module: Ordering Matchers
// Description: Relational matchers backed by an ordering strategy.
// Purpose: Provide the four `be_*_than` comparison matchers.
// Dependencies: match-logic, verdict-core
// ============================================================================

//! ## Overview
//! The relational matchers compare the actual value against an expected value
//! through an [`OrderingStrategy`]. The default strategy is `PartialOrd`; a
//! `.using(..)` call substitutes any other comparison. When the strategy
//! reports the values incomparable the matcher fails with the same sentence
//! as an ordinary miss.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use match_logic::Matcher;
use match_logic::Verdict;
use verdict_core::DefaultOrdering;
use verdict_core::OrderingStrategy;
use verdict_core::Renderer;

// ============================================================================
// SECTION: Relation
// ============================================================================

/// The relation an ordering matcher asserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    /// Strictly less than the expected value.
    Less,
    /// Strictly greater than the expected value.
    Greater,
    /// Less than or equal to the expected value.
    LessOrEqual,
    /// Greater than or equal to the expected value.
    GreaterOrEqual,
}

impl Relation {
    /// Returns true when the compared ordering satisfies this relation.
    const fn accepts(self, ordering: Ordering) -> bool {
        matches!(
            (self, ordering),
            (Self::Less, Ordering::Less)
                | (Self::Greater, Ordering::Greater)
                | (Self::LessOrEqual, Ordering::Less | Ordering::Equal)
                | (Self::GreaterOrEqual, Ordering::Greater | Ordering::Equal)
        )
    }

    /// Returns the phrase naming this relation inside messages.
    const fn phrase(self) -> &'static str {
        match self {
            Self::Less => "less than",
            Self::Greater => "greater than",
            Self::LessOrEqual => "less than or equal to",
            Self::GreaterOrEqual => "greater than or equal to",
        }
    }
}

// ============================================================================
// SECTION: Ordering Matcher
// ============================================================================

/// Matcher asserting an ordering relation against an expected value.
#[derive(Debug, Clone, Copy)]
pub struct OrderingMatcher<E, S = DefaultOrdering> {
    /// The expected value compared against.
    expected: E,
    /// The relation being asserted.
    relation: Relation,
    /// The ordering strategy deciding comparisons.
    strategy: S,
}

/// Matches values strictly less than `expected`.
#[must_use]
pub const fn be_less_than<E>(expected: E) -> OrderingMatcher<E> {
    OrderingMatcher {
        expected,
        relation: Relation::Less,
        strategy: DefaultOrdering,
    }
}

/// Matches values strictly greater than `expected`.
#[must_use]
pub const fn be_greater_than<E>(expected: E) -> OrderingMatcher<E> {
    OrderingMatcher {
        expected,
        relation: Relation::Greater,
        strategy: DefaultOrdering,
    }
}

/// Matches values less than or equal to `expected`.
#[must_use]
pub const fn be_less_than_or_equal_to<E>(expected: E) -> OrderingMatcher<E> {
    OrderingMatcher {
        expected,
        relation: Relation::LessOrEqual,
        strategy: DefaultOrdering,
    }
}

/// Matches values greater than or equal to `expected`.
#[must_use]
pub const fn be_greater_than_or_equal_to<E>(expected: E) -> OrderingMatcher<E> {
    OrderingMatcher {
        expected,
        relation: Relation::GreaterOrEqual,
        strategy: DefaultOrdering,
    }
}

impl<E, S> OrderingMatcher<E, S> {
    /// Replaces the ordering strategy for this assertion.
    #[must_use]
    pub fn using<S2>(self, strategy: S2) -> OrderingMatcher<E, S2> {
        OrderingMatcher {
            expected: self.expected,
            relation: self.relation,
            strategy,
        }
    }
}

impl<T, E, S> Matcher<T> for OrderingMatcher<E, S>
where
    T: fmt::Debug + ?Sized,
    E: Borrow<T> + fmt::Debug,
    S: OrderingStrategy<T>,
{
    fn verdict(&self, actual: &T) -> Verdict {
        let compared = self.strategy.compare(actual, self.expected.borrow());
        let passed = compared.is_some_and(|ordering| self.relation.accepts(ordering));
        let actual_text = Renderer::DEFAULT.render(actual);
        let expected_text = Renderer::DEFAULT.render(&self.expected);
        let phrase = self.relation.phrase();
        Verdict::new(
            passed,
            format!("{actual_text} was not {phrase} {expected_text}"),
            format!("{actual_text} was {phrase} {expected_text}"),
        )
    }
}
