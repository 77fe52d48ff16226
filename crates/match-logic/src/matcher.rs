// match-logic/src/matcher.rs
// ============================================================================
// Module: Matcher Trait and Combinators
// Description: The matcher evaluation contract and its logical adapters.
// Purpose: Define `Matcher`, the `And`/`Or`/`Not` combinator matchers, and
// the fluent `MatcherExt` composition surface.
// Dependencies: crate::verdict::Verdict
// ============================================================================

//! ## Overview
//! A matcher turns a borrowed value into a [`Verdict`]. The combinators here
//! are universal and domain-agnostic: they compose any two matchers over the
//! same actual type, delegating the sentence joining and short-circuit rules
//! to the verdict algebra.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::verdict::Verdict;

// ============================================================================
// SECTION: Matcher Contract
// ============================================================================

/// Evaluation contract for matchers over values of type `T`
///
/// Implementations must be pure with respect to the actual value: evaluating
/// the same value twice yields the same verdict. Any `Fn(&T) -> Verdict`
/// closure is a matcher, which keeps one-off matchers in tests cheap.
pub trait Matcher<T: ?Sized> {
    /// Applies this matcher to the actual value
    fn verdict(&self, actual: &T) -> Verdict;
}

impl<T: ?Sized, F> Matcher<T> for F
where
    F: Fn(&T) -> Verdict,
{
    fn verdict(&self, actual: &T) -> Verdict {
        self(actual)
    }
}

// ============================================================================
// SECTION: Combinator Matchers
// ============================================================================

/// Conjunction of two matchers
///
/// Evaluates left first; when the left matcher fails its verdict is reported
/// unchanged and the right matcher never runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndMatcher<L, R> {
    /// Matcher evaluated first
    left: L,
    /// Matcher evaluated only when the left matcher passes
    right: R,
}

impl<L, R> AndMatcher<L, R> {
    /// Creates a conjunction of the given matchers
    #[must_use]
    pub const fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
        }
    }
}

impl<T: ?Sized, L, R> Matcher<T> for AndMatcher<L, R>
where
    L: Matcher<T>,
    R: Matcher<T>,
{
    fn verdict(&self, actual: &T) -> Verdict {
        self.left.verdict(actual).and_with(|| self.right.verdict(actual))
    }
}

/// Disjunction of two matchers
///
/// Evaluates left first; when the left matcher passes its verdict is reported
/// unchanged and the right matcher never runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrMatcher<L, R> {
    /// Matcher evaluated first
    left: L,
    /// Matcher evaluated only when the left matcher fails
    right: R,
}

impl<L, R> OrMatcher<L, R> {
    /// Creates a disjunction of the given matchers
    #[must_use]
    pub const fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
        }
    }
}

impl<T: ?Sized, L, R> Matcher<T> for OrMatcher<L, R>
where
    L: Matcher<T>,
    R: Matcher<T>,
{
    fn verdict(&self, actual: &T) -> Verdict {
        self.left.verdict(actual).or_with(|| self.right.verdict(actual))
    }
}

/// Negation of a matcher
///
/// Flips the inner decision and swaps the failure/negated-failure sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotMatcher<M> {
    /// The matcher whose verdict is inverted
    inner: M,
}

impl<M> NotMatcher<M> {
    /// Creates an inverted view of the given matcher
    #[must_use]
    pub const fn new(inner: M) -> Self {
        Self {
            inner,
        }
    }
}

impl<T: ?Sized, M> Matcher<T> for NotMatcher<M>
where
    M: Matcher<T>,
{
    fn verdict(&self, actual: &T) -> Verdict {
        self.inner.verdict(actual).negated()
    }
}

// ============================================================================
// SECTION: Fluent Composition
// ============================================================================

/// Fluent composition methods for matchers
///
/// The methods constrain both operands to the same actual type, so type
/// inference needs the receiver to implement [`Matcher`] for exactly one
/// type. Matchers that are generic over their actual (slice and string
/// matchers) compose through [`crate::convenience`] or [`crate::combine!`]
/// instead, where no inference is required at construction time.
pub trait MatcherExt<T: ?Sized>: Matcher<T> + Sized {
    /// Combines this matcher with another so both must pass
    fn and<R: Matcher<T>>(self, right: R) -> AndMatcher<Self, R> {
        AndMatcher::new(self, right)
    }

    /// Combines this matcher with another so at least one must pass
    fn or<R: Matcher<T>>(self, right: R) -> OrMatcher<Self, R> {
        OrMatcher::new(self, right)
    }

    /// Inverts this matcher
    fn negated(self) -> NotMatcher<Self> {
        NotMatcher::new(self)
    }
}

impl<T: ?Sized, M: Matcher<T>> MatcherExt<T> for M {}
