// match-logic/src/lib.rs
// ============================================================================
// Module: Match Logic Root
// Description: Public API surface for the matcher logic subsystem.
// Purpose: Wire together core modules, re-exports, and the combine macro.
// Dependencies: crate::{error, matcher, quantifier, serde_support, verdict}
// ============================================================================

//! ## Overview
//! This module exposes the building blocks (verdicts, matchers, quantifiers,
//! serde support) plus a small construction DSL so callers can compose
//! matchers uniformly.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod error;
pub mod matcher;
pub mod quantifier;
pub mod serde_support;
pub mod verdict;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::QuantifierError;
pub use error::QuantifierResult;
pub use matcher::AndMatcher;
pub use matcher::Matcher;
pub use matcher::MatcherExt;
pub use matcher::NotMatcher;
pub use matcher::OrMatcher;
pub use quantifier::ElementVerdict;
pub use quantifier::GroupCounts;
pub use quantifier::InspectionDecision;
pub use quantifier::InspectionOutcome;
pub use quantifier::Quantifier;
pub use quantifier::inspect;
pub use serde_support::OutcomeSerializer;
pub use serde_support::OutcomeValidator;
pub use serde_support::SerdeConfig;
pub use serde_support::SerdeError;
pub use serde_support::ValidatedOutcome;
pub use verdict::Verdict;
pub use verdict::VerdictMessages;
pub use verdict::comma_and;
pub use verdict::comma_but;

// ============================================================================
// SECTION: Convenience DSL
// ============================================================================

/// Convenience functions for composing matchers without method syntax
///
/// These constructors carry no trait bounds, so they compose matchers that
/// are generic over their actual type without forcing inference at the
/// construction site.
pub mod convenience {
    use super::matcher::AndMatcher;
    use super::matcher::NotMatcher;
    use super::matcher::OrMatcher;

    /// Combines two matchers so both must pass
    #[must_use]
    pub const fn and<L, R>(left: L, right: R) -> AndMatcher<L, R> {
        AndMatcher::new(left, right)
    }

    /// Combines two matchers so at least one must pass
    #[must_use]
    pub const fn or<L, R>(left: L, right: R) -> OrMatcher<L, R> {
        OrMatcher::new(left, right)
    }

    /// Inverts a matcher
    #[must_use]
    pub const fn not<M>(inner: M) -> NotMatcher<M> {
        NotMatcher::new(inner)
    }
}

// ============================================================================
// SECTION: Combine Macro
// ============================================================================

/// Macro for ergonomic combinator construction
///
/// This macro provides a compact syntax for left-folded chains, matching the
/// grouping an infix `a and b and c` chain would produce:
///
/// ```ignore
/// let matcher = combine!(and [
///     be_greater_than(0),
///     be_less_than(10),
///     combine!(not(equal(5))),
/// ]);
/// ```
///
/// Nested combinators are written as explicit inner `combine!` calls so each
/// list element stays a plain expression.
#[macro_export]
macro_rules! combine {
    // Not case
    (not($matcher:expr)) => {
        $crate::matcher::NotMatcher::new($matcher)
    };

    // And case: left-fold the list
    (and [$first:expr, $second:expr $(, $rest:expr)* $(,)?]) => {
        $crate::combine!(and [$crate::matcher::AndMatcher::new($first, $second) $(, $rest)*])
    };
    (and [$only:expr $(,)?]) => {
        $only
    };

    // Or case: left-fold the list
    (or [$first:expr, $second:expr $(, $rest:expr)* $(,)?]) => {
        $crate::combine!(or [$crate::matcher::OrMatcher::new($first, $second) $(, $rest)*])
    };
    (or [$only:expr $(,)?]) => {
        $only
    };
}
