// verdict-core/src/runtime/expectation.rs
// ============================================================================
// Module: Expectation Runtime
// Description: Entry point turning matcher verdicts into assertion results.
// Purpose: Capture the assertion site and convert verdicts into errors.
// Dependencies: match-logic, thiserror, crate::core
// ============================================================================

//! ## Overview
//! `expect(&actual)` captures the caller's source position and pairs it with
//! the value under test. `should` and `should_not` then run a matcher and
//! turn a wrong-polarity verdict into an [`ExpectationError`] carrying the
//! failure sentence and the captured location. Nothing here panics; misuse
//! surfaces as structured errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use match_logic::Matcher;
use match_logic::QuantifierError;
use match_logic::Verdict;
use thiserror::Error;

use crate::core::FailureReport;
use crate::core::SourceLocation;

// ============================================================================
// SECTION: Expectation Errors
// ============================================================================

/// Assertion failures surfaced by the expectation and inspection runtimes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpectationError {
    /// The verdict did not match the expected polarity.
    #[error("{message} ({location})")]
    Unmet {
        /// The sentence explaining the failure.
        message: String,
        /// Where the assertion was written.
        location: SourceLocation,
    },

    /// The inspection quantifier was ill-formed.
    #[error("{source} ({location})")]
    Quantifier {
        /// The structural quantifier error.
        source: QuantifierError,
        /// Where the inspection was written.
        location: SourceLocation,
    },
}

impl ExpectationError {
    /// Returns the failure sentence without the location suffix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Unmet {
                message, ..
            } => message.clone(),
            Self::Quantifier {
                source, ..
            } => source.to_string(),
        }
    }

    /// Returns the location where the assertion was written.
    #[must_use]
    pub const fn location(&self) -> SourceLocation {
        match self {
            Self::Unmet {
                location, ..
            }
            | Self::Quantifier {
                location, ..
            } => *location,
        }
    }

    /// Returns the base file name of the assertion site.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        self.location().file_name()
    }

    /// Returns the line number of the assertion site.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.location().line
    }

    /// Builds an owned, serializable snapshot of this failure.
    #[must_use]
    pub fn report(&self) -> FailureReport {
        FailureReport {
            message: self.message(),
            file: self.file_name().to_string(),
            line: self.line(),
        }
    }
}

impl From<&ExpectationError> for FailureReport {
    fn from(error: &ExpectationError) -> Self {
        error.report()
    }
}

// ============================================================================
// SECTION: Expectation Entry Point
// ============================================================================

/// A value under test paired with its assertion site.
#[derive(Debug, Clone, Copy)]
pub struct Expectation<'a, T: ?Sized> {
    /// The value under test.
    actual: &'a T,
    /// Where the expectation was written.
    location: SourceLocation,
}

/// Captures a value for matcher assertions.
///
/// The returned expectation records the caller's file and line, so failure
/// messages point at the assertion rather than at library internals.
#[must_use]
#[track_caller]
pub fn expect<T: ?Sized>(actual: &T) -> Expectation<'_, T> {
    Expectation {
        actual,
        location: SourceLocation::capture(),
    }
}

// ============================================================================
// SECTION: Assertion Methods
// ============================================================================

impl<T: ?Sized> Expectation<'_, T> {
    /// Asserts that the matcher accepts the value.
    ///
    /// # Errors
    /// Returns [`ExpectationError::Unmet`] with the verdict's failure
    /// sentence when the matcher rejects the value.
    pub fn should<M>(&self, matcher: M) -> Result<(), ExpectationError>
    where
        M: Matcher<T>,
    {
        let verdict = matcher.verdict(self.actual);
        if verdict.passed {
            Ok(())
        } else {
            Err(ExpectationError::Unmet {
                message: verdict.messages.failure,
                location: self.location,
            })
        }
    }

    /// Asserts that the matcher rejects the value.
    ///
    /// # Errors
    /// Returns [`ExpectationError::Unmet`] with the verdict's negated-failure
    /// sentence when the matcher accepts the value.
    pub fn should_not<M>(&self, matcher: M) -> Result<(), ExpectationError>
    where
        M: Matcher<T>,
    {
        let verdict = matcher.verdict(self.actual);
        if verdict.passed {
            Err(ExpectationError::Unmet {
                message: verdict.messages.negated_failure,
                location: self.location,
            })
        } else {
            Ok(())
        }
    }

    /// Returns the raw verdict without converting it into a result.
    #[must_use]
    pub fn verdict<M>(&self, matcher: M) -> Verdict
    where
        M: Matcher<T>,
    {
        matcher.verdict(self.actual)
    }

    /// Returns the captured assertion site.
    #[must_use]
    pub const fn location(&self) -> SourceLocation {
        self.location
    }
}
