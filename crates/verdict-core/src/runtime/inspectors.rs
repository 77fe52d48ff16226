// verdict-core/src/runtime/inspectors.rs
// ============================================================================
// Module: Inspection Runtime
// Description: Quantified assertions over collection elements.
// Purpose: Apply one matcher per element and report aggregate failures.
// Dependencies: match-logic, crate::{core, runtime::expectation}
// ============================================================================

//! ## Overview
//! An inspection applies one matcher to every element of a slice and asks a
//! quantified question about the outcomes. Failures render as a multi-line
//! sentence: a header naming the quantifier and the reason, one indented
//! detail line per offending element (with the inspection's own source
//! position), and a final line quoting the inspected collection.
//!
//! Evaluation is lazy and mirrors the quantifier's early exits: `all` stops
//! at the first failing element, `no` at the first satisfying one,
//! `at_least(n)` as soon as the quota is met, `at_most(n)` and `between` as
//! soon as the maximum is exceeded. `every` and `exactly` always evaluate the
//! whole slice so their reported counts are true totals.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use match_logic::InspectionDecision;
use match_logic::InspectionOutcome;
use match_logic::Matcher;
use match_logic::Quantifier;
use match_logic::Verdict;
use match_logic::inspect;

use crate::core::Renderer;
use crate::core::SourceLocation;
use crate::runtime::expectation::ExpectationError;

// ============================================================================
// SECTION: Inspection Entry Points
// ============================================================================

/// A collection paired with a quantifier and the inspection's source site.
#[derive(Debug, Clone, Copy)]
pub struct Inspection<'a, T> {
    /// Elements under inspection.
    elements: &'a [T],
    /// The quantified question to ask of the element verdicts.
    quantifier: Quantifier,
    /// Where the inspection was written.
    location: SourceLocation,
}

/// Inspects a slice requiring every element to match, stopping at the first
/// failure.
#[must_use]
#[track_caller]
pub fn all<T>(elements: &[T]) -> Inspection<'_, T> {
    Inspection::with_quantifier(Quantifier::All, elements)
}

/// Inspects a slice requiring every element to match, reporting every
/// failing element.
#[must_use]
#[track_caller]
pub fn every<T>(elements: &[T]) -> Inspection<'_, T> {
    Inspection::with_quantifier(Quantifier::Every, elements)
}

/// Inspects a slice requiring at least `min` matching elements.
#[must_use]
#[track_caller]
pub fn at_least<T>(min: usize, elements: &[T]) -> Inspection<'_, T> {
    Inspection::with_quantifier(Quantifier::AtLeast(min), elements)
}

/// Inspects a slice allowing at most `max` matching elements.
#[must_use]
#[track_caller]
pub fn at_most<T>(max: usize, elements: &[T]) -> Inspection<'_, T> {
    Inspection::with_quantifier(Quantifier::AtMost(max), elements)
}

/// Inspects a slice requiring that no element matches.
#[must_use]
#[track_caller]
pub fn no<T>(elements: &[T]) -> Inspection<'_, T> {
    Inspection::with_quantifier(Quantifier::No, elements)
}

/// Inspects a slice requiring exactly `count` matching elements.
#[must_use]
#[track_caller]
pub fn exactly<T>(count: usize, elements: &[T]) -> Inspection<'_, T> {
    Inspection::with_quantifier(Quantifier::Exactly(count), elements)
}

/// Inspects a slice requiring between `min` and `max` matching elements,
/// inclusive.
#[must_use]
#[track_caller]
pub fn between<T>(min: usize, max: usize, elements: &[T]) -> Inspection<'_, T> {
    Inspection::with_quantifier(
        Quantifier::Between {
            min,
            max,
        },
        elements,
    )
}

impl<'a, T> Inspection<'a, T> {
    /// Pairs a quantifier with the elements and the caller's source site.
    #[must_use]
    #[track_caller]
    fn with_quantifier(quantifier: Quantifier, elements: &'a [T]) -> Self {
        Self {
            elements,
            quantifier,
            location: SourceLocation::capture(),
        }
    }

    /// Returns the quantifier this inspection asks about.
    #[must_use]
    pub const fn quantifier(&self) -> Quantifier {
        self.quantifier
    }

    /// Returns the captured inspection site.
    #[must_use]
    pub const fn location(&self) -> SourceLocation {
        self.location
    }
}

// ============================================================================
// SECTION: Quantified Assertions
// ============================================================================

impl<T: fmt::Debug> Inspection<'_, T> {
    /// Asserts that the quantified share of elements matches.
    ///
    /// # Errors
    /// Returns [`ExpectationError::Unmet`] with the multi-line inspection
    /// sentence when the quantifier is violated, or
    /// [`ExpectationError::Quantifier`] when the quantifier itself is
    /// ill-formed.
    pub fn should<M>(&self, matcher: M) -> Result<(), ExpectationError>
    where
        M: Matcher<T>,
    {
        self.evaluate(|element| matcher.verdict(element))
    }

    /// Asserts that the quantified share of elements does not match.
    ///
    /// Each element's verdict is negated before aggregation, so detail lines
    /// read in the positive voice (`1 equaled 1`).
    ///
    /// # Errors
    /// Returns [`ExpectationError::Unmet`] or
    /// [`ExpectationError::Quantifier`] as [`Inspection::should`] does.
    pub fn should_not<M>(&self, matcher: M) -> Result<(), ExpectationError>
    where
        M: Matcher<T>,
    {
        self.evaluate(|element| matcher.verdict(element).negated())
    }

    /// Runs the inspection and converts a failed outcome into an error.
    fn evaluate<F>(&self, verdict_of: F) -> Result<(), ExpectationError>
    where
        F: Fn(&T) -> Verdict,
    {
        let outcome = inspect(self.quantifier, self.elements.iter().map(verdict_of)).map_err(
            |source| ExpectationError::Quantifier {
                source,
                location: self.location,
            },
        )?;

        let rendered = Renderer::DEFAULT.render(self.elements);
        let message = match outcome.decision {
            InspectionDecision::Passed => return Ok(()),
            InspectionDecision::TooFewSatisfied => self.shortfall_message(&outcome, &rendered),
            InspectionDecision::TooManySatisfied => self.excess_message(&outcome, &rendered),
        };

        Err(ExpectationError::Unmet {
            message,
            location: self.location,
        })
    }

    /// Builds the failure sentence for a lower-bound violation.
    ///
    /// `all` and `every` open with a bare `because:`; counted quantifiers
    /// state the satisfied-of-total shortfall. One detail line follows per
    /// failing element, then the rendered collection.
    fn shortfall_message(&self, outcome: &InspectionOutcome, rendered: &str) -> String {
        let mut message = match outcome.quantifier {
            Quantifier::All | Quantifier::Every => {
                format!("'{}' inspection failed, because:", outcome.quantifier)
            }
            _ => format!(
                "'{}' inspection failed, because only {} of {} elements satisfied the matcher:",
                outcome.quantifier, outcome.counts.satisfied, outcome.counts.total
            ),
        };

        for element in &outcome.offenders {
            message.push_str(&format!(
                "\n  at index {}, {} ({})",
                element.index,
                element.verdict.mid_sentence_failure_message(),
                self.location
            ));
        }

        message.push_str(&format!("\nin {rendered}"));
        message
    }

    /// Builds the failure sentence for an upper-bound violation.
    ///
    /// The offenders are the satisfying elements; their indexes are listed
    /// with commas and a final `and`.
    fn excess_message(&self, outcome: &InspectionOutcome, rendered: &str) -> String {
        let quantifier = outcome.quantifier;
        let satisfied = outcome.counts.satisfied;
        let indexes = join_indexes(outcome.offender_indexes());

        let body = match quantifier {
            Quantifier::No => format!(
                "'{quantifier}' inspection failed, because an element satisfied the matcher at \
                 index {indexes}"
            ),
            Quantifier::Exactly(count) => format!(
                "'{quantifier}' inspection failed, because {satisfied} elements satisfied the \
                 matcher, which exceeds the expected count of {count}, at index {indexes}"
            ),
            _ => {
                let max = quantifier.upper_bound(outcome.counts.total);
                format!(
                    "'{quantifier}' inspection failed, because {satisfied} elements satisfied \
                     the matcher, which exceeds the allowed maximum of {max}, at index {indexes}"
                )
            }
        };

        format!("{body}\nin {rendered}")
    }
}

// ============================================================================
// SECTION: Index Formatting
// ============================================================================

/// Joins indexes with commas and a final `and` (`0, 2 and 5`).
fn join_indexes(indexes: impl Iterator<Item = usize>) -> String {
    let rendered: Vec<String> = indexes.map(|index| index.to_string()).collect();
    match rendered.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
