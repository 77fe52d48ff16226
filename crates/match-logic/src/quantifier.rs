// match-logic/src/quantifier.rs
// ============================================================================
// Module: Inspection Quantifiers
// Description: Quantified aggregation of per-element verdicts.
// Purpose: Define `Quantifier`, `GroupCounts`, and the `inspect` driver that
// folds element verdicts into an `InspectionOutcome` with early exits.
// Dependencies: serde::{Deserialize, Serialize}, smallvec::SmallVec
// ============================================================================

//! ## Overview
//! An inspection applies one matcher to every element of a collection and
//! asks a quantified question about the results: did all pass, at least N,
//! at most N, none, exactly N, or between N and M? This module holds the
//! domain-agnostic counting core: bound arithmetic, early-exit rules, and the
//! offender lists that downstream layers turn into multi-line messages.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use smallvec::SmallVec;

use crate::error::QuantifierError;
use crate::error::QuantifierResult;
use crate::verdict::Verdict;

// ============================================================================
// SECTION: Quantifier Definition
// ============================================================================

/// Quantified question asked of per-element verdicts
///
/// The `Display` form is the lowercase token quoted in inspection failure
/// messages (`'all' inspection failed, ...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantifier {
    /// Every element must satisfy the matcher; evaluation stops at the first
    /// failing element
    All,

    /// Every element must satisfy the matcher; every element is evaluated so
    /// all failing elements can be reported
    Every,

    /// At least this many elements must satisfy the matcher
    AtLeast(usize),

    /// At most this many elements may satisfy the matcher
    AtMost(usize),

    /// No element may satisfy the matcher; evaluation stops at the first
    /// satisfying element
    No,

    /// Exactly this many elements must satisfy the matcher; every element is
    /// evaluated so the reported count is the true total
    Exactly(usize),

    /// Between `min` and `max` elements (inclusive) must satisfy the matcher
    Between {
        /// Minimum number of satisfying elements (may be zero)
        min: usize,
        /// Maximum number of satisfying elements
        max: usize,
    },
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Every => write!(f, "every"),
            Self::AtLeast(min) => write!(f, "at_least({min})"),
            Self::AtMost(max) => write!(f, "at_most({max})"),
            Self::No => write!(f, "no"),
            Self::Exactly(count) => write!(f, "exactly({count})"),
            Self::Between {
                min,
                max,
            } => write!(f, "between({min}, {max})"),
        }
    }
}

// ============================================================================
// SECTION: Quantifier Arithmetic
// ============================================================================

impl Quantifier {
    /// Validates the counts carried by this quantifier
    ///
    /// Zero counts are rejected for `at_least`, `at_most`, and `exactly`
    /// because `no` expresses the zero case directly; `between` requires a
    /// non-zero maximum and an ordered range.
    ///
    /// # Errors
    /// Returns [`QuantifierError`] when the quantifier is ill-formed.
    pub fn validate(self) -> QuantifierResult {
        match self {
            Self::AtLeast(0) | Self::AtMost(0) | Self::Exactly(0) => {
                Err(QuantifierError::zero_count(self))
            }
            Self::Between {
                max: 0, ..
            } => Err(QuantifierError::zero_count(self)),
            Self::Between {
                min,
                max,
            } if min > max => Err(QuantifierError::inverted_range(min, max)),
            _ => Ok(()),
        }
    }

    /// Returns the minimum number of satisfying elements required to pass
    #[must_use]
    pub const fn lower_bound(self, total: usize) -> usize {
        match self {
            Self::All | Self::Every => total,
            Self::AtLeast(min)
            | Self::Exactly(min)
            | Self::Between {
                min, ..
            } => min,
            Self::AtMost(_) | Self::No => 0,
        }
    }

    /// Returns the maximum number of satisfying elements allowed to pass
    #[must_use]
    pub const fn upper_bound(self, total: usize) -> usize {
        match self {
            Self::All | Self::Every | Self::AtLeast(_) => total,
            Self::AtMost(max)
            | Self::Exactly(max)
            | Self::Between {
                max, ..
            } => max,
            Self::No => 0,
        }
    }

    /// Returns true when a single failing element already decides the outcome
    const fn stops_at_first_failure(self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns true when exceeding the upper bound already decides the outcome
    ///
    /// `exactly` is excluded: its failure message reports the true satisfied
    /// count, so every element must be evaluated.
    const fn stops_when_excess(self) -> bool {
        matches!(
            self,
            Self::AtMost(_)
                | Self::No
                | Self::Between {
                    ..
                }
        )
    }

    /// Returns true when reaching the lower bound already decides the outcome
    const fn stops_at_quota(self) -> bool {
        matches!(self, Self::AtLeast(_))
    }

    /// Returns true when upper-bound violations need satisfied-element indexes
    const fn reports_satisfied_offenders(self) -> bool {
        matches!(
            self,
            Self::AtMost(_)
                | Self::No
                | Self::Exactly(_)
                | Self::Between {
                    ..
                }
        )
    }
}

// ============================================================================
// SECTION: Group Semantics
// ============================================================================

/// Aggregated counts for an inspection
///
/// # Invariants
/// - `satisfied <= evaluated <= total`; `evaluated < total` after an early exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCounts {
    /// Number of elements that satisfied the matcher
    pub satisfied: usize,
    /// Number of elements actually evaluated
    pub evaluated: usize,
    /// Total number of elements in the collection
    pub total: usize,
}

impl GroupCounts {
    /// Returns the number of evaluated elements that failed the matcher
    #[must_use]
    pub const fn failed(self) -> usize {
        self.evaluated.saturating_sub(self.satisfied)
    }
}

// ============================================================================
// SECTION: Element Outcomes
// ============================================================================

/// A single element's verdict together with its position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementVerdict {
    /// Zero-based index of the element in the inspected collection
    pub index: usize,
    /// The verdict the matcher produced for the element
    pub verdict: Verdict,
}

/// How an inspection resolved against its quantifier bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InspectionDecision {
    /// The satisfied count landed within the quantifier bounds
    Passed,
    /// Fewer elements satisfied the matcher than the lower bound requires
    TooFewSatisfied,
    /// More elements satisfied the matcher than the upper bound allows
    TooManySatisfied,
}

/// The aggregated result of one inspection
///
/// Offender semantics depend on the decision: for [`InspectionDecision::TooFewSatisfied`]
/// the offenders are the failing elements (their failure sentences explain
/// the shortfall); for [`InspectionDecision::TooManySatisfied`] they are the
/// satisfying elements (their indexes locate the excess). A passed inspection
/// carries no offenders.
///
/// # Invariants
/// - `offenders` is empty when `decision` is [`InspectionDecision::Passed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionOutcome {
    /// The quantifier the inspection evaluated
    pub quantifier: Quantifier,
    /// Satisfied/evaluated/total counters
    pub counts: GroupCounts,
    /// How the inspection resolved
    pub decision: InspectionDecision,
    /// The elements explaining a failure, in ascending index order
    pub offenders: SmallVec<[ElementVerdict; 4]>,
}

impl InspectionOutcome {
    /// Returns true when the inspection passed
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self.decision, InspectionDecision::Passed)
    }

    /// Returns the offender indexes in ascending order
    pub fn offender_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.offenders.iter().map(|element| element.index)
    }
}

// ============================================================================
// SECTION: Inspection Driver
// ============================================================================

/// Folds element verdicts into an [`InspectionOutcome`] with early exits
///
/// The iterator is pulled lazily, so matcher evaluation wrapped in a mapped
/// iterator genuinely stops at the early-exit points:
/// - `all` stops at the first failing element, `no` at the first satisfying one.
/// - `at_least(n)` stops as soon as `n` elements satisfied the matcher.
/// - `at_most(n)` and `between(_, max)` stop as soon as the maximum is exceeded.
/// - `every` and `exactly(n)` always evaluate every element.
///
/// # Errors
/// Returns [`QuantifierError`] when the quantifier is ill-formed; no element
/// is evaluated in that case.
pub fn inspect<I>(quantifier: Quantifier, verdicts: I) -> QuantifierResult<InspectionOutcome>
where
    I: IntoIterator<Item = Verdict>,
    I::IntoIter: ExactSizeIterator,
{
    quantifier.validate()?;

    let iter = verdicts.into_iter();
    let total = iter.len();
    let lower = quantifier.lower_bound(total);
    let upper = quantifier.upper_bound(total);

    let mut counts = GroupCounts {
        satisfied: 0,
        evaluated: 0,
        total,
    };
    let mut failing: SmallVec<[ElementVerdict; 4]> = SmallVec::new();
    let mut satisfying: SmallVec<[ElementVerdict; 4]> = SmallVec::new();
    let mut early_decision = None;

    for (index, verdict) in iter.enumerate() {
        counts.evaluated += 1;

        if verdict.passed {
            counts.satisfied += 1;
            if quantifier.reports_satisfied_offenders() {
                satisfying.push(ElementVerdict {
                    index,
                    verdict,
                });
            }
            if counts.satisfied > upper && quantifier.stops_when_excess() {
                early_decision = Some(InspectionDecision::TooManySatisfied);
                break;
            }
            if counts.satisfied >= lower && quantifier.stops_at_quota() {
                early_decision = Some(InspectionDecision::Passed);
                break;
            }
        } else {
            failing.push(ElementVerdict {
                index,
                verdict,
            });
            if quantifier.stops_at_first_failure() {
                early_decision = Some(InspectionDecision::TooFewSatisfied);
                break;
            }
        }
    }

    let decision = match early_decision {
        Some(decision) => decision,
        None if counts.satisfied < lower => InspectionDecision::TooFewSatisfied,
        None if counts.satisfied > upper => InspectionDecision::TooManySatisfied,
        None => InspectionDecision::Passed,
    };

    let offenders = match decision {
        InspectionDecision::Passed => SmallVec::new(),
        InspectionDecision::TooFewSatisfied => failing,
        InspectionDecision::TooManySatisfied => satisfying,
    };

    Ok(InspectionOutcome {
        quantifier,
        counts,
        decision,
        offenders,
    })
}
