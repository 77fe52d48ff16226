// match-logic/src/verdict.rs
// ============================================================================
// Module: Verdict Core Types
// Description: Match outcomes and the sentence-joining algebra.
// Purpose: Define `Verdict` and `VerdictMessages` plus the negation and
// comma-joining rules that power matcher composition.
// Dependencies: serde::{Deserialize, Serialize}
// ============================================================================

//! ## Overview
//! This module defines the outcome of applying a matcher to a value: a
//! pass/fail flag plus the four English sentence forms needed so outcomes can
//! be negated and joined into compound sentences without re-running matchers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Message Forms
// ============================================================================

/// The four sentence forms carried by every verdict
///
/// A verdict must be able to describe itself in either polarity (the match
/// failed, or the match succeeded when failure was expected) and in either
/// position (opening a sentence, or embedded after a comma). The mid-sentence
/// forms default to the primary forms and only diverge for matchers whose
/// opening sentence starts with a capitalized word.
///
/// # Invariants
/// - All four messages are non-empty for verdicts produced by this workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerdictMessages {
    /// Sentence shown when a match was expected but the matcher failed
    pub failure: String,

    /// Sentence shown when a non-match was expected but the matcher passed
    ///
    /// This is also the positive sentence used as the left-hand part of
    /// `and`-joined messages.
    pub negated_failure: String,

    /// Failure sentence used when embedded after a comma
    pub mid_sentence_failure: String,

    /// Negated failure sentence used when embedded after a comma
    pub mid_sentence_negated_failure: String,
}

impl VerdictMessages {
    /// Creates a message set where the mid-sentence forms equal the primary forms
    #[must_use]
    pub fn new(failure: impl Into<String>, negated_failure: impl Into<String>) -> Self {
        let failure = failure.into();
        let negated_failure = negated_failure.into();
        Self {
            mid_sentence_failure: failure.clone(),
            mid_sentence_negated_failure: negated_failure.clone(),
            failure,
            negated_failure,
        }
    }

    /// Creates a message set with distinct mid-sentence forms
    #[must_use]
    pub fn with_mid_sentence(
        failure: impl Into<String>,
        negated_failure: impl Into<String>,
        mid_sentence_failure: impl Into<String>,
        mid_sentence_negated_failure: impl Into<String>,
    ) -> Self {
        Self {
            failure: failure.into(),
            negated_failure: negated_failure.into(),
            mid_sentence_failure: mid_sentence_failure.into(),
            mid_sentence_negated_failure: mid_sentence_negated_failure.into(),
        }
    }

    /// Returns the messages with the failure and negated-failure pairs swapped
    ///
    /// Swapping is the message-level half of verdict negation.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            failure: self.negated_failure,
            negated_failure: self.failure,
            mid_sentence_failure: self.mid_sentence_negated_failure,
            mid_sentence_negated_failure: self.mid_sentence_failure,
        }
    }
}

// ============================================================================
// SECTION: Sentence Joining
// ============================================================================

/// Joins two sentence fragments with ", and "
#[must_use]
pub fn comma_and(left: &str, right: &str) -> String {
    format!("{left}, and {right}")
}

/// Joins two sentence fragments with ", but "
#[must_use]
pub fn comma_but(left: &str, right: &str) -> String {
    format!("{left}, but {right}")
}

// ============================================================================
// SECTION: Verdict Definition
// ============================================================================

/// The outcome of applying a matcher to a value
///
/// A verdict pairs the pass/fail decision with the sentences explaining it.
/// Verdicts compose: [`Verdict::and_with`] and [`Verdict::or_with`] implement
/// short-circuit conjunction and disjunction over both the decision and the
/// sentences, and [`Verdict::negated`] inverts both.
///
/// # Invariants
/// - Negation is an involution: `v.negated().negated() == v`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the matcher accepted the value
    pub passed: bool,

    /// The sentence forms explaining the outcome
    pub messages: VerdictMessages,
}

// ============================================================================
// SECTION: Constructor Helpers
// ============================================================================

impl Verdict {
    /// Creates a verdict whose mid-sentence messages equal the primary forms
    #[must_use]
    pub fn new(
        passed: bool,
        failure: impl Into<String>,
        negated_failure: impl Into<String>,
    ) -> Self {
        Self {
            passed,
            messages: VerdictMessages::new(failure, negated_failure),
        }
    }

    /// Creates a verdict from an explicit message set
    #[must_use]
    pub const fn with_messages(passed: bool, messages: VerdictMessages) -> Self {
        Self {
            passed,
            messages,
        }
    }
}

// ============================================================================
// SECTION: Accessors
// ============================================================================

impl Verdict {
    /// Returns true when the matcher accepted the value
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.passed
    }

    /// Returns the failure sentence
    #[must_use]
    pub fn failure_message(&self) -> &str {
        &self.messages.failure
    }

    /// Returns the negated-failure sentence
    #[must_use]
    pub fn negated_failure_message(&self) -> &str {
        &self.messages.negated_failure
    }

    /// Returns the mid-sentence failure sentence
    #[must_use]
    pub fn mid_sentence_failure_message(&self) -> &str {
        &self.messages.mid_sentence_failure
    }

    /// Returns the mid-sentence negated-failure sentence
    #[must_use]
    pub fn mid_sentence_negated_failure_message(&self) -> &str {
        &self.messages.mid_sentence_negated_failure
    }
}

// ============================================================================
// SECTION: Composition
// ============================================================================

impl Verdict {
    /// Returns this verdict with the decision flipped and the message pairs swapped
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            passed: !self.passed,
            messages: self.messages.clone().swapped(),
        }
    }

    /// Conjunction with short-circuit: a failed left verdict is returned unchanged
    ///
    /// When the left verdict failed, `right` is never invoked and the left
    /// sentences are reported alone. When the left verdict passed, the joined
    /// sentences lead with the left positive sentence so a later failure reads
    /// as "passed the first check, but failed the second".
    #[must_use]
    pub fn and_with(self, right: impl FnOnce() -> Self) -> Self {
        if !self.passed {
            return self;
        }

        let right = right();
        let messages = VerdictMessages {
            failure: comma_but(
                &self.messages.negated_failure,
                &right.messages.mid_sentence_failure,
            ),
            negated_failure: comma_and(
                &self.messages.negated_failure,
                &right.messages.mid_sentence_negated_failure,
            ),
            mid_sentence_failure: comma_but(
                &self.messages.mid_sentence_negated_failure,
                &right.messages.mid_sentence_failure,
            ),
            mid_sentence_negated_failure: comma_and(
                &self.messages.mid_sentence_negated_failure,
                &right.messages.mid_sentence_negated_failure,
            ),
        };

        Self {
            passed: right.passed,
            messages,
        }
    }

    /// Disjunction with short-circuit: a passed left verdict is returned unchanged
    ///
    /// When the left verdict passed, `right` is never invoked. When the left
    /// verdict failed, the joined sentences lead with the left failure
    /// sentence so a compound failure reads as "failed the first check, and
    /// failed the second".
    #[must_use]
    pub fn or_with(self, right: impl FnOnce() -> Self) -> Self {
        if self.passed {
            return self;
        }

        let right = right();
        let messages = VerdictMessages {
            failure: comma_and(
                &self.messages.failure,
                &right.messages.mid_sentence_failure,
            ),
            negated_failure: comma_and(
                &self.messages.failure,
                &right.messages.mid_sentence_negated_failure,
            ),
            mid_sentence_failure: comma_and(
                &self.messages.mid_sentence_failure,
                &right.messages.mid_sentence_failure,
            ),
            mid_sentence_negated_failure: comma_and(
                &self.messages.mid_sentence_failure,
                &right.messages.mid_sentence_negated_failure,
            ),
        };

        Self {
            passed: right.passed,
            messages,
        }
    }
}

impl std::ops::Not for Verdict {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            passed: !self.passed,
            messages: self.messages.swapped(),
        }
    }
}
