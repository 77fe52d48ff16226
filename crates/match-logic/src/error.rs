// match-logic/src/error.rs
// ============================================================================
// Module: Quantifier Error Definitions
// Description: Structured diagnostics for inspection quantifiers.
// Purpose: Provide rich diagnostics for ill-formed quantifier requests.
// Dependencies: serde::{Serialize, Deserialize}, std::fmt
// ============================================================================

//! ## Overview
//! Centralizes the quantifier validation errors, their user-facing messaging,
//! and serialization guarantees so inspection runtimes can surface precise
//! diagnostics instead of panicking on misuse.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::quantifier::Quantifier;

/// Errors raised when an inspection quantifier is ill-formed
///
/// Quantifier validation happens at evaluation time so misuse surfaces as a
/// structured error on the assertion result rather than a panic inside the
/// inspection loop.
///
/// # Invariants
/// - None. Variants capture structured validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantifierError {
    /// The quantifier names a count of zero where at least one is required
    ///
    /// `at_least(0)`, `at_most(0)`, and `exactly(0)` are rejected; the `no`
    /// quantifier expresses "zero elements satisfy" directly.
    ZeroCount {
        /// The quantifier that carried the zero count
        quantifier: Quantifier,
    },

    /// A `between` quantifier whose minimum exceeds its maximum
    InvertedRange {
        /// Lower bound of the requested range
        min: usize,
        /// Upper bound of the requested range
        max: usize,
    },
}

// ============================================================================
// SECTION: Display Implementation
// ============================================================================

impl fmt::Display for QuantifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCount {
                quantifier,
            } => {
                write!(f, "Invalid quantifier '{quantifier}': count must be at least 1")
            }
            Self::InvertedRange {
                min,
                max,
            } => {
                write!(f, "Invalid quantifier range: min {min} exceeds max {max}")
            }
        }
    }
}

// ============================================================================
// SECTION: Standard Trait Implementations
// ============================================================================

impl std::error::Error for QuantifierError {}

// ============================================================================
// SECTION: Convenience Helpers
// ============================================================================

impl QuantifierError {
    /// Creates a zero-count error for the given quantifier
    #[must_use]
    pub const fn zero_count(quantifier: Quantifier) -> Self {
        Self::ZeroCount {
            quantifier,
        }
    }

    /// Creates an inverted-range error
    #[must_use]
    pub const fn inverted_range(min: usize, max: usize) -> Self {
        Self::InvertedRange {
            min,
            max,
        }
    }
}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Convenient Result type for quantifier operations
pub type QuantifierResult<T = ()> = Result<T, QuantifierError>;

// Tests are in the central tests module (tests/quantifier.rs)
