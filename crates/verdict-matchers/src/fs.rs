// verdict-matchers/src/fs.rs
// ============================================================================
// Module: Filesystem Matchers
// Description: Matchers for path existence, writability, and readability.
// Purpose: Provide `exist`, `be_writable`, and `be_readable`.
// Dependencies: match-logic, verdict-core
// ============================================================================

//! ## Overview
//! Filesystem matchers accept any path-like actual and consult a capability
//! strategy. The defaults touch the real filesystem with bounded metadata
//! and open calls; `.using(..)` substitutes an in-memory strategy so these
//! matchers stay testable without I/O.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::path::Path;

use match_logic::Matcher;
use match_logic::Verdict;
use verdict_core::DefaultExistence;
use verdict_core::DefaultReadability;
use verdict_core::DefaultWritability;
use verdict_core::Existence;
use verdict_core::Readability;
use verdict_core::Renderer;
use verdict_core::Writability;

// ============================================================================
// SECTION: Existence
// ============================================================================

/// Matcher asserting that a path exists.
#[derive(Debug, Clone, Copy)]
pub struct ExistMatcher<S = DefaultExistence> {
    /// The existence strategy consulted.
    strategy: S,
}

/// Matches paths that exist on the filesystem.
#[must_use]
pub const fn exist() -> ExistMatcher {
    ExistMatcher {
        strategy: DefaultExistence,
    }
}

impl<S> ExistMatcher<S> {
    /// Replaces the existence strategy for this assertion.
    #[must_use]
    pub fn using<S2>(self, strategy: S2) -> ExistMatcher<S2> {
        ExistMatcher {
            strategy,
        }
    }
}

impl<C, S> Matcher<C> for ExistMatcher<S>
where
    C: AsRef<Path> + fmt::Debug + ?Sized,
    S: Existence<Path>,
{
    fn verdict(&self, actual: &C) -> Verdict {
        let passed = self.strategy.exists(actual.as_ref());
        let actual_text = Renderer::DEFAULT.render(actual);
        Verdict::new(
            passed,
            format!("{actual_text} did not exist"),
            format!("{actual_text} existed"),
        )
    }
}

// ============================================================================
// SECTION: Writability
// ============================================================================

/// Matcher asserting that a path is writable.
#[derive(Debug, Clone, Copy)]
pub struct BeWritableMatcher<S = DefaultWritability> {
    /// The writability strategy consulted.
    strategy: S,
}

/// Matches paths whose permissions allow writing.
#[must_use]
pub const fn be_writable() -> BeWritableMatcher {
    BeWritableMatcher {
        strategy: DefaultWritability,
    }
}

impl<S> BeWritableMatcher<S> {
    /// Replaces the writability strategy for this assertion.
    #[must_use]
    pub fn using<S2>(self, strategy: S2) -> BeWritableMatcher<S2> {
        BeWritableMatcher {
            strategy,
        }
    }
}

impl<C, S> Matcher<C> for BeWritableMatcher<S>
where
    C: AsRef<Path> + fmt::Debug + ?Sized,
    S: Writability<Path>,
{
    fn verdict(&self, actual: &C) -> Verdict {
        let passed = self.strategy.is_writable(actual.as_ref());
        let actual_text = Renderer::DEFAULT.render(actual);
        Verdict::new(
            passed,
            format!("{actual_text} was not writable"),
            format!("{actual_text} was writable"),
        )
    }
}

// ============================================================================
// SECTION: Readability
// ============================================================================

/// Matcher asserting that a path is readable.
#[derive(Debug, Clone, Copy)]
pub struct BeReadableMatcher<S = DefaultReadability> {
    /// The readability strategy consulted.
    strategy: S,
}

/// Matches paths that can be opened for reading.
#[must_use]
pub const fn be_readable() -> BeReadableMatcher {
    BeReadableMatcher {
        strategy: DefaultReadability,
    }
}

impl<S> BeReadableMatcher<S> {
    /// Replaces the readability strategy for this assertion.
    #[must_use]
    pub fn using<S2>(self, strategy: S2) -> BeReadableMatcher<S2> {
        BeReadableMatcher {
            strategy,
        }
    }
}

impl<C, S> Matcher<C> for BeReadableMatcher<S>
where
    C: AsRef<Path> + fmt::Debug + ?Sized,
    S: Readability<Path>,
{
    fn verdict(&self, actual: &C) -> Verdict {
        let passed = self.strategy.is_readable(actual.as_ref());
        let actual_text = Renderer::DEFAULT.render(actual);
        Verdict::new(
            passed,
            format!("{actual_text} was not readable"),
            format!("{actual_text} was readable"),
        )
    }
}
