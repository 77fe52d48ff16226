// verdict-matchers/src/length.rs
// ============================================================================
// Module: Length and Size Matchers
// Description: Matchers for expected length and size counts.
// Purpose: Provide `have_length` and `have_size`.
// Dependencies: match-logic, verdict-core
// ============================================================================

//! ## Overview
//! Count matchers compare a value's length or size against an expected
//! count. The counts come from the [`Length`] and [`Size`] capabilities, so
//! string lengths are character counts and domain types can supply both a
//! logical length and an allocated size. The failure message states the
//! actual count alongside the expected one.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use match_logic::Matcher;
use match_logic::Verdict;
use verdict_core::DefaultLength;
use verdict_core::DefaultSize;
use verdict_core::Length;
use verdict_core::Renderer;
use verdict_core::Size;

// ============================================================================
// SECTION: Length
// ============================================================================

/// Matcher asserting an expected length.
#[derive(Debug, Clone, Copy)]
pub struct HaveLengthMatcher<S = DefaultLength> {
    /// The expected length.
    expected: usize,
    /// The length strategy consulted.
    strategy: S,
}

/// Matches values whose length equals `expected`.
#[must_use]
pub const fn have_length(expected: usize) -> HaveLengthMatcher {
    HaveLengthMatcher {
        expected,
        strategy: DefaultLength,
    }
}

impl<S> HaveLengthMatcher<S> {
    /// Replaces the length strategy for this assertion.
    #[must_use]
    pub fn using<S2>(self, strategy: S2) -> HaveLengthMatcher<S2> {
        HaveLengthMatcher {
            expected: self.expected,
            strategy,
        }
    }
}

impl<T, S> Matcher<T> for HaveLengthMatcher<S>
where
    T: fmt::Debug + ?Sized,
    S: Length<T>,
{
    fn verdict(&self, actual: &T) -> Verdict {
        let length = self.strategy.length_of(actual);
        let expected = self.expected;
        let actual_text = Renderer::DEFAULT.render(actual);
        Verdict::new(
            length == expected,
            format!("{actual_text} had length {length} instead of expected length {expected}"),
            format!("{actual_text} had length {expected}"),
        )
    }
}

// ============================================================================
// SECTION: Size
// ============================================================================

/// Matcher asserting an expected size.
#[derive(Debug, Clone, Copy)]
pub struct HaveSizeMatcher<S = DefaultSize> {
    /// The expected size.
    expected: usize,
    /// The size strategy consulted.
    strategy: S,
}

/// Matches values whose size equals `expected`.
#[must_use]
pub const fn have_size(expected: usize) -> HaveSizeMatcher {
    HaveSizeMatcher {
        expected,
        strategy: DefaultSize,
    }
}

impl<S> HaveSizeMatcher<S> {
    /// Replaces the size strategy for this assertion.
    #[must_use]
    pub fn using<S2>(self, strategy: S2) -> HaveSizeMatcher<S2> {
        HaveSizeMatcher {
            expected: self.expected,
            strategy,
        }
    }
}

impl<T, S> Matcher<T> for HaveSizeMatcher<S>
where
    T: fmt::Debug + ?Sized,
    S: Size<T>,
{
    fn verdict(&self, actual: &T) -> Verdict {
        let size = self.strategy.size_of(actual);
        let expected = self.expected;
        let actual_text = Renderer::DEFAULT.render(actual);
        Verdict::new(
            size == expected,
            format!("{actual_text} had size {size} instead of expected size {expected}"),
            format!("{actual_text} had size {expected}"),
        )
    }
}
