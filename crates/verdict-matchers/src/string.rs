// verdict-matchers/src/string.rs
// ============================================================================
// Module: String Matchers
// Description: Substring and regular expression matchers for string values.
// Purpose: Provide `start_with`, `end_with`, `include`, and `fully_match`.
// Dependencies: match-logic, regex, verdict-core
// ============================================================================

//! ## Overview
//! String matchers accept any actual that dereferences to `str`. The
//! substring matchers test prefix, suffix, and containment; `fully_match`
//! takes a compiled [`Regex`] and requires it to match the entire string,
//! not merely a fragment of it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use match_logic::Matcher;
use match_logic::Verdict;
use regex::Regex;
use verdict_core::Renderer;

// ============================================================================
// SECTION: Substring Matchers
// ============================================================================

/// Matcher asserting that a string starts with a substring.
#[derive(Debug, Clone)]
pub struct StartWithMatcher {
    /// The expected prefix.
    prefix: String,
}

/// Matches strings starting with `prefix`.
#[must_use]
pub fn start_with(prefix: impl Into<String>) -> StartWithMatcher {
    StartWithMatcher {
        prefix: prefix.into(),
    }
}

impl<C> Matcher<C> for StartWithMatcher
where
    C: AsRef<str> + fmt::Debug + ?Sized,
{
    fn verdict(&self, actual: &C) -> Verdict {
        let passed = actual.as_ref().starts_with(&self.prefix);
        let actual_text = Renderer::DEFAULT.render(actual);
        let prefix_text = Renderer::DEFAULT.render(self.prefix.as_str());
        Verdict::new(
            passed,
            format!("{actual_text} did not start with substring {prefix_text}"),
            format!("{actual_text} started with substring {prefix_text}"),
        )
    }
}

/// Matcher asserting that a string ends with a substring.
#[derive(Debug, Clone)]
pub struct EndWithMatcher {
    /// The expected suffix.
    suffix: String,
}

/// Matches strings ending with `suffix`.
#[must_use]
pub fn end_with(suffix: impl Into<String>) -> EndWithMatcher {
    EndWithMatcher {
        suffix: suffix.into(),
    }
}

impl<C> Matcher<C> for EndWithMatcher
where
    C: AsRef<str> + fmt::Debug + ?Sized,
{
    fn verdict(&self, actual: &C) -> Verdict {
        let passed = actual.as_ref().ends_with(&self.suffix);
        let actual_text = Renderer::DEFAULT.render(actual);
        let suffix_text = Renderer::DEFAULT.render(self.suffix.as_str());
        Verdict::new(
            passed,
            format!("{actual_text} did not end with substring {suffix_text}"),
            format!("{actual_text} ended with substring {suffix_text}"),
        )
    }
}

/// Matcher asserting that a string includes a substring anywhere.
#[derive(Debug, Clone)]
pub struct IncludeMatcher {
    /// The expected substring.
    substring: String,
}

/// Matches strings containing `substring` anywhere.
#[must_use]
pub fn include(substring: impl Into<String>) -> IncludeMatcher {
    IncludeMatcher {
        substring: substring.into(),
    }
}

impl<C> Matcher<C> for IncludeMatcher
where
    C: AsRef<str> + fmt::Debug + ?Sized,
{
    fn verdict(&self, actual: &C) -> Verdict {
        let passed = actual.as_ref().contains(&self.substring);
        let actual_text = Renderer::DEFAULT.render(actual);
        let substring_text = Renderer::DEFAULT.render(self.substring.as_str());
        Verdict::new(
            passed,
            format!("{actual_text} did not include substring {substring_text}"),
            format!("{actual_text} included substring {substring_text}"),
        )
    }
}

// ============================================================================
// SECTION: Regular Expression Matcher
// ============================================================================

/// Matcher asserting that a regular expression matches the whole string.
#[derive(Debug, Clone)]
pub struct FullyMatchMatcher {
    /// The pattern as supplied, quoted in messages.
    pattern: Regex,
    /// The pattern wrapped in whole-string anchors. `None` only when the
    /// anchored form exceeds the compile size limit; the matcher then never
    /// passes.
    anchored: Option<Regex>,
}

/// Matches strings that `pattern` matches in their entirety.
///
/// The pattern needs no anchors of its own; it is wrapped in `\A(?:..)\z`
/// before matching.
#[must_use]
pub fn fully_match(pattern: Regex) -> FullyMatchMatcher {
    let anchored = Regex::new(&format!(r"\A(?:{})\z", pattern.as_str())).ok();
    FullyMatchMatcher {
        pattern,
        anchored,
    }
}

impl<C> Matcher<C> for FullyMatchMatcher
where
    C: AsRef<str> + fmt::Debug + ?Sized,
{
    fn verdict(&self, actual: &C) -> Verdict {
        let passed =
            self.anchored.as_ref().is_some_and(|anchored| anchored.is_match(actual.as_ref()));
        let actual_text = Renderer::DEFAULT.render(actual);
        let pattern_text = Renderer::DEFAULT.render(self.pattern.as_str());
        Verdict::new(
            passed,
            format!("{actual_text} did not fully match the regular expression {pattern_text}"),
            format!("{actual_text} fully matched the regular expression {pattern_text}"),
        )
    }
}
