// verdict-matchers/src/contain.rs
// ============================================================================
// Module: Containment Matchers
// Description: Collection membership and multiset comparison matchers.
// Purpose: Provide `contain` and its same-elements/all-of/none-of variants.
// Dependencies: match-logic, verdict-core
// ============================================================================

//! ## Overview
//! Containment matchers ask membership questions about a collection: does it
//! hold one element, the same multiset as another collection, the same
//! sequence, all of a set of elements, or none of them. Every variant accepts
//! a `.using(..)` equality strategy applied element-wise, so normalized and
//! custom comparisons work inside collections exactly as they do for `equal`.
//!
//! `contain_the_same_elements_as` is multiset equality: order-free but
//! multiplicity-sensitive, implemented with a used-flag scan so strategies
//! that are not hashable or orderable still work.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use match_logic::Matcher;
use match_logic::Verdict;
use verdict_core::DefaultEquality;
use verdict_core::Equality;
use verdict_core::Renderer;

// ============================================================================
// SECTION: Single Element
// ============================================================================

/// Matcher asserting that a collection holds one expected element.
#[derive(Debug, Clone, Copy)]
pub struct ContainMatcher<T, S = DefaultEquality> {
    /// The element expected to be present.
    element: T,
    /// The equality strategy applied element-wise.
    equality: S,
}

/// Matches collections holding an element equal to `element`.
#[must_use]
pub const fn contain<T>(element: T) -> ContainMatcher<T> {
    ContainMatcher {
        element,
        equality: DefaultEquality,
    }
}

impl<T, S> ContainMatcher<T, S> {
    /// Replaces the element equality strategy for this assertion.
    #[must_use]
    pub fn using<S2>(self, equality: S2) -> ContainMatcher<T, S2> {
        ContainMatcher {
            element: self.element,
            equality,
        }
    }
}

impl<C, T, S> Matcher<C> for ContainMatcher<T, S>
where
    C: AsRef<[T]> + fmt::Debug + ?Sized,
    T: fmt::Debug,
    S: Equality<T>,
{
    fn verdict(&self, actual: &C) -> Verdict {
        let elements = actual.as_ref();
        let passed =
            elements.iter().any(|candidate| self.equality.are_equal(candidate, &self.element));
        let actual_text = Renderer::DEFAULT.render(actual);
        let element_text = Renderer::DEFAULT.render(&self.element);
        Verdict::new(
            passed,
            format!("{actual_text} did not contain element {element_text}"),
            format!("{actual_text} contained element {element_text}"),
        )
    }
}

// ============================================================================
// SECTION: Same Elements
// ============================================================================

/// Matcher asserting multiset equality with an expected collection.
#[derive(Debug, Clone)]
pub struct SameElementsMatcher<T, S = DefaultEquality> {
    /// The expected elements, in any order.
    expected: Vec<T>,
    /// The equality strategy applied element-wise.
    equality: S,
}

/// Matches collections holding the same elements as `expected`, in any order
/// but with matching multiplicities.
#[must_use]
pub fn contain_the_same_elements_as<T>(expected: impl Into<Vec<T>>) -> SameElementsMatcher<T> {
    SameElementsMatcher {
        expected: expected.into(),
        equality: DefaultEquality,
    }
}

impl<T, S> SameElementsMatcher<T, S> {
    /// Replaces the element equality strategy for this assertion.
    #[must_use]
    pub fn using<S2>(self, equality: S2) -> SameElementsMatcher<T, S2> {
        SameElementsMatcher {
            expected: self.expected,
            equality,
        }
    }

    /// Returns true when `actual` is a permutation of the expected elements.
    ///
    /// Each expected element may be consumed once, so duplicate elements must
    /// appear with the same multiplicity on both sides.
    fn is_permutation(&self, actual: &[T]) -> bool
    where
        S: Equality<T>,
    {
        if actual.len() != self.expected.len() {
            return false;
        }
        let mut used = vec![false; self.expected.len()];
        for candidate in actual {
            let Some(index) = self.expected.iter().enumerate().find_map(|(index, expected)| {
                (!used[index] && self.equality.are_equal(candidate, expected)).then_some(index)
            }) else {
                return false;
            };
            used[index] = true;
        }
        true
    }
}

impl<C, T, S> Matcher<C> for SameElementsMatcher<T, S>
where
    C: AsRef<[T]> + fmt::Debug + ?Sized,
    T: fmt::Debug,
    S: Equality<T>,
{
    fn verdict(&self, actual: &C) -> Verdict {
        let passed = self.is_permutation(actual.as_ref());
        let actual_text = Renderer::DEFAULT.render(actual);
        let expected_text = Renderer::DEFAULT.render(&self.expected);
        Verdict::new(
            passed,
            format!("{actual_text} did not contain the same elements as {expected_text}"),
            format!("{actual_text} contained the same elements as {expected_text}"),
        )
    }
}

// ============================================================================
// SECTION: Same Elements In Order
// ============================================================================

/// Matcher asserting element-wise sequence equality with an expected
/// collection.
#[derive(Debug, Clone)]
pub struct InOrderMatcher<T, S = DefaultEquality> {
    /// The expected elements, in order.
    expected: Vec<T>,
    /// The equality strategy applied element-wise.
    equality: S,
}

/// Matches collections holding the same elements as `expected` in the same
/// order.
#[must_use]
pub fn contain_the_same_elements_in_order_as<T>(
    expected: impl Into<Vec<T>>,
) -> InOrderMatcher<T> {
    InOrderMatcher {
        expected: expected.into(),
        equality: DefaultEquality,
    }
}

impl<T, S> InOrderMatcher<T, S> {
    /// Replaces the element equality strategy for this assertion.
    #[must_use]
    pub fn using<S2>(self, equality: S2) -> InOrderMatcher<T, S2> {
        InOrderMatcher {
            expected: self.expected,
            equality,
        }
    }
}

impl<C, T, S> Matcher<C> for InOrderMatcher<T, S>
where
    C: AsRef<[T]> + fmt::Debug + ?Sized,
    T: fmt::Debug,
    S: Equality<T>,
{
    fn verdict(&self, actual: &C) -> Verdict {
        let elements = actual.as_ref();
        let passed = elements.len() == self.expected.len()
            && elements
                .iter()
                .zip(&self.expected)
                .all(|(candidate, expected)| self.equality.are_equal(candidate, expected));
        let actual_text = Renderer::DEFAULT.render(actual);
        let expected_text = Renderer::DEFAULT.render(&self.expected);
        Verdict::new(
            passed,
            format!(
                "{actual_text} did not contain the same elements in the same order as \
                 {expected_text}"
            ),
            format!(
                "{actual_text} contained the same elements in the same order as {expected_text}"
            ),
        )
    }
}

// ============================================================================
// SECTION: All Of
// ============================================================================

/// Matcher asserting that every expected element is present.
#[derive(Debug, Clone)]
pub struct AllOfMatcher<T, S = DefaultEquality> {
    /// The elements that must all be present.
    expected: Vec<T>,
    /// The equality strategy applied element-wise.
    equality: S,
}

/// Matches collections holding every element of `expected`, regardless of
/// order or extra elements.
#[must_use]
pub fn contain_all_of<T>(expected: impl Into<Vec<T>>) -> AllOfMatcher<T> {
    AllOfMatcher {
        expected: expected.into(),
        equality: DefaultEquality,
    }
}

impl<T, S> AllOfMatcher<T, S> {
    /// Replaces the element equality strategy for this assertion.
    #[must_use]
    pub fn using<S2>(self, equality: S2) -> AllOfMatcher<T, S2> {
        AllOfMatcher {
            expected: self.expected,
            equality,
        }
    }
}

impl<C, T, S> Matcher<C> for AllOfMatcher<T, S>
where
    C: AsRef<[T]> + fmt::Debug + ?Sized,
    T: fmt::Debug,
    S: Equality<T>,
{
    fn verdict(&self, actual: &C) -> Verdict {
        let elements = actual.as_ref();
        let passed = self.expected.iter().all(|expected| {
            elements.iter().any(|candidate| self.equality.are_equal(candidate, expected))
        });
        let actual_text = Renderer::DEFAULT.render(actual);
        let expected_text = Renderer::DEFAULT.render(&self.expected);
        Verdict::new(
            passed,
            format!("{actual_text} did not contain all of {expected_text}"),
            format!("{actual_text} contained all of {expected_text}"),
        )
    }
}

// ============================================================================
// SECTION: None Of
// ============================================================================

/// Matcher asserting that no expected element is present.
#[derive(Debug, Clone)]
pub struct NoneOfMatcher<T, S = DefaultEquality> {
    /// The elements that must all be absent.
    expected: Vec<T>,
    /// The equality strategy applied element-wise.
    equality: S,
}

/// Matches collections holding none of the elements of `expected`.
#[must_use]
pub fn contain_none_of<T>(expected: impl Into<Vec<T>>) -> NoneOfMatcher<T> {
    NoneOfMatcher {
        expected: expected.into(),
        equality: DefaultEquality,
    }
}

impl<T, S> NoneOfMatcher<T, S> {
    /// Replaces the element equality strategy for this assertion.
    #[must_use]
    pub fn using<S2>(self, equality: S2) -> NoneOfMatcher<T, S2> {
        NoneOfMatcher {
            expected: self.expected,
            equality,
        }
    }
}

impl<C, T, S> Matcher<C> for NoneOfMatcher<T, S>
where
    C: AsRef<[T]> + fmt::Debug + ?Sized,
    T: fmt::Debug,
    S: Equality<T>,
{
    fn verdict(&self, actual: &C) -> Verdict {
        let elements = actual.as_ref();
        let passed = !self.expected.iter().any(|expected| {
            elements.iter().any(|candidate| self.equality.are_equal(candidate, expected))
        });
        let actual_text = Renderer::DEFAULT.render(actual);
        let expected_text = Renderer::DEFAULT.render(&self.expected);
        Verdict::new(
            passed,
            format!("{actual_text} contained at least one of {expected_text}"),
            format!("{actual_text} did not contain any of {expected_text}"),
        )
    }
}
