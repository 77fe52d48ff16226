// verdict-core/src/interfaces/mod.rs
// ============================================================================
// Module: Capability Interfaces
// Description: Pluggable strategy traits for comparison and state predicates.
// Purpose: Define the contract surfaces matchers evaluate through.
// Dependencies: std::{cmp, fs, path}
// ============================================================================

//! ## Overview
//! Every question a matcher asks about a value goes through a single-method
//! capability trait. Each trait ships a default implementation backed by the
//! obvious standard-library behavior, and any assertion can substitute its
//! own strategy object for just that one check. Filesystem-backed defaults
//! keep their I/O bounded to metadata and open calls.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

// ============================================================================
// SECTION: Equality
// ============================================================================

/// Decides whether two values count as equal for one assertion.
pub trait Equality<T: ?Sized> {
    /// Returns true when the two values are equal under this strategy.
    fn are_equal(&self, left: &T, right: &T) -> bool;

    /// Wraps this strategy so both sides are normalized before comparison.
    ///
    /// Failure messages keep quoting the original values; normalization
    /// affects only the comparison.
    fn after_being<N>(self, normalization: N) -> NormalizedEquality<Self, N>
    where
        Self: Sized,
        T: Sized,
        N: Normalization<T>,
    {
        NormalizedEquality {
            equality: self,
            normalization,
        }
    }
}

/// `PartialEq`-backed equality used when no strategy is supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEquality;

impl<T: PartialEq + ?Sized> Equality<T> for DefaultEquality {
    fn are_equal(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

/// Returns the `PartialEq`-backed default equality strategy.
#[must_use]
pub const fn default_equality() -> DefaultEquality {
    DefaultEquality
}

/// Equality decided by a caller-supplied predicate.
#[derive(Debug, Clone, Copy)]
pub struct DecidedBy<F> {
    /// The deciding predicate.
    decide: F,
}

/// Builds an equality strategy from a two-argument predicate.
#[must_use]
pub const fn decided_by<F>(decide: F) -> DecidedBy<F> {
    DecidedBy {
        decide,
    }
}

impl<T: ?Sized, F> Equality<T> for DecidedBy<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn are_equal(&self, left: &T, right: &T) -> bool {
        (self.decide)(left, right)
    }
}

/// Equality strategy that normalizes both sides before comparing.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedEquality<E, N> {
    /// The inner equality applied after normalization.
    equality: E,
    /// The normalization applied to both sides.
    normalization: N,
}

impl<T, E, N> Equality<T> for NormalizedEquality<E, N>
where
    E: Equality<T>,
    N: Normalization<T>,
{
    fn are_equal(&self, left: &T, right: &T) -> bool {
        self.equality.are_equal(
            &self.normalization.normalized(left),
            &self.normalization.normalized(right),
        )
    }
}

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Canonicalizes a value before an equality comparison.
///
/// Normalizations produce owned values, so they are defined over owned types
/// such as `String` rather than borrowed slices.
pub trait Normalization<T> {
    /// Returns the canonical form of the value.
    fn normalized(&self, value: &T) -> T;

    /// Chains another normalization to run after this one.
    fn then<N>(self, next: N) -> Chained<Self, N>
    where
        Self: Sized,
        N: Normalization<T>,
    {
        Chained {
            first: self,
            second: next,
        }
    }
}

/// Two normalizations applied left to right.
#[derive(Debug, Clone, Copy)]
pub struct Chained<A, B> {
    /// The normalization applied first.
    first: A,
    /// The normalization applied second.
    second: B,
}

impl<T, A, B> Normalization<T> for Chained<A, B>
where
    A: Normalization<T>,
    B: Normalization<T>,
{
    fn normalized(&self, value: &T) -> T {
        self.second.normalized(&self.first.normalized(value))
    }
}

/// Strips leading and trailing whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trimmed;

/// Returns the whitespace-trimming normalization.
#[must_use]
pub const fn trimmed() -> Trimmed {
    Trimmed
}

impl Normalization<String> for Trimmed {
    fn normalized(&self, value: &String) -> String {
        value.trim().to_string()
    }
}

/// Lowercases the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lowercased;

/// Returns the lowercasing normalization.
#[must_use]
pub const fn lowercased() -> Lowercased {
    Lowercased
}

impl Normalization<String> for Lowercased {
    fn normalized(&self, value: &String) -> String {
        value.to_lowercase()
    }
}

// ============================================================================
// SECTION: Ordering
// ============================================================================

/// Decides how two values order for one assertion.
pub trait OrderingStrategy<T: ?Sized> {
    /// Returns the ordering of `left` relative to `right`, when comparable.
    fn compare(&self, left: &T, right: &T) -> Option<Ordering>;
}

/// `PartialOrd`-backed ordering used when no strategy is supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultOrdering;

impl<T: PartialOrd + ?Sized> OrderingStrategy<T> for DefaultOrdering {
    fn compare(&self, left: &T, right: &T) -> Option<Ordering> {
        left.partial_cmp(right)
    }
}

/// Returns the `PartialOrd`-backed default ordering strategy.
#[must_use]
pub const fn default_ordering() -> DefaultOrdering {
    DefaultOrdering
}

/// Ordering decided by a caller-supplied comparison.
#[derive(Debug, Clone, Copy)]
pub struct OrderedBy<F> {
    /// The deciding comparison.
    compare: F,
}

/// Builds an ordering strategy from a comparison function.
///
/// Returning `None` marks the two values incomparable; ordering matchers
/// fail in that case.
#[must_use]
pub const fn ordered_by<F>(compare: F) -> OrderedBy<F> {
    OrderedBy {
        compare,
    }
}

impl<T: ?Sized, F> OrderingStrategy<T> for OrderedBy<F>
where
    F: Fn(&T, &T) -> Option<Ordering>,
{
    fn compare(&self, left: &T, right: &T) -> Option<Ordering> {
        (self.compare)(left, right)
    }
}

// ============================================================================
// SECTION: Emptiness
// ============================================================================

/// Decides whether a value counts as empty.
pub trait Emptiness<T: ?Sized> {
    /// Returns true when the value is empty under this strategy.
    fn is_empty_value(&self, value: &T) -> bool;
}

/// Standard emptiness for strings, slices, vectors, and options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEmptiness;

impl Emptiness<str> for DefaultEmptiness {
    fn is_empty_value(&self, value: &str) -> bool {
        value.is_empty()
    }
}

impl Emptiness<String> for DefaultEmptiness {
    fn is_empty_value(&self, value: &String) -> bool {
        value.is_empty()
    }
}

impl<T> Emptiness<[T]> for DefaultEmptiness {
    fn is_empty_value(&self, value: &[T]) -> bool {
        value.is_empty()
    }
}

impl<T> Emptiness<Vec<T>> for DefaultEmptiness {
    fn is_empty_value(&self, value: &Vec<T>) -> bool {
        value.is_empty()
    }
}

impl<T> Emptiness<Option<T>> for DefaultEmptiness {
    fn is_empty_value(&self, value: &Option<T>) -> bool {
        value.is_none()
    }
}

// ============================================================================
// SECTION: Definedness
// ============================================================================

/// Decides whether a value counts as defined.
pub trait Definedness<T: ?Sized> {
    /// Returns true when the value is defined under this strategy.
    fn is_defined(&self, value: &T) -> bool;
}

/// Option-backed definedness used when no strategy is supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultDefinedness;

impl<T> Definedness<Option<T>> for DefaultDefinedness {
    fn is_defined(&self, value: &Option<T>) -> bool {
        value.is_some()
    }
}

// ============================================================================
// SECTION: Sortedness
// ============================================================================

/// Decides whether a collection counts as sorted.
pub trait Sortable<C: ?Sized> {
    /// Returns true when the collection is sorted under this strategy.
    fn is_sorted(&self, collection: &C) -> bool;
}

/// Adjacent-pair `PartialOrd` sortedness used when no strategy is supplied.
///
/// Incomparable adjacent pairs count as unsorted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultSortable;

impl<T: PartialOrd> Sortable<[T]> for DefaultSortable {
    fn is_sorted(&self, collection: &[T]) -> bool {
        collection.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

impl<T: PartialOrd> Sortable<Vec<T>> for DefaultSortable {
    fn is_sorted(&self, collection: &Vec<T>) -> bool {
        self.is_sorted(collection.as_slice())
    }
}

// ============================================================================
// SECTION: Filesystem Capabilities
// ============================================================================

/// Decides whether a path-like value exists.
pub trait Existence<T: ?Sized> {
    /// Returns true when the value exists under this strategy.
    fn exists(&self, value: &T) -> bool;
}

/// Filesystem-backed existence used when no strategy is supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultExistence;

impl Existence<Path> for DefaultExistence {
    fn exists(&self, value: &Path) -> bool {
        value.exists()
    }
}

/// Decides whether a path-like value is writable.
pub trait Writability<T: ?Sized> {
    /// Returns true when the value is writable under this strategy.
    fn is_writable(&self, value: &T) -> bool;
}

/// Metadata-backed writability used when no strategy is supplied.
///
/// A path is writable when its metadata can be read and its permissions are
/// not read-only. Missing paths are not writable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultWritability;

impl Writability<Path> for DefaultWritability {
    fn is_writable(&self, value: &Path) -> bool {
        fs::metadata(value).is_ok_and(|metadata| !metadata.permissions().readonly())
    }
}

/// Decides whether a path-like value is readable.
pub trait Readability<T: ?Sized> {
    /// Returns true when the value is readable under this strategy.
    fn is_readable(&self, value: &T) -> bool;
}

/// Open-backed readability used when no strategy is supplied.
///
/// A path is readable when it can be opened for reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultReadability;

impl Readability<Path> for DefaultReadability {
    fn is_readable(&self, value: &Path) -> bool {
        fs::File::open(value).is_ok()
    }
}

// ============================================================================
// SECTION: Length and Size
// ============================================================================

/// Supplies the length of a value.
pub trait Length<T: ?Sized> {
    /// Returns the length of the value under this strategy.
    fn length_of(&self, value: &T) -> usize;
}

/// Standard length for strings, slices, and vectors.
///
/// String length counts Unicode scalar values, not bytes, so messages about
/// human-readable text state the count a reader would expect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultLength;

impl Length<str> for DefaultLength {
    fn length_of(&self, value: &str) -> usize {
        value.chars().count()
    }
}

impl Length<String> for DefaultLength {
    fn length_of(&self, value: &String) -> usize {
        value.chars().count()
    }
}

impl<T> Length<[T]> for DefaultLength {
    fn length_of(&self, value: &[T]) -> usize {
        value.len()
    }
}

impl<T> Length<Vec<T>> for DefaultLength {
    fn length_of(&self, value: &Vec<T>) -> usize {
        value.len()
    }
}

/// Supplies the size of a value.
pub trait Size<T: ?Sized> {
    /// Returns the size of the value under this strategy.
    fn size_of(&self, value: &T) -> usize;
}

/// Standard size for strings, slices, and vectors.
///
/// Size agrees with [`DefaultLength`] for all built-in implementations; the
/// separate capability exists so domain types can expose both (a buffer with
/// a logical length and an allocated size, for instance).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultSize;

impl Size<str> for DefaultSize {
    fn size_of(&self, value: &str) -> usize {
        value.chars().count()
    }
}

impl Size<String> for DefaultSize {
    fn size_of(&self, value: &String) -> usize {
        value.chars().count()
    }
}

impl<T> Size<[T]> for DefaultSize {
    fn size_of(&self, value: &[T]) -> usize {
        value.len()
    }
}

impl<T> Size<Vec<T>> for DefaultSize {
    fn size_of(&self, value: &Vec<T>) -> usize {
        value.len()
    }
}
