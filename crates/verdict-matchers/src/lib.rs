// verdict-matchers/src/lib.rs
// ============================================================================
// Module: Verdict Matchers
// Description: Built-in leaf matchers for the Verdict assertion library.
// Purpose: Provide the standard matcher vocabulary over the core runtime.
// Dependencies: match-logic, regex, verdict-core
// ============================================================================

//! ## Overview
//! This crate ships the built-in matcher vocabulary: equality, ordering,
//! containment, string, state, count, and filesystem matchers. Each matcher
//! produces a [`match_logic::Verdict`] with full sentence pairs, composes
//! with the combinators, and accepts a `.using(..)` strategy override where
//! a capability interface backs its question.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod contain;
pub mod equal;
pub mod fs;
pub mod length;
pub mod ordering;
pub mod state;
pub mod string;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use contain::AllOfMatcher;
pub use contain::ContainMatcher;
pub use contain::InOrderMatcher;
pub use contain::NoneOfMatcher;
pub use contain::SameElementsMatcher;
pub use contain::contain;
pub use contain::contain_all_of;
pub use contain::contain_none_of;
pub use contain::contain_the_same_elements_as;
pub use contain::contain_the_same_elements_in_order_as;
pub use equal::EqualMatcher;
pub use equal::equal;
pub use fs::BeReadableMatcher;
pub use fs::BeWritableMatcher;
pub use fs::ExistMatcher;
pub use fs::be_readable;
pub use fs::be_writable;
pub use fs::exist;
pub use length::HaveLengthMatcher;
pub use length::HaveSizeMatcher;
pub use length::have_length;
pub use length::have_size;
pub use ordering::OrderingMatcher;
pub use ordering::be_greater_than;
pub use ordering::be_greater_than_or_equal_to;
pub use ordering::be_less_than;
pub use ordering::be_less_than_or_equal_to;
pub use state::BeDefinedMatcher;
pub use state::BeEmptyMatcher;
pub use state::BeSortedMatcher;
pub use state::be_defined;
pub use state::be_empty;
pub use state::be_sorted;
pub use string::EndWithMatcher;
pub use string::FullyMatchMatcher;
pub use string::IncludeMatcher;
pub use string::StartWithMatcher;
pub use string::end_with;
pub use string::fully_match;
pub use string::include;
pub use string::start_with;
