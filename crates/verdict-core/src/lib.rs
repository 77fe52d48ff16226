// verdict-core/src/lib.rs
// ============================================================================
// Module: Verdict Core Library
// Description: Public API surface for the Verdict assertion core.
// Purpose: Expose core types, capability interfaces, and the runtime.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Verdict core provides the assertion runtime for the Verdict matcher
//! library: expectation entry points, quantified collection inspections, and
//! failure reporting with captured source positions. Matchers plug in through
//! explicit capability interfaces (equality, ordering, emptiness and so on)
//! rather than hard-wiring standard library semantics.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::Chained;
pub use interfaces::DecidedBy;
pub use interfaces::DefaultDefinedness;
pub use interfaces::DefaultEmptiness;
pub use interfaces::DefaultEquality;
pub use interfaces::DefaultExistence;
pub use interfaces::DefaultLength;
pub use interfaces::DefaultOrdering;
pub use interfaces::DefaultReadability;
pub use interfaces::DefaultSize;
pub use interfaces::DefaultSortable;
pub use interfaces::DefaultWritability;
pub use interfaces::Definedness;
pub use interfaces::Emptiness;
pub use interfaces::Equality;
pub use interfaces::Existence;
pub use interfaces::Length;
pub use interfaces::Lowercased;
pub use interfaces::NormalizedEquality;
pub use interfaces::Normalization;
pub use interfaces::OrderedBy;
pub use interfaces::OrderingStrategy;
pub use interfaces::Readability;
pub use interfaces::Size;
pub use interfaces::Sortable;
pub use interfaces::Trimmed;
pub use interfaces::Writability;
pub use interfaces::decided_by;
pub use interfaces::default_equality;
pub use interfaces::default_ordering;
pub use interfaces::lowercased;
pub use interfaces::ordered_by;
pub use interfaces::trimmed;
pub use runtime::Expectation;
pub use runtime::ExpectationError;
pub use runtime::Inspection;
pub use runtime::all;
pub use runtime::at_least;
pub use runtime::at_most;
pub use runtime::between;
pub use runtime::every;
pub use runtime::exactly;
pub use runtime::expect;
pub use runtime::no;
