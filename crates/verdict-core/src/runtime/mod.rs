// verdict-core/src/runtime/mod.rs
// ============================================================================
// Module: Assertion Runtime
// Description: Entry points that evaluate matchers against live values.
// Purpose: Turn verdicts into pass/fail results with source positions.
// Dependencies: match-logic, crate::core
// ============================================================================

//! ## Overview
//! The runtime layer is where matchers meet values. [`expect`] wraps a single
//! value for `should`/`should_not` assertions, and the inspection entry
//! points ([`all`], [`every`], [`at_least`] and friends) apply one matcher
//! across a whole slice under a quantifier. Both report failures as
//! [`ExpectationError`] values carrying the assertion's source position.

pub mod expectation;
pub mod inspectors;

pub use expectation::Expectation;
pub use expectation::ExpectationError;
pub use expectation::expect;
pub use inspectors::Inspection;
pub use inspectors::all;
pub use inspectors::at_least;
pub use inspectors::at_most;
pub use inspectors::between;
pub use inspectors::every;
pub use inspectors::exactly;
pub use inspectors::no;
