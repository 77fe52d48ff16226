// verdict-core/src/core/mod.rs
// ============================================================================
// Module: Verdict Core Types
// Description: Source locations, bounded rendering, and failure snapshots.
// Purpose: Provide the stable building blocks shared by matchers and runtimes.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types carry no matcher semantics of their own: where an assertion was
//! written, how values are quoted inside messages, and the owned record shape
//! a failure serializes to.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod location;
pub mod render;
pub mod report;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use location::SourceLocation;
pub use render::Renderer;
pub use report::FailureReport;
