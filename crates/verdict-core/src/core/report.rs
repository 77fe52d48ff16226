// verdict-core/src/core/report.rs
// ============================================================================
// Module: Failure Reports
// Description: Owned, serializable snapshots of assertion failures.
// Purpose: Provide a stable record shape for golden-file checks and tooling.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! An expectation error borrows compiler-provided strings and cannot be
//! deserialized. `FailureReport` is the owned snapshot: message, base file
//! name, and line, suitable for serde round-trips and golden files.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Failure Report
// ============================================================================

/// Owned snapshot of one assertion failure.
///
/// Built from an `ExpectationError` via `From`; the runtime module owns the
/// conversion so this type stays free of runtime dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    /// The sentence explaining the failure.
    pub message: String,
    /// Base name of the file containing the assertion.
    pub file: String,
    /// One-based line number of the assertion.
    pub line: u32,
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.message, self.file, self.line)
    }
}
