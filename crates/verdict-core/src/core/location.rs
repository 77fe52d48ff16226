// verdict-core/src/core/location.rs
// ============================================================================
// Module: Source Locations
// Description: Capture of assertion call sites for failure reporting.
// Purpose: Record the file, line, and column where an assertion was written.
// Dependencies: serde, std::panic::Location
// ============================================================================

//! ## Overview
//! Every assertion entry point captures the source position of its caller so
//! failure messages can say where the expectation was written, not where it
//! was evaluated. Capture rides on `#[track_caller]`, so the recorded
//! position survives any number of helper layers that also opt in.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::panic::Location;

use serde::Serialize;

// ============================================================================
// SECTION: Source Location
// ============================================================================

/// Source position captured at an assertion entry point.
///
/// The `Display` form is `file.rs:42` (base name and line), the shape quoted
/// inside failure messages. Only serialization is derived; deserialized
/// failure data travels as [`crate::core::FailureReport`], which owns its
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    /// Full compiler-reported path of the source file.
    pub file: &'static str,
    /// One-based line number.
    pub line: u32,
    /// One-based column number.
    pub column: u32,
}

impl SourceLocation {
    /// Captures the location of the caller.
    ///
    /// Propagates through every intermediate function marked
    /// `#[track_caller]`, so entry points record the assertion site rather
    /// than their own bodies.
    #[must_use]
    #[track_caller]
    pub const fn capture() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }

    /// Returns the base name of the source file.
    ///
    /// Both separator styles are handled so messages stay stable across
    /// platforms.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        let file: &'static str = self.file;
        match file.rsplit(['/', '\\']).next() {
            Some(name) => name,
            None => file,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name(), self.line)
    }
}
