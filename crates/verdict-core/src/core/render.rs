// verdict-core/src/core/render.rs
// ============================================================================
// Module: Value Rendering
// Description: Bounded rendering of actual and expected values.
// Purpose: Keep failure messages readable even for pathological fixtures.
// Dependencies: std::fmt
// ============================================================================

//! ## Overview
//! Failure messages quote the values involved. Rendering goes through a
//! byte-bounded formatter so a huge collection or a deeply nested structure
//! cannot blow up an assertion message; overlong output is truncated at a
//! character boundary with a trailing `...`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

// ============================================================================
// SECTION: Renderer
// ============================================================================

/// Byte-bounded renderer used for every value quoted in a failure message.
///
/// # Invariants
/// - Output never exceeds `max_bytes` plus the three-byte `...` marker.
/// - Truncation lands on a character boundary, so output is always valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    /// Maximum rendered size in bytes before truncation.
    pub max_bytes: usize,
}

impl Renderer {
    /// The renderer used by all built-in matchers.
    pub const DEFAULT: Self = Self {
        max_bytes: 4096,
    };

    /// Creates a renderer with the given byte bound.
    #[must_use]
    pub const fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
        }
    }

    /// Renders a value, truncating output beyond the byte bound.
    #[must_use]
    #[allow(clippy::use_debug, reason = "Quoted values are rendered through the Debug formatter.")]
    pub fn render<T>(&self, value: &T) -> String
    where
        T: fmt::Debug + ?Sized,
    {
        let mut rendered = format!("{value:?}");
        if rendered.len() > self.max_bytes {
            let mut cut = self.max_bytes;
            while cut > 0 && !rendered.is_char_boundary(cut) {
                cut -= 1;
            }
            rendered.truncate(cut);
            rendered.push_str("...");
        }
        rendered
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::DEFAULT
    }
}
