// system-tests/tests/helpers/strategies.rs
// ============================================================================
// Module: Strategy Fixtures
// Description: Custom capability strategy objects for the strategy suites.
// Purpose: Substitute deterministic strategies for standard-library defaults.
// Dependencies: verdict-core
// ============================================================================

//! ## Overview
//! Each fixture here implements one capability interface with deliberately
//! non-default semantics, so the suites can show that matchers consult the
//! supplied strategy rather than the built-in one. The filesystem stub keeps
//! the path matchers testable without touching a real filesystem.

use std::path::Path;
use std::path::PathBuf;

use verdict_core::Definedness;
use verdict_core::Emptiness;
use verdict_core::Existence;
use verdict_core::Length;
use verdict_core::Readability;
use verdict_core::Size;
use verdict_core::Sortable;
use verdict_core::Writability;

// ========================================================================
// SECTION: Value Strategies
// ========================================================================

/// Sortedness strategy requiring non-increasing adjacent pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescendingSortable;

impl<T: PartialOrd> Sortable<[T]> for DescendingSortable {
    fn is_sorted(&self, collection: &[T]) -> bool {
        collection.windows(2).all(|pair| pair[0] >= pair[1])
    }
}

/// Emptiness strategy treating whitespace-only strings as empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceEmptiness;

impl Emptiness<String> for WhitespaceEmptiness {
    fn is_empty_value(&self, value: &String) -> bool {
        value.trim().is_empty()
    }
}

/// Definedness strategy treating zero as undefined.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroIsUndefined;

impl Definedness<i32> for ZeroIsUndefined {
    fn is_defined(&self, value: &i32) -> bool {
        *value != 0
    }
}

/// Length and size strategy counting bytes instead of characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteCounted;

impl Length<String> for ByteCounted {
    fn length_of(&self, value: &String) -> usize {
        value.len()
    }
}

impl Size<String> for ByteCounted {
    fn size_of(&self, value: &String) -> usize {
        value.len()
    }
}

// ========================================================================
// SECTION: Filesystem Stub
// ========================================================================

/// In-memory filesystem stub backing the path capability interfaces.
///
/// Paths listed in `existing` exist and are readable; they are writable
/// unless also listed in `readonly`. Everything else is absent.
#[derive(Debug, Clone, Default)]
pub struct StubFilesystem {
    /// Paths that exist in the stub.
    existing: Vec<PathBuf>,
    /// Existing paths whose permissions forbid writing.
    readonly: Vec<PathBuf>,
}

impl StubFilesystem {
    /// Creates a stub holding the given paths.
    #[must_use]
    pub fn with_files(existing: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            existing: existing.into_iter().collect(),
            readonly: Vec::new(),
        }
    }

    /// Marks a path read-only in the stub.
    #[must_use]
    pub fn read_only(mut self, path: PathBuf) -> Self {
        self.readonly.push(path);
        self
    }
}

impl Existence<Path> for StubFilesystem {
    fn exists(&self, value: &Path) -> bool {
        self.existing.iter().any(|path| path == value)
    }
}

impl Readability<Path> for StubFilesystem {
    fn is_readable(&self, value: &Path) -> bool {
        self.exists(value)
    }
}

impl Writability<Path> for StubFilesystem {
    fn is_writable(&self, value: &Path) -> bool {
        self.exists(value) && !self.readonly.iter().any(|path| path == value)
    }
}
