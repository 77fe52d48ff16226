// system-tests/tests/helpers/assertions.rs
// ============================================================================
// Module: Assertion Helpers
// Description: Result-based assertion vocabulary for system-test suites.
// Purpose: Keep suite tests panic-free under the workspace lint regime.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Suite tests return `TestResult` and assert through `check!`/`check_eq!`,
//! which surface failures as errors instead of panics. The macros route
//! through [`ensure`] so every suite shares one failure shape.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::error::Error;
use std::fmt;

// ========================================================================
// SECTION: Test Result Helpers
// ========================================================================

/// Standard result type used across the system-test suites.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl TestError {
    /// Creates a new test error with the provided message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(Box::new(TestError::new(message))) }
}

// ========================================================================
// SECTION: Assertion Macros
// ========================================================================

/// Checks a condition and returns a test error instead of panicking.
macro_rules! check {
    ($cond:expr $(,)?) => {{
        $crate::helpers::assertions::ensure(
            $cond,
            concat!("Assertion failed: ", stringify!($cond)),
        )?;
    }};
    ($cond:expr, $($arg:tt)+) => {{
        $crate::helpers::assertions::ensure($cond, format!($($arg)+))?;
    }};
}

/// Checks equality and returns a test error instead of panicking.
macro_rules! check_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let left_val = &$left;
        let right_val = &$right;
        $crate::helpers::assertions::ensure(
            left_val == right_val,
            format!("Expected {left_val:?} == {right_val:?}"),
        )?;
    }};
    ($left:expr, $right:expr, $($arg:tt)+) => {{
        let left_val = &$left;
        let right_val = &$right;
        $crate::helpers::assertions::ensure(left_val == right_val, format!($($arg)+))?;
    }};
}

pub(crate) use check;
pub(crate) use check_eq;
