// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for Verdict system-tests.
// Purpose: Provide result assertions and custom strategy fixtures.
// Dependencies: system-tests, verdict-core
// ============================================================================

//! ## Overview
//! Shared helpers for Verdict system-tests: the `TestResult`/`check!` assertion
//! vocabulary and the custom capability strategy objects the strategy suites
//! substitute for the standard-library defaults.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod assertions;
pub mod strategies;
