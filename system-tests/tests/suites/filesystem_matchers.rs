// system-tests/tests/suites/filesystem_matchers.rs
// ============================================================================
// Module: Filesystem Matcher Tests
// Description: Path matchers over real files and the in-memory stub.
// Purpose: Pin the default filesystem strategies and stubbed substitution.
// Dependencies: helpers, tempfile, verdict-core, verdict-matchers
// ============================================================================

//! ## Overview
//! The path matchers consult capability strategies whose defaults touch the
//! real filesystem. These tests exercise the defaults inside a temporary
//! directory, then swap in the in-memory stub to show the matchers never
//! require actual I/O.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use verdict_core::ExpectationError;
use verdict_core::expect;
use verdict_matchers::be_readable;
use verdict_matchers::be_writable;
use verdict_matchers::exist;

use crate::helpers::assertions::TestResult;
use crate::helpers::assertions::check;
use crate::helpers::assertions::check_eq;
use crate::helpers::strategies::StubFilesystem;

/// Unwraps an expectation failure or reports a test error.
fn failure_message(
    result: Result<(), ExpectationError>,
) -> Result<String, Box<dyn std::error::Error>> {
    match result {
        Ok(()) => Err("Expected the assertion to fail".into()),
        Err(error) => Ok(error.message()),
    }
}

// ============================================================================
// SECTION: Real Filesystem Defaults
// ============================================================================

#[test]
fn test_defaults_see_a_freshly_written_file() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("report.txt");
    fs::write(&path, "contents")?;

    expect(&path).should(exist())?;
    expect(&path).should(be_readable())?;
    expect(&path).should(be_writable())?;
    Ok(())
}

#[test]
fn test_defaults_reject_a_missing_path() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("missing.txt");

    expect(&path).should_not(exist())?;
    expect(&path).should_not(be_readable())?;
    Ok(())
}

#[test]
fn test_read_only_permissions_block_writability() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("sealed.txt");
    fs::write(&path, "contents")?;

    let mut permissions = fs::metadata(&path)?.permissions();
    permissions.set_readonly(true);
    fs::set_permissions(&path, permissions)?;

    expect(&path).should(be_readable())?;
    expect(&path).should_not(be_writable())?;

    let mut permissions = fs::metadata(&path)?.permissions();
    #[allow(clippy::permissions_set_readonly_false, reason = "restoring the fixture")]
    permissions.set_readonly(false);
    fs::set_permissions(&path, permissions)?;
    Ok(())
}

#[test]
fn test_directories_exist_too() -> TestResult {
    let dir = TempDir::new()?;
    expect(dir.path()).should(exist())?;
    Ok(())
}

// ============================================================================
// SECTION: Stubbed Strategies
// ============================================================================

#[test]
fn test_the_stub_answers_without_touching_disk() -> TestResult {
    let stub = StubFilesystem::with_files([PathBuf::from("/virtual/report.txt")]);
    let present = PathBuf::from("/virtual/report.txt");
    let absent = PathBuf::from("/virtual/missing.txt");

    expect(&present).should(exist().using(stub.clone()))?;
    expect(&present).should(be_readable().using(stub.clone()))?;
    expect(&present).should(be_writable().using(stub.clone()))?;
    expect(&absent).should_not(exist().using(stub))?;
    Ok(())
}

#[test]
fn test_the_stub_honours_read_only_entries() -> TestResult {
    let sealed = PathBuf::from("/virtual/sealed.txt");
    let stub = StubFilesystem::with_files([sealed.clone()]).read_only(sealed.clone());

    expect(&sealed).should(be_readable().using(stub.clone()))?;
    check!(expect(&sealed).should(be_writable().using(stub)).is_err());
    Ok(())
}

#[test]
fn test_stubbed_failures_quote_the_path() -> TestResult {
    let stub = StubFilesystem::default();
    let absent = PathBuf::from("/virtual/report.txt");

    let message = failure_message(expect(&absent).should(exist().using(stub)))?;
    check_eq!(message, "\"/virtual/report.txt\" did not exist");
    Ok(())
}

#[test]
fn test_stubbed_negated_failures_use_the_positive_voice() -> TestResult {
    let present = PathBuf::from("/virtual/report.txt");
    let stub = StubFilesystem::with_files([present.clone()]);

    let message = failure_message(expect(&present).should_not(exist().using(stub)))?;
    check_eq!(message, "\"/virtual/report.txt\" existed");
    Ok(())
}
