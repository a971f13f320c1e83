//! Common types and utilities for the downlevel-dts rewriter.
//!
//! This crate provides foundational types used across all dts crates:
//! - Common enums (`NewLineKind`)
//! - Diagnostics produced while building syntax trees
//! - Line/column positions for reporting
//! - Recursion limits

// Common types - Shared constants to break circular dependencies
pub mod common;
pub use common::NewLineKind;

// Parser diagnostics (code + message + span)
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};

// Centralized limits and thresholds
pub mod limits;

// Line/column positions for source locations
pub mod position;
pub use position::{LineMap, Position};

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod position_tests;
#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod diagnostics_tests;
