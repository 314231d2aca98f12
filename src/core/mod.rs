//! Core data types for the reply matcher.
//!
//! Plain values passed between the index, matcher, batch runner, and report
//! generator, plus the validated category definition input.

pub mod definitions;
pub mod diagnostic;
pub mod report;
pub mod result;

// Re-exports for convenient access under crate::core::*
pub use definitions::CategoryDefinitions;
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use report::Report;
pub use result::{Assignment, BatchResults, MatchCandidate, MatchResult, ResultFilter, NO_MATCH};
