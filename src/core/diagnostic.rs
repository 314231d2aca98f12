//! Non-fatal conditions reported alongside normal results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of non-fatal conditions the engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// An operation referenced a category that does not exist
    NotFound,
    /// Matching or reporting ran over empty input
    DegenerateState,
}

/// A diagnostic kind with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(category: &str) -> Self {
        Self::new(
            DiagnosticKind::NotFound,
            format!("category '{category}' does not exist"),
        )
    }

    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::DegenerateState, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}
