//! Fuzzy classification of free-text replies into predefined categories.
//!
//! Each category carries known textual variants. Queries are scored against
//! every variant, the best variant's category is accepted when its score
//! reaches the threshold, and unmatched replies can be summarized in a
//! sampled report.
//!
//! ```
//! use reply_matcher::{Classifier, MatcherConfig};
//!
//! let defs = r#"{"fruit": ["apple", "banana"], "veg": ["carrot"]}"#;
//! let mut engine = Classifier::from_json_str(defs, MatcherConfig::default()).unwrap();
//! let results = engine.run(&["appel", "xyz123"]).unwrap();
//! assert_eq!(results.pairs(), vec![("appel", "fruit"), ("xyz123", "no_match")]);
//! ```

/// Core data types module
pub mod core;
pub mod engine;
pub mod error;
pub mod index;
pub mod logging;
pub mod matching;
pub mod report;
pub mod similarity;

#[cfg(feature = "python-ext")]
pub mod python_bindings;

pub use crate::core::{
    Assignment, BatchResults, CategoryDefinitions, Diagnostic, DiagnosticKind, MatchCandidate,
    MatchResult, Report, ResultFilter, NO_MATCH,
};
pub use engine::Classifier;
pub use error::{MatchError, Result};
pub use index::VariantIndex;
pub use matching::{BatchRunner, CancelToken, CategoryMatcher, MatcherConfig};
pub use report::ReportGenerator;
pub use similarity::SimilarityAlgo;

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python-ext")]
#[pymodule]
fn reply_matcher(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python_bindings::register_python_bindings(m.py(), m)
}
