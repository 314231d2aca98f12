//! Python bindings for string similarity scoring.

use crate::error::MatchError;
use crate::similarity::{self, SimilarityAlgo};
use pyo3::prelude::*;

/// Register similarity-related Python bindings.
pub fn register_similarity_bindings(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    let similarity_mod = pyo3::types::PyModule::new(py, "similarity")?;

    similarity_mod.add_function(wrap_pyfunction!(score_py, &similarity_mod)?)?;
    similarity_mod.add_function(wrap_pyfunction!(best_match_py, &similarity_mod)?)?;

    m.add_submodule(&similarity_mod)?;

    Ok(())
}

/// Parse an algorithm name such as `"token_set_ratio"`.
pub(crate) fn parse_algo(name: &str) -> Result<SimilarityAlgo, MatchError> {
    serde_json::from_value(serde_json::Value::String(name.to_string()))
        .map_err(|_| MatchError::contract(format!("unknown similarity algorithm '{name}'")))
}

/// Similarity of two strings on a 0..=100 scale.
#[pyfunction]
#[pyo3(name = "score")]
#[pyo3(signature = (a, b, algo="weighted_ratio"))]
fn score_py(a: &str, b: &str, algo: &str) -> PyResult<u8> {
    Ok(similarity::score(parse_algo(algo)?, a, b))
}

/// Best candidate and its score, or None when `candidates` is empty.
#[pyfunction]
#[pyo3(name = "best_match")]
#[pyo3(signature = (query, candidates, algo="weighted_ratio"))]
fn best_match_py(
    query: &str,
    candidates: Vec<String>,
    algo: &str,
) -> PyResult<Option<(String, u8)>> {
    let algo = parse_algo(algo)?;
    Ok(
        similarity::best_match(query, candidates.iter().map(String::as_str), algo)
            .map(|(c, s)| (c.to_string(), s)),
    )
}
