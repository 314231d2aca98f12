//! Python bindings for the reply matcher.
//!
//! Exposes the engine as a `Matcher` class plus a `similarity` submodule,
//! so Python scripts can classify replies without a Rust toolchain.

pub mod matcher;
pub mod similarity;

use pyo3::prelude::*;

/// Register all Python bindings with the module.
pub fn register_python_bindings(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matcher::PyMatcher>()?;
    m.add("NO_MATCH", crate::core::NO_MATCH)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;

    similarity::register_similarity_bindings(py, m)?;

    Ok(())
}

/// Initialize logging from Python
#[pyfunction]
#[pyo3(signature = (json=false))]
pub fn init_logging(json: bool) -> PyResult<()> {
    if json {
        crate::logging::init_tracing_json();
    } else {
        crate::logging::init_tracing();
    }
    Ok(())
}
