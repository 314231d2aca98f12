//! Python `Matcher` class wrapping [`Classifier`].

use super::similarity::parse_algo;
use crate::core::{CategoryDefinitions, ResultFilter};
use crate::engine::Classifier;
use crate::matching::MatcherConfig;
use pyo3::prelude::*;
use pyo3::types::PyDict;

#[pyclass(name = "Matcher")]
pub struct PyMatcher {
    inner: Classifier,
}

#[pymethods]
impl PyMatcher {
    #[new]
    #[pyo3(signature = (categories, threshold=80, limit=1, algo="weighted_ratio", seed=None))]
    fn new(
        categories: &Bound<'_, PyDict>,
        threshold: u8,
        limit: usize,
        algo: &str,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let config = MatcherConfig {
            threshold,
            limit,
            algo: parse_algo(algo)?,
            seed,
            ..MatcherConfig::default()
        };
        // dict order decides ownership of variants shared between categories
        let entries = categories
            .iter()
            .map(|(name, variants)| {
                let name: String = name.extract()?;
                let variants: Vec<String> = variants.extract()?;
                Ok((name, variants))
            })
            .collect::<PyResult<Vec<_>>>()?;
        let defs = CategoryDefinitions::new(entries)?;
        Ok(Self {
            inner: Classifier::new(&defs, config)?,
        })
    }

    #[getter]
    fn threshold(&self) -> u8 {
        self.inner.config().threshold
    }

    fn categories(&self) -> Vec<String> {
        self.inner.categories().into_iter().map(str::to_string).collect()
    }

    fn add_variants(&mut self, category: &str, variants: Vec<String>) -> PyResult<usize> {
        Ok(self.inner.add_variants(category, &variants)?)
    }

    fn remove_category(&mut self, category: &str) -> bool {
        self.inner.remove_category(category)
    }

    fn resolve(&self, variant: &str) -> Option<String> {
        self.inner.resolve(variant).map(str::to_string)
    }

    /// Ranked (category, score) pairs for one query.
    #[pyo3(signature = (query, limit=1))]
    fn match_one(&self, query: &str, limit: usize) -> PyResult<Vec<(String, u8)>> {
        Ok(self
            .inner
            .match_one_with_limit(query, limit)?
            .into_iter()
            .map(|c| (c.category, c.score))
            .collect())
    }

    /// Classify a list of replies; returns (reply, category-or-"no_match") pairs.
    fn run(&mut self, queries: Vec<String>) -> PyResult<Vec<(String, String)>> {
        let results = self.inner.run(&queries)?;
        Ok(results
            .pairs()
            .into_iter()
            .map(|(q, c)| (q.to_string(), c.to_string()))
            .collect())
    }

    /// Replies of the latest run that were not matched.
    fn unmatched(&self) -> Vec<String> {
        self.inner
            .results()
            .map(|r| {
                r.filter(ResultFilter::Unmatched)
                    .into_iter()
                    .map(|m| m.query.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn no_match_ratio(&self) -> f64 {
        self.inner.results().map_or(0.0, |r| r.no_match_ratio())
    }

    /// Human-readable report of the latest run.
    #[pyo3(signature = (n=20))]
    fn report(&self, n: usize) -> String {
        self.inner.report_with(n).to_string()
    }

    fn report_json(&self, n: usize) -> PyResult<String> {
        Ok(self.inner.report_with(n).to_json_string()?)
    }

    fn __repr__(&self) -> String {
        format!(
            "Matcher(categories={}, variants={}, threshold={})",
            self.inner.index().category_count(),
            self.inner.index().variant_count(),
            self.inner.config().threshold
        )
    }
}
