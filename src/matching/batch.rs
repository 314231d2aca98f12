//! Threshold decisions over an ordered batch of queries.

use super::cancel::CancelToken;
use super::config::{validate_limit, validate_threshold, MatcherConfig};
use super::CategoryMatcher;
use crate::core::{BatchResults, MatchResult};
use crate::error::{MatchError, Result};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Default query count at which scoring switches to rayon.
pub const PAR_THRESHOLD: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRunner {
    limit: usize,
    threshold: u8,
    parallel_threshold: usize,
}

impl BatchRunner {
    pub fn new(limit: usize, threshold: u8) -> Result<Self> {
        validate_limit(limit)?;
        validate_threshold(threshold)?;
        Ok(Self {
            limit,
            threshold,
            parallel_threshold: PAR_THRESHOLD,
        })
    }

    pub fn from_config(cfg: &MatcherConfig) -> Result<Self> {
        Ok(Self::new(cfg.limit, cfg.threshold)?.with_parallel_threshold(cfg.parallel_threshold))
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Match every query and decide accept/reject against the threshold.
    /// One result per query, in input order.
    pub fn run<S>(&self, matcher: &CategoryMatcher<'_>, queries: &[S]) -> BatchResults
    where
        S: AsRef<str> + Sync,
    {
        let results: Vec<MatchResult> = if queries.len() >= self.parallel_threshold {
            queries
                .par_iter()
                .map(|q| self.decide(matcher, q.as_ref()))
                .collect()
        } else {
            queries
                .iter()
                .map(|q| self.decide(matcher, q.as_ref()))
                .collect()
        };
        self.finish(results)
    }

    /// Like [`BatchRunner::run`], but stops with [`MatchError::Cancelled`]
    /// once `cancel` is set. A cancelled run yields no partial results.
    pub fn run_with_cancel<S>(
        &self,
        matcher: &CategoryMatcher<'_>,
        queries: &[S],
        cancel: &CancelToken,
    ) -> Result<BatchResults>
    where
        S: AsRef<str> + Sync,
    {
        let total = queries.len();
        let completed = AtomicUsize::new(0);
        let one = |q: &S| -> Result<MatchResult> {
            if cancel.is_cancelled() {
                return Err(MatchError::Cancelled {
                    completed: completed.load(Ordering::Relaxed),
                    total,
                });
            }
            let r = self.decide(matcher, q.as_ref());
            completed.fetch_add(1, Ordering::Relaxed);
            Ok(r)
        };

        let results: Result<Vec<MatchResult>> = if total >= self.parallel_threshold {
            queries.par_iter().map(&one).collect()
        } else {
            queries.iter().map(&one).collect()
        };
        Ok(self.finish(results?))
    }

    fn decide(&self, matcher: &CategoryMatcher<'_>, query: &str) -> MatchResult {
        MatchResult::decide(query, matcher.match_one(query, self.limit), self.threshold)
    }

    fn finish(&self, results: Vec<MatchResult>) -> BatchResults {
        let batch = BatchResults {
            threshold: self.threshold,
            limit: self.limit,
            results,
        };
        debug!(
            queries = batch.len(),
            matched = batch.matched_count(),
            unmatched = batch.unmatched_count(),
            "Batch run complete"
        );
        batch
    }
}
