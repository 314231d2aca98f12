//! Unmatched-ratio statistics and random samples of rejected queries.

use crate::core::{BatchResults, Report};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use tracing::debug;

/// Builds [`Report`]s. Sampling draws from its own RNG, seeded for
/// reproducible output when a seed is given.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    rng: StdRng,
}

impl ReportGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Summarize a batch, sampling `min(sample_size, unmatched)` distinct
    /// unmatched queries uniformly without replacement.
    pub fn summarize(&mut self, results: &BatchResults, sample_size: usize) -> Report {
        if results.is_empty() {
            return Report::empty(results.threshold);
        }

        let unmatched: Vec<&str> = results
            .iter()
            .filter(|r| !r.is_match())
            .map(|r| r.query.as_str())
            .collect();
        let amount = sample_size.min(unmatched.len());
        let samples: Vec<String> = index::sample(&mut self.rng, unmatched.len(), amount)
            .into_iter()
            .map(|i| unmatched[i].to_string())
            .collect();

        debug!(
            total = results.len(),
            unmatched = unmatched.len(),
            sampled = samples.len(),
            "Built matching report"
        );
        Report {
            threshold: results.threshold,
            total: results.len(),
            unmatched: unmatched.len(),
            no_match_ratio: unmatched.len() as f64 / results.len() as f64,
            has_data: true,
            samples,
        }
    }
}
