//! Configuration for matching and reporting.

use crate::error::{MatchError, Result};
use crate::similarity::SimilarityAlgo;
use serde::{Deserialize, Serialize};

/// Upper bound of the similarity scale.
pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Minimum score (inclusive) needed to accept a match
    pub threshold: u8,
    /// Number of ranked candidates kept per query
    pub limit: usize,
    /// Scoring algorithm
    pub algo: SimilarityAlgo,
    /// Batches with at least this many queries are scored in parallel
    pub parallel_threshold: usize,
    /// Default number of unmatched samples in a report
    pub sample_size: usize,
    /// Seed for report sampling; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: 80,
            limit: 1,
            algo: SimilarityAlgo::default(),
            parallel_threshold: super::batch::PAR_THRESHOLD,
            sample_size: 20,
            seed: None,
        }
    }
}

impl MatcherConfig {
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold)?;
        validate_limit(self.limit)
    }

    /// Deserialize from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| MatchError::contract(format!("invalid matcher config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

pub(crate) fn validate_threshold(threshold: u8) -> Result<()> {
    if threshold > MAX_SCORE {
        return Err(MatchError::contract(format!(
            "threshold must be within 0..={MAX_SCORE}, got {threshold}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_limit(limit: usize) -> Result<()> {
    if limit == 0 {
        return Err(MatchError::contract("limit must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_reply_matcher_tool() {
        let cfg = MatcherConfig::default();
        assert_eq!(cfg.threshold, 80);
        assert_eq!(cfg.limit, 1);
        assert_eq!(cfg.sample_size, 20);
        assert_eq!(cfg.algo, SimilarityAlgo::WeightedRatio);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn json_fills_missing_fields() {
        let cfg = MatcherConfig::from_json_str(r#"{"threshold": 65, "algo": "token_set_ratio"}"#)
            .unwrap();
        assert_eq!(cfg.threshold, 65);
        assert_eq!(cfg.algo, SimilarityAlgo::TokenSetRatio);
        assert_eq!(cfg.limit, 1);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(MatcherConfig::from_json_str(r#"{"threshold": 101}"#).is_err());
        assert!(MatcherConfig::from_json_str(r#"{"threshold": 300}"#).is_err());
        assert!(MatcherConfig::from_json_str(r#"{"limit": 0}"#).is_err());
        assert!(MatcherConfig::from_json_str(r#"{"algo": "soundex"}"#).is_err());
    }
}
