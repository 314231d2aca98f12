//! Match candidates, per-query results, and batch result sets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label emitted for queries that did not reach the threshold.
pub const NO_MATCH: &str = "no_match";

/// A ranked (category, score) pair for a single query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub category: String,
    /// The normalized variant text that produced the score
    pub variant: String,
    /// Similarity score in 0..=100
    pub score: u8,
}

/// Outcome of the threshold decision for one query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assignment {
    Matched(String),
    NoMatch,
}

impl Assignment {
    pub fn is_match(&self) -> bool {
        matches!(self, Assignment::Matched(_))
    }

    /// Category name, or [`NO_MATCH`] for rejected queries.
    pub fn label(&self) -> &str {
        match self {
            Assignment::Matched(c) => c,
            Assignment::NoMatch => NO_MATCH,
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fully resolved outcome for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The query exactly as supplied
    pub query: String,
    pub assignment: Assignment,
    /// Best score seen; `None` when there was nothing to compare against
    pub score: Option<u8>,
    /// Ranked candidates, highest first, at most `limit` long
    pub candidates: Vec<MatchCandidate>,
}

impl MatchResult {
    /// Apply the inclusive threshold to an already ranked candidate list.
    pub fn decide(query: impl Into<String>, candidates: Vec<MatchCandidate>, threshold: u8) -> Self {
        let (assignment, score) = match candidates.first() {
            Some(best) if best.score >= threshold => {
                (Assignment::Matched(best.category.clone()), Some(best.score))
            }
            Some(best) => (Assignment::NoMatch, Some(best.score)),
            None => (Assignment::NoMatch, None),
        };
        Self {
            query: query.into(),
            assignment,
            score,
            candidates,
        }
    }

    pub fn is_match(&self) -> bool {
        self.assignment.is_match()
    }
}

/// Which results to keep when filtering a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultFilter {
    #[default]
    All,
    Matched,
    Unmatched,
}

/// Ordered results of one batch run, parallel to the input queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResults {
    pub threshold: u8,
    pub limit: usize,
    pub results: Vec<MatchResult>,
}

impl BatchResults {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchResult> {
        self.results.iter()
    }

    /// (query, category-or-`no_match`) pairs in input order.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.results
            .iter()
            .map(|r| (r.query.as_str(), r.assignment.label()))
            .collect()
    }

    pub fn filter(&self, filter: ResultFilter) -> Vec<&MatchResult> {
        self.results
            .iter()
            .filter(|r| match filter {
                ResultFilter::All => true,
                ResultFilter::Matched => r.is_match(),
                ResultFilter::Unmatched => !r.is_match(),
            })
            .collect()
    }

    pub fn matched_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_match()).count()
    }

    pub fn unmatched_count(&self) -> usize {
        self.len() - self.matched_count()
    }

    /// Share of rejected queries; 0.0 for an empty batch.
    pub fn no_match_ratio(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.unmatched_count() as f64 / self.len() as f64
    }

    /// Share of accepted queries; 0.0 for an empty batch.
    pub fn match_ratio(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.matched_count() as f64 / self.len() as f64
    }

    pub fn to_json_string(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<'a> IntoIterator for &'a BatchResults {
    type Item = &'a MatchResult;
    type IntoIter = std::slice::Iter<'a, MatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
