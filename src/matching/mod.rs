//! Ranking of categories for free-text queries.
//!
//! A query is scored against every variant in the index; the best variants
//! are resolved back to their owning category through the reverse map.
//! Ranking is per variant, so a category can appear more than once in a
//! ranked list when several of its variants score well.

pub mod batch;
pub mod cancel;
pub(crate) mod config;

pub use batch::BatchRunner;
pub use cancel::CancelToken;
pub use config::{MatcherConfig, MAX_SCORE};

use crate::core::MatchCandidate;
use crate::index::VariantIndex;
use crate::similarity::{self, PreparedText, SimilarityAlgo};

/// Read-only view that ranks queries against a [`VariantIndex`].
#[derive(Debug, Clone, Copy)]
pub struct CategoryMatcher<'a> {
    index: &'a VariantIndex,
    algo: SimilarityAlgo,
}

impl<'a> CategoryMatcher<'a> {
    pub fn new(index: &'a VariantIndex, algo: SimilarityAlgo) -> Self {
        Self { index, algo }
    }

    pub fn index(&self) -> &'a VariantIndex {
        self.index
    }

    /// Up to `limit` candidates sorted by score, highest first. Equal scores
    /// keep the index's variant order. Empty when the index has no variants.
    pub fn match_one(&self, query: &str, limit: usize) -> Vec<MatchCandidate> {
        self.match_prepared(&PreparedText::new(query), limit)
    }

    pub fn match_prepared(&self, query: &PreparedText, limit: usize) -> Vec<MatchCandidate> {
        let universe = self.index.all_variants();
        similarity::top_k(query, universe, self.algo, limit)
            .into_iter()
            .filter_map(|(pos, score)| {
                let variant = universe[pos].as_str();
                self.index.resolve(variant).map(|category| MatchCandidate {
                    category: category.to_string(),
                    variant: variant.to_string(),
                    score,
                })
            })
            .collect()
    }
}
