//! Category to variant storage with a derived variant to category lookup.
//!
//! Categories iterate in name order and variants in lexical order within a
//! category. That order defines the flattened variant universe the matcher
//! scores against, so tie-breaking is deterministic for a given index state.
//!
//! The reverse map is never patched in place: every mutation recomputes it
//! from the category sets. When two categories hold the same variant text,
//! the category that received it most recently owns it.

use crate::core::definitions::validate_category_input;
use crate::core::CategoryDefinitions;
use crate::error::Result;
use crate::similarity::{normalize, PreparedText};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct VariantIndex {
    /// category -> (normalized variant -> write sequence)
    categories: BTreeMap<String, BTreeMap<String, u64>>,
    reverse: HashMap<String, String>,
    universe: Vec<PreparedText>,
    next_seq: u64,
}

impl VariantIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definitions(defs: &CategoryDefinitions) -> Result<Self> {
        let mut index = Self::new();
        for (name, variants) in defs.iter() {
            validate_category_input(name, variants)?;
            index.insert_variants(name, variants);
        }
        index.rebuild();
        Ok(index)
    }

    /// Normalize and union `variants` into `category`, creating it when absent.
    ///
    /// Returns how many variants were new to the category. Re-adding an
    /// existing variant makes this category its most recent owner again.
    pub fn add_variants<S: AsRef<str>>(&mut self, category: &str, variants: &[S]) -> Result<usize> {
        validate_category_input(category, variants)?;
        let added = self.insert_variants(category, variants);
        self.rebuild();
        Ok(added)
    }

    /// Delete a category with all its variants. Returns false when it did not
    /// exist, in which case nothing changes.
    pub fn remove_category(&mut self, category: &str) -> bool {
        if self.categories.remove(category).is_none() {
            return false;
        }
        self.rebuild();
        true
    }

    /// Owning category of a variant. The lookup key is normalized first.
    pub fn resolve(&self, variant: &str) -> Option<&str> {
        self.reverse
            .get(normalize(variant).as_ref())
            .map(String::as_str)
    }

    /// Flattened variants across all categories in stable iteration order.
    pub fn all_variants(&self) -> &[PreparedText] {
        &self.universe
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn variants_of(&self, category: &str) -> Option<Vec<&str>> {
        self.categories
            .get(category)
            .map(|vs| vs.keys().map(String::as_str).collect())
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of entries in the variant universe (shared texts count once per
    /// category holding them).
    pub fn variant_count(&self) -> usize {
        self.universe.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universe.is_empty()
    }

    /// True when the reverse map agrees with the category sets.
    pub fn is_consistent(&self) -> bool {
        let forward_ok = self.reverse.iter().all(|(variant, category)| {
            self.categories
                .get(category)
                .is_some_and(|vs| vs.contains_key(variant))
        });
        let covered = self
            .categories
            .values()
            .flat_map(|vs| vs.keys())
            .all(|v| self.reverse.contains_key(v));
        forward_ok && covered
    }

    fn insert_variants<S: AsRef<str>>(&mut self, category: &str, variants: &[S]) -> usize {
        let entry = self.categories.entry(category.to_string()).or_default();
        let mut added = 0;
        for v in variants {
            let key = normalize(v.as_ref()).into_owned();
            let seq = self.next_seq;
            self.next_seq += 1;
            if entry.insert(key, seq).is_none() {
                added += 1;
            }
        }
        added
    }

    fn rebuild(&mut self) {
        let mut owners: HashMap<&str, (u64, &str)> = HashMap::new();
        let mut universe = Vec::new();
        for (category, variants) in &self.categories {
            for (variant, &seq) in variants {
                let owner = owners.entry(variant.as_str()).or_insert((seq, category.as_str()));
                if seq > owner.0 {
                    *owner = (seq, category.as_str());
                }
                universe.push(PreparedText::new(variant));
            }
        }
        self.reverse = owners
            .into_iter()
            .map(|(v, (_, c))| (v.to_string(), c.to_string()))
            .collect();
        self.universe = universe;
        debug!(
            categories = self.categories.len(),
            variants = self.universe.len(),
            distinct = self.reverse.len(),
            "Rebuilt variant index"
        );
    }
}
