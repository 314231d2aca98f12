//! Validated category definition input.

use crate::error::{MatchError, Result};
use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mapping of category name to its known variant strings, as supplied by the
/// caller.
///
/// Categories keep the order they were supplied in, which is also the order
/// they are written into a [`VariantIndex`](crate::VariantIndex): when two
/// categories list the same variant, the later one owns it.
///
/// Construction through [`CategoryDefinitions::new`] or
/// [`CategoryDefinitions::from_json_str`] rejects empty names, empty variant
/// lists, and blank variants. JSON input also rejects repeated category keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryDefinitions {
    categories: IndexMap<String, Vec<String>>,
}

impl<'de> Deserialize<'de> for CategoryDefinitions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DefinitionsVisitor;

        impl<'de> Visitor<'de> for DefinitionsVisitor {
            type Value = IndexMap<String, Vec<String>>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping category names to arrays of strings")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, variants)) = access.next_entry::<String, Vec<String>>()? {
                    if map.contains_key(&name) {
                        return Err(de::Error::custom(format!("duplicate category '{name}'")));
                    }
                    map.insert(name, variants);
                }
                Ok(map)
            }
        }

        let categories = deserializer.deserialize_map(DefinitionsVisitor)?;
        Ok(Self { categories })
    }
}

impl CategoryDefinitions {
    pub fn new<I, K, V, S>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map: IndexMap<String, Vec<String>> = IndexMap::new();
        for (name, variants) in categories {
            map.entry(name.into())
                .or_default()
                .extend(variants.into_iter().map(Into::into));
        }
        let defs = Self { categories: map };
        defs.validate()?;
        Ok(defs)
    }

    /// Parse a JSON object of `{"category": ["variant", ...]}`, keeping key
    /// order.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let defs: Self = serde_json::from_str(json).map_err(|e| {
            MatchError::contract(format!(
                "category definitions must be a JSON object of string arrays: {e}"
            ))
        })?;
        defs.validate()?;
        Ok(defs)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, variants) in &self.categories {
            validate_category_input(name, variants)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Shared validation for a category name and a batch of incoming variants.
pub(crate) fn validate_category_input<S: AsRef<str>>(name: &str, variants: &[S]) -> Result<()> {
    if name.trim().is_empty() {
        return Err(MatchError::contract("category name must not be empty"));
    }
    if variants.is_empty() {
        return Err(MatchError::contract(format!(
            "category '{name}' must have at least one variant"
        )));
    }
    if let Some(pos) = variants.iter().position(|v| v.as_ref().trim().is_empty()) {
        return Err(MatchError::contract(format!(
            "category '{name}' has a blank variant at position {pos}"
        )));
    }
    Ok(())
}
