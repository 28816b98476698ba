//! Command mapping and symbol category tables
//!
//! Both tables are plain values handed to the pipeline. The shipped defaults
//! are built from the static `phf` tables in [`crate::data`] on demand, so no
//! caller can mutate what another caller sees.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::context::SymbolCategory;
use crate::data::categories::DEFAULT_CATEGORIES;
use crate::data::mappings::DEFAULT_MAPPINGS;
use crate::utils::error::{SpeechError, SpeechResult};

/// LaTeX command (or literal token) to spoken replacement
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CommandMapping {
    entries: IndexMap<String, String>,
}

impl Default for CommandMapping {
    fn default() -> Self {
        let mut keys: Vec<&&str> = DEFAULT_MAPPINGS.keys().collect();
        keys.sort();
        let entries = keys
            .into_iter()
            .filter_map(|k| DEFAULT_MAPPINGS.get(*k).map(|v| (k.to_string(), v.to_string())))
            .collect();
        Self { entries }
    }
}

impl CommandMapping {
    /// A mapping with no entries
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Build from (command, replacement) pairs; later pairs win
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut mapping = Self::empty();
        for (k, v) in pairs {
            mapping.insert(k, v);
        }
        mapping
    }

    /// Insert or replace an entry, returning the previous replacement
    pub fn insert(&mut self, command: impl Into<String>, replacement: impl Into<String>) -> Option<String> {
        self.entries.insert(command.into(), replacement.into())
    }

    /// Remove an entry
    pub fn remove(&mut self, command: &str) -> Option<String> {
        self.entries.shift_remove(command)
    }

    pub fn get(&self, command: &str) -> Option<&str> {
        self.entries.get(command).map(|s| s.as_str())
    }

    pub fn contains(&self, command: &str) -> bool {
        self.entries.contains_key(command)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge `other` over this mapping
    pub fn extend(&mut self, other: &CommandMapping) {
        for (k, v) in other.iter() {
            self.insert(k, v);
        }
    }

    /// Reject entries the substitutor could never match
    pub fn validate(&self) -> SpeechResult<()> {
        for (command, _) in self.iter() {
            if command.is_empty() {
                return Err(SpeechError::mapping(command, "command must not be empty"));
            }
            if command.chars().any(char::is_whitespace) {
                return Err(SpeechError::mapping(command, "command must not contain whitespace"));
            }
        }
        Ok(())
    }

    /// Parse a flat JSON object of `"command": "replacement"` entries
    #[cfg(feature = "data-loading")]
    pub fn from_json_str(input: &str) -> SpeechResult<Self> {
        let entries: IndexMap<String, String> = serde_json::from_str(input)?;
        let mapping = Self { entries };
        mapping.validate()?;
        Ok(mapping)
    }

    /// Parse a flat TOML table of `"command" = "replacement"` entries
    #[cfg(feature = "data-loading")]
    pub fn from_toml_str(input: &str) -> SpeechResult<Self> {
        let entries: IndexMap<String, String> = toml::from_str(input)?;
        let mapping = Self { entries };
        mapping.validate()?;
        Ok(mapping)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CommandMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Mapping key to symbol category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCategories {
    entries: IndexMap<String, SymbolCategory>,
}

impl Default for SymbolCategories {
    fn default() -> Self {
        let mut keys: Vec<&&str> = DEFAULT_CATEGORIES.keys().collect();
        keys.sort();
        let entries = keys
            .into_iter()
            .filter_map(|k| DEFAULT_CATEGORIES.get(*k).map(|c| (k.to_string(), *c)))
            .collect();
        Self { entries }
    }
}

impl SymbolCategories {
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, command: impl Into<String>, category: SymbolCategory) {
        self.entries.insert(command.into(), category);
    }

    pub fn remove(&mut self, command: &str) -> Option<SymbolCategory> {
        self.entries.shift_remove(command)
    }

    pub fn get(&self, command: &str) -> Option<SymbolCategory> {
        self.entries.get(command).copied()
    }

    /// Commands tagged with `category`
    pub fn commands_in(&self, category: SymbolCategory) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(_, c)| **c == category)
            .map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapping_matches_static_table() {
        let mapping = CommandMapping::default();
        assert_eq!(mapping.len(), DEFAULT_MAPPINGS.len());
        assert_eq!(mapping.get("\\alpha"), Some("alpha"));
    }

    #[test]
    fn test_default_mapping_is_independent() {
        let mut a = CommandMapping::default();
        a.insert("\\alpha", "ALPHA");
        let b = CommandMapping::default();
        assert_eq!(b.get("\\alpha"), Some("alpha"));
    }

    #[test]
    fn test_from_pairs_later_wins() {
        let mapping = CommandMapping::from_pairs([("\\x", "one"), ("\\x", "two")]);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("\\x"), Some("two"));
    }

    #[test]
    fn test_validate_rejects_whitespace() {
        let mapping = CommandMapping::from_pairs([("\\a b", "x")]);
        assert!(mapping.validate().is_err());
        assert!(CommandMapping::default().validate().is_ok());
    }

    #[test]
    fn test_categories_lookup() {
        let cats = SymbolCategories::default();
        assert_eq!(cats.get("\\alpha"), Some(SymbolCategory::Greek));
        assert_eq!(cats.get("\\in"), Some(SymbolCategory::Sets));
        assert!(cats.commands_in(SymbolCategory::Statistics).any(|c| c == "N"));
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_from_json_and_toml() {
        let json = CommandMapping::from_json_str(r#"{"\\R": "the reals"}"#).unwrap();
        assert_eq!(json.get("\\R"), Some("the reals"));

        let toml = CommandMapping::from_toml_str("'\\R' = \"the reals\"\n").unwrap();
        assert_eq!(toml.get("\\R"), Some("the reals"));

        assert!(CommandMapping::from_json_str("[1, 2]").is_err());
    }
}
