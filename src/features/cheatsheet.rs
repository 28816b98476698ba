//! Symbol cheat sheets
//!
//! Lists the commands a text uses next to how they will be spoken, or the
//! whole mapping table at once.

use indexmap::IndexSet;
use lazy_static::lazy_static;
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::speech::CommandMapping;

lazy_static! {
    /// A control word with at most one trailing flat brace group
    static ref COMMAND_RE: Regex = Regex::new(r"\\[a-zA-Z]+(\{[^{}]*\})?").unwrap();
}

/// One row of a cheat sheet
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymbolPair {
    pub command: String,
    pub spoken: String,
}

impl SymbolPair {
    pub fn new(command: impl Into<String>, spoken: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            spoken: spoken.into(),
        }
    }
}

/// Unique commands in `text`, in order of first appearance
///
/// ```rust
/// use speaktex::features::cheatsheet::extract_commands;
///
/// let commands = extract_commands(r"\alpha + \mathbb{R} + \alpha");
/// assert_eq!(commands, vec![r"\alpha", r"\mathbb{R}"]);
/// ```
pub fn extract_commands(text: &str) -> Vec<String> {
    let unique: IndexSet<&str> = COMMAND_RE.find_iter(text).map(|m| m.as_str()).collect();
    unique.into_iter().map(str::to_string).collect()
}

/// Cheat sheet for the mapped commands used in `text`, sorted by command.
///
/// A command with an argument (`\mathbb{R}`) is looked up as written first,
/// then by its bare name (`\frac{1}` falls back to `\frac`).
pub fn cheat_sheet_for(text: &str, mappings: &CommandMapping) -> Vec<SymbolPair> {
    let mut found: IndexSet<SymbolPair> = IndexSet::new();

    for command in extract_commands(text) {
        let bare = command.split('{').next().unwrap_or(&command);
        let pair = mappings
            .get(&command)
            .map(|spoken| SymbolPair::new(command.as_str(), spoken))
            .or_else(|| mappings.get(bare).map(|spoken| SymbolPair::new(bare, spoken)));
        if let Some(pair) = pair {
            found.insert(pair);
        }
    }

    let mut pairs: Vec<SymbolPair> = found.into_iter().collect();
    pairs.sort();
    pairs
}

/// Every mapping entry, sorted by command
pub fn complete_cheat_sheet(mappings: &CommandMapping) -> Vec<SymbolPair> {
    let mut pairs: Vec<SymbolPair> = mappings
        .iter()
        .map(|(command, spoken)| SymbolPair::new(command, spoken))
        .collect();
    pairs.sort();
    pairs
}

/// Pairs whose command or spoken form contains `term`, ignoring case
pub fn filter_pairs<'a>(pairs: &'a [SymbolPair], term: &str) -> Vec<&'a SymbolPair> {
    let term = term.to_lowercase();
    pairs
        .iter()
        .filter(|pair| {
            pair.command.to_lowercase().contains(&term)
                || pair.spoken.to_lowercase().contains(&term)
        })
        .collect()
}
