//! Generic command substitution
//!
//! Every mapping entry not owned by a structural stage is replaced by its
//! spoken form in a single left-to-right scan. At each position the longest
//! matching key wins, so `\infty` is never read as `\in` + `fty`, and text
//! produced by one replacement is never scanned again.

use fxhash::FxHashMap;

use super::context::VerbalizationOptions;
use super::mapping::{CommandMapping, SymbolCategories};
use super::utils::read_command;
use crate::data::constants::STAGE_OWNED_KEYS;

/// Lookup table for one substitution run
struct SubstitutionTable<'a> {
    /// First character -> (key, spoken form), longest keys first
    by_first_char: FxHashMap<char, Vec<(&'a str, String)>>,
}

impl<'a> SubstitutionTable<'a> {
    fn build(
        mappings: &'a CommandMapping,
        categories: &SymbolCategories,
        options: &VerbalizationOptions,
    ) -> Self {
        let mut by_first_char: FxHashMap<char, Vec<(&'a str, String)>> = FxHashMap::default();

        for (command, replacement) in mappings.iter() {
            if STAGE_OWNED_KEYS.contains(&command) {
                continue;
            }
            let Some(first) = command.chars().next() else {
                continue;
            };
            by_first_char
                .entry(first)
                .or_default()
                .push((command, spoken_form(command, replacement, categories, options)));
        }

        for entries in by_first_char.values_mut() {
            entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
        }

        Self { by_first_char }
    }

    /// Longest key matching at `pos`, honoring word boundaries
    fn lookup(&self, text: &str, pos: usize, first: char) -> Option<(&str, &str)> {
        let candidates = self.by_first_char.get(&first)?;
        candidates
            .iter()
            .find(|(key, _)| text[pos..].starts_with(key) && is_bounded(text, pos, key))
            .map(|(key, spoken)| (*key, spoken.as_str()))
    }
}

/// Replacement text for `command`, with the category prefix applied when
/// the options enable it for the command's category
fn spoken_form(
    command: &str,
    replacement: &str,
    categories: &SymbolCategories,
    options: &VerbalizationOptions,
) -> String {
    if replacement.trim().is_empty() {
        return " ".to_string();
    }

    let prefixed = options.use_symbol_prefix
        && categories
            .get(command)
            .is_some_and(|c| options.prefix_categories.is_enabled(c));

    if prefixed {
        format!(" {} ", options.prefixed_replacement(replacement))
    } else {
        format!(" {} ", replacement.trim())
    }
}

/// A key ending in a letter must not run into another letter; a purely
/// alphanumeric key (like `N`) must stand as a whole word.
fn is_bounded(text: &str, pos: usize, key: &str) -> bool {
    let next = text[pos + key.len()..].chars().next();
    let ends_in_letter = key.chars().last().is_some_and(|c| c.is_ascii_alphabetic());

    if key.chars().all(|c| c.is_alphanumeric()) {
        let prev = text[..pos].chars().next_back();
        return !prev.is_some_and(char::is_alphanumeric) && !next.is_some_and(char::is_alphanumeric);
    }

    !(ends_in_letter && next.is_some_and(|c| c.is_ascii_alphabetic()))
}

/// Replace mapped commands with their spoken forms
pub fn substitute_commands(
    text: &str,
    mappings: &CommandMapping,
    categories: &SymbolCategories,
    options: &VerbalizationOptions,
) -> String {
    let table = SubstitutionTable::build(mappings, categories, options);
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(c) = text[pos..].chars().next() {
        if let Some((key, spoken)) = table.lookup(text, pos, c) {
            out.push_str(spoken);
            pos += key.len();
            continue;
        }

        if c == '\\' {
            // Unmapped control word: copy whole so no shorter key fires inside it
            if let Some((name, end)) = read_command(text, pos) {
                out.push_str(name);
                pos = end;
                continue;
            }
        }

        out.push(c);
        pos += c.len_utf8();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::speech::context::{PrefixCategories, SymbolCategory};

    fn run(text: &str, options: &VerbalizationOptions) -> String {
        let out = substitute_commands(
            text,
            &CommandMapping::default(),
            &SymbolCategories::default(),
            options,
        );
        out.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_longest_key_wins() {
        let opts = VerbalizationOptions::default();
        assert_eq!(run(r"x \in A", &opts), "x element of A");
        assert_eq!(run(r"\infty", &opts), "infinity");
        assert_eq!(run(r"\notin", &opts), "not an element of");
    }

    #[test]
    fn test_unmapped_command_not_split() {
        let opts = VerbalizationOptions::default();
        assert_eq!(run(r"\inner", &opts), r"\inner");
        assert_eq!(run(r"\sinh x", &opts), "hyperbolic sine x");
    }

    #[test]
    fn test_letter_key_whole_word_only() {
        let opts = VerbalizationOptions::default();
        assert_eq!(run("X ~ N(0, 1)", &opts), "X ~ normal distribution (0, 1)");
        assert_eq!(run("Now", &opts), "Now");
    }

    #[test]
    fn test_stage_owned_keys_skipped() {
        let opts = VerbalizationOptions::default();
        assert_eq!(run(r"\frac x_1", &opts), r"\frac x_1");
    }

    #[test]
    fn test_prefix_grouped_and_spaced() {
        let grouped = VerbalizationOptions::prefixed();
        assert_eq!(run(r"\alpha", &grouped), "symbol-of-alpha");

        let spaced = VerbalizationOptions {
            group_symbols: false,
            ..VerbalizationOptions::prefixed()
        };
        assert_eq!(run(r"\alpha", &spaced), "symbol of alpha");
    }

    #[test]
    fn test_prefix_respects_categories() {
        let opts = VerbalizationOptions {
            prefix_categories: PrefixCategories::only(&[SymbolCategory::Sets]),
            ..VerbalizationOptions::prefixed()
        };
        assert_eq!(run(r"\alpha \in", &opts), "alpha symbol-of-element-of");
        // Uncategorized symbols are never prefixed
        assert_eq!(run(r"\sin", &opts), "sine");
    }
}
