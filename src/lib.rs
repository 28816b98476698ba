//! # speaktex
//!
//! LaTeX to speech-ready script transcompiler written in Rust.
//!
//! ## Features
//!
//! - **Nested structures**: fractions, roots and sub/superscripts inside each other
//! - **Depth naming**: ordinals for fractions, tiers for roots and parentheses
//! - **Configurable prefixes**: "symbol of" per symbol category, grouped or spaced
//! - **Speech-safe output**: punctuation spoken as words, no stray commas
//! - **Playback plans**: sentences and paced segments for a speech driver
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Transcompiling
//!
//! ```rust
//! use speaktex::transcompile;
//!
//! let result = transcompile(r"Half is $\frac{1}{2}$.");
//! assert!(result.parsed_text.contains("start-first-fraction-where-the-numerator-is 1"));
//! assert!(result.parsed_text.ends_with("period"));
//! assert_eq!(result.equations, vec![r"\frac{1}{2}"]);
//! ```
//!
//! ### Custom Mappings and Options
//!
//! ```rust
//! use speaktex::{transcompile_with, CommandMapping, VerbalizationOptions};
//!
//! let mut mappings = CommandMapping::default();
//! mappings.insert(r"\alpha", "alfa");
//!
//! let options = VerbalizationOptions {
//!     group_symbols: false,
//!     ..VerbalizationOptions::prefixed()
//! };
//! let result = transcompile_with(r"\alpha", &mappings, &options);
//! assert_eq!(result.parsed_text, "symbol of alfa");
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static mappings and constants
pub mod data;

/// Feature modules - cheat sheets and speech scripts
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core transcompiler API
pub use core::speech;
pub use core::speech::{
    transcompile, transcompile_with, transcompile_with_diagnostics, CommandMapping,
    PrefixCategories, SymbolCategories, SymbolCategory, TranscompileOutput, TranscompileResult,
    Transcompiler, VerbalizationOptions,
};

// Re-export data modules
pub use data::constants;

// Re-export feature modules
pub use features::cheatsheet;
pub use features::script;

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{SpeechError, SpeechResult, SpeechWarning, WarningKind};

/// Transcompile and split the spoken script into sentences
pub fn transcompile_sentences(text: &str) -> Vec<String> {
    script::split_sentences(&transcompile(text).parsed_text)
}

/// Transcompile and plan playback segments with the given pauses
pub fn transcompile_segments(
    text: &str,
    transcompiler: &Transcompiler,
    pauses: &script::PauseSettings,
) -> Vec<script::Segment> {
    script::plan_segments(&transcompiler.transcompile(text).parsed_text, pauses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcompile_basic() {
        let result = transcompile(r"\alpha + \beta");
        assert_eq!(result.parsed_text, "alpha + beta");
        assert!(result.equations.is_empty());
    }

    #[test]
    fn test_transcompile_prefix_preset() {
        let transcompiler = Transcompiler::new().with_options(VerbalizationOptions::prefixed());
        let result = transcompiler.transcompile(r"\alpha");
        assert_eq!(result.parsed_text, "symbol-of-alpha");
    }

    #[test]
    fn test_transcompile_plain_preset() {
        let result = transcompile_with(
            r"$x$",
            &CommandMapping::default(),
            &VerbalizationOptions::plain(),
        );
        assert_eq!(result.parsed_text, "x");
        assert_eq!(result.equations, vec!["x"]);
    }

    #[test]
    fn test_transcompile_sentences() {
        let sentences = transcompile_sentences("One. Two, three.");
        assert_eq!(sentences, vec!["One period", "Two comma three period"]);
    }

    #[test]
    fn test_transcompile_segments() {
        let segments = transcompile_segments(
            r"\alpha",
            &Transcompiler::new().with_options(VerbalizationOptions::prefixed()),
            &script::PauseSettings::default(),
        );
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[4], script::Segment::Speak("alpha".to_string()));
    }

    #[test]
    fn test_options_normalized_with_warning() {
        let options = VerbalizationOptions {
            use_symbol_prefix: true,
            symbol_prefix: "   ".to_string(),
            ..Default::default()
        };
        let out = transcompile_with_diagnostics(r"\alpha", &CommandMapping::default(), &options);
        assert_eq!(out.result.parsed_text, "alpha");
        assert!(out
            .warnings
            .iter()
            .any(|w| w.kind == WarningKind::OptionsAdjusted));
    }
}
