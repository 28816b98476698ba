//! LaTeX to speech transcompiler
//!
//! Turns text with embedded LaTeX into a plain script a speech engine can
//! read aloud. The pipeline is a fixed sequence of rewrite stages, each one
//! consuming the output of the previous:
//!
//! 1. escaped dollars are protected, equations are extracted
//! 2. math spans are announced
//! 3. fractions, roots, big operators, sub/superscripts (fixed point each)
//! 4. `\left(`/`\right)` nesting and sized delimiters
//! 5. decorations (fixed point)
//! 6. generic command substitution
//! 7. punctuation cleanup
//!
//! # Module Structure
//!
//! - `context`: options, symbol categories and per-call state
//! - `mapping`: command mapping and category tables
//! - `equations`: math span extraction and announcement
//! - `structure`: fractions, roots, big operators, scripts, decorations
//! - `parens`: parenthesis nesting and sized delimiters
//! - `substitute`: generic command substitution
//! - `cleanup`: punctuation and leftover markup
//! - `utils`: scanning helpers and the fixed-point driver
//!
//! # Example
//!
//! ```rust
//! use speaktex::core::speech::{Transcompiler, VerbalizationOptions};
//!
//! let transcompiler = Transcompiler::new().with_options(VerbalizationOptions::prefixed());
//! let result = transcompiler.transcompile(r"$\alpha$");
//! assert!(result.parsed_text.contains("symbol-of-alpha"));
//! assert_eq!(result.equations, vec![r"\alpha"]);
//! ```

pub mod cleanup;
pub mod context;
pub mod equations;
pub mod mapping;
pub mod parens;
pub mod structure;
pub mod substitute;
pub mod utils;

use lazy_static::lazy_static;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use context::{
    hyphenate, PrefixCategories, SpeechContext, SymbolCategory, VerbalizationOptions,
};
pub use equations::extract_equations;
pub use mapping::{CommandMapping, SymbolCategories};

use crate::utils::error::{SpeechWarning, WarningKind};

lazy_static! {
    /// Shipped tables, built once and only ever read
    static ref DEFAULT_MAPPING: CommandMapping = CommandMapping::default();
    static ref DEFAULT_SYMBOL_CATEGORIES: SymbolCategories = SymbolCategories::default();
}

/// Spoken script plus the raw equations found in the input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TranscompileResult {
    pub parsed_text: String,
    pub equations: Vec<String>,
}

/// A result together with the warnings raised while producing it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscompileOutput {
    pub result: TranscompileResult,
    pub warnings: Vec<SpeechWarning>,
}

/// Immutable configuration for transcompiling
#[derive(Debug, Clone, Default)]
pub struct Transcompiler {
    pub mappings: CommandMapping,
    pub categories: SymbolCategories,
    pub options: VerbalizationOptions,
}

impl Transcompiler {
    /// Create a transcompiler with the shipped tables and default options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mappings(mut self, mappings: CommandMapping) -> Self {
        self.mappings = mappings;
        self
    }

    pub fn with_categories(mut self, categories: SymbolCategories) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_options(mut self, options: VerbalizationOptions) -> Self {
        self.options = options;
        self
    }

    /// Transcompile `text`, discarding warnings
    pub fn transcompile(&self, text: &str) -> TranscompileResult {
        self.transcompile_with_diagnostics(text).result
    }

    /// Transcompile `text`, keeping the warnings
    pub fn transcompile_with_diagnostics(&self, text: &str) -> TranscompileOutput {
        run_pipeline(text, &self.mappings, &self.categories, &self.options)
    }
}

// =============================================================================
// Public API Functions
// =============================================================================

/// Transcompile with the shipped mapping and default options
pub fn transcompile(text: &str) -> TranscompileResult {
    transcompile_with(text, &DEFAULT_MAPPING, &VerbalizationOptions::default())
}

/// Transcompile with a caller-supplied mapping and options
pub fn transcompile_with(
    text: &str,
    mappings: &CommandMapping,
    options: &VerbalizationOptions,
) -> TranscompileResult {
    run_pipeline(text, mappings, &DEFAULT_SYMBOL_CATEGORIES, options).result
}

/// Like [`transcompile_with`], also returning any warnings
pub fn transcompile_with_diagnostics(
    text: &str,
    mappings: &CommandMapping,
    options: &VerbalizationOptions,
) -> TranscompileOutput {
    run_pipeline(text, mappings, &DEFAULT_SYMBOL_CATEGORIES, options)
}

// =============================================================================
// Pipeline
// =============================================================================

fn run_pipeline(
    text: &str,
    mappings: &CommandMapping,
    categories: &SymbolCategories,
    options: &VerbalizationOptions,
) -> TranscompileOutput {
    let mut ctx = SpeechContext::new(options);

    if text.is_empty() {
        return TranscompileOutput {
            result: TranscompileResult::default(),
            warnings: ctx.warnings,
        };
    }

    let text = equations::protect_escaped_dollars(text);
    let equations = equations::extract_equations(&text);
    if equations::count_unescaped_dollars(&text) % 2 == 1 {
        ctx.warn(
            WarningKind::UnbalancedDelimiters,
            "odd number of `$` delimiters; the last one is read as text",
        );
    }

    let text = equations::announce_math(&text, ctx.options.announce_math);
    log::trace!("speech: announced: {:?}", text);

    let text = structure::rewrite_fractions(&text, &mut ctx);
    log::trace!("speech: fractions: {:?}", text);

    let text = structure::rewrite_roots(&text, &mut ctx);
    log::trace!("speech: roots: {:?}", text);

    let text = structure::rewrite_big_operators(&text, mappings);
    log::trace!("speech: big operators: {:?}", text);

    let text = structure::rewrite_scripts(&text, &mut ctx);
    log::trace!("speech: scripts: {:?}", text);

    let text = parens::rewrite_parentheses(&text, &mut ctx);
    let text = parens::rewrite_sized_delimiters(&text);
    log::trace!("speech: delimiters: {:?}", text);

    let text = structure::rewrite_decorations(&text, mappings, &mut ctx);
    log::trace!("speech: decorations: {:?}", text);

    let text = substitute::substitute_commands(&text, mappings, categories, &ctx.options);
    log::trace!("speech: substituted: {:?}", text);

    let text = cleanup::normalize_punctuation(&text);
    let parsed_text = cleanup::finish(&text);
    log::debug!(
        "speech: {} equation(s), {} warning(s)",
        equations.len(),
        ctx.warnings.len()
    );

    TranscompileOutput {
        result: TranscompileResult {
            parsed_text,
            equations,
        },
        warnings: ctx.warnings,
    }
}
