//! Configuration and per-call state for the LaTeX to speech pipeline
//!
//! This module defines:
//! - `SymbolCategory` / `PrefixCategories`: which symbols may be prefixed
//! - `VerbalizationOptions`: the typed option set, validated once at entry
//! - `SpeechContext`: mutable state threaded through a single call

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::data::constants::DEFAULT_MAX_ITERATIONS;
use crate::utils::error::{SpeechError, SpeechResult, SpeechWarning, WarningKind};

// =============================================================================
// Symbol categories
// =============================================================================

/// Classification tag gating prefix verbalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SymbolCategory {
    Greek,
    Operators,
    Comparison,
    Sets,
    Statistics,
    Other,
}

impl SymbolCategory {
    /// Every category, in declaration order
    pub const ALL: [SymbolCategory; 6] = [
        SymbolCategory::Greek,
        SymbolCategory::Operators,
        SymbolCategory::Comparison,
        SymbolCategory::Sets,
        SymbolCategory::Statistics,
        SymbolCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolCategory::Greek => "greek",
            SymbolCategory::Operators => "operators",
            SymbolCategory::Comparison => "comparison",
            SymbolCategory::Sets => "sets",
            SymbolCategory::Statistics => "statistics",
            SymbolCategory::Other => "other",
        }
    }
}

impl fmt::Display for SymbolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SymbolCategory {
    type Err = SpeechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        SymbolCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| SpeechError::options(format!("unknown symbol category '{}'", s.trim())))
    }
}

/// Per-category opt-in for the verbalization prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrefixCategories {
    pub greek: bool,
    pub operators: bool,
    pub comparison: bool,
    pub sets: bool,
    pub statistics: bool,
    pub other: bool,
}

impl Default for PrefixCategories {
    fn default() -> Self {
        Self {
            greek: true,
            operators: true,
            comparison: true,
            sets: true,
            statistics: true,
            other: false,
        }
    }
}

impl PrefixCategories {
    /// No category prefixed
    pub fn none() -> Self {
        Self {
            greek: false,
            operators: false,
            comparison: false,
            sets: false,
            statistics: false,
            other: false,
        }
    }

    /// Every category prefixed
    pub fn all() -> Self {
        Self {
            greek: true,
            operators: true,
            comparison: true,
            sets: true,
            statistics: true,
            other: true,
        }
    }

    /// Only the listed categories prefixed
    pub fn only(categories: &[SymbolCategory]) -> Self {
        let mut result = Self::none();
        for category in categories {
            result.set(*category, true);
        }
        result
    }

    pub fn is_enabled(&self, category: SymbolCategory) -> bool {
        match category {
            SymbolCategory::Greek => self.greek,
            SymbolCategory::Operators => self.operators,
            SymbolCategory::Comparison => self.comparison,
            SymbolCategory::Sets => self.sets,
            SymbolCategory::Statistics => self.statistics,
            SymbolCategory::Other => self.other,
        }
    }

    pub fn set(&mut self, category: SymbolCategory, enabled: bool) {
        let slot = match category {
            SymbolCategory::Greek => &mut self.greek,
            SymbolCategory::Operators => &mut self.operators,
            SymbolCategory::Comparison => &mut self.comparison,
            SymbolCategory::Sets => &mut self.sets,
            SymbolCategory::Statistics => &mut self.statistics,
            SymbolCategory::Other => &mut self.other,
        };
        *slot = enabled;
    }
}

// =============================================================================
// Verbalization options
// =============================================================================

/// Options controlling how symbols are spoken
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VerbalizationOptions {
    /// Prepend `symbol_prefix` before category-tagged symbols
    /// Default: false
    pub use_symbol_prefix: bool,

    /// Literal prefix text
    /// Default: "symbol of"
    pub symbol_prefix: String,

    /// Which categories receive the prefix
    /// Default: everything except `other`
    pub prefix_categories: PrefixCategories,

    /// Join prefix and symbol with hyphens (fast, minimal pause) instead of
    /// spaces (normal pause)
    /// Default: true
    pub group_symbols: bool,

    /// Wrap `$...$` / `$$...$$` spans in "Starting a math equation" phrases
    /// Default: true
    pub announce_math: bool,

    /// Pass ceiling for each fixed-point stage
    /// Default: 64
    pub max_iterations: usize,
}

impl Default for VerbalizationOptions {
    fn default() -> Self {
        Self {
            use_symbol_prefix: false,
            symbol_prefix: "symbol of".to_string(),
            prefix_categories: PrefixCategories::default(),
            group_symbols: true,
            announce_math: true,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl VerbalizationOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix categorized symbols with hyphen grouping
    pub fn prefixed() -> Self {
        Self {
            use_symbol_prefix: true,
            ..Self::default()
        }
    }

    /// Bare replacements, no math announcements
    pub fn plain() -> Self {
        Self {
            use_symbol_prefix: false,
            announce_math: false,
            ..Self::default()
        }
    }

    /// Reject options that cannot be used as given
    pub fn validate(&self) -> SpeechResult<()> {
        if self.use_symbol_prefix && self.symbol_prefix.trim().is_empty() {
            return Err(SpeechError::options(
                "symbol prefix is enabled but the prefix text is empty",
            ));
        }
        if self.max_iterations == 0 {
            return Err(SpeechError::options("max_iterations must be at least 1"));
        }
        Ok(())
    }

    /// Normalize options once at pipeline entry.
    ///
    /// Unusable values are repaired instead of rejected; every repair is
    /// reported as a warning.
    pub fn normalized(&self) -> (Self, Vec<SpeechWarning>) {
        let mut options = self.clone();
        let mut warnings = Vec::new();

        let trimmed = options.symbol_prefix.trim();
        if trimmed.len() != options.symbol_prefix.len() {
            options.symbol_prefix = trimmed.to_string();
        }

        if options.use_symbol_prefix && options.symbol_prefix.is_empty() {
            options.use_symbol_prefix = false;
            warnings.push(SpeechWarning::new(
                WarningKind::OptionsAdjusted,
                "empty symbol prefix, prefixing disabled",
            ));
        }

        if options.max_iterations == 0 {
            options.max_iterations = 1;
            warnings.push(SpeechWarning::new(
                WarningKind::OptionsAdjusted,
                "max_iterations raised to 1",
            ));
        }

        for warning in &warnings {
            log::warn!("speech: {}", warning.message);
        }

        (options, warnings)
    }

    /// Spoken form of a categorized symbol under these options
    pub fn prefixed_replacement(&self, replacement: &str) -> String {
        if self.group_symbols {
            let prefix = hyphenate(&self.symbol_prefix);
            format!("{}-{}", prefix, hyphenate(replacement))
        } else {
            format!("{} {}", self.symbol_prefix, replacement.trim())
        }
    }
}

/// Join the words of a phrase with hyphens
pub fn hyphenate(phrase: &str) -> String {
    phrase.split_whitespace().collect::<Vec<_>>().join("-")
}

// =============================================================================
// Per-call state
// =============================================================================

/// State threaded through one transcompilation
#[derive(Debug, Clone)]
pub struct SpeechContext {
    /// Normalized options for this call
    pub options: VerbalizationOptions,
    /// Warnings collected so far
    pub warnings: Vec<SpeechWarning>,
}

impl SpeechContext {
    pub fn new(options: &VerbalizationOptions) -> Self {
        let (options, warnings) = options.normalized();
        Self { options, warnings }
    }

    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>) {
        let warning = SpeechWarning::new(kind, message);
        log::warn!("speech: {}", warning);
        self.warnings.push(warning);
    }

    pub fn max_iterations(&self) -> usize {
        self.options.max_iterations
    }
}
