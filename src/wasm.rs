//! WASM bindings for speaktex
//!
//! This module provides JavaScript-accessible functions for LaTeX to speech
//! transcompilation, cheat sheets and playback planning.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use std::collections::BTreeMap;

#[cfg(feature = "wasm")]
use crate::core::speech::{
    CommandMapping, PrefixCategories, TranscompileResult, Transcompiler, VerbalizationOptions,
};
#[cfg(feature = "wasm")]
use crate::data::constants::DEFAULT_MAX_ITERATIONS;

/// Transcompile options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechOptions {
    /// Prefix categorized symbols
    #[serde(default)]
    pub use_symbol_prefix: bool,
    /// Prefix text
    #[serde(default = "default_prefix")]
    pub symbol_prefix: String,
    /// Per-category opt-in; missing categories keep their default
    #[serde(default)]
    pub prefix_categories: PrefixCategories,
    /// Hyphen-group prefix and symbol
    #[serde(default = "default_true")]
    pub group_symbols: bool,
    /// Announce math spans
    #[serde(default = "default_true")]
    pub announce_math: bool,
    /// Extra or replacement mapping entries, merged over the defaults
    #[serde(default)]
    pub mappings: BTreeMap<String, String>,
}

#[cfg(feature = "wasm")]
impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            use_symbol_prefix: false,
            symbol_prefix: default_prefix(),
            prefix_categories: PrefixCategories::default(),
            group_symbols: true,
            announce_math: true,
            mappings: BTreeMap::new(),
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "wasm")]
fn default_prefix() -> String {
    "symbol of".to_string()
}

#[cfg(feature = "wasm")]
impl SpeechOptions {
    fn into_transcompiler(self) -> Transcompiler {
        let mut mappings = CommandMapping::default();
        for (command, spoken) in self.mappings {
            mappings.insert(command, spoken);
        }

        Transcompiler::new()
            .with_mappings(mappings)
            .with_options(VerbalizationOptions {
                use_symbol_prefix: self.use_symbol_prefix,
                symbol_prefix: self.symbol_prefix,
                prefix_categories: self.prefix_categories,
                group_symbols: self.group_symbols,
                announce_math: self.announce_math,
                max_iterations: DEFAULT_MAX_ITERATIONS,
            })
    }
}

/// Transcompile result with warnings
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechResultJs {
    /// The spoken script
    pub parsed_text: String,
    /// Raw LaTeX of every math span, in order
    pub equations: Vec<String>,
    /// Warnings raised while transcompiling
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Transcompile with default mappings and options
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "transcompile")]
pub fn transcompile_wasm(input: &str) -> String {
    crate::transcompile(input).parsed_text
}

/// Transcompile LaTeX to a speech script
///
/// # Arguments
/// * `input` - Text with embedded LaTeX
/// * `options` - `SpeechOptions` as a JS object; invalid or missing values
///   fall back to the defaults
///
/// # Returns
/// `{ parsedText, equations, warnings }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "transcompileLatex")]
pub fn transcompile_latex_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: SpeechOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let output = opts.into_transcompiler().transcompile_with_diagnostics(input);
    let TranscompileResult {
        parsed_text,
        equations,
    } = output.result;

    let result = SpeechResultJs {
        parsed_text,
        equations,
        warnings: output.warnings.iter().map(|w| w.to_string()).collect(),
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Cheat sheet for the mapped commands used in `input`
///
/// # Returns
/// Array of `{ command, spoken }`, sorted by command
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "cheatSheet")]
pub fn cheat_sheet_wasm(input: &str) -> JsValue {
    let pairs = crate::cheatsheet::cheat_sheet_for(input, &CommandMapping::default());
    serde_wasm_bindgen::to_value(&pairs).unwrap_or(JsValue::NULL)
}

/// Every default mapping entry, sorted by command
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "completeCheatSheet")]
pub fn complete_cheat_sheet_wasm() -> JsValue {
    let pairs = crate::cheatsheet::complete_cheat_sheet(&CommandMapping::default());
    serde_wasm_bindgen::to_value(&pairs).unwrap_or(JsValue::NULL)
}

/// Split a spoken script into sentences
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "splitSentences")]
pub fn split_sentences_wasm(parsed: &str) -> JsValue {
    let sentences = crate::script::split_sentences(parsed);
    serde_wasm_bindgen::to_value(&sentences).unwrap_or(JsValue::NULL)
}

/// Plan playback segments for a spoken script
///
/// # Arguments
/// * `parsed` - Output of `transcompileLatex`
/// * `pauses` - `PauseSettings` as a JS object (milliseconds)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "planSegments")]
pub fn plan_segments_wasm(parsed: &str, pauses: JsValue) -> JsValue {
    let settings: crate::script::PauseSettings =
        serde_wasm_bindgen::from_value(pauses).unwrap_or_default();
    let segments = crate::script::plan_segments(parsed, &settings);
    serde_wasm_bindgen::to_value(&segments).unwrap_or(JsValue::NULL)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check LaTeX for places where speech output will degrade
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkLatex")]
pub fn check_latex_wasm(input: &str) -> JsValue {
    use crate::diagnostics::DiagnosticLevel;

    let result = crate::diagnostics::check_latex(input, &CommandMapping::default());

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for d in &result.diagnostics {
        match d.level {
            DiagnosticLevel::Error => errors.push(d.message.clone()),
            DiagnosticLevel::Warning => warnings.push(d.message.clone()),
            DiagnosticLevel::Info => infos.push(d.message.clone()),
        }
    }

    let summary = CheckSummary {
        errors,
        warnings,
        infos,
        has_errors: result.has_errors(),
    };
    serde_wasm_bindgen::to_value(&summary).unwrap_or(JsValue::NULL)
}

/// Summary of LaTeX check results
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSummary {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    pub has_errors: bool,
}
