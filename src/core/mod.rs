//! Core conversion modules
//!
//! - `speech`: LaTeX to speech transcompiler

pub mod speech;

pub use speech::{
    transcompile, transcompile_with, transcompile_with_diagnostics, CommandMapping,
    PrefixCategories, SymbolCategories, SymbolCategory, TranscompileOutput, TranscompileResult,
    Transcompiler, VerbalizationOptions,
};
