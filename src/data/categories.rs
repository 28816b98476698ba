//! Default symbol categorization
//!
//! Only symbols listed here can receive a verbalization prefix such as
//! "symbol of". Anything not listed is never prefixed.

use phf::phf_map;

use crate::core::speech::SymbolCategory;

/// Default category for each prefixable mapping key
pub static DEFAULT_CATEGORIES: phf::Map<&'static str, SymbolCategory> = phf_map! {
    // Greek
    "\\alpha" => SymbolCategory::Greek,
    "\\beta" => SymbolCategory::Greek,
    "\\gamma" => SymbolCategory::Greek,
    "\\delta" => SymbolCategory::Greek,
    "\\epsilon" => SymbolCategory::Greek,
    "\\varepsilon" => SymbolCategory::Greek,
    "\\zeta" => SymbolCategory::Greek,
    "\\eta" => SymbolCategory::Greek,
    "\\theta" => SymbolCategory::Greek,
    "\\vartheta" => SymbolCategory::Greek,
    "\\iota" => SymbolCategory::Greek,
    "\\kappa" => SymbolCategory::Greek,
    "\\lambda" => SymbolCategory::Greek,
    "\\mu" => SymbolCategory::Greek,
    "\\nu" => SymbolCategory::Greek,
    "\\xi" => SymbolCategory::Greek,
    "\\omicron" => SymbolCategory::Greek,
    "\\pi" => SymbolCategory::Greek,
    "\\varpi" => SymbolCategory::Greek,
    "\\rho" => SymbolCategory::Greek,
    "\\varrho" => SymbolCategory::Greek,
    "\\sigma" => SymbolCategory::Greek,
    "\\varsigma" => SymbolCategory::Greek,
    "\\tau" => SymbolCategory::Greek,
    "\\upsilon" => SymbolCategory::Greek,
    "\\phi" => SymbolCategory::Greek,
    "\\varphi" => SymbolCategory::Greek,
    "\\chi" => SymbolCategory::Greek,
    "\\psi" => SymbolCategory::Greek,
    "\\omega" => SymbolCategory::Greek,
    "\\Alpha" => SymbolCategory::Greek,
    "\\Beta" => SymbolCategory::Greek,
    "\\Gamma" => SymbolCategory::Greek,
    "\\Delta" => SymbolCategory::Greek,
    "\\Epsilon" => SymbolCategory::Greek,
    "\\Zeta" => SymbolCategory::Greek,
    "\\Eta" => SymbolCategory::Greek,
    "\\Theta" => SymbolCategory::Greek,
    "\\Iota" => SymbolCategory::Greek,
    "\\Kappa" => SymbolCategory::Greek,
    "\\Lambda" => SymbolCategory::Greek,
    "\\Mu" => SymbolCategory::Greek,
    "\\Nu" => SymbolCategory::Greek,
    "\\Xi" => SymbolCategory::Greek,
    "\\Omicron" => SymbolCategory::Greek,
    "\\Pi" => SymbolCategory::Greek,
    "\\Rho" => SymbolCategory::Greek,
    "\\Sigma" => SymbolCategory::Greek,
    "\\Tau" => SymbolCategory::Greek,
    "\\Upsilon" => SymbolCategory::Greek,
    "\\Phi" => SymbolCategory::Greek,
    "\\Chi" => SymbolCategory::Greek,
    "\\Psi" => SymbolCategory::Greek,
    "\\Omega" => SymbolCategory::Greek,

    // Operators
    "\\pm" => SymbolCategory::Operators,
    "\\mp" => SymbolCategory::Operators,
    "\\times" => SymbolCategory::Operators,
    "\\div" => SymbolCategory::Operators,
    "\\cdot" => SymbolCategory::Operators,
    "\\ast" => SymbolCategory::Operators,
    "\\circ" => SymbolCategory::Operators,
    "\\oplus" => SymbolCategory::Operators,
    "\\otimes" => SymbolCategory::Operators,
    "\\nabla" => SymbolCategory::Operators,
    "\\partial" => SymbolCategory::Operators,

    // Comparison
    "\\approx" => SymbolCategory::Comparison,
    "\\neq" => SymbolCategory::Comparison,
    "\\ne" => SymbolCategory::Comparison,
    "\\leq" => SymbolCategory::Comparison,
    "\\le" => SymbolCategory::Comparison,
    "\\geq" => SymbolCategory::Comparison,
    "\\ge" => SymbolCategory::Comparison,
    "\\ll" => SymbolCategory::Comparison,
    "\\gg" => SymbolCategory::Comparison,
    "\\equiv" => SymbolCategory::Comparison,
    "\\propto" => SymbolCategory::Comparison,
    "\\lt" => SymbolCategory::Comparison,
    "\\gt" => SymbolCategory::Comparison,

    // Sets
    "\\in" => SymbolCategory::Sets,
    "\\notin" => SymbolCategory::Sets,
    "\\subset" => SymbolCategory::Sets,
    "\\subseteq" => SymbolCategory::Sets,
    "\\supset" => SymbolCategory::Sets,
    "\\supseteq" => SymbolCategory::Sets,
    "\\cup" => SymbolCategory::Sets,
    "\\cap" => SymbolCategory::Sets,
    "\\setminus" => SymbolCategory::Sets,
    "\\emptyset" => SymbolCategory::Sets,
    "\\varnothing" => SymbolCategory::Sets,

    // Statistics
    "N" => SymbolCategory::Statistics,
    "\\sim" => SymbolCategory::Statistics,
    "\\mathbb{E}" => SymbolCategory::Statistics,
    "\\mathbb{P}" => SymbolCategory::Statistics,
    "\\operatorname{Var}" => SymbolCategory::Statistics,
    "\\operatorname{Cov}" => SymbolCategory::Statistics,

    // Other
    "\\infty" => SymbolCategory::Other,
    "\\forall" => SymbolCategory::Other,
    "\\exists" => SymbolCategory::Other,
    "\\nexists" => SymbolCategory::Other,
    "\\therefore" => SymbolCategory::Other,
    "\\because" => SymbolCategory::Other,
};
