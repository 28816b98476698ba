//! Default LaTeX command to spoken-word table
//!
//! This is the static source of [`CommandMapping::default`](crate::CommandMapping).
//! Keys are LaTeX control sequences or literal tokens, values are the words a
//! speech engine should say for them.

use phf::phf_map;

/// Default spoken replacements
pub static DEFAULT_MAPPINGS: phf::Map<&'static str, &'static str> = phf_map! {
    // Fractions
    "\\frac" => "fraction",
    "\\dfrac" => "fraction",
    "\\tfrac" => "fraction",

    // Greek letters
    "\\alpha" => "alpha",
    "\\beta" => "beta",
    "\\gamma" => "gamma",
    "\\delta" => "delta",
    "\\epsilon" => "epsilon",
    "\\varepsilon" => "epsilon",
    "\\zeta" => "zeta",
    "\\eta" => "eta",
    "\\theta" => "theta",
    "\\vartheta" => "theta",
    "\\iota" => "iota",
    "\\kappa" => "kappa",
    "\\lambda" => "lambda",
    "\\mu" => "mu",
    "\\nu" => "nu",
    "\\xi" => "xi",
    "\\omicron" => "omicron",
    "\\pi" => "pi",
    "\\varpi" => "pi",
    "\\rho" => "rho",
    "\\varrho" => "rho",
    "\\sigma" => "sigma",
    "\\varsigma" => "sigma",
    "\\tau" => "tau",
    "\\upsilon" => "upsilon",
    "\\phi" => "phi",
    "\\varphi" => "phi",
    "\\chi" => "chi",
    "\\psi" => "psi",
    "\\omega" => "omega",

    // Uppercase Greek letters
    "\\Alpha" => "capital alpha",
    "\\Beta" => "capital beta",
    "\\Gamma" => "capital gamma",
    "\\Delta" => "capital delta",
    "\\Epsilon" => "capital epsilon",
    "\\Zeta" => "capital zeta",
    "\\Eta" => "capital eta",
    "\\Theta" => "capital theta",
    "\\Iota" => "capital iota",
    "\\Kappa" => "capital kappa",
    "\\Lambda" => "capital lambda",
    "\\Mu" => "capital mu",
    "\\Nu" => "capital nu",
    "\\Xi" => "capital xi",
    "\\Omicron" => "capital omicron",
    "\\Pi" => "capital pi",
    "\\Rho" => "capital rho",
    "\\Sigma" => "capital sigma",
    "\\Tau" => "capital tau",
    "\\Upsilon" => "capital upsilon",
    "\\Phi" => "capital phi",
    "\\Chi" => "capital chi",
    "\\Psi" => "capital psi",
    "\\Omega" => "capital omega",

    // Comparison
    "\\approx" => "approximately equal to",
    "\\neq" => "not equal to",
    "\\ne" => "not equal to",
    "\\leq" => "less than or equal to",
    "\\le" => "less than or equal to",
    "\\geq" => "greater than or equal to",
    "\\ge" => "greater than or equal to",
    "\\ll" => "much less than",
    "\\gg" => "much greater than",
    "\\equiv" => "equivalent to",
    "\\propto" => "proportional to",
    "\\lt" => "less than",
    "\\gt" => "greater than",
    "<" => "less than",
    ">" => "greater than",

    // Sets
    "\\in" => "element of",
    "\\notin" => "not an element of",
    "\\subset" => "subset of",
    "\\subseteq" => "subset of or equal to",
    "\\supset" => "superset of",
    "\\supseteq" => "superset of or equal to",
    "\\cup" => "union",
    "\\cap" => "intersection",
    "\\setminus" => "set minus",
    "\\emptyset" => "empty set",
    "\\varnothing" => "empty set",

    // Operators
    "\\pm" => "plus or minus",
    "\\mp" => "minus or plus",
    "\\times" => "times",
    "\\div" => "divided by",
    "\\cdot" => "dot",
    "\\ast" => "asterisk",
    "\\circ" => "composed with",
    "\\oplus" => "direct sum",
    "\\otimes" => "tensor product",

    // Logic and calculus
    "\\infty" => "infinity",
    "\\partial" => "partial derivative",
    "\\nabla" => "nabla",
    "\\forall" => "for all",
    "\\exists" => "there exists",
    "\\nexists" => "there does not exist",
    "\\neg" => "not",
    "\\land" => "and",
    "\\lor" => "or",
    "\\therefore" => "therefore",
    "\\because" => "because",
    "\\to" => "approaches",
    "\\rightarrow" => "right arrow",
    "\\leftarrow" => "left arrow",
    "\\Rightarrow" => "implies",
    "\\Leftrightarrow" => "if and only if",
    "\\iff" => "if and only if",
    "\\implies" => "implies",
    "\\mapsto" => "maps to",
    "\\ldots" => "dot dot dot",
    "\\cdots" => "dot dot dot",
    "\\dots" => "dot dot dot",

    // Decorations
    "\\bar" => "with straight top hat",
    "\\hat" => "with hat",
    "\\widehat" => "with hat",
    "\\tilde" => "with tilde",
    "\\widetilde" => "with tilde",
    "\\vec" => "with vector arrow",
    "\\dot" => "with dot",
    "\\ddot" => "with double dot",
    "\\overline" => "with overline",
    "\\underline" => "with underline",

    // Brackets
    "\\left(" => "open parenthesis",
    "\\right)" => "close parenthesis",
    "\\left[" => "open bracket",
    "\\right]" => "close bracket",
    "\\left\\{" => "open curly brace",
    "\\right\\}" => "close curly brace",
    "\\left|" => "open vertical bar",
    "\\right|" => "close vertical bar",
    "\\left." => " ",
    "\\right." => " ",
    "\\langle" => "open angle bracket",
    "\\rangle" => "close angle bracket",

    // Functions
    "\\sin" => "sine",
    "\\cos" => "cosine",
    "\\tan" => "tangent",
    "\\csc" => "cosecant",
    "\\sec" => "secant",
    "\\cot" => "cotangent",
    "\\arcsin" => "arc sine",
    "\\arccos" => "arc cosine",
    "\\arctan" => "arc tangent",
    "\\sinh" => "hyperbolic sine",
    "\\cosh" => "hyperbolic cosine",
    "\\tanh" => "hyperbolic tangent",
    "\\log" => "logarithm",
    "\\ln" => "natural logarithm",
    "\\exp" => "exponential function",
    "\\max" => "maximum",
    "\\min" => "minimum",
    "\\det" => "determinant",

    // Big operators
    "\\lim" => "limit",
    "\\sum" => "summation",
    "\\prod" => "product",
    "\\int" => "integral",
    "\\iint" => "double integral",
    "\\iiint" => "triple integral",
    "\\oint" => "contour integral",

    // Statistics
    "N" => "normal distribution",
    "\\sim" => "distributed as",
    "\\mathbb{E}" => "expected value",
    "\\mathbb{P}" => "probability",
    "\\operatorname{Var}" => "variance",
    "\\operatorname{Cov}" => "covariance",
    "\\mid" => "given",

    // Number sets
    "\\mathbb{R}" => "the real numbers",
    "\\mathbb{N}" => "the natural numbers",
    "\\mathbb{Z}" => "the integers",
    "\\mathbb{Q}" => "the rational numbers",
    "\\mathbb{C}" => "the complex numbers",

    // Subscripts and superscripts
    "_" => "subscript",
    "^" => "superscript",

    // Roots and braces
    "\\sqrt" => "square root of",
    "\\nthroot" => "nth root of",
    "\\overbrace" => "overbrace",
    "\\underbrace" => "underbrace",

    // Spacing
    "\\quad" => " ",
    "\\qquad" => " ",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_entries_present() {
        assert_eq!(DEFAULT_MAPPINGS.get("\\alpha"), Some(&"alpha"));
        assert_eq!(DEFAULT_MAPPINGS.get("\\Omega"), Some(&"capital omega"));
    }

    #[test]
    fn test_stage_entries_present() {
        for key in ["\\frac", "\\sqrt", "\\bar", "\\hat", "_", "^", "\\left("] {
            assert!(DEFAULT_MAPPINGS.contains_key(key), "missing {}", key);
        }
    }

    #[test]
    fn test_no_empty_keys() {
        assert!(DEFAULT_MAPPINGS.keys().all(|k| !k.is_empty()));
    }
}
