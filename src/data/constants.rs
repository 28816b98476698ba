//! Spoken vocabulary and pipeline constants

/// Nesting tier names shared by roots and `\left( \right)` pairs.
/// Anything deeper than the last tier collapses onto it.
pub const DEPTH_TIERS: [&str; 4] = ["outer", "inner", "innermost", "deepest"];

/// Spelled-out ordinals used for fraction tags
pub const ORDINAL_WORDS: [&str; 10] = [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth",
];

/// Default ceiling on passes of any single fixed-point stage
pub const DEFAULT_MAX_ITERATIONS: usize = 64;

/// Internal pause marker for structural commas.
/// Survives the comma rule and is rendered as `,` at the very end.
pub const PAUSE_MARK: char = '\u{E000}';

/// Internal marker protecting `\$` from being read as a math delimiter
pub const DOLLAR_MARK: char = '\u{E001}';

/// Internal marker for a math minus between two operands
pub const MINUS_MARK: char = '\u{E002}';

/// Internal marker for a math minus with no left operand
pub const NEGATIVE_MARK: char = '\u{E003}';

/// Opening phrase of a narrated math span
pub const MATH_START: &str = "Starting a math equation";

/// Closing phrase of a narrated math span
pub const MATH_END: &str = "end of equation";

/// Text searched for when counting fraction phrases already emitted
pub const FRACTION_MARKER: &str = "-fraction-where-the-numerator-is";

/// Marker texts that reveal an already rewritten sub/superscript
pub const SCRIPT_MARKERS: [&str; 2] = ["end-subscript", "end-superscript"];

/// Size labels for `\big`-family delimiters
pub const SIZED_DELIMITER_LABELS: [(&str, &str); 4] = [
    ("big", "big"),
    ("Big", "bigger"),
    ("bigg", "large"),
    ("Bigg", "largest"),
];

/// Decoration commands rewritten to postfix phrases
pub const DECORATION_COMMANDS: [&str; 10] = [
    "\\bar",
    "\\hat",
    "\\widehat",
    "\\tilde",
    "\\widetilde",
    "\\vec",
    "\\dot",
    "\\ddot",
    "\\overline",
    "\\underline",
];

/// Fraction commands
pub const FRACTION_COMMANDS: [&str; 3] = ["\\frac", "\\dfrac", "\\tfrac"];

/// Root commands
pub const ROOT_COMMANDS: [&str; 2] = ["\\sqrt", "\\nthroot"];

/// Mapping keys owned by a dedicated structural stage.
/// The generic substitutor never touches these.
pub const STAGE_OWNED_KEYS: [&str; 17] = [
    "\\frac",
    "\\dfrac",
    "\\tfrac",
    "\\sqrt",
    "\\nthroot",
    "\\bar",
    "\\hat",
    "\\widehat",
    "\\tilde",
    "\\widetilde",
    "\\vec",
    "\\dot",
    "\\ddot",
    "\\overline",
    "\\underline",
    "_",
    "^",
];
