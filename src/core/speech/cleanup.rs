//! Final text cleanup: leftover LaTeX syntax and spoken punctuation
//!
//! Runs after every rewriting stage. Applying [`normalize_punctuation`] to
//! its own output leaves it unchanged; structural pauses stay behind
//! `PAUSE_MARK` until [`finish`] so the comma rule never sees them.

use lazy_static::lazy_static;
use regex::Regex;

use crate::data::constants::{DOLLAR_MARK, MINUS_MARK, NEGATIVE_MARK};

lazy_static! {
    /// Unicode dashes and minus signs
    static ref DASH_RE: Regex = Regex::new(r"[\x{2010}-\x{2015}\x{2212}]").unwrap();

    /// Line breaks and spacing commands: `\\`, `\,`, `\;`, `\:`, `\!`, `\ `
    static ref SPACING_RE: Regex = Regex::new(r"\\\\|\\[,;:! ]").unwrap();

    /// Escaped specials that are read as the character itself
    static ref ESCAPED_CHAR_RE: Regex = Regex::new(r"\\([%&#_])").unwrap();

    /// Literal and grouping braces; a group reads as a separate word
    static ref BRACE_RE: Regex = Regex::new(r"\\[{}]|[{}]").unwrap();

    /// Unmapped control words keep their name
    static ref CONTROL_WORD_RE: Regex = Regex::new(r"\\([A-Za-z]+)").unwrap();

    static ref NEGATIVE_RE: Regex = Regex::new(r"(?m)(^|[\s(\[\x{E000}])-(\d)").unwrap();

    /// The integer part may be missing: `.5`
    static ref DECIMAL_RE: Regex = Regex::new(r"(\d?)\.(\d)").unwrap();

    static ref ELLIPSIS_RE: Regex = Regex::new(r"\.{3}").unwrap();

    /// A period that ends a sentence or the text
    static ref PERIOD_RE: Regex = Regex::new(r"\.([\s\x{E000}]|$)").unwrap();

    /// A run of hyphens standing alone
    static ref DASH_WORD_RE: Regex = Regex::new(r"(^|\s)-+(\s|$)").unwrap();

    static ref BLANKS_RE: Regex = Regex::new(r"[ \t]+").unwrap();

    static ref LINE_EDGE_RE: Regex = Regex::new(r"[ \t]*\n[ \t]*").unwrap();

    static ref PAUSE_RE: Regex = Regex::new(r"[ \t]*\x{E000}").unwrap();
}

/// Strip leftover markup and speak punctuation
pub fn normalize_punctuation(text: &str) -> String {
    let text = DASH_RE.replace_all(text, "-");
    let text = text.replace(DOLLAR_MARK, " dollar ");
    let text = text.replace(MINUS_MARK, " minus ");
    let text = text.replace(NEGATIVE_MARK, " negative ");
    let text = SPACING_RE.replace_all(&text, " ");
    let text = ESCAPED_CHAR_RE.replace_all(&text, "$1");
    let text = BRACE_RE.replace_all(&text, " ");
    let text = CONTROL_WORD_RE.replace_all(&text, " $1");
    let text = text.replace('\\', "");

    let text = text.replace('=', " equals ");
    let text = NEGATIVE_RE.replace_all(&text, "${1}negative ${2}");
    let text = ELLIPSIS_RE.replace_all(&text, " dot dot dot ");
    let text = DECIMAL_RE.replace_all(&text, "${1} point ${2}");
    let text = PERIOD_RE.replace_all(&text, " period$1");
    // Adjacent dashes share a separator, so a second pass catches the rest
    let text = DASH_WORD_RE.replace_all(&text, "${1}dash${2}");
    let text = DASH_WORD_RE.replace_all(&text, "${1}dash${2}");
    let text = text.replace(',', " comma ");

    squeeze_blanks(&text)
}

/// Collapse blank runs, trim around line breaks and at both ends
fn squeeze_blanks(text: &str) -> String {
    let text = BLANKS_RE.replace_all(text, " ");
    let text = LINE_EDGE_RE.replace_all(&text, "\n");
    text.trim().to_string()
}

/// Turn structural pauses into commas attached to the preceding word
pub fn finish(text: &str) -> String {
    let text = PAUSE_RE.replace_all(text, ",");
    let text = text.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
    text.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::constants::PAUSE_MARK;

    #[test]
    fn test_spoken_punctuation() {
        assert_eq!(
            normalize_punctuation("x = 3.14. Done"),
            "x equals 3 point 14 period Done"
        );
        assert_eq!(normalize_punctuation("a, b"), "a comma b");
        assert_eq!(normalize_punctuation("wait..."), "wait dot dot dot");
        assert_eq!(normalize_punctuation("x = .5"), "x equals point 5");
        assert_eq!(normalize_punctuation("(.25)"), "( point 25)");
    }

    #[test]
    fn test_math_minus_marks_spoken() {
        let text = format!("2{}3 and {}x", MINUS_MARK, NEGATIVE_MARK);
        assert_eq!(normalize_punctuation(&text), "2 minus 3 and negative x");
    }

    #[test]
    fn test_negative_numbers_and_dashes() {
        assert_eq!(normalize_punctuation("x = -5"), "x equals negative 5");
        assert_eq!(normalize_punctuation("(-2)"), "(negative 2)");
        assert_eq!(normalize_punctuation("a - b"), "a dash b");
        assert_eq!(normalize_punctuation("a \u{2212} b"), "a dash b");
        // Hyphenated words are left alone
        assert_eq!(normalize_punctuation("start-subscript"), "start-subscript");
    }

    #[test]
    fn test_leftover_latex() {
        assert_eq!(normalize_punctuation(r"\mathrm{d}x"), "mathrm d x");
        assert_eq!(normalize_punctuation(r"50\% off"), "50% off");
        assert_eq!(normalize_punctuation(r"a\,b\\c"), "a b c");
        assert_eq!(normalize_punctuation(r"\{x\}"), "x");
    }

    #[test]
    fn test_escaped_dollar_spoken() {
        let text = format!("costs {}5", DOLLAR_MARK);
        assert_eq!(normalize_punctuation(&text), "costs dollar 5");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "x = 3.14. Done",
            "a - b, c...",
            "-1 and 2.5",
            "x = .5 or 3.",
            "line one.\n  line two",
            r"\alpha + {b}",
        ];
        for input in inputs {
            let once = normalize_punctuation(input);
            assert_eq!(normalize_punctuation(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_structural_pause_survives_comma_rule() {
        let text = format!("Starting a math equation{} x", PAUSE_MARK);
        let cleaned = normalize_punctuation(&text);
        assert!(!cleaned.contains("comma"));
        assert!(cleaned.contains(PAUSE_MARK));
        assert_eq!(finish(&cleaned), "Starting a math equation, x");
    }

    #[test]
    fn test_finish_trims_leading_pause() {
        let text = format!("{} x{} y", PAUSE_MARK, PAUSE_MARK);
        assert_eq!(finish(&text), "x, y");
    }
}
