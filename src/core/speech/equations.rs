//! Math span handling: equation extraction and math-mode announcement
//!
//! Both stages see `$...$` and `$$...$$` through the same pattern so the
//! equations list and the announced spans always agree.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::data::constants::{
    DOLLAR_MARK, MATH_END, MATH_START, MINUS_MARK, NEGATIVE_MARK, PAUSE_MARK,
};

lazy_static! {
    /// Display math first, then inline math
    static ref MATH_SPAN_RE: Regex = Regex::new(r"(?s)\$\$(.*?)\$\$|\$(.*?)\$").unwrap();
}

/// Replace `\$` with an internal marker so it is never a delimiter
pub fn protect_escaped_dollars(text: &str) -> String {
    text.replace("\\$", &DOLLAR_MARK.to_string())
}

/// Undo [`protect_escaped_dollars`]
pub fn restore_escaped_dollars(text: &str) -> String {
    text.replace(DOLLAR_MARK, "\\$")
}

fn span_content<'t>(caps: &Captures<'t>) -> &'t str {
    caps.get(1)
        .or_else(|| caps.get(2))
        .map_or("", |m| m.as_str())
}

/// Collect the inner text of every math span, in order of appearance.
///
/// The source is not altered. An unpaired trailing `$` is simply ignored.
pub fn extract_equations(text: &str) -> Vec<String> {
    MATH_SPAN_RE
        .captures_iter(text)
        .map(|caps| restore_escaped_dollars(span_content(&caps)))
        .collect()
}

/// Wrap every math span in spoken start/end phrases.
///
/// With `announce` off the delimiters are dropped and the content kept.
/// Empty spans vanish either way.
pub fn announce_math(text: &str, announce: bool) -> String {
    MATH_SPAN_RE
        .replace_all(text, |caps: &Captures| {
            let inner = span_content(caps);
            if inner.trim().is_empty() {
                return String::new();
            }
            let inner = mark_minus_signs(inner);
            if announce {
                format!(
                    " {}{} {}{} {} ",
                    MATH_START, PAUSE_MARK, inner, PAUSE_MARK, MATH_END
                )
            } else {
                format!(" {} ", inner)
            }
        })
        .to_string()
}

/// Tag every minus sign in math content as binary or unary.
///
/// A minus whose nearest non-blank left neighbour is an operand (a letter,
/// digit, closing delimiter, `!` or `'`) is binary; anything else, including
/// an opening brace or another operator, makes it unary. `\-` is left alone.
pub fn mark_minus_signs(math: &str) -> String {
    let mut out = String::with_capacity(math.len());
    let mut prev: Option<char> = None;

    for c in math.chars() {
        if (c == '-' || c == '\u{2212}') && prev != Some('\\') {
            let left = out.trim_end_matches([' ', '\t', '\n']).chars().last();
            let binary = left.is_some_and(|l| {
                l.is_alphanumeric() || matches!(l, ')' | ']' | '}' | '|' | '!' | '\'')
            });
            out.push(if binary { MINUS_MARK } else { NEGATIVE_MARK });
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}

/// Count `$` characters that are not escaped
pub fn count_unescaped_dollars(text: &str) -> usize {
    protect_escaped_dollars(text).matches('$').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_order() {
        assert_eq!(extract_equations("$a$ text $$b$$"), vec!["a", "b"]);
    }

    #[test]
    fn test_extract_duplicates_preserved() {
        assert_eq!(extract_equations("$x$ and $x$"), vec!["x", "x"]);
    }

    #[test]
    fn test_extract_odd_dollars() {
        assert_eq!(extract_equations("$a$ costs $"), vec!["a"]);
        assert!(extract_equations("just $ one").is_empty());
    }

    #[test]
    fn test_extract_skips_escaped_dollar() {
        let text = protect_escaped_dollars(r"pay \$5 for $x$");
        assert_eq!(extract_equations(&text), vec!["x"]);
    }

    #[test]
    fn test_announce_wraps_span() {
        let out = announce_math("see $x$", true);
        assert!(out.contains(MATH_START));
        assert!(out.contains(MATH_END));
        assert!(out.contains(" x"));
        assert!(!out.contains('$'));
    }

    #[test]
    fn test_announce_disabled_keeps_content() {
        assert_eq!(announce_math("$$y$$", false).trim(), "y");
    }

    #[test]
    fn test_minus_signs_binary_and_unary() {
        let m = MINUS_MARK;
        let n = NEGATIVE_MARK;
        assert_eq!(mark_minus_signs("a-b"), format!("a{}b", m));
        assert_eq!(mark_minus_signs("2 - 3"), format!("2 {} 3", m));
        assert_eq!(mark_minus_signs("-5"), format!("{}5", n));
        assert_eq!(mark_minus_signs("e^{-x}"), format!("e^{{{}x}}", n));
        assert_eq!(mark_minus_signs("(x)-(-y)"), format!("(x){}({}y)", m, n));
        assert_eq!(mark_minus_signs("a = -b"), format!("a = {}b", n));
        assert_eq!(mark_minus_signs(r"\frac{a}{b}-1"), format!(r"\frac{{a}}{{b}}{}1", m));
    }

    #[test]
    fn test_announce_marks_minus_signs() {
        let out = announce_math("$2-3$ and 2-3", false);
        assert!(out.contains(MINUS_MARK));
        assert!(out.ends_with("and 2-3"));
    }

    #[test]
    fn test_count_unescaped_dollars() {
        assert_eq!(count_unescaped_dollars(r"\$ $x$ $"), 3);
    }
}
