//! Parenthesis nesting
//!
//! `\left( ... \right)` pairs are matched with a stack, so their tier names
//! reflect real nesting depth. The `\big` family carries fixed size labels
//! instead.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::context::SpeechContext;
use super::utils::depth_tier;
use crate::data::constants::SIZED_DELIMITER_LABELS;
use crate::utils::error::WarningKind;

const LEFT_PAREN: &str = "\\left(";
const RIGHT_PAREN: &str = "\\right)";

lazy_static! {
    /// `\big(`, `\Bigl[`, `\biggr)`, `\Bigg\{`, `\big|` ...
    static ref SIZED_DELIMITER_RE: Regex =
        Regex::new(r"\\(Bigg|bigg|Big|big)[lr]?\s*(\\\{|\\\}|[()\[\]|])").unwrap();
}

/// Label every matched `\left(` / `\right)` pair with its depth tier.
///
/// Unmatched delimiters are left untouched for the command substitutor.
pub fn rewrite_parentheses(text: &str, ctx: &mut SpeechContext) -> String {
    let mut tokens: Vec<(usize, bool)> = text
        .match_indices(LEFT_PAREN)
        .map(|(i, _)| (i, true))
        .chain(text.match_indices(RIGHT_PAREN).map(|(i, _)| (i, false)))
        .collect();
    if tokens.is_empty() {
        return text.to_string();
    }
    tokens.sort_unstable();

    // position -> 0-based depth, only for delimiters that found a partner
    let mut depths: Vec<(usize, bool, usize)> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    let mut unmatched = 0usize;

    for (pos, is_open) in tokens {
        if is_open {
            stack.push(pos);
        } else if let Some(open_pos) = stack.pop() {
            let depth = stack.len();
            depths.push((open_pos, true, depth));
            depths.push((pos, false, depth));
        } else {
            unmatched += 1;
        }
    }
    unmatched += stack.len();

    if unmatched > 0 {
        ctx.warn(
            WarningKind::UnbalancedDelimiters,
            format!("{} unmatched \\left( / \\right) delimiter(s)", unmatched),
        );
    }

    depths.sort_unstable();

    let mut out = String::with_capacity(text.len());
    let mut copied_to = 0;
    for (pos, is_open, depth) in depths {
        out.push_str(&text[copied_to..pos]);
        let (side, len) = if is_open {
            ("open", LEFT_PAREN.len())
        } else {
            ("close", RIGHT_PAREN.len())
        };
        out.push_str(&format!(" {}-{}-parenthesis ", depth_tier(depth), side));
        copied_to = pos + len;
    }
    out.push_str(&text[copied_to..]);
    out
}

/// Label `\big`-family delimiters by size
pub fn rewrite_sized_delimiters(text: &str) -> String {
    SIZED_DELIMITER_RE
        .replace_all(text, |caps: &Captures| {
            let size = SIZED_DELIMITER_LABELS
                .iter()
                .find(|(cmd, _)| *cmd == &caps[1])
                .map_or("big", |(_, label)| *label);
            let shape = match &caps[2] {
                "(" => "open-parenthesis",
                ")" => "close-parenthesis",
                "[" => "open-bracket",
                "]" => "close-bracket",
                "\\{" => "open-brace",
                "\\}" => "close-brace",
                _ => "vertical-bar",
            };
            format!(" {}-{} ", size, shape)
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::speech::context::VerbalizationOptions;

    fn ctx() -> SpeechContext {
        SpeechContext::new(&VerbalizationOptions::default())
    }

    fn squash(s: &str) -> String {
        s.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_nested_pairs_use_true_depth() {
        let out = squash(&rewrite_parentheses(r"\left(\left(x\right)\right)", &mut ctx()));
        assert_eq!(
            out,
            "outer-open-parenthesis inner-open-parenthesis x inner-close-parenthesis outer-close-parenthesis"
        );
    }

    #[test]
    fn test_sibling_pairs_share_tier() {
        let out = squash(&rewrite_parentheses(
            r"\left(a\right)\left(b\right)",
            &mut ctx(),
        ));
        assert_eq!(out.matches("outer-open-parenthesis").count(), 2);
        assert!(!out.contains("inner"));
    }

    #[test]
    fn test_deep_nesting_collapses() {
        let text = r"\left(\left(\left(\left(\left(x\right)\right)\right)\right)\right)";
        let out = squash(&rewrite_parentheses(text, &mut ctx()));
        assert_eq!(out.matches("deepest-open-parenthesis").count(), 2);
        assert!(out.contains("innermost-open-parenthesis"));
    }

    #[test]
    fn test_unmatched_left_kept_and_warned() {
        let mut c = ctx();
        let out = rewrite_parentheses(r"\left(a \left(b\right)", &mut c);
        assert!(out.starts_with(r"\left(a"));
        assert!(out.contains("inner-open-parenthesis"));
        assert_eq!(c.warnings.len(), 1);
    }

    #[test]
    fn test_sized_delimiters_fixed_labels() {
        let out = squash(&rewrite_sized_delimiters(r"\Bigg( \big[ x \big] \Bigg)"));
        assert_eq!(
            out,
            "largest-open-parenthesis big-open-bracket x big-close-bracket largest-close-parenthesis"
        );
        assert_eq!(squash(&rewrite_sized_delimiters(r"\Bigl(")), "bigger-open-parenthesis");
    }

    #[test]
    fn test_sized_braces_and_bars() {
        let out = squash(&rewrite_sized_delimiters(r"\Bigg\{ x \Bigg\}"));
        assert_eq!(out, "largest-open-brace x largest-close-brace");
        let out = squash(&rewrite_sized_delimiters(r"\bigl| x \bigr|"));
        assert_eq!(out, "big-vertical-bar x big-vertical-bar");
    }
}
