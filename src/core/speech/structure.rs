//! Structural rewrite stages
//!
//! Fractions, roots, big operators, sub/superscripts and decorations. Each
//! stage rewrites innermost ("flat") occurrences first and repeats until a
//! pass changes nothing.
//!
//! Fraction and root depth names are emission order, not tree depth: a
//! fraction's ordinal is one more than the number of fraction phrases already
//! present before and inside it, and a root's tier is the index of the pass
//! that rewrote it.

use super::context::{hyphenate, SpeechContext};
use super::mapping::CommandMapping;
use super::utils::{
    contains_command, contains_unescaped, depth_tier, ordinal_suffix, ordinal_word, read_arg,
    read_command, read_group, rewrite_commands, rewrite_to_fixed_point, skip_spaces,
};
use crate::data::constants::{
    DECORATION_COMMANDS, FRACTION_COMMANDS, FRACTION_MARKER, PAUSE_MARK, ROOT_COMMANDS,
    SCRIPT_MARKERS,
};

/// Commands rewritten by the big-operator stage
pub const BIG_OPERATORS: [&str; 7] = [
    "\\sum", "\\prod", "\\int", "\\iint", "\\iiint", "\\oint", "\\lim",
];

// =============================================================================
// Fractions
// =============================================================================

/// Rewrite `\frac{N}{D}` (and `\dfrac`, `\tfrac`) into ordinal-tagged phrases
pub fn rewrite_fractions(text: &str, ctx: &mut SpeechContext) -> String {
    rewrite_to_fixed_point(text, "fractions", ctx, |current, _| fraction_pass(current))
}

fn fraction_pass(text: &str) -> String {
    rewrite_commands(text, &FRACTION_COMMANDS, |out, _, after| {
        let (numerator, after_num) = read_arg(text, after)?;
        let (denominator, end) = read_arg(text, after_num)?;

        if contains_command(numerator, &FRACTION_COMMANDS)
            || contains_command(denominator, &FRACTION_COMMANDS)
        {
            return None;
        }

        let emitted = out.matches(FRACTION_MARKER).count()
            + numerator.matches(FRACTION_MARKER).count()
            + denominator.matches(FRACTION_MARKER).count();
        let ordinal = ordinal_word(emitted + 1);

        Some((
            format!(
                " start-{o}-fraction-where-the-numerator-is {n} and-the-{o}-fraction-denominator-is {d} end-{o}-fraction ",
                o = ordinal,
                n = numerator.trim(),
                d = denominator.trim()
            ),
            end,
        ))
    })
}

// =============================================================================
// Roots
// =============================================================================

/// Rewrite `\sqrt{x}`, `\sqrt[n]{x}` and `\nthroot{n}{x}`
pub fn rewrite_roots(text: &str, ctx: &mut SpeechContext) -> String {
    rewrite_to_fixed_point(text, "roots", ctx, |current, pass| {
        root_pass(current, depth_tier(pass))
    })
}

fn root_pass(text: &str, tier: &str) -> String {
    rewrite_commands(text, &ROOT_COMMANDS, |_, name, after| {
        let (index, content, end) = if name == "\\nthroot" {
            let (index, after_index) = read_arg(text, after)?;
            let (content, end) = read_arg(text, after_index)?;
            (Some(index), content, end)
        } else {
            let pos = skip_spaces(text, after);
            match read_group(text, pos, '[', ']') {
                Some((index, after_index)) => {
                    let (content, end) = read_arg(text, after_index)?;
                    (Some(index), content, end)
                }
                None => {
                    let (content, end) = read_arg(text, after)?;
                    (None, content, end)
                }
            }
        };

        if contains_command(content, &ROOT_COMMANDS)
            || index.is_some_and(|i| contains_command(i, &ROOT_COMMANDS))
        {
            return None;
        }

        let content = content.trim();
        let phrase = match index.map(str::trim).filter(|i| !i.is_empty() && *i != "2") {
            None => format!(" {}-square-root-of {} ", tier, content),
            Some(index) => format!(" {}-{}-root-of {} ", tier, root_index_name(index), content),
        };
        Some((phrase, end))
    })
}

/// `3` -> `3rd`, `n` -> `nth`
fn root_index_name(index: &str) -> String {
    match index.parse::<u64>() {
        Ok(n) => format!("{}{}", n, ordinal_suffix(n)),
        Err(_) => format!("{}th", hyphenate(index)),
    }
}

// =============================================================================
// Big operators
// =============================================================================

/// Rewrite summations, products, integrals and limits that carry limits.
///
/// Runs before the generic sub/superscript stage so the operator phrasing
/// owns its `_` / `^`.
pub fn rewrite_big_operators(text: &str, mappings: &CommandMapping) -> String {
    rewrite_commands(text, &BIG_OPERATORS, |_, name, after| {
        let mut pos = skip_spaces(text, after);
        for modifier in ["\\limits", "\\nolimits"] {
            if text[pos..].starts_with(modifier) {
                pos = skip_spaces(text, pos + modifier.len());
            }
        }

        let is_limit = name == "\\lim";
        let mut lower = None;
        let mut upper = None;

        for _ in 0..2 {
            let marker = text[pos..].chars().next();
            match marker {
                Some('_') if lower.is_none() => {
                    let (arg, end) = read_arg(text, pos + 1)?;
                    lower = Some(arg.trim());
                    pos = skip_spaces(text, end);
                }
                Some('^') if upper.is_none() && !is_limit => {
                    let (arg, end) = read_arg(text, pos + 1)?;
                    upper = Some(arg.trim());
                    pos = skip_spaces(text, end);
                }
                _ => break,
            }
        }

        let lower = lower?;
        let symbol = mappings
            .get(name)
            .map(str::to_string)
            .unwrap_or_else(|| name.trim_start_matches('\\').to_string());
        let p = PAUSE_MARK;

        let phrase = if is_limit {
            format!(" {} as start-subscript{p} {}{p} end-subscript ", symbol, lower)
        } else {
            match upper {
                Some(upper) => format!(
                    " {}{p} from start-subscript{p} {}{p} end-subscript{p} to start-superscript{p} {}{p} end-superscript ",
                    symbol, lower, upper
                ),
                None => format!(
                    " {}{p} from start-subscript{p} {}{p} end-subscript ",
                    symbol, lower
                ),
            }
        };
        Some((phrase, pos))
    })
}

// =============================================================================
// Subscripts and superscripts
// =============================================================================

/// Rewrite `_x`, `^2`, `_{...}` and `^{...}`.
///
/// A braced script whose content already holds a rewritten script is tagged
/// `outer-`; there is no deeper tier.
pub fn rewrite_scripts(text: &str, ctx: &mut SpeechContext) -> String {
    rewrite_to_fixed_point(text, "scripts", ctx, |current, _| {
        let simple = script_pass(current, false);
        script_pass(&simple, true)
    })
}

fn script_pass(text: &str, braced: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();
    let mut copied_to = 0;

    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            // Escaped character or control word: never a script marker
            let skip_to = read_command(text, i)
                .map(|(_, end)| end)
                .unwrap_or_else(|| i + 1 + text[i + 1..].chars().next().map_or(0, char::len_utf8));
            while chars.peek().is_some_and(|(j, _)| *j < skip_to) {
                chars.next();
            }
            continue;
        }
        if c != '_' && c != '^' {
            continue;
        }

        let start = skip_spaces(text, i + 1);
        let opens_group = text[start..].starts_with('{');
        if opens_group != braced {
            continue;
        }

        let Some((content, end)) = read_arg(text, i + 1) else {
            continue;
        };
        if braced && (contains_unescaped(content, '_') || contains_unescaped(content, '^')) {
            continue;
        }

        let kind = if c == '_' { "subscript" } else { "superscript" };
        let nested = braced && SCRIPT_MARKERS.iter().any(|m| content.contains(m));
        let label = if nested {
            format!("outer-{}", kind)
        } else {
            kind.to_string()
        };

        out.push_str(&text[copied_to..i]);
        out.push_str(&format!(" {} {} end-{} ", label, content.trim(), label));
        copied_to = end;
        while chars.peek().is_some_and(|(j, _)| *j < end) {
            chars.next();
        }
    }

    out.push_str(&text[copied_to..]);
    out
}

// =============================================================================
// Decorations
// =============================================================================

/// Rewrite `\bar{x}`, `\hat{x}`, ... into postfix phrases taken from the
/// mapping. A decoration with no mapping entry is left alone.
pub fn rewrite_decorations(text: &str, mappings: &CommandMapping, ctx: &mut SpeechContext) -> String {
    rewrite_to_fixed_point(text, "decorations", ctx, |current, _| {
        rewrite_commands(current, &DECORATION_COMMANDS, |_, name, after| {
            let phrase = mappings.get(name)?;
            let (content, end) = read_arg(current, after)?;
            if contains_command(content, &DECORATION_COMMANDS) {
                return None;
            }
            Some((format!(" {} {} ", content.trim(), hyphenate(phrase)), end))
        })
    })
}
