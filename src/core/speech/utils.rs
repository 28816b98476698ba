//! Utility functions for the speech pipeline
//!
//! Pure helpers that don't depend on pipeline state: balanced-group reading,
//! command scanning, ordinal words and the fixed-point driver.

use super::context::SpeechContext;
use crate::data::constants::{DEPTH_TIERS, ORDINAL_WORDS};
use crate::utils::error::WarningKind;

// =============================================================================
// Scanning
// =============================================================================

/// Skip spaces and tabs starting at `pos`
pub fn skip_spaces(s: &str, mut pos: usize) -> usize {
    while let Some(c) = s[pos..].chars().next() {
        if c == ' ' || c == '\t' {
            pos += c.len_utf8();
        } else {
            break;
        }
    }
    pos
}

/// Read a balanced `open ... close` group starting exactly at `start`.
///
/// Returns the inner text and the byte index just past the closing delimiter.
/// Escaped delimiters (`\{`) do not count towards the depth.
pub fn read_group(s: &str, start: usize, open: char, close: char) -> Option<(&str, usize)> {
    let rest = &s[start..];
    if !rest.starts_with(open) {
        return None;
    }

    let mut depth = 0usize;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                let inner = &rest[open.len_utf8()..i];
                return Some((inner, start + i + close.len_utf8()));
            }
        }
    }

    None
}

/// Read a control word (`\name`) starting exactly at `start`.
///
/// Returns the command including its backslash and the index past it.
pub fn read_command(s: &str, start: usize) -> Option<(&str, usize)> {
    let rest = &s[start..];
    if !rest.starts_with('\\') {
        return None;
    }
    let len = rest[1..]
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len() - 1);
    if len == 0 {
        return None;
    }
    Some((&rest[..len + 1], start + len + 1))
}

/// Read one macro argument: a braced group, a control word, or a single
/// alphanumeric character. Leading spaces are skipped.
pub fn read_arg(s: &str, start: usize) -> Option<(&str, usize)> {
    let pos = skip_spaces(s, start);
    let c = s[pos..].chars().next()?;
    match c {
        '{' => read_group(s, pos, '{', '}'),
        '\\' => read_command(s, pos),
        c if c.is_alphanumeric() => Some((&s[pos..pos + c.len_utf8()], pos + c.len_utf8())),
        _ => None,
    }
}

/// Whether `s` contains any of `names` as a whole control word
pub fn contains_command(s: &str, names: &[&str]) -> bool {
    let mut pos = 0;
    while let Some(offset) = s[pos..].find('\\') {
        let at = pos + offset;
        match read_command(s, at) {
            Some((name, end)) => {
                if names.contains(&name) {
                    return true;
                }
                pos = end;
            }
            None => pos = at + 1 + s[at + 1..].chars().next().map_or(0, char::len_utf8),
        }
    }
    false
}

/// Whether `s` contains an unescaped occurrence of `target`
pub fn contains_unescaped(s: &str, target: char) -> bool {
    let mut escaped = false;
    for c in s.chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == target {
            return true;
        }
    }
    false
}

/// Rewrite every control word in `names`, left to right, in one pass.
///
/// `rewrite` receives the output built so far, the command name and the
/// index just past the name. It returns the replacement and the index where
/// scanning resumes, or `None` to leave the command as it is.
pub fn rewrite_commands<F>(text: &str, names: &[&str], mut rewrite: F) -> String
where
    F: FnMut(&str, &str, usize) -> Option<(String, usize)>,
{
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(offset) = text[pos..].find('\\') {
        let at = pos + offset;
        out.push_str(&text[pos..at]);

        match read_command(text, at) {
            Some((name, after)) => {
                let replaced = if names.contains(&name) {
                    rewrite(&out, name, after)
                } else {
                    None
                };
                match replaced {
                    Some((replacement, resume)) => {
                        out.push_str(&replacement);
                        pos = resume;
                    }
                    None => {
                        out.push_str(name);
                        pos = after;
                    }
                }
            }
            None => {
                // Control symbol such as `\{` or `\,`: copy it whole
                let next = text[at + 1..].chars().next().map_or(0, char::len_utf8);
                out.push_str(&text[at..at + 1 + next]);
                pos = at + 1 + next;
            }
        }
    }

    out.push_str(&text[pos..]);
    out
}

// =============================================================================
// Spoken vocabulary
// =============================================================================

/// English ordinal suffix for `n` (`st`, `nd`, `rd`, `th`)
pub fn ordinal_suffix(n: u64) -> &'static str {
    match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Spelled-out ordinal for a 1-based position
pub fn ordinal_word(n: usize) -> String {
    match n {
        1..=10 => ORDINAL_WORDS[n - 1].to_string(),
        _ => format!("{}{}", n, ordinal_suffix(n as u64)),
    }
}

/// Tier name for a 0-based depth; deeper levels collapse to the last tier
pub fn depth_tier(depth: usize) -> &'static str {
    DEPTH_TIERS[depth.min(DEPTH_TIERS.len() - 1)]
}

// =============================================================================
// Fixed-point driver
// =============================================================================

/// Apply `pass` until it stops changing the text.
///
/// `pass` receives the current text and the number of passes that have
/// already changed it. When the ceiling from the options is reached the
/// partial rewrite is returned and a warning is recorded.
pub fn rewrite_to_fixed_point<F>(
    input: &str,
    stage: &'static str,
    ctx: &mut SpeechContext,
    mut pass: F,
) -> String
where
    F: FnMut(&str, usize) -> String,
{
    let max = ctx.max_iterations();
    let mut current = input.to_string();

    for index in 0..max {
        let next = pass(&current, index);
        if next == current {
            log::debug!("speech: {} settled after {} pass(es)", stage, index + 1);
            return current;
        }
        current = next;
    }

    ctx.warn(
        WarningKind::IterationLimit { stage },
        format!("{} stopped after {} passes", stage, max),
    );
    current
}
