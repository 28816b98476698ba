//! Pre-flight diagnostics for LaTeX that is about to be spoken
//!
//! The transcompiler never fails, it degrades. This module reports the
//! places where it will degrade so a caller can fix the source first:
//!
//! - Unbalanced braces
//! - An odd number of `$` delimiters
//! - Unmatched `\left(` / `\right)`
//! - Commands with no spoken form
//!
//! ## Example
//!
//! ```rust
//! use speaktex::core::speech::CommandMapping;
//! use speaktex::diagnostics::check_latex;
//!
//! let result = check_latex(r"$\frac{1}{2", &CommandMapping::default());
//! assert!(result.has_errors());
//! ```

use std::fmt;

use fxhash::FxHashSet;

use crate::core::speech::utils::read_command;
use crate::core::speech::CommandMapping;
use crate::data::constants::SIZED_DELIMITER_LABELS;

/// Control words the pipeline consumes without a mapping entry of their own
const STRUCTURAL_WORDS: [&str; 4] = ["\\left", "\\right", "\\limits", "\\nolimits"];

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - the spoken output may be garbled
    Warning,
    /// Error - part of the input will be read out as raw markup
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Column number (1-indexed)
    pub column: Option<usize>,
    /// Relevant source text
    pub source_text: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: None,
            column: None,
            source_text: None,
            suggestion: None,
        }
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;

        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "\n  --> line {}:{}", line, col)?;
        }

        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Check result with summary
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of info messages
    pub infos: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(plural(self.errors, "error"));
        }
        if self.warnings > 0 {
            parts.push(plural(self.warnings, "warning"));
        }
        if self.infos > 0 {
            parts.push(plural(self.infos, "note"));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn plural(n: usize, word: &str) -> String {
    format!("{} {}{}", n, word, if n == 1 { "" } else { "s" })
}

/// Check LaTeX source for places where speech output will degrade
pub fn check_latex(input: &str, mappings: &CommandMapping) -> CheckResult {
    let mut result = CheckResult::new();
    let line_offsets = compute_line_offsets(input);

    check_brace_balance(input, &line_offsets, &mut result);
    check_dollar_balance(input, &line_offsets, &mut result);
    check_paren_balance(input, &line_offsets, &mut result);
    check_unmapped_commands(input, mappings, &line_offsets, &mut result);

    log::debug!("diagnostics: {}", result.summary());
    result
}

/// Compute byte offsets for each line start
fn compute_line_offsets(input: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in input.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Convert byte offset to 1-indexed line and column
fn offset_to_location(offset: usize, line_offsets: &[usize]) -> (usize, usize) {
    let line = line_offsets
        .iter()
        .position(|&o| o > offset)
        .unwrap_or(line_offsets.len())
        - 1;

    let column = offset - line_offsets.get(line).unwrap_or(&0) + 1;
    (line + 1, column)
}

fn check_brace_balance(input: &str, line_offsets: &[usize], result: &mut CheckResult) {
    let mut open: Vec<usize> = Vec::new();
    let mut escaped = false;

    for (offset, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => open.push(offset),
            '}' => {
                if open.pop().is_none() {
                    let (line, col) = offset_to_location(offset, line_offsets);
                    result.add(
                        Diagnostic::new(DiagnosticLevel::Error, "unmatched closing brace '}'")
                            .with_location(line, col)
                            .with_suggestion("Check for missing opening brace"),
                    );
                }
            }
            _ => {}
        }
    }

    if let Some(&first) = open.first() {
        let (line, col) = offset_to_location(first, line_offsets);
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Error,
                format!(
                    "{} unclosed brace{}",
                    open.len(),
                    if open.len() == 1 { "" } else { "s" }
                ),
            )
            .with_location(line, col)
            .with_suggestion("Check for missing closing brace '}'"),
        );
    }
}

fn check_dollar_balance(input: &str, line_offsets: &[usize], result: &mut CheckResult) {
    let mut last = None;
    let mut count = 0usize;
    let mut escaped = false;
    for (offset, c) in input.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '$' {
            count += 1;
            last = Some(offset);
        }
    }

    if count % 2 == 1 {
        let mut diag = Diagnostic::new(
            DiagnosticLevel::Warning,
            "odd number of '$' delimiters; the last one will be read as text",
        )
        .with_suggestion("Close the math span, or write \\$ for a literal dollar sign");
        if let Some(offset) = last {
            let (line, col) = offset_to_location(offset, line_offsets);
            diag = diag.with_location(line, col);
        }
        result.add(diag);
    }
}

fn check_paren_balance(input: &str, line_offsets: &[usize], result: &mut CheckResult) {
    let mut tokens: Vec<(usize, bool)> = input
        .match_indices("\\left(")
        .map(|(i, _)| (i, true))
        .chain(input.match_indices("\\right)").map(|(i, _)| (i, false)))
        .collect();
    tokens.sort_unstable();

    let mut stack = Vec::new();
    for (offset, is_open) in tokens {
        if is_open {
            stack.push(offset);
        } else if stack.pop().is_none() {
            let (line, col) = offset_to_location(offset, line_offsets);
            result.add(
                Diagnostic::new(DiagnosticLevel::Warning, "'\\right)' without '\\left('")
                    .with_location(line, col)
                    .with_source("\\right)"),
            );
        }
    }

    for offset in stack {
        let (line, col) = offset_to_location(offset, line_offsets);
        result.add(
            Diagnostic::new(DiagnosticLevel::Warning, "'\\left(' without '\\right)'")
                .with_location(line, col)
                .with_source("\\left("),
        );
    }
}

/// Whether `name` is spoken by some mapping entry or consumed structurally
fn is_known_command(name: &str, mappings: &CommandMapping) -> bool {
    if mappings.contains(name) || STRUCTURAL_WORDS.contains(&name) {
        return true;
    }

    let sized = SIZED_DELIMITER_LABELS.iter().any(|(cmd, _)| {
        name.strip_prefix(*cmd)
            .is_some_and(|rest| rest.is_empty() || rest == "l" || rest == "r")
    });
    if sized {
        return true;
    }

    // Keys like `\mathbb{R}` or `\left[` start with the bare control word
    mappings.iter().any(|(key, _)| {
        key.strip_prefix(name)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| !c.is_ascii_alphabetic())
    })
}

fn check_unmapped_commands(
    input: &str,
    mappings: &CommandMapping,
    line_offsets: &[usize],
    result: &mut CheckResult,
) {
    let mut reported: FxHashSet<&str> = FxHashSet::default();
    let mut pos = 0;

    while let Some(found) = input[pos..].find('\\') {
        let at = pos + found;
        match read_command(input, at) {
            Some((name, end)) => {
                if !is_known_command(name, mappings) && reported.insert(name) {
                    let (line, col) = offset_to_location(at, line_offsets);
                    result.add(
                        Diagnostic::new(
                            DiagnosticLevel::Info,
                            format!(
                                "command '{}' has no spoken form and will be read as '{}'",
                                name,
                                &name[1..]
                            ),
                        )
                        .with_location(line, col)
                        .with_source(name)
                        .with_suggestion(format!("Add a mapping for {}", name)),
                    );
                }
                pos = end;
            }
            None => {
                pos = at + 1 + input[at + 1..].chars().next().map_or(0, char::len_utf8);
            }
        }
    }
}

/// Format check results for terminal output
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    if use_color {
        if result.has_errors() {
            output.push_str("\x1b[31m");
        } else if result.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}
