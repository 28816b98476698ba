//! Error handling for speaktex
//!
//! The transcompiler itself never fails: malformed LaTeX degrades to
//! best-effort text. Errors only come from configuration (options, mapping
//! files) and I/O around it. Non-fatal pipeline notes are [`SpeechWarning`]s.

use std::fmt;

/// Configuration or I/O error
#[derive(Debug, Clone)]
pub enum SpeechError {
    /// Verbalization options that cannot be used as given
    InvalidOptions { message: String },
    /// A command mapping entry that cannot be used
    InvalidMapping { command: String, message: String },
    /// A configuration file could not be parsed
    Config { message: String },
    /// IO error (for file operations)
    Io { message: String },
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeechError::InvalidOptions { message } => {
                write!(f, "Invalid options: {}", message)
            }
            SpeechError::InvalidMapping { command, message } => {
                if command.is_empty() {
                    write!(f, "Invalid mapping: {}", message)
                } else {
                    write!(f, "Invalid mapping for '{}': {}", command, message)
                }
            }
            SpeechError::Config { message } => {
                write!(f, "Config error: {}", message)
            }
            SpeechError::Io { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for SpeechError {}

impl From<std::io::Error> for SpeechError {
    fn from(err: std::io::Error) -> Self {
        SpeechError::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "data-loading")]
impl From<serde_json::Error> for SpeechError {
    fn from(err: serde_json::Error) -> Self {
        SpeechError::Config {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "data-loading")]
impl From<toml::de::Error> for SpeechError {
    fn from(err: toml::de::Error) -> Self {
        SpeechError::Config {
            message: err.to_string(),
        }
    }
}

/// Result type for configuration operations
pub type SpeechResult<T> = Result<T, SpeechError>;

// Convenience constructors for errors
impl SpeechError {
    pub fn options(message: impl Into<String>) -> Self {
        SpeechError::InvalidOptions {
            message: message.into(),
        }
    }

    pub fn mapping(command: impl Into<String>, message: impl Into<String>) -> Self {
        SpeechError::InvalidMapping {
            command: command.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        SpeechError::Config {
            message: message.into(),
        }
    }
}

/// What a pipeline warning is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// A fixed-point stage hit its pass ceiling and returned a partial rewrite
    IterationLimit { stage: &'static str },
    /// `\left(` / `\right)` or `$` delimiters that could not be paired
    UnbalancedDelimiters,
    /// The options were normalized at entry
    OptionsAdjusted,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::IterationLimit { stage } => write!(f, "iteration-limit({})", stage),
            WarningKind::UnbalancedDelimiters => write!(f, "unbalanced-delimiters"),
            WarningKind::OptionsAdjusted => write!(f, "options-adjusted"),
        }
    }
}

/// Non-fatal note produced while transcompiling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechWarning {
    pub kind: WarningKind,
    pub message: String,
}

impl SpeechWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for SpeechWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning [{}]: {}", self.kind, self.message)
    }
}
