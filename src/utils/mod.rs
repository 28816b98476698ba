//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics for LaTeX that is about to be spoken
//! - Error and warning types

pub mod diagnostics;
pub mod error;

pub use diagnostics::{check_latex, format_diagnostics, CheckResult, Diagnostic, DiagnosticLevel};
pub use error::{SpeechError, SpeechResult, SpeechWarning, WarningKind};
