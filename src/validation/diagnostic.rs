//! Diagnostic types for validation results.

use std::fmt;

use crate::error::{RingsideError, Result};

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single validation diagnostic about one wrestler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Machine-readable code, e.g. `ringside::validate::stat-budget`.
    pub code: &'static str,
    /// Ring name of the wrestler the diagnostic is about.
    pub subject: String,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: &'static str, subject: &str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, subject, message)
    }

    pub fn warning(code: &'static str, subject: &str, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, subject, message)
    }

    fn new(severity: Severity, code: &'static str, subject: &str, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            subject: subject.to_string(),
            message: message.into(),
            help: None,
        }
    }

    /// Add help text to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subject = if self.subject.trim().is_empty() {
            "<unnamed>"
        } else {
            self.subject.as_str()
        };
        write!(f, "{}[{}]: {}: {}", self.severity, self.code, subject, self.message)
    }
}

/// Diagnostics collected from one or more checks.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == severity).count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// No diagnostics of any severity.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Turn any errors into a single `RingsideError::Validation`.
    pub fn into_result(self) -> Result<()> {
        let first = match self.diagnostics.iter().find(|d| d.severity == Severity::Error) {
            Some(d) => d.clone(),
            None => return Ok(()),
        };

        let errors = self.error_count();
        let message = if errors == 1 {
            first.to_string()
        } else {
            format!("{} (and {} more)", first, errors - 1)
        };
        Err(RingsideError::Validation {
            message,
            help: first.help,
        })
    }
}
