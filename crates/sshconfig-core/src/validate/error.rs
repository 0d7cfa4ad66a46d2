//! Error types for ssh_config validation.
//!
//! This module defines the issues reported by the lint checks after a file
//! has been parsed.

use crate::parse::Line;
use crate::parse::span::Span;
use serde::Serialize;
use thiserror::Error;

/// The severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A warning that doesn't prevent ssh from reading the file.
    Warning,
    /// An error that may cause unexpected behavior.
    Error,
}

/// A validation issue found in an ssh_config file.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationError {
    /// Keyword not documented in `ssh_config(5)`.
    #[error("line {line}: unknown keyword '{keyword}'")]
    UnknownKeyword {
        /// The line number (1-based).
        line: usize,
        /// The keyword as written.
        keyword: String,
        /// Location of the keyword.
        span: Span,
    },

    /// `Host` line without any pattern.
    #[error("line {line}: Host line has no patterns")]
    HostWithoutPatterns {
        /// The line number (1-based).
        line: usize,
        /// Location of the keyword.
        span: Span,
    },

    /// `Host` patterns that could not be decoded.
    #[error("line {line}: invalid pattern list - {reason}")]
    InvalidPatternList {
        /// The line number (1-based).
        line: usize,
        /// Why decoding failed.
        reason: String,
        /// Location of the raw patterns.
        span: Span,
    },

    /// Directive the section resolver does not evaluate.
    #[error("line {line}: '{keyword}' directives are not evaluated")]
    UnsupportedDirective {
        /// The line number (1-based).
        line: usize,
        /// The keyword as written.
        keyword: String,
        /// Location of the keyword.
        span: Span,
    },

    /// Keyword repeated within one section.
    #[error("line {line}: duplicate keyword '{keyword}' is ignored (first set on line {first_line})")]
    DuplicateKeyword {
        /// The line number of the repeat (1-based).
        line: usize,
        /// The keyword as written on the repeated line.
        keyword: String,
        /// The line where the keyword was first set (1-based).
        first_line: usize,
        /// Location of the repeated keyword.
        span: Span,
    },
}

impl ValidationError {
    /// Creates an unknown keyword warning.
    pub fn unknown_keyword(line: &Line) -> Self {
        Self::UnknownKeyword {
            line: line.position + 1,
            keyword: line.keyword.text.clone(),
            span: line.keyword.clone(),
        }
    }

    /// Creates a missing patterns error.
    pub fn host_without_patterns(line: &Line) -> Self {
        Self::HostWithoutPatterns {
            line: line.position + 1,
            span: line.keyword.clone(),
        }
    }

    /// Creates an undecodable pattern list error.
    pub fn invalid_pattern_list(line: &Line, reason: impl Into<String>) -> Self {
        Self::InvalidPatternList {
            line: line.position + 1,
            reason: reason.into(),
            span: line.arguments.clone(),
        }
    }

    /// Creates an unsupported directive warning.
    pub fn unsupported_directive(line: &Line) -> Self {
        Self::UnsupportedDirective {
            line: line.position + 1,
            keyword: line.keyword.text.clone(),
            span: line.keyword.clone(),
        }
    }

    /// Creates a duplicate keyword warning.
    pub fn duplicate_keyword(line: &Line, first_line: usize) -> Self {
        Self::DuplicateKeyword {
            line: line.position + 1,
            keyword: line.keyword.text.clone(),
            first_line,
            span: line.keyword.clone(),
        }
    }

    /// Returns the span associated with this error.
    pub fn span(&self) -> &Span {
        match self {
            ValidationError::UnknownKeyword { span, .. } => span,
            ValidationError::HostWithoutPatterns { span, .. } => span,
            ValidationError::InvalidPatternList { span, .. } => span,
            ValidationError::UnsupportedDirective { span, .. } => span,
            ValidationError::DuplicateKeyword { span, .. } => span,
        }
    }

    /// Returns the line number where this error occurred (1-based).
    pub fn line(&self) -> usize {
        match self {
            ValidationError::UnknownKeyword { line, .. } => *line,
            ValidationError::HostWithoutPatterns { line, .. } => *line,
            ValidationError::InvalidPatternList { line, .. } => *line,
            ValidationError::UnsupportedDirective { line, .. } => *line,
            ValidationError::DuplicateKeyword { line, .. } => *line,
        }
    }

    /// Returns the severity of this error.
    pub fn severity(&self) -> Severity {
        match self {
            ValidationError::UnknownKeyword { .. } => Severity::Warning,
            ValidationError::HostWithoutPatterns { .. } => Severity::Error,
            ValidationError::InvalidPatternList { .. } => Severity::Error,
            ValidationError::UnsupportedDirective { .. } => Severity::Warning,
            ValidationError::DuplicateKeyword { .. } => Severity::Warning,
        }
    }
}

/// The result of validating an ssh_config file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    /// All validation issues found.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a new empty validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validation result with the given errors.
    pub fn with_errors(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Returns true if validation found nothing.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if there are validation issues.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns only errors (not warnings).
    pub fn errors_only(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity() == Severity::Error)
    }

    /// Returns only warnings.
    pub fn warnings_only(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity() == Severity::Warning)
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Merges another validation result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Orders issues by line, keeping check order within a line.
    pub fn sort_by_line(&mut self) {
        self.errors.sort_by_key(ValidationError::line);
    }
}
