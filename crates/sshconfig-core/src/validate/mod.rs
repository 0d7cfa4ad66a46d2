//! Validation module for ssh_config files.
//!
//! This module provides lint checks that run over a parsed document to find
//! lines ssh would ignore or misread.
//!
//! # Example
//!
//! ```rust
//! use sshconfig_core::document::Document;
//! use sshconfig_core::validate::validate_document;
//!
//! let document = Document::parse("Host a\n  Port 22\n  Port 23\n").unwrap();
//! let validation = validate_document(&document);
//! for error in &validation.errors {
//!     eprintln!("{}", error);
//! }
//! assert_eq!(validation.warnings_only().count(), 1);
//! ```

pub mod checks;
mod error;

// Re-export public types
pub use checks::{Check, CheckConfig, CheckContext, CheckRunner};
pub use error::{Severity, ValidationError, ValidationResult};

use crate::document::Document;

/// Runs every built-in check with the default configuration.
pub fn validate_document(document: &Document) -> ValidationResult {
    validate_document_with_config(document, &CheckConfig::default())
}

/// Runs every built-in check with the given configuration.
pub fn validate_document_with_config(document: &Document, config: &CheckConfig) -> ValidationResult {
    CheckRunner::with_all_checks().run(document, config)
}
