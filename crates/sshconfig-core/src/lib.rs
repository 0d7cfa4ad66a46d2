//! ssh_config Core
//!
//! A library for parsing, querying and editing OpenSSH client configuration
//! files without losing a single byte of formatting.
//!
//! # Features
//!
//! - **Parser**: Decompose every line into spans that render back verbatim
//! - **Codec**: Decode and encode quoted arguments
//! - **Matching**: Resolve `Host` pattern lists with `*`, `?` and `!`
//! - **Document**: Index-addressable lines with derived `Host` sections
//! - **Validation**: Lint checks for unknown keywords and dead directives
//!
//! # Quick Start
//!
//! ```rust
//! use sshconfig_core::document::{Ast, Document};
//! use sshconfig_core::parse::Line;
//!
//! let input = "\
//! Host *.example.com !secret.example.com
//!   User deploy
//! Host *
//!   User me
//! ";
//!
//! let mut document = Document::parse(input).unwrap();
//! let section = document.section("web.example.com").unwrap();
//! assert_eq!(section.value_as_string("user").unwrap().as_deref(), Some("deploy"));
//!
//! // Edits keep every other byte intact
//! let user = document.line(1).unwrap().with_arguments(&["admin"]).unwrap();
//! document.set_line(user);
//! assert!(document.to_string().starts_with("Host *.example.com !secret.example.com\n  User admin\n"));
//!
//! let port = Line::directive(4, "Port", &["2222"]).unwrap();
//! document.set_line(port);
//! assert_eq!(document.num_lines(), 5);
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Line grammar parser and argument codec
//! - [`matching`]: Host pattern matching
//! - [`document`]: Documents and sections
//! - [`keywords`]: Registry of documented keywords
//! - [`validate`]: Validation rules for parsed files

pub mod document;
#[cfg(feature = "generate")]
pub mod generate;
pub mod keywords;
pub mod matching;
pub mod parse;
pub mod validate;

// Re-export commonly used types at the crate root
pub use document::{Ast, Document, DocumentError, Section};
pub use keywords::is_standard_keyword;
pub use matching::{MatchConfig, matches};
pub use parse::{Line, ParseError, ParseResult, Span, parse_document, parse_line};
pub use validate::checks::{Check, CheckConfig, CheckContext, CheckRunner};
pub use validate::{ValidationResult, validate_document};
