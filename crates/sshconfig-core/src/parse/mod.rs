//! Parser module for ssh_config files.
//!
//! This module decomposes each line of an OpenSSH client configuration into
//! typed spans that concatenate back to the original text, byte for byte.
//!
//! # Example
//!
//! ```rust
//! use sshconfig_core::parse::parse_line;
//!
//! let line = parse_line("  Port = 2222  # non-standard\n").unwrap();
//! assert_eq!(line.keyword.text, "Port");
//! assert_eq!(line.assignment.text, " = ");
//! assert_eq!(line.arguments_as_slice().unwrap(), vec!["2222"]);
//! assert_eq!(line.to_string(), "  Port = 2222  # non-standard\n");
//! ```

pub mod arguments;
mod ast;
mod error;
pub mod lexer;
mod parser;
pub mod span;

// Re-export public types
pub use arguments::{decode_arguments, encode_argument, encode_arguments};
pub use ast::Line;
pub use error::{DecodeError, EncodeError, ParseError, ParseResult};
pub use parser::{
    ParserConfig, parse_document, parse_document_strict, parse_document_with_config, parse_line,
    parse_line_at, split_lines,
};
pub use span::Span;
