//! Error types for ssh_config parsing.
//!
//! This module defines the syntax error produced by the line grammar
//! parser, the errors of the argument codec, and the result of parsing a
//! whole document.

use super::ast::Line;
use crate::document::Document;
use thiserror::Error;

/// An error that occurred while parsing a line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A character that fits no stage of the line grammar.
    #[error(
        "line {}: unexpected character '{character}' at position {position} for remaining \"{remaining}\"",
        .line + 1
    )]
    UnexpectedCharacter {
        /// Index of the line within its document (0-based).
        line: usize,
        /// Character offset of the offending character within the line.
        position: usize,
        /// The offending character.
        character: char,
        /// Everything from the offending character to the end of the input.
        remaining: String,
    },
}

impl ParseError {
    /// Creates an unexpected character error for the remaining input.
    ///
    /// `remaining` must not be empty.
    pub fn unexpected_character(line: usize, position: usize, remaining: &str) -> Self {
        debug_assert!(!remaining.is_empty(), "no character left to report");
        Self::UnexpectedCharacter {
            line,
            position,
            character: remaining.chars().next().unwrap_or_default(),
            remaining: remaining.to_string(),
        }
    }

    /// Returns the line index where this error occurred.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnexpectedCharacter { line, .. } => *line,
        }
    }

    /// Returns the character offset within the line where this error occurred.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedCharacter { position, .. } => *position,
        }
    }
}

/// An error decoding raw argument text.
///
/// Text produced by the line parser always decodes; these errors only show
/// up for arguments built by hand.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A double quote was opened but never closed.
    #[error("unterminated quote at position {position}")]
    UnterminatedQuote {
        /// Character offset of the opening quote.
        position: usize,
    },

    /// A character that cannot start or continue an argument.
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// Character offset of the character.
        position: usize,
        /// The offending character.
        character: char,
    },
}

/// An error building line text from logical values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Values cannot span lines.
    #[error("argument {value:?} contains a line terminator")]
    LineTerminator {
        /// The rejected value.
        value: String,
    },

    /// Keywords are non-empty runs of ASCII letters and digits.
    #[error("invalid keyword {keyword:?}")]
    InvalidKeyword {
        /// The rejected keyword.
        keyword: String,
    },
}

/// The result of parsing a whole ssh_config document.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed document. In lenient mode, lines that failed to parse are
    /// replaced by blank lines carrying only their terminator.
    pub document: Document,
    /// Any errors encountered during parsing.
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    /// Creates a successful parse result with no errors.
    pub fn ok(document: Document) -> Self {
        Self {
            document,
            errors: Vec::new(),
        }
    }

    /// Creates a parse result with errors.
    pub fn with_errors(document: Document, errors: Vec<ParseError>) -> Self {
        Self { document, errors }
    }

    /// Returns true if parsing succeeded without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if there were parse errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Converts into the document, or the first error.
    pub fn into_result(self) -> Result<Document, ParseError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.document),
        }
    }

    /// Returns the lines of the parsed document.
    pub fn lines(&self) -> &[Line] {
        self.document.as_slice()
    }
}
