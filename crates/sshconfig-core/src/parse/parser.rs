//! Line and document-level parsers for ssh_config files.
//!
//! This module combines the lexer stages to parse single lines and entire
//! files.

use super::ast::Line;
use super::error::{ParseError, ParseResult};
use super::lexer::{self, LexResult};
use super::span::{Span, SpanTracker};
use crate::document::Document;
use log::{debug, trace};

/// Configuration options for the document parser.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// If true, parsing stops at the first error (strict mode).
    /// If false, errors are collected and parsing continues (lenient mode).
    pub strict: bool,
}

impl ParserConfig {
    /// Creates a new parser config with default settings (lenient mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a strict mode parser config.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Creates a lenient mode parser config.
    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

/// Runs one grammar stage, returning the span it consumed.
///
/// A stage that does not match consumes nothing.
fn stage<'a>(tracker: &mut SpanTracker<'a>, lexer: fn(&'a str) -> LexResult<'a>) -> Span {
    match lexer(tracker.as_str()) {
        Ok((rest, _)) => tracker.advance_to(rest),
        Err(_) => Span::default(),
    }
}

/// Parses a single line of an ssh_config file.
///
/// The returned line has position 0; see [`parse_line_at`].
pub fn parse_line(text: &str) -> Result<Line, ParseError> {
    parse_line_at(text, 0)
}

/// Parses a single line that sits at `position` within its document.
pub fn parse_line_at(text: &str, position: usize) -> Result<Line, ParseError> {
    let mut tracker = SpanTracker::new(text);
    let mut line = Line::blank(position);

    line.prefix = stage(&mut tracker, lexer::prefix);
    line.keyword = stage(&mut tracker, lexer::keyword);

    if !line.keyword.is_empty() {
        line.assignment = stage(&mut tracker, lexer::assignment);
        // Keyword and arguments may not touch
        if !line.assignment.is_empty() {
            line.arguments = stage(&mut tracker, lexer::arguments);
        }
        if !line.arguments.is_empty() {
            line.postfix = stage(&mut tracker, lexer::postfix);
        }
    }

    line.comment = stage(&mut tracker, lexer::comment);
    line.newline = stage(&mut tracker, lexer::newline);

    if !tracker.is_empty() {
        return Err(ParseError::unexpected_character(
            position,
            tracker.offset(),
            tracker.as_str(),
        ));
    }

    Ok(line)
}

/// Splits input into physical lines, each keeping its terminator.
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    input.split_inclusive('\n')
}

/// Parses an ssh_config file with the given configuration.
pub fn parse_document_with_config(input: &str, config: &ParserConfig) -> ParseResult {
    debug!(
        "Parsing ssh_config ({} bytes, strict={})",
        input.len(),
        config.strict
    );
    let mut lines = Vec::new();
    let mut errors = Vec::new();

    for (index, text) in split_lines(input).enumerate() {
        match parse_line_at(text, index) {
            Ok(line) => {
                trace!("Line {}: parsed successfully", index + 1);
                lines.push(line);
            }
            Err(error) => {
                debug!("Line {}: parse error - {}", index + 1, error);
                if config.strict {
                    debug!("Strict mode: stopping at first error");
                    return ParseResult::with_errors(Document::from_lines(lines), vec![error]);
                }
                // Keep indices aligned with the source
                let mut placeholder = Line::blank(index);
                let body = text.trim_end_matches(['\r', '\n']);
                placeholder.newline = Span::new(body.chars().count(), &text[body.len()..]);
                lines.push(placeholder);
                errors.push(error);
            }
        }
    }

    let document = Document::from_lines(lines);

    debug!(
        "Parsing complete: {} lines, {} errors",
        document.len(),
        errors.len()
    );
    if errors.is_empty() {
        ParseResult::ok(document)
    } else {
        ParseResult::with_errors(document, errors)
    }
}

/// Parses an ssh_config file using default (lenient) configuration.
pub fn parse_document(input: &str) -> ParseResult {
    parse_document_with_config(input, &ParserConfig::default())
}

/// Parses an ssh_config file in strict mode, stopping at first error.
pub fn parse_document_strict(input: &str) -> ParseResult {
    parse_document_with_config(input, &ParserConfig::strict())
}
