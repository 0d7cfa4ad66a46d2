//! Span tracking for the pieces of a single line.
//!
//! A [`Span`] pairs a slice of a line's original text with the character
//! offset at which it starts. Spans never contain line terminators, except for the
//! dedicated newline span of a [`Line`](super::Line).

use serde::Serialize;
use std::fmt::{self, Display};

/// A contiguous slice of a line's original text.
///
/// An empty span means "absent". Its position carries no information and is
/// always normalised to zero, so two absent spans always compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Offset of the first character within the line, counted in
    /// characters (0-based).
    pub position: usize,
    /// The original text, verbatim.
    pub text: String,
}

impl Span {
    /// Creates a new span at the given position.
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self { position, text }
    }

    /// Returns true if this span is absent.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the byte length of the text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns the number of characters in the text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns the character offset just past the end of this span.
    pub fn end(&self) -> usize {
        self.position + self.char_count()
    }

    /// Returns the span text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Tracks the character offset while the lexer walks through a line.
///
/// The tracker wraps the remaining input and hands out [`Span`]s for the
/// slices consumed from its front.
#[derive(Debug, Clone, Copy)]
pub struct SpanTracker<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> SpanTracker<'a> {
    /// Creates a new span tracker for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Returns the remaining input.
    pub fn as_str(&self) -> &'a str {
        self.input
    }

    /// Returns true if there's no more input.
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Returns the number of characters consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Advances past `consumed`, which must be a prefix of the remaining
    /// input, and returns its span.
    pub fn consume(&mut self, consumed: &str) -> Span {
        debug_assert!(self.input.starts_with(consumed));
        let span = Span::new(self.offset, consumed);
        self.offset += consumed.chars().count();
        self.input = &self.input[consumed.len()..];
        span
    }

    /// Moves the tracker to `rest`, a suffix of the remaining input, and
    /// returns the span of everything skipped.
    pub fn advance_to(&mut self, rest: &'a str) -> Span {
        let consumed_len = self.input.len() - rest.len();
        let consumed = &self.input[..consumed_len];
        self.consume(consumed)
    }

    /// Peeks at the next character without consuming it.
    pub fn peek_char(&self) -> Option<char> {
        self.input.chars().next()
    }
}

impl AsRef<str> for SpanTracker<'_> {
    fn as_ref(&self) -> &str {
        self.input
    }
}
