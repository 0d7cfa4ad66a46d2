//! AST data structures for ssh_config lines.
//!
//! A [`Line`] is the lossless decomposition of one physical line: seven
//! spans that concatenate back to the original text.

use super::arguments::{decode_arguments, encode_arguments};
use super::error::{DecodeError, EncodeError};
use super::lexer::is_keyword_char;
use super::span::Span;
use serde::Serialize;
use std::fmt::{self, Display};

/// A single line of an ssh_config file.
///
/// A line without a keyword is blank. Blank lines may still carry leading
/// whitespace, a comment and a terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Line {
    /// Index of the line within its document (0-based).
    pub position: usize,
    /// Spaces and tabs before the keyword.
    pub prefix: Span,
    /// The keyword, original casing. Compared case-insensitively.
    pub keyword: Span,
    /// Separator between keyword and arguments; whitespace and at most one `=`.
    pub assignment: Span,
    /// Raw argument text, quotes and escapes included.
    pub arguments: Span,
    /// Spaces and tabs after the arguments.
    pub postfix: Span,
    /// Comment from `#` to the end of the line.
    pub comment: Span,
    /// The terminator as found: empty, `"\n"` or `"\r\n"`.
    pub newline: Span,
}

impl Line {
    /// Creates an all-empty blank line at the given position.
    pub fn blank(position: usize) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builds a line from the texts of its seven parts, computing positions.
    ///
    /// The parts are not checked against the line grammar.
    pub fn from_parts(position: usize, parts: [&str; 7]) -> Self {
        let mut offset = 0;
        let mut spans = parts.map(|text| {
            let span = Span::new(offset, text);
            offset += text.chars().count();
            span
        });
        let mut take = |i: usize| std::mem::take(&mut spans[i]);
        Self {
            position,
            prefix: take(0),
            keyword: take(1),
            assignment: take(2),
            arguments: take(3),
            postfix: take(4),
            comment: take(5),
            newline: take(6),
        }
    }

    /// Builds a directive line such as `Port 2222` terminated by `"\n"`.
    ///
    /// Values are quoted where needed so they decode back unchanged.
    pub fn directive(
        position: usize,
        keyword: &str,
        values: &[impl AsRef<str>],
    ) -> Result<Self, EncodeError> {
        validate_keyword(keyword)?;
        let arguments = encode_arguments(values)?;
        let assignment = if arguments.is_empty() { "" } else { " " };
        Ok(Self::from_parts(
            position,
            ["", keyword, assignment, &arguments, "", "", "\n"],
        ))
    }

    /// Returns a copy of this line with its arguments replaced.
    ///
    /// Indentation, keyword, comment and terminator are preserved. An empty
    /// separator becomes a single space when values are present.
    pub fn with_arguments(&self, values: &[impl AsRef<str>]) -> Result<Self, EncodeError> {
        validate_keyword(&self.keyword.text)?;
        let arguments = encode_arguments(values)?;
        let assignment = if self.assignment.is_empty() && !arguments.is_empty() {
            " "
        } else {
            self.assignment.as_str()
        };
        // Trailing whitespace only exists after arguments; keep one space
        // before a comment so it is not glued to the last token.
        let postfix = if arguments.is_empty() {
            ""
        } else if self.postfix.is_empty() && !self.comment.is_empty() {
            " "
        } else {
            self.postfix.as_str()
        };
        Ok(Self::from_parts(
            self.position,
            [
                self.prefix.as_str(),
                self.keyword.as_str(),
                assignment,
                &arguments,
                postfix,
                self.comment.as_str(),
                self.newline.as_str(),
            ],
        ))
    }

    /// Returns this line moved to another position.
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Returns true if this line has no keyword.
    pub fn is_blank(&self) -> bool {
        self.keyword.is_empty()
    }

    /// Returns true if the keyword equals `keyword`, ignoring ASCII case.
    pub fn has_keyword(&self, keyword: &str) -> bool {
        !self.is_blank() && self.keyword.text.eq_ignore_ascii_case(keyword)
    }

    /// Returns true if this line opens a `Host` section.
    pub fn is_host(&self) -> bool {
        self.has_keyword("Host")
    }

    /// Returns true if this line only carries a comment.
    pub fn is_comment(&self) -> bool {
        self.is_blank() && !self.comment.is_empty()
    }

    /// Returns the decoded argument tokens.
    pub fn arguments_as_slice(&self) -> Result<Vec<String>, DecodeError> {
        decode_arguments(&self.arguments.text)
    }

    /// Returns the decoded argument tokens joined by single spaces.
    pub fn arguments_as_string(&self) -> Result<String, DecodeError> {
        Ok(self.arguments_as_slice()?.join(" "))
    }

    /// Returns the seven spans in rendering order.
    pub fn spans(&self) -> [&Span; 7] {
        [
            &self.prefix,
            &self.keyword,
            &self.assignment,
            &self.arguments,
            &self.postfix,
            &self.comment,
            &self.newline,
        ]
    }

    /// Returns the total byte length of the rendered line.
    pub fn len(&self) -> usize {
        self.spans().iter().map(|span| span.len()).sum()
    }

    /// Returns true if the line renders to nothing.
    pub fn is_empty(&self) -> bool {
        self.spans().iter().all(|span| span.is_empty())
    }
}

fn validate_keyword(keyword: &str) -> Result<(), EncodeError> {
    if keyword.is_empty() || !keyword.chars().all(is_keyword_char) {
        return Err(EncodeError::InvalidKeyword {
            keyword: keyword.to_string(),
        });
    }
    Ok(())
}

/// Renders the original text of the line, terminator included.
impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in self.spans() {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}
