//! The in-memory ssh_config document.
//!
//! A document is an ordered, contiguous list of [`Line`]s indexed from 0.
//! Sections are computed from the lines on every call and never stored, so
//! mutating a document can not leave a stale grouping behind.

mod section;

pub use section::{Section, group_sections};

use crate::matching::MatchConfig;
use crate::parse::{Line, ParseError, parse_document_strict};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// Errors from document lookups and mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// An index outside `[0, len)`.
    #[error("line index {index} is out of range for a document of {len} lines")]
    IndexOutOfRange { index: usize, len: usize },

    /// No `Host` section matched the hostname.
    #[error("no Host section matches '{hostname}'")]
    NoMatchingSection { hostname: String },
}

/// Operations on an indexable collection of lines.
///
/// Implementors provide storage; section lookup is derived from [`Ast::lines`].
pub trait Ast {
    /// Returns the current number of lines.
    fn num_lines(&self) -> usize;

    /// Returns the line at `index`.
    fn line(&self, index: usize) -> Result<&Line, DocumentError>;

    /// Stores `line` at `line.position`.
    ///
    /// An existing line at that index is replaced. Past the end, blank lines
    /// fill the gap so the document stays contiguous.
    fn set_line(&mut self, line: Line);

    /// Removes and returns the line at `index`, renumbering later lines.
    fn delete_line(&mut self, index: usize) -> Result<Line, DocumentError>;

    /// Iterates over the lines in order.
    fn lines(&self) -> impl Iterator<Item = &Line>;

    /// Groups the lines into sections.
    fn sections(&self) -> Vec<Section> {
        group_sections(self.lines())
    }

    /// Returns the first section whose `Host` patterns match `hostname`.
    fn section(&self, hostname: &str) -> Result<Section, DocumentError> {
        self.section_with_config(hostname, &MatchConfig::default())
    }

    /// Like [`Ast::section`], splitting pattern lists per `config`.
    fn section_with_config(
        &self,
        hostname: &str,
        config: &MatchConfig,
    ) -> Result<Section, DocumentError> {
        self.sections()
            .into_iter()
            .find(|section| section.matches(hostname, config))
            .ok_or_else(|| DocumentError::NoMatchingSection {
                hostname: hostname.to_string(),
            })
    }
}

/// A document backed by a `Vec<Line>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whole file, failing on the first malformed line.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_document_strict(input).into_result()
    }

    /// Creates a document from lines, renumbering them from 0.
    pub fn from_lines(lines: Vec<Line>) -> Self {
        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| line.with_position(index))
            .collect();
        Self { lines }
    }

    /// Inserts `line` at `line.position`, shifting later lines down.
    ///
    /// Past the end this behaves like [`Ast::set_line`].
    pub fn insert_line(&mut self, line: Line) {
        let index = line.position;
        if index >= self.lines.len() {
            self.set_line(line);
            return;
        }
        self.lines.insert(index, line);
        self.renumber_from(index + 1);
    }

    /// Returns the lines as a slice.
    pub fn as_slice(&self) -> &[Line] {
        &self.lines
    }

    /// Consumes the document, returning its lines.
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn renumber_from(&mut self, start: usize) {
        for (index, line) in self.lines.iter_mut().enumerate().skip(start) {
            line.position = index;
        }
    }

    fn check_index(&self, index: usize) -> Result<(), DocumentError> {
        if index < self.lines.len() {
            Ok(())
        } else {
            Err(DocumentError::IndexOutOfRange {
                index,
                len: self.lines.len(),
            })
        }
    }
}

impl Ast for Document {
    fn num_lines(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Result<&Line, DocumentError> {
        self.check_index(index)?;
        Ok(&self.lines[index])
    }

    fn set_line(&mut self, line: Line) {
        let index = line.position;
        while self.lines.len() < index {
            let position = self.lines.len();
            self.lines.push(Line::blank(position));
        }
        if index < self.lines.len() {
            self.lines[index] = line;
        } else {
            self.lines.push(line);
        }
    }

    fn delete_line(&mut self, index: usize) -> Result<Line, DocumentError> {
        self.check_index(index)?;
        let removed = self.lines.remove(index);
        self.renumber_from(index);
        Ok(removed)
    }

    fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the exact file contents.
impl Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_line_at;

    const CONFIG: &str = "\
# global
User admin

Host *.example.com !secret.example.com
  Port 2222
Host *
  Port 22
";

    fn directive(position: usize, keyword: &str, value: &str) -> Line {
        Line::directive(position, keyword, &[value]).unwrap()
    }

    #[test]
    fn parse_and_render() {
        let doc = Document::parse(CONFIG).unwrap();
        assert_eq!(doc.num_lines(), 7);
        assert_eq!(doc.to_string(), CONFIG);
        let parsed: Document = CONFIG.parse().unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn parse_reports_first_error() {
        let err = Document::parse("Host a\n @\n").unwrap_err();
        assert_eq!(err.line(), 1);
    }

    #[test]
    fn line_out_of_range() {
        let doc = Document::parse("Host a\n").unwrap();
        assert!(doc.line(0).is_ok());
        assert_eq!(
            doc.line(1),
            Err(DocumentError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn set_line_gap_fills() {
        let mut doc = Document::new();
        doc.set_line(directive(3, "Port", "22"));
        assert_eq!(doc.num_lines(), 4);
        for i in 0..3 {
            let line = doc.line(i).unwrap();
            assert!(line.is_blank());
            assert_eq!(line.position, i);
        }
        assert!(doc.line(3).unwrap().has_keyword("port"));
    }

    #[test]
    fn set_line_replaces() {
        let mut doc = Document::parse(CONFIG).unwrap();
        doc.set_line(directive(1, "User", "root"));
        assert_eq!(doc.num_lines(), 7);
        assert_eq!(doc.line(1).unwrap().to_string(), "User root\n");
    }

    #[test]
    fn set_line_appends_at_end() {
        let mut doc = Document::parse("Host a\n").unwrap();
        doc.set_line(directive(1, "Port", "1"));
        assert_eq!(doc.num_lines(), 2);
        assert_eq!(doc.to_string(), "Host a\nPort 1\n");
    }

    #[test]
    fn delete_line_reindexes() {
        let mut doc = Document::parse(CONFIG).unwrap();
        let removed = doc.delete_line(2).unwrap();
        assert!(removed.is_blank());
        assert_eq!(doc.num_lines(), 6);
        for (i, line) in doc.lines().enumerate() {
            assert_eq!(line.position, i);
        }
        assert!(doc.line(2).unwrap().is_host());
        assert_eq!(
            doc.delete_line(6),
            Err(DocumentError::IndexOutOfRange { index: 6, len: 6 })
        );
    }

    #[test]
    fn insert_line_shifts() {
        let mut doc = Document::parse("Host a\nPort 1\n").unwrap();
        doc.insert_line(directive(1, "User", "me"));
        assert_eq!(doc.to_string(), "Host a\nUser me\nPort 1\n");
        assert_eq!(doc.line(2).unwrap().position, 2);

        doc.insert_line(directive(5, "Port", "2"));
        assert_eq!(doc.num_lines(), 6);
        assert!(doc.line(3).unwrap().is_blank());
    }

    #[test]
    fn from_lines_renumbers() {
        let lines = vec![
            parse_line_at("Host a\n", 9).unwrap(),
            parse_line_at("Port 1\n", 9).unwrap(),
        ];
        let doc = Document::from_lines(lines);
        let positions: Vec<_> = doc.lines().map(|l| l.position).collect();
        assert_eq!(positions, vec![0, 1]);
    }

    #[test]
    fn section_lookup() {
        let doc = Document::parse(CONFIG).unwrap();
        let section = doc.section("www.example.com").unwrap();
        assert_eq!(section.value_as_string("port").unwrap().as_deref(), Some("2222"));

        let section = doc.section("secret.example.com").unwrap();
        assert_eq!(section.value_as_string("Port").unwrap().as_deref(), Some("22"));
    }

    #[test]
    fn section_not_found() {
        let doc = Document::parse("User admin\nHost a\n").unwrap();
        assert_eq!(
            doc.section("b"),
            Err(DocumentError::NoMatchingSection {
                hostname: "b".to_string()
            })
        );
    }

    #[test]
    fn sections_follow_mutation() {
        let mut doc = Document::parse(CONFIG).unwrap();
        assert_eq!(doc.sections().len(), 3);
        doc.delete_line(5).unwrap();
        assert_eq!(doc.sections().len(), 2);
        assert!(doc.section("other").is_err());
        let section = doc.section("www.example.com").unwrap();
        assert_eq!(section.lines.len(), 2);
    }

    #[test]
    fn section_with_comma_lists() {
        let doc = Document::parse("Host a,b\n  User x\n").unwrap();
        assert!(doc.section("b").is_err());
        let config = MatchConfig::new().with_comma_separated(true);
        assert!(doc.section_with_config("b", &config).is_ok());
    }
}
