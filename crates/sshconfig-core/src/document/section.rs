//! Host sections derived from a document's lines.

use crate::matching::{MatchConfig, PatternList};
use crate::parse::{DecodeError, Line};
use log::debug;

/// A `Host` line and the lines up to the next `Host` line.
///
/// The leading lines of a file, before any `Host` line, form an implicit
/// section whose `host` is a blank line. It never matches a hostname;
/// whether those lines apply globally is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The opening `Host` line, or a blank line for the implicit section.
    pub host: Line,
    /// Every line after `host` up to the next `Host` line.
    pub lines: Vec<Line>,
}

impl Section {
    /// Creates a section opened by `host`.
    pub fn new(host: Line, lines: Vec<Line>) -> Self {
        Self { host, lines }
    }

    /// Creates the implicit leading section.
    pub fn implicit(lines: Vec<Line>) -> Self {
        Self {
            host: Line::default(),
            lines,
        }
    }

    /// Returns true for the section of lines before the first `Host` line.
    pub fn is_implicit(&self) -> bool {
        self.host.is_blank()
    }

    /// Returns the index of the first line belonging to this section.
    pub fn start(&self) -> Option<usize> {
        if self.is_implicit() {
            self.lines.first().map(|line| line.position)
        } else {
            Some(self.host.position)
        }
    }

    /// Returns the decoded pattern list of the `Host` line.
    pub fn patterns(&self) -> Result<String, DecodeError> {
        self.host.arguments_as_string()
    }

    /// Returns true if this section's `Host` patterns match `hostname`.
    pub fn matches(&self, hostname: &str, config: &MatchConfig) -> bool {
        if self.is_implicit() {
            return false;
        }
        match self.patterns() {
            Ok(patterns) => PatternList::parse(&patterns, config).is_match(hostname),
            Err(e) => {
                debug!(
                    "Skipping Host line {} with undecodable patterns: {}",
                    self.host.position, e
                );
                false
            }
        }
    }

    /// Returns the first line in the section with the given keyword.
    pub fn find(&self, keyword: &str) -> Option<&Line> {
        self.lines.iter().find(|line| line.has_keyword(keyword))
    }

    /// Returns the decoded value of the first `keyword` line, joined by spaces.
    pub fn value_as_string(&self, keyword: &str) -> Result<Option<String>, DecodeError> {
        self.find(keyword)
            .map(Line::arguments_as_string)
            .transpose()
    }

    /// Returns the decoded tokens of the first `keyword` line.
    pub fn value_as_slice(&self, keyword: &str) -> Result<Option<Vec<String>>, DecodeError> {
        self.find(keyword).map(Line::arguments_as_slice).transpose()
    }
}

/// Groups lines into sections in a single forward scan.
///
/// An implicit section is produced only when lines precede the first `Host`
/// line.
pub fn group_sections<'a>(lines: impl IntoIterator<Item = &'a Line>) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut host: Option<&Line> = None;
    let mut buffer = Vec::new();

    for line in lines {
        if line.is_host() {
            close_section(&mut sections, host, std::mem::take(&mut buffer));
            host = Some(line);
        } else {
            buffer.push(line.clone());
        }
    }
    close_section(&mut sections, host, buffer);

    debug!("Grouped lines into {} sections", sections.len());
    sections
}

fn close_section(sections: &mut Vec<Section>, host: Option<&Line>, lines: Vec<Line>) {
    match host {
        Some(host) => sections.push(Section::new(host.clone(), lines)),
        None if !lines.is_empty() => sections.push(Section::implicit(lines)),
        None => {}
    }
}
