//! Host pattern matching for ssh_config files.
//!
//! A `Host` line carries a list of patterns. Each pattern may be negated
//! with a leading `!` and uses two wildcards:
//!
//! - `*` matches zero or more characters
//! - `?` matches exactly one character
//!
//! Every other character matches itself, case-sensitively. A hostname
//! matches a list when at least one positive pattern matches it and no
//! negated pattern does.

use globset::{GlobBuilder, GlobMatcher};
use log::warn;

/// Options controlling how pattern lists are split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchConfig {
    /// Treat commas as pattern delimiters in addition to whitespace.
    ///
    /// OpenSSH separates `Host` patterns with whitespace only; comma lists
    /// are an extension and must be enabled explicitly.
    pub comma_separated: bool,
}

impl MatchConfig {
    /// Creates a config with the OpenSSH delimiters (whitespace only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether commas separate patterns.
    pub fn with_comma_separated(mut self, value: bool) -> Self {
        self.comma_separated = value;
        self
    }
}

/// A single compiled host pattern.
#[derive(Debug, Clone)]
pub struct HostPattern {
    /// The pattern text as written, including any leading `!`.
    original: String,
    /// Whether the pattern is negated.
    negated: bool,
    /// The compiled glob; `None` for the empty pattern.
    matcher: Option<GlobMatcher>,
}

impl HostPattern {
    /// Compiles a host pattern.
    pub fn new(pattern: &str) -> Self {
        let (negated, glob) = match pattern.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };

        let matcher = if glob.is_empty() {
            None
        } else {
            let built = GlobBuilder::new(&to_glob(glob))
                .literal_separator(false)
                .backslash_escape(false)
                .case_insensitive(false)
                .build();
            match built {
                Ok(compiled) => Some(compiled.compile_matcher()),
                Err(e) => {
                    // Unreachable with escaped input; the pattern then only
                    // matches what an empty pattern would.
                    warn!("Could not compile host pattern '{}': {}", pattern, e);
                    None
                }
            }
        };

        Self {
            original: pattern.to_string(),
            negated,
            matcher,
        }
    }

    /// Returns the original pattern string.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Returns true if this pattern starts with `!`.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Checks the glob against a hostname, ignoring negation.
    pub fn glob_matches(&self, hostname: &str) -> bool {
        match &self.matcher {
            Some(matcher) => matcher.is_match(hostname),
            None => hostname.is_empty(),
        }
    }
}

/// Converts a host glob into globset syntax.
///
/// Literal runs are escaped so only `*` and `?` keep their meaning. Runs of
/// `*` collapse into one, which matches the same strings.
fn to_glob(pattern: &str) -> String {
    let mut glob = String::with_capacity(pattern.len() * 2);
    let mut literal = String::new();
    let mut previous_star = false;

    for c in pattern.chars() {
        match c {
            '*' | '?' => {
                glob.push_str(&globset::escape(&literal));
                literal.clear();
                if c == '*' && previous_star {
                    continue;
                }
                glob.push(c);
                previous_star = c == '*';
            }
            _ => {
                literal.push(c);
                previous_star = false;
            }
        }
    }
    glob.push_str(&globset::escape(&literal));
    glob
}

/// A compiled list of host patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternList {
    patterns: Vec<HostPattern>,
}

impl PatternList {
    /// Splits and compiles a pattern list.
    pub fn parse(list: &str, config: &MatchConfig) -> Self {
        let patterns = list
            .split(|c: char| c == ' ' || c == '\t' || (config.comma_separated && c == ','))
            .filter(|token| !token.is_empty())
            .map(HostPattern::new)
            .collect();
        Self { patterns }
    }

    /// Compiles already separated pattern tokens.
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| HostPattern::new(p.as_ref()))
                .collect(),
        }
    }

    /// Returns true if a positive pattern matches and no negated one does.
    pub fn is_match(&self, hostname: &str) -> bool {
        let mut matched = false;
        for pattern in &self.patterns {
            if pattern.glob_matches(hostname) {
                if pattern.is_negated() {
                    return false;
                }
                matched = true;
            }
        }
        matched
    }

    /// Returns the patterns in order.
    pub fn iter(&self) -> impl Iterator<Item = &HostPattern> {
        self.patterns.iter()
    }

    /// Returns the patterns without a leading `!`.
    pub fn positives(&self) -> impl Iterator<Item = &HostPattern> {
        self.patterns.iter().filter(|p| !p.is_negated())
    }

    /// Returns the negated patterns.
    pub fn negatives(&self) -> impl Iterator<Item = &HostPattern> {
        self.patterns.iter().filter(|p| p.is_negated())
    }

    /// Returns the number of patterns in the list.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if the list contains no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Checks a hostname against a whitespace-separated pattern list.
pub fn matches(pattern_list: &str, hostname: &str) -> bool {
    matches_with_config(pattern_list, hostname, &MatchConfig::default())
}

/// Checks a hostname against a pattern list split per `config`.
pub fn matches_with_config(pattern_list: &str, hostname: &str, config: &MatchConfig) -> bool {
    PatternList::parse(pattern_list, config).is_match(hostname)
}
