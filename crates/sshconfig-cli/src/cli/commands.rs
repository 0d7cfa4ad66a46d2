//! Subcommand implementations.
//!
//! Each command works on an already loaded document and writes to a generic
//! writer; reading and rewriting the file is left to `main`.

use crate::cli::config::{ConfigError, ExitCode, ValidatedConfig};
use crate::cli::output::{HumanOutput, SectionSummary, ValidationResults, write_json};
use serde_json::json;
use sshconfig_core::document::{Ast, Document, DocumentError, Section};
use sshconfig_core::parse::{DecodeError, Line, ParseError, ParseResult, Span, parse_line_at};
use sshconfig_core::validate::CheckRunner;
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that make a command fail.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Reading or writing the file failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The file has lines that could not be parsed.
    #[error("{count} line(s) could not be parsed, first: {first}")]
    Unparsable {
        /// Number of malformed lines.
        count: usize,
        /// The first parse error.
        first: ParseError,
    },

    /// A new line could not be parsed.
    #[error("invalid line: {0}")]
    InvalidLine(#[from] ParseError),

    /// A document lookup or edit failed.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// A value could not be decoded.
    #[error("could not decode value: {0}")]
    Decode(#[from] DecodeError),

    /// The keyword is not set for the hostname.
    #[error("'{keyword}' is not set for '{hostname}'")]
    KeywordNotSet {
        /// The keyword looked up.
        keyword: String,
        /// The hostname resolved.
        hostname: String,
    },

    /// Writing output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Returns the document, failing if any line was malformed.
///
/// Commands that print or rewrite the whole file use this so that
/// placeholder lines never replace real content.
pub fn require_clean(parsed: ParseResult) -> Result<Document, CommandError> {
    let count = parsed.errors.len();
    match parsed.errors.into_iter().next() {
        Some(first) => Err(CommandError::Unparsable { count, first }),
        None => Ok(parsed.document),
    }
}

/// Runs all checks and writes the report.
pub fn check<W: Write>(
    config: &ValidatedConfig,
    parsed: ParseResult,
    out: &mut W,
    use_colors: bool,
) -> Result<ExitCode, CommandError> {
    let mut results = ValidationResults::new();
    results.add_parse_errors(parsed.errors);
    for (name, result) in CheckRunner::with_all_checks().run_by_check(&parsed.document, &config.check_config) {
        results.add(name, result);
    }

    if config.json_output {
        results.write_json(out)?;
    } else {
        results.write_human(out, use_colors)?;
    }

    Ok(config.exit_code_for_results(results.has_errors(), results.has_warnings()))
}

/// Lists the sections of the document.
pub fn sections<W: Write>(
    config: &ValidatedConfig,
    document: &Document,
    out: &mut W,
    use_colors: bool,
) -> Result<ExitCode, CommandError> {
    let summaries: Vec<SectionSummary> = document
        .sections()
        .iter()
        .enumerate()
        .map(|(index, section)| SectionSummary::new(index, section))
        .collect();

    if config.json_output {
        write_json(out, &summaries)?;
    } else {
        let mut output = HumanOutput::new(out, use_colors);
        for summary in &summaries {
            output.write_section(summary)?;
        }
    }
    Ok(ExitCode::Success)
}

/// Resolves `hostname` and prints its section or one decoded value.
///
/// With `include_global`, the lines before the first Host line are consulted
/// first, as ssh would read them.
pub fn get<W: Write>(
    config: &ValidatedConfig,
    document: &Document,
    hostname: &str,
    keyword: Option<&str>,
    include_global: bool,
    out: &mut W,
) -> Result<ExitCode, CommandError> {
    let mut scopes: Vec<Section> = Vec::new();
    if include_global {
        scopes.extend(document.sections().into_iter().find(Section::is_implicit));
    }
    match document.section_with_config(hostname, &config.match_config) {
        Ok(section) => scopes.push(section),
        Err(e) if scopes.is_empty() => return Err(e.into()),
        Err(e) => debug!("{}; using global lines only", e),
    }

    let Some(keyword) = keyword else {
        let lines: Vec<&Line> = scopes
            .iter()
            .flat_map(|s| std::iter::once(&s.host).chain(s.lines.iter()))
            .filter(|line| !line.is_empty())
            .collect();
        if config.json_output {
            let rendered: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
            write_json(out, &json!({ "hostname": hostname, "lines": rendered }))?;
        } else {
            for line in lines {
                write!(out, "{}", line)?;
                if line.newline.is_empty() {
                    writeln!(out)?;
                }
            }
        }
        return Ok(ExitCode::Success);
    };

    for scope in &scopes {
        if let Some(values) = scope.value_as_slice(keyword)? {
            if config.json_output {
                write_json(
                    out,
                    &json!({ "hostname": hostname, "keyword": keyword, "values": values }),
                )?;
            } else {
                writeln!(out, "{}", values.join(" "))?;
            }
            return Ok(ExitCode::Success);
        }
    }

    Err(CommandError::KeywordNotSet {
        keyword: keyword.to_string(),
        hostname: hostname.to_string(),
    })
}

/// Returns the terminator used by the document, `"\n"` if none is found.
fn detect_newline(document: &Document) -> &str {
    document
        .lines()
        .map(|line| line.newline.as_str())
        .find(|newline| !newline.is_empty())
        .unwrap_or("\n")
}

/// Parses `text` as a line and stores it at `index`.
///
/// The line keeps the terminator of the line it replaces. Past the end, the
/// last line is terminated and blank lines fill the gap so the rendered file
/// keeps one line per index.
pub fn set_line(document: &mut Document, index: usize, text: &str) -> Result<(), CommandError> {
    let text = text.trim_end_matches(['\r', '\n']);
    let newline = match document.line(index) {
        Ok(existing) => existing.newline.text.clone(),
        Err(_) => detect_newline(document).to_string(),
    };
    let line = parse_line_at(&format!("{}{}", text, newline), index)?;

    if index >= document.num_lines() {
        terminate_last_line(document, &newline);
        while document.num_lines() < index {
            let position = document.num_lines();
            document.set_line(Line::from_parts(position, ["", "", "", "", "", "", &newline]));
        }
    }

    info!("Setting line {}", index + 1);
    document.set_line(line);
    Ok(())
}

fn terminate_last_line(document: &mut Document, newline: &str) {
    let Some(last) = document.num_lines().checked_sub(1) else {
        return;
    };
    if let Ok(line) = document.line(last) {
        if line.newline.is_empty() {
            let mut parts = line.spans().map(Span::as_str);
            parts[6] = newline;
            let terminated = Line::from_parts(line.position, parts);
            document.set_line(terminated);
        }
    }
}

/// Deletes the line at `index`.
pub fn delete_line(document: &mut Document, index: usize) -> Result<Line, CommandError> {
    let removed = document.delete_line(index)?;
    info!("Deleted line {}: {:?}", index + 1, removed.to_string());
    Ok(removed)
}
