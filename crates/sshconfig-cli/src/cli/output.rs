//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output formatters for
//! validation results and section listings.

use colored::Colorize;
use serde::Serialize;
use sshconfig_core::document::Section;
use sshconfig_core::parse::ParseError;
use sshconfig_core::validate::{Severity, ValidationError, ValidationResult};
use std::collections::HashMap;
use std::io::Write;

/// JSON report of a `check` run, one array per check.
#[derive(Debug, Default, Serialize)]
pub struct JsonOutput {
    /// Lines that failed to parse.
    pub parse: Vec<JsonIssue>,
    /// Unknown keyword check results.
    pub keywords: Vec<JsonIssue>,
    /// Host line check results.
    pub hosts: Vec<JsonIssue>,
    /// Duplicate keyword check results.
    pub duplicates: Vec<JsonIssue>,
}

impl JsonOutput {
    /// Creates a new empty JSON output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds issues from a validation result to the appropriate check category.
    pub fn add_check_results(&mut self, check_name: &str, result: &ValidationResult) {
        let issues: Vec<JsonIssue> = result.errors.iter().map(JsonIssue::from).collect();

        match check_name {
            "keywords" => self.keywords.extend(issues),
            "hosts" => self.hosts.extend(issues),
            "duplicates" => self.duplicates.extend(issues),
            _ => {} // Unknown check name, ignore
        }
    }

    /// Adds parse errors.
    pub fn add_parse_errors(&mut self, errors: &[ParseError]) {
        self.parse.extend(errors.iter().map(JsonIssue::from));
    }

    /// Writes the JSON output to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write_json(writer, self)
    }
}

/// Writes any serializable value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    writeln!(writer, "{}", json)
}

/// A single issue in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonIssue {
    /// Line number where the issue occurred (1-based).
    pub line: usize,
    /// Column number where the issue occurred (1-based, in characters).
    pub column: usize,
    /// Human-readable message.
    pub message: String,
    /// Severity of the issue.
    pub severity: Severity,
}

impl From<&ValidationError> for JsonIssue {
    fn from(error: &ValidationError) -> Self {
        Self {
            line: error.line(),
            column: error.span().position + 1,
            message: error.to_string(),
            severity: error.severity(),
        }
    }
}

impl From<&ParseError> for JsonIssue {
    fn from(error: &ParseError) -> Self {
        Self {
            line: error.line() + 1,
            column: error.position() + 1,
            message: error.to_string(),
            severity: Severity::Error,
        }
    }
}

/// One row of the `sections` listing.
#[derive(Debug, Serialize)]
pub struct SectionSummary {
    /// Index of the section in document order.
    pub index: usize,
    /// True for the lines before the first Host line.
    pub implicit: bool,
    /// First line of the section (1-based).
    pub start_line: Option<usize>,
    /// Decoded Host patterns, if decodable.
    pub patterns: Option<String>,
    /// Number of lines after the Host line.
    pub lines: usize,
}

impl SectionSummary {
    /// Summarizes the section at `index`.
    pub fn new(index: usize, section: &Section) -> Self {
        Self {
            index,
            implicit: section.is_implicit(),
            start_line: section.start().map(|line| line + 1),
            patterns: if section.is_implicit() {
                None
            } else {
                section.patterns().ok()
            },
            lines: section.lines.len(),
        }
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes a header for a check.
    pub fn write_check_header(&mut self, check_name: &str) -> std::io::Result<()> {
        let header = format!("==> {}", check_name);
        if self.use_colors {
            writeln!(self.writer, "\n{}", header.cyan().bold())?;
        } else {
            writeln!(self.writer, "\n{}", header)?;
        }
        Ok(())
    }

    /// Writes validation results for a check.
    pub fn write_check_results(
        &mut self,
        check_name: &str,
        result: &ValidationResult,
    ) -> std::io::Result<()> {
        if result.errors.is_empty() {
            return Ok(());
        }

        self.write_check_header(check_name)?;

        for error in &result.errors {
            self.write_issue(error.severity(), &error.to_string())?;
        }

        Ok(())
    }

    /// Writes parse errors under their own header.
    pub fn write_parse_errors(&mut self, errors: &[ParseError]) -> std::io::Result<()> {
        if errors.is_empty() {
            return Ok(());
        }

        self.write_check_header("parse")?;

        for error in errors {
            self.write_issue(Severity::Error, &error.to_string())?;
        }

        Ok(())
    }

    /// Writes a single issue.
    pub fn write_issue(&mut self, severity: Severity, message: &str) -> std::io::Result<()> {
        let label = match severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };

        if self.use_colors {
            let colored_label = match severity {
                Severity::Error => format!("[{}]", label).red().bold(),
                Severity::Warning => format!("[{}]", label).yellow().bold(),
            };
            writeln!(self.writer, "  {} {}", colored_label, message)?;
        } else {
            writeln!(self.writer, "  [{}] {}", label, message)?;
        }

        Ok(())
    }

    /// Writes a summary of all validation results.
    pub fn write_summary(
        &mut self,
        total_errors: usize,
        total_warnings: usize,
    ) -> std::io::Result<()> {
        writeln!(self.writer)?;

        if total_errors == 0 && total_warnings == 0 {
            let message = "✓ ssh_config file is valid";
            if self.use_colors {
                writeln!(self.writer, "{}", message.green().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        } else {
            let message = format!(
                "✗ Found {} error(s) and {} warning(s)",
                total_errors, total_warnings
            );
            if self.use_colors {
                writeln!(self.writer, "{}", message.red().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        }

        Ok(())
    }

    /// Writes one row of the sections listing.
    pub fn write_section(&mut self, summary: &SectionSummary) -> std::io::Result<()> {
        let location = match summary.start_line {
            Some(line) => format!("line {}", line),
            None => "empty".to_string(),
        };
        let title = match (&summary.patterns, summary.implicit) {
            (_, true) => "(global)".to_string(),
            (Some(patterns), false) => format!("Host {}", patterns),
            (None, false) => "Host <undecodable>".to_string(),
        };
        let title = if self.use_colors {
            title.cyan().bold().to_string()
        } else {
            title
        };
        writeln!(
            self.writer,
            "#{:<3} {:<10} {} ({} lines)",
            summary.index, location, title, summary.lines
        )
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}

/// Collects all validation results organized by check name.
#[derive(Debug, Default)]
pub struct ValidationResults {
    parse_errors: Vec<ParseError>,
    results: HashMap<String, ValidationResult>,
    order: Vec<String>,
}

impl ValidationResults {
    /// Creates a new empty results collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records lines that failed to parse.
    pub fn add_parse_errors(&mut self, errors: impl IntoIterator<Item = ParseError>) {
        self.parse_errors.extend(errors);
    }

    /// Adds results for a check.
    pub fn add(&mut self, check_name: impl Into<String>, result: ValidationResult) {
        let name = check_name.into();
        if !self.results.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.results.entry(name).or_default().merge(result);
    }

    /// Returns the total number of errors, parse errors included.
    pub fn total_errors(&self) -> usize {
        self.parse_errors.len()
            + self
                .results
                .values()
                .map(|r| r.errors_only().count())
                .sum::<usize>()
    }

    /// Returns the total number of warnings.
    pub fn total_warnings(&self) -> usize {
        self.results
            .values()
            .map(|r| r.warnings_only().count())
            .sum()
    }

    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.total_errors() > 0
    }

    /// Returns true if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        self.total_warnings() > 0
    }

    /// Iterates over results in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationResult)> {
        self.order
            .iter()
            .filter_map(|name| self.results.get(name).map(|r| (name.as_str(), r)))
    }

    /// Writes results in human-readable format.
    pub fn write_human<W: Write>(&self, writer: &mut W, use_colors: bool) -> std::io::Result<()> {
        let mut output = HumanOutput::new(writer, use_colors);

        output.write_parse_errors(&self.parse_errors)?;
        for (name, result) in self.iter() {
            output.write_check_results(name, result)?;
        }

        output.write_summary(self.total_errors(), self.total_warnings())?;

        Ok(())
    }

    /// Writes results in JSON format.
    pub fn write_json<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut json_output = JsonOutput::new();

        json_output.add_parse_errors(&self.parse_errors);
        for (name, result) in self.iter() {
            json_output.add_check_results(name, result);
        }

        json_output.write(writer)
    }
}
