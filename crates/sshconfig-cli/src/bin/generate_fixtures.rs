//! Generate ssh_config fixtures for benchmarking.
//!
//! Usage: cargo run --release --bin generate-fixtures --features generate -- [output_dir]
//!
//! Every fixture is parsed back before it is written: it must render to the
//! same text and pass the lint checks, so benchmarks never run on input the
//! parser rejects.

use sshconfig_core::document::{Ast, Document};
use sshconfig_core::generate::{GeneratorConfig, generate};
use sshconfig_core::validate::validate_document;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::{fs, io};

/// Fixture presets - keep in sync with benches/fixtures.rs
const PRESETS: &[(&str, fn() -> GeneratorConfig)] = &[
    ("small", GeneratorConfig::small),
    ("medium", GeneratorConfig::medium),
    ("large", GeneratorConfig::large),
    ("xlarge", GeneratorConfig::xlarge),
];

/// What a generated fixture contains once parsed.
struct FixtureStats {
    lines: usize,
    sections: usize,
    directives: usize,
    keywords: usize,
    issues: usize,
}

impl FixtureStats {
    fn collect(document: &Document) -> Self {
        let directives: Vec<_> = document.lines().filter(|line| !line.is_blank()).collect();
        let keywords: HashSet<String> = directives
            .iter()
            .map(|line| line.keyword.text.to_ascii_lowercase())
            .collect();
        Self {
            lines: document.num_lines(),
            sections: document.sections().len(),
            directives: directives.len(),
            keywords: keywords.len(),
            issues: validate_document(document).errors.len(),
        }
    }
}

fn main() -> ExitCode {
    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("benches/fixtures"));

    if let Err(e) = run(&output_dir) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    for (name, config_fn) in PRESETS {
        let content = generate(&config_fn()).map_err(io::Error::other)?;
        let stats = check_fixture(name, &content)?;

        let path = output_dir.join(format!("{name}.ssh_config"));
        fs::write(&path, &content)?;
        println!(
            "Generated {} ({} bytes, {} lines, {} sections, {} directives, {} distinct keywords)",
            path.display(),
            content.len(),
            stats.lines,
            stats.sections,
            stats.directives,
            stats.keywords
        );
    }

    Ok(())
}

/// Parses `content` and refuses fixtures that do not round trip or lint clean.
fn check_fixture(name: &str, content: &str) -> io::Result<FixtureStats> {
    let document = Document::parse(content)
        .map_err(|e| io::Error::other(format!("{name}: generated text does not parse: {e}")))?;

    if document.to_string() != content {
        return Err(io::Error::other(format!(
            "{name}: generated text does not render back unchanged"
        )));
    }

    let stats = FixtureStats::collect(&document);
    if stats.issues > 0 {
        return Err(io::Error::other(format!(
            "{name}: generated text has {} lint issue(s)",
            stats.issues
        )));
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_fixture_passes_checks() {
        let content = generate(&GeneratorConfig::small()).unwrap();
        let stats = check_fixture("small", &content).unwrap();
        assert_eq!(stats.lines, content.lines().count());
        assert!(stats.sections > 1);
        assert!(stats.directives >= stats.sections - 1);
        assert!(stats.keywords > 1);
    }

    #[test]
    fn malformed_fixture_is_rejected() {
        let err = check_fixture("bad", "Host a\n @\n").unwrap_err();
        assert!(err.to_string().contains("does not parse"));
    }

    #[test]
    fn linted_fixture_is_rejected() {
        let err = check_fixture("dup", "Host a\n  Port 1\n  Port 2\n").unwrap_err();
        assert!(err.to_string().contains("1 lint issue"));
    }
}
