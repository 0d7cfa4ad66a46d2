//! Duplicate keyword detection check.
//!
//! ssh uses the first value it finds for most keywords, so a repeat inside one
//! section is silently ignored.

use super::{Check, CheckContext};
use crate::document::Ast;
use crate::keywords::is_cumulative_keyword;
use crate::validate::{ValidationError, ValidationResult};
use std::collections::HashMap;

/// A check that detects keywords set twice in the same section.
#[derive(Debug, Clone, Default)]
pub struct DuplicateKeywordsCheck;

impl DuplicateKeywordsCheck {
    /// Creates a new duplicate keywords check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for DuplicateKeywordsCheck {
    fn name(&self) -> &'static str {
        "duplicates"
    }

    fn run(&self, ctx: &CheckContext) -> ValidationResult {
        let mut result = ValidationResult::new();

        for section in ctx.document.sections() {
            // Lowercased keyword -> first line number (1-based)
            let mut seen: HashMap<String, usize> = HashMap::new();

            for line in &section.lines {
                if line.is_blank() || is_cumulative_keyword(&line.keyword.text) {
                    continue;
                }
                let key = line.keyword.text.to_ascii_lowercase();
                if let Some(&first_line) = seen.get(&key) {
                    result.add_error(ValidationError::duplicate_keyword(line, first_line));
                } else {
                    seen.insert(key, line.position + 1);
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::validate::checks::CheckConfig;

    fn run_check(input: &str) -> ValidationResult {
        let document = Document::parse(input).unwrap();
        let config = CheckConfig::new();
        let ctx = CheckContext::new(&document, &config);
        DuplicateKeywordsCheck::new().run(&ctx)
    }

    #[test]
    fn no_duplicates() {
        let result = run_check("Host a\n  Port 1\n  User x\nHost b\n  Port 2\n");
        assert!(result.is_ok());
    }

    #[test]
    fn duplicate_in_section() {
        let result = run_check("Host a\n  Port 1\n  port 2\n");
        assert_eq!(result.errors.len(), 1);
        match &result.errors[0] {
            ValidationError::DuplicateKeyword {
                line,
                keyword,
                first_line,
                ..
            } => {
                assert_eq!(*line, 3);
                assert_eq!(keyword, "port");
                assert_eq!(*first_line, 2);
            }
            other => panic!("Expected DuplicateKeyword, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_in_implicit_section() {
        let result = run_check("User a\nUser b\nUser c\nHost x\n");
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn cumulative_keywords_may_repeat() {
        let result = run_check("Host a\n  IdentityFile ~/a\n  IdentityFile ~/b\n  LocalForward 1 h:1\n  LocalForward 2 h:2\n");
        assert!(result.is_ok());
    }

    #[test]
    fn empty_file() {
        assert!(run_check("").is_ok());
    }
}
