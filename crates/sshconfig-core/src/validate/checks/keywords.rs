//! Unknown keyword detection check.
//!
//! Keywords missing from the `ssh_config(5)` registry are reported unless the
//! configuration allows them or an earlier `IgnoreUnknown` line covers them.

use super::{Check, CheckContext};
use crate::document::Ast;
use crate::keywords::is_standard_keyword;
use crate::matching::{MatchConfig, PatternList};
use crate::validate::{ValidationError, ValidationResult};
use log::debug;

/// A check that reports keywords ssh does not know.
#[derive(Debug, Clone, Default)]
pub struct UnknownKeywordsCheck;

impl UnknownKeywordsCheck {
    /// Creates a new unknown keywords check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for UnknownKeywordsCheck {
    fn name(&self) -> &'static str {
        "keywords"
    }

    fn run(&self, ctx: &CheckContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        // IgnoreUnknown takes a comma-separated list and matches case-insensitively
        let list_config = MatchConfig::new().with_comma_separated(true);
        let mut ignored: Vec<PatternList> = Vec::new();

        for line in ctx.document.lines() {
            if line.is_blank() {
                continue;
            }

            if line.has_keyword("IgnoreUnknown") {
                match line.arguments_as_string() {
                    Ok(patterns) => {
                        ignored.push(PatternList::parse(&patterns.to_ascii_lowercase(), &list_config))
                    }
                    Err(e) => debug!(
                        "Skipping undecodable IgnoreUnknown on line {}: {}",
                        line.position + 1,
                        e
                    ),
                }
                continue;
            }

            let keyword = line.keyword.as_str();
            if is_standard_keyword(keyword) || ctx.config.is_allowed_keyword(keyword) {
                continue;
            }

            let lowered = keyword.to_ascii_lowercase();
            if ignored.iter().any(|list| list.is_match(&lowered)) {
                debug!("Keyword '{}' ignored by IgnoreUnknown", keyword);
                continue;
            }

            result.add_error(ValidationError::unknown_keyword(line));
        }

        result
    }
}
