//! Host line validation check.
//!
//! Reports `Host` lines that can never match and directives whose matching
//! rules are not evaluated here.

use super::{Check, CheckContext};
use crate::document::Ast;
use crate::matching::PatternList;
use crate::validate::{ValidationError, ValidationResult};

/// A check that validates `Host` lines.
///
/// This includes:
/// - `Host` lines without any pattern
/// - pattern lists that can not be decoded
/// - `Match` and `Include` lines, which are never evaluated
#[derive(Debug, Clone, Default)]
pub struct HostsCheck;

impl HostsCheck {
    /// Creates a new hosts check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for HostsCheck {
    fn name(&self) -> &'static str {
        "hosts"
    }

    fn run(&self, ctx: &CheckContext) -> ValidationResult {
        let mut result = ValidationResult::new();

        for line in ctx.document.lines() {
            if line.has_keyword("Match") || line.has_keyword("Include") {
                result.add_error(ValidationError::unsupported_directive(line));
                continue;
            }
            if !line.is_host() {
                continue;
            }

            match line.arguments_as_string() {
                Ok(patterns) => {
                    if PatternList::parse(&patterns, &ctx.config.match_config).is_empty() {
                        result.add_error(ValidationError::host_without_patterns(line));
                    }
                }
                Err(e) => {
                    result.add_error(ValidationError::invalid_pattern_list(line, e.to_string()));
                }
            }
        }

        result
    }
}
