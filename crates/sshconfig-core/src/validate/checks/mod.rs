//! Check traits and runner for ssh_config validation.
//!
//! This module provides a trait-based system for implementing validation checks
//! that can be composed and run together.

mod duplicates;
mod hosts;
mod keywords;

pub use duplicates::DuplicateKeywordsCheck;
pub use hosts::HostsCheck;
pub use keywords::UnknownKeywordsCheck;

use crate::document::Document;
use crate::matching::MatchConfig;
use crate::validate::ValidationResult;
use log::{debug, info};
use std::collections::HashSet;

/// Configuration options for validation checks.
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// Extra keywords accepted by the unknown keyword check (lowercase).
    pub allowed_keywords: HashSet<String>,
    /// How `Host` pattern lists are split.
    pub match_config: MatchConfig,
}

impl CheckConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the extra accepted keywords. Matching ignores case.
    pub fn with_allowed_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_ascii_lowercase())
            .collect();
        self
    }

    /// Sets the pattern list splitting rules.
    pub fn with_match_config(mut self, match_config: MatchConfig) -> Self {
        self.match_config = match_config;
        self
    }

    /// Returns true if `keyword` was explicitly allowed.
    pub fn is_allowed_keyword(&self, keyword: &str) -> bool {
        self.allowed_keywords
            .contains(&keyword.to_ascii_lowercase())
    }
}

/// Context provided to checks.
#[derive(Debug)]
pub struct CheckContext<'a> {
    /// The parsed document.
    pub document: &'a Document,
    /// Configuration options.
    pub config: &'a CheckConfig,
}

impl<'a> CheckContext<'a> {
    /// Creates a new check context.
    pub fn new(document: &'a Document, config: &'a CheckConfig) -> Self {
        Self { document, config }
    }
}

/// A validation check.
pub trait Check: Send + Sync {
    /// Returns the name of this check.
    fn name(&self) -> &'static str;

    /// Runs the check and returns validation results.
    fn run(&self, ctx: &CheckContext) -> ValidationResult;
}

/// Runs multiple validation checks and collects results.
#[derive(Default)]
pub struct CheckRunner {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRunner {
    /// Creates a new check runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a check runner with all built-in checks.
    pub fn with_all_checks() -> Self {
        let mut runner = Self::new();
        runner.add_check(UnknownKeywordsCheck::new());
        runner.add_check(HostsCheck::new());
        runner.add_check(DuplicateKeywordsCheck::new());
        runner
    }

    /// Adds a check.
    pub fn add_check<C: Check + 'static>(&mut self, check: C) {
        self.checks.push(Box::new(check));
    }

    /// Returns the names of the registered checks, in run order.
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|check| check.name()).collect()
    }

    /// Runs every check, returning each check's results under its name.
    pub fn run_by_check(
        &self,
        document: &Document,
        config: &CheckConfig,
    ) -> Vec<(&'static str, ValidationResult)> {
        info!("Running {} checks", self.checks.len());
        let ctx = CheckContext::new(document, config);

        self.checks
            .iter()
            .map(|check| {
                debug!("Running check: {}", check.name());
                let check_result = check.run(&ctx);
                debug!(
                    "Check '{}' found {} issues",
                    check.name(),
                    check_result.errors.len()
                );
                (check.name(), check_result)
            })
            .collect()
    }

    /// Runs all checks and returns combined results ordered by line.
    pub fn run(&self, document: &Document, config: &CheckConfig) -> ValidationResult {
        let mut result = ValidationResult::new();
        for (_, check_result) in self.run_by_check(document, config) {
            result.merge(check_result);
        }

        result.sort_by_line();
        info!("Checks complete: {} total issues", result.errors.len());
        result
    }
}
