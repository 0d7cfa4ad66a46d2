//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into the library's configuration types
//! and resolves the file to operate on.

use crate::cli::{Args, Command, FailureLevel};
use sshconfig_core::matching::MatchConfig;
use sshconfig_core::parse::{ParseResult, ParserConfig, parse_document_with_config};
use sshconfig_core::validate::CheckConfig;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The default file location could not be determined.
    #[error("no --file given and HOME is not set")]
    NoHome,

    /// Failed to read the ssh_config file.
    #[error("failed to read '{path}': {source}")]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Failed to write the ssh_config file.
    #[error("failed to write '{path}': {source}")]
    Write {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The command succeeded.
    Success = 0,
    /// Wrong configuration, unreadable file, or a failed command.
    Failure = 1,
    /// Validation failed (checks found issues).
    ValidationFailed = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Validated and processed configuration for running a command.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Path to the ssh_config file.
    pub file_path: PathBuf,
    /// How malformed lines are handled.
    pub parser_config: ParserConfig,
    /// How Host pattern lists are split.
    pub match_config: MatchConfig,
    /// Configuration for the check runner.
    pub check_config: CheckConfig,
    /// Failure level for determining exit code.
    pub failure_level: FailureLevel,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let home = std::env::var_os("HOME");
        Self::from_args_with_home(args, home.as_deref())
    }

    /// Like [`ValidatedConfig::from_args`] with an explicit home directory.
    pub fn from_args_with_home(args: &Args, home: Option<&OsStr>) -> Result<Self, ConfigError> {
        let file_path = resolve_config_path(args.file.as_deref(), home)?;
        let match_config = MatchConfig::new().with_comma_separated(args.comma_patterns);

        let mut check_config = CheckConfig::new().with_match_config(match_config);
        let mut failure_level = FailureLevel::default();
        if let Command::Check {
            failure_level: level,
            allow_keywords,
        } = &args.command
        {
            failure_level = *level;
            if let Some(keywords) = allow_keywords {
                check_config = check_config.with_allowed_keywords(keywords);
            }
        }

        let parser_config = if args.strict {
            ParserConfig::strict()
        } else {
            ParserConfig::lenient()
        };

        Ok(Self {
            file_path,
            parser_config,
            match_config,
            check_config,
            failure_level,
            json_output: args.json,
        })
    }

    /// Reads and parses the configured file.
    pub fn load(&self) -> Result<ParseResult, ConfigError> {
        let content =
            std::fs::read_to_string(&self.file_path).map_err(|source| ConfigError::Read {
                path: self.file_path.clone(),
                source,
            })?;
        debug!("Read {} bytes from {}", content.len(), self.file_path.display());
        Ok(parse_document_with_config(&content, &self.parser_config))
    }

    /// Replaces the configured file with `content`.
    pub fn store(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.file_path, content).map_err(|source| ConfigError::Write {
            path: self.file_path.clone(),
            source,
        })
    }

    /// Determines the exit code based on validation results.
    pub fn exit_code_for_results(&self, has_errors: bool, has_warnings: bool) -> ExitCode {
        if has_errors {
            return ExitCode::ValidationFailed;
        }

        match self.failure_level {
            FailureLevel::Warning if has_warnings => ExitCode::ValidationFailed,
            _ => ExitCode::Success,
        }
    }
}

/// Resolves the file to operate on.
///
/// An explicit path wins; otherwise `~/.ssh/config` under `home`.
pub fn resolve_config_path(file: Option<&Path>, home: Option<&OsStr>) -> Result<PathBuf, ConfigError> {
    if let Some(file) = file {
        return Ok(file.to_path_buf());
    }
    match home {
        Some(home) if !home.is_empty() => Ok(Path::new(home).join(".ssh").join("config")),
        _ => Err(ConfigError::NoHome),
    }
}
