//! CLI module for the ssh_config tool.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod commands;
pub mod config;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// ssh_config inspector and editor.
///
/// Reads an OpenSSH client configuration, resolves Host sections and edits
/// single lines while leaving every other byte untouched.
#[derive(Parser, Debug)]
#[command(name = "sshconfig")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the ssh_config file [default: ~/.ssh/config].
    #[arg(long, short = 'f', env = "SSHCONFIG_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Also split Host pattern lists on commas.
    #[arg(long, env = "SSHCONFIG_COMMA_PATTERNS", global = true)]
    pub comma_patterns: bool,

    /// Stop at the first malformed line instead of skipping it.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output results as JSON instead of human-readable format.
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Parse and lint the file.
    Check {
        /// Failure level for validation issues.
        /// 'warning' treats both errors and warnings as failures.
        /// 'error' only treats errors as failures.
        #[arg(long, env = "SSHCONFIG_FAILURE_LEVEL", default_value = "warning")]
        failure_level: FailureLevel,

        /// Comma-separated list of extra keywords to accept.
        #[arg(long, env = "SSHCONFIG_ALLOW_KEYWORDS", value_delimiter = ',')]
        allow_keywords: Option<Vec<String>>,
    },

    /// List the Host sections of the file.
    Sections,

    /// Print the section matching a hostname, or one of its values.
    Get {
        /// Hostname to resolve.
        hostname: String,

        /// Keyword whose decoded value to print.
        keyword: Option<String>,

        /// Also consult the lines before the first Host line.
        #[arg(long)]
        include_global: bool,
    },

    /// Replace the line at an index, appending blank lines if needed.
    SetLine {
        /// Line index (0-based).
        index: usize,

        /// New line text, without terminator.
        text: String,

        /// Rewrite the file instead of printing the result.
        #[arg(long, short = 'i')]
        in_place: bool,
    },

    /// Delete the line at an index.
    DeleteLine {
        /// Line index (0-based).
        index: usize,

        /// Rewrite the file instead of printing the result.
        #[arg(long, short = 'i')]
        in_place: bool,
    },

    /// Print the parsed file back unchanged.
    Render,
}

/// Failure level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FailureLevel {
    /// Treat both warnings and errors as failures (exit code 3).
    #[default]
    Warning,
    /// Only treat errors as failures.
    Error,
}

impl Command {
    /// Returns true if the command rewrites the file.
    pub fn is_in_place(&self) -> bool {
        matches!(
            self,
            Command::SetLine { in_place: true, .. } | Command::DeleteLine { in_place: true, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_defaults() {
        let args = Args::parse_from(["sshconfig", "check"]);
        assert_eq!(
            args.command,
            Command::Check {
                failure_level: FailureLevel::Warning,
                allow_keywords: None,
            }
        );
        assert!(!args.strict);
        assert!(!args.comma_patterns);
    }

    #[test]
    fn test_error_failure_level() {
        let args = Args::parse_from(["sshconfig", "check", "--failure-level", "error"]);
        assert!(matches!(
            args.command,
            Command::Check {
                failure_level: FailureLevel::Error,
                ..
            }
        ));
    }

    #[test]
    fn test_allow_keywords() {
        let args = Args::parse_from(["sshconfig", "check", "--allow-keywords", "UseKeychain,Foo"]);
        match args.command {
            Command::Check { allow_keywords, .. } => {
                assert_eq!(
                    allow_keywords,
                    Some(vec!["UseKeychain".to_string(), "Foo".to_string()])
                );
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from(["sshconfig", "sections", "--json", "-f", "/tmp/cfg", "-vv"]);
        assert!(args.json);
        assert_eq!(args.file, Some(PathBuf::from("/tmp/cfg")));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_get_arguments() {
        let args = Args::parse_from(["sshconfig", "get", "web.example.com", "User", "--include-global"]);
        assert_eq!(
            args.command,
            Command::Get {
                hostname: "web.example.com".to_string(),
                keyword: Some("User".to_string()),
                include_global: true,
            }
        );
    }

    #[test]
    fn test_set_line_arguments() {
        let args = Args::parse_from(["sshconfig", "set-line", "3", "  Port 22", "-i"]);
        assert!(args.command.is_in_place());
        assert_eq!(
            args.command,
            Command::SetLine {
                index: 3,
                text: "  Port 22".to_string(),
                in_place: true,
            }
        );
    }

    #[test]
    fn test_delete_line_not_in_place() {
        let args = Args::parse_from(["sshconfig", "delete-line", "0"]);
        assert!(!args.command.is_in_place());
    }

    #[test]
    fn test_verbose_flag() {
        let args = Args::parse_from(["sshconfig", "render"]);
        assert_eq!(args.verbose, 0);

        let args = Args::parse_from(["sshconfig", "-v", "render"]);
        assert_eq!(args.verbose, 1);
    }
}
