//! ssh_config CLI
//!
//! A command-line tool for inspecting, validating and editing OpenSSH client
//! configuration files.

use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::commands::{self, CommandError};
use cli::config::{ExitCode, ValidatedConfig};
use cli::output::HumanOutput;
use cli::{Args, Command};
use sshconfig_core::document::Document;
use sshconfig_core::parse::ParseResult;

fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose, args.json);

    let exit_code = run(args);
    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
///
/// Records from the library's `log` calls are forwarded to the same
/// subscriber.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the selected command with the given arguments.
fn run(args: Args) -> ExitCode {
    let mut stderr = io::stderr().lock();

    // Validate configuration
    let config = match ValidatedConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            let use_colors = !args.json && io::stderr().is_terminal();
            write_error(&mut stderr, &e.to_string(), use_colors);
            return ExitCode::Failure;
        }
    };

    let use_colors = !config.json_output && io::stdout().is_terminal();

    debug!("Validated configuration: {:?}", config);
    info!("ssh_config file: {}", config.file_path.display());

    match execute(&args.command, &config, use_colors) {
        Ok(code) => code,
        Err(e) => {
            write_error(&mut stderr, &e.to_string(), use_colors);
            ExitCode::Failure
        }
    }
}

fn execute(command: &Command, config: &ValidatedConfig, use_colors: bool) -> Result<ExitCode, CommandError> {
    let parsed = config.load()?;
    let mut stdout = io::stdout().lock();

    match command {
        Command::Check { .. } => commands::check(config, parsed, &mut stdout, use_colors),
        Command::Sections => {
            let document = tolerate_errors(parsed);
            commands::sections(config, &document, &mut stdout, use_colors)
        }
        Command::Get {
            hostname,
            keyword,
            include_global,
        } => {
            let document = tolerate_errors(parsed);
            commands::get(
                config,
                &document,
                hostname,
                keyword.as_deref(),
                *include_global,
                &mut stdout,
            )
        }
        Command::SetLine { index, text, .. } => {
            let mut document = commands::require_clean(parsed)?;
            commands::set_line(&mut document, *index, text)?;
            emit(config, &document, command.is_in_place(), &mut stdout)
        }
        Command::DeleteLine { index, .. } => {
            let mut document = commands::require_clean(parsed)?;
            commands::delete_line(&mut document, *index)?;
            emit(config, &document, command.is_in_place(), &mut stdout)
        }
        Command::Render => {
            let document = commands::require_clean(parsed)?;
            emit(config, &document, false, &mut stdout)
        }
    }
}

/// Logs every malformed line and returns the lenient document.
fn tolerate_errors(parsed: ParseResult) -> Document {
    for error in &parsed.errors {
        warn!("Skipping malformed line: {}", error);
    }
    parsed.document
}

/// Writes the document back to its file, or to stdout.
fn emit<W: Write>(
    config: &ValidatedConfig,
    document: &Document,
    in_place: bool,
    out: &mut W,
) -> Result<ExitCode, CommandError> {
    let rendered = document.to_string();
    if in_place {
        config.store(&rendered)?;
        info!("Wrote {} bytes to {}", rendered.len(), config.file_path.display());
    } else {
        out.write_all(rendered.as_bytes())?;
    }
    Ok(ExitCode::Success)
}

/// Write an error message to the writer.
fn write_error<W: Write>(writer: &mut W, message: &str, use_colors: bool) {
    let _ = HumanOutput::new(writer, use_colors).write_error(message);
}
