//! CLI module for dag
//!
//! ## Usage
//!
//! ```text
//! dag <ARRAY_NAME> <VALUE_TYPE> [-i PATH]... [-o PATH | --stdout] [--min-capacity N]
//! ```
//!
//! - Without `-o`, the header is written to `<ARRAY_NAME>.h`.
//! - `--stdout` writes the header to standard output instead of a file.
//! - `-i <x.h>` emits `#include <x.h>`; any other path emits `#include "path"`.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. Malformed invocations are reported by clap with the
//! usage text. Command functions return `CliResult<T>` instead of calling `process::exit`; only the top-level
//! `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use dag_core::scaffold::DEFAULT_MINIMUM_CAPACITY;

use crate::generator::GeneratorConfig;
use crate::version::DAG_VERSION;
use commands::Destination;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Render a diagnostic (code, message, help) into a failure error.
    pub fn from_diagnostic<D>(diagnostic: D) -> Self
    where
        D: miette::Diagnostic + Send + Sync + 'static,
    {
        Self::failure(format!("{:?}", miette::Report::new(diagnostic)))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate a type-specialized dynamic array header for C
#[derive(Parser, Debug)]
#[command(name = "dag")]
#[command(version = DAG_VERSION)]
#[command(about = "Generate a type-specialized dynamic array header for C", long_about = None)]
pub struct Cli {
    /// Array base name; functions are prefixed with it and the struct is named after it
    #[arg(value_name = "ARRAY_NAME")]
    pub array_name: String,

    /// Element type stored in the array
    #[arg(value_name = "VALUE_TYPE")]
    pub value_type: String,

    /// Include PATH in the header (use `<...>` for system headers)
    #[arg(short = 'i', long = "include", value_name = "PATH")]
    pub includes: Vec<String>,

    /// Save the header to PATH (default: <ARRAY_NAME>.h)
    #[arg(short = 'o', long = "output", value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write the header to standard output
    #[arg(long)]
    pub stdout: bool,

    /// Default growth chunk emitted for DA_MINIMUM_CAPACITY
    #[arg(long = "min-capacity", value_name = "N", default_value_t = DEFAULT_MINIMUM_CAPACITY)]
    pub min_capacity: usize,
}

impl Cli {
    /// Build the generator configuration from the parsed flags.
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_min_capacity(self.min_capacity)
            .with_include_paths(&self.includes)
    }

    /// Where the header goes.
    pub fn destination(&self) -> Destination {
        Destination::resolve(self.output.clone(), self.stdout, &self.array_name)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let destination = cli.destination();
    commands::generate_header(&cli.array_name, &cli.value_type, cli.config(), &destination)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::generator::{GenerateError, Include};

    #[test]
    fn test_cli_parse_positionals() {
        let cli = Cli::try_parse_from(["dag", "ints", "int"]).unwrap();
        assert_eq!(cli.array_name, "ints");
        assert_eq!(cli.value_type, "int");
        assert!(cli.includes.is_empty());
        assert_eq!(cli.min_capacity, 128);
        assert_eq!(cli.destination(), Destination::File(PathBuf::from("ints.h")));
    }

    #[test]
    fn test_cli_parse_flags_after_names() {
        let cli = Cli::try_parse_from([
            "dag",
            "points",
            "struct point",
            "-i",
            "<stdint.h>",
            "-i",
            "point.h",
            "-o",
            "out/p.h",
        ])
        .unwrap();
        assert_eq!(cli.value_type, "struct point");
        assert_eq!(
            cli.config().includes,
            vec![
                Include::System("<stdint.h>".to_string()),
                Include::Local("point.h".to_string())
            ]
        );
        assert_eq!(cli.destination(), Destination::File(PathBuf::from("out/p.h")));
    }

    #[test]
    fn test_cli_parse_stdout() {
        let cli = Cli::try_parse_from(["dag", "ints", "int", "--stdout"]).unwrap();
        assert_eq!(cli.destination(), Destination::Stdout);
    }

    #[test]
    fn test_cli_parse_min_capacity() {
        let cli = Cli::try_parse_from(["dag", "ints", "int", "--min-capacity", "16"]).unwrap();
        assert_eq!(cli.config().min_capacity, 16);
    }

    #[test]
    fn test_cli_rejects_output_with_stdout() {
        assert!(Cli::try_parse_from(["dag", "ints", "int", "-o", "x.h", "--stdout"]).is_err());
    }

    #[test]
    fn test_cli_rejects_missing_value_type() {
        assert!(Cli::try_parse_from(["dag", "ints"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["dag", "ints", "int", "-x"]).is_err());
    }

    #[test]
    fn test_cli_rejects_dangling_include() {
        assert!(Cli::try_parse_from(["dag", "ints", "int", "-i"]).is_err());
    }

    #[test]
    fn test_cli_error_from_diagnostic() {
        let err = CliError::from_diagnostic(GenerateError::ZeroCapacity);
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("minimum capacity must be greater than zero"));
    }
}
