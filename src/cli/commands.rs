//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::generator::{ArrayGenerator, GeneratorConfig};

use super::{CliError, CliResult, ExitCode};

/// Output sink for a generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    File(PathBuf),
    Stdout,
}

impl Destination {
    /// Pick the sink: standard output if requested, else the explicit path, else `<ident>.h`.
    pub fn resolve(output: Option<PathBuf>, stdout: bool, ident: &str) -> Self {
        if stdout {
            return Destination::Stdout;
        }
        Destination::File(output.unwrap_or_else(|| PathBuf::from(format!("{}.h", ident))))
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::File(path) => write!(f, "{}", path.display()),
            Destination::Stdout => write!(f, "<stdout>"),
        }
    }
}

/// Generate the header for `ident`/`value` and write it to `destination`.
///
/// The header is rendered completely before the destination is opened.
pub fn generate_header(
    ident: &str,
    value: &str,
    config: GeneratorConfig,
    destination: &Destination,
) -> CliResult<ExitCode> {
    let generator = ArrayGenerator::with_config(ident, value, config).map_err(CliError::from_diagnostic)?;
    let header = generator.generate();

    tracing::debug!(destination = %destination, bytes = header.len(), "writing header");
    match destination {
        Destination::File(path) => {
            write_file(path, &header)?;
            println!("Generated {}", destination);
        }
        Destination::Stdout => {
            write_stream(&mut io::stdout().lock(), &header)
                .map_err(|e| CliError::failure(format!("Error: could not write to standard output: {}", e)))?;
            eprintln!("Generated {}", destination);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Write `contents` to `path`, removing the file again if the write fails part way.
///
/// ## Errors
///
/// Returns an error if the file cannot be created or fully written.
pub fn write_file(path: &Path, contents: &str) -> CliResult<()> {
    let mut file = File::create(path).map_err(|e| write_error(path, &e))?;

    if let Err(e) = write_stream(&mut file, contents) {
        drop(file);
        if let Err(cleanup) = fs::remove_file(path) {
            tracing::warn!("could not remove partial output '{}': {}", path.display(), cleanup);
        }
        return Err(write_error(path, &e));
    }

    Ok(())
}

fn write_stream<W: Write>(out: &mut W, contents: &str) -> io::Result<()> {
    out.write_all(contents.as_bytes())?;
    out.flush()
}

fn write_error(path: &Path, err: &io::Error) -> CliError {
    CliError::failure(format!("Error: could not write to file '{}': {}", path.display(), err))
}
