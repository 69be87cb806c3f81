//! Command-line checks and the error report file.
//!
//! The tool takes exactly two positional arguments: the description file and
//! the output root. Each problem found is one [`CommandError`]; all of them are
//! written to the report file before generation is skipped.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

pub const EXPECTED_ARGUMENTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Input file doesn't exist")]
    MissingInput,
    #[error("Not enough arguments to launch")]
    TooFewArguments,
    #[error("Too many arguments")]
    TooManyArguments,
}

/// Check the positional arguments. Errors come back in a fixed order.
pub fn check_arguments(args: &[String]) -> Vec<CommandError> {
    let mut errors = Vec::new();

    if args.len() == EXPECTED_ARGUMENTS {
        if !Path::new(&args[0]).is_file() {
            errors.push(CommandError::MissingInput);
        }
    } else if args.len() < EXPECTED_ARGUMENTS {
        errors.push(CommandError::TooFewArguments);
    } else {
        errors.push(CommandError::TooManyArguments);
    }

    errors
}

/// Write one line per error to `report`, truncating it first.
///
/// Returns whether anything was reported. The file is left alone when there
/// is nothing to report.
pub fn report_errors(errors: &[CommandError], report: &Path) -> Result<bool> {
    if errors.is_empty() {
        return Ok(false);
    }

    let mut file = File::create(report)
        .with_context(|| format!("failed to create error report: {}", report.display()))?;
    for error in errors {
        warn!(%error, "command line rejected");
        writeln!(file, "{}", error)
            .with_context(|| format!("failed to write error report: {}", report.display()))?;
    }

    Ok(true)
}
