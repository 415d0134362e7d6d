//! CLI for the registry generator
//!
//! One option (`--root`, default `./tests`), no subcommands. The search
//! path is `<root>/tests` and the output lands at
//! `<root>/test_functions.rs`.
//!
//! ## Design
//!
//! Argument parsing uses clap with derive macros. Command logic returns
//! `CliResult<ExitCode>` instead of calling `process::exit`; only the
//! top-level `run()` handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use crate::{codegen, discovery};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Distinct code for a failed output write: discovery succeeded but no
    /// generated file can be guaranteed.
    pub const WRITE_FAILURE: ExitCode = ExitCode(2);
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
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate the integration-test registry
#[derive(Parser, Debug)]
#[command(name = "testgen")]
#[command(version = VERSION)]
#[command(about = "Generate test_functions.rs from discovered test declarations", long_about = None)]
pub struct Cli {
    /// Path to the root tests directory
    #[arg(long, value_name = "DIR", default_value = "./tests")]
    pub root: PathBuf,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. `generate()`
/// returns `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match generate(&cli.root) {
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

/// Run the whole pipeline against `root`: walk `<root>/tests`, render the
/// registry, write `<root>/test_functions.rs`.
///
/// Discovery failures exit 1 with a single diagnostic line. A write
/// failure exits with [`ExitCode::WRITE_FAILURE`], surfacing the raw
/// error value; discovery succeeded but the output file is in an unknown
/// state.
pub fn generate(root: &Path) -> CliResult<ExitCode> {
    let search_dir = root.join("tests");
    let output_path = root.join(codegen::OUTPUT_FILE);

    let cases = discovery::discover_tests(&search_dir).map_err(|e| CliError::failure(e.to_string()))?;
    tracing::info!(count = cases.len(), "registering discovered tests");

    let rendered = codegen::render_registry(&cases);

    codegen::write_registry(&output_path, &rendered).map_err(|e| {
        CliError::new(
            format!("failed to write {}: {:?}", output_path.display(), e),
            ExitCode::WRITE_FAILURE,
        )
    })?;

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_defaults_to_local_tests_dir() {
        let cli = Cli::parse_from(["testgen"]);
        assert_eq!(cli.root, PathBuf::from("./tests"));
    }

    #[test]
    fn root_is_configurable() {
        let cli = Cli::parse_from(["testgen", "--root", "/tmp/suite"]);
        assert_eq!(cli.root, PathBuf::from("/tmp/suite"));
    }
}
