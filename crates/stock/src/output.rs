//! Console output for the demonstration binary.
//!
//! Essential output goes to stdout, warnings and errors to stderr. Write
//! failures are returned; the binary treats a broken pipe as a quiet exit.

use crate::errors::InventoryError;
use std::fmt::Display;
use std::io::{self, Write};

// ============================================================================
// Output Context for Quiet Mode
// ============================================================================

/// Context for controlling output verbosity
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputContext {
    quiet: bool,
}

impl OutputContext {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print essential output (always shown)
    pub fn print_data(&self, msg: impl Display) -> io::Result<()> {
        write_line(io::stdout().lock(), msg)
    }

    /// Print informational message (suppressed by quiet)
    pub fn print_info(&self, msg: impl Display) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        write_line(io::stdout().lock(), msg)
    }

    /// Print warning (suppressed by quiet)
    pub fn print_warning(&self, msg: impl Display) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        write_line(io::stderr().lock(), format_args!("Warning: {}", msg))
    }

    /// Print error (always shown to stderr)
    pub fn print_error(&self, msg: impl Display) -> io::Result<()> {
        write_line(io::stderr().lock(), format_args!("Error: {}", msg))
    }
}

fn write_line<W: Write>(mut out: W, msg: impl Display) -> io::Result<()> {
    writeln!(out, "{}", msg)
}

/// True if any error in the chain is a closed pipe, e.g. `stock | head -1`.
pub fn is_broken_pipe(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
    })
}

/// Format a list of item names the way the low-stock line shows them.
pub fn format_item_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{}'", item)).collect();
    format!("[{}]", quoted.join(", "))
}

// ============================================================================
// Exit Codes
// ============================================================================

/// Process exit codes for the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Run succeeded (0)
    Success = 0,

    /// Generic error (1)
    GenericError = 1,

    /// Stock file could not be read or written (10)
    ExternalError = 10,
}

impl ExitCode {
    /// Convert exit code to i32 for `std::process::exit`
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn description(self) -> &'static str {
        match self {
            ExitCode::Success => "Run succeeded",
            ExitCode::GenericError => "Generic error occurred",
            ExitCode::ExternalError => "Stock file unavailable",
        }
    }
}

impl From<&InventoryError> for ExitCode {
    fn from(err: &InventoryError) -> Self {
        match err {
            InventoryError::Persistence { .. } => ExitCode::ExternalError,
            _ => ExitCode::GenericError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_format_item_list() {
        assert_eq!(format_item_list(&[]), "[]");
        assert_eq!(
            format_item_list(&["banana".to_string(), "fig".to_string()]),
            "['banana', 'fig']"
        );
    }

    #[test]
    fn test_write_line() {
        let mut out = Vec::new();
        write_line(&mut out, format_args!("Warning: {}", "low")).unwrap();
        assert_eq!(out, b"Warning: low\n");
    }

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::GenericError.code(), 1);
        assert_eq!(ExitCode::ExternalError.code(), 10);
    }

    #[test]
    fn test_exit_code_from_inventory_error() {
        let persistence = InventoryError::persistence(
            "inventory.json",
            io::Error::new(io::ErrorKind::Other, "disk"),
        );
        assert_eq!(ExitCode::from(&persistence), ExitCode::ExternalError);

        let not_found = InventoryError::ItemNotFound("orange".to_string());
        assert_eq!(ExitCode::from(&not_found), ExitCode::GenericError);
    }

    #[test]
    fn test_is_broken_pipe_looks_through_context() {
        let err = Err::<(), _>(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            .context("Failed to print report")
            .unwrap_err();
        assert!(is_broken_pipe(&err));

        let other = anyhow::Error::new(io::Error::new(io::ErrorKind::Other, "disk"));
        assert!(!is_broken_pipe(&other));
    }
}
