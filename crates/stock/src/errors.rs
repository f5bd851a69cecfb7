//! Error types for inventory operations and their user-facing rendering.
//!
//! `InventoryError` is what the library returns. `ActionableError` is how the
//! binary explains a failure: what happened, why it may have happened, and
//! what to try next.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used across the library.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors returned by inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A removal targeted an item that is not stocked.
    #[error("Item '{0}' not found in inventory.")]
    ItemNotFound(String),

    /// A dynamically typed add received values of the wrong kind.
    #[error("Invalid types given for item: item={item}, qty={qty}")]
    TypeMismatch { item: String, qty: String },

    /// The new quantity does not fit in an `i64`.
    #[error("Quantity of '{item}' would overflow: {current} {op} {qty}")]
    QuantityOverflow {
        item: String,
        current: i64,
        op: char,
        qty: i64,
    },

    /// Reading, parsing, serializing or writing the persistence file failed.
    #[error("Failed to access stock file {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: PersistenceError,
    },
}

impl InventoryError {
    pub fn persistence(path: impl AsRef<Path>, source: impl Into<PersistenceError>) -> Self {
        Self::Persistence {
            path: path.as_ref().to_path_buf(),
            source: source.into(),
        }
    }

    /// True for failures the caller reports and moves past.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Persistence { .. })
    }
}

/// Underlying cause of a persistence failure.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid stock data: {0}")]
    Format(#[from] serde_json::Error),
}

/// A failure summary plus hints for whoever reads the console.
///
/// ```
/// use stock::errors::ActionableError;
///
/// let error = ActionableError::new("Stock file inventory.json is not valid JSON")
///     .with_cause("The file was edited by hand")
///     .with_remedy("Validate the file: jq . inventory.json");
///
/// assert!(error.to_error_message().contains("To fix:"));
/// ```
#[derive(Debug, Clone)]
pub struct ActionableError {
    summary: String,
    causes: Vec<String>,
    remedies: Vec<String>,
}

impl ActionableError {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            causes: Vec::new(),
            remedies: Vec::new(),
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    pub fn with_remedy(mut self, remedy: impl Into<String>) -> Self {
        self.remedies.push(remedy.into());
        self
    }

    /// Multi-line rendering; empty sections are left out.
    pub fn to_error_message(&self) -> String {
        self.to_string()
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, lines: &[String]) -> fmt::Result {
    if lines.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n{title}:")?;
    lines.iter().try_for_each(|line| writeln!(f, "  • {line}"))
}

impl fmt::Display for ActionableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error: {}", self.summary)?;
        write_section(f, "Possible causes", &self.causes)?;
        write_section(f, "To fix", &self.remedies)
    }
}

impl std::error::Error for ActionableError {}

impl From<&InventoryError> for ActionableError {
    fn from(err: &InventoryError) -> Self {
        match err {
            InventoryError::ItemNotFound(item) => item_not_found(item),
            InventoryError::TypeMismatch { .. } => invalid_types(),
            InventoryError::QuantityOverflow { item, .. } => quantity_overflow(item),
            InventoryError::Persistence { path, source } => stock_file_failed(path, source),
        }
    }
}

pub fn item_not_found(item: &str) -> ActionableError {
    ActionableError::new(format!("Item '{}' not found in inventory.", item))
        .with_cause("The item was never added")
        .with_cause("An earlier removal depleted the item and deleted it")
}

pub fn invalid_types() -> ActionableError {
    ActionableError::new("Invalid types given for item.")
        .with_cause("The item name must be a string")
        .with_cause("The quantity must be an integer")
}

pub fn quantity_overflow(item: &str) -> ActionableError {
    ActionableError::new(format!("Quantity of '{}' is out of range.", item))
        .with_cause("Quantities are 64-bit signed integers")
        .with_remedy("Split the adjustment or correct the stored quantity")
}

/// Load or save of the stock file failed.
pub fn stock_file_failed(path: &Path, source: &PersistenceError) -> ActionableError {
    let error = ActionableError::new(format!(
        "Failed to access stock file {}: {}",
        path.display(),
        source
    ));

    match source {
        PersistenceError::Io(io_err) if io_err.kind() == io::ErrorKind::PermissionDenied => error
            .with_cause("The file or its directory is not readable or writable")
            .with_remedy(format!("Check permissions: ls -l {}", path.display())),
        PersistenceError::Io(_) => error
            .with_cause("The file system rejected the operation")
            .with_remedy("Check free disk space and the working directory"),
        PersistenceError::Format(_) => error
            .with_cause("The file is not a JSON object of item names to integer quantities")
            .with_cause("The file was truncated by an interrupted save")
            .with_remedy(format!("Validate the file: jq . {}", path.display()))
            .with_remedy("Move the file aside to start with an empty inventory"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actionable_error_sections() {
        let msg = ActionableError::new("Test error")
            .with_cause("First cause")
            .with_remedy("First remedy")
            .to_error_message();

        assert_eq!(
            msg,
            "Error: Test error\n\nPossible causes:\n  • First cause\n\nTo fix:\n  • First remedy\n"
        );
    }

    #[test]
    fn test_summary_only() {
        assert_eq!(ActionableError::new("Bare").to_error_message(), "Error: Bare\n");
    }

    #[test]
    fn test_error_without_remediation() {
        let msg = item_not_found("orange").to_error_message();

        assert!(msg.contains("Item 'orange' not found in inventory."));
        assert!(msg.contains("Possible causes:"));
        assert!(!msg.contains("To fix:"));
    }

    #[test]
    fn test_item_not_found_display() {
        let err = InventoryError::ItemNotFound("orange".to_string());
        assert_eq!(err.to_string(), "Item 'orange' not found in inventory.");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_quantity_overflow_is_recoverable() {
        let err = InventoryError::QuantityOverflow {
            item: "apple".to_string(),
            current: i64::MAX,
            op: '+',
            qty: 1,
        };

        assert!(err.is_recoverable());
        assert_eq!(
            err.to_string(),
            format!("Quantity of 'apple' would overflow: {} + 1", i64::MAX)
        );
        assert!(ActionableError::from(&err)
            .to_error_message()
            .contains("out of range"));
    }

    #[test]
    fn test_persistence_error_is_not_recoverable() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = InventoryError::persistence("inventory.json", io_err);

        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("inventory.json"));

        let msg = ActionableError::from(&err).to_error_message();
        assert!(msg.contains("ls -l inventory.json"));
    }

    #[test]
    fn test_format_error_suggests_validation() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = InventoryError::persistence("stock.json", json_err);

        let msg = ActionableError::from(&err).to_error_message();
        assert!(msg.contains("jq . stock.json"));
    }
}
