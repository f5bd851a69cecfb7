//! Stock Tracker Library
//!
//! An in-memory mapping from item name to quantity, with add/remove/query
//! operations and whole-file JSON persistence.
//!
//! ```
//! use stock::{InMemoryStorage, Inventory};
//!
//! let mut inventory = Inventory::new(InMemoryStorage::new());
//! inventory.add_item("apple", 10).unwrap();
//! inventory.remove_item("apple", 3).unwrap();
//! assert_eq!(inventory.get_qty("apple"), 7);
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod inventory;
pub mod logging;
pub mod output;
pub mod storage;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::StockConfig;
pub use domain::{AuditEntry, StockMap, DEFAULT_LOW_STOCK_THRESHOLD};
pub use errors::{ActionableError, InventoryError, InventoryResult};
pub use inventory::{Inventory, LoadOutcome};
pub use output::{ExitCode, OutputContext};
pub use storage::{InMemoryStorage, JsonFileStorage, StockStore};
