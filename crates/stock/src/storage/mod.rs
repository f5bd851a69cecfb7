//! Storage abstraction for persisting the stock mapping.
//!
//! The `StockStore` trait lets the inventory load and save its mapping without
//! knowing where it lives: a JSON file on disk, or memory in tests.

use crate::domain::StockMap;
use crate::errors::InventoryResult;
use std::path::Path;

pub mod json;
pub mod memory;

pub use json::JsonFileStorage;
pub use memory::InMemoryStorage;

/// Default persistence file, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

/// Trait for backends that hold one serialized stock mapping.
///
/// The whole mapping is read and written as a single value; there is no
/// partial update.
///
/// # Examples
///
/// ```no_run
/// use stock::domain::StockMap;
/// use stock::storage::{JsonFileStorage, StockStore};
///
/// let storage = JsonFileStorage::new("inventory.json");
///
/// let mut stock = StockMap::new();
/// stock.insert("apple".to_string(), 7);
/// storage.save(&stock).unwrap();
///
/// let loaded = storage.load().unwrap().unwrap();
/// assert_eq!(loaded.get("apple"), Some(&7));
/// ```
pub trait StockStore: Clone {
    /// Load the stored mapping.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet (for files: the
    /// file does not exist).
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Persistence` if the data exists but cannot be
    /// read or is not a JSON object of integers.
    fn load(&self) -> InventoryResult<Option<StockMap>>;

    /// Replace the stored mapping with `stock`.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Persistence` if the data cannot be serialized
    /// or written.
    fn save(&self, stock: &StockMap) -> InventoryResult<()>;

    /// Where the mapping lives, for messages.
    fn location(&self) -> &Path;
}
