//! In-memory storage implementation for testing.

use crate::domain::StockMap;
use crate::errors::InventoryResult;
use crate::storage::StockStore;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// In-memory storage backend.
///
/// Clones share the same slot through `Rc<RefCell<>>`, so a test can keep a
/// handle and inspect what the inventory saved.
///
/// # Examples
///
/// ```
/// use stock::domain::StockMap;
/// use stock::storage::{InMemoryStorage, StockStore};
///
/// let storage = InMemoryStorage::new();
/// assert!(storage.load().unwrap().is_none());
///
/// let mut stock = StockMap::new();
/// stock.insert("apple".to_string(), 3);
/// storage.save(&stock).unwrap();
///
/// assert_eq!(storage.load().unwrap().unwrap().get("apple"), Some(&3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    slot: Rc<RefCell<Option<StockMap>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `stock`.
    pub fn with_stock(stock: StockMap) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(stock))),
        }
    }
}

impl StockStore for InMemoryStorage {
    fn load(&self) -> InventoryResult<Option<StockMap>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, stock: &StockMap) -> InventoryResult<()> {
        *self.slot.borrow_mut() = Some(stock.clone());
        Ok(())
    }

    fn location(&self) -> &Path {
        Path::new(":memory:")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_data() {
        let storage = InMemoryStorage::new();
        let handle = storage.clone();

        let mut stock = StockMap::new();
        stock.insert("apple".to_string(), 1);
        storage.save(&stock).unwrap();

        assert_eq!(handle.load().unwrap(), Some(stock));
    }

    #[test]
    fn test_with_stock_loads_seeded_mapping() {
        let mut stock = StockMap::new();
        stock.insert("apple".to_string(), 1);
        let storage = InMemoryStorage::with_stock(stock.clone());

        assert_eq!(storage.load().unwrap(), Some(stock));
        assert!(InMemoryStorage::new().load().unwrap().is_none());
    }
}
