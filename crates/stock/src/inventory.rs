//! The inventory store: owns the stock mapping and all operations on it.
//!
//! `Inventory` is generic over its storage backend so the same logic runs
//! against a JSON file in production and memory in tests.

use crate::domain::{parse_add_args, AuditEntry, StockMap, DEFAULT_LOW_STOCK_THRESHOLD};
use crate::errors::{InventoryError, InventoryResult};
use crate::storage::{JsonFileStorage, StockStore};
use serde_json::Value;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, warn};

const REPORT_HEADER: &str = "--- Items Report ---";
const REPORT_FOOTER: &str = "--------------------";

/// What a load found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The mapping was replaced with this many items.
    Loaded(usize),
    /// Nothing was stored; the mapping was reset to empty.
    Missing,
}

/// In-memory stock mapping bound to a storage backend.
pub struct Inventory<S: StockStore> {
    stock: StockMap,
    storage: S,
    low_stock_threshold: i64,
}

impl<S: StockStore> Inventory<S> {
    /// Create an empty inventory persisting through `storage`.
    pub fn new(storage: S) -> Self {
        Self {
            stock: StockMap::new(),
            storage,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }

    /// Override the threshold used by [`Inventory::check_low_items_default`].
    pub fn with_low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Borrow the current mapping.
    pub fn stock(&self) -> &StockMap {
        &self.stock
    }

    /// Items and quantities in mapping order.
    pub fn items(&self) -> impl Iterator<Item = (&str, i64)> {
        self.stock.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    /// Add `qty` of `item`.
    ///
    /// An empty item name is ignored and yields no audit entry. Negative
    /// quantities are accepted and lower the stock.
    ///
    /// # Errors
    ///
    /// `QuantityOverflow` if the sum does not fit in an `i64`; the mapping is
    /// not touched.
    pub fn add_item(&mut self, item: &str, qty: i64) -> InventoryResult<Option<AuditEntry>> {
        if item.is_empty() {
            return Ok(None);
        }

        let current = self.get_qty(item);
        let total = current
            .checked_add(qty)
            .ok_or_else(|| InventoryError::QuantityOverflow {
                item: item.to_string(),
                current,
                op: '+',
                qty,
            })?;
        self.stock.insert(item.to_string(), total);
        debug!(item, qty, total, "added stock");

        Ok(Some(AuditEntry::added(item, qty)))
    }

    /// Add from untyped values, e.g. fields of a decoded JSON document.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` unless `item` is a string and `qty` an integer. The
    /// mapping is not touched in that case.
    pub fn add_value(&mut self, item: &Value, qty: &Value) -> InventoryResult<Option<AuditEntry>> {
        let (item, qty) = parse_add_args(item, qty)?;
        self.add_item(item, qty)
    }

    /// Remove `qty` of `item`, deleting the entry once it reaches zero or less.
    ///
    /// # Errors
    ///
    /// `ItemNotFound` if the item is not stocked, `QuantityOverflow` if the
    /// difference exceeds `i64::MAX`. The mapping is unchanged in both cases.
    pub fn remove_item(&mut self, item: &str, qty: i64) -> InventoryResult<()> {
        let Some(&current) = self.stock.get(item) else {
            warn!(item, "remove of unknown item");
            return Err(InventoryError::ItemNotFound(item.to_string()));
        };

        let depleted = match current.checked_sub(qty) {
            Some(total) if total > 0 => {
                self.stock.insert(item.to_string(), total);
                debug!(item, qty, total, "removed stock");
                false
            }
            Some(_) => true,
            // Past i64::MIN is still depleted.
            None if qty > 0 => true,
            None => {
                return Err(InventoryError::QuantityOverflow {
                    item: item.to_string(),
                    current,
                    op: '-',
                    qty,
                })
            }
        };

        if depleted {
            self.stock.shift_remove(item);
            debug!(item, qty, "removed stock, item depleted");
        }
        Ok(())
    }

    /// Quantity of `item`, or 0 if it is not stocked.
    pub fn get_qty(&self, item: &str) -> i64 {
        self.stock.get(item).copied().unwrap_or(0)
    }

    /// Items whose quantity is strictly below `threshold`, in mapping order.
    pub fn check_low_items(&self, threshold: i64) -> Vec<String> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// [`Inventory::check_low_items`] with the configured threshold.
    pub fn check_low_items_default(&self) -> Vec<String> {
        self.check_low_items(self.low_stock_threshold)
    }

    /// Replace the mapping with what `store` holds.
    ///
    /// A store with nothing in it resets the mapping to empty and reports
    /// [`LoadOutcome::Missing`].
    ///
    /// # Errors
    ///
    /// `Persistence` if the stored data cannot be read or parsed. The mapping
    /// keeps its previous contents.
    pub fn load_from<T: StockStore>(&mut self, store: &T) -> InventoryResult<LoadOutcome> {
        match store.load()? {
            Some(stock) => {
                self.stock = stock;
                info!(path = %store.location().display(), items = self.stock.len(), "loaded inventory");
                Ok(LoadOutcome::Loaded(self.stock.len()))
            }
            None => {
                self.stock.clear();
                warn!(path = %store.location().display(), "stock file not found, starting empty");
                Ok(LoadOutcome::Missing)
            }
        }
    }

    /// Write the whole mapping to `store`.
    pub fn save_to<T: StockStore>(&self, store: &T) -> InventoryResult<()> {
        store.save(&self.stock)?;
        info!(path = %store.location().display(), items = self.stock.len(), "saved inventory");
        Ok(())
    }

    /// Load from the inventory's own storage.
    pub fn load(&mut self) -> InventoryResult<LoadOutcome> {
        let storage = self.storage.clone();
        self.load_from(&storage)
    }

    /// Save to the inventory's own storage.
    pub fn save(&self) -> InventoryResult<()> {
        self.save_to(&self.storage)
    }

    /// Load from the JSON file at `path`.
    pub fn load_data(&mut self, path: impl AsRef<Path>) -> InventoryResult<LoadOutcome> {
        self.load_from(&JsonFileStorage::new(path))
    }

    /// Save to the JSON file at `path`, overwriting it.
    pub fn save_data(&self, path: impl AsRef<Path>) -> InventoryResult<()> {
        self.save_to(&JsonFileStorage::new(path))
    }

    /// The item report as text, one `item -> qty` line per item.
    pub fn render_report(&self) -> String {
        let mut report = String::from(REPORT_HEADER);
        report.push('\n');
        for (item, qty) in self.items() {
            report.push_str(&format!("{} -> {}\n", item, qty));
        }
        report.push_str(REPORT_FOOTER);
        report
    }

    /// Write the item report followed by a newline.
    pub fn write_report<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", self.render_report())
    }

    /// Print the item report to stdout. Write errors, broken pipes
    /// included, are returned to the caller.
    pub fn print_data(&self) -> io::Result<()> {
        self.write_report(io::stdout().lock())
    }
}
