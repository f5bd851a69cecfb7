//! Core data types: the stock mapping and audit entries.

use crate::errors::{InventoryError, InventoryResult};
use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Item name to quantity, iterated in insertion order.
pub type StockMap = IndexMap<String, i64>;

/// Items below this quantity are reported as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A single audit line produced by an add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Local>,
    pub item: String,
    pub qty: i64,
}

impl AuditEntry {
    pub fn added(item: impl Into<String>, qty: i64) -> Self {
        Self {
            timestamp: Local::now(),
            item: item.into(),
            qty,
        }
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Added {} of {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.qty,
            self.item
        )
    }
}

/// Validate untyped add arguments.
///
/// The item must be a JSON string and the quantity a JSON integer that fits
/// in `i64`. Anything else is a `TypeMismatch`.
pub fn parse_add_args<'a>(item: &'a Value, qty: &Value) -> InventoryResult<(&'a str, i64)> {
    match (item.as_str(), qty.as_i64()) {
        (Some(name), Some(amount)) => Ok((name, amount)),
        _ => Err(InventoryError::TypeMismatch {
            item: item.to_string(),
            qty: qty.to_string(),
        }),
    }
}
