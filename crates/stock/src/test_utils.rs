//! Shared test utilities

#![cfg(test)]

use crate::domain::StockMap;
use crate::storage::{JsonFileStorage, DEFAULT_DATA_FILE};
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary directory with a (not yet created) stock file inside it.
///
/// Keep the `TempDir` alive for the duration of the test.
pub fn setup_stock_file() -> (TempDir, PathBuf, JsonFileStorage) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(DEFAULT_DATA_FILE);
    let storage = JsonFileStorage::new(&path);
    (temp, path, storage)
}

/// Build a mapping from literal pairs, keeping their order.
pub fn stock_of(items: &[(&str, i64)]) -> StockMap {
    items
        .iter()
        .map(|(item, qty)| (item.to_string(), *qty))
        .collect()
}
