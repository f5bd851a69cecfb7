//! JSON file-based storage implementation.
//!
//! The mapping is stored as one pretty-printed JSON object (4-space indent).
//! Saves overwrite the file in place.

use crate::domain::StockMap;
use crate::errors::{InventoryError, InventoryResult};
use crate::storage::StockStore;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const INDENT: &[u8] = b"    ";

/// JSON file storage for the stock mapping.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage instance backed by the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn to_json(&self, stock: &StockMap) -> InventoryResult<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        stock
            .serialize(&mut ser)
            .map_err(|e| InventoryError::persistence(&self.path, e))?;
        Ok(buf)
    }
}

impl StockStore for JsonFileStorage {
    fn load(&self) -> InventoryResult<Option<StockMap>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(InventoryError::persistence(&self.path, e)),
        };

        let stock: StockMap = serde_json::from_str(&contents)
            .map_err(|e| InventoryError::persistence(&self.path, e))?;
        debug!(path = %self.path.display(), items = stock.len(), "read stock file");
        Ok(Some(stock))
    }

    fn save(&self, stock: &StockMap) -> InventoryResult<()> {
        let json = self.to_json(stock)?;
        fs::write(&self.path, json).map_err(|e| InventoryError::persistence(&self.path, e))?;
        debug!(path = %self.path.display(), items = stock.len(), "wrote stock file");
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
