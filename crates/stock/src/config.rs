//! Configuration file loading and parsing.
//!
//! The tracker reads an optional `stock.toml` from the working directory.
//! If no config file exists, the system falls back to defaults.

use crate::domain::DEFAULT_LOW_STOCK_THRESHOLD;
use crate::storage::DEFAULT_DATA_FILE;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file.
pub const CONFIG_FILE: &str = "stock.toml";

/// Environment variable overriding `storage.data_file`.
pub const DATA_FILE_ENV: &str = "STOCK_DATA_FILE";

/// Root configuration structure loaded from `stock.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockConfig {
    /// Persistence settings (optional).
    pub storage: Option<StorageConfig>,
    /// Report settings (optional).
    pub report: Option<ReportConfig>,
}

/// Persistence settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Stock file path, relative to the working directory (default: "inventory.json").
    pub data_file: Option<String>,
}

/// Report settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Items below this quantity are listed as low (default: 5).
    pub low_stock_threshold: Option<i64>,
    /// Suppress informational output (default: false).
    pub quiet: Option<bool>,
}

impl StockConfig {
    /// Load configuration from `stock.toml` in `dir` if it exists.
    ///
    /// Returns the default config if the file doesn't exist.
    /// Returns an error if the file exists but is malformed.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Stock file name as configured, before joining onto a directory.
    ///
    /// `env_override` (the value of `STOCK_DATA_FILE`, if set) wins over the
    /// config file. An empty override is ignored.
    pub fn data_file_name(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|value| !value.is_empty())
            .or_else(|| self.storage.as_ref().and_then(|s| s.data_file.clone()))
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string())
    }

    /// Stock file location. Relative names are joined onto `dir`.
    pub fn data_file(&self, dir: &Path, env_override: Option<String>) -> PathBuf {
        dir.join(self.data_file_name(env_override))
    }

    pub fn low_stock_threshold(&self) -> i64 {
        self.report
            .as_ref()
            .and_then(|r| r.low_stock_threshold)
            .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    pub fn quiet(&self) -> bool {
        self.report.as_ref().and_then(|r| r.quiet).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = StockConfig::load(temp_dir.path()).unwrap();

        assert!(config.storage.is_none());
        assert_eq!(config.low_stock_threshold(), 5);
        assert!(!config.quiet());
        assert_eq!(
            config.data_file(temp_dir.path(), None),
            temp_dir.path().join("inventory.json")
        );
    }

    #[test]
    fn test_parse_full_config() {
        let config_toml = r#"
[storage]
data_file = "data/stock.json"

[report]
low_stock_threshold = 12
quiet = true
"#;
        let config: StockConfig = toml::from_str(config_toml).unwrap();

        assert_eq!(config.low_stock_threshold(), 12);
        assert!(config.quiet());
        assert_eq!(
            config.data_file(Path::new("/srv"), None),
            PathBuf::from("/srv/data/stock.json")
        );
    }

    #[test]
    fn test_parse_partial_config() {
        let config: StockConfig = toml::from_str("[report]\nquiet = true\n").unwrap();

        assert!(config.quiet());
        assert_eq!(config.low_stock_threshold(), 5);
    }

    #[test]
    fn test_env_override_wins() {
        let config: StockConfig =
            toml::from_str("[storage]\ndata_file = \"configured.json\"\n").unwrap();

        let path = config.data_file(Path::new("/work"), Some("override.json".to_string()));
        assert_eq!(path, PathBuf::from("/work/override.json"));

        let path = config.data_file(Path::new("/work"), Some(String::new()));
        assert_eq!(path, PathBuf::from("/work/configured.json"));
    }

    #[test]
    fn test_data_file_name_stays_relative() {
        let config = StockConfig::default();
        assert_eq!(config.data_file_name(None), "inventory.json");

        let config: StockConfig =
            toml::from_str("[storage]\ndata_file = \"data/stock.json\"\n").unwrap();
        assert_eq!(config.data_file_name(None), "data/stock.json");
        assert_eq!(
            config.data_file_name(Some("other.json".to_string())),
            "other.json"
        );
    }

    #[test]
    fn test_load_malformed_config_fails() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE), "[report\nquiet = ").unwrap();

        let err = StockConfig::load(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
