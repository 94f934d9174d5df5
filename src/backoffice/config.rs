//! # Configuration
//!
//! Settings live in `config.json` inside the configuration directory. A
//! missing file means defaults; keys absent from the file take their default
//! value too, so older files keep loading.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page-size` | `10` | Page size used when a query asks for limit 0 |
//! | `list-delay-ms` | `500` | Simulated latency of list queries |
//! | `item-delay-ms` | `300` | Simulated latency of single-record reads |
//! | `write-delay-ms` | `500` | Simulated latency of create and update |
//! | `delete-delay-ms` | `300` | Simulated latency of delete |
//! | `purge-favorites-on-delete` | `false` | Drop a deleted product from favorites |

use crate::error::{BackofficeError, Result};
use crate::query::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: [&str; 6] = [
    "page-size",
    "list-delay-ms",
    "item-delay-ms",
    "write-delay-ms",
    "delete-delay-ms",
    "purge-favorites-on-delete",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackofficeConfig {
    pub page_size: usize,
    pub list_delay_ms: u64,
    pub item_delay_ms: u64,
    pub write_delay_ms: u64,
    pub delete_delay_ms: u64,
    pub purge_favorites_on_delete: bool,
}

impl Default for BackofficeConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            list_delay_ms: 500,
            item_delay_ms: 300,
            write_delay_ms: 500,
            delete_delay_ms: 300,
            purge_favorites_on_delete: false,
        }
    }
}

impl BackofficeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "page-size" => self.page_size.to_string(),
            "list-delay-ms" => self.list_delay_ms.to_string(),
            "item-delay-ms" => self.item_delay_ms.to_string(),
            "write-delay-ms" => self.write_delay_ms.to_string(),
            "delete-delay-ms" => self.delete_delay_ms.to_string(),
            "purge-favorites-on-delete" => self.purge_favorites_on_delete.to_string(),
            _ => return None,
        };
        Some(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "page-size" => {
                let size: usize = parse(key, value)?;
                if size == 0 {
                    return Err(BackofficeError::Config(
                        "page-size must be at least 1".to_string(),
                    ));
                }
                self.page_size = size;
            }
            "list-delay-ms" => self.list_delay_ms = parse(key, value)?,
            "item-delay-ms" => self.item_delay_ms = parse(key, value)?,
            "write-delay-ms" => self.write_delay_ms = parse(key, value)?,
            "delete-delay-ms" => self.delete_delay_ms = parse(key, value)?,
            "purge-favorites-on-delete" => self.purge_favorites_on_delete = parse(key, value)?,
            _ => {
                return Err(BackofficeError::Config(format!(
                    "Unknown config key: {}",
                    key
                )))
            }
        }
        Ok(())
    }

    pub fn latency(&self) -> Latency {
        Latency {
            list: Duration::from_millis(self.list_delay_ms),
            item: Duration::from_millis(self.item_delay_ms),
            write: Duration::from_millis(self.write_delay_ms),
            delete: Duration::from_millis(self.delete_delay_ms),
        }
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| BackofficeError::Config(format!("Invalid value for {}: {}", key, value)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// Simulated round-trip time per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency {
    pub list: Duration,
    pub item: Duration,
    pub write: Duration,
    pub delete: Duration,
}

impl Latency {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn for_op(&self, op: Operation) -> Duration {
        match op {
            Operation::List => self.list,
            Operation::Get => self.item,
            Operation::Create | Operation::Update => self.write,
            Operation::Delete => self.delete,
        }
    }

    /// Blocks the caller for the operation's delay.
    pub fn pause(&self, op: Operation) {
        let delay = self.for_op(op);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BackofficeConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.latency().for_op(Operation::List), Duration::from_millis(500));
        assert_eq!(config.latency().for_op(Operation::Delete), Duration::from_millis(300));
        assert!(!config.purge_favorites_on_delete);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = BackofficeConfig::load(dir.path()).unwrap();
        assert_eq!(config, BackofficeConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("backoffice");

        let mut config = BackofficeConfig::default();
        config.set("page-size", "25").unwrap();
        config.set("purge-favorites-on-delete", "true").unwrap();
        config.save(&nested).unwrap();

        let loaded = BackofficeConfig::load(&nested).unwrap();
        assert_eq!(loaded.page_size, 25);
        assert!(loaded.purge_favorites_on_delete);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"page_size": 3}"#).unwrap();

        let loaded = BackofficeConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.page_size, 3);
        assert_eq!(loaded.list_delay_ms, 500);
    }

    #[test]
    fn test_invalid_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();

        assert!(matches!(
            BackofficeConfig::load(dir.path()),
            Err(BackofficeError::Serialization(_))
        ));
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = BackofficeConfig::default();
        assert!(config.set("page-size", "0").is_err());
        assert!(config.set("page-size", "ten").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, BackofficeConfig::default());
    }

    #[test]
    fn test_every_key_round_trips_through_get() {
        let config = BackofficeConfig::default();
        for key in KEYS {
            assert!(config.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_latency_none_is_zero() {
        let latency = Latency::none();
        assert!(latency.for_op(Operation::Update).is_zero());
    }
}
