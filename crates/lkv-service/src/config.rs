use std::path::Path;

use lkv_store::StoreConfig;
use lkv_types::KeyRange;
use serde::{Deserialize, Serialize};

/// Errors from loading a [`ServiceConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for a [`RecordService`](crate::RecordService).
///
/// Every field has a default, so a TOML file only needs the values it
/// changes:
///
/// ```toml
/// list_end_key = "record999"
///
/// [store]
/// max_entries = 10000
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Prefix for seed keys; seeds land at `<prefix>0` through `<prefix>4`.
    pub seed_key_prefix: String,
    /// Inclusive lower bound used by `list_records`.
    pub list_start_key: String,
    /// Exclusive upper bound used by `list_records`.
    pub list_end_key: String,
    /// Limits for the in-memory world state built by
    /// [`RecordService::in_memory`](crate::RecordService::in_memory).
    pub store: StoreConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            seed_key_prefix: "record".into(),
            list_start_key: "record0".into(),
            list_end_key: "record99".into(),
            store: StoreConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The default listing range, `[list_start_key, list_end_key)`.
    pub fn list_range(&self) -> KeyRange {
        KeyRange::new(self.list_start_key.clone(), self.list_end_key.clone())
    }

    /// Key of the `index`-th seed record.
    pub fn seed_key(&self, index: usize) -> String {
        format!("{}{index}", self.seed_key_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ServiceConfig::default();
        assert_eq!(c.seed_key_prefix, "record");
        assert_eq!(c.list_range(), KeyRange::new("record0", "record99"));
        assert_eq!(c.seed_key(3), "record3");
        assert_eq!(c.store, StoreConfig::default());
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ServiceConfig::from_toml_str("").unwrap(), ServiceConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let c = ServiceConfig::from_toml_str(
            r#"
            list_end_key = "record999"

            [store]
            max_entries = 10
            scan_batch_size = 8
            "#,
        )
        .unwrap();
        assert_eq!(c.list_start_key, "record0");
        assert_eq!(c.list_end_key, "record999");
        assert_eq!(c.store.max_entries, Some(10));
        assert_eq!(c.store.scan_batch_size, 8);
        assert_eq!(c.store.max_key_len, 256);
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = ServiceConfig::from_toml_str("list_end_key = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed_key_prefix = \"fruit\"").unwrap();
        writeln!(file, "list_start_key = \"fruit0\"").unwrap();
        writeln!(file, "list_end_key = \"fruit99\"").unwrap();

        let c = ServiceConfig::from_file(file.path()).unwrap();
        assert_eq!(c.seed_key(0), "fruit0");
        assert_eq!(c.list_range(), KeyRange::new("fruit0", "fruit99"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServiceConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
