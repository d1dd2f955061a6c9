use serde::{Deserialize, Serialize};

use lkv_types::DEFAULT_MAX_KEY_LEN;

/// Limits and tuning for an [`InMemoryWorldState`](crate::InMemoryWorldState).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of live keys. `None` means unbounded.
    pub max_entries: Option<usize>,
    /// Maximum size of a single value, in bytes.
    pub max_value_len: usize,
    /// Maximum size of a key, in bytes.
    pub max_key_len: usize,
    /// Number of keys a cursor pulls from the index per page.
    pub scan_batch_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_entries: None,
            max_value_len: 1024 * 1024,
            max_key_len: DEFAULT_MAX_KEY_LEN,
            scan_batch_size: 64,
        }
    }
}

impl StoreConfig {
    /// Page size actually used by cursors (never zero).
    pub fn effective_batch_size(&self) -> usize {
        self.scan_batch_size.max(1)
    }
}
