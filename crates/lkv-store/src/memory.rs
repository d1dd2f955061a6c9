use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use lkv_types::validate_key;
use tracing::debug;

use crate::config::StoreConfig;
use crate::cursor::RangeCursor;
use crate::digest::StateDigest;
use crate::entry::StoredEntry;
use crate::error::{StoreError, StoreResult};
use crate::index::KeyIndex;
use crate::traits::{StateIterator, WorldState};

/// Value and version held for one key.
#[derive(Clone, Debug)]
pub(crate) struct Slot {
    pub(crate) value: Vec<u8>,
    pub(crate) version: u64,
}

/// The map and its key index, always mutated together under one lock.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) entries: HashMap<String, Slot>,
    pub(crate) index: KeyIndex,
}

impl StoreState {
    pub(crate) fn entry(&self, key: &str) -> Option<StoredEntry> {
        self.entries
            .get(key)
            .map(|slot| StoredEntry::new(key, slot.value.clone(), slot.version))
    }
}

pub(crate) type SharedState = Arc<RwLock<StoreState>>;

pub(crate) fn read_state(state: &RwLock<StoreState>) -> StoreResult<RwLockReadGuard<'_, StoreState>> {
    state
        .read()
        .map_err(|e| StoreError::LockPoisoned(e.to_string()))
}

fn write_state(state: &RwLock<StoreState>) -> StoreResult<RwLockWriteGuard<'_, StoreState>> {
    state
        .write()
        .map_err(|e| StoreError::LockPoisoned(e.to_string()))
}

/// In-memory world state with a sorted key index.
///
/// All data lives in a `HashMap` plus a [`KeyIndex`], both behind a single
/// `RwLock` shared with any open cursors. Cloning an `InMemoryWorldState`
/// yields another handle onto the same data. Data is lost when the last
/// handle is dropped.
#[derive(Clone)]
pub struct InMemoryWorldState {
    config: StoreConfig,
    state: SharedState,
}

impl InMemoryWorldState {
    /// Create an empty store with default limits.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            state: Arc::new(RwLock::new(StoreState::default())),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of live keys.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(read_state(&self.state)?.entries.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// All live keys in ascending order.
    pub fn keys(&self) -> StoreResult<Vec<String>> {
        let state = read_state(&self.state)?;
        Ok(state.index.iter().map(str::to_string).collect())
    }

    /// Open a concrete cursor over `[start, end)`.
    ///
    /// [`WorldState::scan`] boxes the same cursor.
    pub fn cursor(&self, start: &str, end: &str) -> StoreResult<RangeCursor> {
        // Surface a poisoned lock at open time rather than on first `next`.
        drop(read_state(&self.state)?);
        debug!(start, end, "opening range cursor");
        Ok(RangeCursor::new(
            Arc::clone(&self.state),
            start,
            end,
            self.config.effective_batch_size(),
        ))
    }

    /// Fingerprint of every `(key, value)` pair currently stored.
    pub fn state_digest(&self) -> StoreResult<StateDigest> {
        let state = read_state(&self.state)?;
        let pairs = state.index.iter().filter_map(|key| {
            state
                .entries
                .get(key)
                .map(|slot| (key, slot.value.as_slice()))
        });
        Ok(StateDigest::compute(pairs))
    }

    /// Remove every entry.
    pub fn clear(&self) -> StoreResult<()> {
        let mut state = write_state(&self.state)?;
        *state = StoreState::default();
        debug!("world state cleared");
        Ok(())
    }
}

impl Default for InMemoryWorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState for InMemoryWorldState {
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<u64> {
        validate_key(key, self.config.max_key_len)?;
        if value.len() > self.config.max_value_len {
            return Err(StoreError::ValueTooLarge {
                key: key.to_string(),
                len: value.len(),
                limit: self.config.max_value_len,
            });
        }

        let mut guard = write_state(&self.state)?;
        let state = &mut *guard;

        let version = if let Some(slot) = state.entries.get_mut(key) {
            slot.value = value.to_vec();
            slot.version += 1;
            slot.version
        } else {
            if let Some(limit) = self.config.max_entries {
                if state.entries.len() >= limit {
                    return Err(StoreError::StorageFull { limit });
                }
            }
            state.entries.insert(
                key.to_string(),
                Slot {
                    value: value.to_vec(),
                    version: 1,
                },
            );
            state.index.insert(key);
            1
        };

        debug!(key, version, bytes = value.len(), "put");
        Ok(version)
    }

    fn get(&self, key: &str) -> StoreResult<StoredEntry> {
        let state = read_state(&self.state)?;
        state
            .entry(key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn scan(&self, start: &str, end: &str) -> StoreResult<Box<dyn StateIterator>> {
        Ok(Box::new(self.cursor(start, end)?))
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        let mut guard = write_state(&self.state)?;
        let state = &mut *guard;
        let existed = state.entries.remove(key).is_some();
        state.index.remove(key);
        debug!(key, existed, "remove");
        Ok(existed)
    }

    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(read_state(&self.state)?.entries.contains_key(key))
    }
}

impl std::fmt::Debug for InMemoryWorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len().unwrap_or_default();
        f.debug_struct("InMemoryWorldState")
            .field("entry_count", &count)
            .field("config", &self.config)
            .finish()
    }
}
