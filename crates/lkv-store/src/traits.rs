use crate::entry::StoredEntry;
use crate::error::{StoreError, StoreResult};

/// Byte-addressable key-value world state.
///
/// This is the seam between the record service and whatever holds committed
/// state: a ledger host's world state, or [`InMemoryWorldState`] when the
/// process owns its data.
///
/// All implementations must satisfy these invariants:
/// - `put` is unconditional (last writer wins) and returns the new version.
/// - A successful `put` is visible to every later `get`/`scan` in the process.
/// - Individual calls are atomic and linearizable with respect to each other.
/// - Returned entries are copies; callers never alias stored bytes.
///
/// [`InMemoryWorldState`]: crate::InMemoryWorldState
pub trait WorldState: Send + Sync {
    /// Write `value` under `key` and return the key's new version.
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<u64>;

    /// Read the entry under `key`.
    ///
    /// Returns [`StoreError::NotFound`] if the key is absent. A present key
    /// with an empty value is a normal entry.
    fn get(&self, key: &str) -> StoreResult<StoredEntry>;

    /// Open a lazy cursor over the half-open range `[start, end)`.
    fn scan(&self, start: &str, end: &str) -> StoreResult<Box<dyn StateIterator>>;

    /// Delete `key`. Returns `true` if it existed.
    fn remove(&self, key: &str) -> StoreResult<bool>;

    /// Check whether `key` is present.
    fn contains(&self, key: &str) -> StoreResult<bool> {
        match self.get(key) {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Read several keys, yielding `None` for each absent one.
    fn get_batch(&self, keys: &[&str]) -> StoreResult<Vec<Option<StoredEntry>>> {
        keys.iter()
            .map(|key| match self.get(key) {
                Ok(entry) => Ok(Some(entry)),
                Err(StoreError::NotFound(_)) => Ok(None),
                Err(e) => Err(e),
            })
            .collect()
    }
}

/// Forward-only iteration over entries produced by [`WorldState::scan`].
pub trait StateIterator: Send {
    /// The next entry in key order, or `Ok(None)` once the range is drained.
    ///
    /// Fails with [`StoreError::CursorClosed`] after [`close`](Self::close).
    fn next_entry(&mut self) -> StoreResult<Option<StoredEntry>>;

    /// Release held resources. Closing twice is a no-op.
    fn close(&mut self);

    fn is_closed(&self) -> bool;
}
