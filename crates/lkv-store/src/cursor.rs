//! Lazy range cursors over the world state.
//!
//! A [`RangeCursor`] walks `[start, end)` in key order. It pulls keys from
//! the [`KeyIndex`](crate::KeyIndex) one page at a time, each page starting
//! strictly after the last key handed out, and resolves every key against
//! the entry map only when `next` reaches it. The result is weakly
//! consistent:
//!
//! - values reflect the store at the moment each key is reached;
//! - keys removed before being reached are skipped;
//! - keys inserted behind the cursor never appear, keys inserted past the
//!   current page do.

use std::collections::VecDeque;

use lkv_types::KeyRange;
use tracing::debug;

use crate::entry::StoredEntry;
use crate::error::{StoreError, StoreResult};
use crate::memory::{read_state, SharedState};
use crate::traits::StateIterator;

/// Forward-only cursor produced by
/// [`InMemoryWorldState::cursor`](crate::InMemoryWorldState::cursor).
///
/// The cursor is not restartable; open a new one to iterate again. It closes
/// itself on drop. [`StateIterator::next_entry`] fails with
/// [`StoreError::CursorClosed`] after [`close`](StateIterator::close); used as
/// an [`Iterator`], a closed cursor simply ends.
pub struct RangeCursor {
    /// `None` once closed.
    state: Option<SharedState>,
    range: KeyRange,
    batch_size: usize,
    pending: VecDeque<String>,
    last_key: Option<String>,
    exhausted: bool,
}

impl RangeCursor {
    pub(crate) fn new(state: SharedState, start: &str, end: &str, batch_size: usize) -> Self {
        let range = KeyRange::new(start, end);
        let exhausted = range.is_empty();
        Self {
            state: Some(state),
            range,
            batch_size,
            pending: VecDeque::new(),
            last_key: None,
            exhausted,
        }
    }

    /// The range this cursor walks.
    pub fn range(&self) -> &KeyRange {
        &self.range
    }

    /// Pull the next page of keys from the index. Returns `false` when the
    /// range is drained.
    fn fill(&mut self, state: &SharedState) -> StoreResult<bool> {
        if self.exhausted {
            return Ok(false);
        }

        let page = {
            let guard = read_state(state)?;
            match &self.last_key {
                None => guard
                    .index
                    .range_from(&self.range.start, &self.range.end, self.batch_size),
                Some(after) => guard
                    .index
                    .range_after(after, &self.range.end, self.batch_size),
            }
        };

        if page.len() < self.batch_size {
            self.exhausted = true;
        }
        debug!(range = %self.range, keys = page.len(), "cursor page fetched");
        self.pending.extend(page);
        Ok(!self.pending.is_empty())
    }
}

impl StateIterator for RangeCursor {
    fn next_entry(&mut self) -> StoreResult<Option<StoredEntry>> {
        let state = match &self.state {
            Some(state) => state.clone(),
            None => return Err(StoreError::CursorClosed),
        };

        loop {
            if self.pending.is_empty() && !self.fill(&state)? {
                return Ok(None);
            }

            let Some(key) = self.pending.pop_front() else {
                return Ok(None);
            };
            let entry = read_state(&state)?.entry(&key);
            self.last_key = Some(key);

            match entry {
                Some(entry) => return Ok(Some(entry)),
                None => {
                    debug!(key = ?self.last_key, "key removed before cursor reached it; skipping");
                }
            }
        }
    }

    fn close(&mut self) {
        if self.state.take().is_some() {
            self.pending.clear();
            debug!(range = %self.range, "cursor closed");
        }
    }

    fn is_closed(&self) -> bool {
        self.state.is_none()
    }
}

impl Iterator for RangeCursor {
    type Item = StoreResult<StoredEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_closed() {
            return None;
        }
        self.next_entry().transpose()
    }
}

impl Drop for RangeCursor {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for RangeCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeCursor")
            .field("range", &self.range)
            .field("last_key", &self.last_key)
            .field("pending", &self.pending.len())
            .field("closed", &self.is_closed())
            .finish()
    }
}
