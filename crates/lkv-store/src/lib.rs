//! Ordered, versioned key-value world state for LedgerKV.
//!
//! This crate is the storage engine underneath the record service: a
//! byte-valued map with a sorted key index, per-key write versions and lazy
//! range cursors. It plays the role a ledger host's world state plays for a
//! contract, for callers that own their persistence.
//!
//! # Components
//!
//! - [`KeyIndex`] -- sorted set of live keys for deterministic range iteration
//! - [`WorldState`] -- the storage interface (`put`, `get`, `scan`)
//! - [`InMemoryWorldState`] -- the built-in implementation
//! - [`RangeCursor`] -- lazy, forward-only scan over a half-open key range
//! - [`StateDigest`] -- BLAKE3 fingerprint of the whole world state
//!
//! # Design Rules
//!
//! 1. Writes are unconditional: last writer wins at key granularity.
//! 2. Every write bumps the key's version, starting at 1.
//! 3. The store never interprets values -- it is a pure key-value store.
//! 4. Callers always receive copies; no stored bytes are aliased.
//! 5. Individual `put`/`get`/`remove` calls are atomic and linearizable.
//! 6. Cursors are weakly consistent and resolve each key when reached.

pub mod config;
pub mod cursor;
pub mod digest;
pub mod entry;
pub mod error;
pub mod index;
pub mod memory;
pub mod traits;

pub use config::StoreConfig;
pub use cursor::RangeCursor;
pub use digest::StateDigest;
pub use entry::StoredEntry;
pub use error::{StoreError, StoreResult};
pub use index::KeyIndex;
pub use memory::InMemoryWorldState;
pub use traits::{StateIterator, WorldState};
