//! Foundation types for LedgerKV.
//!
//! This crate provides the key, record and codec types shared by the store
//! and service layers. Every other LedgerKV crate depends on `lkv-types`.
//!
//! # Key Types
//!
//! - [`KeyRange`] — Half-open `[start, end)` interval over raw key bytes
//! - [`Record`] — The fixed five-field ledger record
//! - [`QueryResult`] — `(key, record)` pair returned by lookups and scans
//! - [`RecordCodec`] / [`JsonCodec`] — Record <-> bytes encoding
//! - [`ErrorKind`] — Failure classification shared by all layers

pub mod codec;
pub mod error;
pub mod key;
pub mod record;

pub use codec::{JsonCodec, RecordCodec};
pub use error::{ErrorKind, TypeError};
pub use key::{validate_key, KeyRange, DEFAULT_MAX_KEY_LEN};
pub use record::{QueryResult, Record, OWNER_SEPARATOR};
