//! Record service for LedgerKV.
//!
//! [`RecordService`] is the entry point a host calls into: it seeds the
//! ledger, creates and reads records, lists a key range, and transfers
//! ownership while keeping the full owner history in the record. It holds
//! an injected [`WorldState`] and never reaches for global state.

pub mod config;
pub mod error;
pub mod seed;
pub mod service;

pub use config::{ConfigError, ServiceConfig};
pub use error::{ServiceError, ServiceResult};
pub use seed::{seed_records, SEED_DATA};
pub use service::RecordService;

// Re-export key types
pub use lkv_store::{InMemoryWorldState, StoreConfig, StoreError, WorldState};
pub use lkv_types::{ErrorKind, JsonCodec, QueryResult, Record, RecordCodec};
