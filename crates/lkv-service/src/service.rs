use std::sync::Arc;

use lkv_store::{InMemoryWorldState, StateIterator, StoreError, StoredEntry, WorldState};
use lkv_types::{validate_key, JsonCodec, QueryResult, Record, RecordCodec};
use tracing::{debug, info, warn};

use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::seed::seed_records;

/// The record operations a ledger host invokes.
///
/// The service owns no state of its own: every operation goes through the
/// injected [`WorldState`], and records cross that boundary as bytes
/// produced by the codec `C`.
pub struct RecordService<C: RecordCodec = JsonCodec> {
    state: Arc<dyn WorldState>,
    codec: C,
    config: ServiceConfig,
}

impl RecordService<JsonCodec> {
    pub fn new(state: Arc<dyn WorldState>) -> Self {
        Self::with_config(state, ServiceConfig::default())
    }

    pub fn with_config(state: Arc<dyn WorldState>, config: ServiceConfig) -> Self {
        Self::with_codec(state, config, JsonCodec)
    }

    /// A service over a fresh [`InMemoryWorldState`] built from
    /// `config.store`.
    pub fn in_memory(config: ServiceConfig) -> Self {
        let state = Arc::new(InMemoryWorldState::with_config(config.store.clone()));
        Self::with_config(state, config)
    }
}

impl<C: RecordCodec> RecordService<C> {
    pub fn with_codec(state: Arc<dyn WorldState>, config: ServiceConfig, codec: C) -> Self {
        Self {
            state,
            codec,
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn world_state(&self) -> &Arc<dyn WorldState> {
        &self.state
    }

    // ---- Seeding ----

    /// Write the five seed records at `<prefix>0` .. `<prefix>4`,
    /// overwriting whatever is there.
    pub fn init_ledger(&self) -> ServiceResult<()> {
        let records = seed_records();
        for (i, record) in records.iter().enumerate() {
            self.put_record(&self.config.seed_key(i), record)?;
        }
        info!(count = records.len(), prefix = %self.config.seed_key_prefix, "ledger seeded");
        Ok(())
    }

    // ---- Point operations ----

    /// Store a new record at `key`. An existing record there is replaced.
    ///
    /// Malformed keys fail with [`ErrorKind::InvalidKey`](lkv_types::ErrorKind)
    /// before anything reaches the world state.
    pub fn create_record(
        &self,
        key: &str,
        serial_number: &str,
        name: &str,
        origin: &str,
        date: &str,
        owner: &str,
    ) -> ServiceResult<()> {
        validate_key(key, self.config.store.max_key_len)?;
        let record = Record::new(serial_number, name, origin, date, owner);
        let version = self.put_record(key, &record)?;
        debug!(key, version, "record created");
        Ok(())
    }

    pub fn read_record(&self, key: &str) -> ServiceResult<Record> {
        let (record, _) = self.read_entry(key)?;
        Ok(record)
    }

    /// Read a record together with the number of writes its key has seen.
    pub fn read_entry(&self, key: &str) -> ServiceResult<(Record, u64)> {
        let entry = self.state.get(key).map_err(|e| match e {
            StoreError::NotFound(key) => ServiceError::NotFound(key),
            other => other.into(),
        })?;
        let record = self.decode(&entry)?;
        Ok((record, entry.version))
    }

    /// Append `new_owner` to the record's owner history.
    ///
    /// The read and the write are two separate store calls. Two transfers
    /// racing on the same key can both read the same owner string; the later
    /// write wins and the other append is lost without an error.
    pub fn transfer_owner(&self, key: &str, new_owner: &str) -> ServiceResult<()> {
        let (mut record, read_version) = self.read_entry(key)?;
        record.transfer_to(new_owner);
        let version = self.put_record(key, &record)?;
        if version != read_version + 1 {
            debug!(key, read_version, version, "concurrent write during owner transfer");
        }
        debug!(key, new_owner, owner = %record.owner, "ownership transferred");
        Ok(())
    }

    // ---- Range operations ----

    /// Every record in the configured listing range, in key order.
    pub fn list_records(&self) -> ServiceResult<Vec<QueryResult>> {
        let range = self.config.list_range();
        self.list_records_in(&range.start, &range.end)
    }

    /// Every record in `[start, end)`, in key order.
    ///
    /// Fails as a whole if any entry in the range does not decode; no partial
    /// list is returned. The cursor is closed on every path.
    pub fn list_records_in(&self, start: &str, end: &str) -> ServiceResult<Vec<QueryResult>> {
        let mut cursor = self.state.scan(start, end)?;
        let results = self.drain(&mut *cursor);
        cursor.close();

        match &results {
            Ok(list) => debug!(start, end, count = list.len(), "records listed"),
            Err(e) => warn!(start, end, error = %e, "listing aborted"),
        }
        results
    }

    // ---- Internals ----

    fn drain(&self, cursor: &mut dyn StateIterator) -> ServiceResult<Vec<QueryResult>> {
        let mut results = Vec::new();
        while let Some(entry) = cursor.next_entry()? {
            let record = self.decode(&entry)?;
            results.push(QueryResult::new(entry.key, record));
        }
        Ok(results)
    }

    fn put_record(&self, key: &str, record: &Record) -> ServiceResult<u64> {
        let bytes = self.codec.encode(record)?;
        Ok(self.state.put(key, &bytes)?)
    }

    fn decode(&self, entry: &StoredEntry) -> ServiceResult<Record> {
        self.codec
            .decode(&entry.value)
            .map_err(|e| ServiceError::Decode {
                key: entry.key.clone(),
                reason: e.to_string(),
            })
    }
}

impl<C: RecordCodec> std::fmt::Debug for RecordService<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
