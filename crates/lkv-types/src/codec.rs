//! Record <-> bytes encoding.
//!
//! The store never interprets values; the service layer turns records into
//! bytes through a [`RecordCodec`]. [`JsonCodec`] produces the reference
//! shape: a compact JSON object with the fields in declaration order.

use crate::error::TypeError;
use crate::record::Record;

/// Encodes records to bytes and back.
pub trait RecordCodec: Send + Sync {
    fn encode(&self, record: &Record) -> Result<Vec<u8>, TypeError>;

    /// Decode bytes previously produced by `encode`.
    ///
    /// Returns [`TypeError::Decode`] when the bytes do not hold a complete
    /// record.
    fn decode(&self, bytes: &[u8]) -> Result<Record, TypeError>;
}

/// Compact JSON object codec with `SerialNum`/`Name`/`Origin`/`Date`/`Owner`
/// field names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl RecordCodec for JsonCodec {
    fn encode(&self, record: &Record) -> Result<Vec<u8>, TypeError> {
        serde_json::to_vec(record).map_err(|e| TypeError::Encode(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Record, TypeError> {
        serde_json::from_slice(bytes).map_err(|e| TypeError::Decode(e.to_string()))
    }
}
