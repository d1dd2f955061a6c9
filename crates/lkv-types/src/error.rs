use std::fmt;

use thiserror::Error;

/// Classification of every failure LedgerKV can surface.
///
/// Each layer has its own error enum; all of them map onto one of these
/// kinds through a `kind()` method so callers can branch on the class of
/// failure without matching crate-specific variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Empty or malformed key.
    InvalidKey,
    /// Point lookup or transfer target missing.
    NotFound,
    /// Stored bytes do not parse as a record.
    DecodeError,
    /// Entry-count or value-size limit reached.
    StorageFull,
    /// A cursor was used after it was closed.
    CursorClosed,
    /// Poisoned lock or a failed encode.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "InvalidKey"),
            Self::NotFound => write!(f, "NotFound"),
            Self::DecodeError => write!(f, "DecodeError"),
            Self::StorageFull => write!(f, "StorageFull"),
            Self::CursorClosed => write!(f, "CursorClosed"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("cannot decode record: {0}")]
    Decode(String),

    #[error("cannot encode record: {0}")]
    Encode(String),
}

impl TypeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidKey { .. } => ErrorKind::InvalidKey,
            Self::Decode(_) => ErrorKind::DecodeError,
            Self::Encode(_) => ErrorKind::Internal,
        }
    }
}
