use lkv_types::{ErrorKind, TypeError};

/// Errors from world state operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A key or value failed a type-level check. Its kind follows the
    /// inner error.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// No entry exists under the key.
    #[error("key not found: {0}")]
    NotFound(String),

    /// The store already holds its configured maximum number of entries.
    #[error("storage full: entry limit of {limit} reached")]
    StorageFull { limit: usize },

    /// The value exceeds the configured maximum size.
    #[error("value for {key:?} is {len} bytes, limit is {limit}")]
    ValueTooLarge { key: String, len: usize, limit: usize },

    /// `next` was called on a closed cursor.
    #[error("cursor is closed")]
    CursorClosed,

    /// A thread panicked while holding the state lock.
    #[error("state lock poisoned: {0}")]
    LockPoisoned(String),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Type(e) => e.kind(),
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::StorageFull { .. } | Self::ValueTooLarge { .. } => ErrorKind::StorageFull,
            Self::CursorClosed => ErrorKind::CursorClosed,
            Self::LockPoisoned(_) => ErrorKind::Internal,
        }
    }

    /// Returns `true` for [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use lkv_types::validate_key;

    #[test]
    fn type_errors_keep_their_kind() {
        let key_err: StoreError = validate_key("", 256).unwrap_err().into();
        assert!(matches!(key_err, StoreError::Type(TypeError::InvalidKey { .. })));
        assert_eq!(key_err.kind(), ErrorKind::InvalidKey);

        let decode: StoreError = TypeError::Decode("truncated".into()).into();
        assert_eq!(decode.kind(), ErrorKind::DecodeError);
        assert_eq!(decode.to_string(), "cannot decode record: truncated");

        let encode: StoreError = TypeError::Encode("bad".into()).into();
        assert_eq!(encode.kind(), ErrorKind::Internal);
    }

    #[test]
    fn store_kinds() {
        assert_eq!(StoreError::NotFound("k".into()).kind(), ErrorKind::NotFound);
        assert!(StoreError::NotFound("k".into()).is_not_found());
        assert_eq!(StoreError::StorageFull { limit: 1 }.kind(), ErrorKind::StorageFull);
        assert_eq!(
            StoreError::ValueTooLarge { key: "k".into(), len: 9, limit: 8 }.kind(),
            ErrorKind::StorageFull
        );
        assert_eq!(StoreError::CursorClosed.kind(), ErrorKind::CursorClosed);
        assert_eq!(StoreError::LockPoisoned("x".into()).kind(), ErrorKind::Internal);
    }
}
