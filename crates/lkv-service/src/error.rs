use lkv_store::StoreError;
use lkv_types::{ErrorKind, TypeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} does not exist")]
    NotFound(String),

    #[error("record at {key} cannot be decoded: {reason}")]
    Decode { key: String, reason: String },

    /// Key validation or record encoding failed.
    #[error(transparent)]
    Type(#[from] TypeError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Decode { .. } => ErrorKind::DecodeError,
            Self::Type(e) => e.kind(),
            Self::Store(e) => e.kind(),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
