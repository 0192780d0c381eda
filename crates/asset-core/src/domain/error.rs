//! Domain Errors

use thiserror::Error;

/// Common result type for storage-backed operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Failures talking to the key-value storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("serialization failed: {0}")]
    Serialize(String),
    #[error("id counter exhausted at {0}")]
    IdsExhausted(u64),
}

/// Failures parsing page-supplied configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid tracker config: {0}")]
    Parse(#[from] serde_json::Error),
}
