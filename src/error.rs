//! Error types for configuration and store operations.

use thiserror::Error;

/// Errors raised while reading process configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    /// A required environment variable is set to an empty value.
    #[error("environment variable {0} must not be empty")]
    Empty(&'static str),
}

/// Errors returned by a [`RecordStore`](crate::store::RecordStore).
#[derive(Error, Debug)]
pub enum StoreError {
    /// A record could not be converted to or from the store representation.
    #[error("record conversion failed: {0}")]
    Serialization(#[from] serde_dynamo::Error),

    /// The operation requires an existing record and none is stored under the key.
    #[error("no record stored under key '{0}'")]
    KeyNotFound(String),

    /// An attribute name collides with a reserved word of the store's expression language.
    #[error("reserved keyword used as attribute name: {0}")]
    ReservedKeyword(String),

    /// Any other store failure (throttling, network, malformed request).
    #[error("store execution failed: {0}")]
    Execution(String),
}

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
