//! Error types for the publisher facade.

use signpost_core::CoreError;
use signpost_store::StoreError;
use thiserror::Error;

/// Errors that can occur at the publishing boundary.
///
/// All of these map to client errors at the transport: malformed or
/// unverifiable input. There are no fatal conditions here.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Payload decoding or verification error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Store rejected the write.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Response serialization error.
    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Result type for publisher operations.
pub type Result<T> = std::result::Result<T, PublishError>;
