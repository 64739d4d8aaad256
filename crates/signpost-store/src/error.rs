//! Error types for the store.

use thiserror::Error;

use signpost_core::CoreError;

/// Errors that can occur during store operations.
///
/// Contention is never an error: callers block on the lock. A full address
/// table is not an error either, see
/// [`SetOutcome::DroppedCapacity`](crate::store::SetOutcome).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record failed structural or signature verification.
    #[error("record rejected: {0}")]
    Rejected(#[from] CoreError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
