//! Core error types for the Finsight dashboard.
//!
//! This module defines storage-agnostic error types. Backend-specific
//! failures (lock poisoning in the in-memory store, driver errors in a real
//! database client) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard services.
///
/// Every failure is local and recoverable: callers surface a notification
/// and retry, prior state is never left half-mutated.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for repository operations.
///
/// This enum uses `String` for all error details, allowing any backing
/// store (in-memory collections, a database client) to convert its own
/// failures into this format.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A lock guarding an in-memory collection was poisoned.
    #[error("Storage lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
