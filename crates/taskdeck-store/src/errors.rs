//! Error handling for taskdeck-store

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error taxonomy for store operations
///
/// Statement and connectivity failures surface as `Sqlite`, including
/// foreign-key constraint violations; they are not pre-validated locally.
/// A `find` on a missing id is `Ok(None)`, never an error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection or statement failure, fatal to the operation, no retry
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A migration failed to apply
    #[error("migration {id} failed: {reason}")]
    Migration { id: String, reason: String },

    /// An applied migration's SQL no longer matches its recorded checksum
    #[error("checksum mismatch for migration {id}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        id: String,
        expected: String,
        actual: String,
    },
}
