//! Lake error types.

use samarth_core::StoreError;

/// Errors from the `DuckDB` store.
#[derive(Debug, thiserror::Error)]
pub enum LakeError {
    /// `DuckDB` operation failed.
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    /// A read-only store was requested but the file does not exist.
    #[error("store file not found: {0}")]
    MissingStore(String),
}

impl From<LakeError> for StoreError {
    fn from(error: LakeError) -> Self {
        Self::backend(error)
    }
}
