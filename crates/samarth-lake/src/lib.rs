//! # samarth-lake
//!
//! `DuckDB` storage for Samarth.
//!
//! One database file holds six tables:
//! - `raw_rainfall`, `raw_crop`: observations as ingested
//! - `rainfall_annual_state`, `crop_state_year`: state-level aggregates
//! - `state_aliases`, `crop_aliases`: name maps for the resolver
//!
//! [`SamarthLake`] implements [`DataStore`](samarth_core::DataStore) and
//! [`AliasProvider`](samarth_core::AliasProvider) over them. All filters are
//! bound as query parameters.

pub mod error;
pub mod ingest;
mod query;
pub mod schemas;

use std::path::Path;

use duckdb::{AccessMode, Config, Connection};

pub use error::LakeError;

/// A `DuckDB` connection holding the Samarth tables.
///
/// A connection is not `Sync`; share a lake across threads by giving each
/// thread its own [`Connection::try_clone`] through [`SamarthLake::try_clone`].
pub struct SamarthLake {
    conn: Connection,
}

impl SamarthLake {
    /// Open or create a store file, creating missing tables.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if the file cannot be opened or schema creation fails.
    pub fn open_local(path: &str) -> Result<Self, LakeError> {
        let conn = Connection::open(path)?;
        let lake = Self { conn };
        lake.init_schema()?;
        tracing::debug!(path, "opened store");
        Ok(lake)
    }

    /// Open an existing store file without write access.
    ///
    /// The schema is not created; querying a file that lacks the tables fails
    /// at query time.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::MissingStore`] if the file does not exist, or
    /// [`LakeError::DuckDb`] if it cannot be opened.
    pub fn open_read_only(path: &str) -> Result<Self, LakeError> {
        if !Path::new(path).exists() {
            return Err(LakeError::MissingStore(path.to_string()));
        }
        let config = Config::default().access_mode(AccessMode::ReadOnly)?;
        let conn = Connection::open_with_flags(path, config)?;
        tracing::debug!(path, "opened store read-only");
        Ok(Self { conn })
    }

    /// Open an empty in-memory store (for testing).
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if schema creation fails.
    pub fn open_in_memory() -> Result<Self, LakeError> {
        let conn = Connection::open_in_memory()?;
        let lake = Self { conn };
        lake.init_schema()?;
        Ok(lake)
    }

    /// A second handle on the same database.
    ///
    /// # Errors
    ///
    /// Returns [`LakeError::DuckDb`] if the connection cannot be cloned.
    pub fn try_clone(&self) -> Result<Self, LakeError> {
        Ok(Self {
            conn: self.conn.try_clone()?,
        })
    }

    /// Access the underlying `DuckDB` connection.
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    fn init_schema(&self) -> Result<(), LakeError> {
        for ddl in schemas::ALL {
            self.conn.execute_batch(ddl)?;
        }
        Ok(())
    }
}
