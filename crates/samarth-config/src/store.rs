//! Data store configuration.

use serde::{Deserialize, Serialize};

/// Default `DuckDB` file.
fn default_path() -> String {
    String::from("samarth.duckdb")
}

const fn default_read_only() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path to the `DuckDB` file holding raw and aggregate tables.
    #[serde(default = "default_path")]
    pub path: String,

    /// Open the store read-only. Analysis never writes.
    #[serde(default = "default_read_only")]
    pub read_only: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            read_only: default_read_only(),
        }
    }
}

impl StoreConfig {
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.path.is_empty()
    }
}
