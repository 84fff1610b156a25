//! Alias table sources.

use serde::{Deserialize, Serialize};

const fn default_use_builtin() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AliasConfig {
    /// CSV map of state aliases (`state_code,alias`). Empty means unset.
    #[serde(default)]
    pub state_map: String,

    /// CSV map of crop aliases (`crop_id,alias`). Empty means unset.
    #[serde(default)]
    pub crop_map: String,

    /// Fall back to the built-in seed table when a map is unset or missing.
    #[serde(default = "default_use_builtin")]
    pub use_builtin: bool,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            state_map: String::new(),
            crop_map: String::new(),
            use_builtin: default_use_builtin(),
        }
    }
}

impl AliasConfig {
    /// True when at least one CSV map is configured.
    #[must_use]
    pub const fn has_map_files(&self) -> bool {
        !self.state_map.is_empty() || !self.crop_map.is_empty()
    }
}
