//! Analysis defaults.

use serde::{Deserialize, Serialize};

const fn default_top_crops() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Number of top crops reported per state in a rainfall comparison.
    #[serde(default = "default_top_crops")]
    pub top_crops: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_crops: default_top_crops(),
        }
    }
}
