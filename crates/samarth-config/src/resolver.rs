//! Name resolver configuration.

use serde::{Deserialize, Serialize};

/// String-similarity scorer used for fuzzy alias matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerKind {
    #[default]
    Levenshtein,
    JaroWinkler,
}

/// Minimum fuzzy score (0..=100) for a match.
const fn default_threshold() -> u8 {
    80
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_threshold")]
    pub threshold: u8,

    #[serde(default)]
    pub scorer: ScorerKind,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            scorer: ScorerKind::default(),
        }
    }
}
