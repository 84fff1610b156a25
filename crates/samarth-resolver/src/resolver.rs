//! Exact-then-fuzzy name resolution.
//!
//! 1. Normalize (trim, lowercase). Blank input is `NotFound`.
//! 2. Exact match against the domain's aliases wins outright.
//! 3. Otherwise score every alias; the best one resolves if its score is at
//!    least the threshold.
//!
//! Ties on the best fuzzy score go to the alias that appears first in the
//! table. The exact pass also takes the first matching alias.

use std::sync::Arc;

use samarth_config::ResolverConfig;
use samarth_core::Domain;
use serde::Serialize;

use crate::error::ResolverError;
use crate::similarity::{LevenshteinRatio, Similarity, scorer_for};
use crate::table::{AliasTable, normalize};

/// Minimum fuzzy score for a match.
pub const FUZZY_THRESHOLD: u8 = 80;

/// An exact match scores this, and always wins over any fuzzy candidate.
pub const EXACT_SCORE: u8 = 100;

/// The best-scoring alias for an input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub canonical_code: String,
    pub alias: String,
    pub score: u8,
}

/// Result of resolving one name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "match", rename_all = "snake_case")]
pub enum Resolution {
    Exact { canonical_code: String, alias: String },
    Fuzzy(Candidate),
    /// No alias qualified. `best` is the top fuzzy candidate, if any, for diagnostics.
    NotFound { best: Option<Candidate> },
}

impl Resolution {
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Exact { canonical_code, .. } => Some(canonical_code),
            Self::Fuzzy(candidate) => Some(&candidate.canonical_code),
            Self::NotFound { .. } => None,
        }
    }

    #[must_use]
    pub fn into_code(self) -> Option<String> {
        match self {
            Self::Exact { canonical_code, .. } => Some(canonical_code),
            Self::Fuzzy(candidate) => Some(candidate.canonical_code),
            Self::NotFound { .. } => None,
        }
    }
}

/// Maps free-text names to canonical codes over one alias table snapshot.
pub struct NameResolver {
    table: Arc<AliasTable>,
    scorer: Box<dyn Similarity>,
    threshold: u8,
}

impl std::fmt::Debug for NameResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameResolver")
            .field("scorer", &self.scorer.name())
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl NameResolver {
    /// Resolver with the Levenshtein scorer and the default threshold.
    #[must_use]
    pub fn new(table: Arc<AliasTable>) -> Self {
        Self {
            table,
            scorer: Box::new(LevenshteinRatio),
            threshold: FUZZY_THRESHOLD,
        }
    }

    /// Resolver configured from the `[resolver]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::InvalidThreshold`] if the threshold exceeds 100.
    pub fn from_config(table: Arc<AliasTable>, config: &ResolverConfig) -> Result<Self, ResolverError> {
        Self::new(table)
            .with_scorer(scorer_for(config.scorer))
            .with_threshold(config.threshold)
    }

    #[must_use]
    pub fn with_scorer(mut self, scorer: Box<dyn Similarity>) -> Self {
        self.scorer = scorer;
        self
    }

    /// # Errors
    ///
    /// Returns [`ResolverError::InvalidThreshold`] if `threshold` exceeds 100.
    pub fn with_threshold(mut self, threshold: u8) -> Result<Self, ResolverError> {
        if threshold > EXACT_SCORE {
            return Err(ResolverError::InvalidThreshold(threshold));
        }
        self.threshold = threshold;
        Ok(self)
    }

    #[must_use]
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    #[must_use]
    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    /// Resolve `raw` to a canonical code, or `None` when not found.
    #[must_use]
    pub fn resolve(&self, raw: &str, domain: Domain) -> Option<String> {
        self.resolve_detailed(raw, domain).into_code()
    }

    /// Resolve `raw`, reporting how the match was made.
    #[must_use]
    pub fn resolve_detailed(&self, raw: &str, domain: Domain) -> Resolution {
        let needle = normalize(raw);
        if needle.is_empty() {
            return Resolution::NotFound { best: None };
        }

        let aliases = self.table.aliases(domain);

        if let Some(hit) = aliases.iter().find(|a| a.normalized == needle) {
            tracing::debug!(%domain, input = raw, code = %hit.canonical_code, "exact alias match");
            return Resolution::Exact {
                canonical_code: hit.canonical_code.clone(),
                alias: hit.alias.clone(),
            };
        }

        let mut best: Option<Candidate> = None;
        for alias in aliases {
            let score = self.scorer.score(&needle, &alias.normalized);
            // Strictly greater: the first alias keeps a tie.
            if best.as_ref().is_none_or(|b| score > b.score) {
                best = Some(Candidate {
                    canonical_code: alias.canonical_code.clone(),
                    alias: alias.alias.clone(),
                    score,
                });
            }
        }

        match best {
            Some(candidate) if candidate.score >= self.threshold => {
                tracing::debug!(
                    %domain,
                    input = raw,
                    code = %candidate.canonical_code,
                    score = candidate.score,
                    "fuzzy alias match"
                );
                Resolution::Fuzzy(candidate)
            }
            best => {
                tracing::debug!(
                    %domain,
                    input = raw,
                    best_score = best.as_ref().map(|b| b.score),
                    "name not resolved"
                );
                Resolution::NotFound { best }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use samarth_core::AliasEntry;

    use super::*;

    fn states() -> Arc<AliasTable> {
        AliasTable::from_entries(
            [
                AliasEntry::new("MH", "maharashtra"),
                AliasEntry::new("GJ", "gujarat"),
                AliasEntry::new("UP", "uttar pradesh"),
                AliasEntry::new("MH", "MH"),
            ],
            [
                AliasEntry::new("RICE", "rice"),
                AliasEntry::new("WHEAT", "wheat"),
            ],
        )
    }

    #[test]
    fn exact_match_ignores_case_and_whitespace() {
        let resolver = NameResolver::new(states());
        assert_eq!(resolver.resolve("  GUJARAT ", Domain::State).as_deref(), Some("GJ"));
        assert_eq!(
            resolver.resolve_detailed("Maharashtra", Domain::State),
            Resolution::Exact {
                canonical_code: "MH".into(),
                alias: "maharashtra".into()
            }
        );
    }

    #[test]
    fn fuzzy_match_above_threshold() {
        let resolver = NameResolver::new(states());
        let resolution = resolver.resolve_detailed("maharastra", Domain::State);
        assert!(matches!(resolution, Resolution::Fuzzy(ref c) if c.canonical_code == "MH"));
    }

    #[test]
    fn blank_input_is_not_found() {
        let resolver = NameResolver::new(states());
        assert_eq!(
            resolver.resolve_detailed("   ", Domain::State),
            Resolution::NotFound { best: None }
        );
        assert_eq!(resolver.resolve("", Domain::Crop), None);
    }

    #[test]
    fn domains_are_separate() {
        let resolver = NameResolver::new(states());
        assert_eq!(resolver.resolve("rice", Domain::State), None);
        assert_eq!(resolver.resolve("rice", Domain::Crop).as_deref(), Some("RICE"));
    }

    #[test]
    fn code_listed_as_own_alias_roundtrips() {
        let resolver = NameResolver::new(states());
        assert_eq!(resolver.resolve("MH", Domain::State).as_deref(), Some("MH"));
        assert_eq!(resolver.resolve("mh", Domain::State).as_deref(), Some("MH"));
    }

    #[test]
    fn threshold_above_100_is_rejected() {
        let err = NameResolver::new(states()).with_threshold(101).unwrap_err();
        assert!(matches!(err, ResolverError::InvalidThreshold(101)));
    }
}
