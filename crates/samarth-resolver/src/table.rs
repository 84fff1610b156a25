//! Immutable alias table snapshot.
//!
//! A snapshot is loaded once from an [`AliasProvider`] and never mutated.
//! Reloading builds a new snapshot; a resolver holding the old one keeps
//! seeing it, so a single planning call always observes one consistent table.

use std::collections::HashMap;
use std::sync::Arc;

use samarth_core::{AliasEntry, AliasProvider, Domain};

use crate::error::ResolverError;

/// An alias with its normalized (trimmed, lowercase) lookup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAlias {
    pub canonical_code: String,
    pub alias: String,
    pub normalized: String,
}

/// Per-domain alias lists in provider order.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    domains: HashMap<Domain, Vec<NormalizedAlias>>,
}

impl AliasTable {
    /// Load both domains from a provider.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Provider`] if the provider fails for either domain.
    pub fn load(provider: &dyn AliasProvider) -> Result<Arc<Self>, ResolverError> {
        let mut table = Self::default();
        for domain in Domain::ALL {
            let entries = provider.list_aliases(domain)?;
            table.insert(domain, entries);
        }
        Ok(Arc::new(table))
    }

    /// Build a table directly from entries (tests, embedded seeds).
    #[must_use]
    pub fn from_entries(
        states: impl IntoIterator<Item = AliasEntry>,
        crops: impl IntoIterator<Item = AliasEntry>,
    ) -> Arc<Self> {
        let mut table = Self::default();
        table.insert(Domain::State, states);
        table.insert(Domain::Crop, crops);
        Arc::new(table)
    }

    /// Aliases of a domain in table order.
    #[must_use]
    pub fn aliases(&self, domain: Domain) -> &[NormalizedAlias] {
        self.domains.get(&domain).map_or(&[], Vec::as_slice)
    }

    /// All aliases that map to `code`, in table order.
    pub fn aliases_of<'a>(
        &'a self,
        domain: Domain,
        code: &'a str,
    ) -> impl Iterator<Item = &'a NormalizedAlias> + 'a {
        self.aliases(domain)
            .iter()
            .filter(move |a| a.canonical_code == code)
    }

    #[must_use]
    pub fn len(&self, domain: Domain) -> usize {
        self.aliases(domain).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.values().all(Vec::is_empty)
    }

    fn insert(&mut self, domain: Domain, entries: impl IntoIterator<Item = AliasEntry>) {
        let list = self.domains.entry(domain).or_default();
        for entry in entries {
            let normalized = normalize(&entry.alias);
            if normalized.is_empty() || entry.canonical_code.trim().is_empty() {
                tracing::warn!(
                    domain = %domain,
                    code = %entry.canonical_code,
                    alias = %entry.alias,
                    "skipping blank alias entry"
                );
                continue;
            }
            list.push(NormalizedAlias {
                canonical_code: entry.canonical_code.trim().to_string(),
                alias: entry.alias,
                normalized,
            });
        }
    }
}

/// Trim and lowercase a name for lookup.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
