//! Alias entries and the provider contract.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Domain;
use crate::errors::StoreError;

/// A free-text synonym for a canonical code.
///
/// Several aliases may share one code. Codes are opaque and stable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct AliasEntry {
    pub canonical_code: String,
    pub alias: String,
}

impl AliasEntry {
    pub fn new(canonical_code: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            canonical_code: canonical_code.into(),
            alias: alias.into(),
        }
    }
}

/// Source of alias tables, loaded once per session.
pub trait AliasProvider {
    /// All aliases of a domain, in table order.
    ///
    /// Table order is significant: the resolver breaks fuzzy ties by it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing file or table cannot be read.
    fn list_aliases(&self, domain: Domain) -> Result<Vec<AliasEntry>, StoreError>;
}
