//! Startup wiring: config, store and alias table.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use samarth_config::SamarthConfig;
use samarth_core::{AliasEntry, AliasProvider, Domain, StoreError};
use samarth_lake::SamarthLake;
use samarth_resolver::{AliasTable, CsvAliasProvider, NameResolver};

use crate::cli::GlobalFlags;

/// Load layered config, applying the `--config` and `--store` flags.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SamarthConfig> {
    let mut config = match &flags.config {
        Some(path) => SamarthConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SamarthConfig::load_with_dotenv().context("failed to load config")?,
    };
    if let Some(store) = &flags.store {
        config.store.path.clone_from(store);
    }
    Ok(config)
}

/// Open the configured store.
///
/// `None` when the store is read-only and its file does not exist yet;
/// commands that only need aliases can still run.
pub fn open_store(config: &SamarthConfig) -> anyhow::Result<Option<SamarthLake>> {
    let path = config.store.path.as_str();
    if config.store.read_only {
        if !Path::new(path).exists() {
            tracing::warn!(path, "store file not found");
            return Ok(None);
        }
        return SamarthLake::open_read_only(path)
            .map(Some)
            .with_context(|| format!("failed to open store {path}"));
    }
    SamarthLake::open_local(path)
        .map(Some)
        .with_context(|| format!("failed to open store {path}"))
}

/// Aliases from the store's alias tables, falling back per domain to the
/// configured CSV maps (and from there to the built-in seed).
struct StoreThenFiles<'a> {
    store: Option<&'a SamarthLake>,
    files: CsvAliasProvider,
}

impl AliasProvider for StoreThenFiles<'_> {
    fn list_aliases(&self, domain: Domain) -> Result<Vec<AliasEntry>, StoreError> {
        if let Some(store) = self.store {
            let entries = store.list_aliases(domain)?;
            if !entries.is_empty() {
                return Ok(entries);
            }
            tracing::debug!(%domain, "store has no aliases; using alias files");
        }
        self.files.list_aliases(domain)
    }
}

/// Build a resolver over one alias table snapshot.
pub fn build_resolver(
    config: &SamarthConfig,
    store: Option<&SamarthLake>,
) -> anyhow::Result<NameResolver> {
    let provider = StoreThenFiles {
        store,
        files: CsvAliasProvider::from_config(&config.aliases),
    };
    let table: Arc<AliasTable> = AliasTable::load(&provider).context("failed to load aliases")?;
    tracing::debug!(
        states = table.len(Domain::State),
        crops = table.len(Domain::Crop),
        "alias table loaded"
    );
    NameResolver::from_config(table, &config.resolver).context("invalid resolver settings")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn store_aliases_win_over_builtin_seed() {
        let lake = SamarthLake::open_in_memory().unwrap();
        lake.insert_aliases(Domain::State, &[AliasEntry::new("PB", "Punjab")])
            .unwrap();

        let resolver = build_resolver(&SamarthConfig::default(), Some(&lake)).unwrap();
        assert_eq!(resolver.resolve("punjab", Domain::State).as_deref(), Some("PB"));
        assert_eq!(resolver.resolve("maharashtra", Domain::State), None);
        // No crop aliases in the store: seed applies.
        assert_eq!(resolver.resolve("wheat", Domain::Crop).as_deref(), Some("WHEAT"));
    }

    #[test]
    fn missing_read_only_store_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SamarthConfig::default();
        config.store.path = dir.path().join("none.duckdb").display().to_string();
        assert!(open_store(&config).unwrap().is_none());
    }

    #[test]
    fn writable_store_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SamarthConfig::default();
        config.store.path = dir.path().join("new.duckdb").display().to_string();
        config.store.read_only = false;
        assert!(open_store(&config).unwrap().is_some());
    }
}
