//! Alias providers: the built-in seed table and CSV map files.
//!
//! CSV maps have a header row and two columns, `code,alias`
//! (e.g. `state_code,alias` or `crop_id,alias`). Column names are not checked.

use std::path::{Path, PathBuf};

use samarth_config::AliasConfig;
use samarth_core::{AliasEntry, AliasProvider, Domain, StoreError};

const BUILTIN_STATES: &[(&str, &str)] = &[
    ("MH", "maharashtra"),
    ("GJ", "gujarat"),
    ("UP", "uttar pradesh"),
    ("TN", "tamil nadu"),
    ("KA", "karnataka"),
    ("MH", "mh"),
    ("GJ", "gj"),
    ("UP", "up"),
    ("TN", "tn"),
    ("KA", "ka"),
];

const BUILTIN_CROPS: &[(&str, &str)] = &[
    ("RICE", "rice"),
    ("WHEAT", "wheat"),
    ("MAIZE", "maize"),
    ("COTTON", "cotton"),
    ("SUGARCANE", "sugarcane"),
];

/// The seed alias table used when no map files are configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAliases;

impl AliasProvider for BuiltinAliases {
    fn list_aliases(&self, domain: Domain) -> Result<Vec<AliasEntry>, StoreError> {
        let seed = match domain {
            Domain::State => BUILTIN_STATES,
            Domain::Crop => BUILTIN_CROPS,
        };
        Ok(seed
            .iter()
            .map(|(code, alias)| AliasEntry::new(*code, *alias))
            .collect())
    }
}

/// Reads alias maps from CSV files, one file per domain.
///
/// A domain without a file, or whose file is missing, falls back to the
/// built-in seed when `fallback_builtin` is set and yields an error otherwise.
#[derive(Debug, Clone, Default)]
pub struct CsvAliasProvider {
    state_map: Option<PathBuf>,
    crop_map: Option<PathBuf>,
    fallback_builtin: bool,
}

impl CsvAliasProvider {
    #[must_use]
    pub const fn new(
        state_map: Option<PathBuf>,
        crop_map: Option<PathBuf>,
        fallback_builtin: bool,
    ) -> Self {
        Self {
            state_map,
            crop_map,
            fallback_builtin,
        }
    }

    #[must_use]
    pub fn from_config(config: &AliasConfig) -> Self {
        let path = |p: &str| (!p.is_empty()).then(|| PathBuf::from(p));
        Self::new(
            path(&config.state_map),
            path(&config.crop_map),
            config.use_builtin,
        )
    }

    const fn path_for(&self, domain: Domain) -> Option<&PathBuf> {
        match domain {
            Domain::State => self.state_map.as_ref(),
            Domain::Crop => self.crop_map.as_ref(),
        }
    }

    fn fallback(&self, domain: Domain, why: &str) -> Result<Vec<AliasEntry>, StoreError> {
        if self.fallback_builtin {
            tracing::warn!(%domain, reason = why, "using built-in alias seed");
            BuiltinAliases.list_aliases(domain)
        } else {
            Err(StoreError::backend(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{domain} alias map unavailable: {why}"),
            )))
        }
    }
}

impl AliasProvider for CsvAliasProvider {
    fn list_aliases(&self, domain: Domain) -> Result<Vec<AliasEntry>, StoreError> {
        let Some(path) = self.path_for(domain) else {
            return self.fallback(domain, "no map file configured");
        };
        if !path.exists() {
            return self.fallback(domain, &format!("{} does not exist", path.display()));
        }
        let entries = read_csv_map(path)?;
        tracing::debug!(%domain, path = %path.display(), count = entries.len(), "loaded alias map");
        Ok(entries)
    }
}

/// Read a two-column `code,alias` CSV file.
///
/// # Errors
///
/// Returns [`StoreError::Backend`] if the file cannot be read or a record has
/// fewer than two columns.
pub fn read_csv_map(path: &Path) -> Result<Vec<AliasEntry>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(StoreError::backend)?;

    let mut entries = Vec::new();
    for record in reader.deserialize::<(String, String)>() {
        let (code, alias) = record.map_err(StoreError::backend)?;
        entries.push(AliasEntry::new(code, alias));
    }
    Ok(entries)
}
