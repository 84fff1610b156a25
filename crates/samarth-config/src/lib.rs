//! # samarth-config
//!
//! Layered configuration loading for Samarth using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SAMARTH_*` prefix, `__` as separator)
//! 2. An explicit file passed to [`SamarthConfig::load_from`]
//! 3. Project-level `.samarth/config.toml`
//! 4. User-level `~/.config/samarth/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SAMARTH_STORE__PATH` -> `store.path`,
//! `SAMARTH_RESOLVER__THRESHOLD` -> `resolver.threshold`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use samarth_config::SamarthConfig;
//!
//! let config = SamarthConfig::load_with_dotenv().expect("config");
//! println!("store: {}", config.store.path);
//! ```

mod aliases;
mod analysis;
mod error;
mod resolver;
mod store;

pub use aliases::AliasConfig;
pub use analysis::AnalysisConfig;
pub use error::ConfigError;
pub use resolver::{ResolverConfig, ScorerKind};
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SamarthConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub aliases: AliasConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl SamarthConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Load configuration after reading a `.env` file from the workspace root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Load configuration with an extra TOML file layered above the project file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `path` does not exist, or any
    /// extraction/validation error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }
        Self::load_dotenv_from_workspace();
        let figment = Self::figment_without_env()
            .merge(Toml::file(path))
            .merge(Self::env_provider());
        Self::extract(figment)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_without_env().merge(Self::env_provider())
    }

    /// Check value ranges figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.threshold > 100 {
            return Err(ConfigError::InvalidValue {
                field: "resolver.threshold".into(),
                reason: format!("must be within 0..=100, got {}", self.resolver.threshold),
            });
        }
        if self.analysis.top_crops == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.top_crops".into(),
                reason: "must be positive".into(),
            });
        }
        if !self.store.is_configured() {
            return Err(ConfigError::InvalidValue {
                field: "store.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn figment_without_env() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".samarth/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    fn env_provider() -> Env {
        Env::prefixed("SAMARTH_").split("__")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("samarth").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
