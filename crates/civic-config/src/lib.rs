//! # civic-config
//!
//! Layered configuration loading for the civic issue reporter using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CIVIC_*` prefix, `__` as separator)
//! 2. Project-level `.civic/config.toml`
//! 3. User-level `~/.config/civic/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CIVIC_STORAGE__DATA_DIR` -> `storage.data_dir`,
//! `CIVIC_GENERAL__SEED_SAMPLE_DATA` -> `general.seed_sample_data`, etc.
//! Values are parsed before extraction, so a purely numeric directory or key
//! is read back in canonical form; quote it (`CIVIC_STORAGE__KEY='"007"'`) to
//! keep leading zeros.
//!
//! # Usage
//!
//! ```no_run
//! use civic_config::CivicConfig;
//!
//! let config = CivicConfig::load_with_dotenv().expect("config");
//! println!("issues live in {}", config.storage.resolved_data_dir().display());
//! ```

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CivicConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CivicConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is the common case.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".civic/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CIVIC_").split("__"))
    }

    /// Check values figment cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.key".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.storage.key.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "storage.key".to_string(),
                reason: format!("'{}' must not contain path separators", self.storage.key),
            });
        }
        self.general.status_filter()?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("civic").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CivicConfig::default();
        config.validate().expect("defaults should validate");
        assert_eq!(config.storage.key, "civicIssues");
        assert!(config.general.seed_sample_data);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = CivicConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.storage.quota_bytes, 0);
            assert_eq!(config.general.default_status, "all");
            Ok(())
        });
    }

    #[test]
    fn empty_key_is_rejected() {
        let mut config = CivicConfig::default();
        config.storage.key = "  ".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("storage.key"));
    }

    #[test]
    fn key_with_separator_is_rejected() {
        let mut config = CivicConfig::default();
        config.storage.key = "../escape".into();
        assert!(config.validate().is_err());
    }
}
