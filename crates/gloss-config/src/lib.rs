//! # gloss-config
//!
//! Layered configuration loading for gloss using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GLOSS_*` prefix, `__` as separator)
//! 2. Project-level `.gloss/config.toml`
//! 3. User-level `~/.config/gloss/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GLOSS_EXPORT__PRETTY` -> `export.pretty`,
//! `GLOSS_EXPORT__SIZE_THRESHOLD_BYTES` -> `export.size_threshold_bytes`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use gloss_config::GlossConfig;
//!
//! let config = GlossConfig::load_with_dotenv().expect("config");
//! if config.export.pretty {
//!     println!("exports will be indented");
//! }
//! ```

mod error;
mod export;
mod general;

pub use error::ConfigError;
pub use export::ExportConfig;
pub use general::{GeneralConfig, ReportFormat};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GlossConfig {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GlossConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse, or
    /// `ConfigError::InvalidValue` if [`Self::validate`] rejects the result.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
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
        let local_path = PathBuf::from(".gloss/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("GLOSS_").split("__"))
    }

    /// Reject values that parse but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.export.size_threshold_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "export.size_threshold_bytes".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gloss").join("config.toml"))
    }
}
