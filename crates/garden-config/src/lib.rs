//! # garden-config
//!
//! Layered configuration loading for garden impact analysis using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GARDEN_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.garden/config.toml`
//! 4. User-level `~/.config/garden/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GARDEN_CRITERIA__WEIGHTS__SOCIAL_IMPACT` -> `criteria.weights.social_impact`,
//! `GARDEN_BATCH__DELAY_MS` -> `batch.delay_ms`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use garden_config::GardenConfig;
//!
//! let config = GardenConfig::load_with_dotenv(None).expect("config");
//! println!("business weight: {}", config.criteria.weights.business_value);
//! ```

mod batch;
mod cache;
mod criteria;
mod error;
mod general;
mod keywords;

pub use batch::BatchConfig;
pub use cache::CacheConfig;
pub use criteria::{CriteriaConfig, CriterionDescriptor, DimensionWeights, IntraWeights};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use keywords::{KeywordOverride, KeywordsConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GardenConfig {
    #[serde(default)]
    pub criteria: CriteriaConfig,
    #[serde(default)]
    pub keywords: KeywordsConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GardenConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading. The result is validated before it is returned.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit
            && !path.is_file()
        {
            return Err(ConfigError::InvalidValue {
                field: String::from("--config"),
                reason: format!("file not found: {}", path.display()),
            });
        }
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".garden/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("GARDEN_").split("__"));

        figment
    }

    /// Check every section that can be misconfigured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.criteria.validate()?;
        self.keywords.validate()?;
        self.cache.validate()?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("garden").join("config.toml"))
    }
}
