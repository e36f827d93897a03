//! Application configuration management.
//!
//! Configuration is merged from the built-in category presets, an optional
//! TOML file and environment variables, in increasing order of precedence.

use crate::{catalog::Catalog, preset::CategoryPreset};
use config::{Config, Environment, builder::DefaultState};
use pgs_core::models::{
    DEFAULT_GAP_THRESHOLD, DEFAULT_MIN_PRICE, DEFAULT_PENALTY_FACTOR,
    DEFAULT_PRIVATE_LABEL_BASE_FACTOR,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The assumptions shared by every category
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelConfig {
    /// The private label's list price as a fraction of the brand's
    pub private_label_base_factor: f64,
    /// The price ratio above which the brand loses demand
    pub gap_threshold: f64,
    /// The share of demand the brand keeps past the threshold
    pub penalty_factor: f64,
    /// The floor for any transactional price
    pub min_price: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            private_label_base_factor: DEFAULT_PRIVATE_LABEL_BASE_FACTOR,
            gap_threshold: DEFAULT_GAP_THRESHOLD,
            penalty_factor: DEFAULT_PENALTY_FACTOR,
            min_price: DEFAULT_MIN_PRICE,
        }
    }
}

/// The main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Model constants
    #[serde(default)]
    pub model: ModelConfig,

    /// Category presets, keyed by the name used on the command line
    #[serde(default = "Catalog::builtin")]
    pub presets: Catalog,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            presets: Catalog::builtin(),
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. The config file, if given
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern
    /// `PGS_<SECTION>__<KEY>` to `<section>.<key>`:
    ///
    /// ```bash
    /// # Soften the gap penalty
    /// export PGS_MODEL__PENALTY_FACTOR=0.8
    ///
    /// # Relabel a category
    /// export PGS_PRESETS__SAUCES__LABEL="Pasta Sauces"
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = Self::defaults()?;

        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        config = config.add_source(
            Environment::with_prefix("PGS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Ok(config.build()?.try_deserialize()?)
    }

    /// The preset stored under `key`
    pub fn preset(&self, key: &str) -> Result<&CategoryPreset, crate::PresetError> {
        self.presets.lookup(key)
    }

    fn defaults() -> anyhow::Result<config::ConfigBuilder<DefaultState>> {
        Ok(Config::builder().add_source(Config::try_from(&Self::default())?))
    }
}

#[cfg(test)]
pub(crate) fn from_toml(toml: &str) -> AppConfig {
    AppConfig::defaults()
        .unwrap()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}
