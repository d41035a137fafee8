//! Configuration file support for the clinic booking tools.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/clinic/config.toml`.

use crate::{catalog, Catalog, Error, Result, Treatment, DEFAULT_HORIZON};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub booking: BookingConfig,

    #[serde(default)]
    pub catalog: Catalog,
}

/// Booking flow parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BookingConfig {
    /// How many bookable weekdays to offer
    #[serde(default = "default_horizon_days")]
    pub horizon_days: usize,

    /// Name of the treatment new drafts start with
    #[serde(default)]
    pub default_treatment: Option<String>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            default_treatment: None,
        }
    }
}

fn default_horizon_days() -> usize {
    DEFAULT_HORIZON
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = match Self::default_config_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                return Ok(Self::default());
            }
        };
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::Config("Unable to determine config directory".into()))?;
        Ok(base.join("clinic").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check values that parse fine but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.booking.horizon_days == 0 {
            return Err(Error::Config("booking.horizon_days must be at least 1".into()));
        }

        if !self.catalog.categories.is_empty() {
            let errors = self.catalog.validate();
            if !errors.is_empty() {
                return Err(Error::CatalogValidation(errors.join("; ")));
            }
        }

        Ok(())
    }

    /// The configured catalog, or the built-in one when none is set
    pub fn catalog(&self) -> &Catalog {
        if self.catalog.categories.is_empty() {
            catalog::get_default_catalog()
        } else {
            &self.catalog
        }
    }

    /// Resolve the configured default treatment against `catalog`
    ///
    /// Falls back to the general consultation when unset or not found.
    pub fn default_treatment(&self, catalog: &Catalog) -> Treatment {
        match self.booking.default_treatment.as_deref() {
            Some(name) => match catalog.find_treatment(name) {
                Some(t) => t.clone(),
                None => {
                    tracing::warn!(
                        "Default treatment {:?} not in catalog, using consultation",
                        name
                    );
                    catalog::default_treatment()
                }
            },
            None => catalog::default_treatment(),
        }
    }
}
