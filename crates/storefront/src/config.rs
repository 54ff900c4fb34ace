//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FRESH_FARM_CATALOG` - Path to a JSON catalog (default: built-in demo products)
//! - `FRESH_FARM_IMAGE_BASE` - Placeholder image base URL (default: `https://placehold.co/600x400`)
//! - `FRESH_FARM_DEAL_COUNTDOWN` - Deal countdown start as `H:M:S` (default: 10:45:30)
//! - `FRESH_FARM_TICK_MS` - Countdown tick period in milliseconds (default: 1000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::catalog::{Catalog, CatalogError, DEFAULT_IMAGE_BASE};
use crate::countdown::Countdown;
use crate::deal::Deal;

const DEFAULT_DEAL_COUNTDOWN: &str = "10:45:30";
const DEFAULT_TICK_MS: &str = "1000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// JSON catalog to load instead of the demo products
    pub catalog_path: Option<PathBuf>,
    /// Base URL for generated product images
    pub image_base: String,
    /// Deal countdown start
    pub deal_countdown: Countdown,
    /// Countdown tick period
    pub tick: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            deal_countdown: Countdown::new(10, 45, 30),
            tick: Duration::from_secs(1),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` for unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let deal_countdown = get_or_default("FRESH_FARM_DEAL_COUNTDOWN", DEFAULT_DEAL_COUNTDOWN)
            .parse::<Countdown>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("FRESH_FARM_DEAL_COUNTDOWN".to_string(), e.to_string())
            })?;

        let tick_ms = get_or_default("FRESH_FARM_TICK_MS", DEFAULT_TICK_MS)
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar("FRESH_FARM_TICK_MS".to_string(), e.to_string()))?;
        if tick_ms == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "FRESH_FARM_TICK_MS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            catalog_path: non_empty("FRESH_FARM_CATALOG").map(PathBuf::from),
            image_base: get_or_default("FRESH_FARM_IMAGE_BASE", DEFAULT_IMAGE_BASE),
            deal_countdown,
            tick: Duration::from_millis(tick_ms),
            sentry_dsn: non_empty("SENTRY_DSN"),
            sentry_environment: non_empty("SENTRY_ENVIRONMENT"),
        })
    }

    /// The deal of the day with the configured countdown.
    #[must_use]
    pub fn deal(&self) -> Deal {
        Deal::of_the_day().with_countdown(self.deal_countdown)
    }

    /// Build the catalog: the configured JSON file, or the demo products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the configured file cannot be loaded.
    pub fn catalog(&self, deal: &Deal) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path, &self.image_base, deal),
            None => Ok(Catalog::demo(&self.image_base, deal)),
        }
    }
}
