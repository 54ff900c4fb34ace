//! Unified error handling.
//!
//! Storefront transitions never fail; they report through notices. The
//! errors here cover startup (configuration, catalog loading) and the
//! terminal front end's I/O.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be built.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use fresh_farm_core::ProductId;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Internal("countdown task panicked".to_string());
        assert_eq!(err.to_string(), "Internal error: countdown task panicked");

        let err = AppError::from(CatalogError::DuplicateId(ProductId::new("p1")));
        assert_eq!(err.to_string(), "Catalog error: duplicate product id: p1");

        let err = AppError::from(ConfigError::InvalidEnvVar(
            "FRESH_FARM_TICK_MS".to_string(),
            "must be greater than zero".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Config error: Invalid environment variable FRESH_FARM_TICK_MS: must be greater than zero"
        );
    }
}
