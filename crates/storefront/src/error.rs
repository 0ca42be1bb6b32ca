//! Unified error handling for the storefront library.
//!
//! Each module defines its own error enum; `AppError` aggregates them so
//! callers that drive a whole session can use one `Result` alias.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::orders::OrderError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog loading failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Checkout failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Order book operation failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(CheckoutError::EmptyCart);
        assert_eq!(
            err.to_string(),
            "Checkout error: cannot place an order from an empty cart"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: AppError = ConfigError::InvalidShippingPolicy("negative fee".to_owned()).into();
        assert!(matches!(err, AppError::Config(_)));
    }
}
