//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HERBLOOM_SHIPPING_FLAT_FEE` - Flat shipping fee in dollars (default: 5.99)
//! - `HERBLOOM_FREE_SHIPPING_THRESHOLD` - Subtotal at which shipping becomes
//!   free (default: 50.00)
//! - `HERBLOOM_CATALOG_PATH` - Path to a catalog JSON document (default:
//!   bundled sample catalog)

use std::path::PathBuf;

use thiserror::Error;

use herbloom_core::Money;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid shipping policy: {0}")]
    InvalidShippingPolicy(String),
}

/// Shipping fee policy: a flat fee below a free-shipping threshold.
///
/// The threshold is inclusive: an order whose subtotal is exactly the
/// threshold ships free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    flat_fee: Money,
    free_threshold: Money,
}

impl ShippingPolicy {
    /// Create a shipping policy.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidShippingPolicy` if either amount is
    /// negative.
    pub fn new(flat_fee: Money, free_threshold: Money) -> Result<Self, ConfigError> {
        if flat_fee < Money::ZERO {
            return Err(ConfigError::InvalidShippingPolicy(format!(
                "flat fee must not be negative, got {flat_fee}"
            )));
        }
        if free_threshold < Money::ZERO {
            return Err(ConfigError::InvalidShippingPolicy(format!(
                "free-shipping threshold must not be negative, got {free_threshold}"
            )));
        }
        Ok(Self {
            flat_fee,
            free_threshold,
        })
    }

    /// The flat fee charged below the threshold.
    #[must_use]
    pub const fn flat_fee(&self) -> Money {
        self.flat_fee
    }

    /// The subtotal at which shipping becomes free.
    #[must_use]
    pub const fn free_threshold(&self) -> Money {
        self.free_threshold
    }

    /// Fee charged for an order subtotal: the flat fee below the threshold,
    /// zero at or above it.
    #[must_use]
    pub fn fee_for(&self, subtotal: Money) -> Money {
        if subtotal >= self.free_threshold {
            Money::ZERO
        } else {
            self.flat_fee
        }
    }

    /// How much more spend unlocks free shipping, or `None` if the subtotal
    /// already qualifies. Drives the "add $X more for free shipping" nudge.
    #[must_use]
    pub fn remaining_for_free(&self, subtotal: Money) -> Option<Money> {
        if subtotal >= self.free_threshold {
            None
        } else {
            Some(self.free_threshold - subtotal)
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            flat_fee: Money::from_cents(5_99),
            free_threshold: Money::from_cents(50_00),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone, Default)]
pub struct StorefrontConfig {
    /// Shipping fee policy applied to cart totals.
    pub shipping: ShippingPolicy,
    /// Catalog JSON document to load instead of the bundled sample.
    pub catalog_path: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but fails to parse or
    /// validate.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = ShippingPolicy::default();
        let flat_fee = match std::env::var("HERBLOOM_SHIPPING_FLAT_FEE") {
            Ok(raw) => parse_money_var("HERBLOOM_SHIPPING_FLAT_FEE", &raw)?,
            Err(_) => defaults.flat_fee,
        };
        let free_threshold = match std::env::var("HERBLOOM_FREE_SHIPPING_THRESHOLD") {
            Ok(raw) => parse_money_var("HERBLOOM_FREE_SHIPPING_THRESHOLD", &raw)?,
            Err(_) => defaults.free_threshold,
        };
        let shipping = ShippingPolicy::new(flat_fee, free_threshold)?;

        let catalog_path = std::env::var("HERBLOOM_CATALOG_PATH")
            .ok()
            .map(PathBuf::from);

        Ok(Self {
            shipping,
            catalog_path,
        })
    }
}

/// Parse a dollar amount from an environment variable value.
fn parse_money_var(name: &str, raw: &str) -> Result<Money, ConfigError> {
    raw.trim()
        .parse::<Money>()
        .map_err(|e| ConfigError::InvalidEnvVar(name.to_owned(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_store_rates() {
        let policy = ShippingPolicy::default();
        assert_eq!(policy.flat_fee(), Money::from_cents(5_99));
        assert_eq!(policy.free_threshold(), Money::from_cents(50_00));
    }

    #[test]
    fn test_fee_below_threshold() {
        let policy = ShippingPolicy::default();
        assert_eq!(policy.fee_for(Money::from_cents(49_99)), Money::from_cents(5_99));
        assert_eq!(policy.fee_for(Money::ZERO), Money::from_cents(5_99));
    }

    #[test]
    fn test_fee_free_at_and_above_threshold() {
        let policy = ShippingPolicy::default();
        assert_eq!(policy.fee_for(Money::from_cents(50_00)), Money::ZERO);
        assert_eq!(policy.fee_for(Money::from_cents(50_97)), Money::ZERO);
    }

    #[test]
    fn test_remaining_for_free() {
        let policy = ShippingPolicy::default();
        assert_eq!(
            policy.remaining_for_free(Money::from_cents(30_97)),
            Some(Money::from_cents(19_03))
        );
        assert_eq!(policy.remaining_for_free(Money::from_cents(50_00)), None);
    }

    #[test]
    fn test_negative_amounts_rejected() {
        assert!(ShippingPolicy::new(Money::from_cents(-1), Money::ZERO).is_err());
        assert!(ShippingPolicy::new(Money::ZERO, Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_parse_money_var() {
        assert_eq!(
            parse_money_var("X", "5.99").unwrap(),
            Money::from_cents(5_99)
        );
        assert_eq!(
            parse_money_var("X", " 50.00 ").unwrap(),
            Money::from_cents(50_00)
        );
        assert!(matches!(
            parse_money_var("X", "five dollars"),
            Err(ConfigError::InvalidEnvVar(name, _)) if name == "X"
        ));
    }
}
