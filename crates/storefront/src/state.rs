//! Session state shared across screens.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use herbloom_core::OrderId;

use crate::cart::SharedCart;
use crate::catalog::Catalog;
use crate::checkout::{self, CheckoutError};
use crate::config::StorefrontConfig;
use crate::orders::{Customer, OrderBook};

/// Session state shared across all screens.
///
/// This struct is cheaply cloneable via `Arc` and is the single injection
/// point for the catalog, the shared cart, and the order book - screens
/// receive a handle instead of reaching for a global.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: RwLock<Catalog>,
    cart: SharedCart,
    orders: Mutex<OrderBook>,
}

impl AppState {
    /// Create session state from configuration and a loaded catalog.
    ///
    /// The cart starts empty and prices against the configured shipping
    /// policy.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        let cart = SharedCart::new(config.shipping);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: RwLock::new(catalog),
                cart,
                orders: Mutex::new(OrderBook::new()),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Read access to the catalog.
    pub fn catalog(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner
            .catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the catalog (vendor product management).
    pub fn catalog_mut(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner
            .catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a handle to the session's shared cart.
    #[must_use]
    pub fn cart(&self) -> &SharedCart {
        &self.inner.cart
    }

    /// Access the order book.
    pub fn orders(&self) -> MutexGuard<'_, OrderBook> {
        self.inner
            .orders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Place an order from the current cart contents, clearing the cart on
    /// success.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if the cart has no lines.
    pub fn place_order(&self, customer: Customer) -> Result<OrderId, CheckoutError> {
        let mut orders = self.orders();
        checkout::place_order(&self.inner.cart, &mut orders, customer)
    }
}
