//! Herbloom Storefront - shopping session library.
//!
//! Everything a shopping session needs, in memory:
//!
//! - [`catalog`] - product catalog with search, category filters, and
//!   vendor product management
//! - [`cart`] - the shared shopping cart: line items, mutation operations,
//!   derived totals, and change notification for observers
//! - [`checkout`] - turns the cart into a placed order and clears it
//! - [`orders`] - the order book and vendor status updates
//! - [`config`] - environment-driven configuration (shipping policy,
//!   catalog source)
//! - [`state`] - the shared session state injected into screens
//!
//! # Architecture
//!
//! State lives for the session only - there is no database and no remote
//! backend here. Auth, payment, and persistence belong to the surrounding
//! application; this crate owns the storefront semantics they compose
//! around.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod orders;
pub mod state;

pub use cart::{CartLine, CartStore, CartSummary, SharedCart};
pub use catalog::{Catalog, CatalogError};
pub use checkout::CheckoutError;
pub use config::{ConfigError, ShippingPolicy, StorefrontConfig};
pub use error::{AppError, Result};
pub use orders::{Customer, Order, OrderBook, OrderError, OrderLine};
pub use state::AppState;
