//! Shared cart handle with change notification.
//!
//! The surrounding app has one cart reachable from several screens at
//! once: the tab badge, the cart screen, and checkout all watch the same
//! state. [`SharedCart`] is that injection point - a cheaply cloneable
//! handle over a single [`CartStore`], with a
//! [`tokio::sync::watch`] channel that publishes a fresh [`CartSummary`]
//! after every mutation.
//!
//! Mutations run to completion under the lock before the summary is
//! published, so a subscriber never observes a half-applied operation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use herbloom_core::{Product, ProductId};

use crate::config::ShippingPolicy;

use super::store::{CartStore, CartSummary};

/// Cloneable handle to the session's one cart.
#[derive(Debug, Clone)]
pub struct SharedCart {
    inner: Arc<SharedCartInner>,
}

#[derive(Debug)]
struct SharedCartInner {
    store: Mutex<CartStore>,
    summaries: watch::Sender<CartSummary>,
}

impl SharedCart {
    /// Create an empty shared cart with the given shipping policy.
    #[must_use]
    pub fn new(policy: ShippingPolicy) -> Self {
        let (summaries, _) = watch::channel(CartSummary::default());
        Self {
            inner: Arc::new(SharedCartInner {
                store: Mutex::new(CartStore::new(policy)),
                summaries,
            }),
        }
    }

    /// Add `quantity` units of a product. See [`CartStore::add`].
    pub fn add(&self, product: &Product, quantity: u32) {
        self.mutate(|store| store.add(product, quantity));
    }

    /// Add a single unit of a product.
    pub fn add_one(&self, product: &Product) {
        self.mutate(|store| store.add_one(product));
    }

    /// Remove the line for a product. See [`CartStore::remove`].
    pub fn remove(&self, product_id: &ProductId) {
        self.mutate(|store| store.remove(product_id));
    }

    /// Set the quantity of an existing line. See
    /// [`CartStore::update_quantity`].
    pub fn update_quantity(&self, product_id: &ProductId, quantity: i32) {
        self.mutate(|store| store.update_quantity(product_id, quantity));
    }

    /// Remove every line. Idempotent.
    pub fn clear(&self) {
        self.mutate(CartStore::clear);
    }

    /// Subscribe to cart changes.
    ///
    /// The receiver always holds the latest summary; an observer that
    /// misses intermediate states still renders the current one.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CartSummary> {
        self.inner.summaries.subscribe()
    }

    /// Current snapshot of the cart.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        self.lock().summary()
    }

    /// Total units in the cart (the tab badge number).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lock().item_count()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn mutate(&self, op: impl FnOnce(&mut CartStore)) {
        let summary = {
            let mut store = self.lock();
            op(&mut store);
            store.summary()
        };
        self.inner.summaries.send_replace(summary);
    }

    fn lock(&self) -> MutexGuard<'_, CartStore> {
        // Recover the guard if a previous holder panicked; the aggregate is
        // never left half-mutated between operations.
        self.inner
            .store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use herbloom_core::Money;

    use super::*;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, format!("Product {id}"), Money::from_cents(cents), "img")
    }

    #[test]
    fn test_initial_summary_is_empty() {
        let cart = SharedCart::new(ShippingPolicy::default());
        let rx = cart.subscribe();
        assert!(rx.borrow().lines.is_empty());
        assert_eq!(rx.borrow().total, Money::ZERO);
    }

    #[test]
    fn test_subscribers_see_each_mutation() {
        let cart = SharedCart::new(ShippingPolicy::default());
        let mut badge = cart.subscribe();

        cart.add(&product("a", 10_00), 2);
        assert!(badge.has_changed().unwrap());
        assert_eq!(badge.borrow_and_update().item_count, 2);

        cart.update_quantity(&ProductId::new("a"), 5);
        assert_eq!(badge.borrow_and_update().item_count, 5);

        cart.clear();
        assert!(badge.borrow_and_update().lines.is_empty());
    }

    #[test]
    fn test_clones_share_one_cart() {
        let cart = SharedCart::new(ShippingPolicy::default());
        let screen = cart.clone();

        cart.add_one(&product("a", 10_00));
        screen.add_one(&product("a", 10_00));

        assert_eq!(cart.item_count(), 2);
        assert_eq!(screen.summary().lines.len(), 1);
    }

    #[test]
    fn test_late_subscriber_gets_current_state() {
        let cart = SharedCart::new(ShippingPolicy::default());
        cart.add(&product("a", 10_00), 3);

        let rx = cart.subscribe();
        assert_eq!(rx.borrow().item_count, 3);
    }
}
