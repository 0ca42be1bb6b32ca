//! Cart aggregate: mutation operations and derived totals.

use serde::Serialize;
use tracing::{debug, warn};

use herbloom_core::{Money, Product, ProductId};

use crate::config::ShippingPolicy;

use super::line::CartLine;

/// The cart aggregate.
///
/// Lines are kept in insertion order (first-added product first) with at
/// most one line per product. Every surviving line has `quantity >= 1`;
/// an operation that would take a quantity to zero or below removes the
/// line instead.
///
/// Totals are recomputed from the lines on every query, never cached.
#[derive(Debug, Clone)]
pub struct CartStore {
    lines: Vec<CartLine>,
    policy: ShippingPolicy,
}

impl CartStore {
    /// Create an empty cart with the given shipping policy.
    #[must_use]
    pub const fn new(policy: ShippingPolicy) -> Self {
        Self {
            lines: Vec::new(),
            policy,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add `quantity` units of a product.
    ///
    /// If the product is already in the cart, the existing line's quantity
    /// is incremented (repeated adds accumulate). Otherwise a new line is
    /// appended, snapshotting the product's name, price, and image.
    ///
    /// A non-positive quantity would break the line invariant, so
    /// `quantity == 0` is ignored with a warning.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            warn!(product_id = %product.id, "ignoring add of zero quantity");
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity = line.quantity.saturating_add(quantity);
            debug!(product_id = %product.id, quantity = line.quantity, "incremented cart line");
        } else {
            self.lines.push(CartLine::snapshot(product, quantity));
            debug!(product_id = %product.id, quantity, "added cart line");
        }
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product: &Product) {
        self.add(product, 1);
    }

    /// Remove the line for a product. No-op if the product is not in the
    /// cart.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| &line.product_id != product_id);
    }

    /// Set the quantity of an existing line.
    ///
    /// A target of zero or below removes the line, preserving the
    /// `quantity >= 1` invariant. If the product is not in the cart this is
    /// a no-op: lines are only ever created through [`CartStore::add`].
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i32) {
        match u32::try_from(quantity) {
            Ok(quantity) if quantity > 0 => {
                if let Some(line) = self
                    .lines
                    .iter_mut()
                    .find(|line| &line.product_id == product_id)
                {
                    line.quantity = quantity;
                    debug!(%product_id, quantity, "updated cart line quantity");
                } else {
                    debug!(%product_id, "quantity update for product not in cart");
                }
            }
            _ => self.remove(product_id),
        }
    }

    /// Remove every line. Idempotent.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    // =========================================================================
    // Queries (recomputed on demand)
    // =========================================================================

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for a product, if present.
    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product_id == product_id)
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines (the tab badge number), not the number
    /// of distinct products.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of line totals.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Shipping fee for the current subtotal. An empty cart ships nothing
    /// and carries no fee.
    #[must_use]
    pub fn shipping_fee(&self) -> Money {
        if self.lines.is_empty() {
            Money::ZERO
        } else {
            self.policy.fee_for(self.subtotal())
        }
    }

    /// Subtotal plus shipping fee.
    #[must_use]
    pub fn total(&self) -> Money {
        self.subtotal() + self.shipping_fee()
    }

    /// The shipping policy the cart prices against.
    #[must_use]
    pub const fn policy(&self) -> &ShippingPolicy {
        &self.policy
    }

    /// Point-in-time view of the whole cart.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.lines.clone(),
            item_count: self.item_count(),
            subtotal: self.subtotal(),
            shipping_fee: self.shipping_fee(),
            total: self.total(),
        }
    }
}

/// A snapshot of the cart published to observers after each mutation.
///
/// This is a notification payload: queries on the store always recompute
/// from the live lines.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CartSummary {
    /// Cart lines in insertion order.
    pub lines: Vec<CartLine>,
    /// Total units across all lines.
    pub item_count: u32,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping fee for the subtotal.
    pub shipping_fee: Money,
    /// Subtotal plus shipping.
    pub total: Money,
}
