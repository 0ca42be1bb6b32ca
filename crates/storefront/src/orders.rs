//! Placed orders and the vendor's order book.
//!
//! Orders are created by checkout and live in memory for the session. The
//! vendor dashboard lists them, filters by status, and moves them through
//! fulfillment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use herbloom_core::{CustomerId, Money, OrderId, OrderStatus, ProductId};

use crate::cart::CartLine;

/// Errors from order book operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// No order with the given ID.
    #[error("order not found: {0}")]
    NotFound(OrderId),

    /// The requested status change is not allowed.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },
}

/// Customer details captured on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub address: String,
}

/// A line on a placed order: the cart line frozen at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub image: String,
    pub quantity: u32,
}

impl OrderLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.clone(),
            name: line.name.clone(),
            unit_price: line.unit_price,
            image: line.image.clone(),
            quantity: line.quantity,
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    /// Lines in the order they appeared in the cart.
    pub lines: Vec<OrderLine>,
    pub subtotal: Money,
    pub shipping_fee: Money,
    pub total: Money,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

/// In-memory order book, newest order first.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Create an empty order book.
    #[must_use]
    pub const fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Record a freshly placed order at the front of the book.
    pub(crate) fn record(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// All orders, newest first.
    #[must_use]
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Number of orders in the book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the book holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Look up an order by ID.
    #[must_use]
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Orders in a given status, newest first (the vendor dashboard tabs).
    #[must_use]
    pub fn by_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.status == status)
            .collect()
    }

    /// Move an order to a new fulfillment status.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` for an unknown ID and
    /// `OrderError::InvalidTransition` if the order's current status does
    /// not admit the change (terminal states are frozen, no skipping
    /// straight to `Delivered`).
    pub fn update_status(&mut self, id: OrderId, next: OrderStatus) -> Result<(), OrderError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or(OrderError::NotFound(id))?;

        if !order.status.can_transition_to(next) {
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to: next,
            });
        }

        info!(order_id = %id, from = %order.status, to = %next, "order status updated");
        order.status = next;
        Ok(())
    }
}
