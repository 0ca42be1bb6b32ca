//! Checkout: turn the cart into a placed order.
//!
//! Checkout reads the cart's ordered lines and totals, records an order in
//! `Processing` status, and clears the cart. Payment capture and inventory
//! reservation are the backend's concern and are not modeled here.

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use herbloom_core::{OrderId, OrderStatus};

use crate::cart::SharedCart;
use crate::orders::{Customer, Order, OrderBook, OrderLine};

/// Errors that can occur when placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart had no lines to order.
    #[error("cannot place an order from an empty cart")]
    EmptyCart,
}

/// Place an order from the current cart contents.
///
/// On success the order is recorded in the book and the cart is cleared.
/// On failure the cart is left untouched.
///
/// # Errors
///
/// Returns `CheckoutError::EmptyCart` if the cart has no lines.
pub fn place_order(
    cart: &SharedCart,
    orders: &mut OrderBook,
    customer: Customer,
) -> Result<OrderId, CheckoutError> {
    let summary = cart.summary();
    if summary.lines.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let order = Order {
        id: OrderId::generate(),
        customer,
        lines: summary.lines.iter().map(OrderLine::from).collect(),
        subtotal: summary.subtotal,
        shipping_fee: summary.shipping_fee,
        total: summary.total,
        status: OrderStatus::Processing,
        placed_at: Utc::now(),
    };
    let id = order.id;
    info!(order_id = %id, total = %order.total, lines = order.lines.len(), "order placed");

    orders.record(order);
    cart.clear();
    Ok(id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use herbloom_core::{CustomerId, Money, Product};

    use crate::config::ShippingPolicy;

    use super::*;

    fn customer() -> Customer {
        Customer {
            id: CustomerId::new("cust-1"),
            name: "Rosa Marchetti".to_owned(),
            email: "rosa@example.com".to_owned(),
            address: "12 Garden Lane".to_owned(),
        }
    }

    #[test]
    fn test_place_order_records_and_clears() {
        let cart = SharedCart::new(ShippingPolicy::default());
        let mut orders = OrderBook::new();
        cart.add(
            &Product::new("1", "Echinacea Plant", Money::from_cents(15_99), "img"),
            2,
        );
        cart.add(
            &Product::new("2", "Lavender Essential Oil", Money::from_cents(18_99), "img"),
            1,
        );

        let id = place_order(&cart, &mut orders, customer()).unwrap();

        let order = orders.get(id).unwrap();
        assert_eq!(order.subtotal, Money::from_cents(50_97));
        assert_eq!(order.shipping_fee, Money::ZERO);
        assert_eq!(order.total, Money::from_cents(50_97));
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.lines.first().map(|l| l.quantity), Some(2));

        assert!(cart.is_empty());
    }

    #[test]
    fn test_order_preserves_cart_line_order() {
        let cart = SharedCart::new(ShippingPolicy::default());
        let mut orders = OrderBook::new();
        cart.add_one(&Product::new("b", "B", Money::from_cents(1_00), "img"));
        cart.add_one(&Product::new("a", "A", Money::from_cents(2_00), "img"));

        let id = place_order(&cart, &mut orders, customer()).unwrap();
        let names: Vec<&str> = orders
            .get(id)
            .unwrap()
            .lines
            .iter()
            .map(|line| line.name.as_str())
            .collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let cart = SharedCart::new(ShippingPolicy::default());
        let mut orders = OrderBook::new();

        assert!(matches!(
            place_order(&cart, &mut orders, customer()),
            Err(CheckoutError::EmptyCart)
        ));
        assert!(orders.is_empty());
    }

    #[test]
    fn test_below_threshold_order_carries_shipping_fee() {
        let cart = SharedCart::new(ShippingPolicy::default());
        let mut orders = OrderBook::new();
        cart.add(
            &Product::new("2", "Chamomile Tea Blend", Money::from_cents(12_50), "img"),
            1,
        );

        let id = place_order(&cart, &mut orders, customer()).unwrap();
        let order = orders.get(id).unwrap();
        assert_eq!(order.shipping_fee, Money::from_cents(5_99));
        assert_eq!(order.total, Money::from_cents(18_49));
    }
}
