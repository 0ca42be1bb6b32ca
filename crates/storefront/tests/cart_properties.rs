//! Behavioral properties of the shared cart, exercised through the public
//! handle the screens use.

#![allow(clippy::unwrap_used)]

use herbloom_core::{Money, Product, ProductId};
use herbloom_storefront::{ShippingPolicy, SharedCart};

fn product(id: &str, name: &str, cents: i64) -> Product {
    Product::new(id, name, Money::from_cents(cents), "https://example.com/img.jpg")
}

#[test]
fn adds_from_different_screens_merge_into_one_line() {
    let cart = SharedCart::new(ShippingPolicy::default());
    let product_screen = cart.clone();
    let home_screen = cart.clone();

    let tea = product("2", "Chamomile Tea Blend", 12_50);
    product_screen.add(&tea, 2);
    home_screen.add(&tea, 3);

    let summary = cart.summary();
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.lines.first().map(|l| l.quantity), Some(5));
}

#[test]
fn item_count_is_units_not_distinct_lines() {
    let cart = SharedCart::new(ShippingPolicy::default());
    cart.add(&product("a", "Aloe Vera Gel", 16_50), 2);
    cart.add(&product("b", "Peppermint Tea", 11_25), 1);

    let summary = cart.summary();
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.lines.len(), 2);
}

#[test]
fn update_to_zero_or_negative_removes_the_line() {
    let cart = SharedCart::new(ShippingPolicy::default());
    let tea = product("2", "Chamomile Tea Blend", 12_50);

    cart.add(&tea, 4);
    cart.update_quantity(&tea.id, 0);
    assert!(cart.is_empty());

    cart.add(&tea, 4);
    cart.update_quantity(&tea.id, -5);
    assert!(cart.is_empty());
}

#[test]
fn removal_returns_cart_to_pre_add_state() {
    let cart = SharedCart::new(ShippingPolicy::default());
    let before = cart.summary();

    let gel = product("7", "Aloe Vera Gel", 16_50);
    cart.add_one(&gel);
    cart.remove(&gel.id);

    let after = cart.summary();
    assert_eq!(after, before);
    assert_eq!(after.item_count, 0);
    assert_eq!(after.subtotal, Money::ZERO);
}

#[test]
fn clear_on_empty_cart_is_a_noop() {
    let cart = SharedCart::new(ShippingPolicy::default());
    cart.clear();
    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.summary(), SharedCart::new(ShippingPolicy::default()).summary());
}

#[test]
fn totals_for_a_mixed_cart() {
    let cart = SharedCart::new(ShippingPolicy::default());
    cart.add(&product("e", "Echinacea Plant", 15_99), 2);
    cart.add(&product("l", "Lavender Essential Oil", 18_99), 1);

    let summary = cart.summary();
    assert_eq!(summary.subtotal, Money::from_cents(50_97));
    assert_eq!(summary.shipping_fee, Money::ZERO);
    assert_eq!(summary.total, Money::from_cents(50_97));
}

#[test]
fn shipping_fee_applies_just_below_the_threshold() {
    let cart = SharedCart::new(ShippingPolicy::default());
    cart.add(&product("a", "Gift Basket", 49_99), 1);

    let summary = cart.summary();
    assert_eq!(summary.shipping_fee, Money::from_cents(5_99));
    assert_eq!(summary.total, Money::from_cents(55_98));
}

#[test]
fn shipping_is_free_exactly_at_the_threshold() {
    let cart = SharedCart::new(ShippingPolicy::default());
    cart.add(&product("a", "Gift Basket", 25_00), 2);

    let summary = cart.summary();
    assert_eq!(summary.subtotal, Money::from_cents(50_00));
    assert_eq!(summary.shipping_fee, Money::ZERO);
}

#[test]
fn custom_shipping_policy_is_honored() {
    let policy = ShippingPolicy::new(Money::from_cents(9_95), Money::from_cents(75_00)).unwrap();
    let cart = SharedCart::new(policy);
    cart.add(&product("a", "Gift Basket", 50_00), 1);

    let summary = cart.summary();
    assert_eq!(summary.shipping_fee, Money::from_cents(9_95));
    assert_eq!(summary.total, Money::from_cents(59_95));
}

#[test]
fn badge_subscriber_tracks_every_mutation() {
    let cart = SharedCart::new(ShippingPolicy::default());
    let mut badge = cart.subscribe();
    assert_eq!(badge.borrow().item_count, 0);

    let tea = product("2", "Chamomile Tea Blend", 12_50);
    cart.add(&tea, 2);
    assert_eq!(badge.borrow_and_update().item_count, 2);

    cart.update_quantity(&tea.id, 6);
    assert_eq!(badge.borrow_and_update().item_count, 6);

    cart.remove(&tea.id);
    assert_eq!(badge.borrow_and_update().item_count, 0);
}

#[test]
fn cart_lines_are_price_snapshots() {
    let cart = SharedCart::new(ShippingPolicy::default());
    let mut oil = product("3", "Hemp Seed Oil", 19_95);
    cart.add_one(&oil);

    // Vendor raises the price after the shopper added the product.
    oil.price = Money::from_cents(29_95);

    let summary = cart.summary();
    assert_eq!(
        summary.lines.first().map(|l| l.unit_price),
        Some(Money::from_cents(19_95))
    );
    assert_eq!(summary.subtotal, Money::from_cents(19_95));
}

#[test]
fn update_for_unknown_product_never_creates_a_line() {
    let cart = SharedCart::new(ShippingPolicy::default());
    cart.update_quantity(&ProductId::new("ghost"), 3);
    assert!(cart.is_empty());
}
