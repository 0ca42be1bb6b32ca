//! Scripted demo shopping session.
//!
//! Walks the library end to end: browse the catalog, fill the cart while a
//! subscriber watches the totals, check out, and move the order through
//! fulfillment.

use herbloom_core::{CustomerId, OrderStatus};
use herbloom_storefront::{AppState, CartSummary, Customer};

/// Run the scripted session against the given state.
pub fn run(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    let mut observer = state.cart().subscribe();

    // Pick two products the way the screens would: one from search, one
    // from a category shelf.
    let lavender = state
        .catalog()
        .search("lavender")
        .first()
        .cloned()
        .cloned()
        .ok_or("sample catalog is missing the lavender oil")?;
    let tea = state
        .catalog()
        .in_category("Teas")
        .first()
        .cloned()
        .cloned()
        .ok_or("sample catalog is missing the teas")?;

    tracing::info!("Adding 2 x {} to the cart", lavender.name);
    state.cart().add(&lavender, 2);
    log_summary(&observer.borrow_and_update());

    tracing::info!("Adding 1 x {}", tea.name);
    state.cart().add_one(&tea);
    log_summary(&observer.borrow_and_update());

    tracing::info!("Dropping the lavender oil to 1 unit");
    state.cart().update_quantity(&lavender.id, 1);
    log_summary(&observer.borrow_and_update());

    let customer = Customer {
        id: CustomerId::new("demo-customer"),
        name: "Demo Shopper".to_owned(),
        email: "demo@herbloom.app".to_owned(),
        address: "1 Greenhouse Way".to_owned(),
    };

    tracing::info!("Checking out...");
    let order_id = state.place_order(customer)?;
    log_summary(&observer.borrow_and_update());

    state.orders().update_status(order_id, OrderStatus::Shipped)?;
    state
        .orders()
        .update_status(order_id, OrderStatus::Delivered)?;

    let orders = state.orders();
    let order = orders
        .get(order_id)
        .ok_or("placed order missing from the book")?;
    tracing::info!(
        "Order {} for {}: {} line(s), total {}, status {}",
        order.id,
        order.customer.name,
        order.lines.len(),
        order.total,
        order.status
    );

    Ok(())
}

fn log_summary(summary: &CartSummary) {
    tracing::info!(
        "Cart: {} item(s), subtotal {}, shipping {}, total {}",
        summary.item_count,
        summary.subtotal,
        summary.shipping_fee,
        summary.total
    );
    for line in &summary.lines {
        tracing::info!(
            "  {} x {} @ {} = {}",
            line.quantity,
            line.name,
            line.unit_price,
            line.line_total()
        );
    }
}
