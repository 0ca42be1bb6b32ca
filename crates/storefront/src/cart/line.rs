//! A single cart line: one product and the quantity held.

use serde::{Deserialize, Serialize};

use herbloom_core::{Money, Product, ProductId};

/// One distinct product held in the cart.
///
/// `name`, `unit_price`, and `image` are copied from the catalog record the
/// moment the product is first added. The cart never re-reads the catalog:
/// a vendor price change after the shopper adds the product leaves the
/// line untouched until checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Key of the line within the cart; at most one line per product.
    pub product_id: ProductId,
    /// Product name at add time.
    pub name: String,
    /// Unit price at add time.
    pub unit_price: Money,
    /// Image URL at add time.
    pub image: String,
    /// Units of the product in the cart. Always at least 1: a line that
    /// would drop to zero is removed from the cart instead.
    pub quantity: u32,
}

impl CartLine {
    pub(crate) fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let product = Product::new("p1", "Peppermint Balm", Money::from_cents(8_25), "img");
        let line = CartLine::snapshot(&product, 4);
        assert_eq!(line.line_total(), Money::from_cents(33_00));
    }

    #[test]
    fn test_snapshot_copies_fields() {
        let mut product = Product::new("p1", "Peppermint Balm", Money::from_cents(8_25), "img");
        let line = CartLine::snapshot(&product, 1);

        // Mutating the catalog record afterwards must not affect the line.
        product.price = Money::from_cents(99_99);
        product.name = "Renamed".to_owned();
        assert_eq!(line.unit_price, Money::from_cents(8_25));
        assert_eq!(line.name, "Peppermint Balm");
    }
}
