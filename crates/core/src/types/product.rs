//! Product catalog record.

use serde::{Deserialize, Serialize};

use crate::{Money, ProductId};

/// A product as published in the catalog.
///
/// The cart copies the fields it displays (name, unit price, image) at
/// add time; later catalog edits do not flow back into carts that already
/// hold the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier, unique within the store.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// URL of the primary product image.
    pub image: String,
    /// Merchandising category (e.g. "Oils", "Teas").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Long-form description shown on the product page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the product is featured in the popular picks row.
    #[serde(default)]
    pub popular: bool,
    /// Average review rating, 0.0-5.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Number of reviews behind the rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    /// Units on hand, if the vendor tracks stock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    /// Benefit bullet points shown on the product page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
}

impl Product {
    /// Create a product with the required fields; merchandising fields
    /// start empty.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            category: None,
            description: None,
            popular: false,
            rating: None,
            reviews: None,
            stock: None,
            benefits: Vec::new(),
        }
    }
}
