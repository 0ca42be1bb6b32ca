//! In-memory product catalog.
//!
//! The read side of the storefront: browsing, substring search, and
//! category filters for the shop screens, plus the vendor dashboard's
//! product management on the write side. The cart only ever reads from the
//! catalog - adding a product to the cart snapshots it and never holds a
//! reference back.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use herbloom_core::{Product, ProductId};

/// Errors that can occur when loading a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog document is not valid JSON or has the wrong shape.
    #[error("failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The product catalog, in publication order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Build a catalog from a list of products. Later entries win when two
    /// share an ID.
    #[must_use]
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::new();
        for product in products {
            catalog.upsert(product);
        }
        catalog
    }

    /// Parse a catalog from a JSON array of product records.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::from_products(products))
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read and
    /// `CatalogError::Parse` if it is malformed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// The bundled sample catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the bundled document is malformed.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json(include_str!("../data/products.json"))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All products in publication order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Case-insensitive substring search over product names and
    /// descriptions. An empty query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|product| {
                product.name.to_lowercase().contains(&needle)
                    || product
                        .description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Products in a category (exact match).
    #[must_use]
    pub fn in_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.category.as_deref() == Some(category))
            .collect()
    }

    /// Distinct categories, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if let Some(category) = product.category.as_deref() {
                if !categories.contains(&category) {
                    categories.push(category);
                }
            }
        }
        categories
    }

    /// Products flagged for the popular picks row.
    #[must_use]
    pub fn popular(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.popular).collect()
    }

    // =========================================================================
    // Vendor mutations
    // =========================================================================

    /// Insert a product, or replace the existing record with the same ID
    /// in place.
    pub fn upsert(&mut self, product: Product) {
        if let Some(existing) = self
            .products
            .iter_mut()
            .find(|existing| existing.id == product.id)
        {
            *existing = product;
        } else {
            self.products.push(product);
        }
    }

    /// Remove a product, returning the removed record if it existed.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|product| &product.id == id)?;
        Some(self.products.remove(index))
    }
}
