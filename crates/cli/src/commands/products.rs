//! Catalog browsing commands.

use herbloom_core::{Product, ProductId};
use herbloom_storefront::AppState;

/// List catalog products, optionally narrowed to one category.
pub fn list(state: &AppState, category: Option<&str>) {
    let catalog = state.catalog();
    let products: Vec<&Product> = match category {
        Some(category) => catalog.in_category(category),
        None => catalog.all().iter().collect(),
    };

    if products.is_empty() {
        tracing::warn!("No products found");
        return;
    }

    tracing::info!("{} product(s):", products.len());
    for product in products {
        tracing::info!(
            "  [{}] {} - {}{}",
            product.id,
            product.name,
            product.price,
            product
                .category
                .as_deref()
                .map(|c| format!(" ({c})"))
                .unwrap_or_default()
        );
    }
}

/// Search products by name or description.
pub fn search(state: &AppState, query: &str) {
    let catalog = state.catalog();
    let hits = catalog.search(query);

    if hits.is_empty() {
        tracing::warn!("No products match \"{query}\"");
        return;
    }

    tracing::info!("{} product(s) match \"{query}\":", hits.len());
    for product in hits {
        tracing::info!("  [{}] {} - {}", product.id, product.name, product.price);
    }
}

/// Show one product in full.
pub fn show(state: &AppState, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = state.catalog();
    let product = catalog
        .get(&ProductId::new(id))
        .ok_or_else(|| format!("no product with id {id}"))?;

    tracing::info!("{}", product.name);
    tracing::info!("  Price: {}", product.price);
    if let Some(category) = product.category.as_deref() {
        tracing::info!("  Category: {category}");
    }
    if let Some(description) = product.description.as_deref() {
        tracing::info!("  {description}");
    }
    if let (Some(rating), Some(reviews)) = (product.rating, product.reviews) {
        tracing::info!("  Rating: {rating:.1} ({reviews} reviews)");
    }
    if let Some(stock) = product.stock {
        tracing::info!("  In stock: {stock}");
    }
    for benefit in &product.benefits {
        tracing::info!("  - {benefit}");
    }
    Ok(())
}
