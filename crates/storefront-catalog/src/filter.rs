//! Facet filtering of a product collection against a [`FilterSelection`].
//!
//! Matching is per variant and conjunctive across options: a variant passes
//! when every one of its option values is accepted by the selection, where
//! an option the selection does not mention accepts anything. A product
//! survives with only its passing variants, or is dropped when none pass.

use storefront_core::{FilterSelection, Product, ProductVariant};

/// Returns the products (and, within each, the variants) that satisfy
/// `selection`, in input order. The input slice is never modified.
#[must_use]
pub fn filter_products(products: &[Product], selection: &FilterSelection) -> Vec<Product> {
    if selection.is_empty() {
        return products.to_vec();
    }

    let filtered: Vec<Product> = products
        .iter()
        .filter_map(|product| filter_product(product, selection))
        .collect();

    tracing::debug!(
        input_count = products.len(),
        kept_count = filtered.len(),
        selection = %selection.to_query_string(),
        "filtered products"
    );

    filtered
}

/// Applies `selection` to a single product.
///
/// Returns `None` when the product lacks an option the selection names, or
/// when no variant passes. Otherwise returns a copy carrying only the
/// passing variants, in their original order.
#[must_use]
pub fn filter_product(product: &Product, selection: &FilterSelection) -> Option<Product> {
    if selection.is_empty() {
        return Some(product.clone());
    }

    if !selection.names().all(|name| product.has_option(name)) {
        return None;
    }

    let variants: Vec<ProductVariant> = product
        .variants
        .iter()
        .filter(|variant| variant_matches(variant, selection))
        .cloned()
        .collect();

    if variants.is_empty() {
        return None;
    }

    Some(Product {
        id: product.id.clone(),
        handle: product.handle.clone(),
        title: product.title.clone(),
        description_html: product.description_html.clone(),
        featured_image: product.featured_image.clone(),
        options: product.options.clone(),
        variants,
    })
}

/// Whether every option value the variant carries passes `selection`.
#[must_use]
pub fn variant_matches(variant: &ProductVariant, selection: &FilterSelection) -> bool {
    variant
        .selected_options
        .iter()
        .all(|option| selection.accepts(&option.name, &option.value))
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
