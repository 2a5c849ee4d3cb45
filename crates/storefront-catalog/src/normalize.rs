//! Normalization from raw collection records to [`CollectionPage`] and
//! [`Product`].
//!
//! Variant option lists are checked against the product's declared option
//! names here, once, so the inventory builder and the filter engine can rely
//! on the positional pairing.

use storefront_core::{CollectionPage, Product, ProductVariant};

use crate::error::CatalogError;
use crate::types::{RawCollection, RawProduct, RawVariant};

/// Normalizes a raw collection page and every product on it.
///
/// # Errors
///
/// Returns [`CatalogError::MalformedProduct`] for the first product that
/// fails [`normalize_product`].
pub fn normalize_collection(raw: RawCollection) -> Result<CollectionPage, CatalogError> {
    let products = raw
        .products
        .nodes
        .into_iter()
        .map(normalize_product)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        collection = %raw.handle,
        product_count = products.len(),
        "normalized collection page"
    );

    Ok(CollectionPage {
        id: raw.id,
        handle: raw.handle,
        title: raw.title,
        description: raw.description.unwrap_or_default(),
        products,
        page_info: raw.products.page_info,
    })
}

/// Normalizes a raw product.
///
/// # Errors
///
/// Returns [`CatalogError::MalformedProduct`] if the product has no variants
/// or a variant's selected options do not line up with the product's option
/// names.
pub fn normalize_product(raw: RawProduct) -> Result<Product, CatalogError> {
    if raw.variants.nodes.is_empty() {
        return Err(CatalogError::MalformedProduct {
            product_id: raw.id,
            reason: "product has no variants".into(),
        });
    }

    let options: Vec<String> = raw.options.into_iter().map(|option| option.name).collect();

    let variants = raw
        .variants
        .nodes
        .into_iter()
        .map(|variant| normalize_variant(variant, &options, &raw.id))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Product {
        id: raw.id,
        handle: raw.handle,
        title: raw.title,
        description_html: raw.description_html.unwrap_or_default(),
        featured_image: raw.featured_image.map(Into::into),
        options,
        variants,
    })
}

fn normalize_variant(
    variant: RawVariant,
    options: &[String],
    product_id: &str,
) -> Result<ProductVariant, CatalogError> {
    if variant.selected_options.len() != options.len() {
        return Err(CatalogError::MalformedProduct {
            product_id: product_id.to_owned(),
            reason: format!(
                "variant {} selects {} options but the product declares {}",
                variant.id,
                variant.selected_options.len(),
                options.len()
            ),
        });
    }

    if let Some((declared, selected)) = options
        .iter()
        .zip(&variant.selected_options)
        .find(|(declared, selected)| **declared != selected.name)
    {
        return Err(CatalogError::MalformedProduct {
            product_id: product_id.to_owned(),
            reason: format!(
                "variant {} selects option \"{}\" where the product declares \"{declared}\"",
                variant.id, selected.name
            ),
        });
    }

    Ok(ProductVariant {
        id: variant.id,
        title: variant.title,
        sku: variant.sku.filter(|s| !s.is_empty()),
        weight: variant.weight,
        price: variant.price,
        selected_options: variant.selected_options,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn raw_variant(id: &str, size: &str, color: &str) -> Value {
        json!({
            "id": id,
            "title": format!("{size} / {color}"),
            "sku": format!("SCR-{size}-{color}"),
            "weight": 0.02,
            "price": { "amount": "0.35", "currencyCode": "USD" },
            "selectedOptions": [
                { "name": "Size", "value": size },
                { "name": "Color", "value": color }
            ]
        })
    }

    fn raw_product(variants: &[Value]) -> RawProduct {
        serde_json::from_value(json!({
            "id": "gid://shopify/Product/1",
            "handle": "wood-screw",
            "title": "Wood Screw",
            "descriptionHtml": "<p>Countersunk.</p>",
            "featuredImage": {
                "id": "gid://shopify/ProductImage/3",
                "url": "https://cdn.example.com/screw.png",
                "altText": null,
                "width": 88,
                "height": 88
            },
            "options": [{ "name": "Size" }, { "name": "Color" }],
            "variants": { "nodes": variants }
        }))
        .expect("invalid raw product fixture")
    }

    #[test]
    fn normalize_product_keeps_options_and_variant_order() {
        let product = normalize_product(raw_product(&[
            raw_variant("v1", "10mm", "Red"),
            raw_variant("v2", "12mm", "Red"),
        ]))
        .unwrap();

        assert_eq!(product.options, vec!["Size", "Color"]);
        assert_eq!(product.variants.len(), 2);
        assert_eq!(product.variants[0].id, "v1");
        assert_eq!(product.variants[1].id, "v2");
        assert_eq!(product.variants[1].selected_options[0].value, "12mm");
        assert_eq!(product.description_html, "<p>Countersunk.</p>");
        assert_eq!(
            product.featured_image.map(|image| image.url).as_deref(),
            Some("https://cdn.example.com/screw.png")
        );
    }

    #[test]
    fn normalize_product_error_when_no_variants() {
        let err = normalize_product(raw_product(&[])).unwrap_err();
        match err {
            CatalogError::MalformedProduct { reason, .. } => {
                assert!(reason.contains("no variants"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn normalize_variant_empty_sku_becomes_none() {
        let mut variant = raw_variant("v1", "10mm", "Red");
        variant["sku"] = json!("");
        let product = normalize_product(raw_product(&[variant])).unwrap();
        assert!(product.variants[0].sku.is_none());
    }

    #[test]
    fn normalize_variant_rejects_option_count_mismatch() {
        let mut variant = raw_variant("v1", "10mm", "Red");
        variant["selectedOptions"] = json!([{ "name": "Size", "value": "10mm" }]);
        let err = normalize_product(raw_product(&[variant])).unwrap_err();
        match err {
            CatalogError::MalformedProduct { reason, .. } => {
                assert!(reason.contains("selects 1 options"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn normalize_variant_rejects_out_of_order_options() {
        let mut variant = raw_variant("v1", "10mm", "Red");
        variant["selectedOptions"] = json!([
            { "name": "Color", "value": "Red" },
            { "name": "Size", "value": "10mm" }
        ]);
        let err = normalize_product(raw_product(&[variant])).unwrap_err();
        match err {
            CatalogError::MalformedProduct { reason, .. } => {
                assert!(reason.contains("\"Color\""), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn normalize_collection_passes_page_info_through() {
        let raw: RawCollection = serde_json::from_value(json!({
            "id": "gid://shopify/Collection/5",
            "handle": "wood-screws",
            "title": "Wood Screws",
            "description": null,
            "products": {
                "nodes": [],
                "pageInfo": {
                    "hasNextPage": true,
                    "hasPreviousPage": false,
                    "startCursor": "abc",
                    "endCursor": "def"
                }
            }
        }))
        .expect("invalid raw collection fixture");

        let page = normalize_collection(raw).unwrap();
        assert_eq!(page.handle, "wood-screws");
        assert_eq!(page.description, "");
        let info = page.page_info.expect("expected page info");
        assert!(info.has_next_page);
        assert_eq!(info.end_cursor.as_deref(), Some("def"));
    }
}
