use serde::{Deserialize, Serialize};

/// A product from a storefront collection, normalized for listing and
/// facet filtering.
///
/// `options` holds the product's option names in declaration order; every
/// variant's `selected_options` is positionally parallel to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    /// Storefront URL slug, e.g. `"wood-screw-countersunk"`.
    pub handle: String,
    pub title: String,
    /// Raw HTML description, passed through untouched.
    pub description_html: String,
    pub featured_image: Option<ProductImage>,
    /// Option names, e.g. `["Size", "Color"]`.
    pub options: Vec<String>,
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Returns `true` if the product declares an option with this name.
    #[must_use]
    pub fn has_option(&self, name: &str) -> bool {
        self.options.iter().any(|option| option == name)
    }
}

/// A single purchasable variant of a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    /// Display title, usually the option values joined with `" / "`.
    pub title: String,
    pub sku: Option<String>,
    pub weight: Option<f64>,
    pub price: Money,
    pub selected_options: Vec<ProductOption>,
}

/// A `(name, value)` option selection carried by a variant, e.g.
/// `Size = "10mm"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductOption {
    pub name: String,
    pub value: String,
}

impl ProductOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A monetary amount exactly as the storefront API returns it.
///
/// The amount stays a decimal string; no arithmetic is done on prices here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: String,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: Option<String>,
    pub url: String,
    pub alt_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Cursor metadata for one page of a collection's products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// One fetched page of a product collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPage {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub description: String,
    pub products: Vec<Product>,
    pub page_info: Option<PageInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_variant(id: &str, options: &[(&str, &str)]) -> ProductVariant {
        ProductVariant {
            id: id.to_string(),
            title: options
                .iter()
                .map(|(_, v)| *v)
                .collect::<Vec<_>>()
                .join(" / "),
            sku: None,
            weight: Some(0.25),
            price: Money {
                amount: "4.50".to_string(),
                currency_code: "USD".to_string(),
            },
            selected_options: options
                .iter()
                .map(|(n, v)| ProductOption::new(*n, *v))
                .collect(),
        }
    }

    fn make_product(variants: Vec<ProductVariant>) -> Product {
        Product {
            id: "gid://shopify/Product/1".to_string(),
            handle: "wood-screw".to_string(),
            title: "Wood Screw".to_string(),
            description_html: "<p>Countersunk.</p>".to_string(),
            featured_image: None,
            options: vec!["Size".to_string(), "Color".to_string()],
            variants,
        }
    }

    #[test]
    fn has_option_matches_declared_names() {
        let product = make_product(vec![]);
        assert!(product.has_option("Size"));
        assert!(product.has_option("Color"));
        assert!(!product.has_option("Material"));
    }

    #[test]
    fn serde_roundtrip_product() {
        let product = make_product(vec![make_variant("a", &[("Size", "10mm"), ("Color", "Red")])]);
        let json = serde_json::to_string(&product).expect("serialization failed");
        assert!(json.contains("\"selectedOptions\""));
        let decoded: Product = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded, product);
    }
}
