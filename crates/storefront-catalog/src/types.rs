//! Raw record types for the storefront GraphQL responses the catalog reads.
//!
//! ## Category metaobjects
//!
//! Categories are `category_metaobject` metaobjects. Every value lives behind
//! a field-keyed wrapper, so the response is deeply nested:
//!
//! ```text
//! {
//!   "categoryMetafieldId": "gid://shopify/Metaobject/1",
//!   "metaobjectHandle": "fasteners",
//!   "name": { "value": "Hardware > Fasteners" },
//!   "image": { "reference": { "image": { "url": "...", ... } } },
//!   "collection": { "reference": { "collectionHandle": "fasteners" } },
//!   "subCategories": { "references": { "nodes": [ ... ] } }
//! }
//! ```
//!
//! Any wrapper may be `null` or absent, except that every node, the root
//! included, must carry its id and handle. A root payload that only selects
//! `childCategories` is rejected at normalization. The children field is read
//! under either `subCategories` or `childCategories`. Reference lists are
//! polymorphic: a node is only a category when its `__typename` is
//! `Metaobject` (or when the typename was not requested at all).
//!
//! ## Collections
//!
//! Products follow the storefront product fragment. `selectedOptions` on each
//! variant is positionally parallel to the product's `options` list.

use serde::Deserialize;
use storefront_core::{CategoryImage, Money, PageInfo, ProductImage, ProductOption};

/// GraphQL typename carried by category reference nodes.
pub const METAOBJECT_TYPENAME: &str = "Metaobject";

/// Response body of a category metaobject query, keyed `category` or
/// `categories`. The record must select its id and handle.
#[derive(Debug, Deserialize)]
pub struct RawCategoryResponse {
    #[serde(default, alias = "categories")]
    pub category: Option<RawCategoryNode>,
}

/// One category metaobject, recursively containing its children.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCategoryNode {
    /// `__typename` of the reference node, when requested.
    #[serde(default, rename = "__typename")]
    pub typename: Option<String>,

    #[serde(default, alias = "categoryMetafieldId")]
    pub id: Option<String>,

    #[serde(default, alias = "metaobjectHandle")]
    pub handle: Option<String>,

    #[serde(default)]
    pub name: Option<RawFieldValue>,

    #[serde(default)]
    pub description: Option<RawFieldValue>,

    #[serde(default)]
    pub image: Option<RawImageField>,

    #[serde(default)]
    pub collection: Option<RawCollectionField>,

    #[serde(default, alias = "childCategories")]
    pub sub_categories: Option<RawCategoryReferences>,
}

impl RawCategoryNode {
    /// Whether this reference node is a category metaobject.
    #[must_use]
    pub fn is_metaobject(&self) -> bool {
        self.typename
            .as_deref()
            .is_none_or(|typename| typename == METAOBJECT_TYPENAME)
    }

    /// Takes the child nodes out of their reference wrappers.
    #[must_use]
    pub fn take_children(&mut self) -> Vec<RawCategoryNode> {
        self.sub_categories
            .take()
            .and_then(|field| field.references)
            .map(|connection| connection.nodes)
            .unwrap_or_default()
    }
}

/// A metaobject text field, e.g. `name: field(key: "name") { value }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFieldValue {
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImageField {
    #[serde(default)]
    pub reference: Option<RawMediaImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMediaImage {
    #[serde(default)]
    pub image: Option<RawImage>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawImage {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl From<RawImage> for CategoryImage {
    fn from(raw: RawImage) -> Self {
        Self {
            id: raw.id,
            url: raw.url,
            alt_text: raw.alt_text,
            width: raw.width,
            height: raw.height,
        }
    }
}

impl From<RawImage> for ProductImage {
    fn from(raw: RawImage) -> Self {
        Self {
            id: raw.id,
            url: raw.url,
            alt_text: raw.alt_text,
            width: raw.width,
            height: raw.height,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCollectionField {
    #[serde(default)]
    pub reference: Option<RawCollectionReference>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCollectionReference {
    #[serde(default, alias = "handle")]
    pub collection_handle: Option<String>,
}

/// `field(key: "children_categories") { references(first: N) { nodes } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategoryReferences {
    #[serde(default)]
    pub references: Option<RawCategoryConnection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategoryConnection {
    #[serde(default)]
    pub nodes: Vec<RawCategoryNode>,
}

/// Response body of a collection query.
#[derive(Debug, Deserialize)]
pub struct RawCollectionResponse {
    #[serde(default)]
    pub collection: Option<RawCollection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCollection {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub products: RawProductConnection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProductConnection {
    #[serde(default)]
    pub nodes: Vec<RawProduct>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description_html: Option<String>,
    #[serde(default)]
    pub featured_image: Option<RawImage>,
    /// Declared option names, e.g. `[{"name": "Size"}, {"name": "Color"}]`.
    #[serde(default)]
    pub options: Vec<RawProductOptionName>,
    #[serde(default)]
    pub variants: RawVariantConnection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProductOptionName {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVariantConnection {
    #[serde(default)]
    pub nodes: Vec<RawVariant>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVariant {
    pub id: String,
    pub title: String,
    /// Present but frequently an empty string.
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    pub price: Money,
    #[serde(default)]
    pub selected_options: Vec<ProductOption>,
}
