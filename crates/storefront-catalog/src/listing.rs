//! The category page request flow.
//!
//! 1. Resolve the requested category and the root category.
//! 2. Require a linked collection on the requested category.
//! 3. Fetch and normalize the collection page.
//! 4. Build the option inventory over the *unfiltered* products.
//! 5. Parse the shopper's selection and filter the products.

use serde::Serialize;
use storefront_core::{AppConfig, Category, CollectionPage, FilterSelection, OptionInventory};

use crate::category::normalize_category;
use crate::error::CatalogError;
use crate::filter::filter_products;
use crate::inventory::build_inventory;
use crate::normalize::normalize_collection;
use crate::source::{CatalogSource, PageRequest};

/// Settings the request flow needs from [`AppConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    pub root_handle: String,
    pub max_depth: usize,
    pub page_size: usize,
}

impl ListingConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            root_handle: config.root_category_handle.clone(),
            max_depth: config.max_category_depth,
            page_size: config.collection_page_size,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self::from_app_config(&AppConfig::default())
    }
}

/// Everything a category page renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListing {
    pub selected_category: Category,
    /// Children of the root category, for the navigation sidebar.
    pub top_level_categories: Vec<Category>,
    /// The collection with its products already filtered.
    pub collection: CollectionPage,
    /// Filter controls, computed before filtering.
    pub product_options: OptionInventory,
    pub selected_filters: FilterSelection,
}

/// Runs the category page flow for `handle` with the raw query string of
/// the request.
///
/// # Errors
///
/// - [`CatalogError::CategoryNotFound`] if the category or the root category
///   is missing.
/// - [`CatalogError::CollectionUnresolved`] if the category has no linked
///   collection.
/// - [`CatalogError::CollectionNotFound`] if the linked collection is missing.
/// - Any normalization or source error, unchanged.
pub fn load_category_listing<S>(
    source: &S,
    handle: &str,
    raw_query: &str,
    config: &ListingConfig,
) -> Result<CategoryListing, CatalogError>
where
    S: CatalogSource + ?Sized,
{
    let selected_category = load_category(source, handle, config.max_depth)?;
    let root = load_category(source, &config.root_handle, config.max_depth)?;

    let collection_handle = selected_category
        .collection_handle
        .as_deref()
        .ok_or_else(|| CatalogError::CollectionUnresolved {
            category_handle: selected_category.handle.clone(),
        })?;

    let raw_collection = source
        .collection(collection_handle, &PageRequest::first(config.page_size))?
        .ok_or_else(|| CatalogError::CollectionNotFound {
            collection_handle: collection_handle.to_string(),
        })?;
    let collection = normalize_collection(raw_collection)?;

    let selection = FilterSelection::parse_query(raw_query);

    tracing::debug!(
        handle = %handle,
        collection = %collection.handle,
        product_count = collection.products.len(),
        selected_options = selection.len(),
        "building category listing"
    );

    Ok(build_listing(
        selected_category,
        root.sub_categories,
        collection,
        selection,
    ))
}

/// Loads the top-level categories under the configured root, as shown on
/// the home page and in the sidebar.
///
/// # Errors
///
/// Returns [`CatalogError::CategoryNotFound`] if the root is missing, or any
/// normalization or source error.
pub fn load_navigation<S>(
    source: &S,
    config: &ListingConfig,
) -> Result<Vec<Category>, CatalogError>
where
    S: CatalogSource + ?Sized,
{
    let root = load_category(source, &config.root_handle, config.max_depth)?;
    Ok(root.sub_categories)
}

/// Assembles a listing from already-loaded parts.
///
/// The inventory is taken from the unfiltered collection before the
/// selection is applied.
#[must_use]
pub fn build_listing(
    selected_category: Category,
    top_level_categories: Vec<Category>,
    mut collection: CollectionPage,
    selection: FilterSelection,
) -> CategoryListing {
    let product_options = build_inventory(&collection.products);
    collection.products = filter_products(&collection.products, &selection);

    CategoryListing {
        selected_category,
        top_level_categories,
        collection,
        product_options,
        selected_filters: selection,
    }
}

fn load_category<S>(source: &S, handle: &str, max_depth: usize) -> Result<Category, CatalogError>
where
    S: CatalogSource + ?Sized,
{
    if handle.trim().is_empty() {
        return Err(CatalogError::CategoryNotFound {
            handle: handle.to_string(),
        });
    }

    let raw = source
        .category(handle)?
        .ok_or_else(|| CatalogError::CategoryNotFound {
            handle: handle.to_string(),
        })?;

    let category = normalize_category(raw, max_depth)?;
    tracing::debug!(
        handle = %category.handle,
        node_count = category.node_count(),
        "normalized category tree"
    );
    Ok(category)
}
