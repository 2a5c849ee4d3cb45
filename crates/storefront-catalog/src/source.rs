//! The data-fetching seam: where raw category and collection records come
//! from.
//!
//! Implementations own transport concerns (timeouts, retries, caching,
//! pagination cursors). The catalog only asks for a record by handle and
//! treats `None` as "not found".

use crate::error::CatalogError;
use crate::types::{RawCategoryNode, RawCategoryResponse, RawCollection, RawCollectionResponse};

/// Which slice of a collection's products to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of products to return.
    pub first: usize,
    /// Cursor to continue after, from a previous page's `endCursor`.
    pub after: Option<String>,
}

impl PageRequest {
    #[must_use]
    pub fn first(first: usize) -> Self {
        Self { first, after: None }
    }
}

/// Supplies raw catalog records by handle.
pub trait CatalogSource {
    /// Fetches the category metaobject with `handle`, children included.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the source itself fails; a missing
    /// category is `Ok(None)`.
    fn category(&self, handle: &str) -> Result<Option<RawCategoryNode>, CatalogError>;

    /// Fetches one page of the collection with `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the source itself fails; a missing
    /// collection is `Ok(None)`.
    fn collection(
        &self,
        handle: &str,
        page: &PageRequest,
    ) -> Result<Option<RawCollection>, CatalogError>;
}

/// Parses a category query response body (`{"category": ...}`).
///
/// # Errors
///
/// Returns [`CatalogError::Deserialize`] if the body is not a valid response.
pub fn parse_category_response(
    body: &str,
    context: &str,
) -> Result<Option<RawCategoryNode>, CatalogError> {
    serde_json::from_str::<RawCategoryResponse>(body)
        .map(|response| response.category)
        .map_err(|source| CatalogError::Deserialize {
            context: context.to_string(),
            source,
        })
}

/// Parses a collection query response body (`{"collection": ...}`).
///
/// # Errors
///
/// Returns [`CatalogError::Deserialize`] if the body is not a valid response.
pub fn parse_collection_response(
    body: &str,
    context: &str,
) -> Result<Option<RawCollection>, CatalogError> {
    serde_json::from_str::<RawCollectionResponse>(body)
        .map(|response| response.collection)
        .map_err(|source| CatalogError::Deserialize {
            context: context.to_string(),
            source,
        })
}
