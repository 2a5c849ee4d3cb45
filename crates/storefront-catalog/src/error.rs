use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed category at {path}: missing required field `{field}`")]
    MalformedCategory { field: &'static str, path: String },

    #[error("category {handle} is nested deeper than {max_depth} levels")]
    CategoryTooDeep { handle: String, max_depth: usize },

    #[error("category {handle} not found")]
    CategoryNotFound { handle: String },

    #[error("category {category_handle} has no linked product collection")]
    CollectionUnresolved { category_handle: String },

    #[error("collection {collection_handle} not found")]
    CollectionNotFound { collection_handle: String },

    #[error("malformed product {product_id}: {reason}")]
    MalformedProduct { product_id: String, reason: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog source failed for {context}: {reason}")]
    Source { context: String, reason: String },
}

impl CatalogError {
    /// Whether the failure should reach the shopper as "not found" rather
    /// than a server error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::CategoryNotFound { .. }
                | CatalogError::CollectionUnresolved { .. }
                | CatalogError::CollectionNotFound { .. }
                | CatalogError::MalformedCategory { .. }
        )
    }
}
