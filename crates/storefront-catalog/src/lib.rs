pub mod category;
pub mod error;
pub mod filter;
pub mod inventory;
pub mod listing;
pub mod normalize;
pub mod source;
pub mod types;

pub use category::normalize_category;
pub use error::CatalogError;
pub use filter::{filter_product, filter_products, variant_matches};
pub use inventory::{build_facets, build_inventory, Facet, FacetValue};
pub use listing::{
    build_listing, load_category_listing, load_navigation, CategoryListing, ListingConfig,
};
pub use normalize::{normalize_collection, normalize_product};
pub use source::{
    parse_category_response, parse_collection_response, CatalogSource, PageRequest,
};
pub use types::{RawCategoryNode, RawCollection};
