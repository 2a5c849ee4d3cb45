//! Normalization of raw category metaobjects into a [`Category`] tree.

use storefront_core::Category;

use crate::error::CatalogError;
use crate::types::RawCategoryNode;

/// Normalizes a raw category record and all of its descendants.
///
/// Optional fields fall back to defaults: no name gives `None`, no
/// description gives `""`, and missing image, collection or children give
/// `None`, `None` and an empty list. Children keep source order; reference
/// nodes that are not metaobjects are skipped.
///
/// # Errors
///
/// Returns [`CatalogError::MalformedCategory`] when a node lacks its `id` or
/// `handle`, and [`CatalogError::CategoryTooDeep`] when the tree nests more
/// than `max_depth` levels (the node passed in is level 1).
pub fn normalize_category(
    raw: RawCategoryNode,
    max_depth: usize,
) -> Result<Category, CatalogError> {
    let mut path = Vec::new();
    normalize_node(raw, 1, max_depth, &mut path)
}

fn normalize_node(
    mut raw: RawCategoryNode,
    depth: usize,
    max_depth: usize,
    path: &mut Vec<String>,
) -> Result<Category, CatalogError> {
    let id = required(raw.id.take(), "id", path)?;
    let handle = required(raw.handle.take(), "handle", path)?;

    if depth > max_depth {
        return Err(CatalogError::CategoryTooDeep { handle, max_depth });
    }

    let children = raw.take_children();

    let collection_handle = raw
        .collection
        .and_then(|field| field.reference)
        .and_then(|reference| reference.collection_handle)
        .filter(|collection_handle| {
            if collection_handle.is_empty() {
                tracing::warn!(
                    handle = %handle,
                    "category links a collection with an empty handle"
                );
                false
            } else {
                true
            }
        });

    let image = raw
        .image
        .and_then(|field| field.reference)
        .and_then(|media| media.image)
        .map(Into::into);

    path.push(handle.clone());
    let sub_categories = children
        .into_iter()
        .filter(|child| {
            if child.is_metaobject() {
                true
            } else {
                tracing::warn!(
                    parent = %handle,
                    typename = child.typename.as_deref().unwrap_or_default(),
                    "skipping non-metaobject category reference"
                );
                false
            }
        })
        .map(|child| normalize_node(child, depth + 1, max_depth, path))
        .collect::<Result<Vec<_>, _>>()?;
    path.pop();

    Ok(Category {
        id,
        handle,
        name: raw.name.and_then(|field| field.value),
        description: raw
            .description
            .and_then(|field| field.value)
            .unwrap_or_default(),
        collection_handle,
        image,
        sub_categories,
    })
}

fn required(
    value: Option<String>,
    field: &'static str,
    path: &[String],
) -> Result<String, CatalogError> {
    value.ok_or_else(|| CatalogError::MalformedCategory {
        field,
        path: describe_path(path),
    })
}

/// Renders the handles of the ancestors of a failing node for diagnostics.
fn describe_path(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(" / ")
    }
}
