use serde::{Deserialize, Serialize};

/// Separator used in category display names, e.g. `"Hardware > Screws"`.
///
/// This is a content convention of the catalog data, not a structural rule;
/// nothing here relies on it beyond [`Category::display_name`].
pub const NAME_SEPARATOR: char = '>';

/// A node in the storefront category tree, normalized from a nested
/// metaobject record.
///
/// Trees are built fresh for each request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Stable identifier of the underlying metaobject.
    pub id: String,
    /// Slug used to address the category directly, e.g. `"wood-screws"`.
    pub handle: String,
    /// Display name, conventionally `"Parent > Child"` below the root.
    pub name: Option<String>,
    /// Rich or plain text; empty when the record has none.
    pub description: String,
    /// Handle of the directly attached product collection. Usually `None`
    /// for non-leaf categories.
    pub collection_handle: Option<String>,
    pub image: Option<CategoryImage>,
    pub sub_categories: Vec<Category>,
}

/// Image attached to a category metaobject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryImage {
    pub id: Option<String>,
    pub url: String,
    pub alt_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Category {
    /// Returns the last `>`-separated segment of the name, trimmed.
    ///
    /// `"Hardware > Wood Screws"` yields `"Wood Screws"`; a name without a
    /// separator is returned as-is.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .and_then(|name| name.rsplit(NAME_SEPARATOR).next())
            .map(str::trim)
    }

    /// Returns `true` when the category has no sub-categories.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.sub_categories.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .sub_categories
            .iter()
            .map(Category::node_count)
            .sum::<usize>()
    }

    /// Finds `self` or a descendant by handle, searching depth-first in
    /// source order.
    #[must_use]
    pub fn find(&self, handle: &str) -> Option<&Category> {
        if self.handle == handle {
            return Some(self);
        }
        self.sub_categories
            .iter()
            .find_map(|child| child.find(handle))
    }

    /// Returns the chain of categories from `self` down to the node with
    /// `handle`, both ends inclusive.
    #[must_use]
    pub fn breadcrumbs(&self, handle: &str) -> Option<Vec<&Category>> {
        let mut path = Vec::new();
        if self.collect_path(handle, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    fn collect_path<'a>(&'a self, handle: &str, path: &mut Vec<&'a Category>) -> bool {
        path.push(self);
        if self.handle == handle {
            return true;
        }
        for child in &self.sub_categories {
            if child.collect_path(handle, path) {
                return true;
            }
        }
        path.pop();
        false
    }
}
