//! On-disk stand-in for the storefront API.
//!
//! Layout under the fixture root:
//!
//! ```text
//! categories/<handle>.json    {"category": {...}} or {"category": null}
//! collections/<handle>.json   {"collection": {...}}
//! ```
//!
//! A missing file is reported as "not found", the same as a `null` record.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use storefront_catalog::{
    parse_category_response, parse_collection_response, CatalogError, CatalogSource, PageRequest,
    RawCategoryNode, RawCollection,
};

pub(crate) struct FixtureSource {
    root: PathBuf,
}

impl FixtureSource {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn record_path(&self, kind: &str, handle: &str) -> Result<PathBuf, CatalogError> {
        // handles are slugs; refuse anything that could walk out of the root
        if handle.is_empty() || handle.contains(['/', '\\']) || handle.starts_with('.') {
            return Err(CatalogError::Source {
                context: format!("{kind}/{handle}"),
                reason: "handle is not a valid slug".to_string(),
            });
        }
        Ok(self.root.join(kind).join(format!("{handle}.json")))
    }

    fn read(path: &Path) -> Result<Option<String>, CatalogError> {
        match std::fs::read_to_string(path) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "fixture not found");
                Ok(None)
            }
            Err(e) => Err(CatalogError::Source {
                context: path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

impl CatalogSource for FixtureSource {
    fn category(&self, handle: &str) -> Result<Option<RawCategoryNode>, CatalogError> {
        let path = self.record_path("categories", handle)?;
        match Self::read(&path)? {
            Some(body) => parse_category_response(&body, &path.display().to_string()),
            None => Ok(None),
        }
    }

    fn collection(
        &self,
        handle: &str,
        page: &PageRequest,
    ) -> Result<Option<RawCollection>, CatalogError> {
        let path = self.record_path("collections", handle)?;
        let Some(body) = Self::read(&path)? else {
            return Ok(None);
        };
        let Some(mut collection) = parse_collection_response(&body, &path.display().to_string())?
        else {
            return Ok(None);
        };

        // Fixtures hold whole collections; serve only the requested page.
        if page.after.is_some() {
            tracing::warn!(handle, "fixture source ignores pagination cursors");
        }
        let total = collection.products.nodes.len();
        if total > page.first {
            collection.products.nodes.truncate(page.first);
            let info = collection.products.page_info.get_or_insert_with(Default::default);
            info.has_next_page = true;
        }
        Ok(Some(collection))
    }
}
