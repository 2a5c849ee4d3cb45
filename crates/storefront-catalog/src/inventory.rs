use serde::Serialize;
use storefront_core::{FilterSelection, OptionInventory, Product};

/// One filter control: an option name and every value it offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facet {
    pub name: String,
    pub values: Vec<FacetValue>,
}

/// A single checkbox within a [`Facet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetValue {
    pub value: String,
    pub selected: bool,
    /// Query string the checkbox links to: the active selection with this
    /// value flipped.
    pub toggle_query: String,
}

/// Collects every option name and value across all variants of `products`.
///
/// Pass the collection *before* filtering: the inventory drives the filter
/// controls, which must keep offering every value while a selection is
/// active.
#[must_use]
pub fn build_inventory(products: &[Product]) -> OptionInventory {
    let mut inventory = OptionInventory::new();
    for product in products {
        for variant in &product.variants {
            for (name, selected) in product.options.iter().zip(&variant.selected_options) {
                inventory.insert(name, &selected.value);
            }
        }
    }
    inventory
}

/// Pairs each inventory entry with its checked state under `selection`.
///
/// Facets and values keep inventory order. Selected names the inventory does
/// not know are not rendered.
#[must_use]
pub fn build_facets(inventory: &OptionInventory, selection: &FilterSelection) -> Vec<Facet> {
    inventory
        .iter()
        .map(|(name, values)| Facet {
            name: name.to_string(),
            values: values
                .iter()
                .map(|value| FacetValue {
                    value: value.clone(),
                    selected: selection.is_selected(name, value),
                    toggle_query: selection.toggled(name, value).to_query_string(),
                })
                .collect(),
        })
        .collect()
}
