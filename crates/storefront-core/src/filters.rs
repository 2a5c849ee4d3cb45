//! Facet filter state: the shopper's [`FilterSelection`] and the collection's
//! [`OptionInventory`].
//!
//! Both are keyed on the same option-name strings so presentation can pair
//! each inventory entry with its checked state.
//!
//! ## Wire format
//!
//! A selection travels as a plain multi-valued query string, one pair per
//! selected value:
//!
//! ```text
//! Size=10mm&Size=12mm&Color=Red
//! ```

use std::collections::{BTreeMap, BTreeSet};

use indexmap::{IndexMap, IndexSet};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters left unescaped in query-string names and values.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Accepted values per option name.
///
/// Ordering is irrelevant: two selections built from the same pairs in any
/// order, with any duplicates, compare equal. An empty selection means "no
/// filtering".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection {
    options: BTreeMap<String, BTreeSet<String>>,
}

impl FilterSelection {
    /// Builds a selection from `(name, value)` pairs.
    ///
    /// Names are not checked against any known option list; a name no
    /// product declares simply matches nothing downstream.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut options: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (name, value) in pairs {
            options.entry(name.into()).or_default().insert(value.into());
        }
        Self { options }
    }

    /// Parses a raw query string such as `?Size=10mm&Color=Dark+Red`.
    ///
    /// `+` decodes to a space and `%XX` escapes are decoded (invalid UTF-8 is
    /// replaced lossily). Empty segments are skipped; a segment without `=`
    /// selects an empty value for that name.
    #[must_use]
    pub fn parse_query(raw: &str) -> Self {
        let query = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
                (decode_component(name), decode_component(value))
            });
        Self::from_pairs(pairs)
    }

    /// Serializes back to the multi-valued query-string form.
    ///
    /// Names and values come out sorted, so equal selections always yield
    /// the same string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.pairs() {
            if !out.is_empty() {
                out.push('&');
            }
            out.extend(utf8_percent_encode(name, QUERY_COMPONENT));
            out.push('=');
            out.extend(utf8_percent_encode(value, QUERY_COMPONENT));
        }
        out
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Number of constrained option names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Option names carrying a constraint, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    /// Accepted values for `name`, or `None` when the option is unconstrained.
    #[must_use]
    pub fn values(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.options.get(name)
    }

    /// Whether `value` is checked for `name`.
    #[must_use]
    pub fn is_selected(&self, name: &str, value: &str) -> bool {
        self.options
            .get(name)
            .is_some_and(|values| values.contains(value))
    }

    /// Whether a variant holding `value` for option `name` passes this
    /// selection. Options without a key (or with an empty set) accept every
    /// value.
    #[must_use]
    pub fn accepts(&self, name: &str, value: &str) -> bool {
        match self.options.get(name) {
            Some(values) if !values.is_empty() => values.contains(value),
            _ => true,
        }
    }

    /// Returns a copy with `value` flipped for `name`. Removing the last
    /// value drops the name entirely.
    #[must_use]
    pub fn toggled(&self, name: &str, value: &str) -> Self {
        let mut options = self.options.clone();
        let values = options.entry(name.to_string()).or_default();
        if !values.remove(value) {
            values.insert(value.to_string());
        }
        if values.is_empty() {
            options.remove(name);
        }
        Self { options }
    }

    /// Flattens back to `(name, value)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().flat_map(|(name, values)| {
            values
                .iter()
                .map(move |value| (name.as_str(), value.as_str()))
        })
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Every option name and value observed in a product collection.
///
/// Names and values keep first-seen order so the filter UI renders the same
/// way for the same collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionInventory {
    options: IndexMap<String, IndexSet<String>>,
}

impl OptionInventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` under `name`. Returns `true` if the value was new.
    pub fn insert(&mut self, name: &str, value: &str) -> bool {
        if let Some(values) = self.options.get_mut(name) {
            if values.contains(value) {
                return false;
            }
            return values.insert(value.to_string());
        }
        let mut values = IndexSet::new();
        values.insert(value.to_string());
        self.options.insert(name.to_string(), values);
        true
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Number of distinct option names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    /// Values seen for `name`, in first-seen order.
    #[must_use]
    pub fn values(&self, name: &str) -> Option<Vec<&str>> {
        self.options
            .get(name)
            .map(|values| values.iter().map(String::as_str).collect())
    }

    /// Option names with their values, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.options
            .iter()
            .map(|(name, values)| (name.as_str(), values))
    }
}
