//! The flattened mapping of stackable field names to values.

use std::collections::{BTreeMap, btree_map};

use serde::Serialize;
use serde_json::Value;

use super::schema;
use crate::MarkupIdent;

/// Stackable fields that are explicitly set, keyed by field name.
///
/// Returned by [`super::DocnoteConfig::get_stackables`] for one node and by
/// [`crate::cascade::resolve`] for a whole chain. Unset fields are absent
/// rather than stored as `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Stackables(BTreeMap<String, Value>);

impl Stackables {
    /// Create an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Value of `field`, if set.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Whether `field` is set.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of set fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(field, value)` pairs in field-name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Field names in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Typed view of `enforce_known_lang`.
    #[must_use]
    pub fn enforce_known_lang(&self) -> Option<bool> {
        self.get(schema::ENFORCE_KNOWN_LANG).and_then(Value::as_bool)
    }

    /// Typed view of `markup_lang`.
    #[must_use]
    pub fn markup_lang(&self) -> Option<MarkupIdent> {
        self.get(schema::MARKUP_LANG)
            .and_then(Value::as_str)
            .map(MarkupIdent::from)
    }

    /// Insert `value` for `field` unless the field is already set.
    ///
    /// Returns `true` when the value was inserted.
    pub(crate) fn insert_if_absent(&mut self, field: &str, value: &Value) -> bool {
        match self.0.entry(field.to_owned()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value.clone());
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Unwrap into the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.0
    }
}

impl FromIterator<(String, Value)> for Stackables {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Stackables {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Stackables {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
