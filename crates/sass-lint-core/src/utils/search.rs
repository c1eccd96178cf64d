//! Linear lookup of a record by one of its named fields.

use crate::node::Node;
use std::collections::{BTreeMap, HashMap};

/// A record whose string fields can be read by name.
pub trait Record {
    /// Value of the field called `name`, if present and textual.
    fn field(&self, name: &str) -> Option<&str>;
}

/// Returns the index of the first record whose `property` field equals `needle`.
///
/// Records without that field never match.
///
/// # Example
///
/// ```
/// use sass_lint_core::utils::property_search;
/// use std::collections::HashMap;
///
/// let haystack: Vec<HashMap<String, String>> = ["a", "c"]
///     .iter()
///     .map(|v| HashMap::from([("prop".to_string(), v.to_string())]))
///     .collect();
///
/// assert_eq!(property_search(&haystack, "a", "prop"), Some(0));
/// assert_eq!(property_search(&haystack, "e", "prop"), None);
/// ```
#[must_use]
pub fn property_search<R: Record>(haystack: &[R], needle: &str, property: &str) -> Option<usize> {
    haystack
        .iter()
        .position(|record| record.field(property) == Some(needle))
}

impl Record for Node {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "type" => Some(&self.kind),
            "syntax" => Some(self.syntax.as_str()),
            "content" => self.text(),
            _ => None,
        }
    }
}

impl<S: std::hash::BuildHasher> Record for HashMap<String, String, S> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Record for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Record for toml::Table {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(toml::Value::as_str)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<&str> {
        (**self).field(name)
    }
}
