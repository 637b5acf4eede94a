//! An insertion-ordered dictionary of navigation parameters.
//!
//! [`Params`] maps parameter names to loosely-typed scalar values. Unlike a
//! plain `HashMap`, it remembers insertion order, which keeps query-string
//! output deterministic: the serialized string lists entries in exactly the
//! order the caller supplied them.

use std::fmt;
use std::slice;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// An insertion-ordered mapping from parameter name to scalar value.
///
/// Values are [`serde_json::Value`]s so that callers can supply strings,
/// numbers, or booleans without wrapping them themselves. Non-scalar values
/// are accepted but are the caller's responsibility when coerced for display.
///
/// # Examples
///
/// ```
/// use url_prettifier_core::Params;
///
/// let mut params = Params::new();
/// params.set("id", 1);
/// params.set("tab", "comments");
///
/// assert_eq!(params.display("id").as_deref(), Some("1"));
/// let keys: Vec<&str> = params.keys().collect();
/// assert_eq!(keys, vec!["id", "tab"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Value)>,
}

impl Params {
    /// Creates an empty `Params`.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty `Params` with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Sets the value for a parameter.
    ///
    /// If the parameter is already present its value is replaced in place and
    /// it keeps its original position; otherwise the entry is appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value for a parameter, or `None` if not present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns the value for a parameter coerced to its display string, or
    /// `None` if not present.
    ///
    /// String values are returned without surrounding quotes; every other
    /// value uses its JSON rendering. This is the coercion applied by the
    /// default query-string serializer.
    pub fn display(&self, key: &str) -> Option<String> {
        self.get(key).map(display_value)
    }

    /// Returns `true` if the parameter is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the parameter names, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns an iterator over `(name, value)` pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Coerces a parameter value to its display string.
///
/// String values are unwrapped from their quotes; everything else uses its
/// JSON rendering (`1` -> `"1"`, `true` -> `"true"`).
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Params {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a (String, Value);
    type IntoIter = slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Params {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Params {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParamsVisitor;

        impl<'de> Visitor<'de> for ParamsVisitor {
            type Value = Params;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of parameter names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Params, A::Error> {
                let mut params = Params::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    params.set(key, value);
                }
                Ok(params)
            }
        }

        deserializer.deserialize_map(ParamsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut params = Params::new();
        params.set("id", 1);
        assert_eq!(params.get("id"), Some(&Value::from(1)));
        assert!(params.contains_key("id"));
        assert!(!params.contains_key("missing"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = Params::new();
        params.set("a", 1);
        params.set("b", 2);
        params.set("a", 3);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some(&Value::from(3)));
        // Replacing a value keeps the key's original position.
        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut params = Params::new();
        params.set("z", 1);
        params.set("a", 2);
        params.set("m", 3);

        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_display_coercion() {
        let mut params = Params::new();
        params.set("id", 1);
        params.set("name", "alice");
        params.set("active", true);

        assert_eq!(params.display("id").as_deref(), Some("1"));
        assert_eq!(params.display("name").as_deref(), Some("alice"));
        assert_eq!(params.display("active").as_deref(), Some("true"));
        assert_eq!(params.display("missing"), None);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&Value::from("text")), "text");
        assert_eq!(display_value(&Value::from(42)), "42");
        assert_eq!(display_value(&Value::Null), "null");
    }

    #[test]
    fn test_from_array() {
        let params = Params::from([("id", 1), ("page", 2)]);
        assert_eq!(params.len(), 2);
        assert_eq!(params.display("id").as_deref(), Some("1"));
    }

    #[test]
    fn test_iter_pairs() {
        let params = Params::from([("a", "1"), ("b", "2")]);
        let pairs: Vec<(&str, String)> = params
            .iter()
            .map(|(k, v)| (k, display_value(v)))
            .collect();
        assert_eq!(pairs, vec![("a", "1".to_string()), ("b", "2".to_string())]);
    }

    #[test]
    fn test_serialize_preserves_order() {
        let params = Params::from([("z", 1), ("a", 2)]);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"z":1,"a":2}"#);
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let params: Params = serde_json::from_str(r#"{"id": 1, "tab": "comments"}"#).unwrap();
        assert_eq!(params.get("id"), Some(&Value::from(1)));
        assert_eq!(params.display("tab").as_deref(), Some("comments"));
    }

    #[test]
    fn test_default() {
        let params = Params::default();
        assert!(params.is_empty());
    }
}
