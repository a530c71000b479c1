//! Reported validation failures
//!
//! A [`Violation`] is data, not an error: constraints return as many as they
//! find and the traversal concatenates them. Each one carries the path of
//! the offending value and a [`Details`] payload that is transport-safe by
//! construction.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ============================================================================
// VIOLATION
// ============================================================================

/// One reported validation failure.
///
/// Violations are built through [`Context::violation`], so the path always
/// matches the place the constraint was invoked.
///
/// [`Context::violation`]: crate::foundation::Context::violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    path: String,
    message: String,
    #[serde(default, skip_serializing_if = "Details::is_empty")]
    details: Details,
}

impl Violation {
    pub(crate) fn new(path: String, message: String, details: Details) -> Self {
        Self {
            path,
            message,
            details,
        }
    }

    /// Structural address of the offending value (`""` for the root).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Human-readable description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured parameters of the failure.
    #[must_use]
    pub const fn details(&self) -> &Details {
        &self.details
    }

    /// Consumes the violation and returns its parts.
    #[must_use]
    pub fn into_parts(self) -> (String, String, Details) {
        (self.path, self.message, self.details)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

// ============================================================================
// DETAILS
// ============================================================================

/// Ordered key/value parameters attached to a [`Violation`].
///
/// Values are JSON values, so converting details to a wire document cannot
/// fail. Values that have no JSON form go through [`with_display`] (their
/// `Display` string) or [`with_error`] (the error message).
///
/// [`with_display`]: Details::with_display
/// [`with_error`]: Details::with_error
///
/// # Examples
///
/// ```rust
/// use trellis_validator::Details;
///
/// let details = Details::new()
///     .with("actual", 2)
///     .with("expected", 1)
///     .with("fields", vec!["Field1", "Field2"]);
///
/// assert_eq!(
///     details.into_value().to_string(),
///     r#"{"actual":2,"expected":1,"fields":["Field1","Field2"]}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Details(Map<String, Value>);

impl Details {
    /// Empty details.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a JSON-convertible value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a value by its `Display` string.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_display(self, key: impl Into<String>, value: &impl fmt::Display) -> Self {
        self.with(key, value.to_string())
    }

    /// Adds an error by its message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error(self, key: impl Into<String>, error: &dyn std::error::Error) -> Self {
        self.with(key, error.to_string())
    }

    /// Inserts a value, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Borrows the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Converts into a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Details {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Details> for Value {
    fn from(details: Details) -> Self {
        details.into_value()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Details {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Details {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn details_preserve_insertion_order() {
        let details = Details::new().with("z", 1).with("a", 2);
        let keys: Vec<&str> = details.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn unsupported_values_are_stringified() {
        let details = Details::new().with_display("at", &std::net::Ipv4Addr::LOCALHOST);
        assert_eq!(details.get("at"), Some(&json!("127.0.0.1")));
    }

    #[test]
    fn errors_become_messages() {
        let err = "x".parse::<u8>().unwrap_err();
        let details = Details::new().with_error("cause", &err);
        assert_eq!(details.get("cause"), Some(&json!(err.to_string())));
    }

    #[test]
    fn nested_values_are_kept() {
        let details = Details::new()
            .with("none", Value::Null)
            .with("flag", true)
            .with("ratio", 0.5)
            .with("nested", json!({"k": [1, "two"]}));
        assert_eq!(
            details.into_value(),
            json!({"none": null, "flag": true, "ratio": 0.5, "nested": {"k": [1, "two"]}})
        );
    }

    #[test]
    fn violation_display_includes_path() {
        let v = Violation::new(".[0]".into(), "bad".into(), Details::new());
        assert_eq!(v.to_string(), ".[0]: bad");
        let root = Violation::new(String::new(), "bad".into(), Details::new());
        assert_eq!(root.to_string(), "bad");
    }

    #[test]
    fn violation_serializes_without_empty_details() {
        let v = Violation::new(".name".into(), "required".into(), Details::new());
        assert_eq!(
            serde_json::to_value(&v).unwrap(),
            json!({"path": ".name", "message": "required"})
        );

        let back: Violation =
            serde_json::from_value(json!({"path": ".name", "message": "required"})).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn details_collect_from_pairs() {
        let details: Details = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(details.len(), 2);
        assert_eq!(details.into_value(), json!({"a": 1, "b": 2}));
    }
}
