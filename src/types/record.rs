//! Record: an insertion-ordered mapping from field name to `Value`.

use super::error::{Result, SqlError};
use super::value::Value;

/// One input row before it is aligned to a table's columns.
///
/// Fields keep the order in which they were first inserted; column order of
/// an inferred schema follows it. Records in one batch may carry different
/// field sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `field` to `value`.
    ///
    /// An existing field is overwritten in place and keeps its position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        let value = value.into();

        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((field, value)),
        }
    }

    /// Builder form of [`Record::insert`].
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Build a record from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns `SqlError::UnsupportedValue` if `json` is not an object or a
    /// member is not a scalar
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(field, value)| Value::try_from(value).map(|value| (field, value)))
                .collect(),
            other => Err(SqlError::unsupported(format!(
                "record must be a JSON object, got {}",
                other
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut record = Record::new().with("b", 1).with("a", 2);
        record.insert("b", "x");

        let fields: Vec<_> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(fields, vec!["b", "a"]);
        assert_eq!(record.get("b"), Some(&Value::from("x")));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_missing_field() {
        let record = Record::new().with("a", 1);
        assert!(record.contains("a"));
        assert!(!record.contains("b"));
        assert_eq!(record.get("b"), None);
    }

    #[test]
    fn test_from_json_preserves_key_order() {
        let record = Record::from_json(json!({"z": 1, "a": "x", "m": null})).unwrap();

        let fields: Vec<_> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(fields, vec!["z", "a", "m"]);
        assert_eq!(record.get("m"), Some(&Value::Null));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(Record::from_json(json!([1, 2])).is_err());
        assert!(Record::from_json(json!({"a": [1]})).is_err());
    }
}
