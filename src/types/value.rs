//! Scalar values and their primitive kinds.
//!
//! `Value` is the tagged union stored in records and returned from queries.
//! Conversions to and from the SQLite backend and from JSON live here.

use super::error::{Result, SqlError};
use rusqlite::types::{ToSql, ToSqlOutput, ValueRef};
use serde::Serialize;
use std::fmt;

/// Closed set of value categories the schema inference distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Null,
    Integer,
    Float,
    Text,
    Binary,
    Boolean,
}

impl PrimitiveKind {
    /// SQL type keyword declared for a column of this kind.
    pub fn sql_type(self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Integer => "INTEGER",
            Self::Float => "REAL",
            Self::Text => "TEXT",
            Self::Binary => "BLOB",
            Self::Boolean => "BOOLEAN",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_type())
    }
}

/// A single scalar field value.
///
/// Serializes untagged, so `Text("a")` renders as `"a"` and `Null` as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Binary(Vec<u8>),
    Boolean(bool),
}

impl Value {
    /// Primitive kind of this value.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Null => PrimitiveKind::Null,
            Self::Integer(_) => PrimitiveKind::Integer,
            Self::Float(_) => PrimitiveKind::Float,
            Self::Text(_) => PrimitiveKind::Text,
            Self::Binary(_) => PrimitiveKind::Binary,
            Self::Boolean(_) => PrimitiveKind::Boolean,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Binary(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = SqlError;

    /// Convert a JSON scalar.
    ///
    /// Numbers that fit `i64` become `Integer`, every other number becomes
    /// `Float`. Arrays and objects are rejected.
    fn try_from(json: serde_json::Value) -> Result<Self> {
        use serde_json::Value as Json;

        match json {
            Json::Null => Ok(Self::Null),
            Json::Bool(b) => Ok(Self::Boolean(b)),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Ok(Self::Integer(i)),
                None => n
                    .as_f64()
                    .map(Self::Float)
                    .ok_or_else(|| SqlError::unsupported(format!("number out of range: {}", n))),
            },
            Json::String(s) => Ok(Self::Text(s)),
            other @ (Json::Array(_) | Json::Object(_)) => Err(SqlError::unsupported(format!(
                "nested JSON is not a scalar: {}",
                other
            ))),
        }
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Self::Null => ToSqlOutput::Owned(rusqlite::types::Value::Null),
            Self::Integer(i) => ToSqlOutput::from(*i),
            Self::Float(f) => ToSqlOutput::from(*f),
            Self::Text(s) => ToSqlOutput::from(s.as_str()),
            Self::Binary(b) => ToSqlOutput::from(b.as_slice()),
            // SQLite has no boolean storage class; stored as 0/1
            Self::Boolean(b) => ToSqlOutput::from(*b),
        })
    }
}

impl From<ValueRef<'_>> for Value {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(i) => Self::Integer(i),
            ValueRef::Real(f) => Self::Float(f),
            ValueRef::Text(t) => Self::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Self::Binary(b.to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_to_sql_type_table() {
        let expected = [
            (PrimitiveKind::Null, "NULL"),
            (PrimitiveKind::Integer, "INTEGER"),
            (PrimitiveKind::Float, "REAL"),
            (PrimitiveKind::Text, "TEXT"),
            (PrimitiveKind::Binary, "BLOB"),
            (PrimitiveKind::Boolean, "BOOLEAN"),
        ];

        for (kind, sql) in expected {
            assert_eq!(kind.sql_type(), sql);
        }
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::Null.kind(), PrimitiveKind::Null);
        assert_eq!(Value::from(3).kind(), PrimitiveKind::Integer);
        assert_eq!(Value::from(1.5).kind(), PrimitiveKind::Float);
        assert_eq!(Value::from("x").kind(), PrimitiveKind::Text);
        assert_eq!(Value::from(vec![0u8, 1]).kind(), PrimitiveKind::Binary);
        assert_eq!(Value::from(true).kind(), PrimitiveKind::Boolean);
        assert_eq!(Value::from(None::<i64>).kind(), PrimitiveKind::Null);
    }

    #[test]
    fn test_json_scalars_convert() {
        assert_eq!(Value::try_from(json!(null)).unwrap(), Value::Null);
        assert_eq!(Value::try_from(json!(true)).unwrap(), Value::Boolean(true));
        assert_eq!(Value::try_from(json!(42)).unwrap(), Value::Integer(42));
        assert_eq!(Value::try_from(json!(2.5)).unwrap(), Value::Float(2.5));
        assert_eq!(Value::try_from(json!("hi")).unwrap(), Value::from("hi"));
    }

    #[test]
    fn test_json_u64_beyond_i64_becomes_float() {
        let v = Value::try_from(json!(u64::MAX)).unwrap();
        assert_eq!(v.kind(), PrimitiveKind::Float);
    }

    #[test]
    fn test_json_nested_rejected() {
        assert!(matches!(
            Value::try_from(json!([1, 2])),
            Err(SqlError::UnsupportedValue(_))
        ));
        assert!(matches!(
            Value::try_from(json!({"a": 1})),
            Err(SqlError::UnsupportedValue(_))
        ));
    }

    #[test]
    fn test_serialize_untagged() {
        let row = vec![Value::Integer(1), Value::Null, Value::from("x")];
        assert_eq!(serde_json::to_value(&row).unwrap(), json!([1, null, "x"]));
    }
}
