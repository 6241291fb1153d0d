use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The runtime variant tag of a JSON value, as reported in errors.
///
/// Numbers are split by representation: a number is `Float` only when it is
/// representable solely as an `f64`, otherwise it is `Integer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl JsonType {
    /// Classifies a value by its variant tag.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Bool,
            Value::Number(n) if n.is_f64() => JsonType::Float,
            Value::Number(_) => JsonType::Integer,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonType::Null => "null",
            JsonType::Bool => "bool",
            JsonType::Integer => "integer",
            JsonType::Float => "float",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccessError {
    #[error("expected an object, found {0}")]
    NotAnObject(JsonType),

    #[error("key '{0}' not found")]
    KeyNotFound(String),

    #[error("expected an array, found {0}")]
    NotAnArray(JsonType),

    #[error("index {index} out of bounds (len: {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: JsonType,
        actual: JsonType,
    },

    #[error("path parse error in '{0}': {1}")]
    PathParse(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_classification() {
        assert_eq!(JsonType::of(&json!(25)), JsonType::Integer);
        assert_eq!(JsonType::of(&json!(-3)), JsonType::Integer);
        assert_eq!(JsonType::of(&json!(0.125)), JsonType::Float);
        assert_eq!(JsonType::of(&json!(1e300)), JsonType::Float);
    }

    #[test]
    fn test_variant_classification() {
        assert_eq!(JsonType::of(&json!(null)), JsonType::Null);
        assert_eq!(JsonType::of(&json!(true)), JsonType::Bool);
        assert_eq!(JsonType::of(&json!("s")), JsonType::String);
        assert_eq!(JsonType::of(&json!([1])), JsonType::Array);
        assert_eq!(JsonType::of(&json!({"a": 1})), JsonType::Object);
    }

    #[test]
    fn test_error_messages() {
        let err = AccessError::IndexOutOfBounds { index: 3, len: 1 };
        assert_eq!(err.to_string(), "index 3 out of bounds (len: 1)");

        let err = AccessError::TypeMismatch {
            expected: JsonType::String,
            actual: JsonType::Integer,
        };
        assert_eq!(err.to_string(), "type mismatch: expected string, found integer");
    }
}
