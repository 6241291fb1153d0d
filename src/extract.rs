//! The static mapping between requested target types and JSON variants.
use crate::error::{AccessError, JsonType};
use serde_json::{Map, Value};

mod private {
    use serde_json::{Map, Value};

    pub trait Sealed {}

    impl Sealed for bool {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for &str {}
    impl Sealed for &Vec<Value> {}
    impl Sealed for &Map<String, Value> {}
    impl Sealed for &Value {}
}

/// A target type the final value of a traversal can be handed back as.
///
/// The implementation set is closed: each target matches exactly its own JSON
/// variant and returns the payload by borrow, so requesting an unsupported
/// shape is rejected at compile time rather than during traversal. There is
/// no numeric conversion — an integer-tagged number does not extract as
/// `f64`, nor a float-tagged number as `i64`. `&Value` is the identity
/// extraction and never fails; use it for `null` leaves or anything that
/// needs manual inspection.
pub trait Extract<'a>: Sized + private::Sealed {
    #[doc(hidden)]
    fn extract(value: &'a Value) -> Result<Self, AccessError>;
}

fn mismatch(expected: JsonType, value: &Value) -> AccessError {
    AccessError::TypeMismatch {
        expected,
        actual: JsonType::of(value),
    }
}

impl<'a> Extract<'a> for bool {
    fn extract(value: &'a Value) -> Result<Self, AccessError> {
        value
            .as_bool()
            .ok_or_else(|| mismatch(JsonType::Bool, value))
    }
}

impl<'a> Extract<'a> for i64 {
    // `as_i64` is `None` for float-tagged numbers, so no Float -> Integer
    // coercion can slip through here.
    fn extract(value: &'a Value) -> Result<Self, AccessError> {
        value
            .as_i64()
            .ok_or_else(|| mismatch(JsonType::Integer, value))
    }
}

impl<'a> Extract<'a> for f64 {
    fn extract(value: &'a Value) -> Result<Self, AccessError> {
        // `Value::as_f64` widens integers, which would silently coerce
        // Integer -> Float; gate on the number's own representation instead.
        match value {
            Value::Number(n) if n.is_f64() => {
                n.as_f64().ok_or_else(|| mismatch(JsonType::Float, value))
            }
            _ => Err(mismatch(JsonType::Float, value)),
        }
    }
}

impl<'a> Extract<'a> for &'a str {
    fn extract(value: &'a Value) -> Result<Self, AccessError> {
        value
            .as_str()
            .ok_or_else(|| mismatch(JsonType::String, value))
    }
}

impl<'a> Extract<'a> for &'a Vec<Value> {
    fn extract(value: &'a Value) -> Result<Self, AccessError> {
        value
            .as_array()
            .ok_or_else(|| mismatch(JsonType::Array, value))
    }
}

impl<'a> Extract<'a> for &'a Map<String, Value> {
    fn extract(value: &'a Value) -> Result<Self, AccessError> {
        value
            .as_object()
            .ok_or_else(|| mismatch(JsonType::Object, value))
    }
}

impl<'a> Extract<'a> for &'a Value {
    fn extract(value: &'a Value) -> Result<Self, AccessError> {
        Ok(value)
    }
}
