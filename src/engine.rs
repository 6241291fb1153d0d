//! Path traversal and the typed access entry point.
use crate::error::{AccessError, JsonType};
use crate::extract::Extract;
use crate::path::PathSegment;
use serde_json::Value;

/// Resolves a single segment against a single value.
pub(crate) fn step<'a>(
    value: &'a Value,
    segment: &PathSegment,
) -> Result<&'a Value, AccessError> {
    match segment {
        PathSegment::Key(key) => match value {
            Value::Object(map) => map
                .get(key)
                .ok_or_else(|| AccessError::KeyNotFound(key.clone())),
            _ => Err(AccessError::NotAnObject(JsonType::of(value))),
        },
        PathSegment::Index(index) => match value {
            Value::Array(items) => {
                items.get(*index).ok_or(AccessError::IndexOutOfBounds {
                    index: *index,
                    len: items.len(),
                })
            }
            _ => Err(AccessError::NotAnArray(JsonType::of(value))),
        },
    }
}

/// Walks `path` from `root`, left to right, stopping at the first failing
/// segment. An empty path yields the root unchanged.
pub(crate) fn traverse<'a>(
    root: &'a Value,
    path: &[PathSegment],
) -> Result<&'a Value, AccessError> {
    let mut current = root;
    for segment in path {
        current = step(current, segment)?;
    }
    Ok(current)
}

/// Selects the value at `path` below `root` and hands it back as `T`.
///
/// The result borrows from `root`; nothing is copied or converted. A failed
/// traversal propagates its navigation error without attempting extraction.
pub fn access<'a, T: Extract<'a>>(
    root: &'a Value,
    path: &[PathSegment],
) -> Result<T, AccessError> {
    let value = traverse(root, path)?;
    T::extract(value)
}
