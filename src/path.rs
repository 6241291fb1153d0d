//! Defines the segment types used to address a node in a JSON tree.

/// A single step in a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// An object key (e.g. `.name`).
    Key(String),
    /// An array index (e.g. `[0]`).
    Index(usize),
}

/// An ordered sequence of key/index lookups descending from a root value.
///
/// An empty path addresses the root itself.
pub type Path = Vec<PathSegment>;

impl From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        PathSegment::Key(value.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(value: String) -> Self {
        PathSegment::Key(value)
    }
}

impl From<usize> for PathSegment {
    fn from(value: usize) -> Self {
        PathSegment::Index(value)
    }
}

/// Builds a [`Path`] from a heterogeneous list of keys and indices.
///
/// `path!["orders", 0, "id"]` addresses `.orders[0].id`.
#[macro_export]
macro_rules! path {
    () => (
        std::vec::Vec::<$crate::PathSegment>::new()
    );
    ($($x:expr),+ $(,)?) => (
        <[_]>::into_vec(
            std::boxed::Box::new([$($crate::PathSegment::from($x)),+])
        )
    );
}

impl PathSegment {
    /// Returns the key text if this segment is a key lookup.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(k) => Some(k.as_str()),
            PathSegment::Index(_) => None,
        }
    }

    /// Returns the index if this segment is an array lookup.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Key(_) => None,
            PathSegment::Index(i) => Some(*i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_macro_builds_empty_path() {
        let p = path![];
        assert!(p.is_empty());
    }

    #[test]
    fn test_macro_mixes_keys_and_indices() {
        let p = path!["orders", 0, "id"];
        assert_eq!(
            p,
            vec![
                PathSegment::Key("orders".to_string()),
                PathSegment::Index(0),
                PathSegment::Key("id".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(PathSegment::from("a"), PathSegment::Key("a".to_string()));
        assert_eq!(
            PathSegment::from("b".to_string()),
            PathSegment::Key("b".to_string())
        );
        assert_eq!(PathSegment::from(7usize), PathSegment::Index(7));
    }

    #[test]
    fn test_segment_accessors() {
        let key = PathSegment::Key("name".to_string());
        let index = PathSegment::Index(3);
        assert_eq!(key.as_key(), Some("name"));
        assert_eq!(key.as_index(), None);
        assert_eq!(index.as_key(), None);
        assert_eq!(index.as_index(), Some(3));
    }
}
