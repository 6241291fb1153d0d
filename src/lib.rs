//! Typed path-based access into parsed JSON values.
//!
//! This crate reads an already-parsed, immutable [`serde_json::Value`] tree
//! and resolves a path of object keys and array indices down to a single
//! node, handing it back as the statically-requested type. Every result is a
//! borrow into the original tree: nothing is copied, converted, or allocated
//! on the success path, and the borrow checker ties each view's lifetime to
//! the root.
//!
//! Paths are built at the call site with the [`path!`] macro or parsed from
//! a dotted expression with [`parse_path`]. This is deliberately not a query
//! language: there are no wildcards, filters, slices, or recursive descent.

pub mod engine;
pub mod error;
pub mod path;

mod extract;
mod parser;

// --- Public API ---
pub use engine::access;
pub use error::{AccessError, JsonType};
pub use extract::Extract;
pub use parser::parse_path;
pub use path::{Path, PathSegment};
