//! JSON-value-shaped syntax tree for quince.
//!
//! This crate defines the narrow tree the JSON layer produces — objects,
//! arrays, literals, and the few identifiers JSON dialects admit — along
//! with the visitor-key table, a generic tree walker, and static value
//! extraction.

mod ast;
mod value;
mod visit;

pub use ast::*;
pub use value::{static_value, StaticValue};
pub use visit::{visitor_keys, NodeRef, VISITOR_KEYS};
