//! Common source-location types for the quince parser suite.
//!
//! This crate provides the foundational types used across every layer:
//! - `Span`: half-open byte range into a source buffer
//! - `Position` / `Loc`: human-facing line/column locations
//! - `LineMap`: offset-to-position conversion built once per parse

mod line_map;
mod span;

pub use line_map::LineMap;
pub use span::{BytePos, Loc, Position, Span};
