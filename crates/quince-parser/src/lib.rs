//! JSON dialect parser for quince.
//! quince 的 JSON 方言解析器。
//!
//! Parses text written in the JSON dialect family — strict JSON, JSON
//! with comments, and JSON5-style extensions — into a syntax tree whose
//! node vocabulary is restricted to JSON value shapes. Rather than
//! carrying its own grammar, the parser embeds the input in a synthetic
//! call expression, delegates to the general expression parser, and
//! validates the generic tree down to the domain vocabulary, repairing
//! all position information to account for the synthetic wrapping.
//!
//! The parser is deliberately permissive of the full dialect superset;
//! deciding which extensions a given dialect accepts is the consuming
//! rule layer's policy, not this crate's.
//!
//! ```
//! let result = quince_parser::parse_json("{a: [1, 2], b: 'three'}").unwrap();
//! let ast = &result;
//! assert_eq!(ast.tokens.len(), 13);
//! ```

mod classify;
mod convert;
mod relocate;
mod wrap;

pub use quince_diagnostic::{emit, ErrorCode, SyntaxError};
pub use quince_expr::{ParseOptions, DEFAULT_MAX_DEPTH};
pub use quince_syntax::*;

/// Marker block letting downstream rule engines detect that a tree was
/// produced by this parser rather than a generic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserServices {
    pub is_json: bool,
}

/// A successful parse.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub ast: Program,
    /// Child field names per node type, for generic traversal.
    pub visitor_keys: &'static [(&'static str, &'static [&'static str])],
    pub services: ParserServices,
}

/// Parse a JSON-dialect document.
/// 解析 JSON 方言文档。
///
/// Options are forwarded to the delegate expression parser verbatim,
/// except that token and comment capture stay on internally; turning them
/// off only empties the lists on the result.
pub fn parse(text: &str, options: &ParseOptions) -> Result<ParseResult, SyntaxError> {
    let ast = wrap::parse_document(text, options)?;
    Ok(ParseResult {
        ast,
        visitor_keys: VISITOR_KEYS,
        services: ParserServices { is_json: true },
    })
}

/// Parse with default options, returning just the tree.
/// 使用默认选项解析，只返回语法树。
pub fn parse_json(text: &str) -> Result<Program, SyntaxError> {
    parse(text, &ParseOptions::default()).map(|result| result.ast)
}
