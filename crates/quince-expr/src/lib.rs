//! General-purpose expression-language parser.
//! 通用表达式语言解析器。
//!
//! This crate parses a C-like expression grammar — the superset every JSON
//! dialect embeds into: numbers in all their radix and BigInt forms,
//! single- and double-quoted strings, template literals, regular
//! expressions, identifiers, unary and binary operators, arrays with
//! elision holes, objects with every property form, calls, and comments.
//!
//! Consumers get a generic tree plus the flat token and comment lists, or
//! a located error. The grammar is deliberately wider than any consumer
//! accepts; narrowing is the consumer's job.

mod ast;
mod error;
mod lexer;
mod parser;
mod token;

pub use ast::{
    BinOp, Element, Expr, ExprKind, Lit, Member, Program, Property, PropertyKind, SpreadElement,
    Statement, UnaryOp,
};
pub use error::{ExprError, ExprErrorKind};
pub use token::{Comment, CommentKind, Token, TokenKind};

use quince_common::LineMap;

/// Default nesting depth limit.
pub const DEFAULT_MAX_DEPTH: u32 = 500;

/// Options for a parse, echoed through by embedding layers.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Include the flat token list in the result.
    pub tokens: bool,
    /// Include the comment list in the result.
    pub comments: bool,
    /// Expression nesting depth limit.
    pub max_depth: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tokens: true,
            comments: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Result of a successful parse.
#[derive(Debug)]
pub struct ExprParse {
    pub program: Program,
    pub tokens: Vec<Token>,
    pub comments: Vec<Comment>,
    /// Line index of the parsed source, for offset-to-position conversion.
    pub line_map: LineMap,
}

/// Parse source text into a generic expression program.
/// 将源文本解析为通用表达式程序。
pub fn parse_program(src: &str, options: &ParseOptions) -> Result<ExprParse, ExprError> {
    let line_map = LineMap::new(src);

    let output = lexer::Lexer::new(src, &line_map).tokenize()?;
    let tokens = if options.tokens {
        token::to_public(&output.lexemes, src)
    } else {
        Vec::new()
    };
    let comments = if options.comments {
        output.comments
    } else {
        Vec::new()
    };

    let mut parser = parser::Parser::new(src, output.lexemes, &line_map, options.max_depth);
    let program = parser.parse_program()?;

    Ok(ExprParse {
        program,
        tokens,
        comments,
        line_map,
    })
}
