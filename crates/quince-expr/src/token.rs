//! Token definitions for the expression language.

use quince_common::Span;

/// A flat token record as exposed to consumers.
///
/// `value` is the raw source text of the token, quotes and sigils included.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

/// The consumer-facing category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Punctuator,
    Numeric,
    String,
    Identifier,
    Boolean,
    Null,
    RegularExpression,
    Template,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Punctuator => "Punctuator",
            TokenKind::Numeric => "Numeric",
            TokenKind::String => "String",
            TokenKind::Identifier => "Identifier",
            TokenKind::Boolean => "Boolean",
            TokenKind::Null => "Null",
            TokenKind::RegularExpression => "RegularExpression",
            TokenKind::Template => "Template",
        }
    }
}

/// A source comment, excluded from the token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub kind: CommentKind,
    /// Text between the comment markers, markers excluded.
    pub value: String,
    /// Span of the whole comment, markers included.
    pub span: Span,
}

/// Line (`//`) or block (`/* */`) comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    Block,
}

/// The kind of a lexeme as the parser sees it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LexKind {
    // Delimiters
    LParen,     // (
    RParen,     // )
    LBracket,   // [
    RBracket,   // ]
    LBrace,     // {
    RBrace,     // }

    // Punctuation
    Comma,      // ,
    Colon,      // :
    Semicolon,  // ;
    Dot,        // .
    Ellipsis,   // ...

    // Operators
    Plus,       // +
    Minus,      // -
    Bang,       // !
    Tilde,      // ~
    Star,       // *
    StarStar,   // **
    Slash,      // /
    Percent,    // %
    Lt,         // <
    Gt,         // >
    LtEq,       // <=
    GtEq,       // >=
    EqEq,       // ==
    BangEq,     // !=
    EqEqEq,     // ===
    BangEqEq,   // !==
    Amp,        // &
    Pipe,       // |
    Caret,      // ^
    LtLt,       // <<
    GtGt,       // >>
    GtGtGt,     // >>>
    AmpAmp,     // &&
    PipePipe,   // ||
    Coalesce,   // ??
    Eq,         // =

    // Literals
    Null,
    True,
    False,
    Num { value: f64, bigint: bool },
    Str(String),
    Regex { pattern: String, flags: String },
    /// A whole template literal, substitutions included, kept opaque.
    Template,

    Ident(String),

    Eof,
}

/// A lexeme with its kind and span.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Lexeme {
    pub kind: LexKind,
    pub span: Span,
}

impl Lexeme {
    pub fn new(kind: LexKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl LexKind {
    /// True if a `/` after this lexeme starts a regular expression rather
    /// than a division operator: only tokens that can end an expression
    /// put the scanner in division context.
    pub fn slash_means_division(&self) -> bool {
        matches!(
            self,
            LexKind::Null
                | LexKind::True
                | LexKind::False
                | LexKind::Num { .. }
                | LexKind::Str(_)
                | LexKind::Regex { .. }
                | LexKind::Template
                | LexKind::Ident(_)
                | LexKind::RParen
                | LexKind::RBracket
                | LexKind::RBrace
        )
    }

    fn token_kind(&self) -> Option<TokenKind> {
        match self {
            LexKind::Null => Some(TokenKind::Null),
            LexKind::True | LexKind::False => Some(TokenKind::Boolean),
            LexKind::Num { .. } => Some(TokenKind::Numeric),
            LexKind::Str(_) => Some(TokenKind::String),
            LexKind::Regex { .. } => Some(TokenKind::RegularExpression),
            LexKind::Template => Some(TokenKind::Template),
            LexKind::Ident(_) => Some(TokenKind::Identifier),
            LexKind::Eof => None,
            _ => Some(TokenKind::Punctuator),
        }
    }
}

/// Build the consumer-facing token list from the lexeme stream.
pub(crate) fn to_public(lexemes: &[Lexeme], src: &str) -> Vec<Token> {
    lexemes
        .iter()
        .filter_map(|lex| {
            let kind = lex.kind.token_kind()?;
            Some(Token {
                kind,
                value: src[lex.span.range()].to_string(),
                span: lex.span,
            })
        })
        .collect()
}
