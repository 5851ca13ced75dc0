//! Domain AST nodes.
//! 领域 AST 节点。
//!
//! Every node carries both a byte `span` and a line/column `loc`, already
//! relative to the original document. The node vocabulary is closed:
//! nothing outside JSON value shapes survives into this tree.

use quince_common::{Loc, Span};
use serde::Serialize;

/// Identifiers admitted in value position.
/// 允许出现在值位置的标识符。
pub const SPECIAL_IDENTIFIERS: [&str; 3] = ["NaN", "Infinity", "undefined"];

/// True for the identifier spellings that act as literal-equivalent values.
/// 对于可作为字面量等价值的标识符拼写返回 true。
pub fn is_special_identifier(name: &str) -> bool {
    SPECIAL_IDENTIFIERS.contains(&name)
}

/// The root of a parsed document.
/// 解析后文档的根节点。
///
/// `body` always holds exactly one expression statement.
/// `body` 始终只包含一个表达式语句。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub body: Vec<Statement>,
    pub comments: Vec<Comment>,
    pub tokens: Vec<Token>,
    pub span: Span,
    pub loc: Loc,
}

impl Program {
    /// The single top-level expression.
    /// 顶层的唯一表达式。
    pub fn expression(&self) -> &Expression {
        let Statement::Expression(stmt) = &self.body[0];
        &stmt.expression
    }
}

/// A statement. JSON documents only ever contain expression statements.
/// 语句。JSON 文档只会包含表达式语句。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    Expression(ExpressionStatement),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
    pub loc: Loc,
}

/// A JSON value expression.
/// JSON 值表达式。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    Array(ArrayExpression),
    Object(ObjectExpression),
    Literal(Literal),
    Identifier(Identifier),
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Array(n) => n.span,
            Expression::Object(n) => n.span,
            Expression::Literal(n) => n.span,
            Expression::Identifier(n) => n.span,
        }
    }

    pub fn loc(&self) -> Loc {
        match self {
            Expression::Array(n) => n.loc,
            Expression::Object(n) => n.loc,
            Expression::Literal(n) => n.loc,
            Expression::Identifier(n) => n.loc,
        }
    }

    /// The consumer-facing node type string.
    /// 面向消费者的节点类型字符串。
    pub fn node_type(&self) -> &'static str {
        match self {
            Expression::Array(_) => "JSONArrayExpression",
            Expression::Object(_) => "JSONObjectExpression",
            Expression::Literal(_) => "JSONLiteral",
            Expression::Identifier(_) => "JSONIdentifier",
        }
    }
}

/// An array value. Sparse slots never survive conversion.
/// 数组值。稀疏空位不会出现在转换结果中。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayExpression {
    pub elements: Vec<Expression>,
    pub span: Span,
    pub loc: Loc,
}

/// An object value.
/// 对象值。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectExpression {
    pub properties: Vec<Property>,
    pub span: Span,
    pub loc: Loc,
}

/// A plain `key: value` member. No other member form survives conversion.
/// 普通的 `key: value` 成员。其他成员形式不会出现在转换结果中。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub key: PropertyKey,
    pub value: Expression,
    pub span: Span,
    pub loc: Loc,
}

/// A property key: a string literal or a bare identifier.
/// 属性键：字符串字面量或裸标识符。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PropertyKey {
    Literal(Literal),
    Identifier(Identifier),
}

impl PropertyKey {
    pub fn span(&self) -> Span {
        match self {
            PropertyKey::Literal(n) => n.span,
            PropertyKey::Identifier(n) => n.span,
        }
    }

    pub fn loc(&self) -> Loc {
        match self {
            PropertyKey::Literal(n) => n.loc,
            PropertyKey::Identifier(n) => n.loc,
        }
    }

    /// The key as the member name it denotes.
    /// 该键所表示的成员名。
    pub fn name(&self) -> &str {
        match self {
            PropertyKey::Literal(lit) => match &lit.value {
                LiteralValue::String(s) => s,
                // Key literals are strings by construction.
                // 键字面量按构造保证为字符串。
                _ => lit.raw.as_str(),
            },
            PropertyKey::Identifier(ident) => &ident.name,
        }
    }
}

/// A literal value: string, number, boolean, or null.
/// 字面量值：字符串、数字、布尔值或 null。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    pub value: LiteralValue,
    /// Raw source text, sign included for folded signed numbers.
    /// 原始源文本，折叠后的带符号数字包含符号。
    pub raw: String,
    pub span: Span,
    pub loc: Loc,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

/// One of the special literal-equivalent identifiers, or a bare property
/// key carried through as written.
/// 特殊的字面量等价标识符之一，或按原样保留的裸属性键。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
    pub loc: Loc,
}

/// A flat token record with corrected locations.
/// 位置已修正的扁平 token 记录。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
    pub loc: Loc,
}

/// The domain token vocabulary.
/// 领域 token 词汇表。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
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

/// A comment with corrected locations.
/// 位置已修正的注释。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub kind: CommentKind,
    pub value: String,
    pub span: Span,
    pub loc: Loc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommentKind {
    Line,
    Block,
}
