//! Generic expression AST.
//! 通用表达式 AST。
//!
//! This tree deliberately keeps the full expression-language vocabulary,
//! including constructs no JSON dialect accepts; narrowing it down is the
//! consumer's job.

use quince_common::Span;

/// A parsed program: a list of expression statements.
/// 解析后的程序：表达式语句的列表。
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Statement>,
    pub span: Span,
}

/// An expression statement.
/// 表达式语句。
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub expression: Expr,
    pub span: Span,
}

/// An expression.
/// 表达式。
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The node type name used in diagnostics.
    /// 用于诊断信息的节点类型名。
    pub fn type_name(&self) -> &'static str {
        match &self.kind {
            ExprKind::Literal(_) => "Literal",
            ExprKind::Identifier(_) => "Identifier",
            ExprKind::Template => "TemplateLiteral",
            ExprKind::Function => "FunctionExpression",
            ExprKind::Array(_) => "ArrayExpression",
            ExprKind::Object(_) => "ObjectExpression",
            ExprKind::Unary { .. } => "UnaryExpression",
            ExprKind::Binary { .. } => "BinaryExpression",
            ExprKind::Call { .. } => "CallExpression",
            ExprKind::Paren(_) => "ParenthesizedExpression",
        }
    }
}

/// Expression kind.
/// 表达式类型。
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Literal value / 字面量
    Literal(Lit),
    /// Identifier reference / 标识符引用
    Identifier(String),
    /// Template literal, kept opaque / 模板字符串（不展开内部结构）
    Template,
    /// Function expression in method or accessor position, kept opaque
    /// 方法或访问器位置的函数表达式（不展开内部结构）
    Function,
    /// Array literal; `None` slots are elision holes
    /// 数组字面量；`None` 表示省略的空位
    Array(Vec<Option<Element>>),
    /// Object literal / 对象字面量
    Object(Vec<Member>),
    /// Prefix unary operation / 前缀一元运算
    Unary { op: UnaryOp, argument: Box<Expr> },
    /// Binary operation / 二元运算
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Call expression / 调用表达式
    Call {
        callee: Box<Expr>,
        arguments: Vec<Element>,
    },
    /// Explicitly parenthesized expression / 显式括号包裹的表达式
    Paren(Box<Expr>),
}

/// A literal value.
/// 字面量的值。
#[derive(Debug, Clone, PartialEq)]
pub enum Lit {
    Null,
    Bool(bool),
    Number(f64),
    /// BigInt literal; the numeric value is not materialized.
    /// BigInt 字面量；不物化其数值。
    BigInt,
    Regex { pattern: String, flags: String },
    String(String),
}

impl Lit {
    /// The literal subtype name used in diagnostics.
    /// 用于诊断信息的字面量子类型名。
    pub fn subtype_name(&self) -> &'static str {
        match self {
            Lit::Null => "null",
            Lit::Bool(_) => "boolean",
            Lit::Number(_) => "number",
            Lit::BigInt => "bigint",
            Lit::Regex { .. } => "regex",
            Lit::String(_) => "string",
        }
    }
}

/// An array slot or call argument.
/// 数组元素或调用实参。
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Expr(Expr),
    Spread(SpreadElement),
}

impl Element {
    pub fn span(&self) -> Span {
        match self {
            Element::Expr(e) => e.span,
            Element::Spread(s) => s.span,
        }
    }
}

/// A spread element `...expr`.
/// 展开元素 `...expr`。
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadElement {
    pub argument: Box<Expr>,
    pub span: Span,
}

/// An object member: a property or a spread element.
/// 对象成员：属性或展开元素。
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Property(Property),
    Spread(SpreadElement),
}

/// An object property in any of its syntactic forms.
/// 对象属性的任意语法形式。
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: Expr,
    pub value: Expr,
    pub kind: PropertyKind,
    pub method: bool,
    pub shorthand: bool,
    pub computed: bool,
    pub span: Span,
}

/// Plain `key: value` property, or a `get`/`set` accessor.
/// 普通的 `key: value` 属性，或 `get`/`set` 访问器。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

/// Prefix unary operator.
/// 前缀一元运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    BitNot,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
        }
    }
}

/// Binary operator.
/// 二元运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Exp,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Eq,
    NotEq,
    StrictEq,
    StrictNotEq,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    UShr,
    And,
    Or,
    Coalesce,
}

impl BinOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Rem => "%",
            BinOp::Exp => "**",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::LtEq => "<=",
            BinOp::GtEq => ">=",
            BinOp::Eq => "==",
            BinOp::NotEq => "!=",
            BinOp::StrictEq => "===",
            BinOp::StrictNotEq => "!==",
            BinOp::BitAnd => "&",
            BinOp::BitOr => "|",
            BinOp::BitXor => "^",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
            BinOp::UShr => ">>>",
            BinOp::And => "&&",
            BinOp::Or => "||",
            BinOp::Coalesce => "??",
        }
    }
}
