//! The expression parser.
//!
//! A recursive descent parser with precedence climbing over the lexeme
//! stream. Unlike a compiler front end it does not recover: the first
//! error aborts the parse, because consumers treat the parse as a single
//! accept/reject decision.

use crate::ast::{
    BinOp, Element, Expr, ExprKind, Lit, Member, Program, Property, PropertyKind, SpreadElement,
    Statement, UnaryOp,
};
use crate::error::{ExprError, ExprErrorKind};
use crate::token::{LexKind, Lexeme};
use quince_common::{BytePos, LineMap, Span};

pub(crate) struct Parser<'src> {
    src: &'src str,
    lexemes: Vec<Lexeme>,
    pos: usize,
    line_map: &'src LineMap,
    /// Current expression nesting depth
    depth: u32,
    /// Nesting depth limit; exceeding it aborts the parse
    max_depth: u32,
}

impl<'src> Parser<'src> {
    pub fn new(
        src: &'src str,
        lexemes: Vec<Lexeme>,
        line_map: &'src LineMap,
        max_depth: u32,
    ) -> Self {
        Self {
            src,
            lexemes,
            pos: 0,
            line_map,
            depth: 0,
            max_depth,
        }
    }

    /// Parse a complete program: expression statements with optional `;`.
    pub fn parse_program(&mut self) -> Result<Program, ExprError> {
        let mut body = Vec::new();

        while self.eat(&LexKind::Semicolon) {}
        while !self.at_eof() {
            let expression = self.parse_expression()?;
            let span = expression.span;
            body.push(Statement { expression, span });
            while self.eat(&LexKind::Semicolon) {}
        }

        Ok(Program {
            body,
            span: Span::from_usize(0, self.src.len()),
        })
    }

    pub fn parse_expression(&mut self) -> Result<Expr, ExprError> {
        self.enter()?;
        let result = self.parse_binary(1);
        self.leave();
        result
    }

    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr, ExprError> {
        let mut left = self.parse_unary()?;

        loop {
            let Some((op, prec, right_assoc)) = self.peek_binary_op() else {
                break;
            };
            if prec < min_prec {
                break;
            }
            self.bump();

            let next_min = if right_assoc { prec } else { prec + 1 };
            let right = self.parse_binary(next_min)?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn peek_binary_op(&self) -> Option<(BinOp, u8, bool)> {
        let (op, prec) = match self.current_kind() {
            LexKind::PipePipe => (BinOp::Or, 1),
            LexKind::Coalesce => (BinOp::Coalesce, 1),
            LexKind::AmpAmp => (BinOp::And, 2),
            LexKind::Pipe => (BinOp::BitOr, 3),
            LexKind::Caret => (BinOp::BitXor, 4),
            LexKind::Amp => (BinOp::BitAnd, 5),
            LexKind::EqEq => (BinOp::Eq, 6),
            LexKind::BangEq => (BinOp::NotEq, 6),
            LexKind::EqEqEq => (BinOp::StrictEq, 6),
            LexKind::BangEqEq => (BinOp::StrictNotEq, 6),
            LexKind::Lt => (BinOp::Lt, 7),
            LexKind::Gt => (BinOp::Gt, 7),
            LexKind::LtEq => (BinOp::LtEq, 7),
            LexKind::GtEq => (BinOp::GtEq, 7),
            LexKind::LtLt => (BinOp::Shl, 8),
            LexKind::GtGt => (BinOp::Shr, 8),
            LexKind::GtGtGt => (BinOp::UShr, 8),
            LexKind::Plus => (BinOp::Add, 9),
            LexKind::Minus => (BinOp::Sub, 9),
            LexKind::Star => (BinOp::Mul, 10),
            LexKind::Slash => (BinOp::Div, 10),
            LexKind::Percent => (BinOp::Rem, 10),
            LexKind::StarStar => (BinOp::Exp, 11),
            _ => return None,
        };
        Some((op, prec, op == BinOp::Exp))
    }

    fn parse_unary(&mut self) -> Result<Expr, ExprError> {
        let op = match self.current_kind() {
            LexKind::Plus => Some(UnaryOp::Plus),
            LexKind::Minus => Some(UnaryOp::Minus),
            LexKind::Bang => Some(UnaryOp::Not),
            LexKind::Tilde => Some(UnaryOp::BitNot),
            _ => None,
        };

        if let Some(op) = op {
            self.enter()?;
            let op_span = self.bump().span;
            let argument = self.parse_unary()?;
            self.leave();
            let span = op_span.merge(argument.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    argument: Box::new(argument),
                },
                span,
            ));
        }

        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.parse_primary()?;

        while self.check(&LexKind::LParen) {
            let (arguments, close) = self.parse_arguments()?;
            let span = expr.span.merge(close);
            expr = Expr::new(
                ExprKind::Call {
                    callee: Box::new(expr),
                    arguments,
                },
                span,
            );
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, ExprError> {
        let lexeme = self.current().clone();
        let kind = match lexeme.kind {
            LexKind::Null => ExprKind::Literal(Lit::Null),
            LexKind::True => ExprKind::Literal(Lit::Bool(true)),
            LexKind::False => ExprKind::Literal(Lit::Bool(false)),
            LexKind::Num { value, bigint } => {
                ExprKind::Literal(if bigint { Lit::BigInt } else { Lit::Number(value) })
            }
            LexKind::Str(value) => ExprKind::Literal(Lit::String(value)),
            LexKind::Regex { pattern, flags } => {
                ExprKind::Literal(Lit::Regex { pattern, flags })
            }
            LexKind::Template => ExprKind::Template,
            LexKind::Ident(name) => ExprKind::Identifier(name),
            LexKind::LBracket => return self.parse_array(),
            LexKind::LBrace => return self.parse_object(),
            LexKind::LParen => {
                let open = self.bump().span;
                let inner = self.parse_expression()?;
                let close = self.expect(&LexKind::RParen)?;
                return Ok(Expr::new(
                    ExprKind::Paren(Box::new(inner)),
                    open.merge(close),
                ));
            }
            _ => return Err(self.unexpected()),
        };

        self.bump();
        Ok(Expr::new(kind, lexeme.span))
    }

    /// Parse `( arguments )`, trailing comma allowed.
    fn parse_arguments(&mut self) -> Result<(Vec<Element>, Span), ExprError> {
        self.expect(&LexKind::LParen)?;

        let mut arguments = Vec::new();
        while !self.check(&LexKind::RParen) {
            let element = if self.check(&LexKind::Ellipsis) {
                Element::Spread(self.parse_spread()?)
            } else {
                Element::Expr(self.parse_expression()?)
            };
            arguments.push(element);

            if !self.eat(&LexKind::Comma) {
                break;
            }
        }

        let close = self.expect(&LexKind::RParen)?;
        Ok((arguments, close))
    }

    fn parse_spread(&mut self) -> Result<SpreadElement, ExprError> {
        let dots = self.expect(&LexKind::Ellipsis)?;
        let argument = self.parse_expression()?;
        let span = dots.merge(argument.span);
        Ok(SpreadElement {
            argument: Box::new(argument),
            span,
        })
    }

    /// Parse an array literal. A lone comma yields an elision hole.
    fn parse_array(&mut self) -> Result<Expr, ExprError> {
        let open = self.expect(&LexKind::LBracket)?;

        let mut elements = Vec::new();
        loop {
            if self.check(&LexKind::RBracket) {
                break;
            }
            if self.eat(&LexKind::Comma) {
                elements.push(None);
                continue;
            }

            let element = if self.check(&LexKind::Ellipsis) {
                Element::Spread(self.parse_spread()?)
            } else {
                Element::Expr(self.parse_expression()?)
            };
            elements.push(Some(element));

            if !self.eat(&LexKind::Comma) {
                break;
            }
        }

        let close = self.expect(&LexKind::RBracket)?;
        Ok(Expr::new(ExprKind::Array(elements), open.merge(close)))
    }

    /// Parse an object literal, trailing comma allowed.
    fn parse_object(&mut self) -> Result<Expr, ExprError> {
        let open = self.expect(&LexKind::LBrace)?;

        let mut properties = Vec::new();
        while !self.check(&LexKind::RBrace) {
            properties.push(self.parse_member()?);
            if !self.eat(&LexKind::Comma) {
                break;
            }
        }

        let close = self.expect(&LexKind::RBrace)?;
        Ok(Expr::new(ExprKind::Object(properties), open.merge(close)))
    }

    /// Parse one object member in any syntactic form: spread, accessor,
    /// `key: value`, method, or shorthand.
    fn parse_member(&mut self) -> Result<Member, ExprError> {
        if self.check(&LexKind::Ellipsis) {
            return Ok(Member::Spread(self.parse_spread()?));
        }

        let start = self.current_span();

        // `get`/`set` followed by a property name is an accessor; `get`
        // followed by `:`, `(`, `,` or `}` is an ordinary key named "get".
        let accessor = match self.current_kind() {
            LexKind::Ident(name)
                if (name == "get" || name == "set") && self.next_starts_property_name() =>
            {
                Some(if name == "get" {
                    PropertyKind::Get
                } else {
                    PropertyKind::Set
                })
            }
            _ => None,
        };

        if let Some(kind) = accessor {
            self.bump();
            let (key, computed) = self.parse_property_name()?;
            let value = self.parse_function_rest()?;
            let span = start.merge(value.span);
            return Ok(Member::Property(Property {
                key,
                value,
                kind,
                method: false,
                shorthand: false,
                computed,
                span,
            }));
        }

        let (key, computed) = self.parse_property_name()?;

        if self.eat(&LexKind::Colon) {
            let value = self.parse_expression()?;
            let span = start.merge(value.span);
            return Ok(Member::Property(Property {
                key,
                value,
                kind: PropertyKind::Init,
                method: false,
                shorthand: false,
                computed,
                span,
            }));
        }

        if self.check(&LexKind::LParen) {
            let value = self.parse_function_rest()?;
            let span = start.merge(value.span);
            return Ok(Member::Property(Property {
                key,
                value,
                kind: PropertyKind::Init,
                method: true,
                shorthand: false,
                computed,
                span,
            }));
        }

        if !computed && matches!(key.kind, ExprKind::Identifier(_)) {
            let span = key.span;
            let value = key.clone();
            return Ok(Member::Property(Property {
                key,
                value,
                kind: PropertyKind::Init,
                method: false,
                shorthand: true,
                computed: false,
                span,
            }));
        }

        Err(self.unexpected())
    }

    /// Parse a property name: identifier, string or number literal,
    /// keyword-as-name, or a computed `[expr]` key.
    fn parse_property_name(&mut self) -> Result<(Expr, bool), ExprError> {
        let lexeme = self.current().clone();
        let kind = match lexeme.kind {
            LexKind::Ident(name) => ExprKind::Identifier(name),
            LexKind::Str(value) => ExprKind::Literal(Lit::String(value)),
            LexKind::Num { value, bigint } => {
                ExprKind::Literal(if bigint { Lit::BigInt } else { Lit::Number(value) })
            }
            // Keywords are identifier names in property position
            LexKind::Null => ExprKind::Identifier("null".to_string()),
            LexKind::True => ExprKind::Identifier("true".to_string()),
            LexKind::False => ExprKind::Identifier("false".to_string()),
            LexKind::LBracket => {
                self.bump();
                let key = self.parse_expression()?;
                self.expect(&LexKind::RBracket)?;
                return Ok((key, true));
            }
            _ => return Err(self.unexpected()),
        };

        self.bump();
        Ok((Expr::new(kind, lexeme.span), false))
    }

    fn next_starts_property_name(&self) -> bool {
        matches!(
            self.peek_kind(),
            LexKind::Ident(_)
                | LexKind::Str(_)
                | LexKind::Num { .. }
                | LexKind::Null
                | LexKind::True
                | LexKind::False
                | LexKind::LBracket
        )
    }

    /// Consume a method/accessor parameter list and body as balanced token
    /// runs, yielding an opaque function node. Consumers reject the
    /// containing property before looking at the value, so the interior is
    /// never modeled.
    fn parse_function_rest(&mut self) -> Result<Expr, ExprError> {
        let open = self.expect(&LexKind::LParen)?;
        self.skip_balanced(&LexKind::LParen, &LexKind::RParen)?;
        self.expect(&LexKind::LBrace)?;
        let close = self.skip_balanced(&LexKind::LBrace, &LexKind::RBrace)?;
        Ok(Expr::new(ExprKind::Function, open.merge(close)))
    }

    /// Skip until the close lexeme that balances an already-consumed open.
    fn skip_balanced(&mut self, open: &LexKind, close: &LexKind) -> Result<Span, ExprError> {
        let mut depth = 1u32;
        loop {
            if self.at_eof() {
                return Err(self.unexpected());
            }
            let lexeme = self.bump();
            if lexeme.kind == *open {
                depth += 1;
            } else if lexeme.kind == *close {
                depth -= 1;
                if depth == 0 {
                    return Ok(lexeme.span);
                }
            }
        }
    }

    fn enter(&mut self) -> Result<(), ExprError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            let at = self.current_span().start;
            return Err(ExprError::new(
                ExprErrorKind::NestingTooDeep,
                "Maximum expression nesting depth exceeded.",
                at.into(),
                self.line_map.position(at),
            ));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn current(&self) -> &Lexeme {
        &self.lexemes[self.pos]
    }

    fn current_kind(&self) -> &LexKind {
        &self.current().kind
    }

    fn peek_kind(&self) -> &LexKind {
        let idx = (self.pos + 1).min(self.lexemes.len() - 1);
        &self.lexemes[idx].kind
    }

    fn current_span(&self) -> Span {
        self.current().span
    }

    fn at_eof(&self) -> bool {
        *self.current_kind() == LexKind::Eof
    }

    fn bump(&mut self) -> Lexeme {
        let lexeme = self.lexemes[self.pos].clone();
        if self.pos + 1 < self.lexemes.len() {
            self.pos += 1;
        }
        lexeme
    }

    fn check(&self, kind: &LexKind) -> bool {
        self.current_kind() == kind
    }

    fn eat(&mut self, kind: &LexKind) -> bool {
        if self.check(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &LexKind) -> Result<Span, ExprError> {
        if self.check(kind) {
            Ok(self.bump().span)
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> ExprError {
        let lexeme = self.current();
        if lexeme.kind == LexKind::Eof {
            let end = BytePos::from(self.src.len());
            ExprError::new(
                ExprErrorKind::UnexpectedEof,
                "Unexpected end of input.",
                self.src.len(),
                self.line_map.position(end),
            )
        } else {
            let raw = &self.src[lexeme.span.range()];
            ExprError::new(
                ExprErrorKind::UnexpectedToken,
                format!("Unexpected token '{raw}'."),
                lexeme.span.start.into(),
                self.line_map.position(lexeme.span.start),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use quince_common::LineMap;

    fn parse(src: &str) -> Result<Program, ExprError> {
        let map = LineMap::new(src);
        let output = Lexer::new(src, &map).tokenize()?;
        Parser::new(src, output.lexemes, &map, 500).parse_program()
    }

    fn single_expr(src: &str) -> Expr {
        let program = parse(src).expect("parse error");
        assert_eq!(program.body.len(), 1);
        program.body.into_iter().next().unwrap().expression
    }

    #[test]
    fn test_call_with_object_argument() {
        let expr = single_expr("0({a: 1})");
        let ExprKind::Call { callee, arguments } = expr.kind else {
            panic!("expected call");
        };
        assert_eq!(callee.kind, ExprKind::Literal(Lit::Number(0.0)));
        assert_eq!(arguments.len(), 1);
        let Element::Expr(arg) = &arguments[0] else {
            panic!("expected plain argument");
        };
        assert!(matches!(&arg.kind, ExprKind::Object(props) if props.len() == 1));
    }

    #[test]
    fn test_array_holes() {
        let expr = single_expr("[1,,2]");
        let ExprKind::Array(elements) = expr.kind else {
            panic!("expected array");
        };
        assert_eq!(elements.len(), 3);
        assert!(elements[0].is_some());
        assert!(elements[1].is_none());
        assert!(elements[2].is_some());
    }

    #[test]
    fn test_trailing_comma_is_not_a_hole() {
        let ExprKind::Array(elements) = single_expr("[1,]").kind else {
            panic!("expected array");
        };
        assert_eq!(elements.len(), 1);
    }

    #[test]
    fn test_property_forms() {
        let ExprKind::Object(members) = single_expr("{a: 1, 'b': 2, 3: 4, null: 5}").kind
        else {
            panic!("expected object");
        };
        assert_eq!(members.len(), 4);
        let Member::Property(p) = &members[3] else {
            panic!("expected property");
        };
        assert_eq!(p.key.kind, ExprKind::Identifier("null".to_string()));
    }

    #[test]
    fn test_shorthand_and_method() {
        let ExprKind::Object(members) = single_expr("{foo, bar() { return 1; }}").kind else {
            panic!("expected object");
        };
        let Member::Property(foo) = &members[0] else {
            panic!();
        };
        assert!(foo.shorthand);
        let Member::Property(bar) = &members[1] else {
            panic!();
        };
        assert!(bar.method);
        assert_eq!(bar.value.kind, ExprKind::Function);
    }

    #[test]
    fn test_accessor_vs_get_key() {
        let ExprKind::Object(members) = single_expr("{get foo() {}, get: 1}").kind else {
            panic!("expected object");
        };
        let Member::Property(acc) = &members[0] else {
            panic!();
        };
        assert_eq!(acc.kind, PropertyKind::Get);
        let Member::Property(plain) = &members[1] else {
            panic!();
        };
        assert_eq!(plain.kind, PropertyKind::Init);
        assert_eq!(plain.key.kind, ExprKind::Identifier("get".to_string()));
    }

    #[test]
    fn test_computed_key() {
        let ExprKind::Object(members) = single_expr("{[a]: 1}").kind else {
            panic!("expected object");
        };
        let Member::Property(p) = &members[0] else {
            panic!();
        };
        assert!(p.computed);
    }

    #[test]
    fn test_unary_and_binary() {
        let expr = single_expr("-1");
        assert!(matches!(expr.kind, ExprKind::Unary { op: UnaryOp::Minus, .. }));
        let expr = single_expr("1 + 2 * 3");
        let ExprKind::Binary { op, right, .. } = expr.kind else {
            panic!("expected binary");
        };
        assert_eq!(op, BinOp::Add);
        assert!(matches!(right.kind, ExprKind::Binary { op: BinOp::Mul, .. }));
    }

    #[test]
    fn test_exponent_right_assoc() {
        let ExprKind::Binary { op, left, .. } = single_expr("2 ** 3 ** 2").kind else {
            panic!("expected binary");
        };
        assert_eq!(op, BinOp::Exp);
        assert!(matches!(left.kind, ExprKind::Literal(Lit::Number(v)) if v == 2.0));
    }

    #[test]
    fn test_paren_node() {
        let expr = single_expr("(1)");
        assert!(matches!(expr.kind, ExprKind::Paren(_)));
        assert_eq!(expr.span, Span::from_usize(0, 3));
    }

    #[test]
    fn test_spread_argument() {
        let ExprKind::Call { arguments, .. } = single_expr("0(...[1])").kind else {
            panic!("expected call");
        };
        assert!(matches!(arguments[0], Element::Spread(_)));
    }

    #[test]
    fn test_unexpected_token_error() {
        let err = parse("{a: }").expect_err("should fail");
        assert_eq!(err.kind, ExprErrorKind::UnexpectedToken);
        assert_eq!(err.index, 4);
        assert_eq!(err.message, "Unexpected token '}'.");
    }

    #[test]
    fn test_unexpected_eof_error() {
        let err = parse("[1").expect_err("should fail");
        assert_eq!(err.kind, ExprErrorKind::UnexpectedEof);
        assert_eq!(err.index, 2);
    }

    #[test]
    fn test_depth_guard() {
        let mut src = String::new();
        for _ in 0..600 {
            src.push('[');
        }
        let err = parse(&src).expect_err("should fail");
        assert_eq!(err.kind, ExprErrorKind::NestingTooDeep);
    }

    #[test]
    fn test_equals_sign_rejected() {
        let err = parse("{a = 1}").expect_err("should fail");
        assert_eq!(err.message, "Unexpected token '='.");
    }
}
