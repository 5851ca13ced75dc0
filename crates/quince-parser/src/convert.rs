//! The node and token converters.
//!
//! Maps each generic node to a domain node, enforcing the JSON-value
//! shape invariants: no computed keys, no methods or accessors, no
//! shorthand, no spread, no sparse slots, no regex or bigint literals,
//! and identifiers only as property keys or as the special
//! literal-equivalent values. Position information goes through the
//! location corrector on every constructed node.
//!
//! The converter knows syntactically whether it is looking at a key or a
//! value, so no parent links are materialized; the generic node enums are
//! matched exhaustively, which is what makes the structural-completeness
//! guarantee hold at compile time.

use crate::classify::Classifier;
use crate::relocate::{Relocator, PREFIX_LEN};
use quince_common::{BytePos, Span};
use quince_diagnostic::SyntaxError;
use quince_expr as expr;
use quince_expr::{Element, ExprKind, Lit, Member, PropertyKind, UnaryOp};
use quince_syntax::{
    ArrayExpression, Comment, CommentKind, Expression, Identifier, Literal, LiteralValue,
    ObjectExpression, Property, PropertyKey, Token, TokenKind,
};

pub(crate) struct Converter<'a> {
    /// The wrapped source text; raw literal text is sliced out of it.
    src: &'a str,
    relocator: &'a Relocator<'a>,
    classifier: &'a Classifier<'a>,
}

impl<'a> Converter<'a> {
    pub fn new(src: &'a str, relocator: &'a Relocator<'a>, classifier: &'a Classifier<'a>) -> Self {
        Self {
            src,
            relocator,
            classifier,
        }
    }

    /// Convert a generic expression in value position.
    pub fn convert_value(&self, node: &expr::Expr) -> Result<Expression, SyntaxError> {
        match &node.kind {
            ExprKind::Object(members) => self.convert_object(node.span, members),
            ExprKind::Array(elements) => self.convert_array(node.span, elements),
            ExprKind::Literal(lit) => self.convert_literal(node, lit).map(Expression::Literal),
            ExprKind::Identifier(name) => {
                if quince_syntax::is_special_identifier(name) {
                    Ok(Expression::Identifier(self.identifier(node.span, name)))
                } else {
                    Err(self.classifier.unexpected_node(node))
                }
            }
            ExprKind::Unary { op, argument } => self
                .convert_signed_number(node, *op, argument)
                .map(Expression::Literal),
            ExprKind::Template => Err(self.classifier.unexpected_token("`", node.span.start)),
            ExprKind::Paren(_) => Err(self.classifier.unexpected_token("(", node.span.start)),
            // Binary, call, and function nodes have no JSON shape at all.
            _ => Err(self.classifier.unexpected_node(node)),
        }
    }

    fn convert_object(
        &self,
        span: Span,
        members: &[Member],
    ) -> Result<Expression, SyntaxError> {
        let mut properties = Vec::with_capacity(members.len());
        for member in members {
            match member {
                Member::Spread(spread) => {
                    return Err(self.classifier.unexpected_token("...", spread.span.start));
                }
                Member::Property(property) => properties.push(self.convert_property(property)?),
            }
        }
        let (span, loc) = self.relocator.locate(span);
        Ok(Expression::Object(ObjectExpression {
            properties,
            span,
            loc,
        }))
    }

    fn convert_property(&self, property: &expr::Property) -> Result<Property, SyntaxError> {
        if property.method {
            let at = self
                .classifier
                .paren_after(property.key.span.end)
                .unwrap_or(property.span.start);
            return Err(self.classifier.unexpected_token("(", at));
        }
        if property.kind != PropertyKind::Init || property.shorthand {
            // Accessors and shorthand members are both missing their `:`.
            let at = self
                .classifier
                .token_after(property.key.span.end)
                .unwrap_or(property.key.span.end);
            return Err(self.classifier.expected_token(":", at));
        }
        if property.computed {
            return Err(self.classifier.unexpected_token("[", property.span.start));
        }

        let key = self.convert_key(&property.key)?;
        let value = self.convert_value(&property.value)?;
        let (span, loc) = self.relocator.locate(property.span);
        Ok(Property {
            key,
            value,
            span,
            loc,
        })
    }

    /// Property keys admit exactly string literals and bare identifiers.
    fn convert_key(&self, key: &expr::Expr) -> Result<PropertyKey, SyntaxError> {
        match &key.kind {
            ExprKind::Identifier(name) => {
                Ok(PropertyKey::Identifier(self.identifier(key.span, name)))
            }
            ExprKind::Literal(Lit::String(value)) => Ok(PropertyKey::Literal(
                self.literal(key.span, LiteralValue::String(value.clone())),
            )),
            _ => Err(self.classifier.unexpected_node(key)),
        }
    }

    fn convert_array(
        &self,
        span: Span,
        elements: &[Option<Element>],
    ) -> Result<Expression, SyntaxError> {
        let mut converted = Vec::with_capacity(elements.len());
        for (index, slot) in elements.iter().enumerate() {
            match slot {
                None => return Err(self.missing_element(span, elements, index)),
                Some(Element::Spread(spread)) => {
                    return Err(self.classifier.unexpected_token("...", spread.span.start));
                }
                Some(Element::Expr(element)) => converted.push(self.convert_value(element)?),
            }
        }
        let (span, loc) = self.relocator.locate(span);
        Ok(Expression::Array(ArrayExpression {
            elements: converted,
            span,
            loc,
        }))
    }

    /// An elision hole: the diagnostic points at the comma adjacent to the
    /// gap, scanned forward from the previous element when there is one,
    /// backward from the next element otherwise.
    fn missing_element(
        &self,
        array_span: Span,
        elements: &[Option<Element>],
        index: usize,
    ) -> SyntaxError {
        let prev = elements[..index].iter().rev().find_map(|slot| slot.as_ref());
        let next = elements[index + 1..].iter().find_map(|slot| slot.as_ref());

        let at = if let Some(prev) = prev {
            self.classifier.comma_after(prev.span().end)
        } else if let Some(next) = next {
            self.classifier.comma_before(next.span().start)
        } else {
            self.classifier.comma_after(array_span.start)
        };
        self.classifier.unexpected_comma(at.unwrap_or(array_span.start))
    }

    fn convert_literal(&self, node: &expr::Expr, lit: &Lit) -> Result<Literal, SyntaxError> {
        let value = match lit {
            Lit::Null => LiteralValue::Null,
            Lit::Bool(b) => LiteralValue::Boolean(*b),
            Lit::Number(n) => LiteralValue::Number(*n),
            Lit::String(s) => LiteralValue::String(s.clone()),
            Lit::BigInt | Lit::Regex { .. } => {
                return Err(self.classifier.unexpected_node(node));
            }
        };
        Ok(self.literal(node.span, value))
    }

    /// A sign folds into its numeric literal only when applied directly
    /// and adjacently; everything else is rejected against the argument.
    fn convert_signed_number(
        &self,
        node: &expr::Expr,
        op: UnaryOp,
        argument: &expr::Expr,
    ) -> Result<Literal, SyntaxError> {
        let adjacent = node.span.start.0 + 1 == argument.span.start.0;
        if matches!(op, UnaryOp::Plus | UnaryOp::Minus) && adjacent {
            if let ExprKind::Literal(Lit::Number(value)) = &argument.kind {
                let signed = if op == UnaryOp::Minus { -*value } else { *value };
                return Ok(self.literal(node.span, LiteralValue::Number(signed)));
            }
        }
        Err(self.classifier.unexpected_node(argument))
    }

    fn literal(&self, span: Span, value: LiteralValue) -> Literal {
        let raw = self.src[span.range()].to_string();
        let (span, loc) = self.relocator.locate(span);
        Literal {
            value,
            raw,
            span,
            loc,
        }
    }

    fn identifier(&self, span: Span, name: &str) -> Identifier {
        let (span, loc) = self.relocator.locate(span);
        Identifier {
            name: name.to_string(),
            span,
            loc,
        }
    }

    /// Convert one delegate token. The driver strips the synthetic
    /// parenthesis tokens beforehand; one slipping through is reported
    /// rather than silently relocated.
    pub fn convert_token(&self, token: &expr::Token) -> Result<Token, SyntaxError> {
        if token.span.start < BytePos(PREFIX_LEN) {
            return Err(self
                .classifier
                .unexpected_token(&token.value, token.span.start));
        }
        let kind = match token.kind {
            expr::TokenKind::Punctuator => TokenKind::Punctuator,
            expr::TokenKind::Numeric => TokenKind::Numeric,
            expr::TokenKind::String => TokenKind::String,
            expr::TokenKind::Identifier => TokenKind::Identifier,
            expr::TokenKind::Boolean => TokenKind::Boolean,
            expr::TokenKind::Null => TokenKind::Null,
            expr::TokenKind::RegularExpression => TokenKind::RegularExpression,
            expr::TokenKind::Template => TokenKind::Template,
        };
        let (span, loc) = self.relocator.locate(token.span);
        Ok(Token {
            kind,
            value: token.value.clone(),
            span,
            loc,
        })
    }

    pub fn convert_comment(&self, comment: &expr::Comment) -> Comment {
        let kind = match comment.kind {
            expr::CommentKind::Line => CommentKind::Line,
            expr::CommentKind::Block => CommentKind::Block,
        };
        let (span, loc) = self.relocator.locate(comment.span);
        Comment {
            kind,
            value: comment.value.clone(),
            span,
            loc,
        }
    }
}
