//! The error classifier.
//!
//! Every rejection — whether raised by the delegate parser or by the node
//! converter — funnels through here and comes out as a single
//! `SyntaxError` with a stable message and a corrected location. Message
//! rules, in priority order: identifier, literal subtype, humanized
//! `*Expression` type name, token scan, with a comma-scanning helper for
//! elision-style diagnostics and an end-of-input normalization for
//! delegate errors past the real text.

use crate::relocate::{Relocator, PREFIX_LEN};
use quince_common::BytePos;
use quince_diagnostic::{ErrorCode, SyntaxError};
use quince_expr::{Expr, ExprError, ExprErrorKind, ExprKind, Token};

pub(crate) struct Classifier<'a> {
    /// Length of the original (unwrapped) text.
    text_len: usize,
    /// Delegate tokens of the wrapped text, synthetic tokens included.
    tokens: &'a [Token],
    relocator: &'a Relocator<'a>,
}

impl<'a> Classifier<'a> {
    pub fn new(text_len: usize, tokens: &'a [Token], relocator: &'a Relocator<'a>) -> Self {
        Self {
            text_len,
            tokens,
            relocator,
        }
    }

    fn error(&self, code: ErrorCode, message: String, at: BytePos) -> SyntaxError {
        SyntaxError::new(
            code,
            message,
            at.rewind(PREFIX_LEN).into(),
            self.relocator.position(at),
        )
    }

    /// `Unexpected token 'x'.` anchored at a wrapped-text offset.
    pub fn unexpected_token(&self, value: &str, at: BytePos) -> SyntaxError {
        self.error(
            ErrorCode::UnexpectedToken,
            format!("Unexpected token '{value}'."),
            at,
        )
    }

    /// Token-scan fallback: report whatever token covers the offset.
    pub fn unexpected_token_at(&self, at: BytePos) -> SyntaxError {
        let value = self
            .tokens
            .iter()
            .find(|t| t.span.start <= at && at < t.span.end)
            .map(|t| t.value.as_str())
            .unwrap_or("unknown");
        self.unexpected_token(value, at)
    }

    pub fn unexpected_comma(&self, at: BytePos) -> SyntaxError {
        self.unexpected_token(",", at)
    }

    /// `Expected token 'x'.` anchored at a wrapped-text offset.
    pub fn expected_token(&self, value: &str, at: BytePos) -> SyntaxError {
        self.error(
            ErrorCode::ExpectedToken,
            format!("Expected token '{value}'."),
            at,
        )
    }

    /// A rejected generic node: identifier rule, then literal subtype
    /// rule, then the humanized `*Expression` rule, then the token scan.
    pub fn unexpected_node(&self, node: &Expr) -> SyntaxError {
        match &node.kind {
            ExprKind::Identifier(name) => self.error(
                ErrorCode::UnexpectedIdentifier,
                format!("Unexpected identifier '{name}'."),
                node.span.start,
            ),
            ExprKind::Literal(lit) => self.error(
                ErrorCode::UnexpectedLiteral,
                format!("Unexpected {} literal.", lit.subtype_name()),
                node.span.start,
            ),
            _ => {
                let type_name = node.type_name();
                if type_name.ends_with("Expression") {
                    self.error(
                        ErrorCode::UnexpectedExpression,
                        format!("Unexpected {}.", humanize(type_name)),
                        node.span.start,
                    )
                } else {
                    self.unexpected_token_at(node.span.start)
                }
            }
        }
    }

    /// `Expected to be an expression, but got empty.` for vacuous input.
    pub fn empty_expression(&self) -> SyntaxError {
        self.error(
            ErrorCode::ExpectedExpression,
            "Expected to be an expression, but got empty.".to_string(),
            BytePos(PREFIX_LEN),
        )
    }

    /// First `,` token at or after a wrapped-text offset.
    pub fn comma_after(&self, at: BytePos) -> Option<BytePos> {
        self.tokens
            .iter()
            .find(|t| t.span.start >= at && t.value == ",")
            .map(|t| t.span.start)
    }

    /// Last `,` token ending at or before a wrapped-text offset.
    pub fn comma_before(&self, at: BytePos) -> Option<BytePos> {
        self.tokens
            .iter()
            .rev()
            .find(|t| t.span.end <= at && t.value == ",")
            .map(|t| t.span.start)
    }

    /// First token starting at or after a wrapped-text offset.
    pub fn token_after(&self, at: BytePos) -> Option<BytePos> {
        self.tokens
            .iter()
            .find(|t| t.span.start >= at)
            .map(|t| t.span.start)
    }

    /// First `(` token at or after a wrapped-text offset.
    pub fn paren_after(&self, at: BytePos) -> Option<BytePos> {
        self.tokens
            .iter()
            .find(|t| t.span.start >= at && t.value == "(")
            .map(|t| t.span.start)
    }

    /// `Unexpected end of expression.` anchored at the end of the text.
    pub fn unexpected_end(&self) -> SyntaxError {
        self.error(
            ErrorCode::UnexpectedEnd,
            "Unexpected end of expression.".to_string(),
            BytePos::from(self.text_len + PREFIX_LEN as usize),
        )
    }

    /// Translate a raw delegate failure. Errors at or past the end of the
    /// real text normalize to the canonical end-of-expression message;
    /// everything else keeps the delegate's wording with its location
    /// corrected.
    pub fn from_expr_error(&self, error: &ExprError) -> SyntaxError {
        let (index, pos) = self
            .relocator
            .error_location(error.index, error.line, error.column);
        if index >= self.text_len {
            return self.unexpected_end();
        }
        SyntaxError::new(code_for(error.kind), error.message.clone(), index, pos)
    }
}

fn code_for(kind: ExprErrorKind) -> ErrorCode {
    match kind {
        ExprErrorKind::UnexpectedCharacter => ErrorCode::UnexpectedCharacter,
        ExprErrorKind::UnterminatedString => ErrorCode::UnterminatedString,
        ExprErrorKind::UnterminatedComment => ErrorCode::UnterminatedComment,
        ExprErrorKind::UnterminatedTemplate => ErrorCode::UnterminatedTemplate,
        ExprErrorKind::UnterminatedRegExp => ErrorCode::UnterminatedRegExp,
        ExprErrorKind::InvalidEscape => ErrorCode::InvalidEscape,
        ExprErrorKind::InvalidNumber => ErrorCode::InvalidNumber,
        ExprErrorKind::UnexpectedToken => ErrorCode::UnexpectedToken,
        ExprErrorKind::UnexpectedEof => ErrorCode::UnexpectedEnd,
        ExprErrorKind::NestingTooDeep => ErrorCode::NestingTooDeep,
    }
}

/// `BinaryExpression` -> `binary expression`. Best-effort for any name.
fn humanize(type_name: &str) -> String {
    let mut out = String::with_capacity(type_name.len() + 2);
    for ch in type_name.chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
