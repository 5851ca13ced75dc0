//! Integration tests for the quince-expr crate.

use quince_expr::{
    parse_program, CommentKind, Element, ExprErrorKind, ExprKind, Lit, ParseOptions, TokenKind,
};

fn parse(src: &str) -> quince_expr::ExprParse {
    parse_program(src, &ParseOptions::default()).expect("parse error")
}

// ============================================================================
// Token and Comment Streams
// ============================================================================

#[test]
fn test_token_stream() {
    let result = parse("{a: 1} // done");
    let kinds: Vec<TokenKind> = result.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Punctuator,
            TokenKind::Identifier,
            TokenKind::Punctuator,
            TokenKind::Numeric,
            TokenKind::Punctuator,
        ]
    );
    let values: Vec<&str> = result.tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["{", "a", ":", "1", "}"]);
    assert_eq!(result.tokens[1].span.range(), 1..2);
}

#[test]
fn test_comment_stream() {
    let result = parse("/* head */ 1 // tail");
    assert_eq!(result.comments.len(), 2);
    assert_eq!(result.comments[0].kind, CommentKind::Block);
    assert_eq!(result.comments[0].value, " head ");
    assert_eq!(result.comments[0].span.range(), 0..10);
    assert_eq!(result.comments[1].kind, CommentKind::Line);
    assert_eq!(result.comments[1].value, " tail");
}

#[test]
fn test_token_capture_can_be_disabled() {
    let options = ParseOptions {
        tokens: false,
        comments: false,
        ..ParseOptions::default()
    };
    let result = parse_program("[1] // c", &options).expect("parse error");
    assert!(result.tokens.is_empty());
    assert!(result.comments.is_empty());
}

// ============================================================================
// Expression Shapes
// ============================================================================

#[test]
fn test_string_token_value_keeps_quotes() {
    let result = parse("'hi'");
    assert_eq!(result.tokens[0].kind, TokenKind::String);
    assert_eq!(result.tokens[0].value, "'hi'");
}

#[test]
fn test_regex_literal() {
    let result = parse("/ab/g");
    let expr = &result.program.body[0].expression;
    let ExprKind::Literal(Lit::Regex { pattern, flags }) = &expr.kind else {
        panic!("expected regex literal");
    };
    assert_eq!(pattern, "ab");
    assert_eq!(flags, "g");
    assert_eq!(result.tokens[0].kind, TokenKind::RegularExpression);
}

#[test]
fn test_number_values() {
    for (src, expected) in [
        ("0x1A", 26.0),
        (".25", 0.25),
        ("6.", 6.0),
        ("1e-2", 0.01),
        ("0b1010", 10.0),
        ("0o20", 16.0),
    ] {
        let result = parse(src);
        let ExprKind::Literal(Lit::Number(value)) = &result.program.body[0].expression.kind
        else {
            panic!("expected number for {src}");
        };
        assert_eq!(*value, expected, "value of {src}");
    }
}

#[test]
fn test_call_with_spread_and_trailing_comma() {
    let result = parse("f(1, ...rest,)");
    let ExprKind::Call { callee, arguments } = &result.program.body[0].expression.kind else {
        panic!("expected call");
    };
    assert!(matches!(callee.kind, ExprKind::Identifier(_)));
    assert_eq!(arguments.len(), 2);
    assert!(matches!(arguments[0], Element::Expr(_)));
    assert!(matches!(arguments[1], Element::Spread(_)));
}

#[test]
fn test_template_is_single_token() {
    let result = parse("`a ${ [1, '}'] } b`");
    assert_eq!(result.tokens.len(), 1);
    assert_eq!(result.tokens[0].kind, TokenKind::Template);
    assert!(matches!(
        result.program.body[0].expression.kind,
        ExprKind::Template
    ));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unexpected_character() {
    let err = parse_program("@", &ParseOptions::default()).expect_err("should fail");
    assert_eq!(err.kind, ExprErrorKind::UnexpectedCharacter);
    assert_eq!(err.index, 0);
    assert_eq!(err.message, "Unexpected character '@'.");
}

#[test]
fn test_error_line_and_column() {
    let err = parse_program("{\n  a: }", &ParseOptions::default()).expect_err("should fail");
    assert_eq!(err.kind, ExprErrorKind::UnexpectedToken);
    assert_eq!(err.index, 7);
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 5);
}

#[test]
fn test_eof_error() {
    let err = parse_program("[1,", &ParseOptions::default()).expect_err("should fail");
    assert_eq!(err.kind, ExprErrorKind::UnexpectedEof);
    assert_eq!(err.index, 3);
}
