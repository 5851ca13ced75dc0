//! Diagnostic exactness tests: messages, lines, columns, offsets.

use quince_diagnostic::ErrorCode;
use quince_parser::{parse_json, SyntaxError};

fn err(text: &str) -> SyntaxError {
    parse_json(text).expect_err("expected a syntax error")
}

// ============================================================================
// Seed Diagnostics
// ============================================================================

#[test]
fn test_seed_diagnostics() {
    // (input, message, 1-based line, 1-based column, offset)
    let cases: &[(&str, &str, u32, u32, usize)] = &[
        ("\n{\n  a: }\n}", "Unexpected token '}'.", 3, 6, 8),
        (
            "/*empty*/",
            "Expected to be an expression, but got empty.",
            1,
            1,
            0,
        ),
        ("\n{a: b}\n", "Unexpected identifier 'b'.", 2, 5, 5),
        ("\n{foo,bar}\n", "Expected token ':'.", 2, 5, 5),
        ("\n['a',,'b']\n", "Unexpected token ','.", 2, 5, 5),
        ("\n{42:42}\n", "Unexpected number literal.", 2, 2, 2),
    ];

    for (text, message, line, column, index) in cases {
        let error = err(text);
        assert_eq!(error.message, *message, "message for {text:?}");
        assert_eq!(error.line, *line, "line for {text:?}");
        assert_eq!(error.column, *column, "column for {text:?}");
        assert_eq!(error.index, *index, "index for {text:?}");
    }
}

// ============================================================================
// Shape Rejection Completeness
// ============================================================================

#[test]
fn test_shape_rejection_completeness() {
    let rejected = [
        "{[\"a\"]: 1}",     // computed key
        "{foo() {}}",       // method property
        "{foo}",            // shorthand property
        "{get x() {}}",     // getter
        "{set x(v) {}}",    // setter
        "{...a}",           // spread in object
        "[...[1]]",         // spread in array
        "...[1]",           // spread as the whole document
        "1,2",              // multiple call arguments
        "/a/g",             // regex literal
        "10n",              // bigint literal
        "- 1",              // non-adjacent sign
        "x",                // bare non-special identifier
        "(1)",              // stray parentheses
        "[,]",              // sparse slot
        "`t`",              // template literal
    ];
    for text in rejected {
        assert!(parse_json(text).is_err(), "{text:?} must be rejected");
    }
}

#[test]
fn test_special_identifiers_pass_everywhere_else_fails() {
    for name in ["NaN", "Infinity", "undefined"] {
        assert!(parse_json(name).is_ok(), "{name} must parse bare");
        assert!(parse_json(&format!("[{name}]")).is_ok());
        assert!(parse_json(&format!("{{a: {name}}}")).is_ok());
    }
    for text in ["nan", "INFINITY", "Undefined", "[foo]", "{a: bar}"] {
        assert!(parse_json(text).is_err(), "{text:?} must be rejected");
    }
}

// ============================================================================
// Targeted Messages and Codes
// ============================================================================

#[test]
fn test_targeted_messages() {
    assert_eq!(err("{foo() {}}").message, "Unexpected token '('.");
    assert_eq!(err("{get x() {}}").message, "Expected token ':'.");
    assert_eq!(err("{[a]: 1}").message, "Unexpected token '['.");
    assert_eq!(err("{...a}").message, "Unexpected token '...'.");
    assert_eq!(err("1,2").message, "Unexpected token ','.");
    assert_eq!(err("/a/g").message, "Unexpected regex literal.");
    assert_eq!(err("10n").message, "Unexpected bigint literal.");
    assert_eq!(err("!true").message, "Unexpected boolean literal.");
    assert_eq!(err("-'s'").message, "Unexpected string literal.");
    assert_eq!(err("-x").message, "Unexpected identifier 'x'.");
    assert_eq!(err("1 + 2").message, "Unexpected binary expression.");
    assert_eq!(err("'a'('b')").message, "Unexpected call expression.");
}

#[test]
fn test_multiple_arguments_anchor() {
    let error = err("1, 2");
    assert_eq!(error.message, "Unexpected token ','.");
    assert_eq!(error.index, 1);
    assert_eq!(error.line, 1);
    assert_eq!(error.column, 2);
}

#[test]
fn test_error_codes() {
    assert_eq!(err("{42: 1}").code, ErrorCode::UnexpectedLiteral);
    assert_eq!(err("x").code, ErrorCode::UnexpectedIdentifier);
    assert_eq!(err("1 + 2").code, ErrorCode::UnexpectedExpression);
    assert_eq!(err("{foo}").code, ErrorCode::ExpectedToken);
    assert_eq!(err("").code, ErrorCode::ExpectedExpression);
    assert_eq!(err("{").code, ErrorCode::UnexpectedEnd);
    assert_eq!(err("\"a").code, ErrorCode::UnterminatedString);
    assert_eq!(err("{,}").code, ErrorCode::UnexpectedToken);
}

// ============================================================================
// End of Input
// ============================================================================

#[test]
fn test_end_of_expression_normalization() {
    for text in ["{", "[", "[1", "{a:", "[1, [2,"] {
        let error = err(text);
        assert_eq!(
            error.message, "Unexpected end of expression.",
            "message for {text:?}"
        );
        assert_eq!(error.index, text.len(), "index for {text:?}");
    }
}

#[test]
fn test_empty_inputs() {
    for text in ["", "   ", "\n\n", "/*empty*/", "// nothing\n"] {
        let error = err(text);
        assert_eq!(
            error.message,
            "Expected to be an expression, but got empty."
        );
        assert_eq!(error.index, 0);
        assert_eq!(error.line, 1);
        assert_eq!(error.column, 1);
    }
}

// ============================================================================
// Lexical Errors Pass Through with Corrected Locations
// ============================================================================

#[test]
fn test_lexical_errors() {
    let error = err("\"abc");
    assert_eq!(error.message, "Unterminated string constant.");
    assert_eq!(error.index, 0);
    assert_eq!(error.line, 1);
    assert_eq!(error.column, 1);

    let error = err("{a: 'b\nc'}");
    assert_eq!(error.message, "Unterminated string constant.");
    assert_eq!(error.index, 4);

    let error = err("1 /* open");
    assert_eq!(error.message, "Unterminated comment.");
    assert_eq!(error.index, 2);
}

#[test]
fn test_rendering_does_not_panic() {
    let text = "{a: }";
    let error = err(text);
    quince_diagnostic::emit(text, "doc.json", &error);
}
