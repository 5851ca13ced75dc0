//! Integration tests for the quince-parser crate.

use quince_common::{Position, Span};
use quince_parser::{
    parse, parse_json, static_value, Expression, LiteralValue, NodeRef, ParseOptions,
    PropertyKey, StaticValue, TokenKind,
};

fn value(text: &str) -> Expression {
    parse_json(text).expect("parse error").expression().clone()
}

// ============================================================================
// Dialect Coverage
// ============================================================================

#[test]
fn test_strict_json_document() {
    let Expression::Object(object) = value(r#"{"a": [1, 2.5], "b": {"c": null}}"#) else {
        panic!("expected object");
    };
    assert_eq!(object.properties.len(), 2);
    let Expression::Array(array) = &object.properties[0].value else {
        panic!("expected array");
    };
    assert_eq!(array.elements.len(), 2);
}

#[test]
fn test_jsonc_document() {
    let text = "\
// configuration
{
  \"retries\": 3, /* inline */
  \"verbose\": true
}
";
    let program = parse_json(text).expect("parse error");
    assert_eq!(program.comments.len(), 2);
    let Expression::Object(object) = program.expression() else {
        panic!("expected object");
    };
    assert_eq!(object.properties.len(), 2);
}

#[test]
fn test_json5_document() {
    let text = "{
  id: 42,
  name: 'quince',
  tags: ['parser', 'json',],
  factor: -1.5e2,
  mask: 0xFF,
  limit: Infinity,
  missing: undefined,
}";
    let Expression::Object(object) = value(text) else {
        panic!("expected object");
    };
    assert_eq!(object.properties.len(), 7);

    assert!(matches!(object.properties[0].key, PropertyKey::Identifier(_)));

    let Expression::Literal(factor) = &object.properties[3].value else {
        panic!("expected literal");
    };
    assert_eq!(factor.value, LiteralValue::Number(-150.0));
    assert_eq!(factor.raw, "-1.5e2");

    let Expression::Literal(mask) = &object.properties[4].value else {
        panic!("expected literal");
    };
    assert_eq!(mask.value, LiteralValue::Number(255.0));

    let Expression::Identifier(limit) = &object.properties[5].value else {
        panic!("expected identifier");
    };
    assert_eq!(limit.name, "Infinity");
}

// ============================================================================
// Locations
// ============================================================================

#[test]
fn test_spans_and_locs() {
    let program = parse_json("\n[1, 22]").expect("parse error");
    let Expression::Array(array) = program.expression() else {
        panic!("expected array");
    };
    assert_eq!(array.span, Span::from_usize(1, 8));
    assert_eq!(array.loc.start, Position::new(2, 0));
    assert_eq!(array.loc.end, Position::new(2, 7));

    let Expression::Literal(lit) = &array.elements[1] else {
        panic!("expected literal");
    };
    assert_eq!(lit.span, Span::from_usize(5, 7));
    assert_eq!(lit.raw, "22");
    assert_eq!(lit.loc.start, Position::new(2, 4));
}

#[test]
fn test_program_extent_covers_trivia() {
    let program = parse_json("  {}  ").expect("parse error");
    assert_eq!(program.span, Span::from_usize(0, 6));
    assert_eq!(program.loc.start, Position::new(1, 0));
    assert_eq!(program.loc.end, Position::new(1, 6));

    let program = parse_json("1\n").expect("parse error");
    assert_eq!(program.span, Span::from_usize(0, 2));
    assert_eq!(program.loc.end, Position::new(2, 0));
}

#[test]
fn test_round_trip_width() {
    for text in ["1", " 1 ", "{}", "// c\n[1, 2]\n", "'&'", "\n\n  null  \n"] {
        let program = parse_json(text).expect("parse error");
        assert_eq!(program.span.len(), text.len(), "width of {text:?}");
        assert_eq!(usize::from(program.span.start), 0);
    }
}

#[test]
fn test_token_locations_are_corrected() {
    let program = parse_json("{a: 1}").expect("parse error");
    let values: Vec<&str> = program.tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["{", "a", ":", "1", "}"]);
    assert_eq!(program.tokens[0].span, Span::from_usize(0, 1));
    assert_eq!(program.tokens[0].kind, TokenKind::Punctuator);
    assert_eq!(program.tokens[3].span, Span::from_usize(4, 5));
    assert_eq!(program.tokens[3].loc.start, Position::new(1, 4));
    assert_eq!(program.tokens[4].loc.end, Position::new(1, 6));
}

#[test]
fn test_multiline_token_locations() {
    let program = parse_json("[\n  'x'\n]").expect("parse error");
    let string_token = &program.tokens[1];
    assert_eq!(string_token.value, "'x'");
    assert_eq!(string_token.loc.start, Position::new(2, 2));
    assert_eq!(string_token.loc.end, Position::new(2, 5));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_idempotent_parse() {
    let text = "{a: [1, 'two', null], b: {c: -3}}";
    let first = parse_json(text).expect("parse error");
    let second = parse_json(text).expect("parse error");
    assert_eq!(first, second);
}

// ============================================================================
// Walker and Visitor Keys
// ============================================================================

fn walk<'a>(node: NodeRef<'a>, out: &mut Vec<&'static str>) {
    out.push(node.node_type());
    for key in node.get_keys() {
        for child in node.children(key) {
            walk(child, out);
        }
    }
}

#[test]
fn test_walker_visits_in_order() {
    let program = parse_json("{a: [1]}").expect("parse error");
    let mut visited = Vec::new();
    walk(NodeRef::Program(&program), &mut visited);
    assert_eq!(
        visited,
        vec![
            "Program",
            "JSONExpressionStatement",
            "JSONObjectExpression",
            "JSONProperty",
            "JSONIdentifier",
            "JSONArrayExpression",
            "JSONLiteral",
        ]
    );
}

#[test]
fn test_visitor_keys_in_result() {
    let result = parse("[]", &ParseOptions::default()).expect("parse error");
    assert!(result.services.is_json);
    let property_keys = result
        .visitor_keys
        .iter()
        .find(|(ty, _)| *ty == "JSONProperty")
        .map(|(_, keys)| *keys)
        .expect("JSONProperty missing");
    assert_eq!(property_keys, ["key", "value"]);
}

// ============================================================================
// Static Values
// ============================================================================

#[test]
fn test_static_value_extraction() {
    let program = parse_json("{a: [1, 'x'], b: {c: null, d: true}}").expect("parse error");
    let extracted = program.static_value().expect("no value");
    let as_json = serde_json::to_value(&extracted).expect("serialize");
    assert_eq!(
        as_json,
        serde_json::json!({"a": [1.0, "x"], "b": {"c": null, "d": true}})
    );
}

#[test]
fn test_static_value_special_identifiers() {
    let nan = value("NaN");
    let StaticValue::Number(n) = static_value(&nan) else {
        panic!("expected number");
    };
    assert!(n.is_nan());

    let inf = value("[Infinity]");
    let StaticValue::Array(items) = static_value(&inf) else {
        panic!("expected array");
    };
    assert_eq!(items, vec![StaticValue::Number(f64::INFINITY)]);

    assert_eq!(static_value(&value("undefined")), StaticValue::Null);
}
