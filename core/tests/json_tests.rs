use lexkit::ParseError;
use lexkit::json::{self, JsonTokenKind, JsonValue};
use lexkit::lexer::Token;
use pretty_assertions::assert_eq;

fn parse_ok(source: &str) -> JsonValue {
    json::parse(source).unwrap_or_else(|err| panic!("{source:?} should parse: {err}"))
}

fn parse_err(source: &str) -> ParseError {
    match json::parse(source) {
        Ok(value) => panic!("{source:?} should fail, got {value}"),
        Err(err) => err,
    }
}

fn from_serde(value: &serde_json::Value) -> JsonValue {
    match value {
        serde_json::Value::Null => JsonValue::Null,
        serde_json::Value::Bool(b) => JsonValue::Boolean(*b),
        serde_json::Value::Number(n) => JsonValue::Number(n.as_f64().unwrap()),
        serde_json::Value::String(s) => JsonValue::String(s.clone()),
        serde_json::Value::Array(items) => JsonValue::Array(items.iter().map(from_serde).collect()),
        serde_json::Value::Object(members) => JsonValue::Object(
            members
                .iter()
                .map(|(k, v)| (k.clone(), from_serde(v)))
                .collect(),
        ),
    }
}

const SHOP: &str = r#"
{
  "name": "Corner Shop",
  "open": true,
  "rating": 4.5,
  "owner": null,
  "address": { "street": "1 Main St", "zip": "90210" },
  "stock": [
    { "item": "apple", "count": 12 },
    { "item": "pear", "count": 0 }
  ],
  "tags": []
}
"#;

#[test]
fn parses_nested_document() {
    let value = parse_ok(r#"{"a":1,"b":[true,false,null]}"#);
    assert_eq!(value.get("a"), Some(&JsonValue::Number(1.0)));
    assert_eq!(
        value.get("b"),
        Some(&JsonValue::Array(vec![
            JsonValue::Boolean(true),
            JsonValue::Boolean(false),
            JsonValue::Null,
        ]))
    );
}

#[test]
fn display_output_parses_back_to_same_value() {
    let value = parse_ok(r#"{"a":1,"b":[true,false,null]}"#);
    assert_eq!(value.to_string(), r#"{"a":1,"b":[true,false,null]}"#);
    assert_eq!(parse_ok(&value.to_string()), value);

    let shop = parse_ok(SHOP);
    assert_eq!(parse_ok(&shop.to_string()), shop);
    assert_eq!(parse_ok(&format!("{shop:#}")), shop);
}

#[test]
fn pretty_display_indents_two_spaces() {
    let value = parse_ok(r#"{"b":[1,2],"a":{}}"#);
    assert_eq!(
        format!("{value:#}"),
        "{\n  \"a\": {},\n  \"b\": [\n    1,\n    2\n  ]\n}"
    );
}

#[test]
fn agrees_with_serde_json() {
    let expected: serde_json::Value = serde_json::from_str(SHOP).unwrap();
    assert_eq!(parse_ok(SHOP), from_serde(&expected));
}

#[test]
fn empty_containers_and_scalars() {
    assert_eq!(parse_ok("{}"), JsonValue::Object(Default::default()));
    assert_eq!(parse_ok("[]"), JsonValue::Array(vec![]));
    assert_eq!(parse_ok("[1,2]").as_array().map(Vec::len), Some(2));
    assert_eq!(parse_ok(" 2.5 "), JsonValue::Number(2.5));
    assert_eq!(parse_ok("null"), JsonValue::Null);
    assert_eq!(parse_ok("\"hi\"").as_str(), Some("hi"));
}

#[test]
fn decodes_escapes() {
    let value = parse_ok(r#""a\nb\u0041\"\\\/\t""#);
    assert_eq!(value, JsonValue::String("a\nbA\"\\/\t".to_string()));

    let reencoded = value.to_string();
    assert_eq!(parse_ok(&reencoded), value);
}

#[test]
fn missing_value_reports_unexpected_token() {
    let err = parse_err(r#"{"a": }"#);
    assert!(matches!(err, ParseError::Syntax(_)));
    assert_eq!((err.line(), err.column()), (1, 7));
    assert_eq!(err.to_string(), "1:7: unexpected token '}'");
}

#[test]
fn unterminated_string_is_a_lexical_error() {
    let err = parse_err(r#"{"a": "oops}"#);
    let ParseError::Lex(lex) = &err else {
        panic!("expected a lexical error, got {err}");
    };
    assert_eq!(lex.message(), "unexpected end of string");
    assert_eq!(lex.offending, None);
}

#[test]
fn invalid_escape_is_a_lexical_error() {
    let err = parse_err(r#"["\q"]"#);
    assert!(matches!(err, ParseError::Lex(_)));
    assert_eq!((err.line(), err.column()), (1, 4));
    assert_eq!(err.to_string(), "1:4: invalid escape character 'q': 'q'");
}

#[test]
fn rejects_trailing_commas() {
    let err = parse_err("[1,2,]");
    assert_eq!(err.to_string(), "1:6: trailing comma");

    let err = parse_err(r#"{"a":1,}"#);
    assert_eq!(err.to_string(), "1:8: trailing comma");
}

#[test]
fn structural_errors() {
    let cases = [
        (r#"{"a" 1}"#, "1:6: expected colon"),
        ("{1:2}", "1:2: expected string key"),
        ("[1 2]", "1:4: expected comma"),
        (r#"{"a":1 "b":2}"#, "1:8: expected comma"),
        ("[1,2", "1:5: expected closing bracket"),
        (r#"{"a":1"#, "1:7: expected closing brace"),
        ("[1] 2", "1:5: expected end of input"),
        ("", "1:1: unexpected end of input"),
        ("[1, @]", "1:5: unknown token '@'"),
        ("tru", "1:1: unknown token 't'"),
        ("nullx", "1:1: unknown token 'n'"),
    ];
    for (source, expected) in cases {
        assert_eq!(parse_err(source).to_string(), expected, "input: {source:?}");
    }
}

#[test]
fn rejects_numbers_too_large_for_f64() {
    let err = parse_err(&format!("[{}]", "9".repeat(400)));
    assert_eq!(err.to_string(), "1:2: invalid number format");

    let large = parse_ok(&format!("[{}]", "9".repeat(300)));
    assert_eq!(parse_ok(&large.to_string()), large);
}

#[test]
fn nesting_limit() {
    let at_limit = format!("{}{}", "[".repeat(128), "]".repeat(128));
    assert!(json::parse(&at_limit).is_ok());

    let over_limit = format!("{}{}", "[".repeat(129), "]".repeat(129));
    assert_eq!(parse_err(&over_limit).to_string(), "1:129: nesting too deep");

    let objects = format!("{}1{}", r#"{"a":"#.repeat(129), "}".repeat(129));
    assert_eq!(parse_err(&objects).to_string(), "1:641: nesting too deep");
}

#[test]
fn very_deep_nesting_fails_cleanly() {
    let source = format!("{}{}", "[".repeat(10_000), "]".repeat(10_000));
    let err = parse_err(&source);
    assert!(matches!(err, ParseError::Syntax(_)));
    assert_eq!(err.to_string(), "1:129: nesting too deep");
}

#[test]
fn errors_on_later_lines_carry_their_line() {
    let err = parse_err("{\n  \"a\": ,\n}");
    assert_eq!((err.line(), err.column()), (2, 8));
    assert_eq!(err.to_string(), "2:8: unexpected token ','");
}

#[test]
fn token_stream_for_simple_document() {
    let tokens: Vec<Token<'_, JsonTokenKind>> = json::lexer(r#"{"k": [1, true]}"#)
        .tokenize()
        .unwrap();
    let kinds: Vec<&str> = tokens.iter().map(|t| t.kind.name()).collect();
    assert_eq!(
        kinds,
        vec![
            "lbrace", "string", "colon", "lbracket", "number", "comma", "boolean", "rbracket",
            "rbrace", "eof",
        ]
    );
    assert_eq!(tokens[1].lexeme, "\"k\"");
}

#[test]
fn unknown_characters_become_tokens() {
    let tokens = json::lexer("@").tokenize().unwrap();
    assert_eq!(tokens[0].kind, JsonTokenKind::Unknown);
    assert_eq!(tokens[0].lexeme, "@");
    assert_eq!(tokens[1].kind, JsonTokenKind::Eof);
}
