//! Tests for `GraphQLTokenKind` classification and literal decoding.

use crate::smallvec;
use crate::token::GraphQLTokenKind;
use crate::GraphQLStringParsingError;
use std::borrow::Cow;

fn all_punctuators() -> Vec<GraphQLTokenKind<'static>> {
    vec![
        GraphQLTokenKind::At,
        GraphQLTokenKind::Bang,
        GraphQLTokenKind::Colon,
        GraphQLTokenKind::CurlyBraceClose,
        GraphQLTokenKind::CurlyBraceOpen,
        GraphQLTokenKind::Dollar,
        GraphQLTokenKind::Ellipsis,
        GraphQLTokenKind::Equals,
        GraphQLTokenKind::ParenClose,
        GraphQLTokenKind::ParenOpen,
        GraphQLTokenKind::SquareBracketClose,
        GraphQLTokenKind::SquareBracketOpen,
    ]
}

fn all_non_punctuators() -> Vec<GraphQLTokenKind<'static>> {
    vec![
        GraphQLTokenKind::name_owned("foo".to_string()),
        GraphQLTokenKind::IntValue(Cow::Borrowed("1")),
        GraphQLTokenKind::FloatValue(Cow::Borrowed("1.5")),
        GraphQLTokenKind::string_value_owned("\"s\"".to_string()),
        GraphQLTokenKind::True,
        GraphQLTokenKind::False,
        GraphQLTokenKind::Null,
        GraphQLTokenKind::Eof,
        GraphQLTokenKind::error("bad", smallvec![]),
    ]
}

// =============================================================================
// Classification
// =============================================================================

/// Every executable-grammar punctuator is recognized, with its text.
///
/// See <https://spec.graphql.org/October2021/#Punctuator>
#[test]
fn punctuators_are_classified() {
    let texts: Vec<&str> = all_punctuators()
        .iter()
        .map(|kind| {
            assert!(kind.is_punctuator(), "{kind:?} should be a punctuator");
            kind.as_punctuator_str().unwrap()
        })
        .collect();
    assert_eq!(
        texts,
        vec!["@", "!", ":", "}", "{", "$", "...", "=", ")", "(", "]", "["],
    );
}

/// Names, literals, `Eof`, and errors are not punctuators.
#[test]
fn non_punctuators_are_classified() {
    for kind in all_non_punctuators() {
        assert!(!kind.is_punctuator(), "{kind:?} should not be a punctuator");
        assert_eq!(kind.as_punctuator_str(), None);
    }
}

/// `is_value` covers the scalar literal kinds only.
#[test]
fn is_value_covers_scalar_literals() {
    let values: Vec<bool> = all_non_punctuators().iter().map(|k| k.is_value()).collect();
    assert_eq!(
        values,
        vec![false, true, true, true, true, true, true, false, false],
    );
    assert!(all_punctuators().iter().all(|k| !k.is_value()));
}

/// Only `Error` tokens report `is_error`.
#[test]
fn is_error_only_for_error_tokens() {
    let errors: Vec<bool> = all_non_punctuators().iter().map(|k| k.is_error()).collect();
    assert_eq!(errors.iter().filter(|e| **e).count(), 1);
    assert!(GraphQLTokenKind::error("x", smallvec![]).is_error());
}

/// `true`, `false`, and `null` can stand in for names.
#[test]
fn as_name_str_includes_keyword_literals() {
    assert_eq!(GraphQLTokenKind::name_borrowed("user").as_name_str(), Some("user"));
    assert_eq!(GraphQLTokenKind::True.as_name_str(), Some("true"));
    assert_eq!(GraphQLTokenKind::False.as_name_str(), Some("false"));
    assert_eq!(GraphQLTokenKind::Null.as_name_str(), Some("null"));
    assert_eq!(GraphQLTokenKind::IntValue(Cow::Borrowed("1")).as_name_str(), None);
    assert_eq!(GraphQLTokenKind::Dollar.as_name_str(), None);
}

/// Borrowed and owned constructors produce equal tokens.
#[test]
fn borrowed_and_owned_constructors_are_equal() {
    assert_eq!(
        GraphQLTokenKind::name_borrowed("a"),
        GraphQLTokenKind::name_owned("a".to_string()),
    );
    assert_eq!(
        GraphQLTokenKind::string_value_borrowed("\"a\""),
        GraphQLTokenKind::string_value_owned("\"a\"".to_string()),
    );
}

// =============================================================================
// Literal decoding
// =============================================================================

/// Integer text decodes to `i64`, including the extremes.
#[test]
fn parse_int_value_decodes() {
    let kind = GraphQLTokenKind::int_value_borrowed("-123");
    assert_eq!(kind.parse_int_value(), Some(Ok(-123)));

    let kind = GraphQLTokenKind::int_value_borrowed("-9223372036854775808");
    assert_eq!(kind.parse_int_value(), Some(Ok(i64::MIN)));

    let kind = GraphQLTokenKind::int_value_borrowed("9223372036854775808");
    assert!(matches!(kind.parse_int_value(), Some(Err(_))));

    assert_eq!(GraphQLTokenKind::Null.parse_int_value(), None);
}

/// Float text decodes to `f64`; huge exponents overflow to infinity.
#[test]
fn parse_float_value_decodes() {
    let kind = GraphQLTokenKind::float_value_borrowed("-1.5e2");
    assert_eq!(kind.parse_float_value(), Some(Ok(-150.0)));

    let kind = GraphQLTokenKind::float_value_borrowed("1e400");
    assert_eq!(kind.parse_float_value(), Some(Ok(f64::INFINITY)));

    let kind = GraphQLTokenKind::int_value_borrowed("1");
    assert_eq!(kind.parse_float_value(), None);
}

/// String tokens decode through the quoted or block string decoder.
#[test]
fn parse_string_value_decodes() {
    let kind = GraphQLTokenKind::string_value_borrowed(r#""a\nb""#);
    assert_eq!(kind.parse_string_value(), Some(Ok("a\nb".to_string())));

    let kind = GraphQLTokenKind::string_value_borrowed("\"\"\"\n  a\n  b\n\"\"\"");
    assert_eq!(kind.parse_string_value(), Some(Ok("a\nb".to_string())));

    let kind = GraphQLTokenKind::string_value_borrowed(r#""\x""#);
    assert_eq!(
        kind.parse_string_value(),
        Some(Err(GraphQLStringParsingError::InvalidEscapeSequence("\\x".to_string()))),
    );

    assert_eq!(GraphQLTokenKind::Eof.parse_string_value(), None);
}
