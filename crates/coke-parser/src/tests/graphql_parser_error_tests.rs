//! Tests for how the parser reports malformed input: lexical errors that
//! surface through the parser, input that ends too early, and tokens that
//! do not fit the grammar.

use crate::tests::utils::parse_err;
use crate::GrammarSymbol;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLParseErrorKind;

fn document_err(source: &str) -> crate::GraphQLParseError {
    parse_err(source, GrammarSymbol::Document)
}

// =============================================================================
// Lexical errors
// =============================================================================

/// An unterminated string is reported at its opening quote.
#[test]
fn error_unterminated_string() {
    let err = document_err("{ f(a: \"abc) }");
    assert_eq!(err.message(), "Unterminated string literal");
    assert_eq!(err.kind(), &GraphQLParseErrorKind::LexerError);
    assert_eq!(err.column(), 7);
    assert!(err.notes().iter().any(|note| note.kind == GraphQLErrorNoteKind::Help));
}

/// A single-line string cannot span lines.
#[test]
fn error_string_with_newline() {
    let err = document_err("{ f(a: \"abc\n\") }");
    assert_eq!(err.message(), "Unterminated string literal");
    assert_eq!(err.line(), 1);
}

/// An unterminated block string is reported as such.
#[test]
fn error_unterminated_block_string() {
    let err = document_err("{ f(a: \"\"\"abc\n) }");
    assert_eq!(err.message(), "Unterminated block string");
    assert_eq!(err.column(), 7);
}

/// Unknown escapes are rejected and the error points at the backslash.
#[test]
fn error_invalid_escape_sequence() {
    let err = document_err(r#"{ f(a: "x\q") }"#);
    assert_eq!(err.message(), r"Invalid escape sequence `\q`");
    assert_eq!(err.column(), 9);
}

/// `\u` needs exactly four hex digits.
#[test]
fn error_invalid_unicode_escape() {
    let err = document_err(r#"{ f(a: "\u12") }"#);
    assert_eq!(err.message(), r"Invalid unicode escape sequence `\u12`");
}

/// Control characters are not allowed in strings.
#[test]
fn error_control_character_in_string() {
    let err = document_err("{ f(a: \"a\u{0007}b\") }");
    assert!(
        err.message().starts_with("Invalid character"),
        "unexpected message: {}",
        err.message(),
    );
    assert!(err.message().ends_with("in string literal"));
    assert_eq!(err.column(), 9);
}

/// Numbers may not have leading zeros.
///
/// See <https://spec.graphql.org/October2021/#IntValue>
#[test]
fn error_number_leading_zero() {
    let err = document_err("{ f(a: 01) }");
    assert_eq!(err.message(), "Invalid number: leading zeros are not allowed: `01`");
    assert_eq!(err.notes()[0].kind, GraphQLErrorNoteKind::Spec);
}

/// An exponent marker needs digits.
#[test]
fn error_number_missing_exponent_digits() {
    let err = document_err("{ f(a: 1e) }");
    assert_eq!(
        err.message(),
        "Invalid number: exponent must have at least one digit: `1e`",
    );
}

/// A lone minus sign is not a number.
#[test]
fn error_lone_minus() {
    let err = document_err("{ f(a: -) }");
    assert_eq!(err.message(), "Unexpected `-`");
}

/// A single `.` is not a token.
#[test]
fn error_lone_dot() {
    let err = document_err("{ .a }");
    assert_eq!(err.message(), "Unexpected `.`");
    assert_eq!(err.column(), 2);
}

/// Spaced-out dots get a targeted message.
#[test]
fn error_spaced_dots() {
    let err = document_err("{ . . . F }");
    assert_eq!(err.message(), "Unexpected `. . .`");
}

/// A lexical error wins over whatever the parser expected at that point.
#[test]
fn error_lexer_error_in_place_of_name() {
    let err = document_err("query & { a }");
    assert_eq!(err.message(), "Unexpected character `&`");
    assert_eq!(err.column(), 6);
}

/// Trailing garbage after a complete document is a lexical error, not an
/// "expected end of input" error, when it is not a token at all.
#[test]
fn error_trailing_invalid_character() {
    let err = document_err("{ a } %");
    assert_eq!(err.message(), "Unexpected character `%`");
    assert_eq!(err.kind(), &GraphQLParseErrorKind::LexerError);
}

// =============================================================================
// Unexpected end of input
// =============================================================================

/// Input that stops partway through a construct reports what was needed
/// next.
#[test]
fn error_unexpected_eof() {
    for (source, message) in [
        ("query", "expected `{`, found `end of input`"),
        ("fragment", "expected name, found `end of input`"),
        ("fragment F", "expected `on`, found `end of input`"),
        ("fragment F on", "expected name, found `end of input`"),
        ("{ f(a:", "expected value, found `end of input`"),
        ("{ f @", "expected name, found `end of input`"),
        ("{ ...", "expected name, found `end of input`"),
        ("query Q($a", "expected `:`, found `end of input`"),
        ("query Q($a:", "expected name, found `end of input`"),
    ] {
        let err = document_err(source);
        assert_eq!(err.message(), message, "for `{source}`");
        assert!(
            matches!(err.kind(), GraphQLParseErrorKind::UnexpectedEof { .. }),
            "for `{source}`: {:?}",
            err.kind(),
        );
    }
}

/// End-of-input errors point just past the last token.
#[test]
fn error_unexpected_eof_position() {
    let err = document_err("query Q\n  @dir");
    assert_eq!(err.line(), 2);
    assert_eq!(err.column(), 6);
}

/// Input that stops inside a delimited construct reports the delimiter
/// as unclosed, anchored at the end of the last token.
#[test]
fn error_unclosed_at_end_of_last_token() {
    let err = document_err("{ f(a: 1");
    assert_eq!(err.message(), "unclosed `(`");
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::UnclosedDelimiter {
            delimiter: "(".to_string(),
        },
    );
    assert_eq!(err.column(), 8);
    let Some(note_span) = &err.notes()[0].span else {
        panic!("expected the note to point at the opener");
    };
    assert_eq!(note_span.start_inclusive.col_utf8(), 3);
}

/// Unclosed list and object values name their context.
#[test]
fn error_unclosed_values() {
    let err = parse_err("[1, 2", GrammarSymbol::Value);
    assert_eq!(err.message(), "unclosed `[`");
    assert_eq!(err.notes()[0].message, "opening `[` in list value here");

    let err = parse_err("{a: 1", GrammarSymbol::Value);
    assert_eq!(err.message(), "unclosed `{`");
    assert_eq!(err.notes()[0].message, "opening `{` in object value here");
}

// =============================================================================
// Unexpected tokens
// =============================================================================

/// A token that does not fit reports what was expected and what was found.
#[test]
fn error_unexpected_tokens() {
    for (source, message) in [
        ("{ f(a 1) }", "expected `:`, found `1`"),
        ("{ f(1: a) }", "expected name, found `1`"),
        ("{ f(a: ) }", "expected value, found `)`"),
        ("{ 123 }", "expected name, found `123`"),
        ("{ f(a: :) }", "expected value, found `:`"),
        ("query Q($a: Int = ) { f }", "expected value, found `)`"),
        ("{ a } }", "expected operation or fragment definition, found `}`"),
        ("{ f(a: \"s\" b: \"t\") } \"x\"", "expected operation or fragment definition, found `string`"),
    ] {
        let err = document_err(source);
        assert_eq!(err.message(), message, "for `{source}`");
    }
}

/// The `UnexpectedToken` kind records the expected token descriptions and
/// the text found.
#[test]
fn error_unexpected_token_kind() {
    let err = document_err("{ f(a 1) }");
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::UnexpectedToken {
            expected: vec![":".to_string()],
            found: "1".to_string(),
        },
    );
}

/// Variables are rejected in variable default values.
#[test]
fn error_variable_in_default_value() {
    let err = document_err("query Q($a: Int = $b) { f }");
    assert_eq!(err.message(), "variables are not allowed in variable default values");
    assert_eq!(err.kind(), &GraphQLParseErrorKind::InvalidSyntax);
    assert_eq!(err.column(), 18);
}

/// Variables nested inside a default value are rejected too.
#[test]
fn error_nested_variable_in_default_value() {
    let err = document_err("query Q($a: In = {x: [$b]}) { f }");
    assert_eq!(err.message(), "variables are not allowed in variable default values");
}

/// Only the first error is reported.
#[test]
fn error_first_error_wins() {
    let err = document_err("{ f(a 1) } { g(b 2) }");
    assert_eq!(err.column(), 6);
}
