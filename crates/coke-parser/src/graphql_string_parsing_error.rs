/// Error returned when decoding a GraphQL string literal fails.
///
/// Produced by the quoted-string escape decoder
/// ([`cook_quoted_string`](crate::token::cook_quoted_string)), which backs
/// `GraphQLTokenKind::parse_string_value()`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLStringParsingError {
    /// A backslash followed by something other than a named escape or `u`
    /// (e.g. `\q`).
    #[error("Invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// The literal is missing its closing quote(s).
    #[error("Unterminated string: missing closing quote")]
    UnterminatedString,

    /// A `\u` escape without exactly four hex digits, or one naming a UTF-16
    /// surrogate (e.g. `\uD83D`).
    #[error("Invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),
}
