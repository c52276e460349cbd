use crate::token::graphql_string_cooking::cook_str;
use crate::GraphQLErrorNotes;
use crate::GraphQLStringParsingError;
use std::borrow::Cow;
use std::num::ParseFloatError;
use std::num::ParseIntError;

/// The kind of a GraphQL token.
///
/// Literal values (`IntValue`, `FloatValue`, `StringValue`) store only the raw
/// source text; the parser converts them to values when it builds the AST.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: `StrGraphQLTokenSource`
/// borrows string slices directly from the source text using
/// `Cow::Borrowed`. Hand-built tokens (e.g. in tests) can use `Cow::Owned`.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (e.g.
/// `IntValue("-123")`), not as separate minus and number tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// A GraphQL name matching `[_A-Za-z][_0-9A-Za-z]*`, other than `true`,
    /// `false`, and `null`.
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal, including optional negative sign
    /// (e.g. `"-123"`, `"0"`).
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal, including optional negative sign
    /// (e.g. `"-1.23e-4"`, `"0.5"`).
    FloatValue(Cow<'src, str>),

    /// Raw source text of a string literal, including quotes
    /// (e.g. `"\"hello\\nworld\""`, `"\"\"\"block\"\"\""`).
    StringValue(Cow<'src, str>),

    // =========================================================================
    // Boolean and null (distinct from Name for type safety)
    // =========================================================================
    True,
    False,
    Null,

    /// End of input.
    Eof,

    /// A lexer error. The parser turns the first one it reaches into a
    /// `GraphQLParseError`.
    Error {
        message: String,
        error_notes: GraphQLErrorNotes,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    /// Create a `Name` token from a borrowed string slice (zero-copy).
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Name(Cow::Borrowed(s))
    }

    /// Create a `Name` token from an owned `String`.
    #[inline]
    pub fn name_owned(s: String) -> Self {
        GraphQLTokenKind::Name(Cow::Owned(s))
    }

    #[inline]
    pub fn int_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::IntValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn float_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::FloatValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn string_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::StringValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn string_value_owned(s: String) -> Self {
        GraphQLTokenKind::StringValue(Cow::Owned(s))
    }

    /// Create an `Error` token.
    #[inline]
    pub fn error(message: impl Into<String>, error_notes: GraphQLErrorNotes) -> Self {
        GraphQLTokenKind::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Returns the string representation of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Name(_)
            | GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue(_)
            | GraphQLTokenKind::StringValue(_)
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Error { .. } => None,
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns `true` if this token is a scalar value literal (`IntValue`,
    /// `FloatValue`, `StringValue`, `True`, `False`, or `Null`).
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::IntValue(_)
                | GraphQLTokenKind::FloatValue(_)
                | GraphQLTokenKind::StringValue(_)
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null
        )
    }

    /// Returns `true` if this token represents a lexer error.
    pub fn is_error(&self) -> bool {
        matches!(self, GraphQLTokenKind::Error { .. })
    }

    /// Returns the text of this token when it can serve as a GraphQL name.
    ///
    /// `true`, `false`, and `null` match the `Name` grammar, so they count
    /// here even though the lexer gives them their own kinds.
    pub fn as_name_str(&self) -> Option<&str> {
        match self {
            GraphQLTokenKind::Name(s) => Some(s),
            GraphQLTokenKind::True => Some("true"),
            GraphQLTokenKind::False => Some("false"),
            GraphQLTokenKind::Null => Some("null"),
            _ => None,
        }
    }

    /// Parse an `IntValue`'s raw text to `i64`.
    ///
    /// Returns `None` if this is not an `IntValue`, or `Some(Err(...))` if
    /// the value overflows.
    pub fn parse_int_value(&self) -> Option<Result<i64, ParseIntError>> {
        match self {
            GraphQLTokenKind::IntValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Parse a `FloatValue`'s raw text to `f64`.
    ///
    /// Returns `None` if this is not a `FloatValue`. Out-of-range values
    /// parse to an infinity rather than an error.
    pub fn parse_float_value(&self) -> Option<Result<f64, ParseFloatError>> {
        match self {
            GraphQLTokenKind::FloatValue(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Parse a `StringValue`'s raw text to its decoded content.
    ///
    /// - Quoted strings (`"..."`): decodes `\"`, `\\`, `\/`, `\b`, `\f`, `\n`,
    ///   `\r`, `\t`, and `\uXXXX`.
    /// - Block strings (`"""..."""`): un-escapes `\"""`, then applies the
    ///   indentation stripping and blank-line trimming algorithm.
    ///
    /// Returns `None` if this is not a `StringValue`.
    pub fn parse_string_value(&self) -> Option<Result<String, GraphQLStringParsingError>> {
        match self {
            GraphQLTokenKind::StringValue(raw) => {
                Some(cook_str(raw).map(Cow::into_owned))
            },
            _ => None,
        }
    }
}
