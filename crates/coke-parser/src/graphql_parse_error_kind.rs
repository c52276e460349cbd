use crate::DefinitionKind;
use crate::ReservedNameContext;
use crate::ValueParsingError;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// The human-readable text lives in `GraphQLParseError::message()`, and
/// suggestions live in its notes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// { user(id 1) }
    ///           ^ expected `:`, found `1`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What tokens were expected (e.g., `[":"]`).
        expected: Vec<String>,
        /// Description of what was found (e.g., `"1"` or `"}"`).
        found: String,
    },

    /// The input ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The lexer could not produce a token at this position.
    ///
    /// The lexer's message and notes are preserved in the parent
    /// `GraphQLParseError`.
    ///
    /// # Example
    /// ```text
    /// { field(arg: "unterminated) }
    ///              ^ unterminated string literal
    /// ```
    #[error("lexer error")]
    LexerError,

    /// A delimiter was opened but the input ended before it was closed. The
    /// opening location is included in the error's notes.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        /// The unclosed delimiter (e.g., `"{"`, `"["`, `"("`).
        delimiter: String,
    },

    /// A literal's text could not be converted into a value.
    ///
    /// # Example
    /// ```text
    /// { field(limit: 99999999999999999999) }
    ///                ^^^^^^^^^^^^^^^^^^^^ integer overflow
    /// ```
    #[error("invalid value")]
    InvalidValue(ValueParsingError),

    /// A name that is valid lexically but reserved in this position.
    ///
    /// # Example
    /// ```text
    /// fragment on on User { name }
    ///          ^^ fragment name cannot be `on`
    /// ```
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
        context: ReservedNameContext,
    },

    /// A type-system definition appeared in an executable document.
    ///
    /// # Example
    /// ```text
    /// type User { name: String }
    /// ^^^^ type definition not allowed in executable document
    /// ```
    #[error("wrong document kind")]
    WrongDocumentKind {
        found: DefinitionKind,
    },

    /// A construct that requires content was empty.
    ///
    /// - Selection sets: `{ }`
    /// - Argument lists: `()`
    /// - Variable definition lists: `()`
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        construct: String,
    },

    /// Invalid syntax that doesn't fit other categories (e.g. the nesting
    /// depth limit, or a variable inside a default value).
    #[error("invalid syntax")]
    InvalidSyntax,
}
