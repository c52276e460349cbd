//! A parser for GraphQL executable documents (operations and fragments).
//!
//! Source text is lexed by [`token_source::StrGraphQLTokenSource`], parsed
//! by the recursive descent [`GraphQLParser`], and returned as a typed,
//! position-annotated [`ast`]. Parsing stops at the first error, which is
//! reported as a single [`GraphQLParseError`] carrying a line, a column,
//! and a message.
//!
//! ```
//! use coke_parser::GrammarSymbol;
//!
//! let doc = coke_parser::parse_document("{ user(id: 4) { name } }").unwrap();
//! assert_eq!(doc.definitions.len(), 1);
//!
//! let err = coke_parser::parse("null", GrammarSymbol::NamedType).unwrap_err();
//! assert_eq!(err.message(), "null is not an allowed named type");
//! ```

pub mod ast;
mod definition_kind;
mod grammar_symbol;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_token_stream;
mod parsed_node;
mod reserved_name_context;
mod source_position;
pub mod token;
pub mod token_source;
mod value_parsing_error;

pub use definition_kind::DefinitionKind;
pub use grammar_symbol::GrammarSymbol;
pub use grammar_symbol::UnknownGrammarSymbolError;
pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use parsed_node::ParsedNode;
pub use reserved_name_context::ReservedNameContext;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use value_parsing_error::ValueParsingError;

/// Parses `source` as the grammar production `symbol`.
///
/// The whole of `source` must form that production; trailing tokens are an
/// error.
pub fn parse(
    source: &str,
    symbol: GrammarSymbol,
) -> Result<ParsedNode<'_>, GraphQLParseError> {
    GraphQLParser::new(source).parse(symbol)
}

/// Parses `source` as an executable document.
pub fn parse_document(source: &str) -> Result<ast::Document<'_>, GraphQLParseError> {
    GraphQLParser::new(source).parse_document()
}

#[cfg(test)]
mod tests;
