use crate::token::GraphQLToken;

/// Marker trait for [`GraphQLToken`] lexers (iterators that generate
/// [`GraphQLToken`]).
///
/// The parser is generic over this trait, so any iterator of tokens can be
/// parsed: [`StrGraphQLTokenSource`](crate::token_source::StrGraphQLTokenSource)
/// lexes a `&str`, and tests feed hand-built token vectors.
///
/// Implementors are responsible for:
/// - Skipping ignored input (whitespace, commas, and comments)
/// - Emitting [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error)
///   for lexer errors
/// - Emitting exactly one final
///   [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof) token
///
/// All lookahead and buffering is handled by `GraphQLTokenStream`.
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T where T: Iterator<Item = GraphQLToken<'src>> {}
