//! Various test utils.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GrammarSymbol;
use crate::GraphQLParseError;
use crate::GraphQLSourceSpan;
use crate::ParsedNode;
use crate::SourcePosition;

/// Creates a mock token with the given kind and a zero-width span.
///
/// Uses `'static` lifetime since test tokens use owned strings.
pub fn mock_token(kind: GraphQLTokenKind<'static>) -> GraphQLToken<'static> {
    let pos = SourcePosition::new(0, 0, Some(0), 0);
    GraphQLToken::new(kind, GraphQLSourceSpan::new(pos.clone(), pos))
}

/// Creates a mock Name token with the given name.
pub fn mock_name_token(name: &str) -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::name_owned(name.to_string()))
}

/// Creates a mock Eof token.
pub fn mock_eof_token() -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::Eof)
}

/// A mock token source that produces tokens from a Vec.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<GraphQLToken<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<GraphQLToken<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = GraphQLToken<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Parses `source` as a document, panicking with the formatted error on
/// failure.
pub fn parse_ok(source: &str) -> ast::Document<'_> {
    match crate::parse_document(source) {
        Ok(doc) => doc,
        Err(err) => panic!(
            "expected `{source}` to parse, got:\n{}",
            err.format_detailed(Some(source)),
        ),
    }
}

/// Parses `source` as `symbol`, panicking with the formatted error on
/// failure.
pub fn parse_symbol(source: &str, symbol: GrammarSymbol) -> ParsedNode<'_> {
    match crate::parse(source, symbol) {
        Ok(node) => node,
        Err(err) => panic!(
            "expected `{source}` to parse as `{symbol}`, got:\n{}",
            err.format_detailed(Some(source)),
        ),
    }
}

/// Parses `source` as `symbol`, expecting an error.
pub fn parse_err(source: &str, symbol: GrammarSymbol) -> GraphQLParseError {
    match crate::parse(source, symbol) {
        Ok(node) => panic!("expected `{source}` to fail as `{symbol}`, got: {node:?}"),
        Err(err) => err,
    }
}

/// Parses `source` as a value (variables allowed).
pub fn parse_value(source: &str) -> ast::Value<'_> {
    match parse_symbol(source, GrammarSymbol::Value) {
        ParsedNode::Value(value) => value,
        other => panic!("expected a value, got: {other:?}"),
    }
}

/// Parses `source` as a field.
pub fn parse_field(source: &str) -> ast::Field<'_> {
    match parse_symbol(source, GrammarSymbol::Field) {
        ParsedNode::Field(field) => field,
        other => panic!("expected a field, got: {other:?}"),
    }
}

/// Parses `source` as a type annotation.
pub fn parse_type(source: &str) -> ast::TypeAnnotation<'_> {
    match parse_symbol(source, GrammarSymbol::Type) {
        ParsedNode::Type(type_annotation) => type_annotation,
        other => panic!("expected a type, got: {other:?}"),
    }
}

/// Returns the only operation in `doc`.
pub fn only_operation<'a, 'src>(
    doc: &'a ast::Document<'src>,
) -> &'a ast::OperationDefinition<'src> {
    assert_eq!(doc.definitions.len(), 1, "expected exactly one definition");
    match &doc.definitions[0] {
        ast::Definition::Operation(op) => op,
        other => panic!("expected an operation, got: {other:?}"),
    }
}

/// Returns the field at `idx` in `selection_set`.
pub fn field_at<'a, 'src>(
    selection_set: &'a ast::SelectionSet<'src>,
    idx: usize,
) -> &'a ast::Field<'src> {
    match &selection_set.selections[idx] {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field at {idx}, got: {other:?}"),
    }
}

/// Runs `f` on a thread with a 2 MiB stack, the default size of Rust's
/// spawned threads and of tokio's blocking-pool threads.
pub fn on_2mib_stack<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    std::thread::Builder::new()
        .stack_size(2 << 20)
        .spawn(f)
        .expect("failed to spawn test thread")
        .join()
        .expect("test thread panicked")
}
