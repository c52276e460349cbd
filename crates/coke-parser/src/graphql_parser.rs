//! Recursive descent parser for GraphQL executable documents.
//!
//! This module provides [`GraphQLParser`], a generic parser that works with
//! any token source implementing [`GraphQLTokenSource`].
//!
//! # Architecture
//!
//! Every grammar production has a corresponding `parse_*` method that
//! returns `Result<AstNode, GraphQLParseError>`. Parsing stops at the first
//! error: a lexer error token, an unexpected token, or one of the semantic
//! rejections (`null` as a named type, `on` as a fragment name). No partial
//! AST is ever returned.
//!
//! Any production can serve as the entry point via [`GraphQLParser::parse`]
//! and [`GrammarSymbol`]. Whatever the entry point, the whole input must be
//! consumed.

use crate::ast;
use crate::DefinitionKind;
use crate::GrammarSymbol;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::ParsedNode;
use crate::ReservedNameContext;
use crate::SourcePosition;
use crate::ValueParsingError;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::cook_string_literal;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use smallvec::SmallVec;
use std::borrow::Cow;

type ParseResult<T> = Result<T, GraphQLParseError>;

const FRAGMENT_NAME_SPEC_URL: &str =
    "https://spec.graphql.org/October2021/#FragmentName";
const NAMED_TYPE_SPEC_URL: &str =
    "https://spec.graphql.org/October2021/#NamedType";

// =============================================================================
// Delimiter tracking
// =============================================================================

/// Context in which a delimiter was opened, for error messages.
#[derive(Debug, Clone, Copy)]
enum DelimiterContext {
    /// `{ field ... }` in operations/fragments
    SelectionSet,
    /// `(arg: value)` in field arguments
    FieldArguments,
    /// `@directive(arg: value)` in directive arguments
    DirectiveArguments,
    /// `($var: Type)` in operation variable definitions
    VariableDefinitions,
    /// `[Type]` in type annotations
    ListType,
    /// `[value, ...]` in list literals
    ListValue,
    /// `{ field: value }` in object literals
    ObjectValue,
}

impl DelimiterContext {
    /// Returns a human-readable description of this context.
    fn description(&self) -> &'static str {
        match self {
            DelimiterContext::SelectionSet => "selection set",
            DelimiterContext::FieldArguments => "field arguments",
            DelimiterContext::DirectiveArguments => "directive arguments",
            DelimiterContext::VariableDefinitions => "variable definitions",
            DelimiterContext::ListType => "list type annotation",
            DelimiterContext::ListValue => "list value",
            DelimiterContext::ObjectValue => "object value",
        }
    }

    /// The opening delimiter this context starts with.
    fn opening_str(&self) -> &'static str {
        match self {
            DelimiterContext::SelectionSet | DelimiterContext::ObjectValue => "{",
            DelimiterContext::FieldArguments
            | DelimiterContext::DirectiveArguments
            | DelimiterContext::VariableDefinitions => "(",
            DelimiterContext::ListType | DelimiterContext::ListValue => "[",
        }
    }
}

/// Tracks an open delimiter so that an unclosed one can point back at its
/// opener.
#[derive(Debug, Clone)]
struct OpenDelimiter {
    /// Where the delimiter was opened
    span: GraphQLSourceSpan,
    /// The parsing context (also implicitly identifies the delimiter type)
    context: DelimiterContext,
}

impl OpenDelimiter {
    fn unclosed_error(self, eof_span: GraphQLSourceSpan) -> GraphQLParseError {
        let delimiter = self.context.opening_str();
        let mut error = GraphQLParseError::new(
            format!("unclosed `{delimiter}`"),
            eof_span,
            GraphQLParseErrorKind::UnclosedDelimiter {
                delimiter: delimiter.to_string(),
            },
        );
        error.add_note_with_span(
            format!(
                "opening `{delimiter}` in {} here",
                self.context.description(),
            ),
            self.span,
        );
        error
    }
}

/// Context for parsing values, determining whether variables are allowed.
#[derive(Clone, Copy, Debug)]
enum ConstContext {
    /// Variables are allowed (field and directive arguments).
    AllowVariables,
    /// The `ConstValue` entry point.
    ConstValue,
    /// Parsing a default value for a variable definition.
    VariableDefaultValue,
}

impl ConstContext {
    /// Describes where variables were found, or `None` when they are
    /// allowed here.
    fn disallowed_variable_description(&self) -> Option<&'static str> {
        match self {
            ConstContext::AllowVariables => None,
            ConstContext::ConstValue => Some("constant values"),
            ConstContext::VariableDefaultValue => Some("variable default values"),
        }
    }
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for GraphQL executable documents.
///
/// Generic over the token source; [`GraphQLParser::new`] builds one over a
/// [`StrGraphQLTokenSource`].
///
/// # Usage
///
/// ```
/// use coke_parser::ast::Definition;
/// use coke_parser::GraphQLParser;
///
/// let source = "query Hello { hello }";
/// let doc = GraphQLParser::new(source).parse_document().unwrap();
///
/// assert!(matches!(doc.definitions[0], Definition::Operation(_)));
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    /// The underlying token stream with lookahead support.
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    /// Stack of open delimiters, consulted when input ends before one is
    /// closed.
    ///
    /// Uses SmallVec to avoid heap allocation for typical nesting depths.
    delimiter_stack: SmallVec<[OpenDelimiter; 8]>,

    /// Shared nesting depth counter, incremented on entry to
    /// `parse_value`, `parse_selection_set`, and `parse_type_annotation`;
    /// decremented on exit.
    recursion_depth: usize,

    /// End position of the most recently consumed token. Node spans end
    /// here, and errors at end of input are anchored to it.
    last_end_position: Option<SourcePosition>,
}

/// Maximum nesting depth for recursive parsing (values, selection sets,
/// and type annotations).
///
/// Bounds stack usage on adversarial inputs like `[[[[[...`. A document at
/// this depth parses within a 2 MiB thread stack, even unoptimized.
pub(crate) const MAX_RECURSION_DEPTH: usize = 64;

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a new parser from a string-like source.
    ///
    /// Accepts any type that can be referenced as a `str`,
    /// including `&str`, `&String`, and `&Cow<str>`.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        let token_source = StrGraphQLTokenSource::new(source.as_ref());
        Self::from_token_source(token_source)
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Creates a new parser from a token source.
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            delimiter_stack: SmallVec::new(),
            recursion_depth: 0,
            last_end_position: None,
        }
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Parses the whole input as the given grammar symbol.
    ///
    /// Fails if anything other than ignored input follows the parsed
    /// construct.
    ///
    /// ```
    /// use coke_parser::GrammarSymbol;
    /// use coke_parser::GraphQLParser;
    /// use coke_parser::ParsedNode;
    ///
    /// let node = GraphQLParser::new("[Int!]")
    ///     .parse(GrammarSymbol::Type)
    ///     .unwrap();
    /// assert!(matches!(node, ParsedNode::Type(_)));
    /// ```
    pub fn parse(mut self, symbol: GrammarSymbol) -> ParseResult<ParsedNode<'src>> {
        let node = match symbol {
            GrammarSymbol::Document => ParsedNode::Document(self.parse_document_node()?),
            GrammarSymbol::Definition => ParsedNode::Definition(self.parse_definition()?),
            GrammarSymbol::OperationDefinition => {
                ParsedNode::OperationDefinition(self.parse_operation_definition()?)
            },
            GrammarSymbol::OperationType => {
                ParsedNode::OperationType(self.parse_operation_type()?.0)
            },
            GrammarSymbol::VariableDefinitions => {
                ParsedNode::VariableDefinitions(self.parse_variable_definitions()?)
            },
            GrammarSymbol::VariableDefinition => {
                ParsedNode::VariableDefinition(self.parse_variable_definition()?)
            },
            GrammarSymbol::SelectionSet => ParsedNode::SelectionSet(self.parse_selection_set()?),
            GrammarSymbol::Selection => ParsedNode::Selection(self.parse_selection()?),
            GrammarSymbol::Field => ParsedNode::Field(self.parse_field()?),
            GrammarSymbol::Alias => ParsedNode::Alias(self.parse_alias()?),
            GrammarSymbol::Arguments => ParsedNode::Arguments(
                self.parse_arguments(DelimiterContext::FieldArguments)?,
            ),
            GrammarSymbol::Argument => ParsedNode::Argument(self.parse_argument()?),
            GrammarSymbol::Directives => ParsedNode::Directives(self.parse_directives()?),
            GrammarSymbol::Directive => ParsedNode::Directive(self.parse_directive()?),
            GrammarSymbol::FragmentSpread => {
                ParsedNode::FragmentSpread(self.parse_fragment_spread()?)
            },
            GrammarSymbol::FragmentName => ParsedNode::FragmentName(self.parse_fragment_name()?),
            GrammarSymbol::InlineFragment => {
                ParsedNode::InlineFragment(self.parse_inline_fragment()?)
            },
            GrammarSymbol::FragmentDefinition => {
                ParsedNode::FragmentDefinition(self.parse_fragment_definition()?)
            },
            GrammarSymbol::TypeCondition => ParsedNode::TypeCondition(self.parse_type_condition()?),
            GrammarSymbol::Type => ParsedNode::Type(self.parse_type_annotation()?),
            GrammarSymbol::NamedType => ParsedNode::NamedType(self.parse_named_type()?),
            GrammarSymbol::ListType => ParsedNode::ListType(self.parse_list_type()?),
            GrammarSymbol::NonNullType => ParsedNode::NonNullType(self.parse_non_null_type()?),
            GrammarSymbol::Value => {
                ParsedNode::Value(self.parse_value(ConstContext::AllowVariables)?)
            },
            GrammarSymbol::ConstValue => {
                ParsedNode::ConstValue(self.parse_value(ConstContext::ConstValue)?)
            },
            GrammarSymbol::BooleanOrNullOrEnum => {
                ParsedNode::BooleanOrNullOrEnum(self.parse_boolean_or_null_or_enum()?)
            },
            GrammarSymbol::Variable => ParsedNode::Variable(self.parse_variable()?),
            GrammarSymbol::ListValue => {
                ParsedNode::ListValue(self.parse_list_value(ConstContext::AllowVariables)?)
            },
            GrammarSymbol::ObjectValue => {
                ParsedNode::ObjectValue(self.parse_object_value(ConstContext::AllowVariables)?)
            },
            GrammarSymbol::IntValue => ParsedNode::IntValue(self.parse_int_value()?),
            GrammarSymbol::FloatValue => ParsedNode::FloatValue(self.parse_float_value()?),
            GrammarSymbol::StringValue => ParsedNode::StringValue(self.parse_string_value()?),
            GrammarSymbol::Name => ParsedNode::Name(self.expect_ast_name()?),
        };
        self.expect_eof()?;
        Ok(node)
    }

    /// Parses an executable document: one or more operation and fragment
    /// definitions.
    pub fn parse_document(mut self) -> ParseResult<ast::Document<'src>> {
        let document = self.parse_document_node()?;
        self.expect_eof()?;
        Ok(document)
    }

    fn parse_document_node(&mut self) -> ParseResult<ast::Document<'src>> {
        let first = self.parse_definition()?;
        let mut definitions = vec![first];
        while !self.token_stream.is_at_end() {
            definitions.push(self.parse_definition()?);
        }

        let span = match (definitions.first(), definitions.last()) {
            (Some(first), Some(last)) => first.span().to(last.span()),
            _ => self.eof_span(),
        };
        Ok(ast::Document { definitions, span })
    }

    /// Succeeds only if nothing but the `Eof` token remains.
    fn expect_eof(&mut self) -> ParseResult<()> {
        if self.token_stream.is_at_end() {
            return Ok(());
        }
        Err(self.unexpected(&["end of input"], "end of input"))
    }

    // =========================================================================
    // Delimiter and recursion bookkeeping
    // =========================================================================

    /// Push an open delimiter onto the stack.
    fn push_delimiter(&mut self, span: GraphQLSourceSpan, context: DelimiterContext) {
        self.delimiter_stack.push(OpenDelimiter { span, context });
    }

    /// Pop the most recent open delimiter.
    fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    /// Whether the construct opened by the innermost delimiter has more
    /// content before `closing`.
    fn has_more_before(&mut self, closing: &GraphQLTokenKind) -> bool {
        !self.peek_is(closing) && !self.token_stream.is_at_end()
    }

    /// Expects the closing token for the innermost open delimiter.
    ///
    /// Reaching end of input reports the delimiter as unclosed, with a note
    /// pointing at where it was opened.
    fn expect_closing(&mut self, closing: &GraphQLTokenKind) -> ParseResult<GraphQLToken<'src>> {
        if self.token_stream.is_at_end()
            && let Some(error) = self.unclosed_delimiter_error()
        {
            return Err(error);
        }
        let token = self.expect(closing)?;
        self.pop_delimiter();
        Ok(token)
    }

    /// Pops the innermost open delimiter and reports it as unclosed.
    fn unclosed_delimiter_error(&mut self) -> Option<GraphQLParseError> {
        let eof_span = self.eof_span();
        self.pop_delimiter()
            .map(|open| open.unclosed_error(eof_span))
    }

    /// Checks recursion depth and returns an error if the limit is
    /// exceeded. On success, increments the depth counter; the caller
    /// must call `exit_recursion()` when done (use the wrapper pattern
    /// to guarantee this).
    fn enter_recursion(&mut self) -> ParseResult<()> {
        if self.recursion_depth >= MAX_RECURSION_DEPTH {
            let span = self.peek_span();
            return Err(GraphQLParseError::new(
                "maximum nesting depth exceeded",
                span,
                GraphQLParseErrorKind::InvalidSyntax,
            ));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    /// Decrements the recursion depth counter.
    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// Expects a specific token kind and consumes it.
    fn expect(&mut self, expected_kind: &GraphQLTokenKind) -> ParseResult<GraphQLToken<'src>> {
        if self.peek_is(expected_kind) {
            return self.next_token();
        }
        let display = Self::token_kind_display(expected_kind);
        Err(self.unexpected(&[display.as_str()], &format!("`{display}`")))
    }

    /// Expects a name token and returns an `ast::Name`.
    ///
    /// `true`, `false`, and `null` are lexed as their own kinds but are
    /// valid names, so they are accepted here too.
    fn expect_ast_name(&mut self) -> ParseResult<ast::Name<'src>> {
        let is_name = self
            .peek_kind()
            .is_some_and(|kind| kind.as_name_str().is_some());
        if !is_name {
            return Err(self.unexpected(&["name"], "name"));
        }
        let token = self.next_token()?;
        let value = match token.kind {
            GraphQLTokenKind::Name(value) => value,
            GraphQLTokenKind::True => Cow::Borrowed("true"),
            GraphQLTokenKind::False => Cow::Borrowed("false"),
            GraphQLTokenKind::Null => Cow::Borrowed("null"),
            other => return Err(Self::unexpected_kind(&other, token.span, &["name"], "name")),
        };
        Ok(ast::Name {
            span: token.span,
            value,
        })
    }

    /// Expects a specific keyword (a Name token with specific text) and
    /// returns its span.
    ///
    /// Does not match `True`, `False`, or `Null` tokens; keywords are
    /// always plain names.
    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<GraphQLSourceSpan> {
        if self.peek_is_keyword(keyword) {
            return Ok(self.next_token()?.span);
        }
        Err(self.unexpected(&[keyword], &format!("`{keyword}`")))
    }

    /// Checks if the current token is a specific keyword without consuming.
    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        matches!(
            self.peek_kind(),
            Some(GraphQLTokenKind::Name(name)) if name.as_ref() == keyword,
        )
    }

    /// Checks if the current token matches the given kind without consuming.
    fn peek_is(&mut self, kind: &GraphQLTokenKind) -> bool {
        self.peek_kind()
            .is_some_and(|actual| Self::token_kinds_match(actual, kind))
    }

    fn peek_kind(&mut self) -> Option<&GraphQLTokenKind<'src>> {
        self.token_stream.peek().map(|token| &token.kind)
    }

    /// The span of the next token, or the end-of-input span if there is
    /// none.
    fn peek_span(&mut self) -> GraphQLSourceSpan {
        let eof_span = self.eof_span();
        self.token_stream
            .peek()
            .map_or(eof_span, |token| token.span.clone())
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    /// Consumes the next token from the stream and tracks its end
    /// position.
    fn consume_token(&mut self) -> Option<GraphQLToken<'src>> {
        let token = self.token_stream.consume();
        if let Some(ref t) = token {
            self.last_end_position = Some(t.span.end_exclusive.clone());
        }
        token
    }

    /// Consumes the next token, failing if the stream is exhausted.
    fn next_token(&mut self) -> ParseResult<GraphQLToken<'src>> {
        match self.consume_token() {
            Some(token) => Ok(token),
            None => Err(GraphQLParseError::new(
                "unexpected end of input",
                self.eof_span(),
                GraphQLParseErrorKind::UnexpectedEof { expected: vec![] },
            )),
        }
    }

    /// Returns a span for EOF errors, anchored to the end of the
    /// last consumed token if available.
    fn eof_span(&self) -> GraphQLSourceSpan {
        if let Some(ref pos) = self.last_end_position {
            GraphQLSourceSpan::new(pos.clone(), pos.clone())
        } else {
            let zero = SourcePosition::new(0, 0, Some(0), 0);
            GraphQLSourceSpan::new(zero.clone(), zero)
        }
    }

    /// Builds a span from the start of `start` through the end of the
    /// last consumed token, keeping `start`'s file path.
    fn make_span(&self, start: &GraphQLSourceSpan) -> GraphQLSourceSpan {
        let end = self
            .last_end_position
            .clone()
            .unwrap_or_else(|| start.end_exclusive.clone());
        GraphQLSourceSpan {
            start_inclusive: start.start_inclusive.clone(),
            end_exclusive: end,
            file_path: start.file_path.clone(),
        }
    }

    /// Builds the error for the token at the front of the stream not being
    /// what the grammar requires here.
    ///
    /// `description` is spliced into "expected {description}, found ...".
    fn unexpected(&mut self, expected: &[&str], description: &str) -> GraphQLParseError {
        let eof_span = self.eof_span();
        match self.token_stream.peek() {
            Some(token) => Self::unexpected_kind(
                &token.kind,
                token.span.clone(),
                expected,
                description,
            ),
            None => GraphQLParseError::new(
                format!("expected {description}, found `end of input`"),
                eof_span,
                GraphQLParseErrorKind::UnexpectedEof {
                    expected: expected.iter().map(|s| s.to_string()).collect(),
                },
            ),
        }
    }

    /// Builds the error for finding a token of `kind` at `span`.
    ///
    /// Lexer error tokens surface their own message and notes.
    fn unexpected_kind(
        kind: &GraphQLTokenKind,
        span: GraphQLSourceSpan,
        expected: &[&str],
        description: &str,
    ) -> GraphQLParseError {
        let expected = expected.iter().map(|s| s.to_string()).collect();
        match kind {
            GraphQLTokenKind::Error {
                message,
                error_notes,
            } => GraphQLParseError::from_lexer_error(
                message.clone(),
                span,
                error_notes.clone(),
            ),
            GraphQLTokenKind::Eof => GraphQLParseError::new(
                format!("expected {description}, found `end of input`"),
                span,
                GraphQLParseErrorKind::UnexpectedEof { expected },
            ),
            _ => {
                let found = Self::token_kind_display(kind);
                GraphQLParseError::new(
                    format!("expected {description}, found `{found}`"),
                    span,
                    GraphQLParseErrorKind::UnexpectedToken { expected, found },
                )
            },
        }
    }

    /// Returns a human-readable display string for a token kind.
    fn token_kind_display(kind: &GraphQLTokenKind) -> String {
        match kind {
            GraphQLTokenKind::At => "@".to_string(),
            GraphQLTokenKind::Bang => "!".to_string(),
            GraphQLTokenKind::Colon => ":".to_string(),
            GraphQLTokenKind::CurlyBraceClose => "}".to_string(),
            GraphQLTokenKind::CurlyBraceOpen => "{".to_string(),
            GraphQLTokenKind::Dollar => "$".to_string(),
            GraphQLTokenKind::Ellipsis => "...".to_string(),
            GraphQLTokenKind::Equals => "=".to_string(),
            GraphQLTokenKind::ParenClose => ")".to_string(),
            GraphQLTokenKind::ParenOpen => "(".to_string(),
            GraphQLTokenKind::SquareBracketClose => "]".to_string(),
            GraphQLTokenKind::SquareBracketOpen => "[".to_string(),
            GraphQLTokenKind::Name(s) => s.to_string(),
            GraphQLTokenKind::IntValue(s) => s.to_string(),
            GraphQLTokenKind::FloatValue(s) => s.to_string(),
            GraphQLTokenKind::StringValue(_) => "string".to_string(),
            GraphQLTokenKind::True => "true".to_string(),
            GraphQLTokenKind::False => "false".to_string(),
            GraphQLTokenKind::Null => "null".to_string(),
            GraphQLTokenKind::Eof => "end of input".to_string(),
            GraphQLTokenKind::Error { message, .. } => {
                format!("tokenization error: {message}")
            },
        }
    }

    /// Compares token kinds for equality, ignoring payload for variant
    /// matching.
    ///
    /// Exhaustive over `actual` so that a new token kind cannot be added
    /// without deciding how it matches.
    fn token_kinds_match(actual: &GraphQLTokenKind, expected: &GraphQLTokenKind) -> bool {
        match actual {
            GraphQLTokenKind::Name(_) => matches!(expected, GraphQLTokenKind::Name(_)),
            GraphQLTokenKind::IntValue(_) => {
                matches!(expected, GraphQLTokenKind::IntValue(_))
            },
            GraphQLTokenKind::FloatValue(_) => {
                matches!(expected, GraphQLTokenKind::FloatValue(_))
            },
            GraphQLTokenKind::StringValue(_) => {
                matches!(expected, GraphQLTokenKind::StringValue(_))
            },
            GraphQLTokenKind::Error { .. } => {
                matches!(expected, GraphQLTokenKind::Error { .. })
            },
            GraphQLTokenKind::At => actual == expected,
            GraphQLTokenKind::Bang => actual == expected,
            GraphQLTokenKind::Colon => actual == expected,
            GraphQLTokenKind::CurlyBraceClose => actual == expected,
            GraphQLTokenKind::CurlyBraceOpen => actual == expected,
            GraphQLTokenKind::Dollar => actual == expected,
            GraphQLTokenKind::Ellipsis => actual == expected,
            GraphQLTokenKind::Equals => actual == expected,
            GraphQLTokenKind::ParenClose => actual == expected,
            GraphQLTokenKind::ParenOpen => actual == expected,
            GraphQLTokenKind::SquareBracketClose => actual == expected,
            GraphQLTokenKind::SquareBracketOpen => actual == expected,
            GraphQLTokenKind::True => actual == expected,
            GraphQLTokenKind::False => actual == expected,
            GraphQLTokenKind::Null => actual == expected,
            GraphQLTokenKind::Eof => actual == expected,
        }
    }

    // =========================================================================
    // Definition parsing
    // =========================================================================

    /// Parses an operation or fragment definition.
    ///
    /// Type-system definitions are recognized only to report that they do
    /// not belong in an executable document.
    fn parse_definition(&mut self) -> ParseResult<ast::Definition<'src>> {
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen)
            || self.peek_is_keyword("query")
            || self.peek_is_keyword("mutation")
            || self.peek_is_keyword("subscription")
        {
            return Ok(ast::Definition::Operation(self.parse_operation_definition()?));
        }
        if self.peek_is_keyword("fragment") {
            return Ok(ast::Definition::Fragment(self.parse_fragment_definition()?));
        }

        if let Some(found) = self.peek_type_system_definition() {
            let span = self.peek_span();
            return Err(GraphQLParseError::new(
                format!("{} not allowed in executable document", found.description()),
                span,
                GraphQLParseErrorKind::WrongDocumentKind { found },
            ));
        }

        Err(self.unexpected(
            &["query", "mutation", "subscription", "fragment", "{"],
            "operation or fragment definition",
        ))
    }

    /// Recognizes the start of a type-system definition: a type-system
    /// keyword, optionally preceded by a description string.
    fn peek_type_system_definition(&mut self) -> Option<DefinitionKind> {
        let keyword_idx = match self.peek_kind() {
            Some(GraphQLTokenKind::StringValue(_)) => 1,
            _ => 0,
        };
        match self.token_stream.peek_nth(keyword_idx).map(|t| &t.kind) {
            Some(GraphQLTokenKind::Name(name)) => DefinitionKind::from_keyword(name),
            _ => None,
        }
    }

    /// Parses an operation definition, either the full form or the
    /// `{ ... }` shorthand.
    fn parse_operation_definition(&mut self) -> ParseResult<ast::OperationDefinition<'src>> {
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                directives: Vec::new(),
                name: None,
                operation_kind: ast::OperationKind::Query,
                span: selection_set.span.clone(),
                selection_set,
                variable_definitions: Vec::new(),
            });
        }

        let (operation_kind, start_span) = self.parse_operation_type()?;

        let name = if self.peek_kind().is_some_and(|kind| kind.as_name_str().is_some()) {
            Some(self.expect_ast_name()?)
        } else {
            None
        };

        let variable_definitions = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };

        let directives = self.parse_optional_directives()?;
        let selection_set = self.parse_selection_set()?;
        let span = self.make_span(&start_span);

        Ok(ast::OperationDefinition {
            directives,
            name,
            operation_kind,
            selection_set,
            span,
            variable_definitions,
        })
    }

    /// Parses `query`, `mutation`, or `subscription`, returning the kind
    /// and the keyword's span.
    fn parse_operation_type(&mut self) -> ParseResult<(ast::OperationKind, GraphQLSourceSpan)> {
        let kind = match self.peek_kind() {
            Some(GraphQLTokenKind::Name(name)) => ast::OperationKind::from_keyword(name),
            _ => None,
        };
        match kind {
            Some(kind) => Ok((kind, self.next_token()?.span)),
            None => Err(self.unexpected(
                &["query", "mutation", "subscription"],
                "operation type (`query`, `mutation`, or `subscription`)",
            )),
        }
    }

    /// Parses variable definitions: `($var: Type = default, ...)`
    fn parse_variable_definitions(&mut self) -> ParseResult<Vec<ast::VariableDefinition<'src>>> {
        let open_token = self.expect(&GraphQLTokenKind::ParenOpen)?;
        self.push_delimiter(open_token.span.clone(), DelimiterContext::VariableDefinitions);

        if self.peek_is(&GraphQLTokenKind::ParenClose) {
            self.next_token()?;
            return Err(GraphQLParseError::new(
                "variable definitions cannot be empty; omit the parentheses instead",
                self.make_span(&open_token.span),
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "variable definitions".to_string(),
                },
            ));
        }

        let mut definitions = Vec::new();
        while self.has_more_before(&GraphQLTokenKind::ParenClose) {
            definitions.push(self.parse_variable_definition()?);
        }
        self.expect_closing(&GraphQLTokenKind::ParenClose)?;

        Ok(definitions)
    }

    /// Parses a single variable definition: `$name: Type = default`
    fn parse_variable_definition(&mut self) -> ParseResult<ast::VariableDefinition<'src>> {
        let variable = self.parse_variable()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type_annotation()?;

        let default_value = if self.peek_is(&GraphQLTokenKind::Equals) {
            self.next_token()?;
            Some(self.parse_value(ConstContext::VariableDefaultValue)?)
        } else {
            None
        };

        let span = self.make_span(&variable.span);
        Ok(ast::VariableDefinition {
            default_value,
            span,
            var_type,
            variable,
        })
    }

    /// Parses a fragment definition:
    /// `fragment Name on Type @directives { ... }`
    fn parse_fragment_definition(&mut self) -> ParseResult<ast::FragmentDefinition<'src>> {
        let start_span = self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        let type_condition = self.parse_type_condition()?;
        let directives = self.parse_optional_directives()?;
        let selection_set = self.parse_selection_set()?;
        let span = self.make_span(&start_span);

        Ok(ast::FragmentDefinition {
            directives,
            name,
            selection_set,
            span,
            type_condition,
        })
    }

    /// Parses a fragment name, which may be any name except `on`.
    fn parse_fragment_name(&mut self) -> ParseResult<ast::Name<'src>> {
        if self.peek_is_keyword("on") {
            let span = self.peek_span();
            let mut error = GraphQLParseError::new(
                "fragment name cannot be `on`",
                span,
                GraphQLParseErrorKind::ReservedName {
                    name: "on".to_string(),
                    context: ReservedNameContext::FragmentName,
                },
            );
            error.add_spec(FRAGMENT_NAME_SPEC_URL);
            return Err(error);
        }
        self.expect_ast_name()
    }

    /// Parses a type condition: `on TypeName`
    fn parse_type_condition(&mut self) -> ParseResult<ast::TypeCondition<'src>> {
        let on_span = self.expect_keyword("on")?;
        let named_type = self.parse_named_type()?;
        let span = self.make_span(&on_span);
        Ok(ast::TypeCondition { named_type, span })
    }

    // =========================================================================
    // Selection set parsing
    // =========================================================================

    /// Parses a selection set: `{ selection... }`
    fn parse_selection_set(&mut self) -> ParseResult<ast::SelectionSet<'src>> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    /// Inner implementation of selection set parsing.
    fn parse_selection_set_impl(&mut self) -> ParseResult<ast::SelectionSet<'src>> {
        let open_token = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        self.push_delimiter(open_token.span.clone(), DelimiterContext::SelectionSet);

        if self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            self.next_token()?;
            return Err(GraphQLParseError::new(
                "selection set cannot be empty",
                self.make_span(&open_token.span),
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "selection set".to_string(),
                },
            ));
        }

        let mut selections = Vec::new();
        while self.has_more_before(&GraphQLTokenKind::CurlyBraceClose) {
            selections.push(self.parse_selection()?);
        }
        self.expect_closing(&GraphQLTokenKind::CurlyBraceClose)?;

        let span = self.make_span(&open_token.span);
        Ok(ast::SelectionSet { selections, span })
    }

    /// Parses a single selection (field, fragment spread, or inline
    /// fragment).
    ///
    /// After `...`, a type condition (`on` followed by a name), a
    /// directive, or a selection set means an inline fragment; anything
    /// else is a fragment spread.
    fn parse_selection(&mut self) -> ParseResult<ast::Selection<'src>> {
        if !self.peek_is(&GraphQLTokenKind::Ellipsis) {
            return self.parse_field().map(ast::Selection::Field);
        }

        let is_inline = match self.token_stream.peek_nth(1).map(|t| &t.kind) {
            Some(GraphQLTokenKind::At | GraphQLTokenKind::CurlyBraceOpen) => true,
            Some(GraphQLTokenKind::Name(name)) if name.as_ref() == "on" => self
                .token_stream
                .peek_nth(2)
                .is_some_and(|t| t.kind.as_name_str().is_some()),
            _ => false,
        };

        if is_inline {
            self.parse_inline_fragment().map(ast::Selection::InlineFragment)
        } else {
            self.parse_fragment_spread().map(ast::Selection::FragmentSpread)
        }
    }

    /// Parses a field: `alias: name(args) @directives { ... }`
    fn parse_field(&mut self) -> ParseResult<ast::Field<'src>> {
        let mut field = self.parse_field_head()?;
        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            field.selection_set = Some(self.parse_selection_set()?);
            field.span = self.make_span(&field.span);
        }
        Ok(field)
    }

    /// Parses a field up to (not including) its selection set.
    ///
    /// Not inlined into `parse_field`, so none of its temporaries stay on
    /// the stack while nested selection sets are parsed.
    #[inline(never)]
    fn parse_field_head(&mut self) -> ParseResult<ast::Field<'src>> {
        let first_name = self.expect_ast_name()?;
        let (alias, name) = if self.peek_is(&GraphQLTokenKind::Colon) {
            let alias = self.finish_alias(first_name)?;
            (Some(alias), self.expect_ast_name()?)
        } else {
            (None, first_name)
        };
        let start_span = alias.as_ref().map_or(&name.span, |alias| &alias.span).clone();

        let arguments = self.parse_optional_arguments(DelimiterContext::FieldArguments)?;
        let directives = self.parse_optional_directives()?;

        let span = self.make_span(&start_span);
        Ok(ast::Field {
            alias,
            arguments,
            directives,
            name,
            selection_set: None,
            span,
        })
    }

    /// Parses an alias: `name:`
    fn parse_alias(&mut self) -> ParseResult<ast::Alias<'src>> {
        let name = self.expect_ast_name()?;
        self.finish_alias(name)
    }

    /// Consumes the `:` following an alias name.
    fn finish_alias(&mut self, name: ast::Name<'src>) -> ParseResult<ast::Alias<'src>> {
        self.expect(&GraphQLTokenKind::Colon)?;
        let span = self.make_span(&name.span);
        Ok(ast::Alias { name, span })
    }

    /// Parses a fragment spread: `...FragmentName @directives`
    fn parse_fragment_spread(&mut self) -> ParseResult<ast::FragmentSpread<'src>> {
        let ellipsis = self.expect(&GraphQLTokenKind::Ellipsis)?;
        let name = self.parse_fragment_name()?;
        let directives = self.parse_optional_directives()?;
        let span = self.make_span(&ellipsis.span);
        Ok(ast::FragmentSpread {
            directives,
            name,
            span,
        })
    }

    /// Parses an inline fragment: `... on Type @directives { ... }`
    fn parse_inline_fragment(&mut self) -> ParseResult<ast::InlineFragment<'src>> {
        let (start_span, type_condition, directives) = self.parse_inline_fragment_head()?;
        self.parse_selection_set().map(|selection_set| ast::InlineFragment {
            directives,
            selection_set,
            span: self.make_span(&start_span),
            type_condition,
        })
    }

    /// Parses `...`, the optional type condition, and directives of an
    /// inline fragment. Not inlined, for the same reason as
    /// `parse_field_head`.
    #[inline(never)]
    #[allow(clippy::type_complexity)]
    fn parse_inline_fragment_head(
        &mut self,
    ) -> ParseResult<(
        GraphQLSourceSpan,
        Option<ast::TypeCondition<'src>>,
        Vec<ast::DirectiveAnnotation<'src>>,
    )> {
        let ellipsis = self.expect(&GraphQLTokenKind::Ellipsis)?;
        let type_condition = if self.peek_is_keyword("on") {
            Some(self.parse_type_condition()?)
        } else {
            None
        };
        let directives = self.parse_optional_directives()?;
        Ok((ellipsis.span, type_condition, directives))
    }

    // =========================================================================
    // Directive and argument parsing
    // =========================================================================

    /// Parses one or more directive annotations.
    fn parse_directives(&mut self) -> ParseResult<Vec<ast::DirectiveAnnotation<'src>>> {
        let mut directives = vec![self.parse_directive()?];
        while self.peek_is(&GraphQLTokenKind::At) {
            directives.push(self.parse_directive()?);
        }
        Ok(directives)
    }

    /// Parses zero or more directive annotations.
    fn parse_optional_directives(&mut self) -> ParseResult<Vec<ast::DirectiveAnnotation<'src>>> {
        if self.peek_is(&GraphQLTokenKind::At) {
            self.parse_directives()
        } else {
            Ok(Vec::new())
        }
    }

    /// Parses a single directive annotation: `@name(args)`
    fn parse_directive(&mut self) -> ParseResult<ast::DirectiveAnnotation<'src>> {
        let at_token = self.expect(&GraphQLTokenKind::At)?;
        let name = self.expect_ast_name()?;
        let arguments = self.parse_optional_arguments(DelimiterContext::DirectiveArguments)?;
        let span = self.make_span(&at_token.span);
        Ok(ast::DirectiveAnnotation {
            arguments,
            name,
            span,
        })
    }

    /// Parses a non-empty argument list: `(name: value, ...)`
    fn parse_arguments(
        &mut self,
        context: DelimiterContext,
    ) -> ParseResult<Vec<ast::Argument<'src>>> {
        let open_token = self.expect(&GraphQLTokenKind::ParenOpen)?;
        self.push_delimiter(open_token.span.clone(), context);

        if self.peek_is(&GraphQLTokenKind::ParenClose) {
            self.next_token()?;
            return Err(GraphQLParseError::new(
                "argument list cannot be empty; omit the parentheses instead",
                self.make_span(&open_token.span),
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "argument list".to_string(),
                },
            ));
        }

        let mut arguments = Vec::new();
        while self.has_more_before(&GraphQLTokenKind::ParenClose) {
            arguments.push(self.parse_argument()?);
        }
        self.expect_closing(&GraphQLTokenKind::ParenClose)?;

        Ok(arguments)
    }

    /// Parses an argument list if one is present.
    fn parse_optional_arguments(
        &mut self,
        context: DelimiterContext,
    ) -> ParseResult<Vec<ast::Argument<'src>>> {
        if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_arguments(context)
        } else {
            Ok(Vec::new())
        }
    }

    /// Parses a single argument: `name: value`
    fn parse_argument(&mut self) -> ParseResult<ast::Argument<'src>> {
        let name = self.expect_ast_name()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let value = self.parse_value(ConstContext::AllowVariables)?;
        let span = self.make_span(&name.span);
        Ok(ast::Argument { name, span, value })
    }

    // =========================================================================
    // Type annotation parsing
    // =========================================================================

    /// Parses a type annotation: `Name`, `[Type]`, or either followed by
    /// `!`.
    fn parse_type_annotation(&mut self) -> ParseResult<ast::TypeAnnotation<'src>> {
        self.enter_recursion()?;
        let result = self.parse_type_annotation_impl();
        self.exit_recursion();
        result
    }

    /// Inner implementation of type annotation parsing.
    fn parse_type_annotation_impl(&mut self) -> ParseResult<ast::TypeAnnotation<'src>> {
        let nullable = self.parse_nullable_type()?;
        if self.peek_is(&GraphQLTokenKind::Bang) {
            Ok(ast::TypeAnnotation::NonNull(self.finish_non_null_type(nullable)?))
        } else {
            Ok(nullable.into())
        }
    }

    fn parse_nullable_type(&mut self) -> ParseResult<ast::NullableType<'src>> {
        if self.peek_is(&GraphQLTokenKind::SquareBracketOpen) {
            Ok(ast::NullableType::List(self.parse_list_type()?))
        } else {
            Ok(ast::NullableType::Named(self.parse_named_type()?))
        }
    }

    /// Parses a named type. `null` is a valid name but never a valid type
    /// name.
    fn parse_named_type(&mut self) -> ParseResult<ast::NamedType<'src>> {
        if self.peek_is(&GraphQLTokenKind::Null) {
            let span = self.peek_span();
            let mut error = GraphQLParseError::new(
                "null is not an allowed named type",
                span,
                GraphQLParseErrorKind::ReservedName {
                    name: "null".to_string(),
                    context: ReservedNameContext::NamedType,
                },
            );
            error.add_spec(NAMED_TYPE_SPEC_URL);
            return Err(error);
        }
        let name = self.expect_ast_name()?;
        Ok(ast::NamedType {
            span: name.span.clone(),
            name,
        })
    }

    /// Parses a list type: `[Type]`
    fn parse_list_type(&mut self) -> ParseResult<ast::ListType<'src>> {
        let open_token = self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
        self.push_delimiter(open_token.span.clone(), DelimiterContext::ListType);
        if self.token_stream.is_at_end()
            && let Some(error) = self.unclosed_delimiter_error()
        {
            return Err(error);
        }
        let item_type = self.parse_type_annotation()?;
        self.expect_closing(&GraphQLTokenKind::SquareBracketClose)?;
        let span = self.make_span(&open_token.span);
        Ok(ast::ListType {
            item_type: Box::new(item_type),
            span,
        })
    }

    /// Parses a non-null type: `Name!` or `[Type]!`
    fn parse_non_null_type(&mut self) -> ParseResult<ast::NonNullType<'src>> {
        self.enter_recursion()?;
        let result = self
            .parse_nullable_type()
            .and_then(|inner| self.finish_non_null_type(inner));
        self.exit_recursion();
        result
    }

    /// Consumes the `!` wrapping `inner`. The span starts at `inner`.
    fn finish_non_null_type(
        &mut self,
        inner: ast::NullableType<'src>,
    ) -> ParseResult<ast::NonNullType<'src>> {
        self.expect(&GraphQLTokenKind::Bang)?;
        let span = self.make_span(inner.span());
        Ok(ast::NonNullType { inner, span })
    }

    // =========================================================================
    // Value parsing
    // =========================================================================

    /// Parses a value (literal or variable reference).
    ///
    /// The `context` parameter specifies whether variables are allowed and
    /// provides context for error messages when they're not.
    fn parse_value(&mut self, context: ConstContext) -> ParseResult<ast::Value<'src>> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(context);
        self.exit_recursion();
        result
    }

    /// Inner implementation of value parsing.
    fn parse_value_impl(&mut self, context: ConstContext) -> ParseResult<ast::Value<'src>> {
        match self.peek_kind() {
            Some(GraphQLTokenKind::Dollar) => {
                if let Some(description) = context.disallowed_variable_description() {
                    let span = self.peek_span();
                    return Err(GraphQLParseError::new(
                        format!("variables are not allowed in {description}"),
                        span,
                        GraphQLParseErrorKind::InvalidSyntax,
                    ));
                }
                self.parse_variable().map(ast::Value::Variable)
            },
            Some(GraphQLTokenKind::IntValue(_)) => self.parse_int_value().map(ast::Value::Int),
            Some(GraphQLTokenKind::FloatValue(_)) => {
                self.parse_float_value().map(ast::Value::Float)
            },
            Some(GraphQLTokenKind::StringValue(_)) => {
                self.parse_string_value().map(ast::Value::String)
            },
            Some(
                GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null
                | GraphQLTokenKind::Name(_),
            ) => self.parse_boolean_or_null_or_enum(),
            Some(GraphQLTokenKind::SquareBracketOpen) => {
                self.parse_list_value(context).map(ast::Value::List)
            },
            Some(GraphQLTokenKind::CurlyBraceOpen) => {
                self.parse_object_value(context).map(ast::Value::Object)
            },
            _ => Err(self.unexpected(&["value"], "value")),
        }
    }

    /// Parses a variable reference: `$name`
    fn parse_variable(&mut self) -> ParseResult<ast::VariableValue<'src>> {
        let dollar = self.expect(&GraphQLTokenKind::Dollar)?;
        let name = self.expect_ast_name()?;
        let span = self.make_span(&dollar.span);
        Ok(ast::VariableValue { name, span })
    }

    /// Parses `true`, `false`, `null`, or any other name as an enum value.
    ///
    /// Matching is on exact text, so `True` and `NULL` are enum values.
    fn parse_boolean_or_null_or_enum(&mut self) -> ParseResult<ast::Value<'src>> {
        let token = self.next_token()?;
        match token.kind {
            GraphQLTokenKind::True => Ok(ast::Value::Boolean(ast::BooleanValue {
                span: token.span,
                value: true,
            })),
            GraphQLTokenKind::False => Ok(ast::Value::Boolean(ast::BooleanValue {
                span: token.span,
                value: false,
            })),
            GraphQLTokenKind::Null => Ok(ast::Value::Null(ast::NullValue { span: token.span })),
            GraphQLTokenKind::Name(value) => Ok(ast::Value::Enum(ast::EnumValue {
                span: token.span,
                value,
            })),
            other => Err(Self::unexpected_kind(
                &other,
                token.span,
                &["true", "false", "null", "enum value"],
                "boolean, null, or enum value",
            )),
        }
    }

    /// Parses an integer literal into an `i64`.
    fn parse_int_value(&mut self) -> ParseResult<ast::IntValue> {
        let token = self.next_token()?;
        let GraphQLTokenKind::IntValue(raw) = &token.kind else {
            return Err(Self::unexpected_kind(&token.kind, token.span, &["integer"], "integer"));
        };
        match raw.parse::<i64>() {
            Ok(value) => Ok(ast::IntValue {
                span: token.span,
                value,
            }),
            Err(_) => {
                let raw = raw.to_string();
                Err(GraphQLParseError::new(
                    format!("integer `{raw}` overflows 64-bit integer"),
                    token.span,
                    GraphQLParseErrorKind::InvalidValue(ValueParsingError::Int(raw)),
                ))
            },
        }
    }

    /// Parses a float literal into a finite `f64`.
    ///
    /// Integer literals are not accepted: a float needs a fractional part
    /// or an exponent.
    fn parse_float_value(&mut self) -> ParseResult<ast::FloatValue> {
        let token = self.next_token()?;
        let GraphQLTokenKind::FloatValue(raw) = &token.kind else {
            return Err(Self::unexpected_kind(&token.kind, token.span, &["float"], "float"));
        };
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(ast::FloatValue {
                span: token.span,
                value,
            }),
            _ => {
                let raw = raw.to_string();
                Err(GraphQLParseError::new(
                    format!("float `{raw}` is not a finite number"),
                    token.span,
                    GraphQLParseErrorKind::InvalidValue(ValueParsingError::Float(raw)),
                ))
            },
        }
    }

    /// Parses a quoted or block string literal into its decoded value.
    fn parse_string_value(&mut self) -> ParseResult<ast::StringValue<'src>> {
        let token = self.next_token()?;
        let raw = match token.kind {
            GraphQLTokenKind::StringValue(raw) => raw,
            other => {
                return Err(Self::unexpected_kind(&other, token.span, &["string"], "string"));
            },
        };
        let is_block = raw.starts_with("\"\"\"");
        match cook_string_literal(raw) {
            Ok(value) => Ok(ast::StringValue {
                is_block,
                span: token.span,
                value,
            }),
            Err(err) => Err(GraphQLParseError::new(
                format!("invalid string literal: {err}"),
                token.span,
                GraphQLParseErrorKind::InvalidValue(ValueParsingError::String(err)),
            )),
        }
    }

    /// Parses a list value: `[value, ...]`
    fn parse_list_value(&mut self, context: ConstContext) -> ParseResult<ast::ListValue<'src>> {
        let open_token = self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
        self.push_delimiter(open_token.span.clone(), DelimiterContext::ListValue);

        let mut values = Vec::new();
        while self.has_more_before(&GraphQLTokenKind::SquareBracketClose) {
            values.push(self.parse_value(context)?);
        }
        self.expect_closing(&GraphQLTokenKind::SquareBracketClose)?;

        let span = self.make_span(&open_token.span);
        Ok(ast::ListValue { span, values })
    }

    /// Parses an object value: `{ field: value, ... }`
    fn parse_object_value(&mut self, context: ConstContext) -> ParseResult<ast::ObjectValue<'src>> {
        let open_token = self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        self.push_delimiter(open_token.span.clone(), DelimiterContext::ObjectValue);

        let mut fields = Vec::new();
        while self.has_more_before(&GraphQLTokenKind::CurlyBraceClose) {
            let name = self.expect_ast_name()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value(context)?;
            let span = self.make_span(&name.span);
            fields.push(ast::ObjectField { name, span, value });
        }
        self.expect_closing(&GraphQLTokenKind::CurlyBraceClose)?;

        let span = self.make_span(&open_token.span);
        Ok(ast::ObjectValue { fields, span })
    }
}
