use crate::ast;
use crate::ast::AstNode;
use crate::GrammarSymbol;
use crate::GraphQLSourceSpan;

/// The result of parsing from a [`GrammarSymbol`] entry point.
///
/// There is one variant per symbol, holding the node type that production
/// builds. Productions that build a bare list (`arguments`, `directives`,
/// `variable_definitions`) hold a `Vec`; `operation_type` holds just the
/// [`ast::OperationKind`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum ParsedNode<'src> {
    Document(ast::Document<'src>),
    Definition(ast::Definition<'src>),
    OperationDefinition(ast::OperationDefinition<'src>),
    OperationType(ast::OperationKind),
    VariableDefinitions(Vec<ast::VariableDefinition<'src>>),
    VariableDefinition(ast::VariableDefinition<'src>),
    SelectionSet(ast::SelectionSet<'src>),
    Selection(ast::Selection<'src>),
    Field(ast::Field<'src>),
    Alias(ast::Alias<'src>),
    Arguments(Vec<ast::Argument<'src>>),
    Argument(ast::Argument<'src>),
    Directives(Vec<ast::DirectiveAnnotation<'src>>),
    Directive(ast::DirectiveAnnotation<'src>),
    FragmentSpread(ast::FragmentSpread<'src>),
    FragmentName(ast::Name<'src>),
    InlineFragment(ast::InlineFragment<'src>),
    FragmentDefinition(ast::FragmentDefinition<'src>),
    TypeCondition(ast::TypeCondition<'src>),
    Type(ast::TypeAnnotation<'src>),
    NamedType(ast::NamedType<'src>),
    ListType(ast::ListType<'src>),
    NonNullType(ast::NonNullType<'src>),
    Value(ast::Value<'src>),
    ConstValue(ast::Value<'src>),
    BooleanOrNullOrEnum(ast::Value<'src>),
    Variable(ast::VariableValue<'src>),
    ListValue(ast::ListValue<'src>),
    ObjectValue(ast::ObjectValue<'src>),
    IntValue(ast::IntValue),
    FloatValue(ast::FloatValue),
    StringValue(ast::StringValue<'src>),
    Name(ast::Name<'src>),
}

impl<'src> ParsedNode<'src> {
    /// The grammar symbol this node was parsed as.
    pub fn grammar_symbol(&self) -> GrammarSymbol {
        match self {
            ParsedNode::Document(_) => GrammarSymbol::Document,
            ParsedNode::Definition(_) => GrammarSymbol::Definition,
            ParsedNode::OperationDefinition(_) => GrammarSymbol::OperationDefinition,
            ParsedNode::OperationType(_) => GrammarSymbol::OperationType,
            ParsedNode::VariableDefinitions(_) => GrammarSymbol::VariableDefinitions,
            ParsedNode::VariableDefinition(_) => GrammarSymbol::VariableDefinition,
            ParsedNode::SelectionSet(_) => GrammarSymbol::SelectionSet,
            ParsedNode::Selection(_) => GrammarSymbol::Selection,
            ParsedNode::Field(_) => GrammarSymbol::Field,
            ParsedNode::Alias(_) => GrammarSymbol::Alias,
            ParsedNode::Arguments(_) => GrammarSymbol::Arguments,
            ParsedNode::Argument(_) => GrammarSymbol::Argument,
            ParsedNode::Directives(_) => GrammarSymbol::Directives,
            ParsedNode::Directive(_) => GrammarSymbol::Directive,
            ParsedNode::FragmentSpread(_) => GrammarSymbol::FragmentSpread,
            ParsedNode::FragmentName(_) => GrammarSymbol::FragmentName,
            ParsedNode::InlineFragment(_) => GrammarSymbol::InlineFragment,
            ParsedNode::FragmentDefinition(_) => GrammarSymbol::FragmentDefinition,
            ParsedNode::TypeCondition(_) => GrammarSymbol::TypeCondition,
            ParsedNode::Type(_) => GrammarSymbol::Type,
            ParsedNode::NamedType(_) => GrammarSymbol::NamedType,
            ParsedNode::ListType(_) => GrammarSymbol::ListType,
            ParsedNode::NonNullType(_) => GrammarSymbol::NonNullType,
            ParsedNode::Value(_) => GrammarSymbol::Value,
            ParsedNode::ConstValue(_) => GrammarSymbol::ConstValue,
            ParsedNode::BooleanOrNullOrEnum(_) => GrammarSymbol::BooleanOrNullOrEnum,
            ParsedNode::Variable(_) => GrammarSymbol::Variable,
            ParsedNode::ListValue(_) => GrammarSymbol::ListValue,
            ParsedNode::ObjectValue(_) => GrammarSymbol::ObjectValue,
            ParsedNode::IntValue(_) => GrammarSymbol::IntValue,
            ParsedNode::FloatValue(_) => GrammarSymbol::FloatValue,
            ParsedNode::StringValue(_) => GrammarSymbol::StringValue,
            ParsedNode::Name(_) => GrammarSymbol::Name,
        }
    }

    /// Unwraps a [`ParsedNode::Document`].
    pub fn into_document(self) -> Option<ast::Document<'src>> {
        match self {
            ParsedNode::Document(document) => Some(document),
            _ => None,
        }
    }

    /// Unwraps any of the value-producing variants.
    pub fn into_value(self) -> Option<ast::Value<'src>> {
        match self {
            ParsedNode::Value(value)
            | ParsedNode::ConstValue(value)
            | ParsedNode::BooleanOrNullOrEnum(value) => Some(value),
            _ => None,
        }
    }

    /// Renders this node as GraphQL text.
    ///
    /// With `Some(source)` the node's original text is sliced out of
    /// `source`; with `None` canonical text is synthesized. List-valued
    /// nodes are always synthesized, with their full concrete syntax
    /// (`(a: 1)`, `@a @b`).
    pub fn to_source(&self, source: Option<&str>) -> String {
        let mut sink = String::new();
        match self {
            ParsedNode::Document(node) => node.append_source(&mut sink, source),
            ParsedNode::Definition(node) => node.append_source(&mut sink, source),
            ParsedNode::OperationDefinition(node) => node.append_source(&mut sink, source),
            ParsedNode::OperationType(kind) => sink.push_str(kind.as_str()),
            ParsedNode::VariableDefinitions(nodes) => {
                sink.push('(');
                ast::append_separated(nodes, ", ", &mut sink);
                sink.push(')');
            },
            ParsedNode::VariableDefinition(node) => node.append_source(&mut sink, source),
            ParsedNode::SelectionSet(node) => node.append_source(&mut sink, source),
            ParsedNode::Selection(node) => node.append_source(&mut sink, source),
            ParsedNode::Field(node) => node.append_source(&mut sink, source),
            ParsedNode::Alias(node) => node.append_source(&mut sink, source),
            ParsedNode::Arguments(nodes) => ast::append_arguments(nodes, &mut sink),
            ParsedNode::Argument(node) => node.append_source(&mut sink, source),
            ParsedNode::Directives(nodes) => {
                ast::append_directives(nodes, &mut sink);
                return sink.trim_start().to_string();
            },
            ParsedNode::Directive(node) => node.append_source(&mut sink, source),
            ParsedNode::FragmentSpread(node) => node.append_source(&mut sink, source),
            ParsedNode::FragmentName(node) => node.append_source(&mut sink, source),
            ParsedNode::InlineFragment(node) => node.append_source(&mut sink, source),
            ParsedNode::FragmentDefinition(node) => node.append_source(&mut sink, source),
            ParsedNode::TypeCondition(node) => node.append_source(&mut sink, source),
            ParsedNode::Type(node) => node.append_source(&mut sink, source),
            ParsedNode::NamedType(node) => node.append_source(&mut sink, source),
            ParsedNode::ListType(node) => node.append_source(&mut sink, source),
            ParsedNode::NonNullType(node) => node.append_source(&mut sink, source),
            ParsedNode::Value(node)
            | ParsedNode::ConstValue(node)
            | ParsedNode::BooleanOrNullOrEnum(node) => node.append_source(&mut sink, source),
            ParsedNode::Variable(node) => node.append_source(&mut sink, source),
            ParsedNode::ListValue(node) => node.append_source(&mut sink, source),
            ParsedNode::ObjectValue(node) => node.append_source(&mut sink, source),
            ParsedNode::IntValue(node) => node.append_source(&mut sink, source),
            ParsedNode::FloatValue(node) => node.append_source(&mut sink, source),
            ParsedNode::StringValue(node) => node.append_source(&mut sink, source),
            ParsedNode::Name(node) => node.append_source(&mut sink, source),
        }
        sink
    }

    /// The span of this node, or `None` for `operation_type`, whose result
    /// carries no position.
    ///
    /// List-valued nodes report a span from their first element through
    /// their last element.
    pub fn span(&self) -> Option<GraphQLSourceSpan> {
        match self {
            ParsedNode::Document(node) => Some(node.span.clone()),
            ParsedNode::Definition(node) => Some(node.span().clone()),
            ParsedNode::OperationDefinition(node) => Some(node.span.clone()),
            ParsedNode::OperationType(_) => None,
            ParsedNode::VariableDefinitions(nodes) => span_of_all(nodes),
            ParsedNode::VariableDefinition(node) => Some(node.span.clone()),
            ParsedNode::SelectionSet(node) => Some(node.span.clone()),
            ParsedNode::Selection(node) => Some(node.span().clone()),
            ParsedNode::Field(node) => Some(node.span.clone()),
            ParsedNode::Alias(node) => Some(node.span.clone()),
            ParsedNode::Arguments(nodes) => span_of_all(nodes),
            ParsedNode::Argument(node) => Some(node.span.clone()),
            ParsedNode::Directives(nodes) => span_of_all(nodes),
            ParsedNode::Directive(node) => Some(node.span.clone()),
            ParsedNode::FragmentSpread(node) => Some(node.span.clone()),
            ParsedNode::FragmentName(node) => Some(node.span.clone()),
            ParsedNode::InlineFragment(node) => Some(node.span.clone()),
            ParsedNode::FragmentDefinition(node) => Some(node.span.clone()),
            ParsedNode::TypeCondition(node) => Some(node.span.clone()),
            ParsedNode::Type(node) => Some(node.span().clone()),
            ParsedNode::NamedType(node) => Some(node.span.clone()),
            ParsedNode::ListType(node) => Some(node.span.clone()),
            ParsedNode::NonNullType(node) => Some(node.span.clone()),
            ParsedNode::Value(node)
            | ParsedNode::ConstValue(node)
            | ParsedNode::BooleanOrNullOrEnum(node) => Some(node.span().clone()),
            ParsedNode::Variable(node) => Some(node.span.clone()),
            ParsedNode::ListValue(node) => Some(node.span.clone()),
            ParsedNode::ObjectValue(node) => Some(node.span.clone()),
            ParsedNode::IntValue(node) => Some(node.span.clone()),
            ParsedNode::FloatValue(node) => Some(node.span.clone()),
            ParsedNode::StringValue(node) => Some(node.span.clone()),
            ParsedNode::Name(node) => Some(node.span.clone()),
        }
    }
}

fn span_of_all<T: AstNode>(nodes: &[T]) -> Option<GraphQLSourceSpan> {
    let first = nodes.first()?;
    let last = nodes.last()?;
    Some(first.span().to(last.span()))
}
