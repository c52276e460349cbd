use crate::ast::ast_node::append_separated;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::directive_annotation::append_directives;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// An operation definition: either the full form
/// (`query Name($v: Int) @d { ... }`) or the anonymous shorthand
/// (`{ ... }`), which is a query with no name, variables, or
/// directives.
///
/// See
/// [Operations](https://spec.graphql.org/October2021/#sec-Language.Operations)
/// in the GraphQL specification.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OperationDefinition<'src> {
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub name: Option<Name<'src>>,
    pub operation_kind: OperationKind,
    pub selection_set: SelectionSet<'src>,
    pub span: GraphQLSourceSpan,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
}

impl OperationDefinition<'_> {
    /// Whether this operation can be written in the shorthand form.
    pub fn is_shorthand(&self) -> bool {
        self.operation_kind == OperationKind::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty()
    }
}

#[inherent]
impl AstNode for OperationDefinition<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        if !self.is_shorthand() {
            sink.push_str(self.operation_kind.as_str());
            if let Some(name) = &self.name {
                sink.push(' ');
                sink.push_str(&name.value);
            }
            if !self.variable_definitions.is_empty() {
                sink.push('(');
                append_separated(&self.variable_definitions, ", ", sink);
                sink.push(')');
            }
            append_directives(&self.directives, sink);
            sink.push(' ');
        }
        self.selection_set.append_source(sink, None);
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
