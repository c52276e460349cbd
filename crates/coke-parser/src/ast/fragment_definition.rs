use crate::ast::ast_node::append_span_source_slice;
use crate::ast::directive_annotation::append_directives;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::ast::TypeCondition;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A named fragment definition
/// (`fragment UserFields on User @d { ... }`).
///
/// See
/// [Fragments](https://spec.graphql.org/October2021/#sec-Language.Fragments)
/// in the GraphQL specification.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FragmentDefinition<'src> {
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub name: Name<'src>,
    pub selection_set: SelectionSet<'src>,
    pub span: GraphQLSourceSpan,
    pub type_condition: TypeCondition<'src>,
}

#[inherent]
impl AstNode for FragmentDefinition<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push_str("fragment ");
        sink.push_str(&self.name.value);
        sink.push(' ');
        self.type_condition.append_source(sink, None);
        append_directives(&self.directives, sink);
        sink.push(' ');
        self.selection_set.append_source(sink, None);
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
