use crate::ast::ast_node::append_span_source_slice;
use crate::ast::directive_annotation::append_directives;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::SelectionSet;
use crate::ast::TypeCondition;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// An inline fragment (`... on User { name }` or `... @skip(if: $x) { id }`).
///
/// The `span` starts at `...`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InlineFragment<'src> {
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub span: GraphQLSourceSpan,
    pub type_condition: Option<TypeCondition<'src>>,
}

#[inherent]
impl AstNode for InlineFragment<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push_str("...");
        if let Some(type_condition) = &self.type_condition {
            sink.push(' ');
            type_condition.append_source(sink, None);
        }
        append_directives(&self.directives, sink);
        sink.push(' ');
        self.selection_set.append_source(sink, None);
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
