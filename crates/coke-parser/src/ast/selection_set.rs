use crate::ast::ast_node::append_separated;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Selection;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A braced, non-empty list of selections.
///
/// See
/// [Selection Sets](https://spec.graphql.org/October2021/#sec-Selection-Sets)
/// in the GraphQL specification.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SelectionSet<'src> {
    pub selections: Vec<Selection<'src>>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for SelectionSet<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => {
                sink.push_str("{ ");
                append_separated(&self.selections, " ", sink);
                sink.push_str(" }");
            },
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
