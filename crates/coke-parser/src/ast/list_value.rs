use crate::ast::ast_node::append_separated;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Value;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A GraphQL list value (e.g., `[1, 2, 3]`).
///
/// Items may be of differing kinds; order is preserved. See the
/// [List Value](https://spec.graphql.org/October2021/#sec-List-Value)
/// section of the GraphQL specification.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ListValue<'src> {
    pub span: GraphQLSourceSpan,
    pub values: Vec<Value<'src>>,
}

#[inherent]
impl AstNode for ListValue<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => {
                sink.push('[');
                append_separated(&self.values, ", ", sink);
                sink.push(']');
            },
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
