use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A GraphQL [boolean value](https://spec.graphql.org/October2021/#sec-Boolean-Value)
/// (`true` or `false`).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BooleanValue {
    pub span: GraphQLSourceSpan,
    pub value: bool,
}

#[inherent]
impl AstNode for BooleanValue {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => sink.push_str(if self.value { "true" } else { "false" }),
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
