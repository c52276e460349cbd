use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// The GraphQL [`null` value](https://spec.graphql.org/October2021/#sec-Null-Value).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NullValue {
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for NullValue {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => sink.push_str("null"),
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
