use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::GraphQLSourceSpan;
use inherent::inherent;
use std::fmt::Write;

/// A GraphQL [integer value](https://spec.graphql.org/October2021/#sec-Int-Value).
///
/// Literals outside the `i64` range are rejected by the parser, so
/// `-0` and `0` both produce `0`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct IntValue {
    pub span: GraphQLSourceSpan,
    pub value: i64,
}

#[inherent]
impl AstNode for IntValue {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => {
                let _ = write!(sink, "{}", self.value);
            },
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
