use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::GraphQLSourceSpan;
use inherent::inherent;
use std::fmt::Write;

/// A GraphQL [float value](https://spec.graphql.org/October2021/#sec-Float-Value).
///
/// The value is always finite; literals that overflow `f64` are
/// rejected by the parser.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FloatValue {
    pub span: GraphQLSourceSpan,
    pub value: f64,
}

#[inherent]
impl AstNode for FloatValue {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            // `Debug` always keeps a fraction or exponent (`1.0`, `1e100`),
            // so the printed text never reads back as an integer.
            None => {
                let _ = write!(sink, "{:?}", self.value);
            },
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
