use std::borrow::Cow;

use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A GraphQL [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value):
/// any bare name in value position other than `true`, `false`, or
/// `null`.
///
/// Matching is case-sensitive, so `True` and `NULL` are enum values.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EnumValue<'src> {
    pub span: GraphQLSourceSpan,
    pub value: Cow<'src, str>,
}

#[inherent]
impl AstNode for EnumValue<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => sink.push_str(&self.value),
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
