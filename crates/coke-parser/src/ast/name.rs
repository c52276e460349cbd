use std::borrow::Cow;

use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A GraphQL [name](https://spec.graphql.org/October2021/#sec-Names)
/// (identifier) matching `[_A-Za-z][_0-9A-Za-z]*`.
///
/// Names are used for field names, argument names, directive names,
/// type names, fragment names, and more. The `value` field borrows
/// from the source text when parsed from a `&str`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Name<'src> {
    pub span: GraphQLSourceSpan,
    pub value: Cow<'src, str>,
}

impl Name<'_> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[inherent]
impl AstNode for Name<'_> {
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
