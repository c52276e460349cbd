use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::NullableType;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A non-null type reference (e.g. `String!`, `[Int]!`).
///
/// Wrapping a [`NullableType`] makes `String!!` unrepresentable. The
/// `span` starts at the inner type's first token and ends after `!`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NonNullType<'src> {
    pub inner: NullableType<'src>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for NonNullType<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => {
                self.inner.append_source(sink, None);
                sink.push('!');
            },
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
