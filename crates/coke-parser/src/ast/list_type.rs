use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::TypeAnnotation;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A nullable list type reference (e.g. `[String]`, `[Int!]`).
///
/// The `span` covers both brackets.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ListType<'src> {
    pub item_type: Box<TypeAnnotation<'src>>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for ListType<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => {
                sink.push('[');
                self.item_type.append_source(sink, None);
                sink.push(']');
            },
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
