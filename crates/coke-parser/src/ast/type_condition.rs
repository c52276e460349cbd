use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::NamedType;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A type condition (`on User`) on a fragment definition or inline
/// fragment. The `span` starts at the `on` keyword.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TypeCondition<'src> {
    pub named_type: NamedType<'src>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for TypeCondition<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => {
                sink.push_str("on ");
                sink.push_str(&self.named_type.name.value);
            },
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
