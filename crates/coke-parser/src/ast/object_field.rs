use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Value;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A single `name: value` entry within an [`ObjectValue`](crate::ast::ObjectValue).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
    pub value: Value<'src>,
}

#[inherent]
impl AstNode for ObjectField<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => {
                sink.push_str(&self.name.value);
                sink.push_str(": ");
                self.value.append_source(sink, None);
            },
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
