use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A GraphQL variable reference (e.g. `$id`).
///
/// The `span` starts at the `$`; `name` excludes it.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VariableValue<'src> {
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for VariableValue<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => {
                sink.push('$');
                sink.push_str(&self.name.value);
            },
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
