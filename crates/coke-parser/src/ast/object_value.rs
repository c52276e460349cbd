use crate::ast::ast_node::append_separated;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::ObjectField;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A GraphQL input object value (e.g., `{ name: "x", age: 3 }`).
///
/// Fields keep their source order. Duplicate field names are kept as
/// written; rejecting them is left to validation. See the
/// [Input Object Values](https://spec.graphql.org/October2021/#sec-Input-Object-Values)
/// section of the GraphQL specification.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ObjectValue<'src> {
    pub fields: Vec<ObjectField<'src>>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for ObjectValue<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => {
                sink.push('{');
                append_separated(&self.fields, ", ", sink);
                sink.push('}');
            },
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
