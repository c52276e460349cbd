use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Value;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A single argument in a field or directive argument list
/// (e.g. `first: 10`).
///
/// See
/// [Arguments](https://spec.graphql.org/October2021/#sec-Language.Arguments)
/// in the GraphQL specification.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
    pub value: Value<'src>,
}

#[inherent]
impl AstNode for Argument<'_> {
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

/// Synthesize a parenthesized argument list, or nothing when `arguments`
/// is empty.
pub(crate) fn append_arguments(arguments: &[Argument<'_>], sink: &mut String) {
    if arguments.is_empty() {
        return;
    }
    sink.push('(');
    crate::ast::ast_node::append_separated(arguments, ", ", sink);
    sink.push(')');
}
