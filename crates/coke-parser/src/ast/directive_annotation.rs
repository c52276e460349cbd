use crate::ast::argument::append_arguments;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A directive applied to a field, fragment, or operation
/// (e.g. `@include(if: $flag)`).
///
/// The `span` starts at `@`. An absent argument list is an empty
/// `arguments` vector.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DirectiveAnnotation<'src> {
    pub arguments: Vec<Argument<'src>>,
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for DirectiveAnnotation<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => {
                sink.push('@');
                sink.push_str(&self.name.value);
                append_arguments(&self.arguments, sink);
            },
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}

/// Synthesize each directive preceded by a space.
pub(crate) fn append_directives(
    directives: &[DirectiveAnnotation<'_>],
    sink: &mut String,
) {
    for directive in directives {
        sink.push(' ');
        directive.append_source(sink, None);
    }
}
