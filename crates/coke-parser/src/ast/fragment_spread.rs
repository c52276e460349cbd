use crate::ast::ast_node::append_span_source_slice;
use crate::ast::directive_annotation::append_directives;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A named fragment spread (`...UserFields @include(if: $x)`).
///
/// The `span` starts at `...`. The fragment name is never `on`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FragmentSpread<'src> {
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for FragmentSpread<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => {
                sink.push_str("...");
                sink.push_str(&self.name.value);
                append_directives(&self.directives, sink);
            },
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
