use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A field alias: the `name:` prefix that renames a field in the
/// response (`smallPic: profilePic(size: 64)`).
///
/// The `span` covers the name and the colon.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Alias<'src> {
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for Alias<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => {
                sink.push_str(&self.name.value);
                sink.push(':');
            },
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
