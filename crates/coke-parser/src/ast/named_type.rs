use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A nullable named type reference (e.g. `String`).
///
/// The parser never produces a `NamedType` called `null`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NamedType<'src> {
    pub name: Name<'src>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for NamedType<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => sink.push_str(&self.name.value),
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
