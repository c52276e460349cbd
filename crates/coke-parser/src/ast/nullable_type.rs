use crate::ast::AstNode;
use crate::ast::ListType;
use crate::ast::NamedType;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A type reference that may be wrapped by `!`: either a named type
/// or a list type, but never another non-null type.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum NullableType<'src> {
    List(ListType<'src>),
    Named(NamedType<'src>),
}

#[inherent]
impl AstNode for NullableType<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match self {
            NullableType::List(t) => t.append_source(sink, source),
            NullableType::Named(t) => t.append_source(sink, source),
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            NullableType::List(t) => &t.span,
            NullableType::Named(t) => &t.span,
        }
    }
}
