use crate::ast::AstNode;
use crate::ast::ListType;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::NullableType;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A GraphQL
/// [type reference](https://spec.graphql.org/October2021/#sec-Type-References).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum TypeAnnotation<'src> {
    List(ListType<'src>),
    Named(NamedType<'src>),
    NonNull(NonNullType<'src>),
}

impl<'src> TypeAnnotation<'src> {
    /// Returns the innermost named type, looking through list and
    /// non-null wrappers.
    pub fn innermost_named_type(&self) -> &NamedType<'src> {
        match self {
            TypeAnnotation::List(list) => list.item_type.innermost_named_type(),
            TypeAnnotation::Named(named) => named,
            TypeAnnotation::NonNull(non_null) => match &non_null.inner {
                NullableType::List(list) => list.item_type.innermost_named_type(),
                NullableType::Named(named) => named,
            },
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeAnnotation::NonNull(_))
    }
}

impl<'src> From<NullableType<'src>> for TypeAnnotation<'src> {
    fn from(nullable: NullableType<'src>) -> Self {
        match nullable {
            NullableType::List(list) => TypeAnnotation::List(list),
            NullableType::Named(named) => TypeAnnotation::Named(named),
        }
    }
}

#[inherent]
impl AstNode for TypeAnnotation<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match self {
            TypeAnnotation::List(t) => t.append_source(sink, source),
            TypeAnnotation::Named(t) => t.append_source(sink, source),
            TypeAnnotation::NonNull(t) => t.append_source(sink, source),
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            TypeAnnotation::List(t) => &t.span,
            TypeAnnotation::Named(t) => &t.span,
            TypeAnnotation::NonNull(t) => &t.span,
        }
    }
}
