use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A top-level definition in an executable document.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Definition<'src> {
    Fragment(FragmentDefinition<'src>),
    Operation(OperationDefinition<'src>),
}

#[inherent]
impl AstNode for Definition<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match self {
            Definition::Fragment(d) => d.append_source(sink, source),
            Definition::Operation(d) => d.append_source(sink, source),
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Definition::Fragment(d) => &d.span,
            Definition::Operation(d) => &d.span,
        }
    }
}
