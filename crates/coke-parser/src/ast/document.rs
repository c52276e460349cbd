use crate::ast::ast_node::append_separated;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Definition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A parsed executable document: one or more operation and fragment
/// definitions in source order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
    pub span: GraphQLSourceSpan,
}

impl<'src> Document<'src> {
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition<'src>> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition<'src>> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            Definition::Operation(_) => None,
        })
    }
}

#[inherent]
impl AstNode for Document<'_> {
    /// In synthetic mode, definitions are separated by a blank line.
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => append_separated(&self.definitions, "\n\n", sink),
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
