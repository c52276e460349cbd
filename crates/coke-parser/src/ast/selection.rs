use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A single entry in a [`SelectionSet`](crate::ast::SelectionSet).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

#[inherent]
impl AstNode for Selection<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match self {
            Selection::Field(s) => s.append_source(sink, source),
            Selection::FragmentSpread(s) => s.append_source(sink, source),
            Selection::InlineFragment(s) => s.append_source(sink, source),
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Selection::Field(s) => &s.span,
            Selection::FragmentSpread(s) => &s.span,
            Selection::InlineFragment(s) => &s.span,
        }
    }
}
