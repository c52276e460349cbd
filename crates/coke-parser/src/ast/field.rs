use crate::ast::argument::append_arguments;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::directive_annotation::append_directives;
use crate::ast::Alias;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A field selection within a selection set, optionally
/// aliased, with arguments, directives, and a nested
/// selection set.
///
/// Absent arguments and directives are empty vectors; an absent alias
/// or selection set is `None`. The `span` starts at the alias when
/// there is one.
///
/// See
/// [Fields](https://spec.graphql.org/October2021/#sec-Language.Fields)
/// in the GraphQL specification.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Field<'src> {
    pub alias: Option<Alias<'src>>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub name: Name<'src>,
    pub selection_set: Option<SelectionSet<'src>>,
    pub span: GraphQLSourceSpan,
}

impl Field<'_> {
    /// The key this field's result appears under: the alias when
    /// present, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias
            .as_ref()
            .map_or(&*self.name.value, |alias| &*alias.name.value)
    }
}

#[inherent]
impl AstNode for Field<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        if let Some(alias) = &self.alias {
            alias.append_source(sink, None);
            sink.push(' ');
        }
        sink.push_str(&self.name.value);
        append_arguments(&self.arguments, sink);
        append_directives(&self.directives, sink);
        if let Some(selection_set) = &self.selection_set {
            sink.push(' ');
            selection_set.append_source(sink, None);
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
