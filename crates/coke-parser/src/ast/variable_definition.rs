use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::VariableValue;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A variable definition in an operation's variable list
/// (`$first: Int = 10`).
///
/// `default_value` is `None` when no `= value` was written, which is
/// distinct from an explicit `= null`. Default values never contain
/// variables.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VariableDefinition<'src> {
    pub default_value: Option<Value<'src>>,
    pub span: GraphQLSourceSpan,
    pub var_type: TypeAnnotation<'src>,
    pub variable: VariableValue<'src>,
}

#[inherent]
impl AstNode for VariableDefinition<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        self.variable.append_source(sink, None);
        sink.push_str(": ");
        self.var_type.append_source(sink, None);
        if let Some(default_value) = &self.default_value {
            sink.push_str(" = ");
            default_value.append_source(sink, None);
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}
