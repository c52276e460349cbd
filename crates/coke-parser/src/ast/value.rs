use crate::ast::AstNode;
use crate::ast::BooleanValue;
use crate::ast::EnumValue;
use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::ast::ListValue;
use crate::ast::NullValue;
use crate::ast::ObjectValue;
use crate::ast::StringValue;
use crate::ast::VariableValue;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A GraphQL input value.
///
/// Represents all possible GraphQL value literals as defined
/// in the
/// [Input Values](https://spec.graphql.org/October2021/#sec-Input-Values)
/// section of the GraphQL specification.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Value<'src> {
    Boolean(BooleanValue),
    Enum(EnumValue<'src>),
    Float(FloatValue),
    Int(IntValue),
    List(ListValue<'src>),
    Null(NullValue),
    Object(ObjectValue<'src>),
    String(StringValue<'src>),
    Variable(VariableValue<'src>),
}

#[inherent]
impl AstNode for Value<'_> {
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        match self {
            Value::Boolean(v) => v.append_source(sink, source),
            Value::Enum(v) => v.append_source(sink, source),
            Value::Float(v) => v.append_source(sink, source),
            Value::Int(v) => v.append_source(sink, source),
            Value::List(v) => v.append_source(sink, source),
            Value::Null(v) => v.append_source(sink, source),
            Value::Object(v) => v.append_source(sink, source),
            Value::String(v) => v.append_source(sink, source),
            Value::Variable(v) => v.append_source(sink, source),
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Value::Boolean(v) => &v.span,
            Value::Enum(v) => &v.span,
            Value::Float(v) => &v.span,
            Value::Int(v) => &v.span,
            Value::List(v) => &v.span,
            Value::Null(v) => &v.span,
            Value::Object(v) => &v.span,
            Value::String(v) => &v.span,
            Value::Variable(v) => &v.span,
        }
    }
}
