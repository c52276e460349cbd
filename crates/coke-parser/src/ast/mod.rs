//! Typed AST for GraphQL executable documents.
//!
//! Every node is immutable once built and exclusively owned by its
//! parent. Names and strings are [`Cow<'src, str>`] so that nodes built
//! from a `&str` borrow from it.
//!
//! Every node carries a [`GraphQLSourceSpan`] starting at its first
//! concrete token, and implements [`AstNode`] for position lookup
//! ([`AstNode::position`]) and source reconstruction
//! ([`AstNode::to_source`]). Equality is structural and includes spans,
//! so two parses of the same text are equal while the same text at a
//! different offset is not.
//!
//! Syntactically absent children resolve to explicit defaults: empty
//! vectors for arguments, directives, and variable definitions; `None`
//! for aliases, operation names, nested selection sets, inline-fragment
//! type conditions, and default values.
//!
//! # Example
//!
//! ```rust
//! use coke_parser::ast::AstNode;
//! use coke_parser::ast::Definition;
//!
//! let source = "{ hello }";
//! let doc = coke_parser::parse_document(source).unwrap();
//! let Definition::Operation(op) = &doc.definitions[0] else {
//!     unreachable!()
//! };
//! assert_eq!(op.position().line, 1);
//! assert_eq!(op.to_source(None), "{ hello }");
//! ```
//!
//! [`Cow<'src, str>`]: std::borrow::Cow
//! [`GraphQLSourceSpan`]: crate::GraphQLSourceSpan

mod alias;
mod argument;
mod ast_node;
mod ast_pos;
mod boolean_value;
mod definition;
mod directive_annotation;
mod document;
mod enum_value;
mod field;
mod float_value;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod int_value;
mod list_type;
mod list_value;
mod name;
mod named_type;
mod non_null_type;
mod null_value;
mod nullable_type;
mod object_field;
mod object_value;
mod operation_definition;
mod operation_kind;
mod selection;
mod selection_set;
mod string_value;
mod type_annotation;
mod type_condition;
mod value;
mod variable_definition;
mod variable_value;

pub use alias::Alias;
pub use argument::Argument;
pub use ast_node::AstNode;
pub use ast_pos::AstPos;
pub use boolean_value::BooleanValue;
pub use definition::Definition;
pub use directive_annotation::DirectiveAnnotation;
pub use document::Document;
pub use enum_value::EnumValue;
pub use field::Field;
pub use float_value::FloatValue;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use int_value::IntValue;
pub use list_type::ListType;
pub use list_value::ListValue;
pub use name::Name;
pub use named_type::NamedType;
pub use non_null_type::NonNullType;
pub use null_value::NullValue;
pub use nullable_type::NullableType;
pub use object_field::ObjectField;
pub use object_value::ObjectValue;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use string_value::StringValue;
pub use type_annotation::TypeAnnotation;
pub use type_condition::TypeCondition;
pub use value::Value;
pub use variable_definition::VariableDefinition;
pub use variable_value::VariableValue;

pub(crate) use argument::append_arguments;
pub(crate) use ast_node::append_separated;
pub(crate) use directive_annotation::append_directives;

#[cfg(test)]
mod tests;
