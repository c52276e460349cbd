//! Tests for type annotation parsing.
//!
//! Type annotations appear in variable definitions and can be named types,
//! list types, or non-null wrappers of either.
//!
//! See <https://spec.graphql.org/October2021/#sec-Type-References>

use crate::ast;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;
use crate::tests::utils::parse_symbol;
use crate::tests::utils::parse_type;
use crate::GrammarSymbol;
use crate::GraphQLParseErrorKind;
use crate::ParsedNode;
use crate::ReservedNameContext;

// =============================================================================
// Named types
// =============================================================================

/// A bare name is a nullable named type.
#[test]
fn type_named() {
    let ast::TypeAnnotation::Named(named) = parse_type("String") else {
        panic!("expected a named type");
    };
    assert_eq!(named.name.value, "String");
}

/// `true` and `false` are valid names, so they are valid type names.
#[test]
fn type_named_boolean_keywords() {
    let ast::TypeAnnotation::Named(named) = parse_type("true") else {
        panic!("expected a named type");
    };
    assert_eq!(named.name.value, "true");
}

/// `null` is never a valid named type.
///
/// See <https://spec.graphql.org/October2021/#NamedType>
#[test]
fn type_named_null_is_rejected() {
    let err = parse_err("null", GrammarSymbol::NamedType);
    assert_eq!(err.message(), "null is not an allowed named type");
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::ReservedName {
            name: "null".to_string(),
            context: ReservedNameContext::NamedType,
        },
    );
}

/// `null` is rejected however deeply the named type is wrapped.
#[test]
fn type_nested_null_is_rejected() {
    let err = parse_err("[[null!]]", GrammarSymbol::Type);
    assert_eq!(err.message(), "null is not an allowed named type");
    assert_eq!(err.column(), 2);
}

/// `null` is rejected in variable definitions and type conditions alike.
#[test]
fn type_null_rejected_in_document_positions() {
    for source in [
        "query Q($v: null) { a }",
        "fragment F on null { a }",
        "{ ... on null { a } }",
    ] {
        let err = parse_err(source, GrammarSymbol::Document);
        assert_eq!(err.message(), "null is not an allowed named type", "for `{source}`");
    }
}

// =============================================================================
// List and non-null types
// =============================================================================

/// `[Type]` is a list of the inner type.
#[test]
fn type_list() {
    let ast::TypeAnnotation::List(list) = parse_type("[Int]") else {
        panic!("expected a list type");
    };
    assert!(matches!(*list.item_type, ast::TypeAnnotation::Named(_)));
}

/// `Type!` is non-null.
#[test]
fn type_non_null_named() {
    let annotation = parse_type("ID!");
    assert!(annotation.is_non_null());
    let ast::TypeAnnotation::NonNull(non_null) = annotation else {
        unreachable!()
    };
    let ast::NullableType::Named(named) = &non_null.inner else {
        panic!("expected a named inner type");
    };
    assert_eq!(named.name.value, "ID");
}

/// Wrappers compose: `[[Int!]]!`.
#[test]
fn type_nested_wrappers() {
    let annotation = parse_type("[[Int!]]!");
    assert_eq!(annotation.innermost_named_type().name.value, "Int");

    let ast::TypeAnnotation::NonNull(outer) = &annotation else {
        panic!("expected non-null outermost");
    };
    let ast::NullableType::List(outer_list) = &outer.inner else {
        panic!("expected a list inside the non-null");
    };
    let ast::TypeAnnotation::List(inner_list) = &*outer_list.item_type else {
        panic!("expected a nullable inner list");
    };
    assert!(inner_list.item_type.is_non_null());
}

/// `!!` is not a type.
#[test]
fn type_double_bang() {
    let err = parse_err("Int!!", GrammarSymbol::Type);
    assert_eq!(err.message(), "expected end of input, found `!`");
}

/// A list needs an item type.
#[test]
fn type_list_empty() {
    let err = parse_err("[]", GrammarSymbol::Type);
    assert_eq!(err.message(), "expected name, found `]`");
}

/// An unclosed list type points back at its `[`.
#[test]
fn type_list_unclosed() {
    let err = parse_err("[Int", GrammarSymbol::Type);
    assert_eq!(err.message(), "unclosed `[`");
    assert_eq!(err.notes()[0].message, "opening `[` in list type annotation here");

    let err = parse_err("[", GrammarSymbol::Type);
    assert_eq!(err.message(), "unclosed `[`");
}

/// The `list_type` and `non_null_type` entry points require their
/// wrapper.
#[test]
fn type_wrapper_entry_points() {
    let ParsedNode::NonNullType(non_null) = parse_symbol("[A]!", GrammarSymbol::NonNullType)
    else {
        panic!("expected a non-null type");
    };
    assert!(matches!(non_null.inner, ast::NullableType::List(_)));

    let err = parse_err("A", GrammarSymbol::NonNullType);
    assert_eq!(err.message(), "expected `!`, found `end of input`");

    let err = parse_err("A", GrammarSymbol::ListType);
    assert_eq!(err.message(), "expected `[`, found `A`");

    let err = parse_err("[A]!", GrammarSymbol::ListType);
    assert_eq!(err.message(), "expected end of input, found `!`");
}

// =============================================================================
// Types in variable definitions
// =============================================================================

/// Each variable definition carries its type and optional default.
#[test]
fn type_in_variable_definitions() {
    let doc = parse_ok("query Q($a: Int = 1, $b: [String!]!) { f }");
    let ast::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    assert_eq!(op.variable_definitions.len(), 2);

    let a = &op.variable_definitions[0];
    assert_eq!(a.variable.name.value, "a");
    assert!(matches!(a.var_type, ast::TypeAnnotation::Named(_)));
    assert!(matches!(a.default_value, Some(ast::Value::Int(ref i)) if i.value == 1));

    let b = &op.variable_definitions[1];
    assert!(b.var_type.is_non_null());
    assert!(b.default_value.is_none());
}

/// Very deep list nesting is bounded.
#[test]
fn type_nesting_depth_is_bounded() {
    let source = format!("{}Int{}", "[".repeat(500), "]".repeat(500));
    let err = parse_err(&source, GrammarSymbol::Type);
    assert_eq!(err.message(), "maximum nesting depth exceeded");
    assert_eq!(err.kind(), &GraphQLParseErrorKind::InvalidSyntax);
}
