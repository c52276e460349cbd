//! Tests for position tracking in parsed AST nodes.
//!
//! Positions are reported as a 1-based line and a 0-based column counted in
//! characters. Spans also carry byte offsets, so `to_source(Some(source))`
//! can slice a node's original text back out.

use crate::ast;
use crate::ast::AstNode;
use crate::ast::AstPos;
use crate::tests::utils::field_at;
use crate::tests::utils::only_operation;
use crate::tests::utils::parse_field;
use crate::tests::utils::parse_ok;
use crate::tests::utils::parse_symbol;
use crate::tests::utils::parse_value;
use crate::GrammarSymbol;
use crate::ParsedNode;

// =============================================================================
// Fields, arguments, and directives
// =============================================================================

/// Every piece of an aliased field with arguments and a directive records
/// where it starts.
#[test]
fn position_field_parts() {
    //                      1111111111222222222233333333334444444444555
    //            01234567890123456789012345678901234567890123456789012
    let source = "myAlias: someField(foo: 123, bar: \"asdf\") @myDirective";
    let field = parse_field(source);

    assert_eq!(field.position(), AstPos::new(1, 0));
    let Some(alias) = &field.alias else {
        panic!("expected an alias");
    };
    assert_eq!(alias.position(), AstPos::new(1, 0));
    assert_eq!(field.name.position(), AstPos::new(1, 9));

    let foo = &field.arguments[0];
    assert_eq!(foo.position(), AstPos::new(1, 19));
    assert_eq!(foo.value.position(), AstPos::new(1, 24));

    let bar = &field.arguments[1];
    assert_eq!(bar.position(), AstPos::new(1, 29));
    assert_eq!(bar.value.position(), AstPos::new(1, 34));

    let directive = &field.directives[0];
    assert_eq!(directive.position(), AstPos::new(1, 42));
    assert_eq!(directive.name.position(), AstPos::new(1, 43));
}

/// An alias spans its name and the colon.
#[test]
fn position_alias_span_includes_colon() {
    let source = "short : someField";
    let field = parse_field(source);
    let Some(alias) = &field.alias else {
        panic!("expected an alias");
    };
    assert_eq!(alias.to_source(Some(source)), "short :");
}

/// Arguments span from their name through the end of their value.
#[test]
fn position_argument_span() {
    let source = "f(foo: [1, 2], bar: {x: 1})";
    let field = parse_field(source);
    assert_eq!(field.arguments[0].to_source(Some(source)), "foo: [1, 2]");
    assert_eq!(field.arguments[1].to_source(Some(source)), "bar: {x: 1}");
    assert_eq!(field.to_source(Some(source)), source);
}

/// A field with a selection set spans through its closing brace.
#[test]
fn position_field_span_includes_selection_set() {
    let source = "{ a: b @d { c } }";
    let doc = parse_ok(source);
    let field = field_at(&only_operation(&doc).selection_set, 0);
    assert_eq!(field.to_source(Some(source)), "a: b @d { c }");
}

// =============================================================================
// Fragments
// =============================================================================

/// Positions inside an inline fragment, across lines.
#[test]
fn position_inline_fragment_parts() {
    //                      1111111111222222222233333333334
    //            01234567890123456789012345678901234567890
    let source = "... on SomeType @include(if: $someVar) {\n  inlineField\n}";
    let ParsedNode::InlineFragment(inline) = parse_symbol(source, GrammarSymbol::InlineFragment)
    else {
        panic!("expected an inline fragment");
    };

    assert_eq!(inline.position(), AstPos::new(1, 0));
    let Some(type_condition) = &inline.type_condition else {
        panic!("expected a type condition");
    };
    assert_eq!(type_condition.position(), AstPos::new(1, 4));
    assert_eq!(type_condition.named_type.position(), AstPos::new(1, 7));

    let directive = &inline.directives[0];
    assert_eq!(directive.position(), AstPos::new(1, 16));
    assert_eq!(directive.name.position(), AstPos::new(1, 17));
    assert_eq!(directive.arguments[0].position(), AstPos::new(1, 25));
    assert_eq!(directive.arguments[0].value.position(), AstPos::new(1, 29));

    assert_eq!(inline.selection_set.position(), AstPos::new(1, 39));
    assert_eq!(field_at(&inline.selection_set, 0).position(), AstPos::new(2, 2));
}

/// A type condition starts at `on`.
#[test]
fn position_type_condition() {
    let ParsedNode::TypeCondition(type_condition) =
        parse_symbol("on SomeType", GrammarSymbol::TypeCondition)
    else {
        panic!("expected a type condition");
    };
    assert_eq!(type_condition.position(), AstPos::new(1, 0));
    assert_eq!(type_condition.named_type.position(), AstPos::new(1, 3));
}

/// Definitions later in a document report their own line.
#[test]
fn position_definitions_across_lines() {
    let source = "query Q {\n  a\n  ...F\n}\n\nfragment F on T {\n  b\n}";
    let doc = parse_ok(source);

    assert_eq!(doc.definitions[0].position(), AstPos::new(1, 0));
    assert_eq!(doc.definitions[1].position(), AstPos::new(6, 0));

    let ast::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    assert_eq!(op.selection_set.selections[1].position(), AstPos::new(3, 2));

    let ast::Definition::Fragment(fragment) = &doc.definitions[1] else {
        panic!("expected a fragment");
    };
    assert_eq!(fragment.name.position(), AstPos::new(6, 9));
    assert_eq!(
        fragment.to_source(Some(source)),
        "fragment F on T {\n  b\n}",
    );
}

// =============================================================================
// Values and types
// =============================================================================

/// List items each record their column.
#[test]
fn position_list_items() {
    let ast::Value::List(list) = parse_value("[1 2 3]") else {
        panic!("expected a list");
    };
    let columns: Vec<usize> = list.values.iter().map(|v| v.position().column).collect();
    assert_eq!(columns, vec![1, 3, 5]);
}

/// Object fields span from their name to their value.
#[test]
fn position_object_fields() {
    let source = "{hello: \"world!\"}";
    let ast::Value::Object(object) = parse_value(source) else {
        panic!("expected an object");
    };
    let field = &object.fields[0];
    assert_eq!(field.position(), AstPos::new(1, 1));
    assert_eq!(field.value.position(), AstPos::new(1, 8));
    assert_eq!(field.to_source(Some(source)), "hello: \"world!\"");
}

/// A non-null type starts at its inner type and ends after the `!`.
#[test]
fn position_non_null_type() {
    let source = "query Q($v: [Int]!) { a }";
    let doc = parse_ok(source);
    let var_type = &only_operation(&doc).variable_definitions[0].var_type;
    assert_eq!(var_type.position(), AstPos::new(1, 12));
    assert_eq!(var_type.to_source(Some(source)), "[Int]!");
}

/// A variable definition spans from `$` through its default value.
#[test]
fn position_variable_definition_span() {
    let source = "query Q($v: Int = 3, $w: ID) { a }";
    let doc = parse_ok(source);
    let definitions = &only_operation(&doc).variable_definitions;
    assert_eq!(definitions[0].to_source(Some(source)), "$v: Int = 3");
    assert_eq!(definitions[1].position(), AstPos::new(1, 21));
}

// =============================================================================
// Character columns and line endings
// =============================================================================

/// Columns count characters, while byte offsets still slice correctly.
#[test]
fn position_counts_characters_not_bytes() {
    //                      1111
    //            01234567890123
    let source = "f(a: \"é\", b: 1)";
    let field = parse_field(source);
    let b = &field.arguments[1];
    assert_eq!(b.position(), AstPos::new(1, 10));
    assert_eq!(b.span.byte_range().start, 11);
    assert_eq!(b.to_source(Some(source)), "b: 1");
}

/// `\r\n` counts as a single line break.
#[test]
fn position_crlf_line_endings() {
    let source = "query\r\n{\r\n  a\r\n}";
    let doc = parse_ok(source);
    let field = field_at(&only_operation(&doc).selection_set, 0);
    assert_eq!(field.position(), AstPos::new(3, 2));
}

/// Comments are skipped without disturbing positions.
#[test]
fn position_after_comments() {
    let source = "# header\n{ # trailing\n  a\n}";
    let doc = parse_ok(source);
    let op = only_operation(&doc);
    assert_eq!(op.position(), AstPos::new(2, 0));
    assert_eq!(field_at(&op.selection_set, 0).position(), AstPos::new(3, 2));
}

/// `AstPos` displays with a 1-based column.
#[test]
fn position_display() {
    let field = parse_field("  \n   name");
    assert_eq!(field.position().to_string(), "2:4");
}
