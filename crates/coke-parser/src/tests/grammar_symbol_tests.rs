//! Tests for `GrammarSymbol` naming and parsing.

use crate::GrammarSymbol;
use crate::UnknownGrammarSymbolError;
use std::collections::HashSet;
use std::str::FromStr;

/// Every symbol's textual name parses back to that symbol.
#[test]
fn every_symbol_round_trips_through_its_name() {
    for symbol in GrammarSymbol::ALL {
        assert_eq!(GrammarSymbol::from_str(symbol.as_str()), Ok(symbol));
        assert_eq!(symbol.to_string(), symbol.as_str());
    }
}

/// Symbol names are unique.
#[test]
fn symbol_names_are_unique() {
    let names: HashSet<_> = GrammarSymbol::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(names.len(), GrammarSymbol::ALL.len());
}

/// The default entry point is the whole document.
#[test]
fn default_symbol_is_document() {
    assert_eq!(GrammarSymbol::default(), GrammarSymbol::Document);
}

/// The camelCase spellings used by the GraphQL grammar are accepted too.
#[test]
fn camel_case_names_are_accepted() {
    assert_eq!("selectionSet".parse(), Ok(GrammarSymbol::SelectionSet));
    assert_eq!("NonNullType".parse(), Ok(GrammarSymbol::NonNullType));
    assert_eq!("booleanOrNullOrEnum".parse(), Ok(GrammarSymbol::BooleanOrNullOrEnum));
}

/// Unknown names report the name that was given.
#[test]
fn unknown_name_is_an_error() {
    let result: Result<GrammarSymbol, _> = "schema_definition".parse();
    assert_eq!(
        result,
        Err(UnknownGrammarSymbolError("schema_definition".to_string())),
    );
    let Err(err) = result else { unreachable!() };
    assert_eq!(err.to_string(), "unknown grammar symbol `schema_definition`");
}

/// Snake-case names of a few productions.
#[test]
fn snake_case_names() {
    assert_eq!(GrammarSymbol::OperationDefinition.as_str(), "operation_definition");
    assert_eq!(GrammarSymbol::Type.as_str(), "type");
    assert_eq!(GrammarSymbol::ConstValue.as_str(), "const_value");
    assert_eq!(GrammarSymbol::IntValue.as_str(), "int_value");
}
