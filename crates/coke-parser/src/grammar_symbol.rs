/// A grammar production that parsing can start from.
///
/// Every production of the executable-document grammar is listed, plus the
/// leaf literal productions, so that any construct can be parsed in
/// isolation (see [`crate::parse`]).
///
/// The textual form is snake_case (`selection_set`, `named_type`, ...).
/// [`FromStr`](std::str::FromStr) also accepts the camelCase spelling used
/// in the GraphQL grammar (`selectionSet`).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum GrammarSymbol {
    #[default]
    Document,
    Definition,
    OperationDefinition,
    OperationType,
    VariableDefinitions,
    VariableDefinition,
    SelectionSet,
    Selection,
    Field,
    Alias,
    Arguments,
    Argument,
    Directives,
    Directive,
    FragmentSpread,
    FragmentName,
    InlineFragment,
    FragmentDefinition,
    TypeCondition,
    Type,
    NamedType,
    ListType,
    NonNullType,
    Value,
    /// A value in which variables are not allowed.
    ConstValue,
    BooleanOrNullOrEnum,
    Variable,
    ListValue,
    ObjectValue,
    IntValue,
    FloatValue,
    StringValue,
    Name,
}

impl GrammarSymbol {
    /// Every grammar symbol, in grammar order.
    pub const ALL: [GrammarSymbol; 33] = [
        GrammarSymbol::Document,
        GrammarSymbol::Definition,
        GrammarSymbol::OperationDefinition,
        GrammarSymbol::OperationType,
        GrammarSymbol::VariableDefinitions,
        GrammarSymbol::VariableDefinition,
        GrammarSymbol::SelectionSet,
        GrammarSymbol::Selection,
        GrammarSymbol::Field,
        GrammarSymbol::Alias,
        GrammarSymbol::Arguments,
        GrammarSymbol::Argument,
        GrammarSymbol::Directives,
        GrammarSymbol::Directive,
        GrammarSymbol::FragmentSpread,
        GrammarSymbol::FragmentName,
        GrammarSymbol::InlineFragment,
        GrammarSymbol::FragmentDefinition,
        GrammarSymbol::TypeCondition,
        GrammarSymbol::Type,
        GrammarSymbol::NamedType,
        GrammarSymbol::ListType,
        GrammarSymbol::NonNullType,
        GrammarSymbol::Value,
        GrammarSymbol::ConstValue,
        GrammarSymbol::BooleanOrNullOrEnum,
        GrammarSymbol::Variable,
        GrammarSymbol::ListValue,
        GrammarSymbol::ObjectValue,
        GrammarSymbol::IntValue,
        GrammarSymbol::FloatValue,
        GrammarSymbol::StringValue,
        GrammarSymbol::Name,
    ];

    /// The snake_case name of this symbol.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrammarSymbol::Document => "document",
            GrammarSymbol::Definition => "definition",
            GrammarSymbol::OperationDefinition => "operation_definition",
            GrammarSymbol::OperationType => "operation_type",
            GrammarSymbol::VariableDefinitions => "variable_definitions",
            GrammarSymbol::VariableDefinition => "variable_definition",
            GrammarSymbol::SelectionSet => "selection_set",
            GrammarSymbol::Selection => "selection",
            GrammarSymbol::Field => "field",
            GrammarSymbol::Alias => "alias",
            GrammarSymbol::Arguments => "arguments",
            GrammarSymbol::Argument => "argument",
            GrammarSymbol::Directives => "directives",
            GrammarSymbol::Directive => "directive",
            GrammarSymbol::FragmentSpread => "fragment_spread",
            GrammarSymbol::FragmentName => "fragment_name",
            GrammarSymbol::InlineFragment => "inline_fragment",
            GrammarSymbol::FragmentDefinition => "fragment_definition",
            GrammarSymbol::TypeCondition => "type_condition",
            GrammarSymbol::Type => "type",
            GrammarSymbol::NamedType => "named_type",
            GrammarSymbol::ListType => "list_type",
            GrammarSymbol::NonNullType => "non_null_type",
            GrammarSymbol::Value => "value",
            GrammarSymbol::ConstValue => "const_value",
            GrammarSymbol::BooleanOrNullOrEnum => "boolean_or_null_or_enum",
            GrammarSymbol::Variable => "variable",
            GrammarSymbol::ListValue => "list_value",
            GrammarSymbol::ObjectValue => "object_value",
            GrammarSymbol::IntValue => "int_value",
            GrammarSymbol::FloatValue => "float_value",
            GrammarSymbol::StringValue => "string_value",
            GrammarSymbol::Name => "name",
        }
    }
}

impl std::fmt::Display for GrammarSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GrammarSymbol {
    type Err = UnknownGrammarSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_symbol_name(s);
        GrammarSymbol::ALL
            .into_iter()
            .find(|symbol| normalize_symbol_name(symbol.as_str()) == wanted)
            .ok_or_else(|| UnknownGrammarSymbolError(s.to_string()))
    }
}

/// Lowercases and drops underscores so `selection_set` and `selectionSet`
/// compare equal.
fn normalize_symbol_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Returned when a string names no [`GrammarSymbol`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown grammar symbol `{0}`")]
pub struct UnknownGrammarSymbolError(pub String);
