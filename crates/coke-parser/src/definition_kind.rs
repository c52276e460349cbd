/// The kind of type-system definition found where an executable definition
/// was expected.
///
/// Carried by `GraphQLParseErrorKind::WrongDocumentKind` so tools can tell a
/// stray schema snippet apart from plain garbage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    /// `schema { ... }` or any `extend ...`
    Schema,

    /// `type`, `interface`, `union`, `enum`, `scalar`, or `input`.
    TypeDefinition,

    /// `directive @name on ...`
    DirectiveDefinition,
}

impl DefinitionKind {
    /// Classifies a keyword that starts a type-system definition.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "schema" | "extend" => Some(Self::Schema),
            "type" | "interface" | "union" | "enum" | "scalar" | "input" => {
                Some(Self::TypeDefinition)
            },
            "directive" => Some(Self::DirectiveDefinition),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Schema => "schema definition",
            Self::TypeDefinition => "type definition",
            Self::DirectiveDefinition => "directive definition",
        }
    }
}
