/// The kind of an executable operation.
///
/// The anonymous shorthand form (`{ field }`) is always a query.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    #[default]
    Query,
    Subscription,
}

impl OperationKind {
    /// Returns the operation kind spelled by `keyword`, if any.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "mutation" => Some(OperationKind::Mutation),
            "query" => Some(OperationKind::Query),
            "subscription" => Some(OperationKind::Subscription),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Mutation => "mutation",
            OperationKind::Query => "query",
            OperationKind::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
