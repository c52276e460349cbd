/// Contexts where a syntactically valid name is rejected.
///
/// Used by `GraphQLParseErrorKind::ReservedName` to say which production
/// rejected the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedNameContext {
    /// Fragment names cannot be `on` (it introduces the type condition).
    ///
    /// Invalid: `fragment on on User { ... }` and `{ ...on }`
    FragmentName,

    /// Named types cannot be `null`.
    ///
    /// Invalid: `query ($v: null) { ... }`
    NamedType,
}
