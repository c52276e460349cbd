/// The kind of an error note, which determines how the note is rendered.
///
/// Different kinds are rendered with different prefixes by
/// [`GraphQLParseError::format_detailed`](crate::GraphQLParseError::format_detailed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// General context about the error, e.g. "opening `{` here".
    ///
    /// Rendered as `= note: ...`.
    General,

    /// An actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...`.
    Help,

    /// A link to the relevant section of the GraphQL specification.
    ///
    /// Rendered as `= spec: ...`.
    Spec,
}

impl GraphQLErrorNoteKind {
    /// The prefix used when rendering a note of this kind.
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "note",
            Self::Help => "help",
            Self::Spec => "spec",
        }
    }
}
