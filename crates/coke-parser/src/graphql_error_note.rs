use crate::GraphQLErrorNoteKind;
use crate::GraphQLSourceSpan;
use crate::SmallVec;

/// A note attached to a lexer or parser error.
///
/// Notes carry context ("string started here"), suggestions ("add closing
/// `\"`"), or specification links, optionally pointing at a related source
/// location.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,
    /// When present, the note is rendered with a snippet of this location.
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::General, message, None)
    }

    pub fn general_with_span(message: impl Into<String>, span: GraphQLSourceSpan) -> Self {
        Self::new(GraphQLErrorNoteKind::General, message, Some(span))
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::Help, message, None)
    }

    pub fn spec(url: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::Spec, url, None)
    }

    fn new(
        kind: GraphQLErrorNoteKind,
        message: impl Into<String>,
        span: Option<GraphQLSourceSpan>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }
}

/// Notes attached to a single error.
///
/// Most errors carry 0-2 notes, so these live inline.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
