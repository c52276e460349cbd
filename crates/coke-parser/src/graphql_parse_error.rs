use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;

/// A parse error with location information and contextual notes.
///
/// This is the single error type produced by parsing: lexical mismatches,
/// unexpected tokens (including premature end of input), and semantic
/// rejections such as `null` used as a named type all surface here. Parsing
/// stops at the first error, so no partial AST accompanies it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    // Boxed to keep `Result<T, GraphQLParseError>` pointer-sized on the
    // error side; the parser returns these through every nesting level.
    data: Box<GraphQLParseErrorData>,
}

#[derive(Debug, Clone, PartialEq)]
struct GraphQLParseErrorData {
    /// Human-readable primary error message.
    ///
    /// Examples: "expected `:`, found `1`",
    /// "null is not an allowed named type"
    message: String,

    /// The span where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For end-of-input errors: the end of the last consumed token
    /// - For semantic rejections: the rejected name
    span: GraphQLSourceSpan,

    /// Categorized error kind for programmatic handling.
    kind: GraphQLParseErrorKind,

    /// Additional notes providing context, suggestions, and related locations.
    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            data: Box::new(GraphQLParseErrorData {
                message: message.into(),
                span,
                kind,
                notes: GraphQLErrorNotes::new(),
            }),
        }
    }

    /// Creates a parse error from a lexer error token, preserving the
    /// lexer's message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        lexer_notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            data: Box::new(GraphQLParseErrorData {
                message: message.into(),
                span,
                kind: GraphQLParseErrorKind::LexerError,
                notes: lexer_notes,
            }),
        }
    }

    pub fn message(&self) -> &str {
        &self.data.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.data.span
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.data.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.data.notes
    }

    /// The 1-based line where the error was detected.
    pub fn line(&self) -> usize {
        self.data.span.start_inclusive.line() + 1
    }

    /// The 0-based column (in characters) where the error was detected,
    /// matching the `column` convention of AST node positions.
    pub fn column(&self) -> usize {
        self.data.span.start_inclusive.col_utf8()
    }

    /// Adds a general note with a span (pointing to a related location).
    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: GraphQLSourceSpan) {
        self.data.notes
            .push(GraphQLErrorNote::general_with_span(message, span));
    }

    /// Adds a help note without a span.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.data.notes.push(GraphQLErrorNote::help(message));
    }

    /// Adds a spec reference note.
    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.data.notes.push(GraphQLErrorNote::spec(url));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `:`, found `1`
    ///   --> query.graphql:3:12
    ///    |
    ///  3 |   user(id 1) {
    ///    |           ^
    ///    |
    ///    = note: opening `(` in field arguments here
    /// ```
    ///
    /// Displayed line and column numbers are both 1-based, as editors show
    /// them. When `source` is `None`, snippets are omitted.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.data.message);
        output.push('\n');

        output.push_str(&format!("  --> {}\n", self.location_label()));

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        for note in &self.data.notes {
            output.push_str(&format!("   = {}: {}\n", note.kind.label(), note.message));

            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = Self::format_note_snippet(src, note_span)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// query.graphql:3:12: error: expected `:`, found `1`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!("{}: error: {}", self.location_label(), self.data.message)
    }

    fn location_label(&self) -> String {
        let file_name = self
            .data
            .span
            .file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string());
        format!("{file_name}:{}:{}", self.line(), self.column() + 1)
    }

    /// Formats the source snippet for the primary error span.
    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let line_num = self.data.span.start_inclusive.line();
        let line_content = source_line(source, line_num)?;
        let display_line_num = line_num + 1;
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));

        // Spans that cross lines are underlined to the end of the first line.
        let col_start = self.data.span.start_inclusive.col_utf8();
        let col_end = if self.data.span.end_exclusive.line() == line_num {
            self.data.span.end_exclusive.col_utf8()
        } else {
            line_content.chars().count()
        };
        let underline_len = col_end.saturating_sub(col_start).max(1);

        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            width = line_num_width,
            padding = col_start
        ));

        Some(output)
    }

    /// Formats a source snippet for a note's span.
    fn format_note_snippet(source: &str, span: &GraphQLSourceSpan) -> Option<String> {
        let line_num = span.start_inclusive.line();
        let line_content = source_line(source, line_num)?;
        let display_line_num = line_num + 1;
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!(
            "     {display_line_num:>line_num_width$} | {line_content}\n"
        ));
        output.push_str(&format!(
            "     {:>width$} | {:>padding$}-\n",
            "",
            "",
            width = line_num_width,
            padding = span.start_inclusive.col_utf8()
        ));

        Some(output)
    }
}

/// Returns the 0-based `line_num`th line of `source`, splitting on `\r\n`,
/// `\r`, and `\n` the same way the lexer counts lines.
fn source_line(source: &str, line_num: usize) -> Option<&str> {
    let mut remaining = source;
    for _ in 0..line_num {
        let idx = memchr::memchr2(b'\n', b'\r', remaining.as_bytes())?;
        let skip = if remaining[idx..].starts_with("\r\n") { 2 } else { 1 };
        remaining = &remaining[idx + skip..];
    }
    let end = memchr::memchr2(b'\n', b'\r', remaining.as_bytes())
        .unwrap_or(remaining.len());
    Some(&remaining[..end])
}
