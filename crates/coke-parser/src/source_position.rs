use crate::ast::AstPos;

/// A location within GraphQL source text, with dual column tracking.
///
/// This is a pure data struct with no mutation methods. Lexers compute
/// position values as they scan input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: character (Unicode scalar value) count within the current
///   line
/// - `col_utf16`: optional UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// # Dual Column Tracking
///
/// - **`col_utf8`** (always available): increments by 1 for each character
///   regardless of its byte representation. This is what AST positions
///   report as `column`.
/// - **`col_utf16`** (optional): UTF-16 code unit offset within the line,
///   which aligns with LSP. It is `Some` when the token source can provide
///   it (e.g. `StrGraphQLTokenSource`).
///
/// For ASCII text both columns are equal.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct SourcePosition {
    /// Line number (0-based: first line is 0)
    line: usize,

    /// Character count within current line (0-based)
    col_utf8: usize,

    /// UTF-16 code unit offset within current line (0-based), if available.
    col_utf16: Option<usize>,

    /// Byte offset from start of document (0-based)
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    ///
    /// # Arguments
    /// - `line`: 0-based line number (0 = first line)
    /// - `col_utf8`: 0-based character count within current line
    /// - `col_utf16`: 0-based UTF-16 code unit offset within current line,
    ///   or `None` if not available
    /// - `byte_offset`: 0-based byte offset from document start
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: Option<usize>,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    ///
    /// Both 'a' (1 byte) and '🎉' (4 bytes) add 1 to this count.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line,
    /// if available.
    ///
    /// 'a' adds 1 to this count while '🎉' (a surrogate pair) adds 2.
    pub fn col_utf16(&self) -> Option<usize> {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Convert to the `AstPos` reported by AST nodes.
    ///
    /// `AstPos` uses a 1-based line and a 0-based column, so only the line
    /// is shifted. The column is always derived from `col_utf8`.
    pub fn to_ast_pos(&self) -> AstPos {
        AstPos {
            line: self.line + 1,
            column: self.col_utf8,
        }
    }
}
