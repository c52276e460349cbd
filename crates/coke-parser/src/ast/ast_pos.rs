/// The position reported for an AST node: the start of the node's
/// first concrete token.
///
/// `line` is 1-based and `column` is 0-based (counted in characters,
/// not bytes), so the first character of a document is at
/// `AstPos { line: 1, column: 0 }`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct AstPos {
    pub line: usize,
    pub column: usize,
}

impl AstPos {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for AstPos {
    /// Formats as `line:column` with the column shown 1-based, the way
    /// editors display it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}
