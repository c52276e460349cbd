use crate::ast::AstPos;
use crate::GraphQLSourceSpan;

/// Append the source text for `span` to `sink` by slicing
/// directly from `source` via byte offsets (zero-copy,
/// lossless).
pub(crate) fn append_span_source_slice(
    span: &GraphQLSourceSpan,
    sink: &mut String,
    source: &str,
) {
    let start = span.start_inclusive.byte_offset();
    let end = span.end_exclusive.byte_offset();
    debug_assert!(
        start <= end,
        "append_span_source_slice: inverted span \
         (start {start} > end {end})",
    );
    debug_assert!(
        end <= source.len(),
        "append_span_source_slice: span byte range \
         {}..{} exceeds source length {}",
        start,
        end,
        source.len(),
    );
    sink.push_str(&source[start..end]);
}

/// Synthesize `items` into `sink`, placing `separator` between
/// consecutive items.
pub(crate) fn append_separated<T: AstNode>(
    items: &[T],
    separator: &str,
    sink: &mut String,
) {
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            sink.push_str(separator);
        }
        item.append_source(sink, None);
    }
}

/// Trait implemented by all AST node types. Provides position
/// lookup and source reconstruction.
///
/// All AST node types implement this trait via
/// `#[inherent] impl AstNode`, so the required methods
/// ([`append_source`](AstNode::append_source) and
/// [`span`](AstNode::span)) are also callable as inherent methods.
/// The provided methods, [`position`](AstNode::position) and
/// [`to_source`](AstNode::to_source), need the trait in scope:
///
/// ```
/// use coke_parser::ast::AstNode;
/// use coke_parser::ast::AstPos;
/// use coke_parser::ast::Definition;
///
/// let doc = coke_parser::parse_document("\n  query Q { a }").unwrap();
/// let Definition::Operation(op) = &doc.definitions[0] else {
///     unreachable!();
/// };
/// assert_eq!(op.position(), AstPos::new(2, 2));
/// assert_eq!(op.to_source(None), "query Q { a }");
/// ```
///
/// # Source Reconstruction Modes
///
/// - **Source-slice mode (fast, lossless):** When `source` is
///   `Some(s)`, [`append_source`](AstNode::append_source) slices
///   `&s[span.start.byte_offset..span.end.byte_offset]`. Zero
///   allocation.
///
/// - **Synthetic mode (canonical):** When `source` is `None`,
///   [`append_source`](AstNode::append_source) walks the AST and
///   emits keywords, names, values, and punctuation with standard
///   single-line spacing. The output parses back to a
///   structurally equal tree (positions aside).
pub trait AstNode {
    /// Append this node's source representation to `sink`.
    fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    );

    /// The span from this node's first token through its last.
    fn span(&self) -> &GraphQLSourceSpan;

    /// The line (1-based) and column (0-based) of this node's
    /// first token.
    fn position(&self) -> AstPos {
        self.span().start_inclusive.to_ast_pos()
    }

    /// Return this node as a source string.
    ///
    /// Convenience wrapper around
    /// [`append_source`](AstNode::append_source).
    fn to_source(
        &self,
        source: Option<&str>,
    ) -> String {
        let mut s = String::new();
        self.append_source(&mut s, source);
        s
    }
}
