use std::borrow::Cow;
use std::fmt::Write;

use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A GraphQL string value.
///
/// Per the
/// [String Value](https://spec.graphql.org/October2021/#sec-String-Value)
/// section of the GraphQL specification, string values may be quoted strings or block
/// strings. `value` holds the decoded string after escape-sequence
/// resolution and block-string indentation stripping. It borrows from
/// the source when no transformation was needed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StringValue<'src> {
    /// Whether this string was written as a block string
    /// (`"""..."""`) rather than a quoted string (`"..."`).
    pub is_block: bool,
    pub span: GraphQLSourceSpan,
    pub value: Cow<'src, str>,
}

#[inherent]
impl AstNode for StringValue<'_> {
    /// In synthetic mode the value is always printed as a quoted string.
    /// Characters outside the Basic Multilingual Plane are written
    /// literally since `\u` escapes cannot express them.
    pub fn append_source(
        &self,
        sink: &mut String,
        source: Option<&str>,
    ) {
        let Some(src) = source else {
            append_quoted_string(&self.value, sink);
            return;
        };
        append_span_source_slice(&self.span, sink, src);
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }
}

fn append_quoted_string(value: &str, sink: &mut String) {
    sink.push('"');
    for ch in value.chars() {
        match ch {
            '"' => sink.push_str("\\\""),
            '\\' => sink.push_str("\\\\"),
            '\u{0008}' => sink.push_str("\\b"),
            '\u{000C}' => sink.push_str("\\f"),
            '\n' => sink.push_str("\\n"),
            '\r' => sink.push_str("\\r"),
            '\t' => sink.push_str("\\t"),
            '\u{0000}'..='\u{001F}' | '\u{FEFF}' => {
                let _ = write!(sink, "\\u{:04X}", ch as u32);
            },
            _ => sink.push(ch),
        }
    }
    sink.push('"');
}
