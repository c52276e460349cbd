//! Decoders that turn raw string-literal text into string values.
//!
//! Quoted strings (`"..."`) go through the escape decoder. Block strings
//! (`"""..."""`) only un-escape `\"""` and are then dedented and trimmed
//! per the GraphQL `BlockStringValue()` algorithm.

use crate::GraphQLStringParsingError;
use std::borrow::Cow;

/// Decodes the raw text of a quoted string literal, including its
/// surrounding quotes.
///
/// Literal characters pass through; `\uXXXX` (exactly four hex digits) and
/// the named escapes `\" \\ \/ \b \f \n \r \t` are decoded. Content without
/// any backslash is borrowed from `raw`.
pub fn cook_quoted_string(
    raw: &str,
) -> Result<Cow<'_, str>, GraphQLStringParsingError> {
    if raw.len() < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return Err(GraphQLStringParsingError::UnterminatedString);
    }
    let content = &raw[1..raw.len() - 1];

    if memchr::memchr(b'\\', content.as_bytes()).is_none() {
        return Ok(Cow::Borrowed(content));
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('u') => result.push(cook_unicode_escape(&mut chars)?),
            Some(other) => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    format!("\\{other}"),
                ));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        }
    }

    Ok(Cow::Owned(result))
}

/// Decodes the four hex digits following `\u`.
fn cook_unicode_escape(
    chars: &mut std::str::Chars<'_>,
) -> Result<char, GraphQLStringParsingError> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            Some(c) => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                    format!("\\u{hex}{c}"),
                ));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(
                    format!("\\u{hex}"),
                ));
            },
        }
    }
    let code_point = u32::from_str_radix(&hex, 16).map_err(|_| {
        GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{hex}"))
    })?;
    // Surrogate halves are not scalar values, so `from_u32` rejects them.
    char::from_u32(code_point).ok_or_else(|| {
        GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{hex}"))
    })
}

/// Decodes the raw text of a block string literal, including its
/// surrounding triple quotes.
pub fn cook_block_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    if raw.len() < 6 || !raw.starts_with("\"\"\"") || !raw.ends_with("\"\"\"") {
        return Err(GraphQLStringParsingError::UnterminatedString);
    }
    let content = &raw[3..raw.len() - 3];

    let content: Cow<'_, str> = if content.contains("\\\"\"\"") {
        Cow::Owned(content.replace("\\\"\"\"", "\"\"\""))
    } else {
        Cow::Borrowed(content)
    };

    let lines = split_block_string_lines(&content);
    Ok(dedent_block_string_lines(&lines))
}

/// Splits block string content into lines. `\r\n`, `\r`, and `\n` each end
/// exactly one line.
pub fn split_block_string_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut remaining = content;
    while let Some(idx) = memchr::memchr2(b'\n', b'\r', remaining.as_bytes()) {
        lines.push(&remaining[..idx]);
        let terminator_len = if remaining[idx..].starts_with("\r\n") { 2 } else { 1 };
        remaining = &remaining[idx + terminator_len..];
    }
    lines.push(remaining);
    lines
}

/// Applies the block string indentation and blank-line rules to `lines`
/// and joins the survivors with `\n`.
///
/// 1. The common indent is the smallest leading space/tab run among the
///    non-blank lines after the first.
/// 2. That many characters are stripped from every line but the first.
/// 3. Leading and trailing blank lines are dropped.
pub fn dedent_block_string_lines(lines: &[&str]) -> String {
    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_graphql_blank(line))
        .map(|line| leading_whitespace_len(line))
        .min()
        .unwrap_or(0);

    let Some(first) = lines.iter().position(|line| !is_graphql_blank(line)) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|line| !is_graphql_blank(line))
        .unwrap_or(first);

    let mut result = String::new();
    for (idx, line) in lines.iter().enumerate().take(last + 1).skip(first) {
        if idx > first {
            result.push('\n');
        }
        if idx == 0 {
            result.push_str(line);
        } else {
            // Blank lines may be shorter than the common indent; they are
            // all ASCII whitespace so any byte index is a char boundary.
            result.push_str(&line[common_indent.min(line.len())..]);
        }
    }
    result
}

/// Whether `line` contains only spaces and tabs (GraphQL `WhiteSpace`).
fn is_graphql_blank(line: &str) -> bool {
    line.bytes().all(|b| b == b' ' || b == b'\t')
}

fn leading_whitespace_len(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

/// Decodes a string literal token's raw text, dispatching on whether it is
/// a block string. Borrowed input stays borrowed whenever the decoded value
/// is a slice of it.
pub fn cook_string_literal(
    raw: Cow<'_, str>,
) -> Result<Cow<'_, str>, GraphQLStringParsingError> {
    match raw {
        Cow::Borrowed(raw) => cook_str(raw),
        Cow::Owned(raw) => cook_str(&raw).map(|cooked| Cow::Owned(cooked.into_owned())),
    }
}

pub(crate) fn cook_str(raw: &str) -> Result<Cow<'_, str>, GraphQLStringParsingError> {
    if raw.starts_with("\"\"\"") {
        cook_block_string(raw).map(Cow::Owned)
    } else {
        cook_quoted_string(raw)
    }
}
