//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str` input.
//!
//! Token values borrow directly from the source string using
//! `Cow::Borrowed`, so names, numbers, and strings are never copied while
//! lexing.
//!
//! Whitespace, commas, and `#` comments are ignored input: they separate
//! tokens but never reach the parser. Invalid input produces
//! [`GraphQLTokenKind::Error`] tokens carrying a message and notes; the
//! parser stops at the first one it reaches.
//!
//! # Usage
//!
//! ```rust
//! use coke_parser::token_source::StrGraphQLTokenSource;
//!
//! let source = "{ name }";
//! let lexer = StrGraphQLTokenSource::new(source);
//! for token in lexer {
//!     println!("{:?}", token.kind);
//! }
//! // Output:
//! // CurlyBraceOpen
//! // Name(Borrowed("name"))
//! // CurlyBraceClose
//! // Eof
//! ```

use crate::smallvec;
use crate::token::scan_number_literal;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::NumberLiteralError;
use crate::token::NumberLiteralKind;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use std::path::Path;

const INT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-Int-Value";
const FLOAT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-Float-Value";
const STRING_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-String-Value";

/// A lexer over `&str` producing [`GraphQLToken`]s.
///
/// The `'src` lifetime ties token values to the source string. See the
/// module documentation for details.
pub struct StrGraphQLTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    ///
    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current character column (0-based). "🎉" (4 bytes) advances this by 1.
    curr_col_utf8: usize,

    /// Current UTF-16 code unit column (0-based). "🎉" advances this by 2.
    curr_col_utf16: usize,

    /// Whether the previous character was `\r`, so that a following `\n`
    /// does not start a second line.
    last_char_was_cr: bool,

    /// Whether the EOF token has been emitted.
    finished: bool,

    /// Optional file path, copied into every token span.
    file_path: Option<&'src Path>,
}

impl<'src> StrGraphQLTokenSource<'src> {
    /// Creates a new token source from a string slice.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use coke_parser::token_source::StrGraphQLTokenSource;
    /// let lexer = StrGraphQLTokenSource::new("{ name }");
    /// ```
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            finished: false,
            file_path: None,
        }
    }

    /// Creates a new token source whose spans carry `path`.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new(source)
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            Some(self.curr_col_utf16),
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peeks at the nth character ahead without consuming.
    ///
    /// `peek_char_nth(0)` is equivalent to `peek_char()`.
    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r`, and `\r\n` each end exactly one line.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                // Second half of `\r\n`; the line was already counted.
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Advances past `text`, which must be the next bytes of input and must
    /// not contain a line terminator.
    fn consume_same_line(&mut self, text: &str) {
        debug_assert!(self.remaining().starts_with(text));
        self.curr_byte_offset += text.len();
        if text.is_ascii() {
            self.curr_col_utf8 += text.len();
            self.curr_col_utf16 += text.len();
        } else {
            self.curr_col_utf8 += text.chars().count();
            self.curr_col_utf16 += text.encode_utf16().count();
        }
        if !text.is_empty() {
            self.last_char_was_cr = false;
        }
    }

    /// Creates a `GraphQLSourceSpan` from a start position to the current
    /// position.
    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = self.curr_position();
        if let Some(path) = self.file_path {
            GraphQLSourceSpan::with_file(start, end, path.to_path_buf())
        } else {
            GraphQLSourceSpan::new(start, end)
        }
    }

    fn make_error(
        &self,
        start: SourcePosition,
        message: impl Into<String>,
        error_notes: GraphQLErrorNotes,
    ) -> GraphQLToken<'src> {
        GraphQLToken::new(
            GraphQLTokenKind::error(message, error_notes),
            self.make_span(start),
        )
    }

    /// Consumes a single character and returns a token of `kind` covering it.
    fn lex_punctuator(
        &mut self,
        start: SourcePosition,
        kind: GraphQLTokenKind<'src>,
    ) -> GraphQLToken<'src> {
        self.consume();
        GraphQLToken::new(kind, self.make_span(start))
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        self.skip_ignored();

        let start = self.curr_position();

        match self.peek_char() {
            None => GraphQLToken::new(GraphQLTokenKind::Eof, self.make_span(start)),

            Some('!') => self.lex_punctuator(start, GraphQLTokenKind::Bang),
            Some('$') => self.lex_punctuator(start, GraphQLTokenKind::Dollar),
            Some('(') => self.lex_punctuator(start, GraphQLTokenKind::ParenOpen),
            Some(')') => self.lex_punctuator(start, GraphQLTokenKind::ParenClose),
            Some(':') => self.lex_punctuator(start, GraphQLTokenKind::Colon),
            Some('=') => self.lex_punctuator(start, GraphQLTokenKind::Equals),
            Some('@') => self.lex_punctuator(start, GraphQLTokenKind::At),
            Some('[') => self.lex_punctuator(start, GraphQLTokenKind::SquareBracketOpen),
            Some(']') => self.lex_punctuator(start, GraphQLTokenKind::SquareBracketClose),
            Some('{') => self.lex_punctuator(start, GraphQLTokenKind::CurlyBraceOpen),
            Some('}') => self.lex_punctuator(start, GraphQLTokenKind::CurlyBraceClose),

            Some('.') => self.lex_dot_or_ellipsis(start),

            Some('"') => self.lex_string(start),

            Some(c) if is_name_start(c) => self.lex_name(start),

            Some(c) if c == '-' || c.is_ascii_digit() => self.lex_number(start),

            Some(_) => self.lex_invalid_character(start),
        }
    }

    // =========================================================================
    // Ignored input
    // =========================================================================

    /// Skips whitespace, commas, and comments.
    ///
    /// Ignored runs are `[ \t\n\r,]+` and `#` up to (not including) the next
    /// line terminator. U+FEFF is not ignored: it is not a valid source
    /// character outside of string literals.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | ',' | '\n' | '\r' => {
                    self.consume();
                },
                '#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    fn skip_comment(&mut self) {
        let remaining = self.remaining();
        let comment_len = memchr::memchr2(b'\n', b'\r', remaining.as_bytes())
            .unwrap_or(remaining.len());
        self.consume_same_line(&remaining[..comment_len]);
    }

    // =========================================================================
    // Dot / Ellipsis lexing
    // =========================================================================

    /// Lexes dots, producing either an Ellipsis token or an error.
    ///
    /// - `...` (adjacent) → `Ellipsis`
    /// - `.` alone → Error (no hint; could be many things like `Foo.Bar`)
    /// - `..` (adjacent) → Error with help to add a third dot
    /// - `. .`, `.. .`, `. ..`, `. . .` on one line → Error with help about
    ///   spacing
    /// - Dots on different lines → Separate errors
    fn lex_dot_or_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let first_dot_line = self.curr_line;
        self.consume();
        self.skip_spaces_same_line();

        if self.peek_char() != Some('.') || self.curr_line != first_dot_line {
            return self.make_error(start, "Unexpected `.`", smallvec![]);
        }

        let second_dot_offset = self.curr_byte_offset;
        let first_two_adjacent = second_dot_offset == start.byte_offset() + 1;
        self.consume();
        self.skip_spaces_same_line();

        let spacing_help = || {
            GraphQLErrorNote::help(
                "These dots may have been intended to form a `...` spread \
                 operator. Try removing the extra spacing between the dots.",
            )
        };

        if self.peek_char() != Some('.') || self.curr_line != first_dot_line {
            return if first_two_adjacent {
                self.make_error(
                    start,
                    "Unexpected `..` (use `...` for spread operator)",
                    smallvec![GraphQLErrorNote::help(
                        "Add one more `.` to form the spread operator `...`"
                    )],
                )
            } else {
                self.make_error(
                    start,
                    "Unexpected `. .` (use `...` for spread operator)",
                    smallvec![spacing_help()],
                )
            };
        }

        let second_third_adjacent = self.curr_byte_offset == second_dot_offset + 1;
        self.consume();

        match (first_two_adjacent, second_third_adjacent) {
            (true, true) => {
                GraphQLToken::new(GraphQLTokenKind::Ellipsis, self.make_span(start))
            },
            (true, false) => self.make_error(start, "Unexpected `.. .`", smallvec![spacing_help()]),
            (false, true) => self.make_error(start, "Unexpected `. ..`", smallvec![spacing_help()]),
            (false, false) => {
                self.make_error(start, "Unexpected `. . .`", smallvec![spacing_help()])
            },
        }
    }

    fn skip_spaces_same_line(&mut self) {
        while matches!(self.peek_char(), Some(' ' | '\t')) {
            self.consume();
        }
    }

    // =========================================================================
    // Name lexing
    // =========================================================================

    /// Lexes a name matching `[_A-Za-z][_0-9A-Za-z]*`.
    ///
    /// `true`, `false`, and `null` are emitted as distinct token kinds.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let remaining = self.remaining();
        let name_len = remaining
            .bytes()
            .position(|b| !is_name_continue(b as char))
            .unwrap_or(remaining.len());
        let name = &remaining[..name_len];
        self.consume_same_line(name);

        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::name_borrowed(name),
        };

        GraphQLToken::new(kind, self.make_span(start))
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// The longest numeric literal at the current position wins, so
    /// `123.5e2` is one `FloatValue` rather than an `IntValue` followed by
    /// more input.
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let remaining = self.remaining();

        match scan_number_literal(remaining) {
            Ok((len, kind)) => {
                let text = &remaining[..len];
                self.consume_same_line(text);
                let kind = match kind {
                    NumberLiteralKind::Int => GraphQLTokenKind::int_value_borrowed(text),
                    NumberLiteralKind::Float => GraphQLTokenKind::float_value_borrowed(text),
                };
                GraphQLToken::new(kind, self.make_span(start))
            },

            Err(NumberLiteralError::MissingDigits { len }) => {
                self.consume_same_line(&remaining[..len]);
                self.make_error(start, "Unexpected `-`", smallvec![])
            },

            Err(NumberLiteralError::LeadingZero { len }) => {
                let text = &remaining[..len];
                self.consume_same_line(text);
                self.make_error(
                    start,
                    format!("Invalid number: leading zeros are not allowed: `{text}`"),
                    smallvec![GraphQLErrorNote::spec(INT_VALUE_SPEC_URL)],
                )
            },

            Err(NumberLiteralError::MissingExponentDigits { len }) => {
                let text = &remaining[..len];
                self.consume_same_line(text);
                self.make_error(
                    start,
                    format!("Invalid number: exponent must have at least one digit: `{text}`"),
                    smallvec![GraphQLErrorNote::spec(FLOAT_VALUE_SPEC_URL)],
                )
            },
        }
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a string literal (single-line or block string).
    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        let str_start = self.curr_byte_offset;
        self.consume(); // opening "

        loop {
            let char_start = self.curr_position();
            match self.peek_char() {
                None => {
                    return self.make_error(
                        start.clone(),
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "String started here",
                                GraphQLSourceSpan::new(start.clone(), start),
                            ),
                            GraphQLErrorNote::help("Add closing `\"`"),
                        ],
                    );
                },
                Some('\n') | Some('\r') => {
                    return self.make_error(
                        start,
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general(
                                "Single-line strings cannot contain unescaped newlines"
                            ),
                            GraphQLErrorNote::help(
                                "Use a block string (triple quotes) for multi-line \
                                 strings, or escape the newline with `\\n`"
                            ),
                        ],
                    );
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    if let Err(error_token) = self.lex_escape_sequence(char_start) {
                        return error_token;
                    }
                },
                Some(ch) if is_string_character(ch) => {
                    self.consume();
                },
                Some(ch) => {
                    self.consume();
                    return self.make_error(
                        char_start,
                        format!("Invalid character {} in string literal", describe_char(ch)),
                        smallvec![GraphQLErrorNote::spec(STRING_VALUE_SPEC_URL)],
                    );
                },
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        GraphQLToken::new(
            GraphQLTokenKind::string_value_borrowed(string_text),
            self.make_span(start),
        )
    }

    /// Consumes one escape sequence starting at the current `\`.
    ///
    /// Valid escapes are `\" \\ \/ \b \f \n \r \t` and `\u` followed by
    /// exactly four hex digits naming a non-surrogate code point. On error the
    /// returned token spans the malformed escape.
    fn lex_escape_sequence(&mut self, start: SourcePosition) -> Result<(), GraphQLToken<'src>> {
        self.consume(); // backslash

        match self.peek_char() {
            Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {
                self.consume();
                Ok(())
            },
            Some('u') => {
                self.consume();
                let hex: String = (0..4)
                    .map_while(|n| self.peek_char_nth(n).filter(char::is_ascii_hexdigit))
                    .collect();
                self.consume_same_line(&hex);
                let code_point = if hex.len() == 4 {
                    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
                } else {
                    None
                };
                match code_point {
                    Some(_) => Ok(()),
                    None => Err(self.make_error(
                        start,
                        format!("Invalid unicode escape sequence `\\u{hex}`"),
                        smallvec![GraphQLErrorNote::help(
                            "`\\u` must be followed by exactly four hexadecimal \
                             digits naming a non-surrogate code point"
                        )],
                    )),
                }
            },
            Some(ch) if ch != '\n' && ch != '\r' => {
                self.consume();
                Err(self.make_error(
                    start,
                    format!("Invalid escape sequence `\\{ch}`"),
                    smallvec![GraphQLErrorNote::help(
                        "Valid escape sequences are `\\\"`, `\\\\`, `\\/`, `\\b`, \
                         `\\f`, `\\n`, `\\r`, `\\t`, and `\\uXXXX`"
                    )],
                ))
            },
            _ => Err(self.make_error(
                start,
                "Invalid escape sequence `\\`",
                smallvec![GraphQLErrorNote::spec(STRING_VALUE_SPEC_URL)],
            )),
        }
    }

    /// Lexes a block string literal. `\"""` does not terminate it.
    fn lex_block_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let str_start = self.curr_byte_offset;
        self.consume_same_line("\"\"\"");

        loop {
            let remaining = self.remaining();
            if remaining.starts_with("\"\"\"") {
                self.consume_same_line("\"\"\"");
                break;
            }
            if remaining.starts_with("\\\"\"\"") {
                self.consume_same_line("\\\"\"\"");
                continue;
            }

            let char_start = self.curr_position();
            match self.consume() {
                None => {
                    return self.make_error(
                        start.clone(),
                        "Unterminated block string",
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "Block string started here",
                                GraphQLSourceSpan::new(start.clone(), start),
                            ),
                            GraphQLErrorNote::help("Add closing `\"\"\"`"),
                        ],
                    );
                },
                Some('\t' | '\n' | '\r') => {},
                Some(ch) if is_string_character(ch) => {},
                Some(ch) => {
                    return self.make_error(
                        char_start,
                        format!("Invalid character {} in block string", describe_char(ch)),
                        smallvec![GraphQLErrorNote::spec(STRING_VALUE_SPEC_URL)],
                    );
                },
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        GraphQLToken::new(
            GraphQLTokenKind::string_value_borrowed(string_text),
            self.make_span(start),
        )
    }

    // =========================================================================
    // Invalid character handling
    // =========================================================================

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let Some(ch) = self.consume() else {
            return GraphQLToken::new(GraphQLTokenKind::Eof, self.make_span(start));
        };

        let mut error_notes = GraphQLErrorNotes::new();
        if ch == '\u{FEFF}' {
            error_notes.push(GraphQLErrorNote::help(
                "Byte order marks are not valid GraphQL source characters; \
                 remove it from the document",
            ));
        }

        self.make_error(
            start,
            format!("Unexpected character {}", describe_char(ch)),
            error_notes,
        )
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();

        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }

        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Whether `ch` may appear unescaped in a string literal: U+0020..=U+FFFF,
/// excluding the byte order mark. Quotes and backslashes are handled by the
/// caller before this check.
fn is_string_character(ch: char) -> bool {
    matches!(ch, '\u{0020}'..='\u{FFFF}') && ch != '\u{FEFF}'
}

/// Returns a human-readable description of a character for error messages.
///
/// Printable characters are shown in backticks. Invisible and control
/// characters also get their code point and, when known, their name.
fn describe_char(ch: char) -> String {
    match unicode_char_name(ch) {
        Some(name) => format!("`{}` (U+{:04X}: {name})", ch.escape_debug(), ch as u32),
        None if ch.is_control() || (ch.is_whitespace() && ch != ' ') => {
            format!("`{}` (U+{:04X})", ch.escape_debug(), ch as u32)
        },
        None => format!("`{ch}`"),
    }
}

/// Names of invisible characters commonly pasted into documents by mistake.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0007}' => Some("BELL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{0009}' => Some("HORIZONTAL TAB"),
        '\u{000A}' => Some("LINE FEED"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{000D}' => Some("CARRIAGE RETURN"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{007F}' => Some("DELETE"),
        '\u{0085}' => Some("NEXT LINE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{00AD}' => Some("SOFT HYPHEN"),
        '\u{2000}'..='\u{200A}' => Some("TYPOGRAPHIC SPACE"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{200E}' => Some("LEFT-TO-RIGHT MARK"),
        '\u{200F}' => Some("RIGHT-TO-LEFT MARK"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{202A}'..='\u{202E}' => Some("BIDIRECTIONAL FORMATTING"),
        '\u{202F}' => Some("NARROW NO-BREAK SPACE"),
        '\u{2060}' => Some("WORD JOINER"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        '\u{FEFF}' => Some("BYTE ORDER MARK"),
        '\u{FFFE}' | '\u{FFFF}' => Some("NONCHARACTER"),
        _ => None,
    }
}
