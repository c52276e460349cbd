//! Recognizer for GraphQL numeric literals.
//!
//! `IntValue` follows JSON's integer grammar: `-?(0|[1-9][0-9]*)`. A
//! `FloatValue` is an integer part followed by a fractional part
//! (`.[0-9]+`), an exponent part (`[eE][+-]?[0-9]+`), or both. Text that
//! matches the integer grammar alone is never a float.

/// Which numeric token a literal forms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumberLiteralKind {
    Int,
    Float,
}

/// Why a numeric literal could not be scanned.
///
/// Each variant carries the byte length of the malformed prefix so the lexer
/// can cover it with its error span.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumberLiteralError {
    /// A `-` not followed by a digit.
    MissingDigits { len: usize },

    /// `0` followed by another digit, e.g. `01` or `-007`.
    LeadingZero { len: usize },

    /// An `e`/`E` (and optional sign) with no digit after it.
    MissingExponentDigits { len: usize },
}

/// Scans the longest numeric literal at the start of `text`.
///
/// Returns the byte length of the literal and its kind. A `.` only begins a
/// fractional part when a digit follows it, so `1...` scans as the integer
/// `1` followed by whatever the caller makes of the dots.
pub fn scan_number_literal(
    text: &str,
) -> Result<(usize, NumberLiteralKind), NumberLiteralError> {
    let bytes = text.as_bytes();
    let mut idx = 0;

    if bytes.first() == Some(&b'-') {
        idx += 1;
    }

    match bytes.get(idx) {
        Some(b'0') => {
            idx += 1;
            if bytes.get(idx).is_some_and(u8::is_ascii_digit) {
                idx += count_digits(&bytes[idx..]);
                return Err(NumberLiteralError::LeadingZero { len: idx });
            }
        },
        Some(b'1'..=b'9') => {
            idx += count_digits(&bytes[idx..]);
        },
        _ => return Err(NumberLiteralError::MissingDigits { len: idx }),
    }

    let mut kind = NumberLiteralKind::Int;

    if bytes.get(idx) == Some(&b'.')
        && bytes.get(idx + 1).is_some_and(u8::is_ascii_digit)
    {
        kind = NumberLiteralKind::Float;
        idx += 1;
        idx += count_digits(&bytes[idx..]);
    }

    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        kind = NumberLiteralKind::Float;
        idx += 1;
        if matches!(bytes.get(idx), Some(b'+' | b'-')) {
            idx += 1;
        }
        let exponent_digits = count_digits(&bytes[idx..]);
        if exponent_digits == 0 {
            return Err(NumberLiteralError::MissingExponentDigits { len: idx });
        }
        idx += exponent_digits;
    }

    Ok((idx, kind))
}

/// Classifies `text` as a whole. Returns `None` unless the entire string is
/// one numeric literal.
pub fn classify_number_literal(text: &str) -> Option<NumberLiteralKind> {
    match scan_number_literal(text) {
        Ok((len, kind)) if len == text.len() => Some(kind),
        _ => None,
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
