//! Parsing raw row text into typed values.

use crate::error::ParseError;
use crate::model::{BaseKind, Value, ValueKind};
use crate::util::hex_to_bytes;

/// Parses a row's raw text against its declared kind.
///
/// Optional kinds wrap the result: `OptionalNone` ignores the text
/// entirely, `OptionalSome` parses against the base kind and wraps in
/// `(some ...)`.
pub fn parse_value(kind: ValueKind, raw: &str) -> Result<Value, ParseError> {
    match kind {
        ValueKind::OptionalNone(_) => Ok(Value::OptionalNone),
        ValueKind::OptionalSome(base) => Ok(Value::some(parse_base(base, raw)?)),
        ValueKind::Base(base) => parse_base(base, raw),
    }
}

fn parse_base(base: BaseKind, raw: &str) -> Result<Value, ParseError> {
    match base {
        BaseKind::UInt => parse_uint(raw).map(Value::UInt),
        BaseKind::Int => parse_int(raw).map(Value::Int),
        BaseKind::Bool => Ok(Value::Bool(raw.trim().eq_ignore_ascii_case("true"))),
        BaseKind::Principal => Ok(Value::Principal(raw.trim().parse()?)),
        BaseKind::StringAscii => {
            if !raw.is_ascii() {
                return Err(ParseError::NotAscii);
            }
            Ok(Value::StringAscii(raw.to_owned()))
        }
        BaseKind::StringUtf8 => Ok(Value::StringUtf8(raw.to_owned())),
        BaseKind::Buffer => Ok(Value::Buffer(hex_to_bytes(raw.trim())?)),
    }
}

/// Empty text means zero; a sign-free base-10 literal otherwise.
fn parse_uint(raw: &str) -> Result<u128, ParseError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(0);
    }
    if text.starts_with('-') {
        // Distinguish "typed a minus sign" from garbage
        if text[1..].bytes().all(|b| b.is_ascii_digit()) && text.len() > 1 {
            return Err(ParseError::UintNegative {
                input: text.to_owned(),
            });
        }
        return Err(ParseError::IntLiteral {
            input: text.to_owned(),
        });
    }
    text.parse::<u128>().map_err(|_| classify_int_error(text))
}

fn parse_int(raw: &str) -> Result<i128, ParseError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse::<i128>().map_err(|_| classify_int_error(text))
}

fn classify_int_error(text: &str) -> ParseError {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        ParseError::IntOutOfRange {
            input: text.to_owned(),
        }
    } else {
        ParseError::IntLiteral {
            input: text.to_owned(),
        }
    }
}
