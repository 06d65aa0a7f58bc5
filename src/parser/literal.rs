use std::num::ParseIntError;

use crate::value::Value;

/// Convert integer literal text into `Int` or `Int64`.
///
/// Accepts an optional `-`, an optional base prefix (`0x`, `0b`, `0o`/`0q`, any
/// case) and an optional `L`/`l` suffix. The result is `Int64` when the suffix
/// is present or the value does not fit in `i32`, and `Int` otherwise.
pub fn parse_integer_literal(literal: &str) -> Result<Value, ParseIntError> {
    let text = literal.trim();

    let (text, forced_64) = match text.strip_suffix(['L', 'l']) {
        Some(rest) => (rest, true),
        None => (text, false),
    };

    let (negative, magnitude) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (radix, digits) = split_radix(magnitude);
    let value = if negative {
        i64::from_str_radix(&format!("-{}", digits), radix)?
    } else {
        i64::from_str_radix(digits, radix)?
    };

    match i32::try_from(value) {
        Ok(small) if !forced_64 => Ok(Value::Int(small)),
        _ => Ok(Value::Int64(value)),
    }
}

fn split_radix(text: &str) -> (u32, &str) {
    let lower = text.get(..2).map(|p| p.to_ascii_lowercase());
    match lower.as_deref() {
        Some("0x") => (16, &text[2..]),
        Some("0b") => (2, &text[2..]),
        Some("0o") | Some("0q") => (8, &text[2..]),
        _ => (10, text),
    }
}
