//! Loose value coercion used by `where` filters and interpolation
//!
//! Values in a `DotObject` are untyped JSON, so filters compare them the way a
//! dynamically typed host would: numbers and numeric strings meet on the
//! number line, strings compare lexicographically with each other.

use serde_json::Value;
use std::cmp::Ordering;

/// Render a value as display text.
///
/// Strings are returned raw, integral floats drop their fraction,
/// `null` becomes `"null"`, sequences are comma-joined and mappings render
/// as `"[object Object]"`.
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                n.to_string()
            } else {
                format_number(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_display_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Numeric view of a value; `NaN` when the value has no numeric reading.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] => parse_number(&to_display_string(single)),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

/// Parse a numeric string. Surrounding whitespace is ignored and a blank
/// string reads as zero.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust accepts "inf" and "nan" spellings that should stay non-numeric
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse the leading integer of a string, ignoring leading whitespace.
///
/// `"2,5"` reads as `2`; `"*,5"` has no leading integer.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let mut end = 0;
    for (i, c) in trimmed.char_indices() {
        let is_sign = i == 0 && (c == '-' || c == '+');
        if c.is_ascii_digit() || is_sign {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }

    trimmed[..end].parse::<i64>().ok()
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// `value` equals the numeric reading of `target`, or equals its text.
pub fn loose_eq(value: Option<&Value>, target: &Value) -> bool {
    match value {
        Some(Value::Number(n)) => n.as_f64() == Some(to_number(target)),
        Some(Value::String(s)) => *s == to_display_string(target),
        _ => false,
    }
}

/// Ordering between two values, `None` when they are incomparable.
///
/// Two strings compare lexicographically; anything else compares by numeric
/// reading, and a missing value or `NaN` compares with nothing.
pub fn compare(value: Option<&Value>, target: &Value) -> Option<Ordering> {
    let value = value?;
    match (value, target) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => to_number(value).partial_cmp(&to_number(target)),
    }
}
