//! Canonical JSON serializer.
//!
//! Walks a [`Value`] tree and emits compact JSON: no whitespace around `,`
//! or `:`, minimal escaping (`"`, `\`, and control characters only —
//! non-ASCII text is written as literal UTF-8), exact decimal digits for
//! integers, and shortest round-tripping digits for floats. Output goes to
//! any [`std::io::Write`] endpoint; an in-memory `String` is the degenerate
//! case.

use std::io::Write;

use crate::error::{JsonError, Result};
use crate::value::Value;
use crate::MAX_DEPTH;

/// Serialize a value to a compact JSON string.
pub fn to_string(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    to_writer(&mut buf, value)?;
    String::from_utf8(buf)
        .map_err(|e| JsonError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Serialize a value to a writable endpoint.
///
/// The endpoint is used as-is: the serializer never closes or flushes it,
/// and on failure the bytes already written are unspecified.
pub fn to_writer<W: Write>(mut writer: W, value: &Value) -> Result<()> {
    write_value(&mut writer, value, 0)
}

fn write_value<W: Write>(w: &mut W, value: &Value, depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(JsonError::DepthLimit(MAX_DEPTH));
    }
    match value {
        Value::Null => w.write_all(b"null")?,
        Value::Bool(true) => w.write_all(b"true")?,
        Value::Bool(false) => w.write_all(b"false")?,
        Value::Int(i) => write!(w, "{i}")?,
        Value::Float(f) => w.write_all(format_float(*f)?.as_bytes())?,
        Value::String(s) => write_string(w, s)?,
        Value::Array(items) => {
            w.write_all(b"[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    w.write_all(b",")?;
                }
                write_value(w, item, depth + 1)?;
            }
            w.write_all(b"]")?;
        }
        Value::Object(members) => {
            w.write_all(b"{")?;
            for (i, (key, member)) in members.iter().enumerate() {
                if i > 0 {
                    w.write_all(b",")?;
                }
                write_string(w, key)?;
                w.write_all(b":")?;
                write_value(w, member, depth + 1)?;
            }
            w.write_all(b"}")?;
        }
    }
    Ok(())
}

/// Emit a string literal with minimal escaping: `"`, `\`, and control
/// characters below 0x20 (short forms where they exist, `\u00XX`
/// otherwise). Everything else, non-ASCII included, passes through as
/// literal UTF-8.
fn write_string<W: Write>(w: &mut W, s: &str) -> Result<()> {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    w.write_all(out.as_bytes())?;
    Ok(())
}

/// Format a float with the shortest decimal digits that round-trip to the
/// same IEEE-754 double, keeping a fractional marker so the text re-parses
/// as a float rather than an integer.
///
/// NaN, the infinities, and negative zero have no JSON representation and
/// are refused.
pub(crate) fn format_float(f: f64) -> Result<String> {
    if !f.is_finite() || (f == 0.0 && f.is_sign_negative()) {
        return Err(JsonError::InvalidFloat(f));
    }
    let mut s = format!("{f}");
    if !s.contains(['.', 'e', 'E']) {
        s.push_str(".0");
    }
    Ok(s)
}
