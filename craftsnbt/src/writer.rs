//! Deterministic SNBT serialization, keyed by syntax profile.

use craftnbt::Value;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::Syntax;

// Keys that can go out bare under the modern profiles.
static NO_QUOTE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9._+-]+$").unwrap());

pub(crate) fn to_string(value: &Value, syntax: Syntax) -> String {
    let mut out = String::new();
    write_value(value, &mut out, syntax);
    out
}

fn write_value(value: &Value, out: &mut String, syntax: Syntax) {
    match value {
        Value::Byte(v) => {
            out.push_str(&v.to_string());
            out.push('b');
        }
        Value::Short(v) => {
            out.push_str(&v.to_string());
            out.push('s');
        }
        Value::Int(v) => out.push_str(&v.to_string()),
        Value::Long(v) => {
            out.push_str(&v.to_string());
            out.push('L');
        }
        Value::Float(v) => {
            out.push_str(&float_text(*v as f64, v.to_string()));
            out.push('f');
        }
        Value::Double(v) => {
            out.push_str(&float_text(*v, v.to_string()));
            out.push('d');
        }
        Value::String(s) => out.push_str(&quote(s, syntax)),
        Value::ByteArray(a) => {
            out.push_str("[B;");
            for (i, v) in a.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&v.to_string());
                out.push('b');
            }
            out.push(']');
        }
        Value::IntArray(a) => {
            out.push_str("[I;");
            for (i, v) in a.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&v.to_string());
            }
            out.push(']');
        }
        Value::LongArray(a) => {
            out.push_str("[L;");
            for (i, v) in a.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&v.to_string());
                out.push('L');
            }
            out.push(']');
        }
        Value::List(list) => {
            out.push('[');
            for (i, element) in list.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(element, out, syntax);
            }
            out.push(']');
        }
        Value::Compound(compound) => {
            out.push('{');
            for (i, (key, element)) in compound.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_key(key, out, syntax);
                out.push(':');
                write_value(element, out, syntax);
            }
            out.push('}');
        }
    }
}

fn write_key(key: &str, out: &mut String, syntax: Syntax) {
    // 1.7/1.8 never quoted keys.
    if syntax.legacy_parser() {
        out.push_str(key);
        return;
    }
    if NO_QUOTE_PATTERN.is_match(key) {
        out.push_str(key);
    } else {
        out.push_str(&quote(key, syntax));
    }
}

/// Quote and escape a string. `"` is the default quote; `'` takes over
/// when the profile permits it and the text contains `"` but no `'`, which
/// saves the escaping.
fn quote(s: &str, syntax: Syntax) -> String {
    let quote = if syntax.allow_single_quotes() && s.contains('"') && !s.contains('\'') {
        '\''
    } else {
        '"'
    };

    let mut output = String::with_capacity(s.len() + 2);
    output.push(quote);
    for c in s.chars() {
        if c == '\\' || c == quote {
            output.push('\\');
        }
        output.push(c);
    }
    output.push(quote);
    output
}

/// Finite whole floats keep a trailing `.0` so the suffix rules re-parse
/// them as floating point rather than as a malformed integer token.
fn float_text(magnitude: f64, formatted: String) -> String {
    if magnitude.is_finite() && magnitude.fract() == 0.0 && magnitude.abs() < 1e16 {
        format!("{:.1}", magnitude)
    } else {
        formatted
    }
}
