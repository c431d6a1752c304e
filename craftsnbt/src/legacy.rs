//! The string-splitting parser for 1.7/1.8 era SNBT.
//!
//! Pre-1.13 Minecraft never had a real SNBT grammar; commands carried
//! whatever the Notchian splitter happened to accept. This parser keeps
//! those quirks: keys are raw text up to the first colon, list entries may
//! be prefixed with an `index:` that gets thrown away, and a list element
//! that fails to parse is dropped rather than reported. It is deliberately
//! a different machine from [`crate::modern`]; merging the two would lose
//! the old behaviour.

use craftnbt::{Compound, IntArray, List, Value};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SnbtError};

static DOUBLE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?[0-9]*\.?[0-9]+[dD]$").unwrap());
static FLOAT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?[0-9]*\.?[0-9]+[fF]$").unwrap());
static BYTE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?[0-9]+[bB]$").unwrap());
static LONG_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?[0-9]+[lL]$").unwrap());
static SHORT_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?[0-9]+[sS]$").unwrap());
static BARE_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());
static BARE_DOUBLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?[0-9]*\.?[0-9]+$").unwrap());

// Bracketed content that looks like numbers is an int array rather than a
// list. An optional B;/I;/L; marker covers the modern spelling, which the
// old splitter is still expected to swallow.
static INT_ARRAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(?:[BIL];)?[-\d|,\s]+\]$").unwrap());

pub(crate) struct LegacyParser {
    content: String,
}

impl LegacyParser {
    pub fn new(content: &str) -> Self {
        LegacyParser {
            content: content.trim().to_owned(),
        }
    }

    pub fn parse(self) -> Result<Value> {
        if self.content.starts_with('{') {
            return self.parse_compound(&self.content);
        }
        // Legacy input usually has a compound root; anything else goes
        // through primitive classification.
        Ok(self.parse_primitive(&self.content))
    }

    fn parse_compound(&self, s: &str) -> Result<Value> {
        let s = s.trim();
        if !s.starts_with('{') || !s.ends_with('}') {
            return Err(SnbtError::bare(format!("Invalid compound: {}", s)));
        }

        let mut s = &s[1..s.len() - 1];
        let mut compound = Compound::new();

        while !s.is_empty() {
            let pair = self.find_pair(s, false)?;
            if pair.is_empty() {
                break;
            }

            let name = find_key(pair);
            let value = find_value(pair);
            compound.put(name, self.parse_any(value)?);

            if s.len() < pair.len() + 1 {
                break;
            }
            s = &s[pair.len() + 1..];
        }
        Ok(Value::Compound(compound))
    }

    fn parse_any(&self, s: &str) -> Result<Value> {
        let s = s.trim();
        if s.starts_with('{') {
            return self.parse_compound(s);
        }
        if s.starts_with('[') && !INT_ARRAY_SHAPE.is_match(s) {
            return self.parse_list(s);
        }
        Ok(self.parse_primitive(s))
    }

    fn parse_list(&self, s: &str) -> Result<Value> {
        if !s.starts_with('[') || !s.ends_with(']') {
            return Err(SnbtError::bare(format!("Invalid list: {}", s)));
        }

        let mut s = &s[1..s.len() - 1];
        let mut items = Vec::new();

        while !s.is_empty() {
            let pair = self.find_pair(s, true)?;
            if pair.is_empty() {
                break;
            }

            // Legacy lists often had index:value entries, the index is
            // discarded. A colon inside a nested compound or list is not
            // an index.
            let trimmed = pair.trim_start();
            let value_str = if pair.contains(':')
                && !trimmed.starts_with('{')
                && !trimmed.starts_with('[')
            {
                find_value(pair)
            } else {
                pair
            };

            // A malformed element is silently dropped, as the old parsers
            // did.
            if let Ok(value) = self.parse_any(value_str) {
                items.push(value);
            }

            if s.len() < pair.len() + 1 {
                break;
            }
            s = &s[pair.len() + 1..];
        }

        List::from_values(items)
            .map(Value::List)
            .map_err(|_| SnbtError::bare_mismatch("All list elements must share one tag type"))
    }

    fn parse_primitive(&self, value: &str) -> Value {
        if let Some(parsed) = try_numeric(value) {
            return parsed;
        }

        let mut text = value;
        if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
            text = &text[1..text.len() - 1];
            return Value::String(text.replace("\\\"", "\""));
        }
        Value::String(text.to_owned())
    }

    /// Split off the leading `key:value` (or bare list element) of `s`,
    /// scanning for the first comma that sits outside quotes and brackets.
    fn find_pair<'a>(&self, s: &'a str, is_list: bool) -> Result<&'a str> {
        let bytes = s.as_bytes();
        let sep = s.find(':');
        if sep.is_none() && !is_list {
            return Err(SnbtError::bare("No separator found"));
        }

        // Only structural ascii is inspected, so walking bytes is safe in
        // the middle of multibyte text.
        let mut i = if is_list { 0 } else { sep.map_or(0, |p| p + 1) };
        let mut quoted = false;
        let mut stack: Vec<u8> = Vec::new();

        while i < bytes.len() {
            let c = bytes[i];
            if c == b'"' {
                if i == 0 || bytes[i - 1] != b'\\' {
                    quoted = !quoted;
                }
            } else if !quoted {
                match c {
                    b'{' | b'[' => stack.push(c),
                    b'}' => {
                        if stack.pop() != Some(b'{') {
                            return Err(SnbtError::bare("Unbalanced {}"));
                        }
                    }
                    b']' => {
                        if stack.pop() != Some(b'[') {
                            return Err(SnbtError::bare("Unbalanced []"));
                        }
                    }
                    b',' if stack.is_empty() => return Ok(&s[..i]),
                    _ => {}
                }
            }
            i += 1;
        }
        Ok(&s[..i])
    }
}

fn find_key(s: &str) -> &str {
    match s.find(':') {
        Some(idx) => s[..idx].trim(),
        None => "",
    }
}

fn find_value(s: &str) -> &str {
    match s.find(':') {
        Some(idx) => s[idx + 1..].trim(),
        None => s.trim(),
    }
}

/// The legacy primitive rules: a trailing suffix character picks the
/// width, bare digits are an int, digits with a dot are a double, and a
/// bracket full of integers is an int array. A numeric-looking token that
/// fails to parse (overflow) drops through to a string.
fn try_numeric(value: &str) -> Option<Value> {
    if DOUBLE_SUFFIX.is_match(value) {
        return value[..value.len() - 1].parse().ok().map(Value::Double);
    }
    if FLOAT_SUFFIX.is_match(value) {
        return value[..value.len() - 1].parse().ok().map(Value::Float);
    }
    if BYTE_SUFFIX.is_match(value) {
        return value[..value.len() - 1].parse().ok().map(Value::Byte);
    }
    if LONG_SUFFIX.is_match(value) {
        return value[..value.len() - 1].parse().ok().map(Value::Long);
    }
    if SHORT_SUFFIX.is_match(value) {
        return value[..value.len() - 1].parse().ok().map(Value::Short);
    }
    if BARE_INT.is_match(value) {
        return value.parse().ok().map(Value::Int);
    }
    if BARE_DOUBLE.is_match(value) {
        return value.parse().ok().map(Value::Double);
    }
    if value.eq_ignore_ascii_case("true") {
        return Some(Value::Byte(1));
    }
    if value.eq_ignore_ascii_case("false") {
        return Some(Value::Byte(0));
    }

    if value.starts_with('[') && value.ends_with(']') && value.len() >= 2 {
        let mut inner = &value[1..value.len() - 1];
        for marker in ["B;", "I;", "L;"] {
            if let Some(stripped) = inner.strip_prefix(marker) {
                inner = stripped;
                break;
            }
        }

        let mut ints = IntArray::default();
        for part in inner.split(',') {
            let part = part.trim();
            if !part.is_empty() {
                ints.push(part.parse().ok()?);
            }
        }
        return Some(Value::IntArray(ints));
    }

    None
}
