//! The cursor-driven recursive-descent parser used from 1.12 onwards.

use craftnbt::{ByteArray, Compound, IntArray, List, LongArray, Value};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::{Result, SnbtError},
    reader::SnbtReader,
    Syntax,
};

// Unquoted tokens are classified by these patterns in a fixed order, first
// match wins: float, byte, short, long, int, suffixed double, bare double,
// then booleans, then string. A float suffix beats the bare-double rule,
// so `1.0f` is a float while `1.0` is a double.
static FLOAT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[-+]?(?:[0-9]+\.?|[0-9]*\.[0-9]+)(?:e[-+]?[0-9]+)?f$").unwrap()
});

static DOUBLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[-+]?(?:[0-9]+\.?|[0-9]*\.[0-9]+)(?:e[-+]?[0-9]+)?d$").unwrap()
});

static DOUBLE_PATTERN_NOSUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[-+]?(?:[0-9]+\.|[0-9]*\.[0-9]+)(?:e[-+]?[0-9]+)?$").unwrap()
});

static BYTE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[-+]?(?:0|[1-9][0-9]*)b$").unwrap());
static SHORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[-+]?(?:0|[1-9][0-9]*)s$").unwrap());
static LONG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[-+]?(?:0|[1-9][0-9]*)l$").unwrap());
static INT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?(?:0|[1-9][0-9]*)$").unwrap());

pub(crate) struct ModernParser {
    reader: SnbtReader,
    syntax: Syntax,
}

impl ModernParser {
    pub fn new(input: &str, syntax: Syntax) -> Self {
        ModernParser {
            reader: SnbtReader::new(input),
            syntax,
        }
    }

    pub fn parse(mut self) -> Result<Value> {
        let value = self.parse_value()?;

        // After a valid root tag, no additional input is allowed.
        self.reader.skip_whitespace();
        if self.reader.can_read() {
            return Err(SnbtError::trailing(
                self.reader.content(),
                self.reader.cursor(),
            ));
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.reader.skip_whitespace();

        match self.reader.peek() {
            None => Err(self.reader.error("Expected value")),
            Some('{') => self.parse_compound(),
            Some('[') => self.parse_list_or_array(),
            Some(_) => self.parse_primitive(),
        }
    }

    fn parse_compound(&mut self) -> Result<Value> {
        self.reader.expect('{')?;
        self.reader.skip_whitespace();

        let mut compound = Compound::new();

        while matches!(self.reader.peek(), Some(c) if c != '}') {
            let key = self.read_key()?;
            if key.is_empty() {
                return Err(self.reader.error("Expected key"));
            }

            self.reader.expect(':')?;
            compound.put(key, self.parse_value()?);

            if !self.has_next() {
                break;
            }
        }

        self.reader.expect('}')?;
        Ok(Value::Compound(compound))
    }

    fn parse_list_or_array(&mut self) -> Result<Value> {
        // Lookahead for array syntax, [I; and friends. A quote directly
        // after the bracket is always a list of strings.
        if self.reader.can_read_n(3)
            && !matches!(self.reader.peek_at(1), Some(c) if self.is_quote(c))
            && self.reader.peek_at(2) == Some(';')
        {
            return self.parse_array();
        }
        self.parse_list()
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.reader.expect('[')?;

        let kind = self.reader.read(); // B, I or L
        self.reader.skip(); // the ';'
        self.reader.skip_whitespace();

        match kind {
            Some('B') => {
                let mut data = ByteArray::default();
                while matches!(self.reader.peek(), Some(c) if c != ']') {
                    let element = self.read_array_number("byte")?;
                    data.push(element.as_i8().unwrap_or_default());
                    if !self.has_next() {
                        break;
                    }
                }
                self.reader.expect(']')?;
                Ok(Value::ByteArray(data))
            }
            Some('I') => {
                let mut data = IntArray::default();
                while matches!(self.reader.peek(), Some(c) if c != ']') {
                    let element = self.read_array_number("int")?;
                    data.push(element.as_i32().unwrap_or_default());
                    if !self.has_next() {
                        break;
                    }
                }
                self.reader.expect(']')?;
                Ok(Value::IntArray(data))
            }
            Some('L') => {
                let mut data = LongArray::default();
                while matches!(self.reader.peek(), Some(c) if c != ']') {
                    let element = self.read_array_number("long")?;
                    data.push(element.as_i64().unwrap_or_default());
                    if !self.has_next() {
                        break;
                    }
                }
                self.reader.expect(']')?;
                Ok(Value::LongArray(data))
            }
            Some(other) => Err(self
                .reader
                .error(&format!("Invalid array type '{}'", other))),
            None => Err(self.reader.error("Expected array type")),
        }
    }

    fn parse_list(&mut self) -> Result<Value> {
        self.reader.expect('[')?;
        self.reader.skip_whitespace();

        if !self.reader.can_read() {
            return Err(self.reader.error("Unexpected end"));
        }

        let mut elements = Vec::new();

        while matches!(self.reader.peek(), Some(c) if c != ']') {
            elements.push(self.parse_value()?);
            if !self.has_next() {
                break;
            }
        }

        self.reader.expect(']')?;

        List::from_values(elements)
            .map(Value::List)
            .map_err(|_| {
                SnbtError::type_mismatch(
                    "All list elements must share one tag type",
                    self.reader.content(),
                    self.reader.cursor(),
                )
            })
    }

    fn parse_primitive(&mut self) -> Result<Value> {
        self.reader.skip_whitespace();

        if matches!(self.reader.peek(), Some(c) if self.is_quote(c)) {
            return Ok(Value::String(self.reader.read_quoted()?));
        }

        let token = self.reader.read_unquoted();
        if token.is_empty() {
            return Err(self.reader.error("Expected value"));
        }

        Ok(classify(&token))
    }

    /// A typed array element. Unlike the general primitive rule, only
    /// numerically shaped tokens are allowed here; booleans, quoted
    /// strings and nested containers are a type mismatch.
    fn read_array_number(&mut self, expected: &str) -> Result<Value> {
        self.reader.skip_whitespace();

        match self.reader.peek() {
            Some(c) if self.is_quote(c) || c == '{' || c == '[' => {
                return Err(SnbtError::type_mismatch(
                    &format!("Expected {}", expected),
                    self.reader.content(),
                    self.reader.cursor(),
                ));
            }
            None => return Err(self.reader.error("Expected value")),
            Some(_) => {}
        }

        let token = self.reader.read_unquoted();
        if token.is_empty() {
            return Err(self.reader.error("Expected value"));
        }

        let value = classify(&token);
        if value.kind().is_number() && !token.eq_ignore_ascii_case("true")
            && !token.eq_ignore_ascii_case("false")
        {
            Ok(value)
        } else {
            Err(SnbtError::type_mismatch(
                &format!("Expected {}", expected),
                self.reader.content(),
                self.reader.cursor(),
            ))
        }
    }

    fn read_key(&mut self) -> Result<String> {
        self.reader.skip_whitespace();

        match self.reader.peek() {
            None => Ok(String::new()),
            Some(c) if self.is_quote(c) => self.reader.read_quoted(),
            Some(_) => Ok(self.reader.read_unquoted()),
        }
    }

    fn has_next(&mut self) -> bool {
        self.reader.skip_whitespace();

        if self.reader.peek() == Some(',') {
            self.reader.skip();
            self.reader.skip_whitespace();
            true
        } else {
            false
        }
    }

    fn is_quote(&self, c: char) -> bool {
        c == '"' || (self.syntax.allow_single_quotes() && c == '\'')
    }
}

/// Classify an unquoted token. Numeric parses that overflow fall through
/// to a plain string, which is how existing save data expects e.g. an
/// out-of-range integer id to survive.
fn classify(token: &str) -> Value {
    if FLOAT_PATTERN.is_match(token) {
        return match strip_suffix(token).parse() {
            Ok(v) => Value::Float(v),
            Err(_) => Value::String(token.to_owned()),
        };
    }
    if BYTE_PATTERN.is_match(token) {
        return match strip_suffix(token).parse() {
            Ok(v) => Value::Byte(v),
            Err(_) => Value::String(token.to_owned()),
        };
    }
    if SHORT_PATTERN.is_match(token) {
        return match strip_suffix(token).parse() {
            Ok(v) => Value::Short(v),
            Err(_) => Value::String(token.to_owned()),
        };
    }
    if LONG_PATTERN.is_match(token) {
        return match strip_suffix(token).parse() {
            Ok(v) => Value::Long(v),
            Err(_) => Value::String(token.to_owned()),
        };
    }
    if INT_PATTERN.is_match(token) {
        return match token.parse() {
            Ok(v) => Value::Int(v),
            Err(_) => Value::String(token.to_owned()),
        };
    }
    if DOUBLE_PATTERN.is_match(token) {
        return match strip_suffix(token).parse() {
            Ok(v) => Value::Double(v),
            Err(_) => Value::String(token.to_owned()),
        };
    }
    if DOUBLE_PATTERN_NOSUFFIX.is_match(token) {
        return match token.parse() {
            Ok(v) => Value::Double(v),
            Err(_) => Value::String(token.to_owned()),
        };
    }
    if token.eq_ignore_ascii_case("true") {
        return Value::Byte(1);
    }
    if token.eq_ignore_ascii_case("false") {
        return Value::Byte(0);
    }

    Value::String(token.to_owned())
}

// every suffixed pattern ends in a one-byte ascii suffix
fn strip_suffix(token: &str) -> &str {
    &token[..token.len() - 1]
}
