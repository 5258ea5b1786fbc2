// Dweve XJSON - JSON and XML value codec
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! JSON text to [`Value`] conversion.
//!
//! A single-pass parser with one byte of lookahead. Open arrays and
//! objects are kept on an explicit stack rather than the call stack.
//! String content is sliced straight out of the input; a buffer is only
//! used once an escape sequence interrupts a run.

use std::fmt;

use xjson_core::{parse_number, Map, Value};

/// Default maximum nesting depth for JSON parsing
///
/// Arrays and objects count one level each. Deeper input fails with
/// "Maximum depth exceeded".
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// A JSON syntax error with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {line}:{column}")]
pub struct JsonParseError {
    /// Human-readable description.
    pub message: String,
    /// Byte offset of the offending character, or the input length at EOF.
    pub offset: usize,
    /// Line number (1-based).
    pub line: usize,
    /// Column in characters (1-based).
    pub column: usize,
}

/// Configuration for JSON parsing
///
/// # Examples
///
/// ```
/// use xjson_json::FromJsonConfig;
///
/// let config = FromJsonConfig::default();
/// assert_eq!(config.max_depth, Some(10_000));
///
/// let shallow = FromJsonConfig::builder().max_depth(32).build();
/// assert_eq!(shallow.max_depth, Some(32));
/// ```
#[derive(Debug, Clone)]
pub struct FromJsonConfig {
    /// Maximum nesting depth (default: 10,000)
    ///
    /// Set to `None` to disable (not recommended for untrusted input).
    pub max_depth: Option<usize>,
}

impl Default for FromJsonConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl FromJsonConfig {
    /// Create a builder starting from the defaults.
    pub fn builder() -> FromJsonConfigBuilder {
        FromJsonConfigBuilder::default()
    }
}

/// Builder for [`FromJsonConfig`].
#[derive(Debug, Clone)]
pub struct FromJsonConfigBuilder {
    max_depth: Option<usize>,
}

impl Default for FromJsonConfigBuilder {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl FromJsonConfigBuilder {
    /// Set the maximum nesting depth
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Remove the depth limit
    pub fn unlimited(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Build the configuration
    pub fn build(self) -> FromJsonConfig {
        FromJsonConfig {
            max_depth: self.max_depth,
        }
    }
}

/// Parse JSON text with the default configuration.
///
/// # Examples
///
/// ```
/// use xjson_json::from_json;
/// use xjson_core::Value;
///
/// let value = from_json(r#"{"a": [1, 2.5, null]}"#).unwrap();
/// assert_eq!(value.to_string(), "{a=[1, 2.5, null]}");
///
/// let err = from_json("[1,]").unwrap_err();
/// assert_eq!(err.message, "Expected value");
/// ```
pub fn from_json(json: &str) -> Result<Value, JsonParseError> {
    from_json_with_config(json, &FromJsonConfig::default())
}

/// Parse JSON text with a custom configuration.
pub fn from_json_with_config(json: &str, config: &FromJsonConfig) -> Result<Value, JsonParseError> {
    Parser::new(json, config.max_depth).parse()
}

#[derive(Clone, Copy)]
enum Expected {
    Value,
    ArrayEnd,
    ObjectEnd,
    Colon,
    Name,
    Char(u8),
    StringChar,
    Escape,
    Digit,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value => write!(f, "value"),
            Self::ArrayEnd => write!(f, "',' or ']'"),
            Self::ObjectEnd => write!(f, "',' or '}}'"),
            Self::Colon => write!(f, "':'"),
            Self::Name => write!(f, "name"),
            Self::Char(c) => write!(f, "'{}'", *c as char),
            Self::StringChar => write!(f, "valid string character"),
            Self::Escape => write!(f, "valid escape sequence"),
            Self::Digit => write!(f, "digit"),
        }
    }
}

/// An array or object whose closing bracket has not been read yet.
enum Container {
    List(Vec<Value>),
    /// The map so far and the key awaiting its value.
    Map(Map, String),
}

impl Container {
    fn into_value(self) -> Value {
        match self {
            Container::List(items) => Value::List(items),
            Container::Map(map, _) => Value::Map(map),
        }
    }
}

struct Parser<'a> {
    json: &'a str,
    bytes: &'a [u8],
    /// Index of the byte after `current`.
    index: usize,
    current: Option<u8>,
    line: usize,
    line_offset: usize,
    capture: String,
    capture_start: Option<usize>,
    depth: usize,
    max_depth: Option<usize>,
}

impl<'a> Parser<'a> {
    fn new(json: &'a str, max_depth: Option<usize>) -> Self {
        Self {
            json,
            bytes: json.as_bytes(),
            index: 0,
            current: None,
            line: 1,
            line_offset: 0,
            capture: String::new(),
            capture_start: None,
            depth: 0,
            max_depth,
        }
    }

    fn parse(mut self) -> Result<Value, JsonParseError> {
        self.read();
        self.skip_whitespace();
        let result = self.read_document()?;
        self.skip_whitespace();
        if !self.is_end() {
            let err = self.error("Unexpected character");
            result.drop_iteratively();
            return Err(err);
        }
        Ok(result)
    }

    /// Reads one complete value; open containers live on an explicit stack
    /// so nesting depth is bounded by `max_depth` alone.
    fn read_document(&mut self) -> Result<Value, JsonParseError> {
        let mut stack = Vec::new();
        let result = self.read_nested(&mut stack);
        for container in stack {
            container.into_value().drop_iteratively();
        }
        result
    }

    fn read_nested(&mut self, stack: &mut Vec<Container>) -> Result<Value, JsonParseError> {
        loop {
            let mut value = match self.current {
                Some(b'[') => {
                    self.enter()?;
                    self.read();
                    self.skip_whitespace();
                    if !self.read_char(b']') {
                        stack.push(Container::List(Vec::new()));
                        continue;
                    }
                    self.depth -= 1;
                    Value::List(Vec::new())
                }
                Some(b'{') => {
                    self.enter()?;
                    self.read();
                    self.skip_whitespace();
                    if !self.read_char(b'}') {
                        let key = self.read_key()?;
                        stack.push(Container::Map(Map::new(), key));
                        continue;
                    }
                    self.depth -= 1;
                    Value::Map(Map::new())
                }
                _ => self.read_scalar()?,
            };
            loop {
                let Some(mut top) = stack.pop() else {
                    return Ok(value);
                };
                let closed = match self.attach(&mut top, value) {
                    Ok(closed) => closed,
                    Err(err) => {
                        stack.push(top);
                        return Err(err);
                    }
                };
                if !closed {
                    stack.push(top);
                    break;
                }
                self.depth -= 1;
                value = top.into_value();
            }
        }
    }

    fn read_scalar(&mut self) -> Result<Value, JsonParseError> {
        match self.current {
            Some(b'n') => self.read_literal(b"ull", Value::Null),
            Some(b't') => self.read_literal(b"rue", Value::Bool(true)),
            Some(b'f') => self.read_literal(b"alse", Value::Bool(false)),
            Some(b'"') => self.read_string().map(Value::String),
            Some(b'-' | b'0'..=b'9') => self.read_number(),
            _ => Err(self.expected(Expected::Value)),
        }
    }

    fn enter(&mut self) -> Result<(), JsonParseError> {
        self.depth += 1;
        match self.max_depth {
            Some(max) if self.depth > max => Err(self.error("Maximum depth exceeded")),
            _ => Ok(()),
        }
    }

    /// Adds a finished value to `container` and consumes the separator
    /// after it. Returns whether the container was closed.
    fn attach(&mut self, container: &mut Container, value: Value) -> Result<bool, JsonParseError> {
        self.skip_whitespace();
        match container {
            Container::List(items) => {
                items.push(value);
                if self.read_char(b',') {
                    self.skip_whitespace();
                    return Ok(false);
                }
                if self.read_char(b']') {
                    return Ok(true);
                }
                Err(self.expected(Expected::ArrayEnd))
            }
            Container::Map(map, key) => {
                map.insert(std::mem::take(key), value);
                if self.read_char(b',') {
                    *key = self.read_key()?;
                    return Ok(false);
                }
                if self.read_char(b'}') {
                    return Ok(true);
                }
                Err(self.expected(Expected::ObjectEnd))
            }
        }
    }

    /// Reads `"name" :` and the whitespace around it.
    fn read_key(&mut self) -> Result<String, JsonParseError> {
        self.skip_whitespace();
        if self.current != Some(b'"') {
            return Err(self.expected(Expected::Name));
        }
        let name = self.read_string()?;
        self.skip_whitespace();
        if !self.read_char(b':') {
            return Err(self.expected(Expected::Colon));
        }
        self.skip_whitespace();
        Ok(name)
    }

    fn read_literal(&mut self, rest: &[u8], value: Value) -> Result<Value, JsonParseError> {
        self.read();
        for &c in rest {
            if !self.read_char(c) {
                return Err(self.expected(Expected::Char(c)));
            }
        }
        Ok(value)
    }

    fn read_string(&mut self) -> Result<String, JsonParseError> {
        self.read();
        self.start_capture();
        loop {
            match self.current {
                Some(b'"') => break,
                Some(b'\\') => {
                    self.pause_capture();
                    self.read_escape()?;
                }
                Some(c) if c < 0x20 => return Err(self.expected(Expected::StringChar)),
                Some(_) => self.read(),
                None => return Err(self.expected(Expected::StringChar)),
            }
        }
        let string = self.end_capture();
        self.read();
        Ok(string)
    }

    /// Reads one escape sequence and restarts the capture after it.
    fn read_escape(&mut self) -> Result<(), JsonParseError> {
        self.read();
        let decoded = match self.current {
            Some(c @ (b'"' | b'/' | b'\\')) => c as char,
            Some(b'b') => '\u{8}',
            Some(b'f') => '\u{C}',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => return self.read_unicode_escape(),
            _ => return Err(self.expected(Expected::Escape)),
        };
        self.capture.push(decoded);
        self.read();
        self.start_capture();
        Ok(())
    }

    /// Handles `\uXXXX` with `current` on the `u`.
    ///
    /// When the four characters are not all hex digits they are kept
    /// verbatim after `\u`, quotes and backslashes included.
    fn read_unicode_escape(&mut self) -> Result<(), JsonParseError> {
        let Some(unit) = self.hex_at(self.index) else {
            self.capture.push_str("\\u");
            self.read();
            for _ in 0..4 {
                let Some(ch) = self.current_char() else {
                    break;
                };
                self.capture.push(ch);
                for _ in 0..ch.len_utf8() {
                    self.read();
                }
            }
            self.start_capture();
            return Ok(());
        };
        let mut consumed = 4;
        let ch = match unit {
            0xD800..=0xDBFF => {
                let low = (self.bytes.get(self.index + 4) == Some(&b'\\')
                    && self.bytes.get(self.index + 5) == Some(&b'u'))
                    .then(|| self.hex_at(self.index + 6))
                    .flatten()
                    .filter(|low| (0xDC00..=0xDFFF).contains(low));
                match low {
                    Some(low) => {
                        consumed += 6;
                        char::from_u32(0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))
                    }
                    None => None,
                }
            }
            _ => char::from_u32(unit),
        };
        self.capture.push(ch.unwrap_or(char::REPLACEMENT_CHARACTER));
        for _ in 0..=consumed {
            self.read();
        }
        self.start_capture();
        Ok(())
    }

    fn hex_at(&self, at: usize) -> Option<u32> {
        let digits = self.bytes.get(at..at + 4)?;
        if !digits.iter().all(u8::is_ascii_hexdigit) {
            return None;
        }
        let text = std::str::from_utf8(digits).ok()?;
        u32::from_str_radix(text, 16).ok()
    }

    fn read_number(&mut self) -> Result<Value, JsonParseError> {
        self.start_capture();
        self.read_char(b'-');
        let first = self.current;
        if !self.read_digit() {
            return Err(self.expected(Expected::Digit));
        }
        if first != Some(b'0') {
            while self.read_digit() {}
        }
        self.read_fraction()?;
        self.read_exponent()?;
        let literal = self.end_capture();
        parse_number(&literal).map_err(|e| self.error(&e.to_string()))
    }

    fn read_fraction(&mut self) -> Result<(), JsonParseError> {
        if !self.read_char(b'.') {
            return Ok(());
        }
        if !self.read_digit() {
            return Err(self.expected(Expected::Digit));
        }
        while self.read_digit() {}
        Ok(())
    }

    fn read_exponent(&mut self) -> Result<(), JsonParseError> {
        if !self.read_char(b'e') && !self.read_char(b'E') {
            return Ok(());
        }
        if !self.read_char(b'+') {
            self.read_char(b'-');
        }
        if !self.read_digit() {
            return Err(self.expected(Expected::Digit));
        }
        while self.read_digit() {}
        Ok(())
    }

    fn read_char(&mut self, c: u8) -> bool {
        if self.current != Some(c) {
            return false;
        }
        self.read();
        true
    }

    fn read_digit(&mut self) -> bool {
        if !matches!(self.current, Some(b'0'..=b'9')) {
            return false;
        }
        self.read();
        true
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read();
        }
    }

    fn read(&mut self) {
        if self.index == self.bytes.len() {
            self.current = None;
            return;
        }
        if self.current == Some(b'\n') {
            self.line += 1;
            self.line_offset = self.index;
        }
        self.current = Some(self.bytes[self.index]);
        self.index += 1;
    }

    fn is_end(&self) -> bool {
        self.current.is_none()
    }

    fn current_char(&self) -> Option<char> {
        if self.is_end() {
            return None;
        }
        self.json.get(self.position()..)?.chars().next()
    }

    /// Byte offset of `current`, or the input length at EOF.
    fn position(&self) -> usize {
        if self.is_end() {
            self.index
        } else {
            self.index - 1
        }
    }

    fn start_capture(&mut self) {
        self.capture_start = Some(self.position());
    }

    fn pause_capture(&mut self) {
        if let Some(start) = self.capture_start.take() {
            let end = self.position();
            self.capture.push_str(&self.json[start..end]);
        }
    }

    fn end_capture(&mut self) -> String {
        let end = self.position();
        let start = self.capture_start.take().unwrap_or(end);
        if self.capture.is_empty() {
            self.json[start..end].to_string()
        } else {
            self.capture.push_str(&self.json[start..end]);
            std::mem::take(&mut self.capture)
        }
    }

    fn expected(&self, what: Expected) -> JsonParseError {
        if self.is_end() {
            return self.error("Unexpected end of input");
        }
        self.error(&format!("Expected {}", what))
    }

    fn error(&self, message: &str) -> JsonParseError {
        let offset = self.position();
        let column = self
            .json
            .get(self.line_offset..offset)
            .map_or(0, |s| s.chars().count())
            + 1;
        JsonParseError {
            message: message.to_string(),
            offset,
            line: self.line,
            column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xjson_core::{BigDecimal, BigInt};

    fn parse(json: &str) -> Value {
        from_json(json).unwrap()
    }

    fn parse_err(json: &str) -> JsonParseError {
        from_json(json).unwrap_err()
    }

    // ==================== Config tests ====================

    #[test]
    fn test_config_default() {
        let config = FromJsonConfig::default();
        assert_eq!(config.max_depth, Some(DEFAULT_MAX_DEPTH));
    }

    #[test]
    fn test_config_builder() {
        let config = FromJsonConfig::builder().max_depth(3).build();
        assert_eq!(config.max_depth, Some(3));
        let unlimited = FromJsonConfig::builder().unlimited().build();
        assert_eq!(unlimited.max_depth, None);
    }

    #[test]
    fn test_config_debug_clone() {
        let config = FromJsonConfig::default();
        let cloned = config.clone();
        assert_eq!(cloned.max_depth, config.max_depth);
        assert!(format!("{:?}", config).contains("max_depth"));
    }

    // ==================== Literal tests ====================

    #[test]
    fn test_literals() {
        assert_eq!(parse("null"), Value::Null);
        assert_eq!(parse("true"), Value::Bool(true));
        assert_eq!(parse(" false "), Value::Bool(false));
        assert_eq!(parse("\"hi\""), Value::from("hi"));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse("0"), Value::Int(0));
        assert_eq!(parse("-12"), Value::Int(-12));
        assert_eq!(parse("3.14"), Value::Float(3.14));
        assert_eq!(parse("1E2"), Value::Float(100.0));
        assert_eq!(
            parse("123456789012345678901"),
            Value::BigInt("123456789012345678901".parse::<BigInt>().unwrap())
        );
        assert_eq!(
            parse("1.10"),
            Value::Decimal("1.10".parse::<BigDecimal>().unwrap())
        );
    }

    #[test]
    fn test_leading_zero_stops_number() {
        let err = parse_err("01");
        assert_eq!(err.message, "Unexpected character");
        assert_eq!(err.offset, 1);
    }

    // ==================== Structure tests ====================

    #[test]
    fn test_nested_structures() {
        let value = parse(r#"{"a": {"b": [1, {"c": null}]}, "d": []}"#);
        assert_eq!(value.to_string(), "{a={b=[1, {c=null}]}, d=[]}");
    }

    #[test]
    fn test_duplicate_key_keeps_first_position() {
        let value = parse(r#"{"a": 1, "b": 2, "a": 3}"#);
        let map = value.as_map().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map["a"], Value::Int(3));
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(parse("[]"), Value::List(vec![]));
        assert_eq!(parse("{ }"), Value::Map(Map::new()));
    }

    // ==================== String tests ====================

    #[test]
    fn test_escapes() {
        assert_eq!(
            parse(r#""a\"b\\c\/d\b\f\n\r\t""#),
            Value::from("a\"b\\c/d\u{8}\u{C}\n\r\t")
        );
        assert_eq!(parse(r#""\u0041\u00e9""#), Value::from("Aé"));
    }

    #[test]
    fn test_surrogate_pair() {
        assert_eq!(parse(r#""\uD83D\uDE00""#), Value::from("😀"));
        assert_eq!(parse(r#""\uD83Dx""#), Value::from("\u{FFFD}x"));
    }

    #[test]
    fn test_invalid_unicode_escape_is_kept() {
        assert_eq!(parse(r#""\u12G4""#), Value::from("\\u12G4"));
        assert_eq!(parse(r#""a\uzzzzb""#), Value::from("a\\uzzzzb"));
    }

    #[test]
    fn test_invalid_unicode_escape_takes_four_chars() {
        assert_eq!(parse(r#""\u12"ab""#), Value::from(r#"\u12"ab"#));
        assert_eq!(parse(r#""\u00\"x""#), Value::from(r#"\u00\"x"#));
        assert_eq!(parse(r#""\u1é23z""#), Value::from("\\u1é23z"));
        assert_eq!(parse_err(r#""\u1""#).message, "Unexpected end of input");
    }

    #[test]
    fn test_error_inside_deep_nesting() {
        let json = format!("{}1 2{}", "[".repeat(5_000), "]".repeat(5_000));
        let err = parse_err(&json);
        assert_eq!(err.message, "Expected ',' or ']'");
        assert_eq!(err.offset, 5_002);
    }

    #[test]
    fn test_multibyte_content() {
        assert_eq!(parse("\"日本語\""), Value::from("日本語"));
    }

    // ==================== Error tests ====================

    #[test]
    fn test_error_positions() {
        let err = parse_err("{\n  \"a\" 1\n}");
        assert_eq!(err.message, "Expected ':'");
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 7);
        assert_eq!(err.offset, 8);
        assert_eq!(err.to_string(), "Expected ':' at 2:7");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(parse_err("[1 2]").message, "Expected ',' or ']'");
        assert_eq!(parse_err("{\"a\":1 \"b\"}").message, "Expected ',' or '}'");
        assert_eq!(parse_err("{1:2}").message, "Expected name");
        assert_eq!(parse_err("nul!").message, "Expected 'l'");
        assert_eq!(parse_err("\"a\u{1}\"").message, "Expected valid string character");
        assert_eq!(parse_err(r#""\x""#).message, "Expected valid escape sequence");
        assert_eq!(parse_err("-").message, "Unexpected end of input");
        assert_eq!(parse_err("-a").message, "Expected digit");
        assert_eq!(parse_err("1.").message, "Unexpected end of input");
        assert_eq!(parse_err("1.x").message, "Expected digit");
        assert_eq!(parse_err("1e+").message, "Unexpected end of input");
        assert_eq!(parse_err("x").message, "Expected value");
        assert_eq!(parse_err("1 2").message, "Unexpected character");
    }

    #[test]
    fn test_empty_input() {
        let err = parse_err("");
        assert_eq!(err.message, "Unexpected end of input");
        assert_eq!(err.offset, 0);
        assert_eq!(err.line, 1);
        assert_eq!(err.column, 1);
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(parse_err("\"abc").message, "Unexpected end of input");
    }

    #[test]
    fn test_custom_depth_limit() {
        let config = FromJsonConfig::builder().max_depth(2).build();
        assert!(from_json_with_config("[[1]]", &config).is_ok());
        let err = from_json_with_config("[[[1]]]", &config).unwrap_err();
        assert_eq!(err.message, "Maximum depth exceeded");
        assert_eq!(err.offset, 2);
    }
}
