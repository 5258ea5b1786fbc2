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

//! [`Value`] to JSON text conversion

use xjson_core::{format_float, IndentStep, Map, PrimitiveArray, Value};

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct ToJsonConfig {
    /// Indentation style (default: two spaces)
    pub step: IndentStep,
}

impl ToJsonConfig {
    /// Configuration with the given indentation.
    pub fn with_step(step: IndentStep) -> Self {
        Self { step }
    }
}

/// Convert a value to pretty-printed JSON with two-space indentation.
///
/// # Examples
///
/// ```
/// use xjson_core::{Map, Value};
/// use xjson_json::to_json;
///
/// let mut map = Map::new();
/// map.insert("a".to_string(), Value::List(vec![Value::Int(1)]));
/// assert_eq!(to_json(&Value::Map(map)), "{\n  \"a\": [\n    1\n  ]\n}");
/// ```
pub fn to_json(value: &Value) -> String {
    to_json_with_config(value, &ToJsonConfig::default())
}

/// Convert a value to JSON with a custom configuration.
pub fn to_json_with_config(value: &Value, config: &ToJsonConfig) -> String {
    let mut writer = JsonWriter::new(config.step);
    writer.write_value(value);
    writer.out
}

/// Quote-free JSON string escaping.
///
/// Control, C1 and general punctuation characters become upper-case
/// `\uXXXX` sequences; the euro sign is written as is.
pub fn escape_json(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '€' => out.push(ch),
            c if c <= '\u{1F}'
                || ('\u{7F}'..='\u{9F}').contains(&c)
                || ('\u{2000}'..='\u{20FF}').contains(&c) =>
            {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// An array or object being written, with the index of its next child.
enum Open<'v> {
    List(&'v [Value], usize),
    Map(&'v Map, usize),
}

struct JsonWriter {
    out: String,
    step: IndentStep,
    indent: usize,
}

impl JsonWriter {
    fn new(step: IndentStep) -> Self {
        Self {
            out: String::new(),
            step,
            indent: 0,
        }
    }

    fn fill(&mut self) {
        let c = self.step.fill_char();
        self.out.extend(std::iter::repeat(c).take(self.indent));
    }

    fn newline(&mut self) {
        if !self.step.is_compact() {
            self.out.push('\n');
        }
    }

    fn inc(&mut self) {
        self.indent += self.step.width();
    }

    fn dec(&mut self) {
        self.indent = self.indent.saturating_sub(self.step.width());
    }

    fn write_string(&mut self, s: &str) {
        self.out.push('"');
        self.out.push_str(&escape_json(s));
        self.out.push('"');
    }

    /// Writes `value`, keeping open containers on an explicit stack.
    fn write_value(&mut self, value: &Value) {
        let mut stack: Vec<Open<'_>> = Vec::new();
        let mut next = Some(value);
        loop {
            if let Some(value) = next.take() {
                match value {
                    Value::List(items) => {
                        self.out.push('[');
                        self.inc();
                        if !items.is_empty() {
                            self.newline();
                        }
                        stack.push(Open::List(items.as_slice(), 0));
                    }
                    Value::Map(map) => {
                        self.out.push('{');
                        self.inc();
                        if !map.is_empty() {
                            self.newline();
                        }
                        stack.push(Open::Map(map, 0));
                    }
                    other => self.write_scalar(other),
                }
            }

            let child = match stack.last_mut() {
                None => return,
                Some(Open::List(items, index)) => {
                    let items = *items;
                    let first = *index == 0;
                    *index += 1;
                    items.get(*index - 1).map(|item| (first, None, item))
                }
                Some(Open::Map(map, index)) => {
                    let map = *map;
                    let first = *index == 0;
                    *index += 1;
                    map.get_index(*index - 1)
                        .map(|(key, value)| (first, Some(key.as_str()), value))
                }
            };

            match child {
                Some((first, key, value)) => {
                    if !first {
                        self.out.push(',');
                        self.newline();
                    }
                    self.fill();
                    if let Some(key) = key {
                        self.write_string(key);
                        self.out.push(':');
                        if !self.step.is_compact() {
                            self.out.push(' ');
                        }
                    }
                    next = Some(value);
                }
                None => {
                    let close = match stack.pop() {
                        Some(Open::Map(..)) => '}',
                        _ => ']',
                    };
                    self.newline();
                    self.dec();
                    self.fill();
                    self.out.push(close);
                }
            }
        }
    }

    fn write_scalar(&mut self, value: &Value) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Int(n) => self.out.push_str(&n.to_string()),
            Value::BigInt(n) => self.out.push_str(&n.to_string()),
            Value::Float(f) if !f.is_finite() => self.out.push_str("null"),
            Value::Float(f) => self.out.push_str(&format_float(*f)),
            Value::Decimal(d) => self.out.push_str(&d.to_string()),
            Value::String(s) => self.write_string(s),
            Value::Array(array) => self.write_primitive_array(array),
            Value::List(_) | Value::Map(_) => {}
        }
    }

    fn write_primitive_array(&mut self, array: &PrimitiveArray) {
        if array.is_empty() {
            self.out.push_str("[]");
            return;
        }
        let quoted = matches!(array, PrimitiveArray::Char(_));
        self.out.push('[');
        self.inc();
        self.newline();
        for (i, item) in array.items().iter().enumerate() {
            if i > 0 {
                self.out.push(',');
                self.newline();
            }
            self.fill();
            if quoted {
                self.write_string(item);
            } else {
                self.out.push_str(item);
            }
        }
        self.newline();
        self.dec();
        self.fill();
        self.out.push(']');
    }
}
