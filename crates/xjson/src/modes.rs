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

//! Conversion modes and the value tree rewrites behind them.
//!
//! Every rewrite takes ownership of a [`Value`] and returns the rewritten
//! tree. Lists and maps are rebuilt bottom-up from an explicit stack;
//! scalars pass through.

use std::fmt;
use std::str::FromStr;

use xjson_core::{parse_number, Map, Value};
use xjson_xml::convention::{OMIT_DECLARATION, SELF_CLOSING};

/// Post-processing applied by [`crate::xml_to_json_with_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum XmlToJsonMode {
    /// Plain conversion.
    #[default]
    Plain,
    /// Self-closing elements without attributes become `null`.
    ReplaceSelfClosingWithNull,
    /// Self-closing elements without attributes become `""`.
    ReplaceSelfClosingWithString,
    /// Empty elements (`<a></a>`) become `null`.
    ReplaceEmptyValueWithNull,
    /// Empty elements (`<a></a>`) become `""`.
    ReplaceEmptyValueWithString,
    /// Both empty and self-closing elements become `null`.
    ReplaceEmptyTagWithNull,
    /// Both empty and self-closing elements become `""`.
    ReplaceEmptyTagWithString,
    /// Drop the document element and keep its content.
    RemoveFirstLevel,
    /// Strip namespace prefixes from element and attribute names.
    WithoutNamespaces,
}

/// Pre-processing applied by [`crate::json_to_xml_with_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JsonToXmlMode {
    /// Plain conversion.
    #[default]
    Plain,
    /// Scalar entries become attributes of their parent element.
    ForceAttributeUsage,
    /// Always wrap the document in the root element.
    AddRoot,
    /// Do not mark single-item lists with `array="true"`.
    RemoveArrayAttribute,
    /// Write every leaf as plain text, without type attributes.
    RemoveAttributes,
    /// `null` leaves become empty elements.
    ReplaceNullWithEmptyValue,
    /// `""` leaves become empty elements.
    ReplaceEmptyStringWithEmptyValue,
}

impl XmlToJsonMode {
    const ALL: [Self; 9] = [
        Self::Plain,
        Self::ReplaceSelfClosingWithNull,
        Self::ReplaceSelfClosingWithString,
        Self::ReplaceEmptyValueWithNull,
        Self::ReplaceEmptyValueWithString,
        Self::ReplaceEmptyTagWithNull,
        Self::ReplaceEmptyTagWithString,
        Self::RemoveFirstLevel,
        Self::WithoutNamespaces,
    ];

    /// Canonical kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::ReplaceSelfClosingWithNull => "replace-self-closing-with-null",
            Self::ReplaceSelfClosingWithString => "replace-self-closing-with-string",
            Self::ReplaceEmptyValueWithNull => "replace-empty-value-with-null",
            Self::ReplaceEmptyValueWithString => "replace-empty-value-with-string",
            Self::ReplaceEmptyTagWithNull => "replace-empty-tag-with-null",
            Self::ReplaceEmptyTagWithString => "replace-empty-tag-with-string",
            Self::RemoveFirstLevel => "remove-first-level",
            Self::WithoutNamespaces => "without-namespaces",
        }
    }

    /// Apply the value rewrite of this mode.
    ///
    /// [`XmlToJsonMode::WithoutNamespaces`] acts while parsing, so it leaves
    /// the tree untouched here.
    pub fn apply(self, value: Value) -> Value {
        match self {
            Self::Plain | Self::WithoutNamespaces => value,
            Self::ReplaceSelfClosingWithNull => replace_self_closing_with_null(value),
            Self::ReplaceSelfClosingWithString => replace_self_closing_with_string(value),
            Self::ReplaceEmptyValueWithNull => replace_empty_value_with_null(value),
            Self::ReplaceEmptyValueWithString => replace_empty_value_with_string(value),
            Self::ReplaceEmptyTagWithNull => {
                replace_empty_value_with_null(replace_self_closing_with_null(value))
            }
            Self::ReplaceEmptyTagWithString => {
                replace_empty_value_with_string(replace_self_closing_with_string(value))
            }
            Self::RemoveFirstLevel => remove_first_level(value),
        }
    }
}

impl JsonToXmlMode {
    const ALL: [Self; 7] = [
        Self::Plain,
        Self::ForceAttributeUsage,
        Self::AddRoot,
        Self::RemoveArrayAttribute,
        Self::RemoveAttributes,
        Self::ReplaceNullWithEmptyValue,
        Self::ReplaceEmptyStringWithEmptyValue,
    ];

    /// Canonical kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::ForceAttributeUsage => "force-attribute-usage",
            Self::AddRoot => "add-root",
            Self::RemoveArrayAttribute => "remove-array-attribute",
            Self::RemoveAttributes => "remove-attributes",
            Self::ReplaceNullWithEmptyValue => "replace-null-with-empty-value",
            Self::ReplaceEmptyStringWithEmptyValue => "replace-empty-string-with-empty-value",
        }
    }

    /// Apply the value rewrite of this mode. Modes that only change
    /// writer settings leave the tree untouched.
    pub fn apply(self, value: Value) -> Value {
        match self {
            Self::ForceAttributeUsage => force_attribute_usage(value),
            Self::RemoveAttributes => replace_scalars_with_strings(value),
            Self::ReplaceNullWithEmptyValue => replace_null_with_empty_value(value),
            Self::ReplaceEmptyStringWithEmptyValue => replace_empty_string_with_empty_value(value),
            Self::Plain | Self::AddRoot | Self::RemoveArrayAttribute => value,
        }
    }
}

/// Error for an unrecognized mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown mode '{name}' (expected one of: {expected})")]
pub struct ParseModeError {
    name: String,
    expected: String,
}

fn parse_mode<M: Copy>(
    s: &str,
    all: &[M],
    name: fn(M) -> &'static str,
) -> Result<M, ParseModeError> {
    let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
    all.iter()
        .copied()
        .find(|mode| name(*mode) == normalized)
        .ok_or_else(|| ParseModeError {
            name: s.to_string(),
            expected: all.iter().map(|mode| name(*mode)).collect::<Vec<_>>().join(", "),
        })
}

impl FromStr for XmlToJsonMode {
    type Err = ParseModeError;

    /// Accepts kebab-case (`remove-first-level`) and constant case
    /// (`REMOVE_FIRST_LEVEL`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mode(s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for JsonToXmlMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mode(s, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for XmlToJsonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JsonToXmlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tree rewrites
// ============================================================================

/// A list or map whose children are being rewritten.
enum Rebuild {
    List {
        done: Vec<Value>,
        rest: std::vec::IntoIter<Value>,
    },
    Map {
        done: Map,
        rest: std::vec::IntoIter<(String, Value)>,
        /// Key of the child currently being rewritten.
        key: String,
    },
}

impl Rebuild {
    fn next_child(&mut self) -> Option<Value> {
        match self {
            Rebuild::List { rest, .. } => rest.next(),
            Rebuild::Map { rest, key, .. } => rest.next().map(|(k, v)| {
                *key = k;
                v
            }),
        }
    }

    fn accept(&mut self, value: Value) {
        match self {
            Rebuild::List { done, .. } => done.push(value),
            Rebuild::Map { done, key, .. } => {
                done.insert(std::mem::take(key), value);
            }
        }
    }

    fn into_value(self) -> Value {
        match self {
            Rebuild::List { done, .. } => Value::List(done),
            Rebuild::Map { done, .. } => Value::Map(done),
        }
    }
}

/// Rebuild `value` bottom-up, letting `f` replace any node after its
/// children were rewritten.
fn rewrite(value: Value, f: &mut impl FnMut(Value) -> Value) -> Value {
    let mut stack: Vec<Rebuild> = Vec::new();
    let mut next = value;
    loop {
        let mut finished = match next {
            Value::List(items) => {
                stack.push(Rebuild::List {
                    done: Vec::with_capacity(items.len()),
                    rest: items.into_iter(),
                });
                None
            }
            Value::Map(map) => {
                stack.push(Rebuild::Map {
                    done: Map::new(),
                    rest: map.into_iter().collect::<Vec<_>>().into_iter(),
                    key: String::new(),
                });
                None
            }
            leaf => Some(f(leaf)),
        };
        loop {
            let Some(top) = stack.last_mut() else {
                return finished.unwrap_or(Value::Null);
            };
            if let Some(value) = finished.take() {
                top.accept(value);
            }
            if let Some(child) = top.next_child() {
                next = child;
                break;
            }
            if let Some(rebuilt) = stack.pop() {
                finished = Some(f(rebuilt.into_value()));
            }
        }
    }
}

/// Rewrite only the values nested in `value`, never `value` itself.
fn rewrite_children(value: Value, f: &mut impl FnMut(Value) -> Value) -> Value {
    match value {
        Value::Map(map) => Value::Map(map.into_iter().map(|(k, v)| (k, rewrite(v, f))).collect()),
        Value::List(items) => Value::List(items.into_iter().map(|v| rewrite(v, f)).collect()),
        other => other,
    }
}

fn is_true(map: &Map, key: &str) -> bool {
    matches!(map.get(key), Some(Value::String(s)) if s == "true")
}

fn replace_self_closing(value: Value, replacement: &Value) -> Value {
    rewrite_children(value, &mut |node| match node {
        Value::Map(mut map) if is_true(&map, SELF_CLOSING) => {
            map.shift_remove(SELF_CLOSING);
            if map.is_empty() {
                replacement.clone()
            } else {
                Value::Map(map)
            }
        }
        other => other,
    })
}

fn replace_empty_value(value: Value, replacement: &Value) -> Value {
    rewrite_children(value, &mut |node| match node {
        Value::Map(map) if map.is_empty() => replacement.clone(),
        other => other,
    })
}

/// Replace `{"-self-closing": "true"}` with `null`; other attributes of a
/// self-closing element are kept.
///
/// # Examples
///
/// ```
/// use xjson::{from_xml, replace_self_closing_with_null};
///
/// let value = replace_self_closing_with_null(from_xml("<a><b/></a>").unwrap());
/// assert_eq!(value.to_string(), "{a={b=null}, #omit-xml-declaration=yes}");
/// ```
pub fn replace_self_closing_with_null(value: Value) -> Value {
    replace_self_closing(value, &Value::Null)
}

/// Replace `{"-self-closing": "true"}` with `""`.
pub fn replace_self_closing_with_string(value: Value) -> Value {
    replace_self_closing(value, &Value::from(""))
}

/// Replace nested empty maps with `null`.
pub fn replace_empty_value_with_null(value: Value) -> Value {
    replace_empty_value(value, &Value::Null)
}

/// Replace nested empty maps with `""`.
pub fn replace_empty_value_with_string(value: Value) -> Value {
    replace_empty_value(value, &Value::from(""))
}

/// Replace a self-closing element whose only attribute is a true
/// `nil` flag (`-nil` or any `-prefix:nil`) with `null`.
pub fn replace_nil_with_null(value: Value) -> Value {
    rewrite_children(value, &mut |node| match node {
        Value::Map(map) if is_nil(&map) => Value::Null,
        other => other,
    })
}

fn is_nil(map: &Map) -> bool {
    let is_nil_key = |key: &str| key == "-nil" || (key.starts_with('-') && key.ends_with(":nil"));
    map.len() == 2
        && is_true(map, SELF_CLOSING)
        && map
            .keys()
            .any(|key| is_nil_key(key) && is_true(map, key))
}

/// Turn scalar map entries into attributes (`"a": 1` becomes `"-a": "1"`).
///
/// Keys that already carry a `-`, `#`, `?` or `!` prefix are left alone.
pub fn force_attribute_usage(value: Value) -> Value {
    rewrite(value, &mut |node| match node {
        Value::Map(map) => Value::Map(
            map.into_iter()
                .map(|(key, value)| match value {
                    Value::Map(_) | Value::List(_) => (key, value),
                    scalar if key.starts_with(['-', '#', '?', '!']) => (key, scalar),
                    scalar => (format!("-{}", key), Value::String(scalar.to_string())),
                })
                .collect(),
        ),
        other => other,
    })
}

/// Replace `null` leaves with empty maps, written as empty elements.
pub fn replace_null_with_empty_value(value: Value) -> Value {
    rewrite_children(value, &mut |node| match node {
        Value::Null => Value::Map(Map::new()),
        other => other,
    })
}

/// Replace `""` leaves with empty maps, written as empty elements.
pub fn replace_empty_string_with_empty_value(value: Value) -> Value {
    rewrite_children(value, &mut |node| match node {
        Value::String(s) if s.is_empty() => Value::Map(Map::new()),
        other => other,
    })
}

/// Numbers, booleans and nulls become their text so no type attribute
/// is written for them.
fn replace_scalars_with_strings(value: Value) -> Value {
    rewrite_children(value, &mut |node| match node {
        Value::Map(_) | Value::List(_) | Value::String(_) => node,
        scalar => Value::String(scalar.to_string()),
    })
}

/// Keep only the content of the document element.
///
/// The first entry of a map is taken; a trailing `-self-closing` marker
/// on it is dropped. Values that are not maps are returned unchanged.
pub fn remove_first_level(value: Value) -> Value {
    let map = match value {
        Value::Map(map) => map,
        other => return other,
    };
    match map.into_iter().next() {
        Some((_, Value::Map(mut inner))) => {
            if is_true(&inner, SELF_CLOSING) {
                inner.shift_remove(SELF_CLOSING);
            }
            Value::Map(inner)
        }
        Some((_, other)) => other,
        None => Value::Map(Map::new()),
    }
}

/// Strip the attribute `-` prefix from keys, drop the self-closing and
/// declaration markers, and parse strings that are JSON numbers.
///
/// # Examples
///
/// ```
/// use xjson::{from_xml, remove_minuses_and_convert_numbers};
///
/// let value = from_xml("<a><b c=\"-1e1\" d=\"x\"/></a>").unwrap();
/// let value = remove_minuses_and_convert_numbers(value);
/// assert_eq!(value.to_string(), "{a={b={c=-10.0, d=x}}}");
/// ```
pub fn remove_minuses_and_convert_numbers(value: Value) -> Value {
    rewrite(value, &mut |node| match node {
        Value::Map(map) => Value::Map(
            map.into_iter()
                .filter(|(key, _)| key != SELF_CLOSING && key != OMIT_DECLARATION)
                .map(|(key, value)| {
                    let key = key.strip_prefix('-').map(str::to_string).unwrap_or(key);
                    (key, value)
                })
                .collect(),
        ),
        Value::String(s) if is_json_number(&s) => parse_number(&s).unwrap_or(Value::String(s)),
        other => other,
    })
}

/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
fn is_json_number(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;
    let digits = |pos: &mut usize| {
        let start = *pos;
        while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
            *pos += 1;
        }
        *pos - start
    };

    if bytes.first() == Some(&b'-') {
        pos += 1;
    }
    let int_start = pos;
    let int_len = digits(&mut pos);
    if int_len == 0 || (int_len > 1 && bytes[int_start] == b'0') {
        return false;
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        if digits(&mut pos) == 0 {
            return false;
        }
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if digits(&mut pos) == 0 {
            return false;
        }
    }
    pos == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(entries: Vec<(&str, Value)>) -> Value {
        Value::Map(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    fn self_closing() -> Value {
        map_of(vec![("-self-closing", Value::from("true"))])
    }

    // ==================== Mode name tests ====================

    #[test]
    fn test_mode_defaults() {
        assert_eq!(XmlToJsonMode::default(), XmlToJsonMode::Plain);
        assert_eq!(JsonToXmlMode::default(), JsonToXmlMode::Plain);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(
            "REPLACE_SELF_CLOSING_WITH_NULL".parse(),
            Ok(XmlToJsonMode::ReplaceSelfClosingWithNull)
        );
        assert_eq!("remove-first-level".parse(), Ok(XmlToJsonMode::RemoveFirstLevel));
        assert_eq!("FORCE_ATTRIBUTE_USAGE".parse(), Ok(JsonToXmlMode::ForceAttributeUsage));
        assert_eq!(" add-root ".parse(), Ok(JsonToXmlMode::AddRoot));
        let err = "nope".parse::<JsonToXmlMode>().unwrap_err();
        assert!(err.to_string().contains("force-attribute-usage"));
    }

    #[test]
    fn test_mode_display_roundtrip() {
        for mode in XmlToJsonMode::ALL {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
        for mode in JsonToXmlMode::ALL {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }

    // ==================== Self-closing tests ====================

    #[test]
    fn test_replace_self_closing() {
        let value = map_of(vec![("a", self_closing())]);
        assert_eq!(
            replace_self_closing_with_null(value.clone()),
            map_of(vec![("a", Value::Null)])
        );
        assert_eq!(
            replace_self_closing_with_string(value),
            map_of(vec![("a", Value::from(""))])
        );
    }

    #[test]
    fn test_self_closing_keeps_other_attributes() {
        let value = map_of(vec![(
            "a",
            map_of(vec![("-b", Value::from("c")), ("-self-closing", Value::from("true"))]),
        )]);
        assert_eq!(
            replace_self_closing_with_null(value),
            map_of(vec![("a", map_of(vec![("-b", Value::from("c"))]))])
        );
    }

    #[test]
    fn test_self_closing_false_untouched() {
        let value = map_of(vec![("a", map_of(vec![("-self-closing", Value::from("false"))]))]);
        assert_eq!(replace_self_closing_with_null(value.clone()), value);
    }

    #[test]
    fn test_self_closing_in_lists() {
        let value = map_of(vec![("b", Value::List(vec![self_closing(), self_closing()]))]);
        assert_eq!(
            replace_self_closing_with_null(value),
            map_of(vec![("b", Value::List(vec![Value::Null, Value::Null]))])
        );
        let nested = map_of(vec![("list", Value::List(vec![Value::List(vec![])]))]);
        assert_eq!(replace_self_closing_with_null(nested.clone()), nested);
    }

    // ==================== Empty value tests ====================

    #[test]
    fn test_replace_empty_value() {
        let value = map_of(vec![(
            "a",
            map_of(vec![("b", Value::List(vec![Value::Map(Map::new()), Value::Map(Map::new())]))]),
        )]);
        assert_eq!(
            replace_empty_value_with_null(value.clone()),
            map_of(vec![("a", map_of(vec![("b", Value::List(vec![Value::Null, Value::Null]))]))])
        );
        assert_eq!(
            replace_empty_value_with_string(value),
            map_of(vec![(
                "a",
                map_of(vec![("b", Value::List(vec![Value::from(""), Value::from("")]))])
            )])
        );
    }

    #[test]
    fn test_top_level_empty_map_untouched() {
        assert_eq!(
            replace_empty_value_with_null(Value::Map(Map::new())),
            Value::Map(Map::new())
        );
        assert_eq!(replace_empty_value_with_null(Value::Null), Value::Null);
    }

    #[test]
    fn test_empty_tag_combines_both() {
        let value = map_of(vec![(
            "c",
            map_of(vec![("b", Value::Map(Map::new())), ("a", self_closing())]),
        )]);
        assert_eq!(
            XmlToJsonMode::ReplaceEmptyTagWithNull.apply(value),
            map_of(vec![("c", map_of(vec![("b", Value::Null), ("a", Value::Null)]))])
        );
    }

    // ==================== Nil tests ====================

    #[test]
    fn test_replace_nil_with_null() {
        let nil = map_of(vec![("-nil", Value::from("true")), ("-self-closing", Value::from("true"))]);
        let xsi = map_of(vec![("-xsi:nil", Value::from("true")), ("-self-closing", Value::from("true"))]);
        let open = map_of(vec![("-nil", Value::from("true"))]);
        let value = map_of(vec![("a", nil), ("b", xsi), ("c", open.clone())]);
        assert_eq!(
            replace_nil_with_null(value),
            map_of(vec![("a", Value::Null), ("b", Value::Null), ("c", open)])
        );
    }

    #[test]
    fn test_nil_requires_true_values() {
        let value = map_of(vec![(
            "map",
            map_of(vec![("-nil", Value::from("true")), ("-self-closing", Value::from("true1"))]),
        )]);
        assert_eq!(replace_nil_with_null(value.clone()), value);
        let value = map_of(vec![(
            "map",
            map_of(vec![("-xsi:nil", Value::from("true1")), ("-self-closing", Value::from("true"))]),
        )]);
        assert_eq!(replace_nil_with_null(value.clone()), value);
    }

    // ==================== Attribute usage tests ====================

    #[test]
    fn test_force_attribute_usage() {
        let value = map_of(vec![(
            "a",
            map_of(vec![
                ("b", Value::from("x")),
                ("c", Value::Int(1)),
                ("-d", Value::from("y")),
                ("#text", Value::from("t")),
                ("e", map_of(vec![("f", Value::Null)])),
            ]),
        )]);
        assert_eq!(
            force_attribute_usage(value),
            map_of(vec![(
                "a",
                map_of(vec![
                    ("-b", Value::from("x")),
                    ("-c", Value::from("1")),
                    ("-d", Value::from("y")),
                    ("#text", Value::from("t")),
                    ("e", map_of(vec![("-f", Value::from("null"))])),
                ])
            )])
        );
    }

    #[test]
    fn test_force_attribute_usage_leaves_list_scalars() {
        let value = map_of(vec![("list", Value::List(vec![Value::Int(1), Value::Map(Map::new())]))]);
        assert_eq!(force_attribute_usage(value.clone()), value);
    }

    // ==================== Empty element tests ====================

    #[test]
    fn test_replace_null_with_empty_value() {
        let value = map_of(vec![
            ("a", Value::Null),
            ("b", Value::from("")),
            ("c", Value::List(vec![Value::Null])),
        ]);
        assert_eq!(
            replace_null_with_empty_value(value),
            map_of(vec![
                ("a", Value::Map(Map::new())),
                ("b", Value::from("")),
                ("c", Value::List(vec![Value::Map(Map::new())])),
            ])
        );
    }

    #[test]
    fn test_replace_empty_string_with_empty_value() {
        let value = map_of(vec![("a", Value::Null), ("b", Value::from(""))]);
        assert_eq!(
            replace_empty_string_with_empty_value(value),
            map_of(vec![("a", Value::Null), ("b", Value::Map(Map::new()))])
        );
    }

    #[test]
    fn test_remove_attributes_stringifies_scalars() {
        let value = map_of(vec![
            ("a", Value::Bool(true)),
            ("b", Value::Int(1)),
            ("c", Value::Null),
            ("d", Value::from("x")),
        ]);
        assert_eq!(
            JsonToXmlMode::RemoveAttributes.apply(value),
            map_of(vec![
                ("a", Value::from("true")),
                ("b", Value::from("1")),
                ("c", Value::from("null")),
                ("d", Value::from("x")),
            ])
        );
    }

    // ==================== First level tests ====================

    #[test]
    fn test_remove_first_level() {
        let value = map_of(vec![
            ("a", map_of(vec![("b", Value::from("c"))])),
            ("#omit-xml-declaration", Value::from("yes")),
        ]);
        assert_eq!(remove_first_level(value), map_of(vec![("b", Value::from("c"))]));
        assert_eq!(
            remove_first_level(map_of(vec![("a", self_closing())])),
            Value::Map(Map::new())
        );
        let kept = map_of(vec![("-self-closing", Value::from("false"))]);
        assert_eq!(remove_first_level(map_of(vec![("a", kept.clone())])), kept);
        assert_eq!(remove_first_level(Value::List(vec![])), Value::List(vec![]));
    }

    // ==================== Minus removal tests ====================

    #[test]
    fn test_remove_minuses() {
        let value = map_of(vec![
            ("a", map_of(vec![("-c", Value::from("1")), ("-self-closing", Value::from("true"))])),
            ("#omit-xml-declaration", Value::from("yes")),
        ]);
        assert_eq!(
            remove_minuses_and_convert_numbers(value),
            map_of(vec![("a", map_of(vec![("c", Value::Int(1))]))])
        );
    }

    #[test]
    fn test_remove_minuses_keeps_nested_lists() {
        let value = map_of(vec![("list", Value::List(vec![Value::List(vec![])]))]);
        assert_eq!(remove_minuses_and_convert_numbers(value).to_string(), "{list=[[]]}");
    }

    #[test]
    fn test_json_number_shapes() {
        for ok in ["0", "-1", "12", "1.5", "-1e1", "-1E1", "2.5e+3", "1E-2"] {
            assert!(is_json_number(ok), "{}", ok);
        }
        for bad in ["", "-", "01", "1.", "1.a", "1.-", "+1ee", "+1", "1e", "1e+", ".5", "abc"] {
            assert!(!is_json_number(bad), "{}", bad);
        }
    }

    // ==================== Deep value tests ====================

    #[test]
    fn test_rewrite_deep_value() {
        let mut value = Value::Null;
        for _ in 0..10_000 {
            value = Value::List(vec![value]);
        }
        let rewritten = replace_null_with_empty_value(value);
        let mut level = &rewritten;
        let mut depth = 0;
        while let Value::List(items) = level {
            depth += 1;
            level = &items[0];
        }
        assert_eq!(depth, 10_000);
        assert_eq!(level, &Value::Map(Map::new()));
        rewritten.drop_iteratively();
    }
}
