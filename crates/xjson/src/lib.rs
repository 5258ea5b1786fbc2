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

//! # XJSON - JSON and XML value codec
//!
//! Converts JSON and XML text to a generic, insertion-ordered value tree
//! and back. XML is mapped onto the tree by naming convention:
//! attributes become `-name` keys, text becomes `#text`, repeated sibling
//! elements become lists, and typed leaves carry `number`, `boolean`,
//! `null` and `string` attributes so they survive the round trip.
//!
//! ## Quick Start
//!
//! ```rust
//! use xjson::{json_to_xml, xml_to_json};
//!
//! let xml = json_to_xml(r#"{"user": {"name": "Alice", "age": 30}}"#).unwrap();
//! assert_eq!(
//!     xml,
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<user>\n  <name>Alice</name>\n  <age number=\"true\">30</age>\n</user>"
//! );
//!
//! let json = xml_to_json(&xml).unwrap();
//! assert_eq!(json, "{\n  \"user\": {\n    \"name\": \"Alice\",\n    \"age\": 30\n  }\n}");
//! ```
//!
//! ## Modules
//!
//! - [`json`]: JSON parsing and serialization
//! - [`xml`]: convention-based XML parsing and serialization
//! - [`modes`]: conversion modes and the value rewrites behind them

use tracing::debug;

mod error;
pub mod modes;

pub use error::{Error, Result};
pub use modes::{
    force_attribute_usage, remove_first_level, remove_minuses_and_convert_numbers,
    replace_empty_string_with_empty_value, replace_empty_value_with_null,
    replace_empty_value_with_string, replace_nil_with_null, replace_null_with_empty_value,
    replace_self_closing_with_null, replace_self_closing_with_string, JsonToXmlMode,
    ParseModeError, XmlToJsonMode,
};
pub use xjson_core::{
    escape_name, escape_xml, parse_number, unescape_name, unescape_xml, BigDecimal, BigInt,
    CoreError, IndentStep, Map, PrimitiveArray, Value,
};
pub use xjson_json::{from_json, to_json, JsonParseError};
pub use xjson_xml::{from_xml, to_xml, XmlError};

// Re-export JSON conversion
pub mod json {
    //! JSON conversion utilities
    pub use xjson_json::{
        escape_json, from_json, from_json_with_config, to_json, to_json_with_config,
        FromJsonConfig, FromJsonConfigBuilder, JsonParseError, DEFAULT_MAX_DEPTH,
    };
}

// Re-export XML conversion
pub mod xml {
    //! XML conversion utilities
    pub use xjson_xml::{
        convention, from_xml, from_xml_with_config, to_xml, to_xml_with_config, ArrayTrue,
        FromXmlConfig, NameMode, ToXmlConfig, XmlError, XmlMode, DEFAULT_MAX_DEPTH,
    };
}

use xjson_json::ToJsonConfig;
use xjson_xml::{ArrayTrue, FromXmlConfig, NameMode, ToXmlConfig, XmlMode};

/// Kind of document detected by [`text_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextType {
    /// Text delimited by `{}` or `[]`.
    Json,
    /// Text delimited by `<>`.
    Xml,
    /// Anything else.
    Other,
}

/// Detect whether `text` looks like JSON or XML from its outer delimiters.
///
/// # Examples
///
/// ```rust
/// use xjson::{text_type, TextType};
///
/// assert_eq!(text_type(" [1, 2] "), TextType::Json);
/// assert_eq!(text_type("<a/>"), TextType::Xml);
/// assert_eq!(text_type("[\n  1.00\n"), TextType::Other);
/// ```
pub fn text_type(text: &str) -> TextType {
    let trimmed = text.trim();
    let delimited = |open: char, close: char| trimmed.starts_with(open) && trimmed.ends_with(close);
    if delimited('{', '}') || delimited('[', ']') {
        TextType::Json
    } else if delimited('<', '>') {
        TextType::Xml
    } else {
        TextType::Other
    }
}

/// Convert JSON text to XML with default settings.
#[inline]
pub fn json_to_xml(json: &str) -> Result<String> {
    json_to_xml_with_mode(json, JsonToXmlMode::Plain, IndentStep::TwoSpaces, xml::convention::ROOT)
}

/// Convert JSON text to XML.
///
/// `root_name` names the wrapping element written when the document
/// cannot be its own root element, or always with [`JsonToXmlMode::AddRoot`].
///
/// # Examples
///
/// ```rust
/// use xjson::{json_to_xml_with_mode, IndentStep, JsonToXmlMode};
///
/// let xml = json_to_xml_with_mode(
///     r#"{"a": "b", "c": "d"}"#,
///     JsonToXmlMode::ForceAttributeUsage,
///     IndentStep::TwoSpaces,
///     "json",
/// )
/// .unwrap();
/// assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<json a=\"b\" c=\"d\"></json>");
/// ```
pub fn json_to_xml_with_mode(
    json: &str,
    mode: JsonToXmlMode,
    step: IndentStep,
    root_name: &str,
) -> Result<String> {
    debug!(input_len = json.len(), %mode, %step, root_name, "converting JSON to XML");
    let value = mode.apply(from_json(json)?);
    let config = ToXmlConfig {
        step,
        root_name: root_name.to_string(),
        array_true: match mode {
            JsonToXmlMode::RemoveArrayAttribute | JsonToXmlMode::RemoveAttributes => ArrayTrue::Skip,
            _ => ArrayTrue::Add,
        },
        always_wrap_root: mode == JsonToXmlMode::AddRoot,
    };
    let xml = xjson_xml::to_xml_with_config(&value, &config);
    value.drop_iteratively();
    Ok(xml?)
}

/// Convert XML text to JSON with default settings.
#[inline]
pub fn xml_to_json(xml: &str) -> Result<String> {
    xml_to_json_with_mode(xml, XmlToJsonMode::Plain, IndentStep::TwoSpaces)
}

/// Convert XML text to JSON, post-processing the tree with `mode`.
///
/// # Examples
///
/// ```rust
/// use xjson::{xml_to_json_with_mode, IndentStep, XmlToJsonMode};
///
/// let json = xml_to_json_with_mode(
///     "<a><b>c</b></a>",
///     XmlToJsonMode::RemoveFirstLevel,
///     IndentStep::TwoSpaces,
/// )
/// .unwrap();
/// assert_eq!(json, "{\n  \"b\": \"c\"\n}");
/// ```
pub fn xml_to_json_with_mode(xml: &str, mode: XmlToJsonMode, step: IndentStep) -> Result<String> {
    debug!(input_len = xml.len(), %mode, %step, "converting XML to JSON");
    let config = FromXmlConfig {
        names: if mode == XmlToJsonMode::WithoutNamespaces {
            NameMode::WithoutNamespaces
        } else {
            NameMode::Keep
        },
        ..FromXmlConfig::default()
    };
    let value = mode.apply(xjson_xml::from_xml_with_config(xml, &config)?);
    let json = xjson_json::to_json_with_config(&value, &ToJsonConfig::with_step(step));
    value.drop_iteratively();
    Ok(json)
}

/// Reformat JSON text with the given indentation.
///
/// Numbers keep their written precision (`1.00` stays `1.00`).
pub fn format_json(json: &str, step: IndentStep) -> Result<String> {
    debug!(input_len = json.len(), %step, "formatting JSON");
    let value = from_json(json)?;
    let formatted = xjson_json::to_json_with_config(&value, &ToJsonConfig::with_step(step));
    value.drop_iteratively();
    Ok(formatted)
}

/// Reformat XML text with the given indentation.
///
/// Parsing keeps the declaration, attributes, flags and wrapper
/// elements, so only whitespace changes.
///
/// # Examples
///
/// ```rust
/// use xjson::{format_xml, IndentStep};
///
/// let xml = format_xml("<root><element>1</element><element>2</element></root>", IndentStep::TwoSpaces).unwrap();
/// assert_eq!(xml, "<root>\n  <element>1</element>\n  <element>2</element>\n</root>");
/// ```
pub fn format_xml(xml: &str, step: IndentStep) -> Result<String> {
    debug!(input_len = xml.len(), %step, "formatting XML");
    let value = xjson_xml::from_xml_with_config(xml, &FromXmlConfig::with_mode(XmlMode::Format))?;
    let formatted = xjson_xml::to_xml_with_config(&value, &ToXmlConfig::with_step(step));
    value.drop_iteratively();
    Ok(formatted?)
}

/// Rewrite the XML declaration with a new `encoding` and reformat.
///
/// Only the declaration changes; the text itself stays UTF-8.
///
/// # Examples
///
/// ```rust
/// use xjson::{change_xml_encoding, IndentStep};
///
/// let xml = change_xml_encoding(
///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?><a>Test</a>",
///     "windows-1251",
///     IndentStep::TwoSpaces,
/// )
/// .unwrap();
/// assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"windows-1251\"?>\n<a>Test</a>");
/// ```
pub fn change_xml_encoding(xml: &str, encoding: &str, step: IndentStep) -> Result<String> {
    debug!(input_len = xml.len(), encoding, %step, "changing XML encoding");
    let value = xjson_xml::from_xml_with_config(xml, &FromXmlConfig::with_mode(XmlMode::Format))?;
    let value = match value {
        Value::Map(mut map) => {
            map.insert(xml::convention::ENCODING.to_string(), Value::from(encoding));
            Value::Map(map)
        }
        other => other,
    };
    let formatted = xjson_xml::to_xml_with_config(&value, &ToXmlConfig::with_step(step));
    value.drop_iteratively();
    Ok(formatted?)
}

/// Convert to JSON whatever [`text_type`] detects; other text is returned as is.
pub fn xml_or_json_to_json(text: &str, step: IndentStep) -> Result<String> {
    match text_type(text) {
        TextType::Json => format_json(text, step),
        TextType::Xml => xml_to_json_with_mode(text, XmlToJsonMode::Plain, step),
        TextType::Other => Ok(text.to_string()),
    }
}

/// Convert to XML whatever [`text_type`] detects; other text is returned as is.
pub fn xml_or_json_to_xml(text: &str, step: IndentStep) -> Result<String> {
    match text_type(text) {
        TextType::Json => json_to_xml_with_mode(text, JsonToXmlMode::Plain, step, xml::convention::ROOT),
        TextType::Xml => format_xml(text, step),
        TextType::Other => Ok(text.to_string()),
    }
}

/// Reformat JSON or XML; other text is returned as is.
pub fn format_json_or_xml(text: &str, step: IndentStep) -> Result<String> {
    match text_type(text) {
        TextType::Json => format_json(text, step),
        TextType::Xml => format_xml(text, step),
        TextType::Other => Ok(text.to_string()),
    }
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Text type tests ====================

    #[test]
    fn test_text_type() {
        assert_eq!(text_type("{\"a\": 1}"), TextType::Json);
        assert_eq!(text_type("\n[]\n"), TextType::Json);
        assert_eq!(text_type("<a/>"), TextType::Xml);
        assert_eq!(text_type(""), TextType::Other);
        assert_eq!(
            text_type("<root><element>1</element><element>2</element></root"),
            TextType::Other
        );
        assert_eq!(
            text_type("root><element>1</element><element>2</element></root>"),
            TextType::Other
        );
        assert_eq!(text_type("{\n  \"a\": {\n  }\n"), TextType::Other);
        assert_eq!(text_type("\n  \"a\": {\n  }\n}"), TextType::Other);
        assert_eq!(text_type("\n  1.00\n]"), TextType::Other);
    }

    // ==================== Dispatch tests ====================

    #[test]
    fn test_xml_or_json_to_json() {
        let step = IndentStep::TwoSpaces;
        assert_eq!(
            xml_or_json_to_json("<a/>", step).unwrap(),
            "{\n  \"a\": {\n    \"-self-closing\": \"true\"\n  },\n  \"#omit-xml-declaration\": \"yes\"\n}"
        );
        assert_eq!(xml_or_json_to_json("{\"a\":1}", step).unwrap(), "{\n  \"a\": 1\n}");
        assert_eq!(xml_or_json_to_json("[]", step).unwrap(), "[\n]");
        assert_eq!(xml_or_json_to_json("", step).unwrap(), "");
    }

    #[test]
    fn test_xml_or_json_to_xml() {
        let step = IndentStep::TwoSpaces;
        let empty_root = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root empty-array=\"true\"></root>";
        assert_eq!(xml_or_json_to_xml("<a/>", step).unwrap(), "<a/>");
        assert_eq!(xml_or_json_to_xml(empty_root, step).unwrap(), empty_root);
        assert_eq!(
            xml_or_json_to_xml("{\"a\":1}", step).unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a number=\"true\">1</a>"
        );
        assert_eq!(xml_or_json_to_xml("[]", step).unwrap(), empty_root);
        assert_eq!(xml_or_json_to_xml("", step).unwrap(), "");
    }

    #[test]
    fn test_format_json_or_xml() {
        assert_eq!(
            format_json_or_xml("<a>\n  <b></b>\n  <b></b>\n</a>", IndentStep::FourSpaces).unwrap(),
            "<a>\n    <b></b>\n    <b></b>\n</a>"
        );
        assert_eq!(format_json_or_xml("[1.00]", IndentStep::TwoSpaces).unwrap(), "[\n  1.00\n]");
        assert_eq!(format_json_or_xml("text", IndentStep::FourSpaces).unwrap(), "text");
    }

    #[test]
    fn test_errors_are_wrapped() {
        assert!(matches!(json_to_xml("{"), Err(Error::Json(_))));
        assert!(matches!(xml_to_json("<a>"), Err(Error::Xml(_))));
        assert!(matches!(json_to_xml("1"), Err(Error::Xml(XmlError::StructureError { .. }))));
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
