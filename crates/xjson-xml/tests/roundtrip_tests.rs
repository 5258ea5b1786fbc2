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

//! Roundtrip tests for xjson-xml conversion
//!
//! Covers value → XML → value preservation and the textual stability of
//! reformatting, with emphasis on interleaved siblings (`#item`).

use xjson_core::{IndentStep, Map, PrimitiveArray, Value};
use xjson_xml::{
    from_xml, from_xml_with_config, to_xml, to_xml_with_config, FromXmlConfig, ToXmlConfig,
    XmlMode,
};

fn map_of(entries: Vec<(&str, Value)>) -> Value {
    Value::Map(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

fn roundtrip(value: &Value) -> Value {
    let xml = to_xml(value).unwrap();
    from_xml(&xml).unwrap()
}

/// Parse keeping every element and write back with two-space indentation.
fn reformat(xml: &str) -> String {
    reformat_with(xml, IndentStep::TwoSpaces)
}

fn reformat_with(xml: &str, step: IndentStep) -> String {
    let value = from_xml_with_config(xml, &FromXmlConfig::with_mode(XmlMode::Format)).unwrap();
    to_xml_with_config(&value, &ToXmlConfig::with_step(step)).unwrap()
}

// =============================================================================
// Value Roundtrip Tests
// =============================================================================

#[test]
fn test_scalar_leaves_roundtrip() {
    let value = map_of(vec![
        ("s", Value::from("text")),
        ("i", Value::Int(-42)),
        ("b", Value::Bool(false)),
        ("n", Value::Null),
        ("e", Value::from("")),
    ]);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn test_single_key_roundtrip() {
    let value = map_of(vec![("only", Value::from("x"))]);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn test_big_numbers_roundtrip() {
    let value = map_of(vec![
        ("big", xjson_core::parse_number("123456789012345678901").unwrap()),
        ("dec", xjson_core::parse_number("1.10").unwrap()),
        ("f", Value::Float(3.14)),
    ]);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn test_single_item_list_stays_list() {
    let value = map_of(vec![("a", Value::List(vec![Value::from("x")]))]);
    let back = roundtrip(&value);
    assert_eq!(back, value);
    assert!(matches!(back.get("a"), Some(Value::List(_))));
}

#[test]
fn test_lists_roundtrip() {
    let value = map_of(vec![
        ("many", Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])),
        ("none", Value::List(vec![])),
        ("nulls", Value::List(vec![Value::Null, Value::Null])),
        ("blank", Value::List(vec![Value::from("")])),
        (
            "nested",
            Value::List(vec![Value::List(vec![Value::Int(1), Value::Int(2)])]),
        ),
    ]);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn test_list_of_maps_roundtrip() {
    let value = map_of(vec![(
        "users",
        Value::List(vec![
            map_of(vec![("name", Value::from("Alice")), ("age", Value::Int(30))]),
            map_of(vec![("name", Value::from("Bob")), ("age", Value::Int(25))]),
        ]),
    )]);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn test_single_map_in_list_roundtrip() {
    let value = map_of(vec![(
        "users",
        Value::List(vec![map_of(vec![("name", Value::from("Alice"))])]),
    )]);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn test_nested_maps_roundtrip() {
    let value = map_of(vec![(
        "config",
        map_of(vec![
            ("db", map_of(vec![("host", Value::from("localhost")), ("port", Value::Int(5432))])),
            ("empty", Value::Map(Map::new())),
        ]),
    )]);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn test_top_level_list_roundtrip() {
    let value = Value::List(vec![Value::Int(1), Value::from("two"), Value::Bool(true)]);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn test_self_closing_roundtrip() {
    let value = map_of(vec![("x", map_of(vec![("-self-closing", Value::from("true"))]))]);
    let xml = to_xml(&value).unwrap();
    assert!(xml.contains("<x/>"));
    assert_eq!(from_xml(&xml).unwrap(), value);
}

#[test]
fn test_special_text_roundtrip() {
    let value = map_of(vec![("t", Value::from("a < b && c > d 'q' \"dq\" \r\n\ttab €"))]);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn test_escaped_names_roundtrip() {
    let value = map_of(vec![
        ("a b<c", Value::from("1")),
        ("", Value::from("2")),
        ("1st", Value::from("3")),
    ]);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn test_primitive_array_written_as_elements() {
    let value = map_of(vec![("a", Value::Array(PrimitiveArray::Int(vec![1, 2])))]);
    let back = roundtrip(&value);
    assert_eq!(
        back.get("a"),
        Some(&Value::List(vec![Value::from("1"), Value::from("2")]))
    );
}

#[test]
fn test_declaration_directives_roundtrip() {
    let value = map_of(vec![
        ("a", Value::from("x")),
        ("#encoding", Value::from("ISO-8859-1")),
        ("#standalone", Value::from("yes")),
    ]);
    assert_eq!(roundtrip(&value), value);
}

// =============================================================================
// Reformatting Tests
// =============================================================================

#[test]
fn test_reformat_repeated_elements() {
    assert_eq!(
        reformat("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root><element>1</element><element>2</element></root>"),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>\n  <element>1</element>\n  <element>2</element>\n</root>"
    );
}

#[test]
fn test_reformat_without_declaration() {
    assert_eq!(reformat("<a/>"), "<a/>");
    assert_eq!(
        reformat("<a><b/><c x=\"1\"/></a>"),
        "<a>\n  <b/>\n  <c x=\"1\"/>\n</a>"
    );
}

#[test]
fn test_reformat_compact() {
    assert_eq!(
        reformat_with(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a>\n  <b></b>\n  <b></b>\n</a>",
            IndentStep::Compact
        ),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><a><b></b><b></b></a>"
    );
}

#[test]
fn test_reformat_keeps_typed_text() {
    assert_eq!(
        reformat("<a number=\"true\">1.00</a>"),
        "<a number=\"true\">1.00</a>"
    );
}

#[test]
fn test_reformat_doctype_and_comments() {
    let xml = "<!DOCTYPE note SYSTEM \"note.dtd\">\n<note>\n  <!-- first -->\n  <to>x</to>\n</note>";
    assert_eq!(reformat(xml), xml);
}

#[test]
fn test_reformat_namespaces() {
    let xml = "<p:a xmlns:p=\"urn:p\">\n  <p:b>x</p:b>\n</p:a>";
    assert_eq!(reformat(xml), xml);
}

#[test]
fn test_reformat_is_stable() {
    let xml = "<a><b>1</b><c><d>2</d></c><!--note--><e/></a>";
    let once = reformat(xml);
    assert_eq!(reformat(&once), once);
}

// =============================================================================
// Interleaving Tests
// =============================================================================

#[test]
fn test_interleaved_aba() {
    let xml = "<a>\n  <b>1</b>\n  <c>2</c>\n  <b>3</b>\n</a>";
    assert_eq!(reformat(xml), xml);
}

#[test]
fn test_interleaved_abba() {
    let xml = "<a>\n  <b>1</b>\n  <c>2</c>\n  <c>3</c>\n  <b>4</b>\n</a>";
    assert_eq!(reformat(xml), xml);
    let value = from_xml(xml).unwrap();
    let item = map_of(vec![(
        "#item",
        map_of(vec![("c", Value::List(vec![Value::from("2"), Value::from("3")]))]),
    )]);
    assert_eq!(
        value.get("a").and_then(|a| a.get("b")),
        Some(&Value::List(vec![Value::from("1"), item, Value::from("4")]))
    );
}

#[test]
fn test_interleaved_abcab() {
    let xml = "<a>\n  <b>1</b>\n  <c>2</c>\n  <d>3</d>\n  <b>4</b>\n</a>";
    assert_eq!(reformat(xml), xml);
    let value = from_xml(xml).unwrap();
    let list = value.get("a").and_then(|a| a.get("b")).and_then(Value::as_list).unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list[1].get("#item").and_then(|i| i.get("c")), Some(&Value::from("2")));
    assert_eq!(list[2].get("#item").and_then(|i| i.get("d")), Some(&Value::from("3")));
}

#[test]
fn test_interleaved_two_runs() {
    let xml = "<a>\n  <b>1</b>\n  <c>2</c>\n  <b>3</b>\n  <c>4</c>\n</a>";
    let once = reformat(xml);
    assert_eq!(reformat(&once), once);
    let value = from_xml(xml).unwrap();
    assert!(value.get("a").and_then(|a| a.get("b")).is_some());
}

#[test]
fn test_consecutive_runs_need_no_wrapper() {
    let value = from_xml("<a><b>1</b><b>2</b><c>3</c></a>").unwrap();
    assert_eq!(
        value.get("a"),
        Some(&map_of(vec![
            ("b", Value::List(vec![Value::from("1"), Value::from("2")])),
            ("c", Value::from("3")),
        ]))
    );
}

#[test]
fn test_interleaved_comment() {
    let xml = "<a>\n  <b>1</b>\n  <!--c-->\n  <b>2</b>\n</a>";
    assert_eq!(reformat(xml), xml);
}

#[test]
fn test_interleaved_text() {
    let out = reformat("<a>x<b>1</b>y<b>2</b></a>");
    assert_eq!(out, "<a>x<b>1</b>y<b>2</b>\n</a>");
    assert_eq!(reformat(&out), out);
}
