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

//! Property-based roundtrip tests for XML conversion.

use proptest::prelude::*;
use xjson_core::{Map, Value};
use xjson_xml::{from_xml, from_xml_with_config, to_xml, FromXmlConfig, XmlMode};

fn reformat(xml: &str) -> String {
    let config = FromXmlConfig::with_mode(XmlMode::Format);
    to_xml(&from_xml_with_config(xml, &config).unwrap()).unwrap()
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000_000_000_000_i64..1_000_000_000_000_000).prop_map(Value::Int),
        "[a-zA-Z0-9 &<>'\"=/_.-]{0,16}".prop_map(Value::String),
    ]
}

fn entry_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => leaf(),
        1 => prop::collection::vec(leaf(), 0..4).prop_map(Value::List),
    ]
}

fn flat_map() -> impl Strategy<Value = Value> {
    prop::collection::vec(("k[a-z]{0,5}", entry_value()), 1..6).prop_map(|entries| {
        let mut map = Map::new();
        for (key, value) in entries {
            map.insert(key, value);
        }
        Value::Map(map)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: Maps of typed leaves and lists survive XML and back.
    #[test]
    fn prop_flat_map_roundtrip(value in flat_map()) {
        let xml = to_xml(&value).unwrap();
        prop_assert_eq!(from_xml(&xml).unwrap(), value);
    }

    /// Property: A map nested under one element survives XML and back.
    #[test]
    fn prop_nested_map_roundtrip(inner in flat_map()) {
        let mut map = Map::new();
        map.insert("doc".to_string(), inner);
        let value = Value::Map(map);
        let xml = to_xml(&value).unwrap();
        prop_assert_eq!(from_xml(&xml).unwrap(), value);
    }

    /// Property: Reformatting is idempotent.
    #[test]
    fn prop_format_idempotent(value in flat_map()) {
        let once = reformat(&to_xml(&value).unwrap());
        prop_assert_eq!(reformat(&once), once);
    }

    /// Property: The parser never panics on arbitrary input.
    #[test]
    fn prop_parse_never_panics(text in "\\PC{0,64}") {
        let _ = from_xml(&text);
    }
}
