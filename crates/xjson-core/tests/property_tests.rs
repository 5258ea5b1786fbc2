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

//! Property-based tests for escaping, Base32 and numeric promotion.

use proptest::prelude::*;
use std::collections::HashSet;
use xjson_core::{base32, escape_name, parse_number, unescape_name, unescape_xml, Value};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: Base32 decoding inverts encoding for any text.
    #[test]
    fn prop_base32_roundtrip(text in "\\PC{0,40}") {
        let encoded = base32::encode(&text);
        prop_assert!(encoded.chars().all(|c| c.is_ascii_alphabetic()));
        prop_assert_eq!(base32::decode(&encoded).unwrap(), text);
    }

    /// Property: Escaped names decode back when the input has no underscores.
    #[test]
    fn prop_name_roundtrip(name in "[^_]{0,24}") {
        let escaped = escape_name(&name, &HashSet::new());
        prop_assert_eq!(unescape_name(&escaped), name);
    }

    /// Property: Escaped names only contain name characters.
    #[test]
    fn prop_escaped_name_is_valid(name in "[^_?:]{1,24}") {
        let escaped = escape_name(&name, &HashSet::new());
        prop_assert!(xjson_core::name::is_valid_name(&escaped), "{}", escaped);
    }

    /// Property: Integer literals up to 18 digits stay 64-bit.
    #[test]
    fn prop_small_integers_stay_int(n in -999_999_999_999_999_999_i64..999_999_999_999_999_999) {
        prop_assert_eq!(parse_number(&n.to_string()).unwrap(), Value::Int(n));
    }

    /// Property: Text without ampersands passes through unescape untouched.
    #[test]
    fn prop_unescape_without_entities(text in "[^&]{0,40}") {
        prop_assert_eq!(unescape_xml(&text), text);
    }
}
