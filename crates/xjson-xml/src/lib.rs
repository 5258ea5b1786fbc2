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

//! XJSON XML Conversion
//!
//! Converts between XML text and the [`xjson_core::Value`] model using a
//! key convention that keeps XML-only structure:
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `-name` | attribute `name` |
//! | `#text`, `#text1`, ... | text content |
//! | `#comment`, `#cdata-section` | comments and CDATA sections |
//! | `?target` | processing instruction |
//! | `!DOCTYPE` | document type declaration body |
//! | `#item` | wrapper keeping interleaved siblings in order |
//! | `#encoding`, `#standalone`, `#omit-xml-declaration` | declaration directives |
//!
//! Flag attributes (`array`, `empty-array`, `self-closing`, `null`,
//! `string`, `number`, `boolean`) record what plain XML text cannot, so
//! values written by [`to_xml`] parse back unchanged with [`from_xml`].
//!
//! # Examples
//!
//! ```rust
//! use xjson_core::{Map, Value};
//! use xjson_xml::{from_xml, to_xml};
//!
//! let mut map = Map::new();
//! map.insert("a".to_string(), Value::List(vec![Value::Int(1)]));
//! let value = Value::Map(map);
//!
//! let xml = to_xml(&value).unwrap();
//! assert!(xml.contains("<a array=\"true\" number=\"true\">1</a>"));
//! assert_eq!(from_xml(&xml).unwrap(), value);
//! ```

pub mod convention;
mod error;
mod from_xml;
mod to_xml;

pub use error::{XmlError, XmlResult};
pub use from_xml::{
    from_xml, from_xml_with_config, FromXmlConfig, NameMode, XmlMode, DEFAULT_MAX_DEPTH,
};
pub use to_xml::{to_xml, to_xml_with_config, ArrayTrue, ToXmlConfig};
