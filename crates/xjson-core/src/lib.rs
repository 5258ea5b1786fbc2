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

//! Core data model for XJSON.
//!
//! This crate holds everything the JSON and XML codecs share:
//!
//! - [`Value`] and [`Map`]: the generic, insertion-ordered value model
//! - [`parse_number`]: numeric promotion between 64-bit and arbitrary
//!   precision representations
//! - [`escape_xml`], [`unescape_xml`], [`escape_name`], [`unescape_name`]:
//!   reversible text and name escaping
//! - [`base32`]: the Base32 variant used inside escaped names
//! - [`IndentStep`]: indentation styles for both writers
//!
//! # Example
//!
//! ```rust
//! use xjson_core::{Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::Int(30));
//! assert_eq!(Value::Map(map).to_string(), "{name=Alice, age=30}");
//! ```

pub mod base32;
mod error;
mod escape;
pub mod name;
mod number;
mod step;
mod value;

pub use error::{CoreError, CoreResult};
pub use escape::{escape_name, escape_xml, unescape_name, unescape_xml, EMPTY_NAME};
pub use number::{format_float, parse_bool, parse_number};
pub use step::{IndentStep, ParseIndentStepError};
pub use value::{Map, PrimitiveArray, Value};

// Re-exported so downstream crates can build big numbers without extra deps.
pub use bigdecimal::BigDecimal;
pub use num_bigint::BigInt;
