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

//! XJSON JSON Conversion
//!
//! Converts between JSON text and the [`xjson_core::Value`] model.
//!
//! # Features
//!
//! - **Exact numeric kinds**: integers, big integers, floats and decimals
//!   are chosen from the literal's shape so re-serialization keeps precision
//! - **Precise errors**: every failure carries byte offset, line and column
//! - **Depth limit**: nesting is capped (10,000 levels by default)
//! - **Lenient `\u` escapes**: malformed unicode escapes are kept literally
//! - **Five indent styles**: two, three or four spaces, tabs or compact
//!
//! # Examples
//!
//! ```rust
//! use xjson_json::{from_json, to_json_with_config, ToJsonConfig};
//! use xjson_core::IndentStep;
//!
//! let value = from_json(r#"{"name": "Alice", "scores": [1, 2]}"#).unwrap();
//! let compact = to_json_with_config(&value, &ToJsonConfig::with_step(IndentStep::Compact));
//! assert_eq!(compact, r#"{"name":"Alice","scores":[1,2]}"#);
//! ```

mod from_json;
mod to_json;

pub use from_json::{
    from_json, from_json_with_config, FromJsonConfig, FromJsonConfigBuilder, JsonParseError,
    DEFAULT_MAX_DEPTH,
};
pub use to_json::{escape_json, to_json, to_json_with_config, ToJsonConfig};
