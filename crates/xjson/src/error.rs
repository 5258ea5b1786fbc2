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

//! Unified error type for composite conversions.

use thiserror::Error;
use xjson_json::JsonParseError;
use xjson_xml::XmlError;

/// Errors raised by the facade conversions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The JSON input could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] JsonParseError),

    /// The XML input could not be parsed or the value could not be written as XML.
    #[error(transparent)]
    Xml(#[from] XmlError),
}

/// Result type for facade conversions.
pub type Result<T> = std::result::Result<T, Error>;
