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

//! XJSON CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **json-to-xml**: Convert a JSON file to XML, optionally in a conversion mode
//! - **xml-to-json**: Convert an XML file to JSON, optionally in a conversion mode
//! - **format**: Reformat a JSON or XML file (the format is detected)
//! - **change-encoding**: Rewrite the encoding in an XML declaration
//!
//! # Examples
//!
//! ```no_run
//! use xjson::{IndentStep, JsonToXmlMode};
//! use xjson_cli::commands::json_to_xml;
//!
//! # fn main() -> Result<(), String> {
//! json_to_xml("data.json", Some("data.xml"), JsonToXmlMode::Plain, "root", IndentStep::TwoSpaces)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Input files larger than 1 GB are rejected before reading. The limit is
//! configurable via `XJSON_MAX_FILE_SIZE` (in bytes).

pub mod cli;
pub mod commands;
