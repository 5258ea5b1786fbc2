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

//! Conversion commands - JSON ⟷ XML

use super::{read_file, write_output};
use tracing::info;
use xjson::{IndentStep, JsonToXmlMode, XmlToJsonMode};

/// Convert a JSON file to XML.
///
/// # Arguments
///
/// * `file` - Path to the JSON file
/// * `output` - Optional output file path. If `None`, writes to stdout
/// * `mode` - Post-processing applied before writing
/// * `root` - Root element name used when the document needs a wrapper
/// * `step` - Indentation of the XML output
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, the JSON is malformed, or
/// the value cannot be written as XML.
///
/// # Examples
///
/// ```no_run
/// use xjson::{IndentStep, JsonToXmlMode};
/// use xjson_cli::commands::json_to_xml;
///
/// # fn main() -> Result<(), String> {
/// json_to_xml("data.json", None, JsonToXmlMode::AddRoot, "root", IndentStep::Tabs)?;
/// # Ok(())
/// # }
/// ```
pub fn json_to_xml(
    file: &str,
    output: Option<&str>,
    mode: JsonToXmlMode,
    root: &str,
    step: IndentStep,
) -> Result<(), String> {
    let content = read_file(file)?;
    info!(file, %mode, "json-to-xml");

    let xml = xjson::json_to_xml_with_mode(&content, mode, step, root)
        .map_err(|e| format!("XML conversion error: {}", e))?;

    write_output(&with_newline(xml), output)
}

/// Convert an XML file to JSON.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or the XML is malformed.
pub fn xml_to_json(
    file: &str,
    output: Option<&str>,
    mode: XmlToJsonMode,
    step: IndentStep,
) -> Result<(), String> {
    let content = read_file(file)?;
    info!(file, %mode, "xml-to-json");

    let json = xjson::xml_to_json_with_mode(&content, mode, step)
        .map_err(|e| format!("JSON conversion error: {}", e))?;

    write_output(&with_newline(json), output)
}

pub(super) fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
