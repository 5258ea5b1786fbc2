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

//! Format command - JSON and XML reformatting

use super::convert::with_newline;
use super::{read_file, write_output};
use tracing::info;
use xjson::{IndentStep, TextType};

/// Reformat a JSON or XML file.
///
/// The format is detected with [`xjson::text_type`]; text that is
/// neither is written back unchanged.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or fails to parse.
///
/// # Examples
///
/// ```no_run
/// use xjson::IndentStep;
/// use xjson_cli::commands::format;
///
/// # fn main() -> Result<(), String> {
/// format("data.xml", Some("pretty.xml"), IndentStep::FourSpaces)?;
/// # Ok(())
/// # }
/// ```
pub fn format(file: &str, output: Option<&str>, step: IndentStep) -> Result<(), String> {
    let content = read_file(file)?;
    let kind = xjson::text_type(&content);
    info!(file, ?kind, %step, "format");

    if kind == TextType::Other {
        return write_output(&content, output);
    }
    let formatted =
        xjson::format_json_or_xml(&content, step).map_err(|e| format!("Format error: {}", e))?;

    write_output(&with_newline(formatted), output)
}

/// Rewrite the `encoding` of an XML file's declaration.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or is not well-formed XML.
pub fn change_encoding(
    file: &str,
    encoding: &str,
    output: Option<&str>,
    step: IndentStep,
) -> Result<(), String> {
    let content = read_file(file)?;
    info!(file, encoding, "change-encoding");

    let xml = xjson::change_xml_encoding(&content, encoding, step)
        .map_err(|e| format!("Encoding change error: {}", e))?;

    write_output(&with_newline(xml), output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // ==================== format tests ====================

    #[test]
    fn test_format_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.json");
        fs::write(&input, "{\"a\":[1,2]}").unwrap();
        let output = dir.path().join("out.json");

        format(
            input.to_str().unwrap(),
            Some(output.to_str().unwrap()),
            IndentStep::TwoSpaces,
        )
        .unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "{\n  \"a\": [\n    1,\n    2\n  ]\n}\n"
        );
    }

    #[test]
    fn test_format_other_text_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "plain words").unwrap();
        let output = dir.path().join("out.txt");

        format(
            input.to_str().unwrap(),
            Some(output.to_str().unwrap()),
            IndentStep::TwoSpaces,
        )
        .unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "plain words");
    }

    // ==================== change_encoding tests ====================

    #[test]
    fn test_change_encoding() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.xml");
        fs::write(&input, "<?xml version=\"1.0\" encoding=\"UTF-8\"?><a>Test</a>").unwrap();
        let output = dir.path().join("out.xml");

        change_encoding(
            input.to_str().unwrap(),
            "windows-1251",
            Some(output.to_str().unwrap()),
            IndentStep::TwoSpaces,
        )
        .unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "<?xml version=\"1.0\" encoding=\"windows-1251\"?>\n<a>Test</a>\n"
        );
    }

    #[test]
    fn test_change_encoding_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.xml");
        fs::write(&input, "<a>").unwrap();
        let err = change_encoding(input.to_str().unwrap(), "latin1", None, IndentStep::TwoSpaces)
            .unwrap_err();
        assert!(err.starts_with("Encoding change error"), "{}", err);
    }
}
