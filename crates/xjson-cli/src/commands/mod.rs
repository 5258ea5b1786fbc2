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

//! CLI command implementations

mod convert;
mod format;

pub use convert::{json_to_xml, xml_to_json};
pub use format::{change_encoding, format};

use std::fs;
use std::io::{self, Write};

/// Default maximum file size to prevent OOM attacks (1 GB)
/// Can be overridden via XJSON_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Get the maximum file size from environment or use default.
///
/// Reads `XJSON_MAX_FILE_SIZE` and falls back to [`DEFAULT_MAX_FILE_SIZE`]
/// if the variable is unset or not a number.
fn get_max_file_size() -> u64 {
    std::env::var("XJSON_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than the configured maximum are rejected before any
/// memory is allocated for their contents.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed
/// - The file size exceeds the maximum allowed size (configurable via `XJSON_MAX_FILE_SIZE`)
/// - The file cannot be read
/// - The file contains invalid UTF-8
///
/// # Examples
///
/// ```no_run
/// use xjson_cli::commands::read_file;
///
/// # fn main() -> Result<(), String> {
/// let content = read_file("data.json")?;
/// assert!(!content.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<String, String> {
    let metadata = fs::metadata(path)
        .map_err(|e| format!("Failed to get metadata for '{}': {}", path, e))?;

    let max_file_size = get_max_file_size();

    if metadata.len() > max_file_size {
        return Err(format!(
            "File '{}' is too large ({} bytes). Maximum allowed size is {} bytes ({} MB).\n\
             To process larger files, set XJSON_MAX_FILE_SIZE environment variable (in bytes).",
            path,
            metadata.len(),
            max_file_size,
            max_file_size / (1024 * 1024)
        ));
    }

    fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if the file cannot be written, or stdout is closed.
///
/// # Examples
///
/// ```no_run
/// use xjson_cli::commands::write_output;
///
/// # fn main() -> Result<(), String> {
/// write_output("<a>1</a>", None)?;
/// write_output("<a>1</a>", Some("out.xml"))?;
/// # Ok(())
/// # }
/// ```
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), String> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| format!("Failed to write '{}': {}", p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| format!("Failed to write to stdout: {}", e)),
    }
}
