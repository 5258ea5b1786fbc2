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

//! JSON ⟷ XML conversion commands.

use crate::commands;
use clap::Subcommand;
use xjson::{IndentStep, JsonToXmlMode, XmlToJsonMode};

/// Format conversion commands.
///
/// Both directions accept a `--mode` naming a post-processing step,
/// in kebab case (`force-attribute-usage`) or constant case
/// (`FORCE_ATTRIBUTE_USAGE`).
#[derive(Subcommand)]
pub enum ConversionCommands {
    /// Convert JSON to XML
    ///
    /// Typed leaves are marked with number, boolean, null and string
    /// attributes so the XML converts back to the same JSON.
    JsonToXml {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Conversion mode (plain, force-attribute-usage, add-root,
        /// remove-array-attribute, remove-attributes,
        /// replace-null-with-empty-value, replace-empty-string-with-empty-value)
        #[arg(short, long, default_value = "plain")]
        mode: JsonToXmlMode,

        /// Name of the wrapping root element
        #[arg(short, long, default_value = "root")]
        root: String,

        /// Indentation (two-spaces, three-spaces, four-spaces, tabs, compact)
        #[arg(short, long, default_value = "two-spaces")]
        indent: IndentStep,
    },

    /// Convert XML to JSON
    ///
    /// Attributes become `-name` keys and text mixed with elements becomes
    /// `#text` keys.
    XmlToJson {
        /// Input XML file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Conversion mode (plain, replace-self-closing-with-null,
        /// replace-self-closing-with-string, replace-empty-value-with-null,
        /// replace-empty-value-with-string, replace-empty-tag-with-null,
        /// replace-empty-tag-with-string, remove-first-level, without-namespaces)
        #[arg(short, long, default_value = "plain")]
        mode: XmlToJsonMode,

        /// Indentation (two-spaces, three-spaces, four-spaces, tabs, compact)
        #[arg(short, long, default_value = "two-spaces")]
        indent: IndentStep,
    },
}

impl ConversionCommands {
    /// Execute the conversion command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input cannot be read or parsed, or the output
    /// cannot be written.
    pub fn execute(self) -> Result<(), String> {
        match self {
            ConversionCommands::JsonToXml {
                file,
                output,
                mode,
                root,
                indent,
            } => commands::json_to_xml(&file, output.as_deref(), mode, &root, indent),
            ConversionCommands::XmlToJson {
                file,
                output,
                mode,
                indent,
            } => commands::xml_to_json(&file, output.as_deref(), mode, indent),
        }
    }
}
