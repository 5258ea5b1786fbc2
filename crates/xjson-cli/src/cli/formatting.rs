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

//! Reformatting commands.

use crate::commands;
use clap::Subcommand;
use xjson::IndentStep;

/// Formatting commands.
#[derive(Subcommand)]
pub enum FormattingCommands {
    /// Reformat a JSON or XML file
    ///
    /// The format is detected from the outer delimiters; any other text
    /// is written back unchanged.
    Format {
        /// Input file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Indentation (two-spaces, three-spaces, four-spaces, tabs, compact)
        #[arg(short, long, default_value = "two-spaces")]
        indent: IndentStep,
    },

    /// Change the encoding named in an XML declaration
    ChangeEncoding {
        /// Input XML file
        #[arg(value_name = "FILE")]
        file: String,

        /// New encoding name (e.g. windows-1251)
        #[arg(value_name = "ENCODING")]
        encoding: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Indentation (two-spaces, three-spaces, four-spaces, tabs, compact)
        #[arg(short, long, default_value = "two-spaces")]
        indent: IndentStep,
    },
}

impl FormattingCommands {
    /// Execute the formatting command.
    pub fn execute(self) -> Result<(), String> {
        match self {
            FormattingCommands::Format {
                file,
                output,
                indent,
            } => commands::format(&file, output.as_deref(), indent),
            FormattingCommands::ChangeEncoding {
                file,
                encoding,
                output,
                indent,
            } => commands::change_encoding(&file, &encoding, output.as_deref(), indent),
        }
    }
}
