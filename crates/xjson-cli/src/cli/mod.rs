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

//! CLI command definitions and argument parsing.
//!
//! - [`conversion`]: JSON ⟷ XML conversion commands
//! - [`formatting`]: reformatting and declaration commands

mod conversion;
mod formatting;

use clap::Subcommand;

pub use conversion::ConversionCommands;
pub use formatting::FormattingCommands;

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Conversion (json-to-xml, xml-to-json)
/// └── Formatting (format, change-encoding)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Conversion commands - flattened to appear at top level
    #[command(flatten)]
    Conversion(ConversionCommands),

    // Formatting commands - flattened to appear at top level
    #[command(flatten)]
    Formatting(FormattingCommands),
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - File I/O fails
    /// - Parsing fails
    /// - Conversion fails
    pub fn execute(self) -> Result<(), String> {
        match self {
            Commands::Conversion(cmd) => cmd.execute(),
            Commands::Formatting(cmd) => cmd.execute(),
        }
    }
}
