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

//! XJSON Command Line Interface

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use xjson_cli::cli::Commands;

/// XJSON - JSON and XML conversion toolkit
///
/// # Examples
///
/// ```bash
/// # Convert JSON to XML
/// xjson json-to-xml data.json --output data.xml
///
/// # Convert XML to JSON, dropping self-closing markers
/// xjson xml-to-json data.xml --mode replace-self-closing-with-null
///
/// # Reformat either format with four-space indentation
/// xjson format data.xml --indent four-spaces
/// ```
#[derive(Parser)]
#[command(name = "xjson")]
#[command(author, version, about = "XJSON - JSON and XML conversion toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    // Initialize logging to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
