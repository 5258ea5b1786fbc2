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

//! Indentation styles shared by the JSON and XML writers.

use std::fmt;
use std::str::FromStr;

/// Indentation used by the serializers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndentStep {
    /// Two spaces per level.
    #[default]
    TwoSpaces,
    /// Three spaces per level.
    ThreeSpaces,
    /// Four spaces per level.
    FourSpaces,
    /// No whitespace and no newlines.
    Compact,
    /// One tab per level.
    Tabs,
}

impl IndentStep {
    /// Number of fill characters per level.
    pub fn width(self) -> usize {
        match self {
            Self::TwoSpaces => 2,
            Self::ThreeSpaces => 3,
            Self::FourSpaces => 4,
            Self::Compact => 0,
            Self::Tabs => 1,
        }
    }

    /// Fill character.
    pub fn fill_char(self) -> char {
        match self {
            Self::Tabs => '\t',
            _ => ' ',
        }
    }

    /// True for [`IndentStep::Compact`].
    pub fn is_compact(self) -> bool {
        self == Self::Compact
    }

    /// Canonical kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TwoSpaces => "two-spaces",
            Self::ThreeSpaces => "three-spaces",
            Self::FourSpaces => "four-spaces",
            Self::Compact => "compact",
            Self::Tabs => "tabs",
        }
    }
}

impl fmt::Display for IndentStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized indentation name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown indent step '{0}' (expected two-spaces, three-spaces, four-spaces, tabs or compact)")]
pub struct ParseIndentStepError(pub String);

impl FromStr for IndentStep {
    type Err = ParseIndentStepError;

    /// Accepts `two-spaces`, `TWO_SPACES`, `2`, `tabs`, `compact` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "two-spaces" | "2" => Ok(Self::TwoSpaces),
            "three-spaces" | "3" => Ok(Self::ThreeSpaces),
            "four-spaces" | "4" => Ok(Self::FourSpaces),
            "compact" | "0" => Ok(Self::Compact),
            "tabs" | "tab" => Ok(Self::Tabs),
            _ => Err(ParseIndentStepError(s.to_string())),
        }
    }
}
