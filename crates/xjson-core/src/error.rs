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

//! Error types for the core primitives.

use thiserror::Error;

/// Errors raised by the value model primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A character outside the Base32 alphabet was found while decoding.
    #[error("Illegal character {ch:?} in Base32 input")]
    IllegalBase32Character {
        /// The offending character.
        ch: char,
    },

    /// Decoded Base32 bytes were not valid UTF-8.
    #[error("Decoded Base32 bytes are not valid UTF-8")]
    InvalidUtf8,

    /// A numeric literal could not be converted.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CoreError::IllegalBase32Character { ch: '!' };
        assert_eq!(err.to_string(), "Illegal character '!' in Base32 input");
        assert_eq!(
            CoreError::InvalidNumber("1.2.3".to_string()).to_string(),
            "Invalid number: 1.2.3"
        );
    }

    #[test]
    fn test_clone_and_eq() {
        let err = CoreError::InvalidUtf8;
        assert_eq!(err.clone(), CoreError::InvalidUtf8);
    }
}
