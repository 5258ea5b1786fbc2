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

//! Error types for XML conversion

use std::fmt;

/// Errors that can occur during XML conversion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlError {
    /// XML parsing failed due to malformed syntax.
    ///
    /// Raised for unclosed or mismatched tags, several root elements, text
    /// outside the root element and unbound namespace prefixes.
    ///
    /// # Example
    ///
    /// ```text
    /// XML parse error at position 42: unexpected end of file
    /// ```
    ParseError {
        /// Byte offset in the XML document where the error was detected
        pos: usize,
        /// Description of the parsing error
        message: String,
    },

    /// Nesting depth limit exceeded during parsing.
    ///
    /// The default maximum depth is 1000 levels, configurable via
    /// [`FromXmlConfig::max_depth`](crate::FromXmlConfig::max_depth).
    ///
    /// # Example
    ///
    /// ```text
    /// XML recursion depth exceeded (max: 1000, found: 1001)
    /// ```
    RecursionLimitExceeded {
        /// Maximum allowed depth
        max: usize,
        /// Depth encountered
        current: usize,
    },

    /// An element flagged as typed carried text of the wrong shape.
    ///
    /// # Example
    ///
    /// ```text
    /// Invalid value: invalid number literal: 1a
    /// ```
    InvalidValue {
        /// Description of what value is invalid and why
        message: String,
    },

    /// The value cannot be represented as an XML document.
    ///
    /// # Example
    ///
    /// ```text
    /// Invalid XML structure: a scalar cannot be a document root
    /// ```
    StructureError {
        /// Description of the structural issue
        message: String,
    },
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XmlError::ParseError { pos, message } => {
                write!(f, "XML parse error at position {}: {}", pos, message)
            }
            XmlError::RecursionLimitExceeded { max, current } => {
                write!(
                    f,
                    "XML recursion depth exceeded (max: {}, found: {})",
                    max, current
                )
            }
            XmlError::InvalidValue { message } => write!(f, "Invalid value: {}", message),
            XmlError::StructureError { message } => {
                write!(f, "Invalid XML structure: {}", message)
            }
        }
    }
}

impl std::error::Error for XmlError {}

impl From<xjson_core::CoreError> for XmlError {
    fn from(err: xjson_core::CoreError) -> Self {
        XmlError::InvalidValue {
            message: err.to_string(),
        }
    }
}

/// Result alias for XML conversion.
pub type XmlResult<T> = Result<T, XmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = XmlError::ParseError {
            pos: 42,
            message: "unexpected end of file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "XML parse error at position 42: unexpected end of file"
        );
    }

    #[test]
    fn test_recursion_limit_display() {
        let err = XmlError::RecursionLimitExceeded {
            max: 1000,
            current: 1001,
        };
        assert_eq!(
            err.to_string(),
            "XML recursion depth exceeded (max: 1000, found: 1001)"
        );
    }

    #[test]
    fn test_invalid_value_display() {
        let err = XmlError::InvalidValue {
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value: bad");
    }

    #[test]
    fn test_structure_error_display() {
        let err = XmlError::StructureError {
            message: "scalar root".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid XML structure: scalar root");
    }

    #[test]
    fn test_from_core_error() {
        let err: XmlError = xjson_core::CoreError::InvalidNumber("1a".to_string()).into();
        assert!(matches!(err, XmlError::InvalidValue { .. }));
        assert!(err.to_string().contains("1a"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(XmlError::StructureError {
            message: "x".to_string(),
        });
        assert!(err.to_string().contains("x"));
    }
}
