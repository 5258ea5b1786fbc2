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

//! Reserved keys of the XML mapping convention.
//!
//! Keys starting with `-` are attributes, keys starting with `#` are
//! special nodes or document directives, and keys starting with `?` are
//! processing instructions.

/// Text content of an element.
pub const TEXT: &str = "#text";
/// Comment node.
pub const COMMENT: &str = "#comment";
/// CDATA section.
pub const CDATA: &str = "#cdata-section";
/// Wrapper that keeps interleaved siblings in document order.
pub const ITEM: &str = "#item";
/// Directive: declaration encoding.
pub const ENCODING: &str = "#encoding";
/// Directive: declaration `standalone` value.
pub const STANDALONE: &str = "#standalone";
/// Directive: drop the declaration when set to `yes`.
pub const OMIT_DECLARATION: &str = "#omit-xml-declaration";
/// Document type declaration body.
pub const DOCTYPE: &str = "!DOCTYPE";

/// Attribute marking an element written as `<a/>`.
pub const SELF_CLOSING: &str = "-self-closing";
/// Attribute marking a single-element list.
pub const ARRAY: &str = "-array";
/// Attribute marking an empty list.
pub const EMPTY_ARRAY: &str = "-empty-array";
/// Attribute marking a null value.
pub const NULL: &str = "-null";
/// Attribute marking an empty string.
pub const STRING: &str = "-string";
/// Attribute marking numeric text.
pub const NUMBER: &str = "-number";
/// Attribute marking boolean text.
pub const BOOLEAN: &str = "-boolean";

/// Prefix of namespace declaration attributes.
pub const XMLNS_PREFIX: &str = "xmlns:";

/// Name of anonymous list items.
pub const ELEMENT: &str = "element";
/// Default document root name.
pub const ROOT: &str = "root";
/// Encoding written when none is requested.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Directive keys removed from a map before it is written.
pub const DIRECTIVES: [&str; 3] = [ENCODING, STANDALONE, OMIT_DECLARATION];

/// True if the key names an attribute.
pub fn is_attribute(key: &str) -> bool {
    key.starts_with('-')
}

/// True if the key names a text node (`#text`, `#text1`, ...).
pub fn is_text(key: &str) -> bool {
    key.starts_with(TEXT)
}

/// True if the key names a comment node.
pub fn is_comment(key: &str) -> bool {
    key.starts_with(COMMENT)
}

/// True if the key names a CDATA section.
pub fn is_cdata(key: &str) -> bool {
    key.starts_with(CDATA)
}

/// True if the key names a processing instruction.
pub fn is_processing_instruction(key: &str) -> bool {
    key.starts_with('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_classes() {
        assert!(is_attribute("-id"));
        assert!(!is_attribute("id"));
        assert!(is_text("#text"));
        assert!(is_text("#text2"));
        assert!(is_comment("#comment1"));
        assert!(is_cdata("#cdata-section"));
        assert!(!is_cdata("#comment"));
        assert!(is_processing_instruction("?target"));
    }

    #[test]
    fn test_directives() {
        assert!(DIRECTIVES.contains(&"#encoding"));
        assert!(DIRECTIVES.contains(&"#standalone"));
        assert!(DIRECTIVES.contains(&"#omit-xml-declaration"));
    }
}
