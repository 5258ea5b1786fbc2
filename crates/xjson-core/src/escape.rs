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

//! Escaping of XML text and element names.
//!
//! # Text
//!
//! [`escape_xml`] turns markup characters, carriage returns and control,
//! C1 and general punctuation code points into entity references.
//! [`unescape_xml`] only reverses the five named entities. Numeric
//! references are left alone on purpose: attribute values are read raw and
//! must not be decoded twice.
//!
//! # Names
//!
//! Keys that are not valid XML names are written with every offending
//! character replaced by `__<base32>__`. An empty key becomes
//! [`EMPTY_NAME`]. [`unescape_name`] reverses the scheme; a token that does
//! not decode is kept literally.

use std::collections::HashSet;

use crate::base32;
use crate::name::{is_name_char, is_name_start_char};

/// Element name written for an empty key.
pub const EMPTY_NAME: &str = "__EE__EMPTY__EE__";

const EMPTY_ATTRIBUTE_NAME: &str = "-__EE__EMPTY__EE__";

/// Escape element text or an attribute value.
///
/// # Examples
///
/// ```
/// use xjson_core::escape_xml;
///
/// assert_eq!(escape_xml("a < b & c"), "a &lt; b &amp; c");
/// assert_eq!(escape_xml("line\r"), "line&#xD;");
/// ```
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{8}' => out.push_str("\\b"),
            '\u{C}' => out.push_str("\\f"),
            '\r' => out.push_str("&#xD;"),
            '\n' | '\t' | '\'' | '€' => out.push(ch),
            c if needs_reference(c) => {
                out.push_str(&format!("&#x{:04X};", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

fn needs_reference(c: char) -> bool {
    c <= '\u{1F}' || ('\u{7F}'..='\u{9F}').contains(&c) || ('\u{2000}'..='\u{20FF}').contains(&c)
}

/// Reverse the five named entities `&quot; &amp; &lt; &gt; &apos;`.
///
/// ```
/// use xjson_core::unescape_xml;
///
/// assert_eq!(unescape_xml("&lt;a&gt; &amp;amp;"), "<a> &amp;");
/// assert_eq!(unescape_xml("&#x41;"), "&#x41;");
/// ```
pub fn unescape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match named_entity(rest) {
            Some((replacement, consumed)) => {
                out.push(replacement);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn named_entity(input: &str) -> Option<(char, usize)> {
    const ENTITIES: [(&str, char); 5] = [
        ("&quot;", '"'),
        ("&apos;", '\''),
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
    ];
    ENTITIES
        .iter()
        .find(|(entity, _)| input.starts_with(entity))
        .map(|(entity, ch)| (*ch, entity.len()))
}

/// Make `name` usable as an XML element or attribute name.
///
/// A colon is kept only when the text before it is `xmlns` or one of the
/// registered namespace prefixes. A leading `?` is kept so processing
/// instruction keys survive.
pub fn escape_name(name: &str, namespaces: &HashSet<String>) -> String {
    if name.is_empty() {
        return EMPTY_NAME.to_string();
    }
    let mut out = String::with_capacity(name.len());
    for (i, ch) in name.char_indices() {
        let keep = if ch == ':' {
            i > 0 && {
                let prefix = &name[..i];
                prefix == "xmlns" || namespaces.contains(prefix)
            }
        } else if i == 0 {
            ch == '?' || is_name_start_char(ch)
        } else {
            is_name_char(ch)
        };
        if keep {
            out.push(ch);
        } else {
            push_token(&mut out, ch);
        }
    }
    out
}

fn push_token(out: &mut String, ch: char) {
    let mut buf = [0u8; 4];
    out.push_str("__");
    out.push_str(&base32::encode(ch.encode_utf8(&mut buf)));
    out.push_str("__");
}

/// Reverse [`escape_name`].
///
/// Underscores that do not frame a token are preserved.
pub fn unescape_name(name: &str) -> String {
    if name == EMPTY_NAME {
        return String::new();
    }
    if name == EMPTY_ATTRIBUTE_NAME {
        return "-".to_string();
    }
    if !name.contains("__") {
        return name.to_string();
    }

    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    let mut underscores = 0;
    let mut i = 0;

    'outer: while i < chars.len() {
        let ch = chars[i];
        if ch == '_' {
            underscores += 1;
            i += 1;
            continue;
        }
        if underscores == 2 {
            let mut token = String::new();
            let mut run = 0;
            for (j, &c) in chars.iter().enumerate().skip(i) {
                if c != '_' {
                    token.push(c);
                    run = 0;
                    continue;
                }
                run += 1;
                if run == 2 {
                    match base32::decode(&token) {
                        Ok(decoded) => out.push_str(&decoded),
                        Err(_) => {
                            out.push_str("__");
                            out.push_str(&token);
                            out.push_str("__");
                        }
                    }
                    underscores = 0;
                    i = j + 1;
                    continue 'outer;
                }
            }
        }
        out.extend(std::iter::repeat('_').take(underscores));
        out.push(ch);
        underscores = 0;
        i += 1;
    }
    out.extend(std::iter::repeat('_').take(underscores));
    out
}
