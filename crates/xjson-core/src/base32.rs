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

//! Base32 over UTF-8 bytes, used to smuggle invalid characters through XML names.
//!
//! The alphabet only contains ASCII letters so the encoded form is always a
//! valid XML name fragment. There is no `=` padding; the last group is
//! zero-filled.

use crate::error::{CoreError, CoreResult};

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdef";
const SHIFT: u32 = 5;
const MASK: u32 = 0x1F;

fn digit_value(c: char) -> Option<u32> {
    match c {
        'A'..='Z' => Some(c as u32 - 'A' as u32),
        'a'..='f' => Some(c as u32 - 'a' as u32 + 26),
        _ => None,
    }
}

/// Encode the UTF-8 bytes of `data`.
pub fn encode(data: &str) -> String {
    let bytes = data.as_bytes();
    let mut out = String::with_capacity((bytes.len() * 8 + 4) / SHIFT as usize);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;
        while bits >= SHIFT {
            let index = (buffer >> (bits - SHIFT)) & MASK;
            out.push(ALPHABET[index as usize] as char);
            bits -= SHIFT;
        }
        buffer &= (1 << bits) - 1;
    }
    if bits > 0 {
        let index = (buffer << (SHIFT - bits)) & MASK;
        out.push(ALPHABET[index as usize] as char);
    }
    out
}

/// Decode a Base32 string back into text.
///
/// Trailing bits that do not fill a whole byte are dropped.
///
/// # Errors
///
/// Returns [`CoreError::IllegalBase32Character`] for characters outside the
/// alphabet and [`CoreError::InvalidUtf8`] if the bytes are not UTF-8.
pub fn decode(encoded: &str) -> CoreResult<String> {
    let mut bytes = Vec::with_capacity(encoded.len() * SHIFT as usize / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for c in encoded.chars() {
        let value = digit_value(c).ok_or(CoreError::IllegalBase32Character { ch: c })?;
        buffer = ((buffer << SHIFT) | value) & 0xFFFF;
        bits += SHIFT;
        if bits >= 8 {
            bytes.push((buffer >> (bits - 8)) as u8);
            bits -= 8;
        }
    }
    String::from_utf8(bytes).map_err(|_| CoreError::InvalidUtf8)
}
