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

//! Numeric promotion and number formatting.
//!
//! Both codecs turn numeric literals into values through [`parse_number`]:
//!
//! - Literals without `.`, `e` or `E` become [`Value::Int`], or
//!   [`Value::BigInt`] when they have more than 19 characters.
//! - Literals with a fraction or exponent become [`Value::Float`], unless
//!   they are longer than 9 characters or carry more than one fractional
//!   digit ending in `0`, in which case they become [`Value::Decimal`] so
//!   the written precision survives a round trip.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::value::Value;

/// Maximum length of an integer literal kept in 64 bits.
pub const MAX_LONG_DIGITS: usize = 19;

/// Maximum length of a fractional literal kept as a float.
pub const MAX_FLOAT_LENGTH: usize = 9;

/// Convert a numeric literal using the promotion rule.
///
/// # Examples
///
/// ```
/// use xjson_core::{parse_number, Value};
///
/// assert_eq!(parse_number("42").unwrap(), Value::Int(42));
/// assert!(matches!(parse_number("1.10").unwrap(), Value::Decimal(_)));
/// assert_eq!(parse_number("3.14").unwrap(), Value::Float(3.14));
/// ```
pub fn parse_number(literal: &str) -> CoreResult<Value> {
    let invalid = || CoreError::InvalidNumber(literal.to_string());

    if literal.contains(['.', 'e', 'E']) {
        if needs_decimal(literal) {
            BigDecimal::from_str(literal)
                .map(Value::Decimal)
                .map_err(|_| invalid())
        } else {
            literal.parse::<f64>().map(Value::Float).map_err(|_| invalid())
        }
    } else if literal.len() > MAX_LONG_DIGITS {
        BigInt::from_str(literal)
            .map(Value::BigInt)
            .map_err(|_| invalid())
    } else {
        match literal.parse::<i64>() {
            Ok(n) => Ok(Value::Int(n)),
            // 19 digits can still overflow i64
            Err(_) => BigInt::from_str(literal)
                .map(Value::BigInt)
                .map_err(|_| invalid()),
        }
    }
}

fn needs_decimal(literal: &str) -> bool {
    if literal.len() > MAX_FLOAT_LENGTH {
        return true;
    }
    match literal.rfind('.') {
        Some(dot) => literal.len() - dot > 2 && literal.ends_with('0'),
        None => false,
    }
}

/// Case-insensitive `"true"` check used when casting text to a boolean.
pub fn parse_bool(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}

/// Format a float the way the serializers write it.
///
/// Magnitudes in `[1e-3, 1e7)` use plain notation with at least one
/// fractional digit (`100.0`). Everything else uses scientific notation
/// with an upper-case exponent (`1.0E7`, `1.5E-5`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", value);
    }
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => formatted,
    }
}
