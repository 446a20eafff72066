//! Heuristic base detection.
//!
//! A digit string rarely has one true base: `17` is valid octal, decimal and
//! hexadecimal alike. [`detect_base`] therefore reports the smallest base that
//! accepts every digit together with every common base that would also accept
//! it, and leaves the choice to the user.

use serde::Serialize;

use super::alphabet::{digit_value, COMMON_BASES, MIN_BASE};
use super::error::ConversionError;

/// Outcome of [`detect_base`]. Advisory, not a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    /// One more than the largest digit value seen (at least 2).
    pub minimal_base: u32,
    /// Common bases (2, 8, 10, 16) that accept every digit, ascending.
    pub candidates: Vec<u32>,
}

impl Detection {
    /// True when more than one common base could have produced the string.
    pub fn is_ambiguous(&self) -> bool {
        self.candidates.len() > 1
    }

    /// Smallest consistent common base.
    pub fn preferred(&self) -> Option<u32> {
        self.candidates.first().copied()
    }
}

/// Infer which bases could have produced `digit_string`. A leading `-` is ignored.
pub fn detect_base(digit_string: &str) -> Result<Detection, ConversionError> {
    let digits = digit_string.strip_prefix('-').unwrap_or(digit_string);
    if digits.is_empty() {
        return Err(ConversionError::invalid_input(
            "expected at least one digit to detect",
        ));
    }

    let mut highest = 0;
    for (position, symbol) in digits.chars().enumerate() {
        let value = digit_value(symbol).ok_or_else(|| {
            ConversionError::invalid_input(format!(
                "'{}' at position {} is not a digit in 0-9A-F",
                symbol, position
            ))
        })?;
        highest = highest.max(value);
    }

    let minimal_base = (highest + 1).max(MIN_BASE);
    let candidates = COMMON_BASES
        .iter()
        .copied()
        .filter(|&base| base >= minimal_base)
        .collect();

    Ok(Detection {
        minimal_base,
        candidates,
    })
}

/// Split a `0b`, `0o` or `0x` prefix (any case, after an optional `-`) off `input`.
///
/// Returns the declared base and the remaining digits with the sign kept.
/// A prefix with nothing after it is not split: `0B` reads as hex digits.
pub fn split_radix_prefix(input: &str) -> Option<(u32, String)> {
    let (sign, rest) = match input.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", input),
    };
    let prefix = rest.get(..2)?;
    let base = match prefix.to_ascii_lowercase().as_str() {
        "0b" => 2,
        "0o" => 8,
        "0x" => 16,
        _ => return None,
    };
    let digits = &rest[2..];
    if digits.is_empty() {
        return None;
    }
    Some((base, format!("{}{}", sign, digits)))
}
