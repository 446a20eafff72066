//! Digit alphabet shared by every converter.

use super::error::ConversionError;

/// Digit symbols in value order. Base `b` uses the first `b` of them.
pub const DIGITS: &str = "0123456789ABCDEF";

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base.
pub const MAX_BASE: u32 = 16;

/// Bases offered as alternative interpretations by the detector.
pub const COMMON_BASES: [u32; 4] = [2, 8, 10, 16];

/// Return `base` unchanged if it lies in `MIN_BASE..=MAX_BASE`.
pub fn check_base(base: u32) -> Result<u32, ConversionError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(base)
    } else {
        Err(ConversionError::InvalidBase { base })
    }
}

/// Value of a digit symbol, ignoring case. `None` for anything outside `0-9A-F`.
pub fn digit_value(symbol: char) -> Option<u32> {
    symbol.to_digit(16)
}

/// Uppercase symbol for a digit value below 16.
pub fn digit_symbol(value: u32) -> char {
    debug_assert!(value < MAX_BASE, "digit value {} out of range", value);
    char::from(DIGITS.as_bytes()[value as usize])
}

/// The legal symbols of `base`, e.g. `"01234567"` for octal.
///
/// Bases outside the supported range are clamped for display purposes only;
/// callers that need validation use [`check_base`].
pub fn alphabet(base: u32) -> &'static str {
    let len = base.clamp(MIN_BASE, MAX_BASE) as usize;
    &DIGITS[..len]
}

/// Conventional name of the common bases.
pub fn base_name(base: u32) -> Option<&'static str> {
    match base {
        2 => Some("binary"),
        8 => Some("octal"),
        10 => Some("decimal"),
        16 => Some("hexadecimal"),
        _ => None,
    }
}
