//! Integer conversion between any two bases in `2..=16`.
//!
//! Conversion always goes through a signed `i128` pivot: the source digits are
//! folded into the pivot by Horner's method, then the pivot's magnitude is
//! divided by the target base until nothing is left. Remainders read in
//! reverse order are the target digits.

use super::alphabet::{check_base, digit_symbol, digit_value};
use super::error::ConversionError;
use super::trace::{Conversion, Step, Trace};

/// Pivot value of a parsed digit string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInteger {
    pub pivot: i128,
    /// One `Accumulate` step per digit, when requested.
    pub trace: Option<Trace>,
}

/// Convert `value` from `from_base` to `to_base`.
///
/// The trace, when requested, holds one `Divide` step per division of the
/// pivot. A zero pivot produces `"0"` and an empty trace. Negative values are
/// converted by magnitude and the sign is reattached to the final string only.
pub fn convert_integer(
    value: &str,
    from_base: u32,
    to_base: u32,
    want_steps: bool,
) -> Result<Conversion, ConversionError> {
    check_base(from_base)?;
    check_base(to_base)?;

    let parsed = parse_integer(value, from_base, false)?;
    let conversion = format_integer(parsed.pivot, to_base, want_steps)?;

    log::debug!(
        "converted {} (base {}) -> {} (base {})",
        value,
        from_base,
        conversion.digits,
        to_base
    );
    Ok(conversion)
}

/// Parse a signed digit string in `from_base` into its pivot.
pub fn parse_integer(
    value: &str,
    from_base: u32,
    want_steps: bool,
) -> Result<ParsedInteger, ConversionError> {
    let base = check_base(from_base)?;
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    if digits.is_empty() {
        return Err(ConversionError::invalid_input("expected at least one digit"));
    }

    let sign_offset = usize::from(negative);
    let mut trace = want_steps.then(Trace::new);
    let mut accumulated: u128 = 0;

    for (index, symbol) in digits.chars().enumerate() {
        let digit_value = digit_value(symbol)
            .filter(|&v| v < base)
            .ok_or(ConversionError::InvalidDigit {
                digit: symbol,
                position: index + sign_offset,
                base,
            })?;

        let result = accumulated
            .checked_mul(u128::from(base))
            .and_then(|v| v.checked_add(u128::from(digit_value)))
            .ok_or_else(|| overflow(value))?;

        if let Some(trace) = trace.as_mut() {
            trace.push(Step::Accumulate {
                accumulated,
                base,
                digit: symbol.to_ascii_uppercase(),
                digit_value,
                result,
            });
        }
        accumulated = result;
    }

    let pivot = apply_sign(accumulated, negative).ok_or_else(|| overflow(value))?;
    Ok(ParsedInteger { pivot, trace })
}

/// Write `pivot` in `to_base` by repeated division.
pub fn format_integer(
    pivot: i128,
    to_base: u32,
    want_steps: bool,
) -> Result<Conversion, ConversionError> {
    let base = check_base(to_base)?;
    let mut trace = want_steps.then(Trace::new);

    if pivot == 0 {
        return Ok(Conversion::new("0".to_string(), trace));
    }

    let divisor = u128::from(base);
    let mut dividend = pivot.unsigned_abs();
    let mut digits = Vec::new();

    while dividend > 0 {
        let quotient = dividend / divisor;
        // Always below 16, so the narrowing is lossless.
        let remainder = (dividend % divisor) as u32;
        let digit = digit_symbol(remainder);

        if let Some(trace) = trace.as_mut() {
            trace.push(Step::Divide {
                dividend,
                base,
                remainder,
                quotient,
                digit,
            });
        }
        digits.push(digit);
        dividend = quotient;
    }

    let mut result = String::with_capacity(digits.len() + 1);
    if pivot < 0 {
        result.push('-');
    }
    result.extend(digits.iter().rev());

    Ok(Conversion::new(result, trace))
}

/// Two's-complement bit pattern of `pivot`, one bit wider than its magnitude.
///
/// `-5` becomes `1011`, `5` becomes `0101`. The width is capped at 128 bits.
pub fn twos_complement(pivot: i128) -> String {
    let magnitude_bits = u128::BITS - pivot.unsigned_abs().leading_zeros();
    let width = (magnitude_bits + 1).min(u128::BITS);
    let mask = if width == u128::BITS {
        u128::MAX
    } else {
        (1u128 << width) - 1
    };
    let pattern = (pivot as u128) & mask;
    format!("{:0width$b}", pattern, width = width as usize)
}

fn apply_sign(magnitude: u128, negative: bool) -> Option<i128> {
    if !negative {
        return i128::try_from(magnitude).ok();
    }
    if magnitude == i128::MIN.unsigned_abs() {
        Some(i128::MIN)
    } else {
        i128::try_from(magnitude).ok().map(|v| -v)
    }
}

fn overflow(value: &str) -> ConversionError {
    ConversionError::Overflow {
        value: value.to_string(),
    }
}
