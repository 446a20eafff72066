//! Fractional conversion by repeated multiplication.
//!
//! The arithmetic is plain `f64`. Expansions that do not terminate (0.1 in
//! base 2) are truncated at `max_digits`, and long expansions drift once the
//! remainder runs out of significant bits. The last digit is never rounded.

use super::alphabet::{check_base, digit_symbol};
use super::error::ConversionError;
use super::trace::{Conversion, Step, Trace};

/// Digit cap used when the caller has no preference.
pub const DEFAULT_MAX_DIGITS: usize = 32;

/// Expand `fractional_value` (in `[0, 1)`) into at most `max_digits` digits of `to_base`.
///
/// Stops early once the remainder is exactly zero. A zero input yields an
/// empty digit string. The result is marked truncated only when the cap
/// stopped a remainder that was still nonzero.
pub fn convert_fraction(
    fractional_value: f64,
    to_base: u32,
    max_digits: usize,
    want_steps: bool,
) -> Result<Conversion, ConversionError> {
    let base = check_base(to_base)?;
    if !(0.0..1.0).contains(&fractional_value) {
        return Err(ConversionError::InvalidRange {
            value: fractional_value,
        });
    }
    if max_digits == 0 {
        return Err(ConversionError::invalid_input(
            "max_digits must be at least 1",
        ));
    }

    let multiplier = f64::from(base);
    let mut trace = want_steps.then(Trace::new);
    let mut digits = String::new();
    let mut remainder = fractional_value;

    while remainder != 0.0 && digits.len() < max_digits {
        let product = remainder * multiplier;
        // remainder < 1, so the product's integer part is below the base.
        let digit_value = product.trunc() as u32;
        let digit = digit_symbol(digit_value);

        if let Some(trace) = trace.as_mut() {
            trace.push(Step::Multiply {
                remainder,
                base,
                product,
                digit_value,
                digit,
            });
        }
        digits.push(digit);
        remainder = product - f64::from(digit_value);
    }

    let truncated = remainder != 0.0;
    if truncated {
        log::debug!(
            "fraction {} truncated after {} base-{} digits",
            fractional_value,
            max_digits,
            base
        );
    }

    Ok(Conversion::new(digits, trace).truncated(truncated))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_in_binary_terminates() {
        let conversion = convert_fraction(0.5, 2, DEFAULT_MAX_DIGITS, true).unwrap();
        assert_eq!(conversion.digits, "1");
        assert_eq!(conversion.trace.unwrap().len(), 1);
    }

    #[test]
    fn test_exact_binary_expansion() {
        let conversion = convert_fraction(0.375, 2, 10, false).unwrap();
        assert_eq!(conversion.digits, "011");
    }

    #[test]
    fn test_exact_expansion_at_cap_is_not_truncated() {
        let conversion = convert_fraction(0.5, 2, 1, false).unwrap();
        assert_eq!(conversion.digits, "1");
        assert!(!conversion.truncated);

        let conversion = convert_fraction(0.375, 2, 3, false).unwrap();
        assert_eq!(conversion.digits, "011");
        assert!(!conversion.truncated);
    }

    #[test]
    fn test_hex_expansion() {
        let conversion = convert_fraction(0.75, 16, 10, false).unwrap();
        assert_eq!(conversion.digits, "C");
    }

    #[test]
    fn test_non_terminating_is_truncated() {
        let conversion = convert_fraction(0.1, 2, 8, false).unwrap();
        // 0.1 = 0.000110011001...
        assert_eq!(conversion.digits, "00011001");
        assert!(conversion.truncated);
    }

    #[test]
    fn test_third_in_base_three() {
        let conversion = convert_fraction(0.5, 3, 4, false).unwrap();
        // 0.5 = 0.1111... in base 3
        assert_eq!(conversion.digits, "1111");
    }

    #[test]
    fn test_zero_is_empty() {
        let conversion = convert_fraction(0.0, 2, 5, true).unwrap();
        assert_eq!(conversion.digits, "");
        assert!(!conversion.truncated);
        assert!(conversion.trace.unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_values() {
        assert!(matches!(
            convert_fraction(1.0, 2, 5, false),
            Err(ConversionError::InvalidRange { .. })
        ));
        assert!(matches!(
            convert_fraction(-0.25, 2, 5, false),
            Err(ConversionError::InvalidRange { .. })
        ));
        assert!(matches!(
            convert_fraction(f64::NAN, 2, 5, false),
            Err(ConversionError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_zero_max_digits_is_rejected() {
        assert!(matches!(
            convert_fraction(0.5, 2, 0, false),
            Err(ConversionError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_multiply_step_columns() {
        let conversion = convert_fraction(0.625, 2, 10, true).unwrap();
        let trace = conversion.trace.unwrap();
        assert_eq!(
            trace.steps()[0],
            Step::Multiply {
                remainder: 0.625,
                base: 2,
                product: 1.25,
                digit_value: 1,
                digit: '1',
            }
        );
        assert_eq!(conversion.digits, "101");
    }
}
