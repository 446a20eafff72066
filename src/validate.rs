//! Input validators shared by the menu prompts and the clap parsers.
//!
//! Each validator returns `Result<T, String>` so it can be used directly as a
//! clap `value_parser` and its message shown verbatim when re-prompting.

use crate::engine::{alphabet, base_name, MAX_BASE, MAX_CODE_POINT, MIN_BASE};

/// Parse and validate a base (2-16)
pub fn parse_base(s: &str) -> Result<u32, String> {
    let base: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid base", s.trim()))?;
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(format!(
            "Base must be between {} and {}, got {}",
            MIN_BASE, MAX_BASE, base
        ));
    }
    Ok(base)
}

/// Validate a signed digit string against `base`'s alphabet.
///
/// Returns the digits uppercased.
pub fn parse_digits(s: &str, base: u32) -> Result<String, String> {
    let s = s.trim();
    let digits = s.strip_prefix('-').unwrap_or(s);
    let allowed = alphabet(base);
    let valid = !digits.is_empty()
        && digits
            .chars()
            .all(|c| allowed.contains(c.to_ascii_uppercase()));
    if !valid {
        let name = base_name(base)
            .map(str::to_string)
            .unwrap_or_else(|| format!("base-{}", base));
        return Err(format!(
            "Invalid {} number (use only {}, optional negative sign)",
            name,
            describe_alphabet(allowed)
        ));
    }
    Ok(s.to_ascii_uppercase())
}

/// Parse an integer code point. Range checks are left to the engine.
pub fn parse_code_point(s: &str) -> Result<i64, String> {
    s.trim().parse().map_err(|_| {
        format!(
            "'{}' is not a valid integer (code points run from 0 to {})",
            s.trim(),
            MAX_CODE_POINT
        )
    })
}

/// Validate a decimal float such as `-12.375`.
pub fn parse_decimal_float(s: &str) -> Result<String, String> {
    let s = s.trim();
    match s.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(s.to_string()),
        _ => Err(format!("'{}' is not a finite decimal number", s)),
    }
}

/// Parse a fraction for the fraction-only conversion.
pub fn parse_fraction(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s.trim()))?;
    if !(0.0..1.0).contains(&value) {
        return Err(format!("Fraction must be in [0, 1), got {}", value));
    }
    Ok(value)
}

/// Parse and validate a fractional digit cap (at least 1)
pub fn parse_max_digits(s: &str) -> Result<usize, String> {
    let digits: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid digit count", s.trim()))?;
    if digits == 0 {
        return Err("Digit count must be at least 1".to_string());
    }
    Ok(digits)
}

fn describe_alphabet(allowed: &str) -> String {
    let mut chars = allowed.chars();
    let first = chars.next().unwrap_or('0');
    let last = chars.next_back().unwrap_or(first);
    if allowed.len() > 10 {
        format!("0-9, A-{}, a-{}", last, last.to_ascii_lowercase())
    } else {
        format!("{}-{}", first, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base() {
        assert_eq!(parse_base("2"), Ok(2));
        assert_eq!(parse_base(" 16 "), Ok(16));
        assert!(parse_base("1").is_err());
        assert!(parse_base("17").is_err());
        assert!(parse_base("ten").is_err());
    }

    #[test]
    fn test_parse_digits_uppercases() {
        assert_eq!(parse_digits("-1a3f", 16), Ok("-1A3F".to_string()));
        assert_eq!(parse_digits("0101", 2), Ok("0101".to_string()));
    }

    #[test]
    fn test_parse_digits_rejects_foreign_symbols() {
        let err = parse_digits("102", 2).unwrap_err();
        assert_eq!(
            err,
            "Invalid binary number (use only 0-1, optional negative sign)"
        );
        let err = parse_digits("G", 16).unwrap_err();
        assert_eq!(
            err,
            "Invalid hexadecimal number (use only 0-9, A-F, a-f, optional negative sign)"
        );
        assert!(parse_digits("", 10).is_err());
        assert!(parse_digits("-", 10).is_err());
        assert!(parse_digits("--1", 10).is_err());
    }

    #[test]
    fn test_parse_digits_names_uncommon_base() {
        let err = parse_digits("9", 5).unwrap_err();
        assert!(err.starts_with("Invalid base-5 number"));
        let err = parse_digits("C", 12).unwrap_err();
        assert!(err.contains("A-B"));
    }

    #[test]
    fn test_parse_code_point() {
        assert_eq!(parse_code_point("65"), Ok(65));
        assert_eq!(parse_code_point("-3"), Ok(-3));
        assert!(parse_code_point("A").is_err());
    }

    #[test]
    fn test_parse_decimal_float() {
        assert_eq!(parse_decimal_float(" -12.375 "), Ok("-12.375".to_string()));
        assert!(parse_decimal_float("inf").is_err());
        assert!(parse_decimal_float("NaN").is_err());
        assert!(parse_decimal_float("1.2.3").is_err());
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_fraction("0.25"), Ok(0.25));
        assert!(parse_fraction("1.0").is_err());
        assert!(parse_fraction("-0.5").is_err());
    }

    #[test]
    fn test_parse_max_digits() {
        assert_eq!(parse_max_digits("32"), Ok(32));
        assert!(parse_max_digits("0").is_err());
        assert!(parse_max_digits("-4").is_err());
    }
}
