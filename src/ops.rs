//! Caller-side composition of engine operations into displayable outcomes.
//!
//! Both the menu session and the one-shot subcommands go through these
//! functions, so the text and JSON renderings always describe the same data.

use serde::Serialize;

use crate::engine::{
    char_to_code_point, code_point_to_char, convert_fraction, detect_base, format_integer,
    parse_integer, split_radix_prefix, twos_complement, CodePointView, Conversion,
    ConversionError, Detection, Trace,
};

/// Result of any operation, tagged for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Outcome {
    Integer(IntegerOutcome),
    DecimalFloat(FloatOutcome),
    Fraction(FractionOutcome),
    CodePoint(CodePointView),
    Detection(DetectOutcome),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegerOutcome {
    pub input: String,
    pub from_base: u32,
    pub to_base: u32,
    /// Decimal value the conversion went through.
    pub pivot: i128,
    pub result: String,
    /// Horner steps, only when the source is not already decimal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_trace: Option<Trace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Trace>,
    /// Bit pattern for negative values written in binary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twos_complement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatOutcome {
    pub input: String,
    pub to_base: u32,
    pub negative: bool,
    pub integer: Conversion,
    pub fraction: Conversion,
    pub fractional_value: f64,
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FractionOutcome {
    pub input: f64,
    pub to_base: u32,
    pub max_digits: usize,
    pub conversion: Conversion,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectOutcome {
    pub input: String,
    /// Base named by a `0b`/`0o`/`0x` prefix, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_base: Option<u32>,
    /// The digits need a larger base than the prefix declares.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub prefix_conflict: bool,
    pub detection: Detection,
}

/// Integer conversion with both phases narrated.
pub fn integer(
    value: &str,
    from_base: u32,
    to_base: u32,
    want_steps: bool,
) -> Result<IntegerOutcome, ConversionError> {
    let parsed = parse_integer(value, from_base, want_steps && from_base != 10)?;
    let conversion = format_integer(parsed.pivot, to_base, want_steps)?;
    let twos_complement = (to_base == 2 && parsed.pivot < 0).then(|| twos_complement(parsed.pivot));

    log::debug!(
        "integer {} base {} -> base {} via pivot {}",
        value,
        from_base,
        to_base,
        parsed.pivot
    );

    Ok(IntegerOutcome {
        input: value.to_string(),
        from_base,
        to_base,
        pivot: parsed.pivot,
        result: conversion.digits,
        parse_trace: parsed.trace,
        trace: conversion.trace,
        twos_complement,
    })
}

/// Convert a decimal float by converting its integer and fractional parts separately.
///
/// The integer part goes through the radix converter, the fractional part
/// through the fractional converter; the sign is applied to the joined result.
/// An exact integer still gets a `.0` suffix.
pub fn decimal_float(
    input: &str,
    to_base: u32,
    max_digits: usize,
    want_steps: bool,
) -> Result<FloatOutcome, ConversionError> {
    let value: f64 = input
        .trim()
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| ConversionError::InvalidInput {
            reason: format!("'{}' is not a finite decimal number", input.trim()),
        })?;

    let negative = value < 0.0;
    let magnitude = value.abs();
    let whole = magnitude.trunc();
    // i128 tops out just above 1.7e38.
    if whole >= 1.0e38 {
        return Err(ConversionError::Overflow {
            value: input.trim().to_string(),
        });
    }
    let fractional_value = magnitude - whole;

    let integer = format_integer(whole as i128, to_base, want_steps)?;
    let fraction = convert_fraction(fractional_value, to_base, max_digits, want_steps)?;

    let fraction_digits = if fraction.digits.is_empty() {
        "0"
    } else {
        fraction.digits.as_str()
    };
    let sign = if negative { "-" } else { "" };
    let result = format!("{}{}.{}", sign, integer.digits, fraction_digits);

    Ok(FloatOutcome {
        input: input.trim().to_string(),
        to_base,
        negative,
        integer,
        fraction,
        fractional_value,
        result,
    })
}

pub fn fraction(
    value: f64,
    to_base: u32,
    max_digits: usize,
    want_steps: bool,
) -> Result<FractionOutcome, ConversionError> {
    let conversion = convert_fraction(value, to_base, max_digits, want_steps)?;
    Ok(FractionOutcome {
        input: value,
        to_base,
        max_digits,
        conversion,
    })
}

pub fn code_point(code: i64) -> Result<CodePointView, ConversionError> {
    code_point_to_char(code)
}

pub fn character(input: &str) -> Result<CodePointView, ConversionError> {
    char_to_code_point(input)
}

/// Base detection, honouring an explicit radix prefix when present.
pub fn detect(input: &str) -> Result<DetectOutcome, ConversionError> {
    let input = input.trim();
    let (declared_base, digits) = match split_radix_prefix(input) {
        Some((base, digits)) => (Some(base), digits),
        None => (None, input.to_string()),
    };
    let detection = detect_base(&digits)?;
    let prefix_conflict = declared_base.is_some_and(|base| detection.minimal_base > base);
    if prefix_conflict {
        log::debug!(
            "prefix of {} declares base {:?} but digits need base {}",
            input,
            declared_base,
            detection.minimal_base
        );
    }
    Ok(DetectOutcome {
        input: input.to_string(),
        declared_base,
        prefix_conflict,
        detection,
    })
}
