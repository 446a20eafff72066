//! Mapping between characters and their Unicode code points.

use serde::Serialize;

use super::error::ConversionError;
use super::radix::convert_integer;

/// Highest code point a `char` can hold.
pub const MAX_CODE_POINT: u32 = char::MAX as u32;

/// A character together with its code point in decimal, binary and hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodePointView {
    pub character: char,
    pub code_point: u32,
    pub binary: String,
    pub hex: String,
}

/// Character for `code`.
///
/// Negative values, values above `0x10FFFF` and surrogates are rejected.
pub fn code_point_to_char(code: i64) -> Result<CodePointView, ConversionError> {
    let character = u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .ok_or(ConversionError::InvalidCodePoint { code })?;
    view(character)
}

/// Code point of a string holding exactly one character.
pub fn char_to_code_point(input: &str) -> Result<CodePointView, ConversionError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(character), None) => view(character),
        (None, _) => Err(ConversionError::invalid_input(
            "expected a single character, got an empty string",
        )),
        (Some(_), Some(_)) => Err(ConversionError::invalid_input(format!(
            "expected a single character, got {}",
            input.chars().count()
        ))),
    }
}

fn view(character: char) -> Result<CodePointView, ConversionError> {
    let code_point = u32::from(character);
    let decimal = code_point.to_string();
    let binary = convert_integer(&decimal, 10, 2, false)?.digits;
    let hex = convert_integer(&decimal, 10, 16, false)?.digits;

    Ok(CodePointView {
        character,
        code_point,
        binary,
        hex,
    })
}
