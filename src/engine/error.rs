//! Error taxonomy for the conversion engine.

/// Precondition violations signalled by the engine.
///
/// Every variant describes input the caller can correct and retry; the engine
/// never clamps or substitutes a default.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("base {base} is out of range (expected 2-16)")]
    InvalidBase { base: u32 },

    #[error("'{digit}' at position {position} is not a valid base-{base} digit")]
    InvalidDigit {
        /// Offending character as typed
        digit: char,
        /// Character index in the input, sign included
        position: usize,
        /// Base the input was declared in
        base: u32,
    },

    #[error("fractional value {value} is outside [0, 1)")]
    InvalidRange { value: f64 },

    #[error("code point {code} is not a valid character (expected 0-0x10FFFF, excluding surrogates)")]
    InvalidCodePoint { code: i64 },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("{value} does not fit in a 128-bit signed integer")]
    Overflow { value: String },
}

impl ConversionError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            reason: reason.into(),
        }
    }
}
