//! Conversion engine: the pure algorithms behind every menu entry.
//!
//! Each operation is a standalone function over value inputs. None of them
//! keeps state between calls, and none calls into the presentation layer.
//!
//! 1. **Radix conversion** - Horner parse into an `i128` pivot, then repeated
//!    division into the target base
//! 2. **Fractional conversion** - repeated multiplication of a `[0, 1)` value
//! 3. **Code-point mapping** - character <-> code point with binary/hex views
//! 4. **Base detection** - advisory guess of a digit string's base
//!
//! # Traces
//!
//! Every converter takes a `want_steps` flag. When it is set the result
//! carries a [`Trace`] of typed [`Step`] records; when it is not, no step is
//! ever built.

mod alphabet;
mod codepoint;
mod detect;
mod error;
mod fraction;
mod radix;
mod trace;

pub use alphabet::{
    alphabet, base_name, check_base, digit_symbol, digit_value, COMMON_BASES, DIGITS, MAX_BASE,
    MIN_BASE,
};
pub use codepoint::{char_to_code_point, code_point_to_char, CodePointView, MAX_CODE_POINT};
pub use detect::{detect_base, split_radix_prefix, Detection};
pub use error::ConversionError;
pub use fraction::{convert_fraction, DEFAULT_MAX_DIGITS};
pub use radix::{convert_integer, format_integer, parse_integer, twos_complement, ParsedInteger};
pub use trace::{Conversion, Step, StepKind, Trace};
