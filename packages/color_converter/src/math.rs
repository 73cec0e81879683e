//! Numeric helpers used by the color space converter and the literal formatter.
//!
//! [`round`] is not [`f64::round`]: it truncates
//! and then increments when the fractional part is at least one half, so
//! `round(-2.5)` is `-2`, not `-3`.

use thiserror::Error;

/// Largest number of fractional digits accepted by the fixed-decimal helpers.
pub const MAX_DECIMALS: u32 = 9;

/// Scaled values closer than this to an integer are treated as that integer
/// by [`floor_float`] and [`ceil_float`].
const SNAP_EPSILON: f64 = 1e-9;

/// Errors that can occur when parsing a bare or percentage value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseValueError {
    /// The text is not a decimal number.
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
}

/// Errors that can occur when decoding a hex byte.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHexByteError {
    /// The hex string is not 1 or 2 characters long.
    #[error("Hex byte must have 1 or 2 digits, got {0}")]
    InvalidLength(usize),
    /// An invalid hex character was encountered at the specified index.
    #[error("Invalid character at index {0} '{1}'")]
    InvalidCharacter(usize, char),
}

/// Rounds half up by truncating and incrementing when the fractional part is
/// at least `0.5`.
#[must_use]
pub fn round(value: f64) -> f64 {
    let truncated = value.trunc();

    if value.fract() >= 0.5 {
        truncated + 1.0
    } else {
        truncated
    }
}

/// Smallest integer greater than or equal to `value`.
#[must_use]
pub fn ceil(value: f64) -> f64 {
    value.ceil()
}

/// Largest integer less than or equal to `value`.
#[must_use]
pub fn floor(value: f64) -> f64 {
    value.floor()
}

fn scale(decimals: u32) -> f64 {
    #[allow(clippy::cast_possible_wrap)]
    let exponent = decimals.min(MAX_DECIMALS) as i32;
    10_f64.powi(exponent)
}

fn snap(scaled: f64) -> Option<f64> {
    let nearest = scaled.round();
    ((scaled - nearest).abs() < SNAP_EPSILON).then_some(nearest)
}

/// Rounds `value` to `decimals` fractional digits using [`round`].
#[must_use]
pub fn round_float(value: f64, decimals: u32) -> f64 {
    let p = scale(decimals);
    round(value * p) / p
}

/// Smallest value with `decimals` fractional digits that is greater than or
/// equal to `value`.
#[must_use]
pub fn ceil_float(value: f64, decimals: u32) -> f64 {
    let p = scale(decimals);
    let scaled = value * p;
    snap(scaled).unwrap_or_else(|| ceil(scaled)) / p
}

/// Largest value with `decimals` fractional digits that is less than or
/// equal to `value`.
#[must_use]
pub fn floor_float(value: f64, decimals: u32) -> f64 {
    let p = scale(decimals);
    let scaled = value * p;
    snap(scaled).unwrap_or_else(|| floor(scaled)) / p
}

/// `x` if it is greater than `y`, otherwise `y`.
#[must_use]
pub fn max<T: PartialOrd>(x: T, y: T) -> T {
    if x > y { x } else { y }
}

/// `x` if it is less than `y`, otherwise `y`.
#[must_use]
pub fn min<T: PartialOrd>(x: T, y: T) -> T {
    if x < y { x } else { y }
}

fn parse_number(raw: &str) -> Result<f64, ParseValueError> {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(ParseValueError::InvalidNumber(raw.to_string()));
    }

    let value = digits
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseValueError::InvalidNumber(raw.to_string()))?;

    Ok(if raw.starts_with('-') { -value } else { value })
}

/// Parses a component value that is either a bare number or a percentage of
/// `base`.
///
/// `"50%"` with a base of `255` yields `round(0.5 * 255) = 128`, while `"50"`
/// yields `50` regardless of the base.
///
/// # Errors
///
/// * `ParseValueError::InvalidNumber` - If the text (without `%`) is not a finite decimal
///   number
pub fn parse_value_or_percent(raw: &str, base: f64) -> Result<f64, ParseValueError> {
    let raw = raw.trim();

    if let Some(percent) = raw.strip_suffix('%') {
        let value = parse_number(percent.trim_end())?;
        Ok(round(value / 100.0 * base))
    } else {
        parse_number(raw)
    }
}

/// Encodes a byte as exactly two lowercase hex digits.
#[must_use]
pub fn byte_to_hex(value: u8) -> String {
    format!("{value:02x}")
}

/// Decodes a 1 or 2 digit hex string. A single digit is doubled, so `"7"`
/// decodes the same as `"77"`.
///
/// # Errors
///
/// * `ParseHexByteError::InvalidLength` - If the string is empty or longer than 2 characters
/// * `ParseHexByteError::InvalidCharacter` - If a non-hex character is encountered
pub fn hex_to_byte(hex: &str) -> Result<u8, ParseHexByteError> {
    let nibbles = hex
        .chars()
        .enumerate()
        .map(|(i, x)| match x {
            '0'..='9' => Ok(x as u8 - 48),
            'A'..='F' => Ok(x as u8 - 55),
            'a'..='f' => Ok(x as u8 - 87),
            _ => Err(ParseHexByteError::InvalidCharacter(i, x)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    match nibbles.as_slice() {
        [single] => Ok((single << 4) + single),
        [high, low] => Ok((high << 4) + low),
        _ => Err(ParseHexByteError::InvalidLength(nibbles.len())),
    }
}

/// Renders a number with a period as the decimal separator and no trailing
/// zeros, independent of the host locale.
#[must_use]
pub fn format_number(value: f64) -> String {
    // normalises negative zero
    let value = value + 0.0;
    format!("{value}")
}
