//! Convert CSS color literals in a block of text from one notation to another.
//!
//! Supported notations are `hex`, `rgb`, `rgba`, `hsl` and `hsla`. Every literal
//! of the source notation is located, converted through the RGB or HSL color
//! space as needed, and replaced in place. All other text is copied verbatim.
//!
//! # Examples
//!
//! ```rust
//! use csscolor_converter::{ColorNotation, ConversionOptions, convert};
//!
//! let css = "a { color: #3b5625; }";
//! let converted = convert(
//!     css,
//!     ColorNotation::Hex,
//!     ColorNotation::Rgb,
//!     &ConversionOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(converted, "a { color: rgb(59, 86, 37); }");
//! ```
//!
//! Dropping an alpha channel must be confirmed explicitly:
//!
//! ```rust
//! use csscolor_converter::{
//!     ColorNotation, Confirmation, ConversionError, ConversionOptions, convert, convert_with,
//! };
//!
//! let css = "rgba(59, 86, 37, 0.5)";
//! let options = ConversionOptions::default();
//!
//! assert!(matches!(
//!     convert(css, ColorNotation::Rgba, ColorNotation::Hex, &options),
//!     Err(ConversionError::AlphaLossConfirmationRequired { .. })
//! ));
//!
//! let converted = convert_with(
//!     css,
//!     ColorNotation::Rgba,
//!     ColorNotation::Hex,
//!     &options,
//!     Confirmation::Granted,
//! )
//! .unwrap();
//! assert_eq!(converted, "#3b5625");
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error;

/// Property testing support via proptest.
///
/// Provides [`Arbitrary`] implementations for the public value types,
/// enabling property-based testing with the [`proptest`] crate.
///
/// [`Arbitrary`]: proptest::arbitrary::Arbitrary
/// [`proptest`]: https://docs.rs/proptest/latest/proptest/
#[cfg(feature = "arb")]
pub mod arb;

pub mod format;
pub mod math;
pub mod notation;
pub mod parse;
pub mod space;

pub use notation::{ColorFamily, ColorNotation, ParseNotationError};
pub use parse::{ColorLiteral, MalformedLiteralError, find_literals};
pub use space::{ColorValue, Hsl, Rgb, hsl_to_rgb, rgb_to_hsl};

/// Number of fractional digits kept when [`ConversionOptions::use_decimals`]
/// is set.
pub const DECIMAL_PLACES: u32 = 2;

/// Options controlling how converted literals are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ConversionOptions {
    /// Render RGB channels as `0%..100%` instead of `0..255`.
    pub use_percent_range: bool,
    /// Keep [`DECIMAL_PLACES`] fractional digits in HSL and percentage output
    /// instead of flooring to an integer.
    pub use_decimals: bool,
}

impl ConversionOptions {
    #[must_use]
    pub const fn new(use_percent_range: bool, use_decimals: bool) -> Self {
        Self {
            use_percent_range,
            use_decimals,
        }
    }

    /// Number of fractional digits to render.
    #[must_use]
    pub const fn decimals(&self) -> u32 {
        if self.use_decimals { DECIMAL_PLACES } else { 0 }
    }
}

/// Whether the caller has accepted a conversion that drops the alpha channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Confirmation {
    /// Lossy conversions are refused with
    /// [`ConversionError::AlphaLossConfirmationRequired`].
    #[default]
    Required,
    /// Lossy conversions proceed.
    Granted,
}

#[derive(Debug, Error)]
pub enum ConversionError {
    /// Converting `from` to `to` drops the alpha channel and the caller has
    /// not confirmed it. No literal was modified.
    #[error("Converting {from} to {to} loses the alpha channel and must be confirmed")]
    AlphaLossConfirmationRequired {
        from: ColorNotation,
        to: ColorNotation,
    },
}

/// A literal that was left unmodified because it could not be converted.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLiteral {
    pub text: String,
    pub span: std::ops::Range<usize>,
    pub reason: MalformedLiteralError,
}

/// The outcome of converting a text.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// The converted text.
    pub text: String,
    /// Number of literals that were replaced.
    pub replaced: usize,
    /// Literals that were left as they were.
    pub skipped: Vec<SkippedLiteral>,
}

impl Conversion {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            replaced: 0,
            skipped: vec![],
        }
    }
}

/// A hint about a notation pair, shown before converting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Advisory {
    #[strum(to_string = "Warning - alpha channel will be lost!")]
    AlphaWillBeLost,
    #[strum(to_string = "Use decimals for better precision!")]
    UseDecimalsForPrecision,
}

/// Returns the hint to show for converting `from` to `to` with `options`, if
/// any. Alpha loss takes precedence over the precision hint.
#[must_use]
pub const fn advisory(
    from: ColorNotation,
    to: ColorNotation,
    options: &ConversionOptions,
) -> Option<Advisory> {
    if from.loses_alpha_to(to) {
        Some(Advisory::AlphaWillBeLost)
    } else if matches!(from.family(), ColorFamily::Rgb)
        && matches!(to.family(), ColorFamily::Hsl)
        && !options.use_decimals
    {
        Some(Advisory::UseDecimalsForPrecision)
    } else {
        None
    }
}

/// Converts a single located literal to `to`.
///
/// # Errors
///
/// * If the literal has a non-numeric or out-of-range component
pub fn convert_literal(
    literal: &ColorLiteral<'_>,
    to: ColorNotation,
    options: &ConversionOptions,
) -> Result<String, MalformedLiteralError> {
    let value = literal.value()?;
    let converted = value.into_family(to.family(), options.decimals());

    if converted.family() != value.family() {
        log::trace!("convert_literal: {value:?} => {converted:?}");
    }

    Ok(format::format_color(
        &converted,
        literal.alpha_text(),
        to,
        options,
    ))
}

/// Converts every `from` literal in `text` to `to` and reports what was done.
///
/// Converting hex to hex returns the text unchanged. Any other notation
/// converted to itself is re-rendered with `options`, so `rgb(59, 86, 37)`
/// becomes `rgb(23%, 34%, 15%)` with [`ConversionOptions::use_percent_range`].
/// Literals that cannot be converted are left as they are and listed in
/// [`Conversion::skipped`].
///
/// # Errors
///
/// * `ConversionError::AlphaLossConfirmationRequired` - If `from` has an alpha
///   channel, `to` does not, and `confirmation` is [`Confirmation::Required`]
pub fn convert_detailed(
    text: &str,
    from: ColorNotation,
    to: ColorNotation,
    options: &ConversionOptions,
    confirmation: Confirmation,
) -> Result<Conversion, ConversionError> {
    if from == ColorNotation::Hex && to == ColorNotation::Hex {
        log::debug!("convert: hex to hex, nothing to do");
        return Ok(Conversion::unchanged(text));
    }

    if from.loses_alpha_to(to) {
        if confirmation == Confirmation::Required {
            return Err(ConversionError::AlphaLossConfirmationRequired { from, to });
        }
        log::debug!("convert: dropping alpha channel converting {from} to {to}");
    }

    let mut output = String::with_capacity(text.len());
    let mut replaced = 0;
    let mut skipped = vec![];
    let mut last = 0;

    for literal in find_literals(text, from) {
        output.push_str(&text[last..literal.span.start]);
        last = literal.span.end;

        match convert_literal(&literal, to, options) {
            Ok(converted) => {
                log::trace!("convert: '{}' => '{converted}'", literal.text);
                output.push_str(&converted);
                replaced += 1;
            }
            Err(e) => {
                log::warn!("Skipping malformed literal '{}': {e}", literal.text);
                output.push_str(literal.text);
                skipped.push(SkippedLiteral {
                    text: literal.text.to_string(),
                    span: literal.span,
                    reason: e,
                });
            }
        }
    }

    output.push_str(&text[last..]);

    log::debug!(
        "convert: replaced {replaced} {from} literal(s) with {to} ({} skipped)",
        skipped.len()
    );

    Ok(Conversion {
        text: output,
        replaced,
        skipped,
    })
}

/// Converts every `from` literal in `text` to `to`.
///
/// # Errors
///
/// * `ConversionError::AlphaLossConfirmationRequired` - If `from` has an alpha
///   channel, `to` does not, and `confirmation` is [`Confirmation::Required`]
pub fn convert_with(
    text: &str,
    from: ColorNotation,
    to: ColorNotation,
    options: &ConversionOptions,
    confirmation: Confirmation,
) -> Result<String, ConversionError> {
    Ok(convert_detailed(text, from, to, options, confirmation)?.text)
}

/// Converts every `from` literal in `text` to `to`, refusing conversions that
/// would drop an alpha channel.
///
/// # Errors
///
/// * `ConversionError::AlphaLossConfirmationRequired` - If `from` has an alpha
///   channel and `to` does not
pub fn convert(
    text: &str,
    from: ColorNotation,
    to: ColorNotation,
    options: &ConversionOptions,
) -> Result<String, ConversionError> {
    convert_with(text, from, to, options, Confirmation::Required)
}
