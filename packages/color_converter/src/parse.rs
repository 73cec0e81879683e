//! Locating color literals in arbitrary text.
//!
//! Matching is ASCII case-insensitive. Function notations accept an optional
//! fourth (alpha) field even when the notation itself has no alpha slot, so
//! `rgb(1, 2, 3, 0.5)` is found when scanning for [`ColorNotation::Rgb`].

use std::{ops::Range, sync::LazyLock};

use regex::{Captures, Regex};
use thiserror::Error;

use crate::{
    math::{ParseHexByteError, ParseValueError, hex_to_byte, parse_value_or_percent},
    notation::ColorNotation,
    space::{ColorValue, Hsl, Rgb},
};

const FIELD: &str = r"\s*([0-9.]+%?)\s*";

fn function_regex(name: &str) -> Regex {
    let pattern = format!(r"(?i){name}\({FIELD},{FIELD},{FIELD}(?:,{FIELD})?\)");
    Regex::new(&pattern).expect("Invalid Regex")
}

static HEX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)#([0-9a-f]{1,2})([0-9a-f]{1,2})([0-9a-f]{1,2})").expect("Invalid Regex")
});
static RGB_REGEX: LazyLock<Regex> = LazyLock::new(|| function_regex("rgb"));
static RGBA_REGEX: LazyLock<Regex> = LazyLock::new(|| function_regex("rgba"));
static HSL_REGEX: LazyLock<Regex> = LazyLock::new(|| function_regex("hsl"));
static HSLA_REGEX: LazyLock<Regex> = LazyLock::new(|| function_regex("hsla"));

fn literal_regex(notation: ColorNotation) -> &'static Regex {
    match notation {
        ColorNotation::Hex => &HEX_REGEX,
        ColorNotation::Rgb => &RGB_REGEX,
        ColorNotation::Rgba => &RGBA_REGEX,
        ColorNotation::Hsl => &HSL_REGEX,
        ColorNotation::Hsla => &HSLA_REGEX,
    }
}

/// The component a malformed literal failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Component {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Lightness,
}

const RGB_COMPONENTS: [Component; 3] = [Component::Red, Component::Green, Component::Blue];
const HSL_COMPONENTS: [Component; 3] = [
    Component::Hue,
    Component::Saturation,
    Component::Lightness,
];

/// Errors that make a located literal unconvertible.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedLiteralError {
    /// A required field is not a number.
    #[error("Invalid {component} value: {source}")]
    InvalidNumber {
        component: Component,
        #[source]
        source: ParseValueError,
    },
    /// A hex group could not be decoded.
    #[error("Invalid {component} hex value: {source}")]
    InvalidHex {
        component: Component,
        #[source]
        source: ParseHexByteError,
    },
    /// A required field is outside of its allowed range.
    #[error("The {component} value {value} is out of range (max {max})")]
    OutOfRange {
        component: Component,
        value: f64,
        max: f64,
    },
}

/// A color literal located in a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorLiteral<'a> {
    /// The notation that was searched for.
    pub notation: ColorNotation,
    /// The exact matched text.
    pub text: &'a str,
    /// Byte range of [`Self::text`] in the source.
    pub span: Range<usize>,
    /// Raw text of the three primary fields.
    pub fields: [&'a str; 3],
    /// Raw text of the optional fourth field.
    pub alpha: Option<&'a str>,
}

/// Alpha used when a literal has no alpha field or a malformed one.
pub const OPAQUE_ALPHA: &str = "1";

fn is_valid_alpha(raw: &str) -> bool {
    raw.strip_suffix('%').map_or_else(
        || parse_value_or_percent(raw, 1.0).is_ok_and(|x| (0.0..=1.0).contains(&x)),
        |percent| {
            parse_value_or_percent(percent, 1.0).is_ok_and(|x| (0.0..=100.0).contains(&x))
        },
    )
}

impl<'a> ColorLiteral<'a> {
    fn from_captures(notation: ColorNotation, captures: &Captures<'a>) -> Option<Self> {
        let full = captures.get(0)?;
        let field = |i: usize| captures.get(i).map(|x| x.as_str());

        Some(Self {
            notation,
            text: full.as_str(),
            span: full.range(),
            fields: [field(1)?, field(2)?, field(3)?],
            alpha: field(4),
        })
    }

    /// The alpha text to render for this literal.
    ///
    /// Missing alpha is `1`. A malformed alpha field (not a number, or
    /// outside `0..=1` / `0%..=100%`) is also treated as `1`.
    #[must_use]
    pub fn alpha_text(&self) -> &'a str {
        match self.alpha {
            Some(alpha) if is_valid_alpha(alpha) => alpha,
            Some(alpha) => {
                log::debug!("Ignoring malformed alpha '{alpha}' in '{}'", self.text);
                OPAQUE_ALPHA
            }
            None => OPAQUE_ALPHA,
        }
    }

    /// Extracts the numeric components of the literal.
    ///
    /// Hue is an angle and is wrapped into `0..360`.
    ///
    /// # Errors
    ///
    /// * `MalformedLiteralError::InvalidHex` - If a hex group cannot be decoded
    /// * `MalformedLiteralError::InvalidNumber` - If a field is not a number
    /// * `MalformedLiteralError::OutOfRange` - If an RGB channel exceeds 255 or
    ///   saturation/lightness exceeds 100
    pub fn value(&self) -> Result<ColorValue, MalformedLiteralError> {
        match self.notation {
            ColorNotation::Hex => {
                let mut channels = [0.0; 3];
                for ((channel, raw), component) in
                    channels.iter_mut().zip(self.fields).zip(RGB_COMPONENTS)
                {
                    *channel = hex_to_byte(raw).map(f64::from).map_err(|source| {
                        MalformedLiteralError::InvalidHex { component, source }
                    })?;
                }
                let [r, g, b] = channels;
                Ok(Rgb::new(r, g, b).into())
            }
            ColorNotation::Rgb | ColorNotation::Rgba => {
                let [r, g, b] = self.components(RGB_COMPONENTS, [255.0; 3], [255.0; 3])?;
                Ok(Rgb::new(r, g, b).into())
            }
            ColorNotation::Hsl | ColorNotation::Hsla => {
                let [h, s, l] = self.components(
                    HSL_COMPONENTS,
                    [360.0, 100.0, 100.0],
                    [f64::INFINITY, 100.0, 100.0],
                )?;
                Ok(Hsl::new(h.rem_euclid(360.0), s, l).into())
            }
        }
    }

    fn components(
        &self,
        components: [Component; 3],
        bases: [f64; 3],
        maxima: [f64; 3],
    ) -> Result<[f64; 3], MalformedLiteralError> {
        let mut values = [0.0; 3];

        for (i, value) in values.iter_mut().enumerate() {
            let component = components[i];
            let parsed = parse_value_or_percent(self.fields[i], bases[i])
                .map_err(|source| MalformedLiteralError::InvalidNumber { component, source })?;

            if parsed > maxima[i] {
                return Err(MalformedLiteralError::OutOfRange {
                    component,
                    value: parsed,
                    max: maxima[i],
                });
            }

            *value = parsed;
        }

        Ok(values)
    }
}

/// Finds every non-overlapping literal of `notation` in `text`, left to right.
pub fn find_literals(
    text: &str,
    notation: ColorNotation,
) -> impl Iterator<Item = ColorLiteral<'_>> {
    literal_regex(notation)
        .captures_iter(text)
        .filter_map(move |captures| ColorLiteral::from_captures(notation, &captures))
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn literals(text: &str, notation: ColorNotation) -> Vec<ColorLiteral<'_>> {
        find_literals(text, notation).collect()
    }

    #[test_log::test]
    fn finds_full_and_short_hex_literals_in_order() {
        let text = "a { color: #3b5625; } b { color: #3B6; }";
        let found = literals(text, ColorNotation::Hex);

        assert_eq!(
            found,
            vec![
                ColorLiteral {
                    notation: ColorNotation::Hex,
                    text: "#3b5625",
                    span: 11..18,
                    fields: ["3b", "56", "25"],
                    alpha: None,
                },
                ColorLiteral {
                    notation: ColorNotation::Hex,
                    text: "#3B6",
                    span: 33..37,
                    fields: ["3", "B", "6"],
                    alpha: None,
                },
            ]
        );
    }

    #[test_log::test]
    fn finds_function_literals_with_loose_whitespace() {
        let found = literals("x: rgb( 59 ,86,  37 );", ColorNotation::Rgb);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "rgb( 59 ,86,  37 )");
        assert_eq!(found[0].fields, ["59", "86", "37"]);
        assert_eq!(found[0].alpha, None);
    }

    #[test_log::test]
    fn function_literals_capture_optional_alpha() {
        let found = literals("rgba(59, 86, 37, 0.5) rgba(1, 2, 3)", ColorNotation::Rgba);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].alpha, Some("0.5"));
        assert_eq!(found[1].alpha, None);
        assert_eq!(found[1].alpha_text(), "1");
    }

    #[test_log::test]
    fn function_matching_ignores_case_and_other_functions() {
        let text = "HSL(95, 40%, 24%) hsla(95, 40%, 24%, 1) rgb(1, 2, 3)";

        let found = literals(text, ColorNotation::Hsl);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "HSL(95, 40%, 24%)");
        assert_eq!(found[0].fields, ["95", "40%", "24%"]);

        assert_eq!(literals(text, ColorNotation::Hsla).len(), 1);
    }

    #[test_log::test]
    fn signed_or_spaced_functions_are_not_literals() {
        assert_eq!(literals("rgb(-1, 2, 3)", ColorNotation::Rgb), vec![]);
        assert_eq!(literals("rgb (1, 2, 3)", ColorNotation::Rgb), vec![]);
        assert_eq!(literals("rgb(1 2 3)", ColorNotation::Rgb), vec![]);
    }

    #[test_log::test]
    fn hex_value_decodes_short_groups() {
        let found = literals("#3b6", ColorNotation::Hex);

        assert_eq!(
            found[0].value(),
            Ok(ColorValue::Rgb(Rgb::new(51.0, 187.0, 102.0)))
        );
    }

    #[test_log::test]
    fn rgb_value_accepts_percentages() {
        let found = literals("rgb(100%, 50%, 0)", ColorNotation::Rgb);

        assert_eq!(
            found[0].value(),
            Ok(ColorValue::Rgb(Rgb::new(255.0, 128.0, 0.0)))
        );
    }

    #[test_log::test]
    fn hsl_value_wraps_hue_and_scales_percentages() {
        let found = literals("hsl(450, 40%, 24.6%)", ColorNotation::Hsl);

        assert_eq!(
            found[0].value(),
            Ok(ColorValue::Hsl(Hsl::new(90.0, 40.0, 25.0)))
        );
    }

    #[test_log::test]
    fn out_of_range_channels_are_malformed() {
        let found = literals("rgb(300, 0, 0)", ColorNotation::Rgb);

        assert_eq!(
            found[0].value(),
            Err(MalformedLiteralError::OutOfRange {
                component: Component::Red,
                value: 300.0,
                max: 255.0,
            })
        );

        let found = literals("hsl(0, 0%, 101%)", ColorNotation::Hsl);
        assert!(matches!(
            found[0].value(),
            Err(MalformedLiteralError::OutOfRange {
                component: Component::Lightness,
                ..
            })
        ));
    }

    #[test_log::test]
    fn non_numeric_fields_are_malformed() {
        let found = literals("rgb(1.2.3, 0, 0)", ColorNotation::Rgb);

        assert_eq!(
            found[0].value(),
            Err(MalformedLiteralError::InvalidNumber {
                component: Component::Red,
                source: ParseValueError::InvalidNumber("1.2.3".to_string()),
            })
        );
    }

    #[test_log::test]
    fn unrepresentable_hue_is_malformed() {
        let text = format!("hsl(1{}, 50%, 50%)", "0".repeat(400));
        let found = literals(&text, ColorNotation::Hsl);

        assert!(matches!(
            found[0].value(),
            Err(MalformedLiteralError::InvalidNumber {
                component: Component::Hue,
                ..
            })
        ));
    }

    #[test_log::test]
    fn malformed_or_out_of_range_alpha_defaults_to_opaque() {
        let found = literals(
            "rgba(1, 2, 3, 1.2.3) rgba(1, 2, 3, 2) rgba(1, 2, 3, 50%) rgba(1, 2, 3, .25)",
            ColorNotation::Rgba,
        );

        let alphas = found.iter().map(ColorLiteral::alpha_text).collect::<Vec<_>>();
        assert_eq!(alphas, vec!["1", "1", "50%", ".25"]);
    }
}
