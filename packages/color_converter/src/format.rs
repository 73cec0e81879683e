//! Rendering color values as CSS literals.

use crate::{
    ConversionOptions,
    math::{byte_to_hex, floor_float, format_number, round, round_float},
    notation::ColorNotation,
    space::{ColorValue, Hsl, Rgb},
};

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_byte(channel: f64) -> u8 {
    round(channel).clamp(0.0, 255.0) as u8
}

fn rgb_channel(channel: f64, options: &ConversionOptions) -> String {
    if options.use_percent_range {
        let percent = round_float(channel / 255.0 * 100.0, options.decimals());
        format!("{}%", format_number(percent))
    } else {
        format_number(round(channel))
    }
}

fn hex(rgb: &Rgb) -> String {
    format!(
        "#{}{}{}",
        byte_to_hex(channel_byte(rgb.r)),
        byte_to_hex(channel_byte(rgb.g)),
        byte_to_hex(channel_byte(rgb.b)),
    )
}

fn rgb_args(rgb: &Rgb, options: &ConversionOptions) -> String {
    format!(
        "{}, {}, {}",
        rgb_channel(rgb.r, options),
        rgb_channel(rgb.g, options),
        rgb_channel(rgb.b, options),
    )
}

fn hsl_args(hsl: &Hsl, options: &ConversionOptions) -> String {
    let decimals = options.decimals();

    format!(
        "{}, {}%, {}%",
        format_number(floor_float(hsl.h, decimals)),
        format_number(floor_float(hsl.s, decimals)),
        format_number(floor_float(hsl.l, decimals)),
    )
}

/// Renders `value` in the syntax of `notation`.
///
/// `alpha` is written verbatim by `rgba` and `hsla` and dropped by the other
/// notations. A value in the wrong color space for `notation` is converted
/// first.
#[must_use]
pub fn format_color(
    value: &ColorValue,
    alpha: &str,
    notation: ColorNotation,
    options: &ConversionOptions,
) -> String {
    match (notation, value) {
        (ColorNotation::Hex, ColorValue::Rgb(rgb)) => hex(rgb),
        (ColorNotation::Rgb, ColorValue::Rgb(rgb)) => format!("rgb({})", rgb_args(rgb, options)),
        (ColorNotation::Rgba, ColorValue::Rgb(rgb)) => {
            format!("rgba({}, {alpha})", rgb_args(rgb, options))
        }
        (ColorNotation::Hsl, ColorValue::Hsl(hsl)) => format!("hsl({})", hsl_args(hsl, options)),
        (ColorNotation::Hsla, ColorValue::Hsl(hsl)) => {
            format!("hsla({}, {alpha})", hsl_args(hsl, options))
        }
        (notation, value) => {
            let value = value.into_family(notation.family(), options.decimals());
            format_color(&value, alpha, notation, options)
        }
    }
}
