//! The five CSS color notations understood by the converter.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Error returned when a notation name is not one of `hex`, `rgb`, `rgba`,
/// `hsl` or `hsla`.
pub type ParseNotationError = strum::ParseError;

/// The color space a notation stores its components in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    /// Red, green and blue channels in `0..=255`.
    Rgb,
    /// Hue in degrees, saturation and lightness in percent.
    Hsl,
}

/// A CSS color notation.
///
/// Parses from and displays as the lowercase CSS name. Parsing ignores ASCII
/// case, so `"RGBA"` parses as [`ColorNotation::Rgba`].
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumIter, EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorNotation {
    /// `#rrggbb` or `#rgb`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, a)`
    Rgba,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsla(h, s%, l%, a)`
    Hsla,
}

impl ColorNotation {
    #[must_use]
    pub const fn family(self) -> ColorFamily {
        match self {
            Self::Hex | Self::Rgb | Self::Rgba => ColorFamily::Rgb,
            Self::Hsl | Self::Hsla => ColorFamily::Hsl,
        }
    }

    /// Whether the notation carries an alpha slot.
    #[must_use]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba | Self::Hsla)
    }

    /// Number of fields the notation renders.
    #[must_use]
    pub const fn field_count(self) -> usize {
        if self.has_alpha() { 4 } else { 3 }
    }

    /// Whether converting from `self` to `target` drops the alpha channel.
    #[must_use]
    pub const fn loses_alpha_to(self, target: Self) -> bool {
        self.has_alpha() && !target.has_alpha()
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr as _;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator as _;

    use super::*;

    #[test_log::test]
    fn notation_names_round_trip_through_display() {
        for notation in ColorNotation::iter() {
            assert_eq!(ColorNotation::from_str(&notation.to_string()), Ok(notation));
        }
    }

    #[test_log::test]
    fn notation_parsing_ignores_case() {
        assert_eq!(ColorNotation::from_str("HSLA"), Ok(ColorNotation::Hsla));
        assert_eq!(ColorNotation::from_str("Hex"), Ok(ColorNotation::Hex));
        assert!(ColorNotation::from_str("hsv").is_err());
    }

    #[test_log::test]
    fn display_uses_the_css_function_name() {
        assert_eq!(ColorNotation::Rgba.to_string(), "rgba");
        assert_eq!(ColorNotation::Hsl.as_ref(), "hsl");
    }

    #[test_log::test]
    fn families_group_hex_with_rgb() {
        assert_eq!(ColorNotation::Hex.family(), ColorFamily::Rgb);
        assert_eq!(ColorNotation::Rgba.family(), ColorFamily::Rgb);
        assert_eq!(ColorNotation::Hsla.family(), ColorFamily::Hsl);
    }

    #[test_log::test]
    fn only_alpha_variants_have_four_fields() {
        assert_eq!(ColorNotation::Hex.field_count(), 3);
        assert_eq!(ColorNotation::Rgb.field_count(), 3);
        assert_eq!(ColorNotation::Rgba.field_count(), 4);
        assert_eq!(ColorNotation::Hsla.field_count(), 4);
    }

    #[test_log::test]
    fn alpha_is_lost_only_when_leaving_an_alpha_notation() {
        assert!(ColorNotation::Rgba.loses_alpha_to(ColorNotation::Hex));
        assert!(ColorNotation::Hsla.loses_alpha_to(ColorNotation::Rgb));
        assert!(!ColorNotation::Rgba.loses_alpha_to(ColorNotation::Hsla));
        assert!(!ColorNotation::Rgb.loses_alpha_to(ColorNotation::Hex));
    }
}
