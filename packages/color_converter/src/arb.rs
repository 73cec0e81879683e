use proptest::{prelude::*, sample::select};
use strum::IntoEnumIterator as _;

use crate::{ColorNotation, ConversionOptions, Hsl, Rgb};

/// Picks any of the five notations.
impl Arbitrary for ColorNotation {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        select(Self::iter().collect::<Vec<_>>()).boxed()
    }
}

impl Arbitrary for ConversionOptions {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        (any::<bool>(), any::<bool>())
            .prop_map(|(use_percent_range, use_decimals)| {
                Self::new(use_percent_range, use_decimals)
            })
            .boxed()
    }
}

/// Generates whole-numbered channels, as found in hex literals.
impl Arbitrary for Rgb {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        (any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(r, g, b)| Self::new(f64::from(r), f64::from(g), f64::from(b)))
            .boxed()
    }
}

/// Generates hue in `0..360` and saturation and lightness in `0..=100`, with
/// up to two fractional digits.
impl Arbitrary for Hsl {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        (0u32..36_000, 0u32..=10_000, 0u32..=10_000)
            .prop_map(|(h, s, l)| {
                Self::new(
                    f64::from(h) / 100.0,
                    f64::from(s) / 100.0,
                    f64::from(l) / 100.0,
                )
            })
            .boxed()
    }
}
