//! RGB ↔ HSL conversion.
//!
//! RGB channels are in `0..=255`, hue is in degrees (`0..360`) and saturation
//! and lightness are percentages (`0..=100`).

use crate::{
    math::{floor_float, max, min, round},
    notation::ColorFamily,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// A color in either space, as extracted from a literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    Rgb(Rgb),
    Hsl(Hsl),
}

impl Rgb {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// See [`rgb_to_hsl`].
    #[must_use]
    pub fn to_hsl(self, decimals: u32) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b, decimals)
    }
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// See [`hsl_to_rgb`].
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }
}

impl ColorValue {
    #[must_use]
    pub const fn family(&self) -> ColorFamily {
        match self {
            Self::Rgb(_) => ColorFamily::Rgb,
            Self::Hsl(_) => ColorFamily::Hsl,
        }
    }

    /// Converts the value into `family`. Values already in `family` are
    /// returned unchanged.
    #[must_use]
    pub fn into_family(self, family: ColorFamily, decimals: u32) -> Self {
        match (self, family) {
            (Self::Rgb(rgb), ColorFamily::Hsl) => Self::Hsl(rgb.to_hsl(decimals)),
            (Self::Hsl(hsl), ColorFamily::Rgb) => Self::Rgb(hsl.to_rgb()),
            (value, _) => value,
        }
    }
}

impl From<Rgb> for ColorValue {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Hsl> for ColorValue {
    fn from(value: Hsl) -> Self {
        Self::Hsl(value)
    }
}

/// Converts RGB channels in `0..=255` to HSL.
///
/// Hue, saturation and lightness are floored to `decimals` fractional digits.
#[must_use]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64, decimals: u32) -> Hsl {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let min = min(r, min(g, b));
    let max = max(r, max(g, b));
    let d = max - min;
    let l = (max + min) / 2.0;

    #[allow(clippy::float_cmp)]
    let (h, s) = if d == 0.0 {
        (0.0, 0.0)
    } else {
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            if g < b {
                (g - b) / d + 6.0
            } else {
                (g - b) / d
            }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h / 6.0, s)
    };

    Hsl {
        h: floor_float(h * 360.0, decimals),
        s: floor_float(s * 100.0, decimals),
        l: floor_float(l * 100.0, decimals),
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        (q - p).mul_add(6.0 * t, p)
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
    } else {
        p
    }
}

/// Converts HSL (hue in degrees, saturation and lightness in percent) to RGB
/// channels in `0..=255`.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    #[allow(clippy::float_cmp)]
    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l.mul_add(-s, l + s)
        };
        let p = 2.0f64.mul_add(l, -q);

        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb {
        r: round(r * 255.0),
        g: round(g * 255.0),
        b: round(b * 255.0),
    }
}
