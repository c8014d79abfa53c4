//! Conversion between the RGB and HSL notations of the sRGB color space.
//!
//! Both directions work on byte scaled RGB, [0, 255] per channel, with the
//! hue in degrees and saturation and lightness as percentages.
//!
//! The math and rounding run in `f64` whatever [`Component`] is, so values
//! that land exactly on a half round the same way with or without the `f64`
//! feature.
//!
//! NOTE: [`rgb_to_hsl`] does not round its result. Rounding HSL to whole
//!       numbers before converting back to RGB can move a channel by up to 5.

use crate::{
    color::{Component, Components},
    math::{clamp01, normalize, normalize_hue},
};

fn widen(from: &Components) -> [f64; 3] {
    [f64::from(from.0), f64::from(from.1), f64::from(from.2)]
}

fn narrow([a, b, c]: [f64; 3]) -> Components {
    Components(a as Component, b as Component, c as Component)
}

fn hsl_from_rgb(from: &Components) -> [f64; 3] {
    let [red, green, blue] = widen(from).map(|v| normalize(v) / 255.0);

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;

    let lightness = (max + min) / 2.0;

    if delta == 0.0 {
        return [0.0, 0.0, lightness * 100.0];
    }

    let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

    let hue = 60.0
        * if max == red {
            ((green - blue) / delta) % 6.0
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };

    [hue, saturation * 100.0, lightness * 100.0]
}

/// Convert from RGB notation to HSL notation.
/// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
pub fn rgb_to_hsl(from: &Components) -> Components {
    narrow(hsl_from_rgb(from))
}

/// Convert from RGB notation to HSL notation rounded to whole degrees and
/// percentages. Halves round away from zero.
pub fn rgb_to_rounded_hsl(from: &Components) -> Components {
    narrow(hsl_from_rgb(from).map(f64::round))
}

/// Convert from HSL notation to RGB notation. The hue wraps around, the
/// saturation and lightness are clamped and the result is rounded to whole
/// bytes.
/// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
pub fn hsl_to_rgb(from: &Components) -> Components {
    let [hue, saturation, lightness] = widen(from);
    let hue = normalize_hue(hue);
    let saturation = clamp01(saturation / 100.0);
    let lightness = clamp01(lightness / 100.0);

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = lightness - chroma / 2.0;

    let rgb = if hue < 60.0 {
        [chroma, x, 0.0]
    } else if hue < 120.0 {
        [x, chroma, 0.0]
    } else if hue < 180.0 {
        [0.0, chroma, x]
    } else if hue < 240.0 {
        [0.0, x, chroma]
    } else if hue < 300.0 {
        [x, 0.0, chroma]
    } else {
        [chroma, 0.0, x]
    };

    narrow(rgb.map(|v| ((v + m) * 255.0).round().clamp(0.0, 255.0)))
}
