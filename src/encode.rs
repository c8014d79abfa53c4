//! Encoders deriving each supported representation from a [`Color`].
//!
//! None of these can fail and none of them change the color, so they can be
//! called any number of times in any order.

use std::fmt;

use crate::{
    color::{Color, Component, Components},
    convert::rgb_to_rounded_hsl,
    hsl::HslRecord,
    math::to_byte,
    rgb::RgbaRecord,
};

impl Color {
    /// The red, green and blue channels scaled to bytes.
    fn bytes(&self) -> [u8; 3] {
        [to_byte(self.red()), to_byte(self.green()), to_byte(self.blue())]
    }

    /// Rounded hue in degrees and saturation and lightness percentages,
    /// derived from the byte scaled channels.
    fn hsl(&self) -> Components {
        let [r, g, b] = self.bytes();
        rgb_to_rounded_hsl(&Components(r as Component, g as Component, b as Component))
    }

    /// Return the color packed into a 24-bit `0xRRGGBB` integer. Alpha is
    /// dropped.
    pub fn as_integer(&self) -> u32 {
        let [r, g, b] = self.bytes();
        (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    /// Return the color as a lowercase `#rrggbb` string. Alpha is dropped.
    pub fn as_hex(&self) -> String {
        let [r, g, b] = self.bytes();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Return the color as `rgb(r, g, b)`, or `rgba(r, g, b, a)` when it is
    /// not fully opaque.
    pub fn as_css_rgb_string(&self) -> String {
        let [r, g, b] = self.bytes();
        if self.alpha() == 1.0 {
            format!("rgb({}, {}, {})", r, g, b)
        } else {
            format!("rgba({}, {}, {}, {:.3})", r, g, b, self.alpha())
        }
    }

    /// Return the color as `hsl(h, s%, l%)`, or `hsla(h, s%, l%, a)` when it
    /// is not fully opaque.
    pub fn as_css_hsl_string(&self) -> String {
        let Components(h, s, l) = self.hsl();
        if self.alpha() == 1.0 {
            format!("hsl({}, {}%, {}%)", h, s, l)
        } else {
            format!("hsla({}, {}%, {}%, {:.3})", h, s, l, self.alpha())
        }
    }

    /// Return `[r, g, b, a]` with each channel in [0, 1].
    pub fn as_float_vector(&self) -> [Component; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    /// Return the color as a record with every channel rounded to a byte.
    pub fn as_rgba_record(&self) -> RgbaRecord {
        let [r, g, b] = self.bytes();
        RgbaRecord::new(r, g, b, to_byte(self.alpha()))
    }

    /// Return the color in HSL notation. Alpha is not rounded.
    pub fn as_hsl_record(&self) -> HslRecord {
        let Components(h, s, l) = self.hsl();
        HslRecord::new(h, s, l, self.alpha())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_css_rgb_string())
    }
}
