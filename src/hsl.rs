//! A color as a record in the HSL notation.

use crate::Component;

swatch_macros::gen_record! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct HslRecord {
        /// The hue in degrees.
        h: Component,
        /// The saturation as a percentage.
        s: Component,
        /// The lightness as a percentage.
        l: Component,
        /// The alpha channel in [0, 1].
        a: Component,
    }
}
