//! A [`Color`] holds a color that was specified in any of the supported
//! formats, normalized to four channels in the range [0, 1].

use std::str::FromStr;

use crate::{
    decode,
    error::{Error, Result},
    input::Input,
    math::clamp01,
    named::{CssNamedColors, ResolveNamedColor},
};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all channels are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

/// Represent the three color channels of a color, without alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The formats a color can be decoded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `#rgb` or `#rrggbb`.
    Hex,
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    CssRgb,
    /// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
    CssHsl,
    /// A color keyword such as `rebeccapurple`.
    Named,
    /// A 24-bit packed `0xRRGGBB` integer.
    Integer,
    /// Three or four unit range floats.
    FloatVector,
    /// A record with red, green and blue channels in [0, 255].
    RgbaRecord,
    /// A record with hue, saturation and lightness.
    HslRecord,
    /// No input at all, which is opaque black.
    Default,
}

/// A color normalized to red, green, blue and alpha channels, each in the
/// range [0, 1].
///
/// A color is created once from a single input and never changes afterwards.
/// Every `as_*` method derives a representation from the stored channels
/// without parsing anything again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    components: Components,
    alpha: Component,
}

impl Color {
    /// Create a new [`Color`] from any supported input, resolving color names
    /// with the CSS named color table.
    /// ```rust
    /// use swatch::Color;
    /// let c = Color::new("rgba(255, 0, 0, 0.5)").unwrap();
    /// assert_eq!(c.as_hex(), "#ff0000");
    /// ```
    pub fn new(input: impl Into<Input>) -> Result<Self> {
        Self::with_resolver(input, &CssNamedColors)
    }

    /// Create a new [`Color`] from any supported input, resolving color names
    /// with the given resolver.
    pub fn with_resolver(
        input: impl Into<Input>,
        resolver: &impl ResolveNamedColor,
    ) -> Result<Self> {
        decode::decode(&input.into(), resolver)
    }

    /// Create a color from unit range channels, clamping each into [0, 1].
    pub(crate) fn from_channels(components: Components, alpha: Component) -> Self {
        Self {
            components: components.map(clamp01),
            alpha: clamp01(alpha),
        }
    }

    /// Return the red channel in [0, 1].
    pub fn red(&self) -> Component {
        self.components.0
    }

    /// Return the green channel in [0, 1].
    pub fn green(&self) -> Component {
        self.components.1
    }

    /// Return the blue channel in [0, 1].
    pub fn blue(&self) -> Component {
        self.components.2
    }

    /// Return the alpha channel in [0, 1], where 1 is fully opaque.
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    /// Return the red, green and blue channels.
    pub fn components(&self) -> Components {
        self.components
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::from_channels(Components(0.0, 0.0, 0.0), 1.0)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<Input> for Color {
    type Error = Error;

    fn try_from(input: Input) -> Result<Self> {
        Self::new(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_clamped_on_creation() {
        let c = Color::from_channels(Components(-1.0, 0.5, 3.0), 7.0);
        assert_eq!(c.components(), Components(0.0, 0.5, 1.0));
        assert_eq!(c.alpha(), 1.0);

        let c = Color::from_channels(Components(Component::NAN, 0.0, 0.0), -2.0);
        assert_eq!(c.red(), 0.0);
        assert_eq!(c.alpha(), 0.0);
    }

    #[test]
    fn default_is_opaque_black() {
        let c = Color::default();
        assert_eq!(c.red(), 0.0);
        assert_eq!(c.green(), 0.0);
        assert_eq!(c.blue(), 0.0);
        assert_eq!(c.alpha(), 1.0);
        assert_eq!(Color::new(Input::None), Ok(c));
        assert_eq!(Color::new(None::<&str>), Ok(c));
    }

    #[test]
    fn parse_from_str() {
        let c: Color = "#00ff00".parse().unwrap();
        assert_eq!(c.components(), Components(0.0, 1.0, 0.0));

        let err = "rgb(oops)".parse::<Color>().unwrap_err();
        assert!(matches!(err, Error::InvalidCssRgb(_)));
    }

    #[test]
    fn try_from_input() {
        let c = Color::try_from(Input::Integer(0x0000ff)).unwrap();
        assert_eq!(c.components(), Components(0.0, 0.0, 1.0));
    }

    #[test]
    fn map_components() {
        let c = Components(0.1, 0.2, 0.3).map(|v| v * 2.0);
        assert_eq!(c, Components(0.2, 0.4, 0.6));
    }
}
