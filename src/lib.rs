//! swatch normalizes a color given in any of several common representations
//! (hex, CSS `rgb()`/`hsl()`, color names, packed integers, float vectors
//! and channel records) into four unit range channels, and derives any of
//! those representations back from it.
//!
//! ```rust
//! use swatch::Color;
//! let c = Color::new("chocolate").unwrap();
//! assert_eq!(c.as_hex(), "#d2691e");
//! assert_eq!(c.as_css_hsl_string(), "hsl(25, 75%, 47%)");
//! ```

#![deny(missing_docs)]

mod color;
pub mod convert;
pub mod decode;
mod encode;
mod error;
mod hsl;
mod input;
#[cfg(feature = "json")]
mod json;
pub mod math;
mod named;
mod rgb;
#[cfg(test)]
mod test;

pub use color::{Color, Component, Components, Format};
pub use error::{Error, Result};
pub use hsl::HslRecord;
pub use input::{Input, Record, RecordKeys, Value};
pub use named::{CssNamedColors, ResolveNamedColor};
pub use rgb::RgbaRecord;
