//! Errors raised while constructing a [`Color`](crate::Color).
//!
//! Only decoding can fail. Once a color exists every representation can be
//! derived from it, so none of the encoders return a `Result`.

use thiserror::Error;

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The reasons an input could not be turned into a color.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The shape of the input does not match any supported format.
    #[error("unsupported color format: {0}")]
    UnsupportedFormat(String),

    /// A hex color that is neither 3 nor 6 hex digits long.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// A string starting with `rgb` that is not a valid `rgb()`/`rgba()`.
    #[error("invalid CSS rgb color: {0}")]
    InvalidCssRgb(String),

    /// A string starting with `hsl` that is not a valid `hsl()`/`hsla()`.
    #[error("invalid CSS hsl color: {0}")]
    InvalidCssHsl(String),

    /// A name the named color resolver does not know about.
    #[error("unknown named color: {0}")]
    UnknownNamedColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_rejected_input() {
        assert_eq!(
            Error::InvalidHex("#abcd".to_string()).to_string(),
            "invalid hex color: #abcd"
        );
        assert_eq!(
            Error::UnknownNamedColor("notacolor".to_string()).to_string(),
            "unknown named color: notacolor"
        );
        assert_eq!(
            Error::UnsupportedFormat("boolean".to_string()).to_string(),
            "unsupported color format: boolean"
        );
    }
}
