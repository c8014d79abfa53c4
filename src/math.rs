//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// Replace a NaN value with zero.
pub fn normalize<T: Float>(value: T) -> T {
    if value.is_nan() {
        T::zero()
    } else {
        value
    }
}

/// Clamp a value into the closed range [0, 1]. NaN maps to 0.
pub fn clamp01<T: Float>(value: T) -> T {
    normalize(value).max(T::zero()).min(T::one())
}

/// Clamp an alpha value into [0, 1]. Unlike [`clamp01`], a value that is not
/// a number is fully opaque.
pub fn normalize_alpha<T: Float>(value: T) -> T {
    if value.is_nan() {
        T::one()
    } else {
        clamp01(value)
    }
}

/// Wrap a hue in degrees into [0, 360).
pub fn normalize_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }

    let hue = ((hue % 360.0) + 360.0) % 360.0;
    // Tiny negative hues can land exactly on 360 after the addition.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Scale a unit range value to the nearest byte. Halves round up.
pub fn to_byte(value: Component) -> u8 {
    (clamp01(f64::from(value)) * 255.0).round() as u8
}
