//! Decoders for each supported [`Format`] and the dispatcher that picks one.
//!
//! Malformed strings and shapes are errors. Out of range numbers are not,
//! they are clamped. Alpha is the exception to both: an alpha that is not a
//! number is silently treated as fully opaque.

use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use crate::{
    color::{Color, Component, Components, Format},
    convert::hsl_to_rgb,
    error::{Error, Result},
    input::{Input, Record, RecordKeys, Value},
    math::normalize_alpha,
    named::ResolveNamedColor,
};

/// Matches `rgb(...)` and `rgba(...)`, capturing the argument list.
static CSS_RGB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rgba?\(([^()]*)\)$").expect("valid regex"));

/// Matches `hsl(...)` and `hsla(...)`, capturing the argument list.
static CSS_HSL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^hsla?\(([^()]*)\)$").expect("valid regex"));

/// Decode any input into a color.
pub(crate) fn decode(input: &Input, resolver: &impl ResolveNamedColor) -> Result<Color> {
    let format = input.classify()?;
    trace!("decoding {} as {:?}", input.shape(), format);

    match input {
        Input::Text(text) => {
            let text = text.trim().to_lowercase();
            match format {
                Format::Hex => decode_hex(&text),
                Format::CssRgb => decode_css_rgb(&text),
                Format::CssHsl => decode_css_hsl(&text),
                _ => decode_named(&text, resolver),
            }
        }
        Input::Integer(value) => Ok(decode_integer(*value)),
        Input::Vector(values) => decode_float_vector(values),
        Input::Record(record) => match format {
            Format::RgbaRecord => Ok(decode_rgba_record(record)),
            _ => Ok(decode_hsl_record(record)),
        },
        Input::None => Ok(Color::default()),
    }
}

/// Create a color from byte scaled RGB and a unit range alpha.
fn from_bytes(rgb: Components, alpha: Component) -> Color {
    Color::from_channels(rgb.map(|v| v / 255.0), alpha)
}

/// Normalize an optional record or argument alpha. `scale` is the value that
/// means fully opaque.
fn alpha_from_value(value: Option<&Value>, scale: Component) -> Component {
    let Some(value) = value else {
        return 1.0;
    };

    let alpha = value.to_number() / scale;
    if alpha.is_nan() {
        debug!("alpha {:?} is not a number, using fully opaque", value);
    }
    normalize_alpha(alpha)
}

/// Decode `#rgb`, `#rrggbb` or the same without the `#`.
pub fn decode_hex(text: &str) -> Result<Color> {
    let invalid = || Error::InvalidHex(text.to_string());

    let hex = text.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let byte = |digits: &str| {
        u8::from_str_radix(digits, 16)
            .map(|v| v as Component)
            .map_err(|_| invalid())
    };

    let rgb = match hex.len() {
        3 => Components(
            byte(&hex[0..1].repeat(2))?,
            byte(&hex[1..2].repeat(2))?,
            byte(&hex[2..3].repeat(2))?,
        ),
        6 => Components(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?),
        _ => return Err(invalid()),
    };

    Ok(from_bytes(rgb, 1.0))
}

/// Split the argument list of a CSS color function into three strict
/// channel values and an optional alpha.
fn css_arguments<'a>(re: &Regex, text: &'a str) -> Option<(Vec<&'a str>, Option<&'a str>)> {
    let arguments = re.captures(text)?.get(1)?.as_str();
    let mut arguments = arguments.split(',').map(str::trim).collect::<Vec<_>>();

    let alpha = match arguments.len() {
        3 => None,
        4 => arguments.pop(),
        _ => return None,
    };

    Some((arguments, alpha))
}

/// Parse a strict numeric CSS argument, with an optional unit suffix.
fn css_number(argument: &str, suffix: &str) -> Option<Component> {
    argument
        .strip_suffix(suffix)
        .unwrap_or(argument)
        .trim()
        .parse()
        .ok()
}

/// Decode `rgb(r, g, b)` or `rgba(r, g, b, a)` with channels in [0, 255] and
/// alpha in [0, 1].
pub fn decode_css_rgb(text: &str) -> Result<Color> {
    let invalid = || Error::InvalidCssRgb(text.to_string());

    let (arguments, alpha) = css_arguments(&CSS_RGB_RE, text).ok_or_else(invalid)?;

    let channel = |i: usize| css_number(arguments[i], "").ok_or_else(invalid);
    let rgb = Components(channel(0)?, channel(1)?, channel(2)?);

    let alpha = alpha_from_value(alpha.map(Value::from).as_ref(), 1.0);

    Ok(from_bytes(rgb, alpha))
}

/// Decode `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)` with the hue in degrees and
/// alpha in [0, 1].
pub fn decode_css_hsl(text: &str) -> Result<Color> {
    let invalid = || Error::InvalidCssHsl(text.to_string());

    let (arguments, alpha) = css_arguments(&CSS_HSL_RE, text).ok_or_else(invalid)?;

    let hsl = Components(
        css_number(arguments[0], "deg").ok_or_else(invalid)?,
        css_number(arguments[1], "%").ok_or_else(invalid)?,
        css_number(arguments[2], "%").ok_or_else(invalid)?,
    );

    let alpha = alpha_from_value(alpha.map(Value::from).as_ref(), 1.0);

    Ok(from_bytes(hsl_to_rgb(&hsl), alpha))
}

/// Decode a color keyword through the given resolver.
pub fn decode_named(name: &str, resolver: &impl ResolveNamedColor) -> Result<Color> {
    let unknown = || Error::UnknownNamedColor(name.to_string());

    let hex = resolver.resolve_named_color(name).ok_or_else(unknown)?;
    let hex = hex.trim().to_lowercase();

    // Resolvers backed by a rendering context answer black for names they
    // do not know.
    if name != "black" && matches!(hex.as_str(), "#000000" | "#000") {
        debug!("named color {:?} resolved to black, treating it as unknown", name);
        return Err(unknown());
    }

    decode_hex(&hex).map_err(|_| unknown())
}

/// Decode a 24-bit packed `0xRRGGBB` integer.
pub fn decode_integer(value: u32) -> Color {
    let rgb = Components(
        ((value >> 16) & 0xff) as Component,
        ((value >> 8) & 0xff) as Component,
        (value & 0xff) as Component,
    );
    from_bytes(rgb, 1.0)
}

/// Decode `[r, g, b]` or `[r, g, b, a]` with unit range values. Extra values
/// are ignored.
pub fn decode_float_vector(values: &[Component]) -> Result<Color> {
    match values {
        [r, g, b, rest @ ..] => {
            let alpha = rest.first().map_or(1.0, |&a| normalize_alpha(a));
            Ok(Color::from_channels(Components(*r, *g, *b), alpha))
        }
        _ => Err(Error::UnsupportedFormat(format!(
            "vector of {} numbers",
            values.len()
        ))),
    }
}

/// Read a channel from a record. Missing channels are 0.
fn record_channel(record: &Record, channel: RecordKeys) -> Component {
    record.channel(channel).map_or(0.0, Value::to_number)
}

/// Decode a record with red, green and blue in [0, 255] and alpha in
/// [0, 255].
///
/// Alpha is always divided by 255, so a fractional alpha such as `0.5` is
/// nearly transparent, not half transparent.
pub fn decode_rgba_record(record: &Record) -> Color {
    let rgb = Components(
        record_channel(record, RecordKeys::RED),
        record_channel(record, RecordKeys::GREEN),
        record_channel(record, RecordKeys::BLUE),
    );
    let alpha = alpha_from_value(record.channel(RecordKeys::ALPHA), 255.0);

    from_bytes(rgb, alpha)
}

/// Decode a record with the hue in degrees, saturation and lightness as
/// percentages and alpha in [0, 1].
pub fn decode_hsl_record(record: &Record) -> Color {
    let hsl = Components(
        record_channel(record, RecordKeys::HUE),
        record_channel(record, RecordKeys::SATURATION),
        record_channel(record, RecordKeys::LIGHTNESS),
    );
    let alpha = alpha_from_value(record.channel(RecordKeys::ALPHA), 1.0);

    from_bytes(hsl_to_rgb(&hsl), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, named::CssNamedColors};

    fn rgba(color: &Color) -> (Component, Component, Component, Component) {
        (color.red(), color.green(), color.blue(), color.alpha())
    }

    #[test]
    fn hex() {
        let c = decode_hex("#fff").unwrap();
        assert_eq!(rgba(&c), (1.0, 1.0, 1.0, 1.0));

        let c = decode_hex("#ff8000").unwrap();
        assert_eq!(c.red(), 1.0);
        assert_eq!(c.green(), 128.0 / 255.0);
        assert_eq!(c.blue(), 0.0);

        let c = decode_hex("0a0").unwrap();
        assert_eq!(c.green(), 170.0 / 255.0);
    }

    #[test]
    fn invalid_hex() {
        for text in ["#", "#ff", "#ffff", "#fffff", "#fffffff", "#ffffffff", "#ggg", "#12345z"] {
            assert_eq!(decode_hex(text), Err(Error::InvalidHex(text.to_string())));
        }
    }

    #[test]
    fn css_rgb() {
        let c = decode_css_rgb("rgb(255, 0, 0)").unwrap();
        assert_eq!(rgba(&c), (1.0, 0.0, 0.0, 1.0));

        let c = decode_css_rgb("rgba(0,255,0,0.25)").unwrap();
        assert_eq!(rgba(&c), (0.0, 1.0, 0.0, 0.25));

        // The alpha of rgba() is not scaled.
        let c = decode_css_rgb("rgba(0, 0, 255, 1)").unwrap();
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn css_rgb_out_of_range_is_clamped() {
        let c = decode_css_rgb("rgba(300, -20, 127.5, 4)").unwrap();
        assert_eq!(c.red(), 1.0);
        assert_eq!(c.green(), 0.0);
        assert_component_eq!(c.blue(), 0.5);
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn css_rgb_lenient_alpha() {
        let c = decode_css_rgb("rgba(255, 0, 0, half)").unwrap();
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn invalid_css_rgb() {
        for text in [
            "rgb",
            "rgb(",
            "rgb(1, 2)",
            "rgb(1, 2, 3, 4, 5)",
            "rgb(a, b, c)",
            "rgb(1, 2, 3) x",
        ] {
            assert_eq!(decode_css_rgb(text), Err(Error::InvalidCssRgb(text.to_string())));
        }
    }

    #[test]
    fn css_hsl() {
        let c = decode_css_hsl("hsl(0, 100%, 50%)").unwrap();
        assert_eq!(rgba(&c), (1.0, 0.0, 0.0, 1.0));

        let c = decode_css_hsl("hsla(120deg, 100%, 25%, 0.5)").unwrap();
        assert_eq!(rgba(&c), (0.0, 128.0 / 255.0, 0.0, 0.5));

        let c = decode_css_hsl("hsl(240, 100, 50)").unwrap();
        assert_eq!(rgba(&c), (0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn css_hsl_wraps_hue_and_clamps() {
        let c = decode_css_hsl("hsl(720, 150%, 50%)").unwrap();
        assert_eq!(rgba(&c), (1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn invalid_css_hsl() {
        for text in ["hsl", "hsl(1, 2%)", "hsl(red, 100%, 50%)", "hsl(0, full, 50%)"] {
            assert_eq!(decode_css_hsl(text), Err(Error::InvalidCssHsl(text.to_string())));
        }
    }

    #[test]
    fn named() {
        let c = decode_named("chocolate", &CssNamedColors).unwrap();
        assert_eq!(rgba(&c), (210.0 / 255.0, 105.0 / 255.0, 30.0 / 255.0, 1.0));

        let c = decode_named("black", &CssNamedColors).unwrap();
        assert_eq!(rgba(&c), (0.0, 0.0, 0.0, 1.0));

        assert_eq!(
            decode_named("notacolor", &CssNamedColors),
            Err(Error::UnknownNamedColor("notacolor".to_string()))
        );
    }

    #[test]
    fn resolver_that_defaults_to_black() {
        let resolver = |name: &str| match name {
            "white" => Some("#FFFFFF".to_string()),
            _ => Some("#000000".to_string()),
        };

        assert!(decode_named("white", &resolver).is_ok());
        assert!(decode_named("black", &resolver).is_ok());
        assert_eq!(
            decode_named("notacolor", &resolver),
            Err(Error::UnknownNamedColor("notacolor".to_string()))
        );
    }

    #[test]
    fn resolver_that_does_not_answer_hex() {
        let resolver = |_: &str| Some("rgba(0, 0, 0, 0)".to_string());
        assert_eq!(
            decode_named("transparent", &resolver),
            Err(Error::UnknownNamedColor("transparent".to_string()))
        );
    }

    #[test]
    fn integer() {
        let c = decode_integer(0xff8000);
        assert_eq!(rgba(&c), (1.0, 128.0 / 255.0, 0.0, 1.0));

        // Bits above 24 are ignored.
        assert_eq!(decode_integer(0xab00ff00), decode_integer(0x00ff00));
    }

    #[test]
    fn float_vector() {
        let c = decode_float_vector(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(rgba(&c), (0.1, 0.2, 0.3, 1.0));

        let c = decode_float_vector(&[0.1, 0.2, 0.3, 0.4, 0.9]).unwrap();
        assert_eq!(rgba(&c), (0.1, 0.2, 0.3, 0.4));

        let c = decode_float_vector(&[-1.0, 2.0, Component::NAN, Component::NAN]).unwrap();
        assert_eq!(rgba(&c), (0.0, 1.0, 0.0, 1.0));

        assert!(matches!(
            decode_float_vector(&[0.1, 0.2]),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn rgba_record() {
        let record = Record::new().with("r", 255).with("g", 0).with("b", 51).with("a", 255);
        let c = decode_rgba_record(&record);
        assert_eq!(rgba(&c), (1.0, 0.0, 0.2, 1.0));

        // Alpha is scaled from [0, 255] and may be numeric text.
        let record = Record::new().with("red", 0).with("alpha", "51");
        let c = decode_rgba_record(&record);
        assert_eq!(rgba(&c), (0.0, 0.0, 0.0, 0.2));

        // Alpha that is not a number is opaque.
        let record = Record::new().with("r", 0).with("a", "none");
        assert_eq!(decode_rgba_record(&record).alpha(), 1.0);
    }

    #[test]
    fn rgba_record_alpha_is_always_scaled_by_255() {
        let record = Record::new().with("r", 255).with("a", 0.5);
        let c = decode_rgba_record(&record);
        assert_component_eq!(c.alpha(), 0.5 / 255.0);
        assert_eq!(c.as_css_rgb_string(), "rgba(255, 0, 0, 0.002)");
    }

    #[test]
    fn rgba_record_out_of_range_is_clamped() {
        let record = Record::new().with("r", 300).with("g", -5).with("b", "x").with("a", 1000);
        let c = decode_rgba_record(&record);
        assert_eq!(rgba(&c), (1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn hsl_record() {
        let record = Record::new().with("h", 0).with("s", 100).with("l", 50);
        let c = decode_hsl_record(&record);
        assert_eq!(rgba(&c), (1.0, 0.0, 0.0, 1.0));

        let record = Record::new()
            .with("hue", 120)
            .with("saturation", 150)
            .with("lightness", 25)
            .with("alpha", 0.5);
        let c = decode_hsl_record(&record);
        assert_eq!(rgba(&c), (0.0, 128.0 / 255.0, 0.0, 0.5));
    }

    #[test]
    fn dispatch() {
        let css = CssNamedColors;

        let c = decode(&Input::from("  #FFF "), &css).unwrap();
        assert_eq!(rgba(&c), (1.0, 1.0, 1.0, 1.0));

        let c = decode(&Input::from("RGB(255, 0, 0)"), &css).unwrap();
        assert_eq!(rgba(&c), (1.0, 0.0, 0.0, 1.0));

        let c = decode(&Input::from("Chocolate"), &css).unwrap();
        assert_eq!(c.red(), 210.0 / 255.0);

        let c = decode(&Input::None, &css).unwrap();
        assert_eq!(c, Color::default());

        let both = Record::new()
            .with("r", 0)
            .with("g", 0)
            .with("b", 255)
            .with("h", 0)
            .with("s", 100)
            .with("l", 50);
        let c = decode(&Input::from(both), &css).unwrap();
        assert_eq!(rgba(&c), (0.0, 0.0, 1.0, 1.0));

        assert_eq!(
            decode(&Input::from(Record::new()), &css),
            Err(Error::UnsupportedFormat("record {}".to_string()))
        );
    }
}
