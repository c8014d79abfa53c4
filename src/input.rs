//! The shapes of input a [`Color`](crate::Color) can be created from, and the
//! rules used to pick a decoder for each of them.

use std::collections::BTreeMap;

use bitflags::bitflags;

use crate::{
    color::{Component, Format},
    error::{Error, Result},
};

/// Any value a color can be created from.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// A hex string, CSS `rgb()`/`hsl()` function or color name.
    Text(String),
    /// A 24-bit packed `0xRRGGBB` integer. Bits above 24 are ignored.
    Integer(u32),
    /// Unit range `[r, g, b]` or `[r, g, b, a]`.
    Vector(Vec<Component>),
    /// A record keyed by channel name.
    Record(Record),
    /// No input.
    None,
}

/// A single value stored in a [`Record`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A numeric value.
    Number(Component),
    /// A textual value that is coerced to a number when it is read.
    Text(String),
}

impl Value {
    /// Return the value as a number. Text that does not hold a number
    /// returns NaN.
    pub fn to_number(&self) -> Component {
        match self {
            Value::Number(value) => *value,
            Value::Text(text) => text.trim().parse().unwrap_or(Component::NAN),
        }
    }
}

impl From<Component> for Value {
    fn from(value: Component) -> Self {
        Value::Number(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(value as Component)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as Component)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

bitflags! {
    /// The channel keys found in a [`Record`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RecordKeys : u8 {
        /// `r` or `red`.
        const RED = 1 << 0;
        /// `g` or `green`.
        const GREEN = 1 << 1;
        /// `b` or `blue`.
        const BLUE = 1 << 2;
        /// `a` or `alpha`.
        const ALPHA = 1 << 3;
        /// `h` or `hue`.
        const HUE = 1 << 4;
        /// `s` or `saturation`.
        const SATURATION = 1 << 5;
        /// `l` or `lightness`.
        const LIGHTNESS = 1 << 6;

        /// Any key signaling RGB semantics.
        const RGB = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits();
        /// Any key signaling HSL semantics.
        const HSL = Self::HUE.bits() | Self::SATURATION.bits() | Self::LIGHTNESS.bits();
    }
}

impl RecordKeys {
    /// Return the flag for a single record key, if it names a channel.
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "r" | "red" => Self::RED,
            "g" | "green" => Self::GREEN,
            "b" | "blue" => Self::BLUE,
            "a" | "alpha" => Self::ALPHA,
            "h" | "hue" => Self::HUE,
            "s" | "saturation" => Self::SATURATION,
            "l" | "lightness" => Self::LIGHTNESS,
            _ => return None,
        })
    }
}

/// A structured color, keyed by channel name.
/// ```rust
/// use swatch::{Color, Record};
/// let c = Color::new(Record::new().with("h", 0).with("s", 100).with("l", 50)).unwrap();
/// assert_eq!(c.as_hex(), "#ff0000");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    entries: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the record with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Return the value for the first key that maps to the given channel.
    pub fn channel(&self, channel: RecordKeys) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| RecordKeys::from_key(key) == Some(channel))
            .map(|(_, value)| value)
    }

    /// Return all the channel keys present in the record.
    pub fn keys(&self) -> RecordKeys {
        self.entries
            .keys()
            .filter_map(|key| RecordKeys::from_key(key))
            .fold(RecordKeys::empty(), |acc, key| acc | key)
    }

    /// Number of entries in the record.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Input {
    /// Select the format used to decode this input. Only the shape of the
    /// input and the prefix of strings are inspected.
    pub fn classify(&self) -> Result<Format> {
        match self {
            Input::Text(text) => {
                let text = text.trim().to_lowercase();
                Ok(if text.starts_with('#') {
                    Format::Hex
                } else if text.starts_with("rgb") {
                    Format::CssRgb
                } else if text.starts_with("hsl") {
                    Format::CssHsl
                } else {
                    Format::Named
                })
            }
            Input::Integer(_) => Ok(Format::Integer),
            Input::Vector(values) if values.len() >= 3 => Ok(Format::FloatVector),
            Input::Record(record) => {
                let keys = record.keys();
                // RGB wins when a record carries keys of both kinds.
                if keys.intersects(RecordKeys::RGB) {
                    Ok(Format::RgbaRecord)
                } else if keys.intersects(RecordKeys::HSL) {
                    Ok(Format::HslRecord)
                } else {
                    Err(Error::UnsupportedFormat(self.shape()))
                }
            }
            Input::None => Ok(Format::Default),
            Input::Vector(_) => Err(Error::UnsupportedFormat(self.shape())),
        }
    }

    /// Describe the shape of the input.
    pub fn shape(&self) -> String {
        match self {
            Input::Text(_) => "string".to_string(),
            Input::Integer(_) => "integer".to_string(),
            Input::Vector(values) => format!("vector of {} numbers", values.len()),
            Input::Record(record) => {
                let keys = record.entries.keys().cloned().collect::<Vec<_>>();
                format!("record {{{}}}", keys.join(", "))
            }
            Input::None => "none".to_string(),
        }
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<u32> for Input {
    fn from(value: u32) -> Self {
        Input::Integer(value)
    }
}

impl From<Vec<Component>> for Input {
    fn from(value: Vec<Component>) -> Self {
        Input::Vector(value)
    }
}

impl From<&[Component]> for Input {
    fn from(value: &[Component]) -> Self {
        Input::Vector(value.to_vec())
    }
}

impl<const N: usize> From<[Component; N]> for Input {
    fn from(value: [Component; N]) -> Self {
        Input::Vector(value.to_vec())
    }
}

impl From<Record> for Input {
    fn from(value: Record) -> Self {
        Input::Record(value)
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::None, Into::into)
    }
}
