//! Conversion of JSON values into [`Input`], so colors can be read from
//! configuration files and the command line.

use serde_json::Value as Json;

use crate::{
    error::{Error, Result},
    input::{Input, Record, Value},
    Component,
};

fn unsupported(json: &Json) -> Error {
    let shape = match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    };
    Error::UnsupportedFormat(format!("JSON {}", shape))
}

fn number(json: &Json) -> Option<Component> {
    json.as_f64().map(|value| value as Component)
}

fn record_value(json: &Json) -> Result<Value> {
    match json {
        Json::Number(_) => number(json).map(Value::Number).ok_or_else(|| unsupported(json)),
        Json::String(text) => Ok(Value::Text(text.clone())),
        _ => Err(unsupported(json)),
    }
}

impl TryFrom<&Json> for Input {
    type Error = Error;

    fn try_from(json: &Json) -> Result<Self> {
        Ok(match json {
            Json::Null => Input::None,
            Json::String(text) => Input::Text(text.clone()),
            Json::Number(value) => match value.as_u64() {
                Some(value) => Input::Integer(value as u32),
                // Fractional and negative numbers are truncated to 32 bits.
                None => Input::Integer(value.as_f64().map_or(0, |v| v.trunc() as i64 as u32)),
            },
            Json::Array(values) => Input::Vector(
                values
                    .iter()
                    .map(|value| number(value).ok_or_else(|| unsupported(value)))
                    .collect::<Result<_>>()?,
            ),
            Json::Object(entries) => {
                let mut record = Record::new();
                for (key, value) in entries {
                    record.insert(key.as_str(), record_value(value)?);
                }
                Input::Record(record)
            }
            Json::Bool(_) => return Err(unsupported(json)),
        })
    }
}
