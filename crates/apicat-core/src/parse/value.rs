use serde_json::{Map, Number, Value};
use serde_yaml_ng::Value as YamlValue;

use crate::error::ParseError;

pub type Mapping = Map<String, Value>;

/// Convert a YAML tree into the JSON value model, keeping mapping order.
///
/// YAML allows non-string keys (`200:` in `responses` is an integer); scalar
/// keys are rendered as text, and composite keys are dropped.
pub fn yaml_to_json(value: YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => yaml_number(&n),
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(seq) => Value::Array(seq.into_iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(mapping) => {
            let mut out = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                match mapping_key(key) {
                    Some(key) => {
                        out.insert(key, yaml_to_json(value));
                    }
                    None => log::warn!("dropping YAML mapping entry with a non-scalar key"),
                }
            }
            Value::Object(out)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number(n: &serde_yaml_ng::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::from(i)
    } else if let Some(u) = n.as_u64() {
        Value::from(u)
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

fn mapping_key(key: YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Null => Some("null".to_string()),
        YamlValue::Tagged(tagged) => mapping_key(tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => None,
    }
}

/// A container the walk must iterate. Absent or `null` is `None`; any other
/// non-mapping value fails the whole parse.
pub(crate) fn mapping<'a>(
    value: Option<&'a Value>,
    location: &str,
) -> Result<Option<&'a Mapping>, ParseError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(ParseError::malformed(location, "a mapping")),
    }
}

pub(crate) fn str_at<'a>(obj: &'a Mapping, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}

pub(crate) fn string_at(obj: &Mapping, key: &str) -> String {
    str_at(obj, key).unwrap_or_default().to_string()
}

pub(crate) fn bool_at(obj: &Mapping, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Strings of a sequence; non-string members are skipped.
pub(crate) fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// A non-null value, cloned.
pub(crate) fn present(value: Option<&Value>) -> Option<Value> {
    value.filter(|v| !v.is_null()).cloned()
}
