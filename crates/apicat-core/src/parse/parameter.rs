use serde_json::Value;

use super::value::{Mapping, bool_at, present, str_at, string_at};
use crate::model::builder::compose_type;
use crate::model::{ParamType, Parameter, ParameterLocation};

/// Parameter objects of a `parameters` sequence. Non-mapping entries are skipped.
pub fn parameter_objects(value: &Value) -> Vec<&Mapping> {
    match value.as_array() {
        Some(items) => items.iter().filter_map(Value::as_object).collect(),
        None => {
            log::warn!("ignoring `parameters` that is not a sequence");
            Vec::new()
        }
    }
}

/// `(name, in)` of a parameter. A parameter missing either (a bare `$ref`) has
/// no identity and never replaces or is replaced by another.
fn identity(param: &Mapping) -> Option<(&str, &str)> {
    let name = str_at(param, "name").filter(|n| !n.is_empty())?;
    let location = str_at(param, "in").filter(|l| !l.is_empty())?;
    Some((name, location))
}

/// Path-level parameters followed by the operation's own. An operation
/// parameter with the same `(name, in)` replaces the inherited one.
pub fn merge_parameters<'a>(inherited: &[&'a Mapping], own: &[&'a Mapping]) -> Vec<&'a Mapping> {
    inherited
        .iter()
        .filter(|p| {
            let Some(id) = identity(p) else {
                return true;
            };
            !own.iter().any(|o| identity(o) == Some(id))
        })
        .chain(own.iter())
        .copied()
        .collect()
}

/// Separate the Swagger 2 body parameter from the rest. Only one is expected;
/// when several are present the last one wins.
pub fn split_body<'a>(params: &[&'a Mapping]) -> (Option<&'a Mapping>, Vec<&'a Mapping>) {
    let mut body = None;
    let mut others = Vec::with_capacity(params.len());
    for param in params {
        if str_at(param, "in") == Some("body") {
            if body.is_some() {
                log::debug!("multiple body parameters; keeping the last");
            }
            body = Some(*param);
        } else {
            others.push(*param);
        }
    }
    (body, others)
}

/// Normalize one non-body parameter, reading `type`, `enum`, `format`,
/// `example` and `default` from the parameter first and its `schema` second.
pub fn normalize_parameter(param: &Mapping) -> Parameter {
    let schema = param.get("schema").and_then(Value::as_object);
    let from_either = |key: &str| {
        present(param.get(key)).or_else(|| schema.and_then(|s| present(s.get(key))))
    };

    Parameter {
        name: string_at(param, "name"),
        location: ParameterLocation::from(str_at(param, "in").unwrap_or_default()),
        required: bool_at(param, "required"),
        param_type: resolve_type(param, schema),
        description: string_at(param, "description"),
        schema_ref: schema.and_then(|s| str_at(s, "$ref")).map(String::from),
        is_nested: false,
        example: from_either("example"),
        default: from_either("default"),
        enum_values: resolve_enum(param, schema),
        format: str_at(param, "format")
            .or_else(|| schema.and_then(|s| str_at(s, "format")))
            .map(String::from),
    }
}

fn resolve_type(param: &Mapping, schema: Option<&Mapping>) -> ParamType {
    if let Some(ty) = str_at(param, "type") {
        return compose_type(ty, item_type(param));
    }
    match schema {
        Some(schema) => compose_type(
            str_at(schema, "type").unwrap_or("string"),
            item_type(schema),
        ),
        None => compose_type("string", None),
    }
}

/// Item type of an array holder; `string` when `items` has no `type`.
fn item_type(holder: &Mapping) -> Option<&str> {
    holder
        .get("items")
        .and_then(Value::as_object)
        .map(|items| str_at(items, "type").unwrap_or("string"))
}

fn resolve_enum(param: &Mapping, schema: Option<&Mapping>) -> Vec<Value> {
    let values = |obj: &Mapping| {
        obj.get("enum")
            .and_then(Value::as_array)
            .filter(|v| !v.is_empty())
            .cloned()
    };
    values(param)
        .or_else(|| schema.and_then(values))
        .unwrap_or_default()
}
