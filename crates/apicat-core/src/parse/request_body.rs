use serde_json::{Map, Value};

use super::value::{Mapping, bool_at, present, str_at, string_at};
use crate::model::RequestBody;

/// Content type assumed for Swagger 2 body parameters.
const SWAGGER_BODY_CONTENT_TYPE: &str = "application/json";

/// Parse either an OpenAPI 3 `requestBody` object or a Swagger 2 `in: body`
/// parameter. Anything else (including a bare `$ref`) yields `None`.
pub fn parse_request_body(value: &Value) -> Option<RequestBody> {
    value.as_object().and_then(from_mapping)
}

/// Same as [`parse_request_body`] for an object already known to be a mapping.
pub fn from_mapping(body: &Mapping) -> Option<RequestBody> {
    if body.is_empty() {
        return None;
    }

    if let Some(content) = body.get("content") {
        let content = content.as_object();
        let content_types: Vec<String> = content
            .map(|c| c.keys().cloned().collect())
            .unwrap_or_default();
        // Schema and example come from the first declared media type.
        let first = content.and_then(|c| c.values().next());
        let schema = first
            .and_then(|media| media.get("schema"))
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));

        return Some(RequestBody {
            required: bool_at(body, "required"),
            description: string_at(body, "description"),
            content_types,
            schema: Some(schema),
            example: first.and_then(|media| present(media.get("example"))),
            schema_ref: None,
        });
    }

    if str_at(body, "in") == Some("body") {
        let schema = body
            .get("schema")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        let schema_ref = schema
            .get("$ref")
            .or_else(|| schema.get("originalRef"))
            .and_then(Value::as_str)
            .map(String::from);

        return Some(RequestBody {
            required: bool_at(body, "required"),
            description: string_at(body, "description"),
            content_types: vec![SWAGGER_BODY_CONTENT_TYPE.to_string()],
            schema: Some(schema),
            example: None,
            schema_ref,
        });
    }

    None
}
