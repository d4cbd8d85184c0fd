use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP method. Only these verbs are recognized as operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Options,
        HttpMethod::Head,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }

    /// Case-insensitive lookup. Anything outside the verb set yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(raw))
    }

    /// Methods that carry a request body even when the source shows no example.
    pub fn expects_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One canonical HTTP operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub id: String,
    pub path: String,
    pub method: HttpMethod,
    pub summary: String,
    pub description: String,
    pub tags: IndexSet<String>,
    pub operation_id: String,
    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,
    pub responses: IndexMap<String, ResponseSpec>,
    pub deprecated: bool,
    pub consumes: Vec<String>,
    pub produces: Vec<String>,

    /// Flattened response field table. Only the Markdown dialect documents these.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response_parameters: Vec<ResponseField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_example: Option<String>,
}

/// Where a parameter is carried.
///
/// The structured normalizer never emits `Body`: those parameters are hoisted
/// into [`RequestBody`]. Markdown tables keep whatever the `in` column says.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParameterLocation {
    Query,
    Path,
    Header,
    Cookie,
    FormData,
    Body,
    Other(String),
}

impl ParameterLocation {
    pub fn as_str(&self) -> &str {
        match self {
            ParameterLocation::Query => "query",
            ParameterLocation::Path => "path",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
            ParameterLocation::FormData => "formData",
            ParameterLocation::Body => "body",
            ParameterLocation::Other(raw) => raw,
        }
    }
}

impl From<&str> for ParameterLocation {
    fn from(raw: &str) -> Self {
        match raw.trim() {
            "query" => ParameterLocation::Query,
            "path" => ParameterLocation::Path,
            "header" => ParameterLocation::Header,
            "cookie" => ParameterLocation::Cookie,
            "formData" => ParameterLocation::FormData,
            "body" => ParameterLocation::Body,
            other => ParameterLocation::Other(other.to_string()),
        }
    }
}

impl From<String> for ParameterLocation {
    fn from(raw: String) -> Self {
        ParameterLocation::from(raw.as_str())
    }
}

impl From<ParameterLocation> for String {
    fn from(location: ParameterLocation) -> Self {
        location.as_str().to_string()
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter type: a primitive name or the `array<T>` composite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParamType {
    Primitive(String),
    Array(String),
}

impl From<String> for ParamType {
    fn from(raw: String) -> Self {
        match raw
            .strip_prefix("array<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            Some(item) => ParamType::Array(item.to_string()),
            None => ParamType::Primitive(raw),
        }
    }
}

impl From<ParamType> for String {
    fn from(ty: ParamType) -> Self {
        ty.to_string()
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Primitive(name) => f.write_str(name),
            ParamType::Array(item) => write!(f, "array<{item}>"),
        }
    }
}

/// A path/query/header parameter, or a field row from a Markdown table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    pub required: bool,

    #[serde(rename = "type")]
    pub param_type: ParamType,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_ref: Option<String>,

    /// Set when the source indented this row under a parent field. Depth is not kept.
    #[serde(default)]
    pub is_nested: bool,

    #[serde(default)]
    pub example: Option<Value>,

    #[serde(default)]
    pub default: Option<Value>,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// A request body, from OpenAPI 3 `requestBody`, a Swagger 2 body parameter,
/// or a Markdown request example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    pub required: bool,
    pub description: String,
    pub content_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,

    /// Only set for Swagger 2 body parameters whose schema is a reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_ref: Option<String>,
}

/// One response, keyed by status code on the owning interface.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseSpec {
    pub description: String,

    #[serde(default)]
    pub content: IndexMap<String, MediaContent>,

    /// Swagger 2 flat `schema`, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,

    /// Swagger 2 flat `examples`, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Value>,

    /// Named body schema. The Markdown dialect documents one response body per
    /// interface and attaches it to the `200` entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaContent {
    pub schema: Option<Value>,
    pub example: Option<Value>,
}

/// A row of a Markdown response field table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseField {
    pub name: String,
    pub description: String,

    #[serde(rename = "type")]
    pub field_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub is_nested: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse_is_case_insensitive() {
        assert_eq!(HttpMethod::parse("get"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::parse("Patch"), Some(HttpMethod::Patch));
        assert_eq!(HttpMethod::parse(" DELETE "), Some(HttpMethod::Delete));
    }

    #[test]
    fn test_method_parse_rejects_non_verbs() {
        assert_eq!(HttpMethod::parse("parameters"), None);
        assert_eq!(HttpMethod::parse("trace"), None);
        assert_eq!(HttpMethod::parse(""), None);
    }

    #[test]
    fn test_param_type_wire_form() {
        assert_eq!(ParamType::Array("integer".into()).to_string(), "array<integer>");
        assert_eq!(
            ParamType::from("array<UserVO>".to_string()),
            ParamType::Array("UserVO".into())
        );
        assert_eq!(
            ParamType::from("string".to_string()),
            ParamType::Primitive("string".into())
        );
    }

    #[test]
    fn test_location_keeps_unknown_values() {
        assert_eq!(ParameterLocation::from("query"), ParameterLocation::Query);
        let odd = ParameterLocation::from("matrix");
        assert_eq!(odd.as_str(), "matrix");
    }

    #[test]
    fn test_parameter_serializes_with_wire_names() {
        let param = Parameter {
            name: "petId".into(),
            location: ParameterLocation::Path,
            required: true,
            param_type: ParamType::Primitive("integer".into()),
            description: String::new(),
            schema_ref: None,
            is_nested: false,
            example: None,
            default: None,
            enum_values: Vec::new(),
            format: Some("int64".into()),
        };
        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(json["in"], "path");
        assert_eq!(json["type"], "integer");
        assert_eq!(json["format"], "int64");
        assert!(json.get("enum").is_none());
    }
}
