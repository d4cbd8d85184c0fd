use serde_json::Value;

use super::server::base_url;
use super::value::{Mapping, mapping, str_at};
use crate::error::ParseError;
use crate::model::{CatalogMeta, SourceKind};

const DEFAULT_TITLE: &str = "Untitled API";

/// Detect the dialect from its version marker. `openapi` wins over `swagger`
/// when both are present.
pub fn detect_version(root: &Mapping) -> Result<(String, SourceKind), ParseError> {
    if let Some(version) = version_marker(root.get("openapi")) {
        return Ok((version, SourceKind::OpenApi3));
    }
    if let Some(version) = version_marker(root.get("swagger")) {
        return Ok((version, SourceKind::Swagger2));
    }
    Err(ParseError::InvalidDocument)
}

/// A version marker is a non-blank string or a bare YAML number (`swagger: 2.0`).
fn version_marker(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read the document-level fields: version, `info`, and the base URL.
pub fn read_meta(root: &Mapping) -> Result<CatalogMeta, ParseError> {
    let (schema_version, source) = detect_version(root)?;
    let info = mapping(root.get("info"), "info")?;

    let title = info
        .and_then(|i| str_at(i, "title"))
        .unwrap_or(DEFAULT_TITLE)
        .to_string();
    let description = info
        .and_then(|i| str_at(i, "description"))
        .unwrap_or_default()
        .to_string();

    Ok(CatalogMeta {
        schema_version,
        title,
        description,
        base_url: base_url(root)?,
        source,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn root(value: Value) -> Mapping {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_detects_openapi3() {
        let doc = root(json!({"openapi": "3.0.1"}));
        let (version, kind) = detect_version(&doc).unwrap();
        assert_eq!(version, "3.0.1");
        assert_eq!(kind, SourceKind::OpenApi3);
    }

    #[test]
    fn test_detects_swagger2_numeric_marker() {
        let doc = root(json!({"swagger": 2.0}));
        let (version, kind) = detect_version(&doc).unwrap();
        assert_eq!(version, "2.0");
        assert_eq!(kind, SourceKind::Swagger2);
    }

    #[test]
    fn test_blank_marker_falls_through() {
        let doc = root(json!({"openapi": "", "swagger": "2.0"}));
        let (_, kind) = detect_version(&doc).unwrap();
        assert_eq!(kind, SourceKind::Swagger2);
    }

    #[test]
    fn test_missing_markers_are_invalid() {
        let doc = root(json!({"info": {"title": "x"}}));
        assert!(matches!(detect_version(&doc), Err(ParseError::InvalidDocument)));
    }

    #[test]
    fn test_meta_defaults() {
        let meta = read_meta(&root(json!({"swagger": "2.0"}))).unwrap();
        assert_eq!(meta.title, "Untitled API");
        assert_eq!(meta.description, "");
        assert_eq!(meta.base_url, "");
    }

    #[test]
    fn test_info_must_be_a_mapping() {
        let err = read_meta(&root(json!({"openapi": "3.0.0", "info": "nope"}))).unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
    }
}
