use thiserror::Error;

/// Syntax failure while decoding a structured document into a value tree.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unsupported document format: {0:?} (expected json, yaml, yml, md or markdown)")]
    UnsupportedFormat(String),

    #[error("invalid API document: missing `openapi` or `swagger` version field")]
    InvalidDocument,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("document parse failed: {0}")]
    Malformed(String),
}

impl ParseError {
    pub(crate) fn malformed(location: &str, expected: &str) -> Self {
        ParseError::Malformed(format!("`{location}` must be {expected}"))
    }
}

impl From<serde_yaml_ng::Error> for ParseError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        ParseError::Decode(DecodeError::Yaml(err))
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Decode(DecodeError::Json(err))
    }
}
