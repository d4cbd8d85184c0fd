use serde_json::Value;

use super::value::{Mapping, str_at, string_at};
use crate::error::ParseError;

/// Compute the base URL.
///
/// OpenAPI 3 uses the first `servers[].url`. Swagger 2 joins
/// `schemes[0]://host` and `basePath`, defaulting the scheme to `http`.
/// Empty when neither applies.
pub fn base_url(root: &Mapping) -> Result<String, ParseError> {
    if let Some(first) = root
        .get("servers")
        .and_then(Value::as_array)
        .and_then(|servers| servers.first())
    {
        let server = first
            .as_object()
            .ok_or_else(|| ParseError::malformed("servers[0]", "a mapping"))?;
        return Ok(string_at(server, "url"));
    }

    let host = str_at(root, "host").unwrap_or_default().trim();
    if host.is_empty() {
        return Ok(String::new());
    }
    let base_path = str_at(root, "basePath").unwrap_or_default();
    let scheme = root
        .get("schemes")
        .and_then(Value::as_array)
        .and_then(|schemes| schemes.first())
        .and_then(Value::as_str)
        .unwrap_or("http");

    Ok(format!("{scheme}://{host}{base_path}"))
}
