//! Parses API documents (OpenAPI 3.x, Swagger 2.0, and the team's Markdown
//! dialect) into one canonical [`Catalog`] of interfaces.

pub mod assemble;
pub mod config;
pub mod error;
pub mod format;
pub mod markdown;
pub mod model;
pub mod parse;

pub use error::{DecodeError, ParseError};
pub use format::DocumentFormat;
pub use model::{
    Catalog, HttpMethod, Interface, ParamType, Parameter, ParameterLocation, RequestBody,
    ResponseField, ResponseSpec, SourceKind,
};

/// Parse a document given its format hint (`json`, `yaml`, `yml`, `md`,
/// `markdown`; case-insensitive, leading dot allowed).
///
/// Pure and reentrant: every call owns its own ID sequence, so the same input
/// always yields the same catalog.
pub fn parse_document(content: &str, format_hint: &str) -> Result<Catalog, ParseError> {
    let format = DocumentFormat::from_hint(format_hint)?;
    parse_with_format(content, format)
}

/// Parse a document whose format is already known.
pub fn parse_with_format(content: &str, format: DocumentFormat) -> Result<Catalog, ParseError> {
    log::debug!("parsing {format} document ({} bytes)", content.len());
    match format {
        DocumentFormat::Markdown => Ok(markdown::extract(content)),
        DocumentFormat::Json => parse::normalize(&parse::from_json(content)?),
        DocumentFormat::Yaml => parse::normalize(&parse::from_yaml(content)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_hint() {
        let err = parse_document("{}", "xml").unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFormat(ref h) if h == "xml"));
    }

    #[test]
    fn test_decode_error() {
        let err = parse_document("{not json", "json").unwrap_err();
        assert!(matches!(err, ParseError::Decode(DecodeError::Json(_))));

        let err = parse_document("a: [1, 2", "yaml").unwrap_err();
        assert!(matches!(err, ParseError::Decode(DecodeError::Yaml(_))));
    }

    #[test]
    fn test_missing_version_marker() {
        let err = parse_document("{\"info\": {\"title\": \"x\"}}", "json").unwrap_err();
        assert!(matches!(err, ParseError::InvalidDocument));
    }

    #[test]
    fn test_markdown_never_fails() {
        let catalog = parse_document("not really a document", ".MD").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.source, SourceKind::Markdown);
    }
}
