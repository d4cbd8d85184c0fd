use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ParseError;

/// Input encoding of an uploaded document, chosen from its format hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Markdown,
}

impl DocumentFormat {
    /// Select a pipeline from a file-extension hint (`json`, `yaml`, `yml`,
    /// `md`, `markdown`). The content itself is never sniffed.
    pub fn from_hint(hint: &str) -> Result<Self, ParseError> {
        let normalized = hint.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "md" | "markdown" => Ok(DocumentFormat::Markdown),
            _ => Err(ParseError::UnsupportedFormat(hint.to_string())),
        }
    }

    /// Derive the format from a file name's extension.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_hint(ext)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Yaml => "yaml",
            DocumentFormat::Markdown => "markdown",
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hint(s)
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
