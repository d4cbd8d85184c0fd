use std::fmt;

use serde::{Deserialize, Serialize};

use super::interface::Interface;

/// The canonical output of one parse: document metadata plus every interface
/// in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub schema_version: String,
    pub title: String,
    pub description: String,
    pub base_url: String,
    pub source: SourceKind,
    pub interfaces: Vec<Interface>,
}

impl Catalog {
    pub fn interface(&self, id: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

/// Which grammar produced a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    OpenApi3,
    Swagger2,
    Markdown,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::OpenApi3 => "openapi3",
            SourceKind::Swagger2 => "swagger2",
            SourceKind::Markdown => "markdown",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document-level fields gathered by a pipeline before assembly.
#[derive(Debug, Clone)]
pub struct CatalogMeta {
    pub schema_version: String,
    pub title: String,
    pub description: String,
    pub base_url: String,
    pub source: SourceKind,
}
