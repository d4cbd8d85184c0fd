//! Single exit point for both pipelines: document metadata plus interfaces
//! become a [`Catalog`].

use crate::model::{Catalog, CatalogMeta, Interface};

pub fn assemble(meta: CatalogMeta, interfaces: Vec<Interface>) -> Catalog {
    debug_assert!(
        ids_are_unique(&interfaces),
        "interface ids must be unique within a catalog"
    );

    Catalog {
        schema_version: meta.schema_version,
        title: meta.title,
        description: meta.description,
        base_url: clean_base_url(&meta.base_url),
        source: meta.source,
        interfaces,
    }
}

/// Trim a base URL; anything with embedded whitespace or control characters
/// cannot be a URL prefix and is dropped.
pub fn clean_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
        log::warn!("discarding malformed base url {trimmed:?}");
        return String::new();
    }
    trimmed.to_string()
}

fn ids_are_unique(interfaces: &[Interface]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(interfaces.len());
    interfaces.iter().all(|i| seen.insert(i.id.as_str()))
}
