//! Structured-document normalizer for OpenAPI 3.x and Swagger 2.0.
//!
//! Documents are decoded into an order-preserving `serde_json::Value` tree and
//! walked loosely: optional fields with the wrong shape are ignored, and only
//! the containers the walk has to iterate are checked.

pub mod document;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod server;
pub mod value;

use serde_json::Value;

use crate::assemble::assemble;
use crate::error::{DecodeError, ParseError};
use crate::model::{Catalog, IdAllocator};

/// Decode YAML into a value tree. `<<` merge keys are resolved and non-string
/// mapping keys are stringified.
pub fn from_yaml(input: &str) -> Result<Value, DecodeError> {
    let mut doc: serde_yaml_ng::Value = serde_yaml_ng::from_str(input)?;
    doc.apply_merge()?;
    Ok(value::yaml_to_json(doc))
}

/// Decode JSON into a value tree, keeping mapping order.
pub fn from_json(input: &str) -> Result<Value, DecodeError> {
    Ok(serde_json::from_str(input)?)
}

/// Normalize an already-decoded OpenAPI 3.x or Swagger 2.0 tree into a catalog.
///
/// All-or-nothing: any failure discards the interfaces gathered so far.
pub fn normalize(doc: &Value) -> Result<Catalog, ParseError> {
    let root = doc
        .as_object()
        .ok_or_else(|| ParseError::malformed("document root", "a mapping"))?;

    let meta = document::read_meta(root)?;

    // One allocator per parse; IDs restart at the floor for every document.
    let mut ids = IdAllocator::new();
    let interfaces = operation::extract_interfaces(root, &mut ids)?;

    log::debug!(
        "normalized {} document \"{}\" with {} interfaces",
        meta.source,
        meta.title,
        interfaces.len()
    );

    Ok(assemble(meta, interfaces))
}
