//! Markdown grammar extractor for the team's API document dialect.
//!
//! There is no formal grammar: structure is recovered from headings, bold
//! labels, fenced code blocks and pipe tables. Extraction never fails. Missing
//! fields fall back to defaults, and a section without an `**接口地址**` anchor
//! (or with a method outside the verb set) is dropped.

pub mod anchors;
pub mod outline;
pub mod table;

use serde_json::Value;

use crate::assemble::assemble;
use crate::model::{Catalog, CatalogMeta, IdAllocator, InterfaceDraft, RequestBody, SourceKind};
use outline::Section;

const DEFAULT_TITLE: &str = "API 文档";
const DEFAULT_VERSION: &str = "1.0";
const DEFAULT_METHOD: &str = "POST";
const DEFAULT_REQUEST_TYPE: &str = "application/json";
const DEFAULT_RESPONSE_TYPE: &str = "*/*";

/// Extract a catalog from a Markdown document.
pub fn extract(content: &str) -> Catalog {
    let content = content.replace("\r\n", "\n");
    let outline = outline::scan(&content);

    let meta = CatalogMeta {
        schema_version: anchors::version(&content).unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        title: outline
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: anchors::doc_description(&content).unwrap_or_default(),
        base_url: anchors::host(&content).map(host_url).unwrap_or_default(),
        source: SourceKind::Markdown,
    };

    let mut ids = IdAllocator::new();
    let interfaces = outline
        .sections
        .iter()
        .filter_map(section_draft)
        .map(|draft| draft.build(&mut ids))
        .collect();

    assemble(meta, interfaces)
}

/// The dialect documents a bare `host:port`; a host that already carries a
/// scheme is used as-is.
fn host_url(host: String) -> String {
    if host.contains("://") {
        host
    } else {
        format!("http://{host}")
    }
}

fn section_draft(section: &Section<'_>) -> Option<InterfaceDraft> {
    let text = section.text();

    let Some(path) = anchors::path(&text) else {
        log::debug!("dropping section \"{}\": no interface path", section.summary);
        return None;
    };
    let method = anchors::method(&text).unwrap_or_else(|| DEFAULT_METHOD.to_string());
    let Some(mut draft) = InterfaceDraft::new(&path, &method) else {
        log::debug!(
            "dropping section \"{}\": unsupported method {method}",
            section.summary
        );
        return None;
    };

    let request_type =
        anchors::request_content_type(&text).unwrap_or_else(|| DEFAULT_REQUEST_TYPE.to_string());
    let response_type =
        anchors::response_content_type(&text).unwrap_or_else(|| DEFAULT_RESPONSE_TYPE.to_string());
    let request_example = anchors::code_block(&section.lines, anchors::REQUEST_EXAMPLE);

    draft.summary = section.summary.clone();
    draft.description = anchors::description(&text).unwrap_or_default();
    draft.tags = section
        .category
        .iter()
        .filter(|c| !c.is_empty())
        .cloned()
        .collect();

    draft.parameters = table::find_table(&section.lines, table::REQUEST_PARAMETERS)
        .map(|t| table::request_parameters(&t))
        .unwrap_or_default();
    draft.response_parameters = table::find_table(&section.lines, table::RESPONSE_PARAMETERS)
        .map(|t| table::response_fields(&t))
        .unwrap_or_default();
    draft.responses =
        table::status_codes(table::find_table(&section.lines, table::RESPONSE_STATUS).as_ref());
    draft.response_example = anchors::code_block(&section.lines, anchors::RESPONSE_EXAMPLE);

    if request_example.is_some() || draft.method.expects_body() {
        draft.request_body = Some(RequestBody {
            required: true,
            description: String::new(),
            content_types: vec![request_type.clone()],
            schema: None,
            example: request_example.map(Value::String),
            schema_ref: None,
        });
    }
    draft.consumes = vec![request_type];
    draft.produces = vec![response_type];

    Some(draft)
}
