//! Constructors shared by the structured and Markdown pipelines so both
//! produce the same canonical shape.
//!
//! Callers classify candidates first: a draft only exists for a candidate with
//! a path and a recognized verb, so nothing here can fail.

use indexmap::{IndexMap, IndexSet};

use super::interface::{
    HttpMethod, Interface, ParamType, Parameter, RequestBody, ResponseField, ResponseSpec,
};

/// First interface ID handed out by every parse. Keeps IDs six digits wide.
pub const ID_FLOOR: u64 = 100_000;

/// Indentation marker the Markdown dialect uses for nested table rows.
pub const NESTING_MARKER: &str = "&emsp;";

/// Sequential interface IDs for a single parse call.
///
/// Each parse owns its allocator, so concurrent parses never share a counter
/// and repeated parses of the same input yield the same IDs.
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: ID_FLOOR }
    }

    pub fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// An interface candidate that has passed classification but has no ID yet.
#[derive(Debug, Clone)]
pub struct InterfaceDraft {
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
    pub response_parameters: Vec<ResponseField>,
    pub response_example: Option<String>,
}

impl InterfaceDraft {
    /// Classify a raw path/verb pair. Returns `None` for a candidate that must
    /// be dropped: blank path or a method outside the verb set.
    pub fn new(path: &str, method: &str) -> Option<Self> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        let method = HttpMethod::parse(method)?;
        Some(Self {
            path: path.to_string(),
            method,
            summary: String::new(),
            description: String::new(),
            tags: IndexSet::new(),
            operation_id: String::new(),
            parameters: Vec::new(),
            request_body: None,
            responses: IndexMap::new(),
            deprecated: false,
            consumes: Vec::new(),
            produces: Vec::new(),
            response_parameters: Vec::new(),
            response_example: None,
        })
    }

    /// Assign the next ID and freeze the draft into an [`Interface`].
    pub fn build(self, ids: &mut IdAllocator) -> Interface {
        Interface {
            id: ids.next_id(),
            path: self.path,
            method: self.method,
            summary: self.summary,
            description: self.description,
            tags: self.tags,
            operation_id: self.operation_id,
            parameters: self.parameters,
            request_body: self.request_body,
            responses: self.responses,
            deprecated: self.deprecated,
            consumes: self.consumes,
            produces: self.produces,
            response_parameters: self.response_parameters,
            response_example: self.response_example,
        }
    }
}

/// Compose a parameter type. `array` with a known item type becomes `array<T>`;
/// a blank base falls back to `string`.
pub fn compose_type(base: &str, item: Option<&str>) -> ParamType {
    let base = base.trim();
    match (base, item.map(str::trim).filter(|i| !i.is_empty())) {
        ("", _) => ParamType::Primitive("string".to_string()),
        ("array", Some(item)) => ParamType::Array(item.to_string()),
        (base, _) => ParamType::Primitive(base.to_string()),
    }
}

/// Strip every leading nesting marker from a table cell.
/// Returns the bare name and whether any marker was present.
pub fn strip_nesting(raw: &str) -> (String, bool) {
    let mut name = raw.trim();
    let mut nested = false;
    while let Some(rest) = name.strip_prefix(NESTING_MARKER) {
        name = rest;
        nested = true;
    }
    (name.trim().to_string(), nested)
}

/// A response with only a description, as the Markdown status table yields.
pub fn response_spec(description: &str) -> ResponseSpec {
    ResponseSpec {
        description: description.to_string(),
        ..ResponseSpec::default()
    }
}
